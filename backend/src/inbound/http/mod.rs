//! HTTP inbound adapter exposing REST endpoints.
//!
//! Every `/api` route is registered through [`api_scope`] so the server and
//! the tests share one routing table, extractor configuration and header
//! policy.

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::middleware::DefaultHeaders;
use actix_web::{Scope, web};

use crate::domain::Error;

pub mod cache_control;
pub mod error;
pub mod exercises;
pub mod health;
pub mod landing;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;
pub mod validation;

pub use error::ApiResult;

fn form_config() -> web::FormConfig {
    web::FormConfig::default().error_handler(|err, _req| {
        Error::invalid_request(format!("invalid form body: {err}")).into()
    })
}

fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| {
        Error::invalid_request(format!("invalid query string: {err}")).into()
    })
}

/// Register API handlers and extractor configuration on `cfg`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(form_config())
        .app_data(query_config())
        .service(users::create_user)
        .service(users::list_users)
        .service(exercises::append_exercise)
        .service(exercises::exercise_log);
}

/// The `/api` scope with `Cache-Control: no-store` on every response.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use exercise_tracker::inbound::http::api_scope;
///
/// let _app = App::new().service(api_scope());
/// ```
pub fn api_scope() -> Scope<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    web::scope("/api")
        .wrap(DefaultHeaders::new().add(cache_control::no_store_header()))
        .configure(configure)
}
