//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};
use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;

use crate::Trace;
use crate::domain::{ExerciseLogService, UserService};
use crate::inbound::http::api_scope;
use crate::inbound::http::state::{HttpState, HttpStatePorts};
use crate::outbound::memory::InMemoryUserRepository;

/// Clock frozen at `2023-01-15T12:00:00Z`, a Sunday.
pub struct FrozenClock;

impl FrozenClock {
    fn instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2023, 1, 15, 12, 0, 0)
            .single()
            .expect("valid frozen timestamp")
    }
}

impl Clock for FrozenClock {
    fn local(&self) -> DateTime<Local> {
        Self::instant().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        Self::instant()
    }
}

/// Handler state over a fresh in-memory repository and [`FrozenClock`].
pub fn in_memory_state() -> HttpState {
    let repo = Arc::new(InMemoryUserRepository::default());
    let users = Arc::new(UserService::new(repo.clone()));
    let exercises = Arc::new(ExerciseLogService::new(repo, Arc::new(FrozenClock)));
    HttpState::new(HttpStatePorts {
        users: users.clone(),
        users_query: users,
        exercises: exercises.clone(),
        exercises_query: exercises,
    })
}

/// App serving the API scope over `state`, wrapped in the trace middleware.
pub fn test_app(
    state: HttpState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .wrap(Trace)
        .service(api_scope())
}
