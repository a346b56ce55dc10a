//! Builders wiring repository-backed services into HTTP state.

use std::sync::Arc;

use actix_web::web;
use mockable::{Clock, DefaultClock};

use exercise_tracker::domain::ports::UserRepository;
use exercise_tracker::domain::{ExerciseLogService, UserService};
use exercise_tracker::inbound::http::state::{HttpState, HttpStatePorts};
use exercise_tracker::outbound::memory::InMemoryUserRepository;
use exercise_tracker::outbound::persistence::DieselUserRepository;

use super::ServerConfig;

/// Build both services over one shared repository.
fn ports_for<R>(repo: Arc<R>, clock: Arc<dyn Clock>) -> HttpStatePorts
where
    R: UserRepository + 'static,
{
    let users = Arc::new(UserService::new(repo.clone()));
    let exercises = Arc::new(ExerciseLogService::new(repo, clock));
    HttpStatePorts {
        users: users.clone(),
        users_query: users,
        exercises: exercises.clone(),
        exercises_query: exercises,
    }
}

/// Build HTTP state backed by PostgreSQL when a pool is configured, else by
/// a process-local store.
pub fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let clock: Arc<dyn Clock> = Arc::new(DefaultClock);
    let ports = match &config.db_pool {
        Some(pool) => ports_for(Arc::new(DieselUserRepository::new(pool.clone())), clock),
        None => ports_for(Arc::new(InMemoryUserRepository::default()), clock),
    };
    web::Data::new(HttpState::new(ports))
}
