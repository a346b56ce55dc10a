//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{ExerciseLogCommand, ExerciseLogQuery, UsersCommand, UsersQuery};

/// Parameter object bundling all port implementations for HTTP handlers.
#[derive(Clone)]
pub struct HttpStatePorts {
    pub users: Arc<dyn UsersCommand>,
    pub users_query: Arc<dyn UsersQuery>,
    pub exercises: Arc<dyn ExerciseLogCommand>,
    pub exercises_query: Arc<dyn ExerciseLogQuery>,
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub users: Arc<dyn UsersCommand>,
    pub users_query: Arc<dyn UsersQuery>,
    pub exercises: Arc<dyn ExerciseLogCommand>,
    pub exercises_query: Arc<dyn ExerciseLogQuery>,
}

impl HttpState {
    /// Construct state from a ports bundle.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use exercise_tracker::domain::{ExerciseLogService, UserService};
    /// use exercise_tracker::inbound::http::state::{HttpState, HttpStatePorts};
    /// use exercise_tracker::outbound::memory::InMemoryUserRepository;
    /// use mockable::DefaultClock;
    ///
    /// let repo = Arc::new(InMemoryUserRepository::default());
    /// let users = Arc::new(UserService::new(repo.clone()));
    /// let exercises = Arc::new(ExerciseLogService::new(repo, Arc::new(DefaultClock)));
    /// let state = HttpState::new(HttpStatePorts {
    ///     users: users.clone(),
    ///     users_query: users,
    ///     exercises: exercises.clone(),
    ///     exercises_query: exercises,
    /// });
    /// let _users = state.users.clone();
    /// ```
    pub fn new(ports: HttpStatePorts) -> Self {
        let HttpStatePorts {
            users,
            users_query,
            exercises,
            exercises_query,
        } = ports;
        Self {
            users,
            users_query,
            exercises,
            exercises_query,
        }
    }
}

impl From<HttpStatePorts> for HttpState {
    fn from(ports: HttpStatePorts) -> Self {
        Self::new(ports)
    }
}
