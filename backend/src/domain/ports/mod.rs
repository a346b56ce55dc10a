//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driving ports (`*Command`, `*Query`) are called by inbound adapters;
//! driven ports (`*Repository`) are implemented by outbound adapters and
//! report failures through typed error enums.

mod macros;
pub(crate) use macros::define_port_error;

mod exercise_log_command;
mod exercise_log_query;
mod user_repository;
mod users_command;
mod users_query;

pub use exercise_log_command::{AppendExerciseRequest, ExerciseLogCommand};
#[cfg(test)]
pub use exercise_log_command::MockExerciseLogCommand;
pub use exercise_log_query::ExerciseLogQuery;
#[cfg(test)]
pub use exercise_log_query::MockExerciseLogQuery;
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserPersistenceError, UserRepository};
pub use users_command::UsersCommand;
#[cfg(test)]
pub use users_command::MockUsersCommand;
pub use users_query::UsersQuery;
#[cfg(test)]
pub use users_query::MockUsersQuery;
