//! Driving port for reading a user's exercise log.

use async_trait::async_trait;

use crate::domain::{Error, ExerciseLog, LogQuery, UserId};

/// Domain use-case port for filtered log reads.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExerciseLogQuery: Send + Sync {
    /// Return the user's exercises inside the query window, capped by its
    /// limit.
    ///
    /// # Errors
    ///
    /// Returns `not_found` when the user does not exist.
    async fn exercise_log(&self, user_id: &UserId, query: &LogQuery)
    -> Result<ExerciseLog, Error>;
}
