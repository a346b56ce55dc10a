//! Driving port for adding exercises to a user's log.

use async_trait::async_trait;

use crate::domain::{Description, DurationMinutes, Error, ExerciseDate, ExerciseReceipt, UserId};

/// Request to append one exercise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppendExerciseRequest {
    /// Owner of the new entry.
    pub user_id: UserId,
    /// What was done.
    pub description: Description,
    /// How long it took.
    pub duration: DurationMinutes,
    /// When it happened; `None` selects the current UTC date.
    pub date: Option<ExerciseDate>,
}

/// Domain use-case port for appending exercises.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExerciseLogCommand: Send + Sync {
    /// Append an exercise to the tail of the user's list.
    ///
    /// # Errors
    ///
    /// Returns `not_found` when the user does not exist, plus the storage
    /// errors described on [`super::UsersCommand::create_user`].
    async fn append_exercise(
        &self,
        request: AppendExerciseRequest,
    ) -> Result<ExerciseReceipt, Error>;
}
