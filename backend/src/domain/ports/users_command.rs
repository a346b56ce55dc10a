//! Driving port for registering users.

use async_trait::async_trait;

use crate::domain::{Error, User, Username};

/// Domain use-case port for creating users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersCommand: Send + Sync {
    /// Register a user and return the stored record.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] with `service_unavailable` when storage cannot be
    /// reached and `internal_error` when the write fails.
    async fn create_user(&self, username: Username) -> Result<User, Error>;
}
