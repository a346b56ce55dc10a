//! Port abstraction for user persistence adapters and their errors.
//!
//! A user is stored as a single document: identity, username and the
//! ordered list of exercises embedded in it.
use async_trait::async_trait;

use crate::domain::{Exercise, User, UserId, UserRecord, Username};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "user repository query failed: {message}",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a user with an empty exercise list and return the stored row.
    ///
    /// The identifier is assigned by the store.
    async fn create(&self, username: &Username) -> Result<User, UserPersistenceError>;

    /// Every user in storage order, without exercises.
    async fn list(&self) -> Result<Vec<User>, UserPersistenceError>;

    /// Append `exercise` to the tail of the user's list in one atomic write.
    ///
    /// Returns `None` when no user has the given identifier.
    async fn append_exercise(
        &self,
        id: &UserId,
        exercise: &Exercise,
    ) -> Result<Option<User>, UserPersistenceError>;

    /// Fetch a user together with their exercises.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<UserRecord>, UserPersistenceError>;
}
