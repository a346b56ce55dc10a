//! In-process user repository.
//!
//! Backs the service when no database URL is configured and drives the HTTP
//! and behaviour tests. Records live behind a mutex that is never held
//! across an await point; insertion order is the listing order.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{Exercise, User, UserId, UserRecord, Username};

/// Volatile [`UserRepository`] holding every record in memory.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    records: Mutex<Vec<UserRecord>>,
}

impl InMemoryUserRepository {
    fn lock(&self) -> Result<MutexGuard<'_, Vec<UserRecord>>, UserPersistenceError> {
        self.records
            .lock()
            .map_err(|_| UserPersistenceError::query("in-memory user store lock poisoned"))
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, username: &Username) -> Result<User, UserPersistenceError> {
        let user = User::new(UserId::random(), username.clone());
        self.lock()?.push(UserRecord {
            user: user.clone(),
            exercises: Vec::new(),
        });
        Ok(user)
    }

    async fn list(&self) -> Result<Vec<User>, UserPersistenceError> {
        Ok(self
            .lock()?
            .iter()
            .map(|record| record.user.clone())
            .collect())
    }

    async fn append_exercise(
        &self,
        id: &UserId,
        exercise: &Exercise,
    ) -> Result<Option<User>, UserPersistenceError> {
        let mut records = self.lock()?;
        Ok(records
            .iter_mut()
            .find(|record| record.user.id() == id)
            .map(|record| {
                record.exercises.push(exercise.clone());
                record.user.clone()
            }))
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<UserRecord>, UserPersistenceError> {
        Ok(self
            .lock()?
            .iter()
            .find(|record| record.user.id() == id)
            .cloned())
    }
}
