//! PostgreSQL-backed `UserRepository` implementation using Diesel ORM.
//!
//! Each user is one row; the exercise list lives in a JSONB array column and
//! grows through a single `exercises || $1` update so concurrent appends never
//! overwrite each other.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use serde_json::Value;
use tracing::debug;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{Exercise, User, UserId, UserRecord, Username};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{ExerciseDocument, NewUserRow, UserDocumentRow, UserRow};
use super::pool::{DbPool, PoolError};
use super::schema::users;

/// Diesel-backed implementation of the `UserRepository` port.
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> UserPersistenceError {
    map_basic_pool_error(error, UserPersistenceError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> UserPersistenceError {
    map_basic_diesel_error(
        error,
        UserPersistenceError::query,
        UserPersistenceError::connection,
    )
}

fn row_to_user(row: UserRow) -> Result<User, UserPersistenceError> {
    User::try_from(row).map_err(|err| UserPersistenceError::query(err.to_string()))
}

fn row_to_record(row: UserDocumentRow) -> Result<UserRecord, UserPersistenceError> {
    UserRecord::try_from(row).map_err(|err| {
        debug!(error = %err, "stored user document could not be decoded");
        UserPersistenceError::query(err.to_string())
    })
}

fn exercise_array(exercise: &Exercise) -> Result<Value, UserPersistenceError> {
    let document = serde_json::to_value(ExerciseDocument::from(exercise))
        .map_err(|err| UserPersistenceError::query(err.to_string()))?;
    Ok(Value::Array(vec![document]))
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn create(&self, username: &Username) -> Result<User, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let new_row = NewUserRow {
            username: username.as_ref(),
        };

        let row: UserRow = diesel::insert_into(users::table)
            .values(&new_row)
            .returning(UserRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        row_to_user(row)
    }

    async fn list(&self) -> Result<Vec<User>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<UserRow> = users::table
            .order((users::created_at.asc(), users::id.asc()))
            .select(UserRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(row_to_user).collect()
    }

    async fn append_exercise(
        &self,
        id: &UserId,
        exercise: &Exercise,
    ) -> Result<Option<User>, UserPersistenceError> {
        let appended = exercise_array(exercise)?;
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<UserRow> = diesel::update(users::table.find(*id.as_uuid()))
            .set(users::exercises.eq(users::exercises.concat(appended)))
            .returning(UserRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_user).transpose()
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<UserRecord>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<UserDocumentRow> = users::table
            .find(*id.as_uuid())
            .select(UserDocumentRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_record).transpose()
    }
}
