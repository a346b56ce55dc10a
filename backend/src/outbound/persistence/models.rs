//! Internal Diesel row structs and the stored exercise document shape.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain.

use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{
    Description, DurationMinutes, Exercise, ExerciseDate, ExerciseValidationError, User, UserId,
    UserRecord, UserValidationError, Username,
};

use super::schema::users;

/// Projection of a user row without exercises.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: Uuid,
    pub username: String,
}

impl TryFrom<UserRow> for User {
    type Error = UserValidationError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Ok(User::new(UserId::from_uuid(row.id), Username::new(row.username)?))
    }
}

/// Full user document including the embedded exercise array.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserDocumentRow {
    pub id: Uuid,
    pub username: String,
    pub exercises: serde_json::Value,
}

/// Insertable struct for creating user records; the id is generated by the
/// database.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub username: &'a str,
}

/// One element of the `exercises` JSONB array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct ExerciseDocument {
    pub description: String,
    pub duration: u32,
    pub date: String,
}

impl From<&Exercise> for ExerciseDocument {
    fn from(exercise: &Exercise) -> Self {
        Self {
            description: exercise.description.as_ref().to_owned(),
            duration: exercise.duration.minutes(),
            date: exercise.date.as_ref().to_owned(),
        }
    }
}

impl TryFrom<ExerciseDocument> for Exercise {
    type Error = ExerciseValidationError;

    fn try_from(document: ExerciseDocument) -> Result<Self, Self::Error> {
        Ok(Exercise::new(
            Description::new(document.description)?,
            DurationMinutes::new(document.duration)?,
            ExerciseDate::parse(&document.date)?,
        ))
    }
}

/// Reasons a stored document cannot be turned back into domain values.
#[derive(Debug, thiserror::Error)]
pub(crate) enum DocumentError {
    #[error("stored user is invalid: {0}")]
    User(#[from] UserValidationError),
    #[error("stored exercise is invalid: {0}")]
    Exercise(#[from] ExerciseValidationError),
    #[error("stored exercise array is malformed: {0}")]
    Json(#[from] serde_json::Error),
}

impl TryFrom<UserDocumentRow> for UserRecord {
    type Error = DocumentError;

    fn try_from(row: UserDocumentRow) -> Result<Self, Self::Error> {
        let user = User::new(UserId::from_uuid(row.id), Username::new(row.username)?);
        let documents: Vec<ExerciseDocument> = serde_json::from_value(row.exercises)?;
        let exercises = documents
            .into_iter()
            .map(Exercise::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(UserRecord { user, exercises })
    }
}
