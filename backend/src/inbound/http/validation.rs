//! Shared validation helpers for inbound HTTP adapters.
//!
//! Forms and query strings arrive as optional text; these helpers turn them
//! into domain values or `invalid_request` errors carrying the offending
//! field, a machine-readable code and, where useful, the rejected value.

use serde_json::json;

use crate::domain::{
    Description, DurationMinutes, Error, ExerciseDate, ExerciseValidationError, UserId, Username,
};

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    MissingField,
    InvalidUuid,
    InvalidDuration,
    InvalidDate,
    EmptyUsername,
    EmptyDescription,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::MissingField => "missing_field",
            ErrorCode::InvalidUuid => "invalid_uuid",
            ErrorCode::InvalidDuration => "invalid_duration",
            ErrorCode::InvalidDate => "invalid_date",
            ErrorCode::EmptyUsername => "empty_username",
            ErrorCode::EmptyDescription => "empty_description",
        }
    }
}

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(&self) -> &str {
        self.0
    }
}

pub(crate) const USER_ID: FieldName = FieldName::new("_id");
pub(crate) const USERNAME: FieldName = FieldName::new("username");
pub(crate) const DESCRIPTION: FieldName = FieldName::new("description");
pub(crate) const DURATION: FieldName = FieldName::new("duration");
pub(crate) const DATE: FieldName = FieldName::new("date");
pub(crate) const FROM: FieldName = FieldName::new("from");
pub(crate) const TO: FieldName = FieldName::new("to");

/// Builder for validation errors with field context.
struct ValidationError {
    field: String,
    message: String,
}

impl ValidationError {
    fn new(field: FieldName, message: impl Into<String>) -> Self {
        Self {
            field: field.as_str().to_owned(),
            message: message.into(),
        }
    }

    fn with_code(self, code: ErrorCode) -> Error {
        Error::invalid_request(self.message).with_details(json!({
            "field": self.field,
            "code": code.as_str(),
        }))
    }

    fn with_value(self, code: ErrorCode, value: impl Into<String>) -> Error {
        Error::invalid_request(self.message).with_details(json!({
            "field": self.field,
            "value": value.into(),
            "code": code.as_str(),
        }))
    }
}

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    ValidationError::new(field, format!("missing required field: {}", field.as_str()))
        .with_code(ErrorCode::MissingField)
}

fn require(value: Option<String>, field: FieldName) -> Result<String, Error> {
    value.ok_or_else(|| missing_field_error(field))
}

/// Blank optional inputs count as absent.
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|raw| !raw.trim().is_empty())
}

pub(crate) fn parse_user_id(value: &str) -> Result<UserId, Error> {
    UserId::new(value).map_err(|_| {
        ValidationError::new(USER_ID, "user id must be a valid UUID")
            .with_value(ErrorCode::InvalidUuid, value)
    })
}

pub(crate) fn parse_username(value: Option<String>) -> Result<Username, Error> {
    let raw = require(value, USERNAME)?;
    Username::new(raw).map_err(|_| {
        ValidationError::new(USERNAME, "username must not be empty")
            .with_code(ErrorCode::EmptyUsername)
    })
}

pub(crate) fn parse_description(value: Option<String>) -> Result<Description, Error> {
    let raw = require(value, DESCRIPTION)?;
    Description::new(raw).map_err(|_| {
        ValidationError::new(DESCRIPTION, "description must not be empty")
            .with_code(ErrorCode::EmptyDescription)
    })
}

pub(crate) fn parse_duration(value: Option<String>) -> Result<DurationMinutes, Error> {
    let raw = require(value, DURATION)?;
    DurationMinutes::parse(&raw).map_err(|err: ExerciseValidationError| {
        ValidationError::new(DURATION, err.to_string()).with_value(ErrorCode::InvalidDuration, raw)
    })
}

/// Parse an optional `YYYY-MM-DD` field; blank input yields `None`.
pub(crate) fn parse_optional_date(
    value: Option<String>,
    field: FieldName,
) -> Result<Option<ExerciseDate>, Error> {
    non_blank(value)
        .map(|raw| {
            ExerciseDate::parse(raw.trim()).map_err(|_| {
                ValidationError::new(
                    field,
                    format!("{} must be a calendar date in YYYY-MM-DD form", field.as_str()),
                )
                .with_value(ErrorCode::InvalidDate, raw)
            })
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::Value;

    fn detail<'a>(error: &'a Error, key: &str) -> Option<&'a Value> {
        error.details().and_then(|details| details.get(key))
    }

    #[rstest]
    fn missing_username_reports_field() {
        let error = parse_username(None).expect_err("missing username");
        assert_eq!(detail(&error, "field"), Some(&json!("username")));
        assert_eq!(detail(&error, "code"), Some(&json!("missing_field")));
    }

    #[rstest]
    fn blank_username_is_rejected() {
        let error = parse_username(Some("   ".to_owned())).expect_err("blank username");
        assert_eq!(detail(&error, "code"), Some(&json!("empty_username")));
    }

    #[rstest]
    fn malformed_user_id_echoes_value() {
        let error = parse_user_id("abc").expect_err("malformed id");
        assert_eq!(detail(&error, "field"), Some(&json!("_id")));
        assert_eq!(detail(&error, "code"), Some(&json!("invalid_uuid")));
        assert_eq!(detail(&error, "value"), Some(&json!("abc")));
    }

    #[rstest]
    #[case("0")]
    #[case("ten")]
    #[case("1.5")]
    fn bad_duration_is_rejected(#[case] raw: &str) {
        let error = parse_duration(Some(raw.to_owned())).expect_err("bad duration");
        assert_eq!(detail(&error, "code"), Some(&json!("invalid_duration")));
        assert_eq!(detail(&error, "value"), Some(&json!(raw)));
    }

    #[rstest]
    #[case(None)]
    #[case(Some(""))]
    #[case(Some("  "))]
    fn absent_or_blank_date_is_none(#[case] raw: Option<&str>) {
        let parsed = parse_optional_date(raw.map(str::to_owned), DATE).expect("accepted");
        assert!(parsed.is_none());
    }

    #[rstest]
    fn malformed_date_names_its_field() {
        let error = parse_optional_date(Some("01/15/2023".to_owned()), FROM)
            .expect_err("malformed date");
        assert_eq!(detail(&error, "field"), Some(&json!("from")));
        assert_eq!(detail(&error, "code"), Some(&json!("invalid_date")));
    }

    #[rstest]
    fn well_formed_date_is_parsed() {
        let parsed = parse_optional_date(Some("2023-01-15".to_owned()), TO)
            .expect("accepted")
            .expect("present");
        assert_eq!(parsed.as_ref(), "2023-01-15");
    }
}
