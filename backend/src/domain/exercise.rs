//! Exercise entries embedded in a user's log.
//!
//! Exercises have no identity of their own: they are owned by exactly one
//! user and only ever appended to the tail of that user's list.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Storage and wire format of an exercise date.
const ISO_DATE_FORMAT: &str = "%Y-%m-%d";
/// Day-of-week, month, day, year rendering, e.g. `Sun Jan 15 2023`.
const DAY_STRING_FORMAT: &str = "%a %b %d %Y";

/// Validation errors returned by the exercise constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExerciseValidationError {
    /// The description was empty or whitespace.
    EmptyDescription,
    /// The duration was not a positive whole number of minutes.
    InvalidDuration,
    /// The date was not a valid `YYYY-MM-DD` calendar date.
    InvalidDate,
}

impl fmt::Display for ExerciseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDescription => write!(f, "description must not be empty"),
            Self::InvalidDuration => {
                write!(f, "duration must be a positive whole number of minutes")
            }
            Self::InvalidDate => write!(f, "date must be a calendar date in YYYY-MM-DD form"),
        }
    }
}

impl std::error::Error for ExerciseValidationError {}

/// Free-text description of the activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Description(String);

impl Description {
    /// Validate and construct a [`Description`].
    pub fn new(description: impl Into<String>) -> Result<Self, ExerciseValidationError> {
        let description = description.into();
        if description.trim().is_empty() {
            return Err(ExerciseValidationError::EmptyDescription);
        }
        Ok(Self(description))
    }
}

impl AsRef<str> for Description {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl From<Description> for String {
    fn from(value: Description) -> Self {
        value.0
    }
}

impl TryFrom<String> for Description {
    type Error = ExerciseValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Exercise length in whole minutes; always at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct DurationMinutes(u32);

impl DurationMinutes {
    /// Validate and construct a [`DurationMinutes`].
    pub const fn new(minutes: u32) -> Result<Self, ExerciseValidationError> {
        if minutes == 0 {
            return Err(ExerciseValidationError::InvalidDuration);
        }
        Ok(Self(minutes))
    }

    /// Parse form input such as `"25"`, ignoring surrounding whitespace.
    ///
    /// A decimal whose fraction is all zeros (`"25.0"`) names a whole number
    /// of minutes and is accepted.
    ///
    /// # Examples
    /// ```
    /// use exercise_tracker::domain::DurationMinutes;
    ///
    /// assert_eq!(DurationMinutes::parse(" 25 ").map(|d| d.minutes()), Ok(25));
    /// assert_eq!(DurationMinutes::parse("25.0").map(|d| d.minutes()), Ok(25));
    /// assert!(DurationMinutes::parse("2.5").is_err());
    /// assert!(DurationMinutes::parse("twenty").is_err());
    /// assert!(DurationMinutes::parse("0").is_err());
    /// ```
    pub fn parse(raw: &str) -> Result<Self, ExerciseValidationError> {
        let trimmed = raw.trim();
        let whole = match trimmed.split_once('.') {
            Some((whole, fraction)) if fraction.bytes().all(|byte| byte == b'0') => whole,
            Some(_) => return Err(ExerciseValidationError::InvalidDuration),
            None => trimmed,
        };
        let minutes = whole
            .parse::<u32>()
            .map_err(|_| ExerciseValidationError::InvalidDuration)?;
        Self::new(minutes)
    }

    /// Number of minutes.
    pub const fn minutes(self) -> u32 {
        self.0
    }
}

impl From<DurationMinutes> for u32 {
    fn from(value: DurationMinutes) -> Self {
        value.0
    }
}

impl TryFrom<u32> for DurationMinutes {
    type Error = ExerciseValidationError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Calendar date of an exercise, held in zero-padded `YYYY-MM-DD` form.
///
/// Because the form is zero-padded and ordered year, month, day, comparing
/// the text of two dates gives the same answer as comparing the dates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ExerciseDate(String);

fn has_iso_shape(raw: &str) -> bool {
    raw.len() == 10
        && raw.bytes().enumerate().all(|(index, byte)| match index {
            4 | 7 => byte == b'-',
            _ => byte.is_ascii_digit(),
        })
}

impl ExerciseDate {
    /// Validate and construct an [`ExerciseDate`] from `YYYY-MM-DD` text.
    ///
    /// # Examples
    /// ```
    /// use exercise_tracker::domain::ExerciseDate;
    ///
    /// let date = ExerciseDate::parse("2023-01-15").expect("valid date");
    /// assert_eq!(date.as_ref(), "2023-01-15");
    /// assert_eq!(date.to_day_string(), "Sun Jan 15 2023");
    /// assert!(ExerciseDate::parse("2023-1-15").is_err());
    /// assert!(ExerciseDate::parse("2023-02-30").is_err());
    /// ```
    pub fn parse(raw: &str) -> Result<Self, ExerciseValidationError> {
        if !has_iso_shape(raw) {
            return Err(ExerciseValidationError::InvalidDate);
        }
        NaiveDate::parse_from_str(raw, ISO_DATE_FORMAT)
            .map(Self::from_naive)
            .map_err(|_| ExerciseValidationError::InvalidDate)
    }

    /// Build an [`ExerciseDate`] from a calendar date.
    pub fn from_naive(date: NaiveDate) -> Self {
        Self(date.format(ISO_DATE_FORMAT).to_string())
    }

    /// Render the date as `Www Mmm DD YYYY`.
    pub fn to_day_string(&self) -> String {
        // The stored text was validated on construction.
        NaiveDate::parse_from_str(&self.0, ISO_DATE_FORMAT)
            .map(|date| date.format(DAY_STRING_FORMAT).to_string())
            .unwrap_or_else(|_| self.0.clone())
    }
}

impl AsRef<str> for ExerciseDate {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for ExerciseDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<ExerciseDate> for String {
    fn from(value: ExerciseDate) -> Self {
        value.0
    }
}

impl TryFrom<String> for ExerciseDate {
    type Error = ExerciseValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

/// One logged activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    /// What was done.
    pub description: Description,
    /// How long it took.
    pub duration: DurationMinutes,
    /// When it happened.
    pub date: ExerciseDate,
}

impl Exercise {
    /// Assemble an exercise from validated parts.
    pub fn new(description: Description, duration: DurationMinutes, date: ExerciseDate) -> Self {
        Self {
            description,
            duration,
            date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("2023-01-15", "Sun Jan 15 2023")]
    #[case("2024-01-01", "Mon Jan 01 2024")]
    #[case("2024-02-29", "Thu Feb 29 2024")]
    fn day_string_matches_calendar(#[case] raw: &str, #[case] expected: &str) {
        let date = ExerciseDate::parse(raw).expect("valid date");
        assert_eq!(date.to_day_string(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("2023/01/15")]
    #[case("15-01-2023")]
    #[case("2023-1-5")]
    #[case("2023-13-01")]
    #[case("2023-02-29")]
    #[case("+2023-01-15")]
    fn date_rejects_malformed_input(#[case] raw: &str) {
        assert_eq!(
            ExerciseDate::parse(raw),
            Err(ExerciseValidationError::InvalidDate)
        );
    }

    #[rstest]
    #[case("0")]
    #[case("-5")]
    #[case("2.5")]
    #[case("abc")]
    #[case("")]
    #[case(".0")]
    #[case("0.0")]
    fn duration_rejects_non_positive_or_non_integer(#[case] raw: &str) {
        assert_eq!(
            DurationMinutes::parse(raw),
            Err(ExerciseValidationError::InvalidDuration)
        );
    }

    #[rstest]
    #[case("25", 25)]
    #[case(" 25 ", 25)]
    #[case("25.0", 25)]
    #[case("25.", 25)]
    #[case("90.000", 90)]
    fn duration_accepts_whole_minutes(#[case] raw: &str, #[case] minutes: u32) {
        assert_eq!(DurationMinutes::parse(raw).map(DurationMinutes::minutes), Ok(minutes));
    }

    #[rstest]
    fn description_rejects_blank_text() {
        assert_eq!(
            Description::new("  "),
            Err(ExerciseValidationError::EmptyDescription)
        );
    }

    #[rstest]
    fn text_order_matches_calendar_order() {
        let earlier = ExerciseDate::parse("2023-09-30").expect("valid date");
        let later = ExerciseDate::parse("2023-10-01").expect("valid date");
        assert!(earlier.as_ref() < later.as_ref());
    }

    #[rstest]
    fn exercise_serialises_with_plain_fields() {
        let exercise = Exercise::new(
            Description::new("test run").expect("description"),
            DurationMinutes::new(25).expect("duration"),
            ExerciseDate::parse("2023-01-15").expect("date"),
        );
        let value = serde_json::to_value(&exercise).expect("serialise exercise");
        assert_eq!(
            value,
            serde_json::json!({
                "description": "test run",
                "duration": 25,
                "date": "2023-01-15",
            })
        );
    }
}
