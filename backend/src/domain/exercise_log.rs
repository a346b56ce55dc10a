//! Filtered views over a user's exercise list.

use super::{Exercise, ExerciseDate, User};

/// Lower bound applied when a log query has no `from` date.
pub const LOWER_DATE_BOUND: &str = "0000-00-00";
/// Upper bound applied when a log query has no `to` date.
pub const UPPER_DATE_BOUND: &str = "9999-99-99";
/// Maximum number of entries returned when no usable limit is supplied.
pub const DEFAULT_LOG_LIMIT: usize = 999;

/// Date window and size cap for a log query.
///
/// Both bounds are inclusive and compared as `YYYY-MM-DD` text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogQuery {
    /// Earliest date to include.
    pub from: Option<ExerciseDate>,
    /// Latest date to include.
    pub to: Option<ExerciseDate>,
    /// Maximum number of entries; `None` means [`DEFAULT_LOG_LIMIT`].
    pub limit: Option<usize>,
}

impl LogQuery {
    /// Interpret raw `limit` input.
    ///
    /// Only positive whole numbers are honoured; anything else yields `None`
    /// so the default limit applies.
    ///
    /// # Examples
    /// ```
    /// use exercise_tracker::domain::LogQuery;
    ///
    /// assert_eq!(LogQuery::parse_limit("2"), Some(2));
    /// assert_eq!(LogQuery::parse_limit("0"), None);
    /// assert_eq!(LogQuery::parse_limit("-1"), None);
    /// assert_eq!(LogQuery::parse_limit("abc"), None);
    /// ```
    pub fn parse_limit(raw: &str) -> Option<usize> {
        raw.trim().parse::<usize>().ok().filter(|limit| *limit > 0)
    }

    /// Inclusive lower bound as text.
    pub fn from_bound(&self) -> &str {
        self.from.as_ref().map_or(LOWER_DATE_BOUND, AsRef::as_ref)
    }

    /// Inclusive upper bound as text.
    pub fn to_bound(&self) -> &str {
        self.to.as_ref().map_or(UPPER_DATE_BOUND, AsRef::as_ref)
    }

    /// Limit in force for this query.
    pub fn effective_limit(&self) -> usize {
        self.limit.filter(|limit| *limit > 0).unwrap_or(DEFAULT_LOG_LIMIT)
    }

    /// Select matching exercises in insertion order, then truncate.
    pub fn apply(&self, exercises: &[Exercise]) -> Vec<Exercise> {
        let from = self.from_bound();
        let to = self.to_bound();
        exercises
            .iter()
            .filter(|exercise| {
                let date = exercise.date.as_ref();
                from <= date && date <= to
            })
            .take(self.effective_limit())
            .cloned()
            .collect()
    }
}

/// A user together with every exercise stored for them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    /// The owning user.
    pub user: User,
    /// Exercises in insertion order.
    pub exercises: Vec<Exercise>,
}

/// Result of appending one exercise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseReceipt {
    /// The user the exercise was appended to.
    pub user: User,
    /// The stored exercise.
    pub exercise: Exercise,
}

/// Filtered, truncated projection of a user's exercises.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseLog {
    /// The owning user.
    pub user: User,
    /// Matching entries in insertion order.
    pub entries: Vec<Exercise>,
}

impl ExerciseLog {
    /// Build a log by applying `query` to a stored record.
    pub fn from_record(record: UserRecord, query: &LogQuery) -> Self {
        let entries = query.apply(&record.exercises);
        Self {
            user: record.user,
            entries,
        }
    }

    /// Number of returned entries.
    pub fn count(&self) -> usize {
        self.entries.len()
    }
}
