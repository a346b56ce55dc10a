//! Domain primitives, aggregates and services.
//!
//! Purpose: define strongly typed entities used by the HTTP and persistence
//! adapters, plus the services implementing the driving ports. Types are
//! immutable once validated; invariants are documented on each type.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic error payload and category.
//! - User / UserId / Username: registered users.
//! - Exercise and its parts: entries embedded in a user's list.
//! - LogQuery / ExerciseLog: filtered log reads.
//! - UserService / ExerciseLogService: driving port implementations.

pub mod error;
pub mod exercise;
pub mod exercise_log;
pub mod exercise_log_service;
pub mod ports;
pub mod trace_id;
pub mod user;
pub mod user_service;

pub use self::error::{Error, ErrorCode, ErrorValidationError, TRACE_ID_HEADER};
pub use self::exercise::{
    Description, DurationMinutes, Exercise, ExerciseDate, ExerciseValidationError,
};
pub use self::exercise_log::{
    DEFAULT_LOG_LIMIT, ExerciseLog, ExerciseReceipt, LOWER_DATE_BOUND, LogQuery,
    UPPER_DATE_BOUND, UserRecord,
};
pub use self::exercise_log_service::ExerciseLogService;
pub use self::trace_id::TraceId;
pub use self::user::{User, UserId, UserValidationError, Username};
pub use self::user_service::UserService;
