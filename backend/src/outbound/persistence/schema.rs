//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly. Regenerate with
//! `diesel print-schema` when a migration changes the table.

diesel::table! {
    /// One row per user; exercises are embedded as a JSONB array in
    /// insertion order.
    users (id) {
        /// Primary key, generated by `gen_random_uuid()`.
        id -> Uuid,
        /// Registered name; never blank.
        username -> Text,
        /// `[{"description", "duration", "date"}]`.
        exercises -> Jsonb,
        /// Insertion timestamp, used for stable listing order.
        created_at -> Timestamptz,
    }
}
