//! Shared helpers for integration tests that need embedded PostgreSQL.

pub mod cluster_skip;
pub mod pg_embed;

pub use cluster_skip::{embedded_postgres_requested, handle_cluster_setup_failure};
pub use pg_embed::test_cluster;
