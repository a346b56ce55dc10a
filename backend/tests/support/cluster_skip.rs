//! Opt-in and skip policy for suites that need an embedded PostgreSQL
//! cluster.
//!
//! `RUN_PG_EMBEDDED=1` opts a run into the database suites. Once opted in, a
//! cluster that fails to start is a hard failure unless `SKIP_TEST_CLUSTER`
//! is also truthy, so CI breakage is not masked.

fn is_truthy(name: &str) -> bool {
    std::env::var(name)
        .map(|value| matches!(value.to_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}

/// True when `RUN_PG_EMBEDDED` asks for the database suites.
pub fn embedded_postgres_requested() -> bool {
    is_truthy("RUN_PG_EMBEDDED")
}

/// Handles embedded cluster setup failures consistently.
///
/// Prints a skip marker and returns `None` when `SKIP_TEST_CLUSTER` is
/// truthy; panics otherwise.
pub fn handle_cluster_setup_failure<T>(reason: impl std::fmt::Display) -> Option<T> {
    if is_truthy("SKIP_TEST_CLUSTER") {
        eprintln!("SKIP-TEST-CLUSTER: {reason}");
        None
    } else {
        panic!("Test cluster setup failed: {reason}. Set SKIP_TEST_CLUSTER=1 to skip.");
    }
}
