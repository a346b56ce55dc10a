//! Shared cache-control policy for API responses.

use actix_web::http::header::{CACHE_CONTROL, HeaderName};

/// API responses reflect live storage state and must never be reused.
pub const NO_STORE: &str = "no-store";

/// Build the standard cache-control header tuple for API responses.
pub const fn no_store_header() -> (HeaderName, &'static str) {
    (CACHE_CONTROL, NO_STORE)
}
