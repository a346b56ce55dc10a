//! HTTP server configuration object and helpers.

use std::net::SocketAddr;

use exercise_tracker::outbound::persistence::DbPool;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) cors_enabled: bool,
    pub(crate) db_pool: Option<DbPool>,
}

impl ServerConfig {
    /// Construct a server configuration bound to `bind_addr` with CORS
    /// enabled and no database.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            cors_enabled: true,
            db_pool: None,
        }
    }

    /// Toggle the permissive CORS layer.
    #[must_use]
    pub fn with_cors(mut self, enabled: bool) -> Self {
        self.cors_enabled = enabled;
        self
    }

    /// Attach a database connection pool.
    ///
    /// When provided, the server persists users through
    /// `DieselUserRepository`; otherwise it falls back to the in-memory
    /// store.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }
}
