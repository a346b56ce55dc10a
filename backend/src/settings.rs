//! Application settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, `EXERCISE_TRACKER_*` environment variables or
//! a config file, in that order of precedence.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_POOL_MAX_SIZE: u32 = 10;
/// Port variable injected by hosting platforms.
const PLATFORM_PORT_VAR: &str = "PORT";

/// Errors raised when settings cannot be turned into runtime values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("invalid host address: {host}")]
    InvalidHost { host: String },
}

/// Server and storage configuration.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "EXERCISE_TRACKER")]
pub struct AppSettings {
    /// PostgreSQL connection URL. Without it the in-memory store is used.
    pub database_url: Option<String>,
    /// Interface to bind; defaults to all IPv4 interfaces.
    pub host: Option<String>,
    /// TCP port to bind; falls back to `PORT`, then 3000.
    pub port: Option<u16>,
    /// Maximum pooled database connections; defaults to 10.
    pub pool_max_size: Option<u32>,
    /// Allow cross-origin requests from any origin; defaults to on.
    pub cors_enabled: Option<bool>,
    /// Apply embedded migrations before serving; defaults to on.
    pub run_migrations: Option<bool>,
}

impl AppSettings {
    /// Database URL with blank values treated as unset.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// Return the configured port.
    ///
    /// Falls back to the platform `PORT` variable when it holds a valid
    /// port, then to the default.
    pub fn port(&self) -> u16 {
        self.port
            .or_else(|| {
                std::env::var(PLATFORM_PORT_VAR)
                    .ok()
                    .and_then(|raw| raw.trim().parse().ok())
            })
            .unwrap_or(DEFAULT_PORT)
    }

    /// Whether permissive CORS is enabled.
    pub fn cors_enabled(&self) -> bool {
        self.cors_enabled.unwrap_or(true)
    }

    /// Whether embedded migrations run at startup.
    pub fn run_migrations(&self) -> bool {
        self.run_migrations.unwrap_or(true)
    }

    /// Return the configured pool size, falling back to the default.
    pub fn pool_max_size(&self) -> u32 {
        self.pool_max_size.unwrap_or(DEFAULT_POOL_MAX_SIZE)
    }

    /// Socket address the server binds to.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::InvalidHost`] when `host` is not an IP
    /// address.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let host = match self.host.as_deref().map(str::trim) {
            None | Some("") => DEFAULT_HOST,
            Some(raw) => raw.parse().map_err(|_| SettingsError::InvalidHost {
                host: raw.to_owned(),
            })?,
        };
        Ok(SocketAddr::new(host, self.port()))
    }
}
