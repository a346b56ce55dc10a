//! Exercise tracker entry-point: loads settings, prepares storage and serves
//! the REST API, landing page, probes and OpenAPI docs.

mod server;

use actix_web::web;
use color_eyre::eyre::{WrapErr, eyre};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use exercise_tracker::AppSettings;
use exercise_tracker::inbound::http::health::HealthState;
use exercise_tracker::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load_from_iter(std::env::args_os())
        .map_err(|err| eyre!("failed to load settings: {err}"))?;
    let bind_addr = settings.bind_addr().wrap_err("resolve bind address")?;

    let mut config = ServerConfig::new(bind_addr).with_cors(settings.cors_enabled());
    match settings.database_url() {
        Some(url) => {
            let pool_config = PoolConfig::new(url).with_max_size(settings.pool_max_size());
            info!(database = %pool_config.redacted_url(), "using PostgreSQL storage");
            if settings.run_migrations() {
                run_pending_migrations(url)
                    .await
                    .wrap_err("apply database migrations")?;
            }
            let pool = DbPool::new(pool_config)
                .await
                .wrap_err("build database pool")?;
            config = config.with_db_pool(pool);
        }
        None => warn!("no database URL configured; using in-memory storage"),
    }

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config).wrap_err("start HTTP server")?;
    let handle = server.handle();

    actix_web::rt::spawn(async move {
        if let Err(err) = tokio::signal::ctrl_c().await {
            warn!(error = %err, "failed to listen for shutdown signal");
            return;
        }
        info!("shutdown requested; draining connections");
        health_state.mark_draining();
        handle.stop(true).await;
    });

    server.await.wrap_err("serve HTTP")?;
    Ok(())
}
