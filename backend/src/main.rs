//! Backend entry-point: loads settings, prepares storage, and serves the
//! employee API.

mod server;

use std::ffi::OsString;

use actix_web::web;
#[cfg(feature = "metrics")]
use actix_web_prom::{PrometheusMetrics, PrometheusMetricsBuilder};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use backend::inbound::http::health::HealthState;
use backend::outbound::persistence::{DbPool, ensure_schema};
use server::{ServerConfig, ServerSettings, create_server};

/// Build Prometheus middleware, logging and discarding failures.
#[cfg(feature = "metrics")]
fn initialize_metrics<F, E>(build: F) -> Option<PrometheusMetrics>
where
    F: FnOnce() -> Result<PrometheusMetrics, E>,
    E: std::fmt::Display,
{
    match build() {
        Ok(metrics) => Some(metrics),
        Err(error) => {
            warn!(%error, "metrics disabled: failed to configure Prometheus");
            None
        }
    }
}

fn load_settings(args: impl IntoIterator<Item = OsString>) -> std::io::Result<ServerSettings> {
    ServerSettings::load_from_iter(args)
        .map_err(|err| std::io::Error::other(format!("failed to load settings: {err}")))
}

async fn build_config(settings: &ServerSettings) -> std::io::Result<ServerConfig> {
    let config = ServerConfig::new(settings.bind_addr()?);
    let Some(pool_config) = settings.pool_config() else {
        warn!("no database URL configured; employees are kept in memory");
        return Ok(config);
    };

    let pool = DbPool::new(pool_config)
        .await
        .map_err(|err| std::io::Error::other(err.to_string()))?;
    ensure_schema(&pool)
        .await
        .map_err(|err| std::io::Error::other(err.to_string()))?;
    Ok(config.with_db_pool(pool))
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = load_settings(std::env::args_os())?;
    let config = build_config(&settings).await?;

    #[cfg(feature = "metrics")]
    let config = config.with_metrics(initialize_metrics(|| {
        PrometheusMetricsBuilder::new("ems")
            .endpoint("/metrics")
            .build()
    }));

    info!(bind_addr = %config.bind_addr(), "starting employee service");
    let health_state = web::Data::new(HealthState::new());
    create_server(health_state, config)?.await
}
