use anyhow::{Context, Result};
use order::{handler::AppRouter, state::AppState};
use shared::{
    config::{Config, ConnectionManager, ConnectionPool, HttpClientConfig},
    utils::{Telemetry, init_logger},
};
use sqlx::{Pool, Postgres};
use std::sync::Arc;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let is_dev = std::env::var("DEV_MODE")
        .map(|v| v == "true" || v == "1")
        .unwrap_or(false);
    let is_enable_file = std::env::var("ENABLE_FILE_LOG")
        .map(|v| v == "true")
        .unwrap_or(false);

    let config = Config::init().context("Failed to load configuration")?;
    let http_config = HttpClientConfig::init().context("Failed to load HTTP client configuration")?;

    let telemetry = Telemetry::init("order-service", &config.otel_endpoint)
        .context("Failed to initialize telemetry")?;

    let _log_guard = init_logger(
        telemetry.logger_provider(),
        "order-service",
        is_dev,
        is_enable_file,
    );

    let db_pool = ConnectionManager::new_pool(&config.database_url)
        .await
        .context("Failed to initialize database pool")?;

    if config.run_migrations {
        run_migrations(&db_pool)
            .await
            .context("failed to migration database")?;
    }

    let state = Arc::new(
        AppState::new(db_pool.clone(), http_config).context("Failed to create AppState")?,
    );

    info!("✅ Application setup completed successfully.");

    let served = AppRouter::serve(config.port, state).await;

    if let Err(e) = &served {
        error!("HTTP server stopped with error: {e:#}");
    }

    shutdown(db_pool, telemetry).await;

    served
}

async fn shutdown(db_pool: ConnectionPool, telemetry: Telemetry) {
    info!("🛑 Shutting down order service...");

    db_pool.close().await;
    info!("Database pool closed.");

    if let Err(e) = telemetry.shutdown() {
        error!("Failed to shutdown telemetry: {}", e);
    }

    info!("✅ Order service shutdown complete.");
}

pub async fn run_migrations(pool: &Pool<Postgres>) -> anyhow::Result<()> {
    sqlx::migrate!("./migrations").run(pool).await?;

    Ok(())
}
