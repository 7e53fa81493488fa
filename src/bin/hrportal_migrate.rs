//! Design-time migration runner.
//!
//! Resolves the connection exactly like the server, then applies the
//! embedded migrations. Unlike server startup, any failure is fatal.

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use tracing::info;

use hrportal::db::{bootstrap::run_migrations, connection::resolve};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cfg = hrportal::Config::load()?;
    hrportal::logging::init(&cfg.basic.loglevel);

    let connection = resolve(cfg.database_url(), &cfg.database.fallback)?;
    info!(database = %connection.redacted(), "connecting for migrations");

    let pool = PgPoolOptions::new()
        .max_connections(1)
        .acquire_timeout(Duration::from_secs(cfg.database.acquire_timeout_secs))
        .connect_with(connection.connect_options())
        .await?;

    run_migrations(&pool).await?;
    pool.close().await;
    Ok(())
}
