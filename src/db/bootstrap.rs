use sqlx::PgPool;
use tracing::{error, info};

use crate::config::SeedConfig;
use crate::error::BootstrapError;

/// Apply the embedded migrations under `./migrations`.
pub async fn run_migrations(pool: &PgPool) -> Result<(), BootstrapError> {
    info!("running database migrations");
    sqlx::migrate!("./migrations").run(pool).await?;
    info!("database migrations completed");
    Ok(())
}

/// Insert the configured roles. Existing rows are left untouched.
pub async fn seed(pool: &PgPool, cfg: &SeedConfig) -> Result<(), BootstrapError> {
    let mut tx = pool.begin().await?;
    let mut inserted = 0u64;

    for role in cfg.roles.iter().map(|r| r.trim()).filter(|r| !r.is_empty()) {
        let res = sqlx::query("INSERT INTO roles (name) VALUES ($1) ON CONFLICT (name) DO NOTHING")
            .bind(role)
            .execute(&mut *tx)
            .await?;
        inserted += res.rows_affected();
    }

    tx.commit().await?;
    info!(inserted, total = cfg.roles.len(), "seed data applied");
    Ok(())
}

pub async fn migrate_and_seed(pool: &PgPool, cfg: &SeedConfig) -> Result<(), BootstrapError> {
    run_migrations(pool).await?;
    seed(pool, cfg).await
}

/// Migrate and seed, logging a failure instead of returning it.
///
/// The server keeps starting even when the database could not be prepared.
pub async fn initialize_database(pool: &PgPool, cfg: &SeedConfig) {
    if let Err(e) = migrate_and_seed(pool, cfg).await {
        error!(error = %e, detail = ?e, "an error occurred while migrating or seeding the database");
    }
}
