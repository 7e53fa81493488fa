use std::sync::Arc;

use mimalloc::MiMalloc;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{info, warn};

use hrportal::db::{bootstrap::initialize_database, connection::resolve};
use hrportal::server::router::{PortalState, portal_router};
use hrportal::service::ServiceRegistry;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cfg = hrportal::Config::load()?;
    hrportal::logging::init(&cfg.basic.loglevel);

    let connection = resolve(cfg.database_url(), &cfg.database.fallback)?;
    let cookie_key = cfg.cookie_key()?;
    if cfg.is_production() && cfg.uses_placeholder_cookie_secret() {
        warn!("running in production with the development cookie secret; set HRPORTAL_BASIC__COOKIE_SECRET");
    }

    info!(
        environment = ?cfg.basic.environment,
        database = %connection.redacted(),
        source = if cfg.database_url().is_some() { "DATABASE_URL" } else { "fallback" },
        loglevel = %cfg.basic.loglevel,
    );

    let registry = Arc::new(ServiceRegistry::assemble(cfg, connection)?);

    initialize_database(&registry.pool, &registry.config.seed).await;

    let addr = registry.config.basic.listen_addr.clone();
    let state = PortalState::new(registry, cookie_key);
    let app = portal_router(state);

    let listener = TcpListener::bind(&addr).await?;
    info!("HTTP server listening on {}", addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if signal::ctrl_c().await.is_ok() {
            info!("Received Ctrl+C, shutting down");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        if let Ok(mut sig) = signal::unix::signal(signal::unix::SignalKind::terminate()) {
            sig.recv().await;
            info!("Received terminate signal, shutting down");
        } else {
            std::future::pending::<()>().await;
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
