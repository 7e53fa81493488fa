//! Placeholder pages. Real views are served by the page layer; these only
//! give every route in the pipeline a concrete endpoint.

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use tracing::info;

use crate::auth::Area;
use crate::db::bootstrap::run_migrations;
use crate::middleware::auth::RequireSignIn;
use crate::{PortalError, server::router::PortalState};

pub async fn home() -> &'static str {
    "HR portal"
}

pub async fn error_page() -> &'static str {
    "An error occurred while processing your request."
}

pub async fn identity_login() -> &'static str {
    "Sign in"
}

pub async fn area_login(area: Area) -> String {
    format!("{area} sign in")
}

pub async fn area_page(area: Area, user: RequireSignIn) -> String {
    format!("{area} dashboard for {}", user.subject)
}

/// POST /ApplyDatabaseMigrations -> applies pending migrations (development only).
pub async fn apply_migrations(
    State(state): State<PortalState>,
) -> Result<impl IntoResponse, PortalError> {
    run_migrations(&state.registry.pool).await?;
    info!("migrations applied on request");
    Ok(StatusCode::NO_CONTENT)
}
