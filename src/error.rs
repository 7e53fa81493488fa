use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use sqlx::Error as SqlxError;
use sqlx::migrate::MigrateError;
use thiserror::Error as ThisError;

/// Configuration problems. Always fatal at startup.
#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("malformed database url: {0}")]
    MalformedUrl(#[from] url::ParseError),

    #[error("unsupported database url scheme `{0}`; expected postgres:// or postgresql://")]
    UnsupportedScheme(String),

    #[error("database url has no username")]
    MissingUsername,

    #[error("database url has no host")]
    MissingHost,

    #[error("database url has no database name in its path")]
    MissingDatabase,

    #[error("database url credentials are not valid utf-8: {0}")]
    InvalidCredentialEncoding(#[from] std::string::FromUtf8Error),

    #[error("fallback database configuration is incomplete: `{0}` is empty")]
    IncompleteFallback(&'static str),

    #[error("cookie secret must be at least 64 bytes")]
    InvalidCookieKey,

    #[error("configuration error: {0}")]
    Figment(#[from] Box<figment::Error>),
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError::Figment(Box::new(e))
    }
}

/// Failures while preparing the database at startup.
#[derive(Debug, ThisError)]
pub enum BootstrapError {
    #[error("schema migration failed: {0}")]
    Migration(#[from] MigrateError),

    #[error("seeding failed: {0}")]
    Seed(#[from] SqlxError),
}

#[derive(Debug, ThisError)]
pub enum PortalError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Database error: {0}")]
    DatabaseError(#[from] SqlxError),

    #[error("Database bootstrap error: {0}")]
    Bootstrap(#[from] BootstrapError),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),
}

impl IntoResponse for PortalError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_body) = match self {
            PortalError::Reqwest(_) => (
                StatusCode::BAD_GATEWAY,
                ApiErrorBody {
                    code: "BAD_GATEWAY".to_string(),
                    message: "Upstream service is unavailable.".to_string(),
                },
            ),
            PortalError::Config(_)
            | PortalError::DatabaseError(_)
            | PortalError::Bootstrap(_)
            | PortalError::UrlParse(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiErrorBody {
                    code: "INTERNAL_ERROR".to_string(),
                    message: "An internal server error occurred.".to_string(),
                },
            ),
        };
        (status, Json(ApiErrorResponse { error: error_body })).into_response()
    }
}

/// Standardized API error response body
#[derive(Serialize)]
pub struct ApiErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}
