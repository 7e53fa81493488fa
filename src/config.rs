use axum_extra::extract::cookie::Key;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::auth::Area;
use crate::db::connection::ConnectionDescriptor;
use crate::error::ConfigError;

pub const CONFIG_FILE: &str = "config.toml";
pub const ENV_PREFIX: &str = "HRPORTAL_";

const PLACEHOLDER_COOKIE_SECRET: &str =
    "development-only-cookie-secret-change-me-development-only-cookie-secret";

/// Application configuration.
///
/// Sources, lowest precedence first: built-in defaults, `config.toml`,
/// `HRPORTAL_*` variables (nested with `__`), and `DATABASE_URL`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub basic: BasicConfig,
    pub database: DatabaseConfig,
    pub services: ServicesConfig,
    pub seed: SeedConfig,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BasicConfig {
    pub listen_addr: String,
    pub loglevel: String,
    pub environment: Environment,
    /// Key material for the private identity cookie. At least 64 bytes.
    pub cookie_secret: String,
    /// Directory served for unmatched paths.
    pub static_dir: String,
}

impl Default for BasicConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8000".to_string(),
            loglevel: "info".to_string(),
            environment: Environment::Development,
            cookie_secret: PLACEHOLDER_COOKIE_SECRET.to_string(),
            static_dir: "wwwroot".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Full connection URL, normally injected as `DATABASE_URL`.
    pub url: Option<String>,
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
    /// Used when no URL is supplied.
    pub fallback: ConnectionDescriptor,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            max_connections: 10,
            acquire_timeout_secs: 5,
            fallback: ConnectionDescriptor::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServicesConfig {
    pub income_api_base: Url,
    pub http_timeout_secs: u64,
    pub user_agent: String,
}

impl Default for ServicesConfig {
    fn default() -> Self {
        Self {
            income_api_base: Url::parse("https://fakestoreapi.com/")
                .expect("static income api url is valid"),
            http_timeout_secs: 15,
            user_agent: concat!("hrportal/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    pub roles: Vec<String>,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            roles: Area::ALL.iter().map(|a| a.name().to_string()).collect(),
        }
    }
}

impl Config {
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(CONFIG_FILE))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .merge(
                Env::raw()
                    .only(&["DATABASE_URL"])
                    .map(|_| "database.url".into()),
            )
    }

    /// Numeric-looking values are accepted for string fields, so a password
    /// such as `12345` from the environment still loads.
    pub fn load() -> Result<Self, ConfigError> {
        Ok(Self::figment().extract_lossy()?)
    }

    /// `DATABASE_URL` if it carries anything but whitespace.
    pub fn database_url(&self) -> Option<&str> {
        self.database
            .url
            .as_deref()
            .filter(|s| !s.trim().is_empty())
    }

    pub fn is_production(&self) -> bool {
        self.basic.environment == Environment::Production
    }

    /// True while the cookie secret is still the built-in development value.
    pub fn uses_placeholder_cookie_secret(&self) -> bool {
        self.basic.cookie_secret == PLACEHOLDER_COOKIE_SECRET
    }

    pub fn cookie_key(&self) -> Result<Key, ConfigError> {
        Key::try_from(self.basic.cookie_secret.as_bytes()).map_err(|_| ConfigError::InvalidCookieKey)
    }
}
