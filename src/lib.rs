pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod middleware;
pub mod server;
pub mod service;

pub use config::Config;
pub use db::connection::{ConnectionDescriptor, resolve};
pub use error::{BootstrapError, ConfigError, PortalError};
