use std::time::Duration;

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use tracing::info;

use crate::config::{Config, ServicesConfig};
use crate::db::connection::ConnectionDescriptor;
use crate::error::PortalError;
use crate::service::income_api::IncomeApi;

/// Handles shared by the request pipeline. Built once at startup.
pub struct ServiceRegistry {
    pub config: Config,
    pub connection: ConnectionDescriptor,
    pub pool: PgPool,
    /// Client for the public-holiday lookup service.
    pub holiday_http: reqwest::Client,
    pub income_api: IncomeApi,
}

impl ServiceRegistry {
    /// Assemble every handle in a fixed order. Opens no connections.
    pub fn assemble(config: Config, connection: ConnectionDescriptor) -> Result<Self, PortalError> {
        let pool = PgPoolOptions::new()
            .max_connections(config.database.max_connections.max(1))
            .acquire_timeout(Duration::from_secs(config.database.acquire_timeout_secs))
            .connect_lazy_with(connection.connect_options());

        let holiday_http = http_client(&config.services)?;
        let income_api = IncomeApi::new(
            http_client(&config.services)?,
            config.services.income_api_base.clone(),
        );

        info!(
            database = %connection.redacted(),
            max_connections = config.database.max_connections,
            income_api = %income_api.base_url(),
            "service registry assembled"
        );

        Ok(Self {
            config,
            connection,
            pool,
            holiday_http,
            income_api,
        })
    }
}

fn http_client(cfg: &ServicesConfig) -> Result<reqwest::Client, PortalError> {
    Ok(reqwest::Client::builder()
        .user_agent(cfg.user_agent.clone())
        .connect_timeout(Duration::from_secs(5))
        .timeout(Duration::from_secs(cfg.http_timeout_secs))
        .build()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn assembly_is_lazy_and_keeps_the_descriptor() {
        let mut config = Config::default();
        config.database.max_connections = 0;
        let connection = ConnectionDescriptor {
            host: "db.invalid".to_string(),
            ..ConnectionDescriptor::default()
        };

        let registry = ServiceRegistry::assemble(config, connection.clone())
            .expect("assembly must not touch the network");
        assert_eq!(registry.connection, connection);
        assert_eq!(registry.pool.options().get_max_connections(), 1);
        assert_eq!(registry.pool.size(), 0);
        assert_eq!(
            registry.income_api.base_url().as_str(),
            "https://fakestoreapi.com/"
        );
    }
}
