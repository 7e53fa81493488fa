use url::Url;

use crate::error::PortalError;

/// HTTP client bound to the income data provider's base address.
#[derive(Debug, Clone)]
pub struct IncomeApi {
    client: reqwest::Client,
    base_url: Url,
}

impl IncomeApi {
    pub fn new(client: reqwest::Client, base_url: Url) -> Self {
        Self { client, base_url }
    }

    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve `path` against the base address. A leading `/` is ignored so
    /// a base with a path prefix is kept.
    pub fn endpoint(&self, path: &str) -> Result<Url, PortalError> {
        Ok(self.base_url.join(path.trim_start_matches('/'))?)
    }
}
