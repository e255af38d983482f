//! Benzinga news provider.
//!
//! Fetches the stock news channel for a ticker from `/api/v2/news`. The API
//! key travels as the `token` query parameter; the endpoint answers with a
//! JSON array of articles.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use crate::credentials::{vars, ApiCredentials};
use crate::errors::MarketDataError;
use crate::http::{HttpRequest, HttpTransport};
use crate::provider::{expect_array, missing_vars, require, Capability, NewsSource, Provider};

const BASE_URL: &str = "https://api.benzinga.com/api/v2";
const PROVIDER_ID: &str = "BENZINGA";

/// Benzinga news adapter.
pub struct BenzingaProvider {
    transport: Arc<dyn HttpTransport>,
    api_key: Option<String>,
    base_url: String,
}

impl BenzingaProvider {
    pub fn new(transport: Arc<dyn HttpTransport>, api_key: Option<String>) -> Self {
        Self {
            transport,
            api_key,
            base_url: BASE_URL.to_string(),
        }
    }

    pub fn from_credentials(transport: Arc<dyn HttpTransport>, credentials: &ApiCredentials) -> Self {
        Self::new(transport, credentials.benzinga_api_key.clone())
    }
}

impl Provider for BenzingaProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    fn capabilities(&self) -> &'static [Capability] {
        &[Capability::News]
    }

    fn missing_credentials(&self) -> Vec<&'static str> {
        missing_vars(&[(&self.api_key, vars::BENZINGA_API_KEY)])
    }
}

#[async_trait]
impl NewsSource for BenzingaProvider {
    async fn get_news(&self, symbol: &str, limit: usize) -> Result<Vec<Value>, MarketDataError> {
        let api_key = require(PROVIDER_ID, &self.api_key, vars::BENZINGA_API_KEY)?;

        let request = HttpRequest::new(format!("{}/news", self.base_url))
            .header("Accept", "application/json")
            .query("token", api_key)
            .query("tickers", symbol)
            .query("channels", "stocks")
            .query("pageSize", limit.to_string());

        debug!("Benzinga request: {}", request.redacted());

        let payload = self
            .transport
            .get_json(request)
            .await
            .map_err(|e| MarketDataError::from_http(PROVIDER_ID, e))?;

        let articles = expect_array(PROVIDER_ID, payload)?;
        debug!("Benzinga: {} articles for {}", articles.len(), symbol);
        Ok(articles)
    }
}
