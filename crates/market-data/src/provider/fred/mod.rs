//! FRED (St. Louis Fed) macroeconomic series provider.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use crate::credentials::{vars, ApiCredentials};
use crate::errors::MarketDataError;
use crate::http::{HttpRequest, HttpTransport};
use crate::provider::{missing_vars, require, Capability, Provider, SeriesSource};

const BASE_URL: &str = "https://api.stlouisfed.org/fred";
const PROVIDER_ID: &str = "FRED";

/// FRED adapter.
pub struct FredProvider {
    transport: Arc<dyn HttpTransport>,
    api_key: Option<String>,
    base_url: String,
}

impl FredProvider {
    pub fn new(transport: Arc<dyn HttpTransport>, api_key: Option<String>) -> Self {
        Self {
            transport,
            api_key,
            base_url: BASE_URL.to_string(),
        }
    }

    pub fn from_credentials(transport: Arc<dyn HttpTransport>, credentials: &ApiCredentials) -> Self {
        Self::new(transport, credentials.fred_api_key.clone())
    }

    async fn fetch(&self, path: &str, params: &[(&str, &str)]) -> Result<Value, MarketDataError> {
        let api_key = require(PROVIDER_ID, &self.api_key, vars::FRED_API_KEY)?;

        let mut request = HttpRequest::new(format!("{}{}", self.base_url, path));
        for (key, value) in params {
            request = request.query(key, *value);
        }
        let request = request
            .query("api_key", api_key)
            .query("file_type", "json");

        debug!("FRED request: {}", request.redacted());

        self.transport
            .get_json(request)
            .await
            .map_err(|e| MarketDataError::from_http(PROVIDER_ID, e))
    }
}

impl Provider for FredProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    fn capabilities(&self) -> &'static [Capability] {
        &[Capability::Series]
    }

    fn missing_credentials(&self) -> Vec<&'static str> {
        missing_vars(&[(&self.api_key, vars::FRED_API_KEY)])
    }
}

#[async_trait]
impl SeriesSource for FredProvider {
    async fn get_series(&self, series_id: &str) -> Result<Value, MarketDataError> {
        self.fetch("/series/observations", &[("series_id", series_id)])
            .await
    }
}
