//! Polygon.io last-trade provider.
//!
//! Serves quotes from `/v2/last/trade/{symbol}`, unwrapping the `results`
//! envelope. The API key travels as the `apiKey` query parameter. The flat-file
//! (S3) credentials are carried for status reporting only; this adapter makes
//! no S3 calls.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use crate::credentials::{vars, ApiCredentials};
use crate::errors::MarketDataError;
use crate::http::{HttpRequest, HttpTransport};
use crate::provider::{
    missing_vars, path_segment, require, unwrap_key, Capability, Provider, QuoteSource,
};

const BASE_URL: &str = "https://api.polygon.io";
const PROVIDER_ID: &str = "POLYGON";
const RESULTS_KEY: &str = "results";

/// Polygon.io adapter.
pub struct PolygonProvider {
    transport: Arc<dyn HttpTransport>,
    api_key: Option<String>,
    access_key_id: Option<String>,
    secret_access_key: Option<String>,
    base_url: String,
}

impl PolygonProvider {
    pub fn new(
        transport: Arc<dyn HttpTransport>,
        api_key: Option<String>,
        access_key_id: Option<String>,
        secret_access_key: Option<String>,
    ) -> Self {
        Self {
            transport,
            api_key,
            access_key_id,
            secret_access_key,
            base_url: BASE_URL.to_string(),
        }
    }

    pub fn from_credentials(transport: Arc<dyn HttpTransport>, credentials: &ApiCredentials) -> Self {
        Self::new(
            transport,
            credentials.polygon_api_key.clone(),
            credentials.polygon_access_key_id.clone(),
            credentials.polygon_secret_access_key.clone(),
        )
    }

    /// True when both flat-file credentials are present.
    pub fn has_flat_file_access(&self) -> bool {
        self.access_key_id.is_some() && self.secret_access_key.is_some()
    }

    /// Latest trade for a ticker.
    pub async fn get_last_trade(&self, symbol: &str) -> Result<Value, MarketDataError> {
        let api_key = require(PROVIDER_ID, &self.api_key, vars::POLYGON_API_KEY)?;

        let request = HttpRequest::new(format!(
            "{}/v2/last/trade/{}",
            self.base_url,
            path_segment(symbol)
        ))
        .query("apiKey", api_key);

        debug!("Polygon request: {}", request.redacted());

        let payload = self
            .transport
            .get_json(request)
            .await
            .map_err(|e| MarketDataError::from_http(PROVIDER_ID, e))?;
        Ok(unwrap_key(payload, RESULTS_KEY))
    }
}

impl Provider for PolygonProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    fn capabilities(&self) -> &'static [Capability] {
        &[Capability::Quote]
    }

    fn missing_credentials(&self) -> Vec<&'static str> {
        missing_vars(&[(&self.api_key, vars::POLYGON_API_KEY)])
    }
}

#[async_trait]
impl QuoteSource for PolygonProvider {
    async fn get_quote(&self, symbol: &str) -> Result<Value, MarketDataError> {
        self.get_last_trade(symbol).await
    }
}
