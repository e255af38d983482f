//! Alpha Vantage quote provider.
//!
//! Uses the GLOBAL_QUOTE function for live pricing. The API key travels as the
//! `apikey` query parameter.
//!
//! Note: Alpha Vantage answers most failures with HTTP 200 and a notice field
//! in the body ("Error Message", "Note" or "Information"). These are logged
//! and the raw body is passed through.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, warn};

use crate::credentials::{vars, ApiCredentials};
use crate::errors::MarketDataError;
use crate::http::{HttpRequest, HttpTransport};
use crate::provider::{missing_vars, require, unwrap_key, Capability, Provider, QuoteSource};

const BASE_URL: &str = "https://www.alphavantage.co/query";
const PROVIDER_ID: &str = "ALPHA_VANTAGE";
const QUOTE_KEY: &str = "Global Quote";

/// Alpha Vantage quote adapter.
pub struct AlphaVantageProvider {
    transport: Arc<dyn HttpTransport>,
    api_key: Option<String>,
    base_url: String,
}

impl AlphaVantageProvider {
    pub fn new(transport: Arc<dyn HttpTransport>, api_key: Option<String>) -> Self {
        Self {
            transport,
            api_key,
            base_url: BASE_URL.to_string(),
        }
    }

    pub fn from_credentials(transport: Arc<dyn HttpTransport>, credentials: &ApiCredentials) -> Self {
        Self::new(transport, credentials.alpha_vantage_api_key.clone())
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Make a request to the Alpha Vantage query endpoint.
    async fn fetch(&self, params: &[(&str, &str)]) -> Result<Value, MarketDataError> {
        let api_key = require(PROVIDER_ID, &self.api_key, vars::ALPHA_VANTAGE_API_KEY)?;

        let mut request = HttpRequest::new(&self.base_url);
        for (key, value) in params {
            request = request.query(key, *value);
        }
        let request = request.query("apikey", api_key);

        debug!("Alpha Vantage request: {}", request.redacted());

        let payload = self
            .transport
            .get_json(request)
            .await
            .map_err(|e| MarketDataError::from_http(PROVIDER_ID, e))?;

        Self::log_notices(&payload);
        Ok(payload)
    }

    /// Log notices Alpha Vantage embeds in a 200 response.
    fn log_notices(payload: &Value) {
        for notice in ["Error Message", "Note", "Information"] {
            if let Some(msg) = payload.get(notice).and_then(Value::as_str) {
                warn!("Alpha Vantage {}: {}", notice.to_lowercase(), msg);
            }
        }
    }
}

impl Provider for AlphaVantageProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    fn capabilities(&self) -> &'static [Capability] {
        &[Capability::Quote]
    }

    fn missing_credentials(&self) -> Vec<&'static str> {
        missing_vars(&[(&self.api_key, vars::ALPHA_VANTAGE_API_KEY)])
    }
}

#[async_trait]
impl QuoteSource for AlphaVantageProvider {
    async fn get_quote(&self, symbol: &str) -> Result<Value, MarketDataError> {
        debug!("Fetching latest quote for {} from Alpha Vantage", symbol);

        let payload = self
            .fetch(&[("function", "GLOBAL_QUOTE"), ("symbol", symbol)])
            .await?;
        Ok(unwrap_key(payload, QUOTE_KEY))
    }
}
