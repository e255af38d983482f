//! IEX Cloud quote provider.
//!
//! Uses `stock/{symbol}/quote`; the API token travels as the `token` query
//! parameter.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use crate::credentials::{vars, ApiCredentials};
use crate::errors::MarketDataError;
use crate::http::{HttpRequest, HttpTransport};
use crate::provider::{missing_vars, path_segment, require, Capability, Provider, QuoteSource};

const BASE_URL: &str = "https://cloud.iexapis.com/stable";
const PROVIDER_ID: &str = "IEX";

/// IEX Cloud adapter.
pub struct IexProvider {
    transport: Arc<dyn HttpTransport>,
    api_token: Option<String>,
    base_url: String,
}

impl IexProvider {
    pub fn new(transport: Arc<dyn HttpTransport>, api_token: Option<String>) -> Self {
        Self {
            transport,
            api_token,
            base_url: BASE_URL.to_string(),
        }
    }

    pub fn from_credentials(transport: Arc<dyn HttpTransport>, credentials: &ApiCredentials) -> Self {
        Self::new(transport, credentials.iex_api_token.clone())
    }

    async fn fetch(&self, path: &str) -> Result<Value, MarketDataError> {
        let token = require(PROVIDER_ID, &self.api_token, vars::IEX_API_TOKEN)?;
        let request = HttpRequest::new(format!("{}{}", self.base_url, path)).query("token", token);

        debug!("IEX request: {}", request.redacted());

        self.transport
            .get_json(request)
            .await
            .map_err(|e| MarketDataError::from_http(PROVIDER_ID, e))
    }
}

impl Provider for IexProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    fn capabilities(&self) -> &'static [Capability] {
        &[Capability::Quote]
    }

    fn missing_credentials(&self) -> Vec<&'static str> {
        missing_vars(&[(&self.api_token, vars::IEX_API_TOKEN)])
    }
}

#[async_trait]
impl QuoteSource for IexProvider {
    async fn get_quote(&self, symbol: &str) -> Result<Value, MarketDataError> {
        self.fetch(&format!("/stock/{}/quote", path_segment(symbol)))
            .await
    }
}
