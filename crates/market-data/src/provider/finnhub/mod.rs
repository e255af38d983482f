//! Finnhub quote provider.
//!
//! This module provides real-time quotes from the Finnhub `/quote` endpoint.
//! The API key travels as the `token` query parameter. Setting
//! `FINNHUB_PROXY_URL` routes every request through that base endpoint
//! instead of the public one.
//!
//! API documentation: https://finnhub.io/docs/api

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use crate::credentials::{vars, ApiCredentials};
use crate::errors::MarketDataError;
use crate::http::{HttpRequest, HttpTransport};
use crate::provider::{missing_vars, require, Capability, Provider, QuoteSource};

const BASE_URL: &str = "https://finnhub.io/api/v1";
const PROVIDER_ID: &str = "FINNHUB";

/// Finnhub quote adapter.
pub struct FinnhubProvider {
    transport: Arc<dyn HttpTransport>,
    api_key: Option<String>,
    base_url: String,
}

impl FinnhubProvider {
    /// Create a Finnhub adapter. `proxy_url` replaces the public base endpoint.
    pub fn new(
        transport: Arc<dyn HttpTransport>,
        api_key: Option<String>,
        proxy_url: Option<String>,
    ) -> Self {
        let base_url = proxy_url
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| BASE_URL.to_string());

        Self {
            transport,
            api_key,
            base_url,
        }
    }

    pub fn from_credentials(transport: Arc<dyn HttpTransport>, credentials: &ApiCredentials) -> Self {
        Self::new(
            transport,
            credentials.finnhub_api_key.clone(),
            credentials.finnhub_proxy_url.clone(),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Make a GET request to the Finnhub API.
    async fn fetch(&self, endpoint: &str, params: &[(&str, &str)]) -> Result<Value, MarketDataError> {
        let api_key = require(PROVIDER_ID, &self.api_key, vars::FINNHUB_API_KEY)?;

        let mut request = HttpRequest::new(format!("{}{}", self.base_url, endpoint));
        for (key, value) in params {
            request = request.query(key, *value);
        }
        let request = request.query("token", api_key);

        debug!(
            "Finnhub request: {} with {} params",
            endpoint,
            params.len()
        );

        self.transport
            .get_json(request)
            .await
            .map_err(|e| MarketDataError::from_http(PROVIDER_ID, e))
    }
}

impl Provider for FinnhubProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    fn capabilities(&self) -> &'static [Capability] {
        &[Capability::Quote]
    }

    fn missing_credentials(&self) -> Vec<&'static str> {
        missing_vars(&[(&self.api_key, vars::FINNHUB_API_KEY)])
    }
}

#[async_trait]
impl QuoteSource for FinnhubProvider {
    async fn get_quote(&self, symbol: &str) -> Result<Value, MarketDataError> {
        debug!("Fetching latest quote for {} from Finnhub", symbol);
        self.fetch("/quote", &[("symbol", symbol)]).await
    }
}
