//! StockTwits symbol stream provider.
//!
//! The public stream endpoint works anonymously; an access token is attached
//! when one is configured. The adapter is therefore always usable.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use crate::credentials::ApiCredentials;
use crate::errors::MarketDataError;
use crate::http::{HttpRequest, HttpTransport};
use crate::provider::{path_segment, Capability, Provider, SocialSource};

const BASE_URL: &str = "https://api.stocktwits.com/api/2";
const PROVIDER_ID: &str = "STOCKTWITS";

pub struct StockTwitsProvider {
    transport: Arc<dyn HttpTransport>,
    access_token: Option<String>,
    base_url: String,
}

impl StockTwitsProvider {
    pub fn new(transport: Arc<dyn HttpTransport>, access_token: Option<String>) -> Self {
        Self {
            transport,
            access_token,
            base_url: BASE_URL.to_string(),
        }
    }

    pub fn from_credentials(transport: Arc<dyn HttpTransport>, credentials: &ApiCredentials) -> Self {
        Self::new(transport, credentials.stocktwits_access_token.clone())
    }
}

impl Provider for StockTwitsProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    fn capabilities(&self) -> &'static [Capability] {
        &[Capability::SocialStream]
    }

    fn missing_credentials(&self) -> Vec<&'static str> {
        Vec::new()
    }
}

#[async_trait]
impl SocialSource for StockTwitsProvider {
    async fn get_symbol_stream(&self, symbol: &str) -> Result<Value, MarketDataError> {
        let mut request = HttpRequest::new(format!(
            "{}/streams/symbol/{}.json",
            self.base_url,
            path_segment(symbol)
        ));
        if let Some(token) = &self.access_token {
            request = request.query("access_token", token.as_str());
        }

        debug!("StockTwits request: {}", request.redacted());

        self.transport
            .get_json(request)
            .await
            .map_err(|e| MarketDataError::from_http(PROVIDER_ID, e))
    }
}
