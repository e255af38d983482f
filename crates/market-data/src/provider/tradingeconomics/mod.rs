//! Trading Economics economic calendar provider.
//!
//! Authentication is the `client=key:secret` query parameter. Both halves are
//! required.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use crate::credentials::{vars, ApiCredentials};
use crate::errors::MarketDataError;
use crate::http::{HttpRequest, HttpTransport};
use crate::provider::{expect_array, missing_vars, CalendarSource, Capability, Provider};

const BASE_URL: &str = "https://api.tradingeconomics.com";
const PROVIDER_ID: &str = "TRADINGECONOMICS";

pub struct TradingEconomicsProvider {
    transport: Arc<dyn HttpTransport>,
    client_key: Option<String>,
    client_secret: Option<String>,
    base_url: String,
}

impl TradingEconomicsProvider {
    pub fn new(
        transport: Arc<dyn HttpTransport>,
        client_key: Option<String>,
        client_secret: Option<String>,
    ) -> Self {
        Self {
            transport,
            client_key,
            client_secret,
            base_url: BASE_URL.to_string(),
        }
    }

    pub fn from_credentials(transport: Arc<dyn HttpTransport>, credentials: &ApiCredentials) -> Self {
        Self::new(
            transport,
            credentials.tradingeconomics_client_key.clone(),
            credentials.tradingeconomics_client_secret.clone(),
        )
    }

    fn client_param(&self) -> Result<String, MarketDataError> {
        match (&self.client_key, &self.client_secret) {
            (Some(key), Some(secret)) => Ok(format!("{}:{}", key, secret)),
            _ => Err(MarketDataError::not_configured(
                PROVIDER_ID,
                self.missing_credentials(),
            )),
        }
    }
}

impl Provider for TradingEconomicsProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    fn capabilities(&self) -> &'static [Capability] {
        &[Capability::Calendar]
    }

    fn missing_credentials(&self) -> Vec<&'static str> {
        missing_vars(&[
            (&self.client_key, vars::TRADINGECONOMICS_CLIENT_KEY),
            (&self.client_secret, vars::TRADINGECONOMICS_CLIENT_SECRET),
        ])
    }
}

#[async_trait]
impl CalendarSource for TradingEconomicsProvider {
    async fn get_calendar(&self, country: Option<&str>) -> Result<Vec<Value>, MarketDataError> {
        let client = self.client_param()?;

        let mut request =
            HttpRequest::new(format!("{}/calendar", self.base_url)).query("client", client);
        if let Some(country) = country.map(str::trim).filter(|c| !c.is_empty()) {
            request = request.query("country", country);
        }

        debug!("TradingEconomics request: {}", request.redacted());

        let payload = self
            .transport
            .get_json(request)
            .await
            .map_err(|e| MarketDataError::from_http(PROVIDER_ID, e))?;
        expect_array(PROVIDER_ID, payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;
    use crate::http::mock::MockTransport;
    use serde_json::json;

    #[tokio::test]
    async fn test_missing_secret_lists_it() {
        let transport = Arc::new(MockTransport::new());
        let provider = TradingEconomicsProvider::new(transport.clone(), Some("k".to_string()), None);

        let err = provider.get_calendar(None).await.unwrap_err();
        match err {
            MarketDataError::NotConfigured { missing, .. } => {
                assert_eq!(missing, vec![vars::TRADINGECONOMICS_CLIENT_SECRET]);
            }
            other => panic!("expected NotConfigured, got {:?}", other),
        }
        assert_eq!(transport.call_count(), 0);
    }

    #[tokio::test]
    async fn test_calendar_with_country() {
        let transport = Arc::new(MockTransport::new().respond(
            "/calendar",
            json!([{"Country": "United States", "Event": "Non Farm Payrolls"}]),
        ));
        let provider = TradingEconomicsProvider::new(
            transport.clone(),
            Some("key".to_string()),
            Some("secret".to_string()),
        );

        let events = provider.get_calendar(Some("united states")).await.unwrap();
        assert_eq!(events.len(), 1);

        let request = &transport.calls()[0].request;
        assert_eq!(request.query_value("client"), Some("key:secret"));
        assert_eq!(request.query_value("country"), Some("united states"));
    }

    #[tokio::test]
    async fn test_calendar_without_country_omits_param() {
        let transport = Arc::new(MockTransport::new().respond("/calendar", json!([])));
        let provider = TradingEconomicsProvider::new(
            transport.clone(),
            Some("key".to_string()),
            Some("secret".to_string()),
        );

        assert!(provider.get_calendar(None).await.unwrap().is_empty());
        assert_eq!(transport.calls()[0].request.query_value("country"), None);
    }

    #[tokio::test]
    async fn test_error_object_is_upstream() {
        let transport = Arc::new(
            MockTransport::new().respond("/calendar", json!({"Message": "No Access"})),
        );
        let provider = TradingEconomicsProvider::new(
            transport,
            Some("key".to_string()),
            Some("secret".to_string()),
        );

        let err = provider.get_calendar(None).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Upstream);
    }
}
