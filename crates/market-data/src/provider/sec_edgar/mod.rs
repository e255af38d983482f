//! SEC EDGAR company facts and filing history.
//!
//! Every EDGAR request must carry a descriptive `User-Agent`
//! (e.g. `"AuroraQuant/0.1 (contact@example.com)"`); without one the adapter
//! refuses to make any call. Identifiers may be numeric CIKs or tickers;
//! tickers are mapped through the SEC company ticker table, which is loaded on
//! first use.

mod cik;

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use crate::credentials::{vars, ApiCredentials};
use crate::errors::MarketDataError;
use crate::http::{HttpRequest, HttpTransport};
use crate::provider::{missing_vars, require, Capability, FactsSource, Provider};

use cik::{format_cik, CikResolver};

const DATA_URL: &str = "https://data.sec.gov";
const TICKERS_URL: &str = "https://www.sec.gov/files/company_tickers.json";
const PROVIDER_ID: &str = "SEC_EDGAR";

/// SEC EDGAR adapter.
pub struct SecEdgarProvider {
    transport: Arc<dyn HttpTransport>,
    user_agent: Option<String>,
    ciks: CikResolver,
    data_url: String,
    tickers_url: String,
}

impl SecEdgarProvider {
    pub fn new(transport: Arc<dyn HttpTransport>, user_agent: Option<String>) -> Self {
        Self {
            transport,
            user_agent,
            ciks: CikResolver::new(),
            data_url: DATA_URL.to_string(),
            tickers_url: TICKERS_URL.to_string(),
        }
    }

    pub fn from_credentials(transport: Arc<dyn HttpTransport>, credentials: &ApiCredentials) -> Self {
        Self::new(transport, credentials.sec_edgar_user_agent.clone())
    }

    /// Map a ticker or numeric string to a CIK.
    ///
    /// The ticker table is fetched at most once per adapter instance.
    pub async fn resolve_cik(&self, identifier: &str) -> Result<u64, MarketDataError> {
        let user_agent = require(PROVIDER_ID, &self.user_agent, vars::SEC_EDGAR_USER_AGENT)?;
        self.ciks
            .resolve(PROVIDER_ID, identifier, || {
                self.get(self.tickers_url.clone(), user_agent)
            })
            .await
    }

    /// Filing history (`submissions/CIK##########.json`).
    pub async fn get_submissions(&self, identifier: &str) -> Result<Value, MarketDataError> {
        let user_agent = require(PROVIDER_ID, &self.user_agent, vars::SEC_EDGAR_USER_AGENT)?;
        let cik = self.resolve_cik(identifier).await?;
        self.get(
            format!("{}/submissions/{}.json", self.data_url, format_cik(cik)),
            user_agent,
        )
        .await
    }

    async fn get(&self, url: String, user_agent: &str) -> Result<Value, MarketDataError> {
        let request = HttpRequest::new(url)
            .header("User-Agent", user_agent)
            .header("Accept", "application/json");

        debug!("SEC EDGAR request: {}", request.redacted());

        self.transport
            .get_json(request)
            .await
            .map_err(|e| MarketDataError::from_http(PROVIDER_ID, e))
    }
}

impl Provider for SecEdgarProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    fn capabilities(&self) -> &'static [Capability] {
        &[Capability::CompanyFacts, Capability::Filings]
    }

    fn missing_credentials(&self) -> Vec<&'static str> {
        missing_vars(&[(&self.user_agent, vars::SEC_EDGAR_USER_AGENT)])
    }
}

#[async_trait]
impl FactsSource for SecEdgarProvider {
    async fn get_company_facts(&self, identifier: &str) -> Result<Value, MarketDataError> {
        let user_agent = require(PROVIDER_ID, &self.user_agent, vars::SEC_EDGAR_USER_AGENT)?;
        let cik = self.resolve_cik(identifier).await?;
        self.get(
            format!(
                "{}/api/xbrl/companyfacts/{}.json",
                self.data_url,
                format_cik(cik)
            ),
            user_agent,
        )
        .await
    }
}
