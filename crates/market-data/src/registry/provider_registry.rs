//! Registry holding one adapter per upstream provider.
//!
//! The registry is built once at startup from resolved credentials and a
//! shared transport. Building never fails and never performs I/O: adapters
//! without credentials are still registered and report themselves as
//! unconfigured, so operators can see what is missing.

use std::sync::Arc;

use tracing::info;

use crate::credentials::ApiCredentials;
use crate::fusion::FusionOrchestrator;
use crate::http::{HttpTransport, ReqwestTransport};
use crate::provider::alpha_vantage::AlphaVantageProvider;
use crate::provider::benzinga::BenzingaProvider;
use crate::provider::finnhub::FinnhubProvider;
use crate::provider::fred::FredProvider;
use crate::provider::iex::IexProvider;
use crate::provider::polygon::PolygonProvider;
use crate::provider::reddit::RedditProvider;
use crate::provider::sec_edgar::SecEdgarProvider;
use crate::provider::stocktwits::StockTwitsProvider;
use crate::provider::tradingeconomics::TradingEconomicsProvider;
use crate::provider::{Provider, ProviderStatus, QuoteSource};

/// All provider adapters, sharing one HTTP transport.
pub struct ProviderRegistry {
    alpha_vantage: Arc<AlphaVantageProvider>,
    benzinga: Arc<BenzingaProvider>,
    finnhub: Arc<FinnhubProvider>,
    polygon: Arc<PolygonProvider>,
    iex: Arc<IexProvider>,
    sec_edgar: Arc<SecEdgarProvider>,
    fred: Arc<FredProvider>,
    reddit: Arc<RedditProvider>,
    stocktwits: Arc<StockTwitsProvider>,
    tradingeconomics: Arc<TradingEconomicsProvider>,
}

impl ProviderRegistry {
    /// Build every adapter from already resolved credentials.
    pub fn new(credentials: &ApiCredentials, transport: Arc<dyn HttpTransport>) -> Self {
        let registry = Self {
            alpha_vantage: Arc::new(AlphaVantageProvider::from_credentials(
                transport.clone(),
                credentials,
            )),
            benzinga: Arc::new(BenzingaProvider::from_credentials(
                transport.clone(),
                credentials,
            )),
            finnhub: Arc::new(FinnhubProvider::from_credentials(
                transport.clone(),
                credentials,
            )),
            polygon: Arc::new(PolygonProvider::from_credentials(
                transport.clone(),
                credentials,
            )),
            iex: Arc::new(IexProvider::from_credentials(transport.clone(), credentials)),
            sec_edgar: Arc::new(SecEdgarProvider::from_credentials(
                transport.clone(),
                credentials,
            )),
            fred: Arc::new(FredProvider::from_credentials(transport.clone(), credentials)),
            reddit: Arc::new(RedditProvider::from_credentials(
                transport.clone(),
                credentials,
            )),
            stocktwits: Arc::new(StockTwitsProvider::from_credentials(
                transport.clone(),
                credentials,
            )),
            tradingeconomics: Arc::new(TradingEconomicsProvider::from_credentials(
                transport,
                credentials,
            )),
        };

        let providers = registry.providers();
        let configured = providers.iter().filter(|p| p.is_configured()).count();
        info!(
            "Provider registry built: {}/{} providers configured",
            configured,
            providers.len()
        );

        registry
    }

    /// Build from process environment credentials and the default transport.
    pub fn from_env() -> Self {
        Self::new(
            &ApiCredentials::from_env(),
            Arc::new(ReqwestTransport::default()),
        )
    }

    pub fn alpha_vantage(&self) -> Arc<AlphaVantageProvider> {
        self.alpha_vantage.clone()
    }

    pub fn benzinga(&self) -> Arc<BenzingaProvider> {
        self.benzinga.clone()
    }

    pub fn finnhub(&self) -> Arc<FinnhubProvider> {
        self.finnhub.clone()
    }

    pub fn polygon(&self) -> Arc<PolygonProvider> {
        self.polygon.clone()
    }

    pub fn iex(&self) -> Arc<IexProvider> {
        self.iex.clone()
    }

    pub fn sec_edgar(&self) -> Arc<SecEdgarProvider> {
        self.sec_edgar.clone()
    }

    pub fn fred(&self) -> Arc<FredProvider> {
        self.fred.clone()
    }

    pub fn reddit(&self) -> Arc<RedditProvider> {
        self.reddit.clone()
    }

    pub fn stocktwits(&self) -> Arc<StockTwitsProvider> {
        self.stocktwits.clone()
    }

    pub fn tradingeconomics(&self) -> Arc<TradingEconomicsProvider> {
        self.tradingeconomics.clone()
    }

    /// Every registered provider, in a stable order.
    pub fn providers(&self) -> Vec<Arc<dyn Provider>> {
        let providers: [Arc<dyn Provider>; 10] = [
            self.alpha_vantage.clone(),
            self.benzinga.clone(),
            self.finnhub.clone(),
            self.polygon.clone(),
            self.iex.clone(),
            self.sec_edgar.clone(),
            self.fred.clone(),
            self.reddit.clone(),
            self.stocktwits.clone(),
            self.tradingeconomics.clone(),
        ];
        providers.into()
    }

    /// Configuration status of every provider.
    pub fn statuses(&self) -> Vec<ProviderStatus> {
        self.providers().iter().map(|p| p.status()).collect()
    }

    /// Look up a quote provider by id, case-insensitively.
    ///
    /// Accepts `ALPHA_VANTAGE`, `alpha_vantage`, `finnhub`, `polygon` and `iex`.
    pub fn quote_source(&self, id: &str) -> Option<Arc<dyn QuoteSource>> {
        match id.trim().to_ascii_uppercase().as_str() {
            "ALPHA_VANTAGE" => Some(self.alpha_vantage.clone()),
            "FINNHUB" => Some(self.finnhub.clone()),
            "POLYGON" => Some(self.polygon.clone()),
            "IEX" => Some(self.iex.clone()),
            _ => None,
        }
    }

    /// Orchestrator wired to the snapshot providers: Alpha Vantage quotes,
    /// Benzinga news and SEC EDGAR fundamentals.
    pub fn fusion(&self) -> FusionOrchestrator {
        FusionOrchestrator::new(
            self.alpha_vantage.clone(),
            self.benzinga.clone(),
            self.sec_edgar.clone(),
        )
    }
}
