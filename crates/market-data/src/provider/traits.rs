//! Provider trait definitions.
//!
//! Adapters implement [`Provider`] for identity and configuration status, plus
//! one capability trait per operation they serve. Consumers hold the narrow
//! capability they need (e.g. `Arc<dyn QuoteSource>`) rather than a concrete
//! adapter, so any provider offering the capability can be swapped in.

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::MarketDataError;

use super::capabilities::{Capability, ProviderStatus};

/// Identity and configuration status shared by every adapter.
///
/// # Example
///
/// ```ignore
/// use aurora_market_data::provider::{Capability, Provider};
///
/// struct MyProvider {
///     api_key: Option<String>,
/// }
///
/// impl Provider for MyProvider {
///     fn id(&self) -> &'static str {
///         "MY_PROVIDER"
///     }
///
///     fn capabilities(&self) -> &'static [Capability] {
///         &[Capability::Quote]
///     }
///
///     fn missing_credentials(&self) -> Vec<&'static str> {
///         if self.api_key.is_some() { vec![] } else { vec!["MY_PROVIDER_API_KEY"] }
///     }
/// }
/// ```
pub trait Provider: Send + Sync {
    /// Unique identifier for this provider.
    ///
    /// Should be a constant string like "ALPHA_VANTAGE", "SEC_EDGAR", etc.
    /// Used for logging and error attribution.
    fn id(&self) -> &'static str;

    /// Operations this provider serves.
    fn capabilities(&self) -> &'static [Capability];

    /// Environment variables whose values are still missing.
    ///
    /// Empty when the provider is fully configured.
    fn missing_credentials(&self) -> Vec<&'static str>;

    fn is_configured(&self) -> bool {
        self.missing_credentials().is_empty()
    }

    fn status(&self) -> ProviderStatus {
        let missing = self.missing_credentials();
        ProviderStatus {
            id: self.id(),
            configured: missing.is_empty(),
            missing,
            capabilities: self.capabilities(),
        }
    }
}

/// Latest quote for a symbol.
#[async_trait]
pub trait QuoteSource: Provider {
    async fn get_quote(&self, symbol: &str) -> Result<Value, MarketDataError>;
}

/// Recent news items for a symbol, newest first as the provider orders them.
#[async_trait]
pub trait NewsSource: Provider {
    async fn get_news(&self, symbol: &str, limit: usize) -> Result<Vec<Value>, MarketDataError>;
}

/// Company fundamentals for a ticker or numeric filer identifier.
#[async_trait]
pub trait FactsSource: Provider {
    async fn get_company_facts(&self, identifier: &str) -> Result<Value, MarketDataError>;
}

/// Observations of a macroeconomic series.
#[async_trait]
pub trait SeriesSource: Provider {
    async fn get_series(&self, series_id: &str) -> Result<Value, MarketDataError>;
}

/// Economic calendar events, optionally limited to one country.
#[async_trait]
pub trait CalendarSource: Provider {
    async fn get_calendar(&self, country: Option<&str>) -> Result<Vec<Value>, MarketDataError>;
}

/// Full-text search within a named scope (e.g. a subreddit).
#[async_trait]
pub trait SearchSource: Provider {
    async fn search(
        &self,
        scope: &str,
        query: &str,
        limit: usize,
    ) -> Result<Vec<Value>, MarketDataError>;
}

/// Social message stream for a symbol.
#[async_trait]
pub trait SocialSource: Provider {
    async fn get_symbol_stream(&self, symbol: &str) -> Result<Value, MarketDataError>;
}
