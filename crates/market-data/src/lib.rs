//! Aurora Market Data Crate
//!
//! This crate aggregates market, news, fundamentals, macro and social data from
//! independent upstream providers behind one uniform access surface, and fuses
//! per-symbol results into a single snapshot.
//!
//! # Overview
//!
//! The crate provides:
//! - Credential resolution from explicit values and the environment
//! - One adapter per upstream provider (static API key, query token, OAuth2
//!   client credentials)
//! - Lazy, single-flight caches for bearer tokens and the ticker to CIK table
//! - A registry that builds every adapter and reports what is configured
//! - A fusion orchestrator with per-field mandatory/best-effort policy
//!
//! # Architecture
//!
//! ```text
//! +------------------+
//! |  ApiCredentials  |  (explicit values, then environment)
//! +------------------+
//!          |
//!          v
//! +------------------+     +------------------+
//! | ProviderRegistry | --> |  HttpTransport   |  (shared, bounded timeout)
//! +------------------+     +------------------+
//!          |
//!          v
//! +------------------+
//! |    Adapters      |  (QuoteSource, NewsSource, FactsSource, ...)
//! +------------------+
//!          |
//!          v
//! +------------------+
//! |FusionOrchestrator|  (quote + news + fundamentals)
//! +------------------+
//!          |
//!          v
//! +------------------+
//! |  TickerSnapshot  |
//! +------------------+
//! ```
//!
//! # Errors
//!
//! Adapters return [`MarketDataError`]; use [`MarketDataError::kind`] to
//! branch on the category. The orchestrator wraps mandatory failures in
//! [`SnapshotError`], which names the field that failed.

pub mod credentials;
pub mod errors;
pub mod fusion;
pub mod http;
pub mod provider;
pub mod registry;

// Re-export core types
pub use credentials::{resolve_value, ApiCredentials, EnvSource, ProcessEnv};
pub use errors::{ErrorKind, MarketDataError};
pub use fusion::{
    FieldPolicy, FusionOrchestrator, FusionPolicy, SnapshotError, SnapshotField, SourcePayload,
    TickerSnapshot,
};
pub use http::{HttpError, HttpRequest, HttpTransport, ReqwestTransport};
pub use registry::ProviderRegistry;

// Re-export provider types
pub use provider::alpha_vantage::AlphaVantageProvider;
pub use provider::benzinga::BenzingaProvider;
pub use provider::finnhub::FinnhubProvider;
pub use provider::fred::FredProvider;
pub use provider::iex::IexProvider;
pub use provider::polygon::PolygonProvider;
pub use provider::reddit::RedditProvider;
pub use provider::sec_edgar::SecEdgarProvider;
pub use provider::stocktwits::StockTwitsProvider;
pub use provider::tradingeconomics::TradingEconomicsProvider;
pub use provider::{
    CalendarSource, Capability, FactsSource, NewsSource, Provider, ProviderStatus, QuoteSource,
    SearchSource, SeriesSource, SocialSource,
};
