//! Provider abstractions and adapter implementations.
//!
//! This module contains:
//! - The [`Provider`] identity trait and one capability trait per operation
//! - Provider status reporting
//! - OAuth2 client-credentials token caching
//! - One adapter per upstream service
//!
//! # Architecture
//!
//! Each adapter owns exactly one credential set and one base endpoint, and
//! shares the process-wide [`HttpTransport`](crate::http::HttpTransport).
//! Adapters are cheap to construct and never perform I/O until a capability
//! operation is called; credentials are checked on every call so an
//! unconfigured adapter can still be built and asked for its status.
//!
//! Payloads are passed through as JSON. Where the upstream nests the useful
//! part under a known key the adapter unwraps one level, falling back to the
//! raw payload when the key is absent.

mod auth;
mod capabilities;
mod traits;

pub mod alpha_vantage;
pub mod benzinga;
pub mod finnhub;
pub mod fred;
pub mod iex;
pub mod polygon;
pub mod reddit;
pub mod sec_edgar;
pub mod stocktwits;
pub mod tradingeconomics;

// Re-exports
pub use auth::{exchange_client_credentials, ClientCredentialsGrant, TokenCache};
pub use capabilities::{Capability, ProviderStatus};
pub use traits::{
    CalendarSource, FactsSource, NewsSource, Provider, QuoteSource, SearchSource, SeriesSource,
    SocialSource,
};

use serde_json::Value;

use crate::errors::MarketDataError;

/// Names of the required variables whose values are absent.
pub(crate) fn missing_vars(required: &[(&Option<String>, &'static str)]) -> Vec<&'static str> {
    required
        .iter()
        .filter(|(value, _)| value.is_none())
        .map(|(_, name)| *name)
        .collect()
}

/// A single required credential, or `NotConfigured`.
pub(crate) fn require<'a>(
    provider: &str,
    value: &'a Option<String>,
    var: &'static str,
) -> Result<&'a str, MarketDataError> {
    value
        .as_deref()
        .ok_or_else(|| MarketDataError::not_configured(provider, vec![var]))
}

/// Take `payload[key]` when present, otherwise the payload itself.
pub(crate) fn unwrap_key(mut payload: Value, key: &str) -> Value {
    match payload.get_mut(key) {
        Some(inner) => inner.take(),
        None => payload,
    }
}

/// Interpret a payload as a list of items.
pub(crate) fn expect_array(provider: &str, payload: Value) -> Result<Vec<Value>, MarketDataError> {
    match payload {
        Value::Array(items) => Ok(items),
        other => Err(MarketDataError::upstream(
            provider,
            format!("expected a JSON array, got {}", json_type(&other)),
        )),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Percent-encode a caller-supplied value for use as a URL path segment.
pub(crate) fn path_segment(value: &str) -> String {
    urlencoding::encode(value.trim()).into_owned()
}
