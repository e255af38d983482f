use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use super::SnapshotField;
use crate::errors::{ErrorKind, MarketDataError};

/// A snapshot sub-result: the provider payload, or an explicit marker that
/// the provider could not supply it.
///
/// Serialized as `{"status": "available", "data": ...}` or
/// `{"status": "unavailable"}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "data", rename_all = "snake_case")]
pub enum SourcePayload<T> {
    Available(T),
    Unavailable,
}

impl<T> SourcePayload<T> {
    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available(_))
    }

    pub fn as_available(&self) -> Option<&T> {
        match self {
            Self::Available(data) => Some(data),
            Self::Unavailable => None,
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Available(data) => Some(data),
            Self::Unavailable => None,
        }
    }
}

impl<T> From<Option<T>> for SourcePayload<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Unavailable, Self::Available)
    }
}

/// Unified per-symbol record assembled by the
/// [`FusionOrchestrator`](super::FusionOrchestrator).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TickerSnapshot {
    pub symbol: String,
    pub quote: SourcePayload<Value>,
    pub news: SourcePayload<Vec<Value>>,
    pub fundamentals: SourcePayload<Value>,
    pub fetched_at: DateTime<Utc>,
}

/// A mandatory field failed, so no snapshot was produced.
#[derive(Debug, Error)]
#[error("{field} unavailable for {symbol}: {source}")]
pub struct SnapshotError {
    pub symbol: String,
    pub field: SnapshotField,
    #[source]
    pub source: MarketDataError,
}

impl SnapshotError {
    /// Classification of the underlying provider failure.
    pub fn kind(&self) -> ErrorKind {
        self.source.kind()
    }
}
