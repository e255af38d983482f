use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use super::{FieldPolicy, FusionPolicy, SnapshotError, SnapshotField, SourcePayload, TickerSnapshot};
use crate::errors::MarketDataError;
use crate::provider::{FactsSource, NewsSource, QuoteSource};

/// Builds [`TickerSnapshot`]s from one quote, one news and one fundamentals
/// source.
///
/// The three calls for a symbol are issued concurrently and are independent
/// of each other: every call is made regardless of how the others end.
/// Outcomes are then settled in field order against the [`FusionPolicy`].
pub struct FusionOrchestrator {
    quotes: Arc<dyn QuoteSource>,
    news: Arc<dyn NewsSource>,
    facts: Arc<dyn FactsSource>,
    policy: FusionPolicy,
}

impl FusionOrchestrator {
    pub fn new(
        quotes: Arc<dyn QuoteSource>,
        news: Arc<dyn NewsSource>,
        facts: Arc<dyn FactsSource>,
    ) -> Self {
        Self {
            quotes,
            news,
            facts,
            policy: FusionPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: FusionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Fetch and fuse everything known about `symbol`.
    ///
    /// # Errors
    ///
    /// Returns a [`SnapshotError`] for the first mandatory field (in quote,
    /// news, fundamentals order) whose provider failed. Best-effort failures
    /// never surface here; they become [`SourcePayload::Unavailable`].
    pub async fn snapshot(&self, symbol: &str) -> Result<TickerSnapshot, SnapshotError> {
        let symbol = symbol.trim();
        info!("Building snapshot for {}", symbol);

        let (quote, news, fundamentals) = tokio::join!(
            self.quotes.get_quote(symbol),
            self.news.get_news(symbol, self.policy.news_limit()),
            self.facts.get_company_facts(symbol),
        );

        let snapshot = TickerSnapshot {
            symbol: symbol.to_string(),
            quote: self.settle(symbol, SnapshotField::Quote, quote)?,
            news: self.settle(symbol, SnapshotField::News, news)?,
            fundamentals: self.settle(symbol, SnapshotField::Fundamentals, fundamentals)?,
            fetched_at: Utc::now(),
        };

        info!(
            "Snapshot for {} complete (quote: {}, news: {}, fundamentals: {})",
            symbol,
            availability(&snapshot.quote),
            availability(&snapshot.news),
            availability(&snapshot.fundamentals)
        );
        Ok(snapshot)
    }

    fn settle<T>(
        &self,
        symbol: &str,
        field: SnapshotField,
        outcome: Result<T, MarketDataError>,
    ) -> Result<SourcePayload<T>, SnapshotError> {
        match (outcome, self.policy.policy(field)) {
            (Ok(data), _) => Ok(SourcePayload::Available(data)),
            (Err(source), FieldPolicy::Mandatory) => Err(SnapshotError {
                symbol: symbol.to_string(),
                field,
                source,
            }),
            (Err(err), FieldPolicy::BestEffort) => {
                warn!(
                    "{} for {} unavailable from {} ({}): {}",
                    field,
                    symbol,
                    err.provider(),
                    err.kind(),
                    err
                );
                Ok(SourcePayload::Unavailable)
            }
        }
    }
}

fn availability<T>(payload: &SourcePayload<T>) -> &'static str {
    if payload.is_available() {
        "available"
    } else {
        "unavailable"
    }
}
