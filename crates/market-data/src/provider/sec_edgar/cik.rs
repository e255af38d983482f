//! Ticker to CIK resolution backed by the SEC company ticker table.

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;
use tokio::sync::OnceCell;
use tracing::info;

use crate::errors::MarketDataError;

/// One row of `company_tickers.json`.
///
/// The file is an object keyed by row index:
/// `{"0": {"cik_str": 320193, "ticker": "AAPL", "title": "Apple Inc."}, ...}`
#[derive(Debug, Deserialize)]
struct TickerEntry {
    cik_str: u64,
    ticker: String,
}

/// Lazily built uppercase ticker to CIK map.
///
/// The table is fetched at most once per resolver and never refreshed.
/// Concurrent first lookups share the same fetch; a failed fetch leaves the
/// map unbuilt so a later lookup retries.
#[derive(Debug, Default)]
pub(crate) struct CikResolver {
    table: OnceCell<HashMap<String, u64>>,
}

impl CikResolver {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn is_loaded(&self) -> bool {
        self.table.initialized()
    }

    /// Resolve a ticker or numeric CIK.
    ///
    /// Numeric identifiers are returned as-is and never trigger `load`.
    pub async fn resolve<F, Fut>(
        &self,
        provider: &str,
        identifier: &str,
        load: F,
    ) -> Result<u64, MarketDataError>
    where
        F: FnOnce() -> Fut,
        Fut: std::future::Future<Output = Result<Value, MarketDataError>>,
    {
        let identifier = identifier.trim();
        if let Ok(cik) = identifier.parse::<u64>() {
            return Ok(cik);
        }

        let table = self
            .table
            .get_or_try_init(|| async move {
                let payload = load().await?;
                let table = parse_table(provider, payload)?;
                info!("{}: loaded {} ticker mappings", provider, table.len());
                Ok::<_, MarketDataError>(table)
            })
            .await?;

        let ticker = identifier.to_uppercase();
        table
            .get(&ticker)
            .copied()
            .ok_or_else(|| MarketDataError::NotFound {
                provider: provider.to_string(),
                identifier: identifier.to_string(),
            })
    }
}

fn parse_table(provider: &str, payload: Value) -> Result<HashMap<String, u64>, MarketDataError> {
    let rows: HashMap<String, TickerEntry> = serde_json::from_value(payload).map_err(|e| {
        MarketDataError::upstream(provider, format!("malformed ticker table: {}", e))
    })?;

    Ok(rows
        .into_values()
        .map(|entry| (entry.ticker.to_uppercase(), entry.cik_str))
        .collect())
}

/// Zero-padded ten digit form used in EDGAR URLs.
pub(crate) fn format_cik(cik: u64) -> String {
    format!("CIK{:010}", cik)
}
