//! Per-field failure policy for snapshots.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// News items requested per snapshot unless configured otherwise.
pub const DEFAULT_NEWS_LIMIT: usize = 10;

/// A sub-result of a [`TickerSnapshot`](super::TickerSnapshot).
///
/// Declaration order is the order in which failures are reported.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SnapshotField {
    Quote,
    News,
    Fundamentals,
}

impl SnapshotField {
    pub const ALL: [SnapshotField; 3] = [Self::Quote, Self::News, Self::Fundamentals];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Quote => "quote",
            Self::News => "news",
            Self::Fundamentals => "fundamentals",
        }
    }
}

impl fmt::Display for SnapshotField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown snapshot field '{0}' (expected quote, news or fundamentals)")]
pub struct ParseFieldError(pub String);

impl FromStr for SnapshotField {
    type Err = ParseFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "quote" => Ok(Self::Quote),
            "news" => Ok(Self::News),
            "fundamentals" => Ok(Self::Fundamentals),
            _ => Err(ParseFieldError(s.trim().to_string())),
        }
    }
}

/// How a field's failure affects the snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldPolicy {
    /// Failure aborts the snapshot.
    Mandatory,
    /// Failure is logged and the field is marked unavailable.
    BestEffort,
}

/// Snapshot assembly settings.
///
/// The default treats quote and news as mandatory and fundamentals as best
/// effort, with [`DEFAULT_NEWS_LIMIT`] news items.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FusionPolicy {
    quote: FieldPolicy,
    news: FieldPolicy,
    fundamentals: FieldPolicy,
    news_limit: usize,
}

impl Default for FusionPolicy {
    fn default() -> Self {
        Self {
            quote: FieldPolicy::Mandatory,
            news: FieldPolicy::Mandatory,
            fundamentals: FieldPolicy::BestEffort,
            news_limit: DEFAULT_NEWS_LIMIT,
        }
    }
}

impl FusionPolicy {
    pub fn policy(&self, field: SnapshotField) -> FieldPolicy {
        match field {
            SnapshotField::Quote => self.quote,
            SnapshotField::News => self.news,
            SnapshotField::Fundamentals => self.fundamentals,
        }
    }

    pub fn is_mandatory(&self, field: SnapshotField) -> bool {
        self.policy(field) == FieldPolicy::Mandatory
    }

    pub fn news_limit(&self) -> usize {
        self.news_limit
    }

    pub fn with(mut self, field: SnapshotField, policy: FieldPolicy) -> Self {
        match field {
            SnapshotField::Quote => self.quote = policy,
            SnapshotField::News => self.news = policy,
            SnapshotField::Fundamentals => self.fundamentals = policy,
        }
        self
    }

    /// Make exactly the given fields mandatory; every other field becomes
    /// best effort.
    pub fn with_mandatory(self, fields: impl IntoIterator<Item = SnapshotField>) -> Self {
        let mandatory: Vec<SnapshotField> = fields.into_iter().collect();
        SnapshotField::ALL.into_iter().fold(self, |policy, field| {
            let rule = if mandatory.contains(&field) {
                FieldPolicy::Mandatory
            } else {
                FieldPolicy::BestEffort
            };
            policy.with(field, rule)
        })
    }

    pub fn with_news_limit(mut self, limit: usize) -> Self {
        self.news_limit = limit;
        self
    }
}
