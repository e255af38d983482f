//! Provider capabilities and configuration status.

use serde::Serialize;

/// A single operation an adapter can serve.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    Quote,
    News,
    CompanyFacts,
    Filings,
    Series,
    Calendar,
    Search,
    SocialStream,
}

/// Whether a provider can be called, and what it still needs.
///
/// Computed from the adapter's resolved credentials without any I/O, so the
/// status of an unconfigured adapter can be reported before it is invoked.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderStatus {
    /// Provider identifier, e.g. "ALPHA_VANTAGE"
    pub id: &'static str,

    /// True when every required credential is present.
    pub configured: bool,

    /// Environment variables that must be set before the provider is usable.
    pub missing: Vec<&'static str>,

    /// Operations the provider exposes.
    pub capabilities: &'static [Capability],
}
