use serde::Serialize;

/// Classification of a [`MarketDataError`](super::MarketDataError).
///
/// Callers that decide whether a failure is recoverable match on the kind
/// instead of the full error, so the provider and message can change without
/// affecting policy.
///
/// | Kind | Network call made? | Typical cause |
/// |------|-------------------|---------------|
/// | `NotConfigured` | No | Credential absent from config and environment |
/// | `AuthenticationFailed` | Yes | Token exchange rejected or malformed |
/// | `NotFound` | Maybe | Identifier cannot be resolved |
/// | `Upstream` | Yes | Non-success status or undecodable body |
/// | `Transport` | Yes | Connection failure or timeout |
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// A required credential is missing. No request was sent.
    NotConfigured,

    /// Exchanging client credentials for a bearer token failed.
    AuthenticationFailed,

    /// The identifier could not be resolved by the provider.
    NotFound,

    /// The provider answered, but not with a usable success response.
    Upstream,

    /// The request never produced a response.
    Transport,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotConfigured => "not_configured",
            Self::AuthenticationFailed => "authentication_failed",
            Self::NotFound => "not_found",
            Self::Upstream => "upstream",
            Self::Transport => "transport",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
