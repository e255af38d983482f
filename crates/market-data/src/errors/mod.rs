//! Error types and classification for the market data crate.
//!
//! This module provides:
//! - [`MarketDataError`]: The error enum returned by every provider adapter
//! - [`ErrorKind`]: Classification used by the fusion layer to apply policy

mod kind;

pub use kind::ErrorKind;

use thiserror::Error;

use crate::http::HttpError;

/// Errors that can occur while calling an upstream provider.
///
/// Adapters never swallow errors: each failure is returned with its specific
/// variant so the caller can attribute it. Use [`kind`](Self::kind) to branch
/// on the category.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// A credential the operation needs is absent.
    /// Raised before any network I/O.
    #[error("Provider not configured: {provider} (missing {})", .missing.join(", "))]
    NotConfigured {
        /// The provider that is missing credentials
        provider: String,
        /// Names of the missing environment variables
        missing: Vec<&'static str>,
    },

    /// The OAuth token exchange did not yield a bearer token.
    #[error("Authentication failed: {provider} - {message}")]
    AuthenticationFailed {
        /// The provider whose token endpoint failed
        provider: String,
        /// Why the exchange failed
        message: String,
    },

    /// The identifier could not be resolved (e.g. unknown ticker).
    #[error("Not found: {provider} - {identifier}")]
    NotFound {
        /// The provider that failed to resolve the identifier
        provider: String,
        /// The identifier as given by the caller
        identifier: String,
    },

    /// The provider responded with a non-success status or an unusable body.
    #[error("Upstream error: {provider} - {message}")]
    Upstream {
        /// The provider that returned the error
        provider: String,
        /// HTTP status, when the provider answered at all
        status: Option<u16>,
        /// The error message from the provider
        message: String,
    },

    /// The request failed at the network level (connect, TLS, timeout).
    #[error("Transport error: {provider} - {message}")]
    Transport {
        /// The provider being called
        provider: String,
        /// The underlying transport message
        message: String,
    },
}

impl MarketDataError {
    /// Returns the classification for this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use aurora_market_data::errors::{ErrorKind, MarketDataError};
    ///
    /// let error = MarketDataError::NotFound {
    ///     provider: "SEC_EDGAR".to_string(),
    ///     identifier: "ZZZZ".to_string(),
    /// };
    /// assert_eq!(error.kind(), ErrorKind::NotFound);
    /// ```
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotConfigured { .. } => ErrorKind::NotConfigured,
            Self::AuthenticationFailed { .. } => ErrorKind::AuthenticationFailed,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::Upstream { .. } => ErrorKind::Upstream,
            Self::Transport { .. } => ErrorKind::Transport,
        }
    }

    /// The provider the error is attributed to.
    pub fn provider(&self) -> &str {
        match self {
            Self::NotConfigured { provider, .. }
            | Self::AuthenticationFailed { provider, .. }
            | Self::NotFound { provider, .. }
            | Self::Upstream { provider, .. }
            | Self::Transport { provider, .. } => provider,
        }
    }

    pub(crate) fn not_configured(provider: &str, missing: Vec<&'static str>) -> Self {
        Self::NotConfigured {
            provider: provider.to_string(),
            missing,
        }
    }

    pub(crate) fn upstream(provider: &str, message: impl Into<String>) -> Self {
        Self::Upstream {
            provider: provider.to_string(),
            status: None,
            message: message.into(),
        }
    }

    /// Attribute a transport-level failure to a provider.
    pub(crate) fn from_http(provider: &str, error: HttpError) -> Self {
        match error {
            HttpError::Status { status, body } => Self::Upstream {
                provider: provider.to_string(),
                status: Some(status),
                message: if body.is_empty() {
                    format!("HTTP {}", status)
                } else {
                    format!("HTTP {} - {}", status, body)
                },
            },
            HttpError::Decode(message) => Self::Upstream {
                provider: provider.to_string(),
                status: None,
                message: format!("Failed to parse response: {}", message),
            },
            HttpError::Timeout => Self::Transport {
                provider: provider.to_string(),
                message: "request timed out".to_string(),
            },
            HttpError::Transport(message) => Self::Transport {
                provider: provider.to_string(),
                message,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_configured_kind() {
        let error = MarketDataError::not_configured("BENZINGA", vec!["BENZINGA_API_KEY"]);
        assert_eq!(error.kind(), ErrorKind::NotConfigured);
        assert_eq!(error.provider(), "BENZINGA");
    }

    #[test]
    fn test_status_maps_to_upstream() {
        let error = MarketDataError::from_http(
            "FRED",
            HttpError::Status {
                status: 500,
                body: String::new(),
            },
        );
        assert_eq!(error.kind(), ErrorKind::Upstream);
        match error {
            MarketDataError::Upstream { status, message, .. } => {
                assert_eq!(status, Some(500));
                assert_eq!(message, "HTTP 500");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_decode_maps_to_upstream() {
        let error = MarketDataError::from_http("IEX", HttpError::Decode("eof".to_string()));
        assert_eq!(error.kind(), ErrorKind::Upstream);
    }

    #[test]
    fn test_timeout_and_transport_map_to_transport() {
        let timeout = MarketDataError::from_http("POLYGON", HttpError::Timeout);
        assert_eq!(timeout.kind(), ErrorKind::Transport);

        let refused =
            MarketDataError::from_http("POLYGON", HttpError::Transport("refused".to_string()));
        assert_eq!(refused.kind(), ErrorKind::Transport);
    }

    #[test]
    fn test_error_display() {
        let error = MarketDataError::not_configured(
            "REDDIT",
            vec!["REDDIT_CLIENT_ID", "REDDIT_USER_AGENT"],
        );
        assert_eq!(
            format!("{}", error),
            "Provider not configured: REDDIT (missing REDDIT_CLIENT_ID, REDDIT_USER_AGENT)"
        );

        let error = MarketDataError::NotFound {
            provider: "SEC_EDGAR".to_string(),
            identifier: "ZZZZ".to_string(),
        };
        assert_eq!(format!("{}", error), "Not found: SEC_EDGAR - ZZZZ");

        let error = MarketDataError::upstream("ALPHA_VANTAGE", "API key invalid");
        assert_eq!(
            format!("{}", error),
            "Upstream error: ALPHA_VANTAGE - API key invalid"
        );
    }
}
