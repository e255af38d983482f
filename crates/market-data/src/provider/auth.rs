//! OAuth2 client-credentials support for token-authenticated providers.

use std::future::Future;

use serde_json::Value;
use tokio::sync::OnceCell;
use tracing::debug;

use crate::errors::MarketDataError;
use crate::http::{HttpError, HttpRequest, HttpTransport};

/// Bearer token cached for the lifetime of one adapter instance.
///
/// The first successful exchange populates the cache; every later call reuses
/// that token, even after it has expired upstream. Concurrent first callers
/// share a single exchange. A failed exchange leaves the cache empty, so the
/// next call tries again.
#[derive(Debug, Default)]
pub struct TokenCache {
    token: OnceCell<String>,
}

impl TokenCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The cached token, if one has been fetched.
    pub fn get(&self) -> Option<&str> {
        self.token.get().map(String::as_str)
    }

    /// Return the cached token or run `fetch` once to obtain it.
    pub async fn get_or_fetch<F, Fut>(&self, fetch: F) -> Result<&str, MarketDataError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<String, MarketDataError>>,
    {
        self.token
            .get_or_try_init(fetch)
            .await
            .map(String::as_str)
    }
}

/// Parameters of a client-credentials token request.
pub struct ClientCredentialsGrant<'a> {
    pub token_url: &'a str,
    pub client_id: &'a str,
    pub client_secret: &'a str,
    pub user_agent: &'a str,
}

/// Exchange client id/secret for a bearer token.
///
/// Sends `grant_type=client_credentials` with HTTP basic auth and reads the
/// `access_token` field. A rejected exchange or a response without a token is
/// reported as [`MarketDataError::AuthenticationFailed`]; network failures keep
/// their transport classification.
pub async fn exchange_client_credentials(
    transport: &dyn HttpTransport,
    provider: &str,
    grant: ClientCredentialsGrant<'_>,
) -> Result<String, MarketDataError> {
    let request = HttpRequest::new(grant.token_url)
        .form("grant_type", "client_credentials")
        .header("User-Agent", grant.user_agent)
        .basic_auth(grant.client_id, grant.client_secret);

    debug!("{} token exchange: {}", provider, grant.token_url);

    let payload = transport.post_form(request).await.map_err(|e| match e {
        HttpError::Timeout | HttpError::Transport(_) => MarketDataError::from_http(provider, e),
        HttpError::Status { status, .. } => MarketDataError::AuthenticationFailed {
            provider: provider.to_string(),
            message: format!("token endpoint returned HTTP {}", status),
        },
        HttpError::Decode(message) => MarketDataError::AuthenticationFailed {
            provider: provider.to_string(),
            message: format!("malformed token response: {}", message),
        },
    })?;

    payload
        .get("access_token")
        .and_then(Value::as_str)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .ok_or_else(|| MarketDataError::AuthenticationFailed {
            provider: provider.to_string(),
            message: "token response has no access_token".to_string(),
        })
}
