//! HTTP transport consumed by every provider adapter.
//!
//! Adapters never talk to `reqwest` directly. They build an [`HttpRequest`]
//! and hand it to an [`HttpTransport`], which performs the call with a bounded
//! timeout and decodes the JSON body. Sharing one transport keeps a single
//! connection pool for all providers and lets tests substitute a fake.

mod reqwest_transport;

#[cfg(test)]
pub(crate) mod mock;

pub use reqwest_transport::{ReqwestTransport, DEFAULT_TIMEOUT};

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Failure of a single HTTP exchange, before it is attributed to a provider.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HttpError {
    /// The server answered with a non-success status.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The request exceeded the transport timeout.
    #[error("Request timed out")]
    Timeout,

    /// Connection, TLS or protocol failure.
    #[error("Request failed: {0}")]
    Transport(String),

    /// The body was not valid JSON.
    #[error("Invalid JSON body: {0}")]
    Decode(String),
}

/// A request description shared by GET and form POST calls.
///
/// `form` and `basic_auth` are only sent by [`HttpTransport::post_form`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    pub form: Vec<(String, String)>,
    pub basic_auth: Option<(String, String)>,
}

impl HttpRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    pub fn query(mut self, key: &str, value: impl Into<String>) -> Self {
        self.query.push((key.to_string(), value.into()));
        self
    }

    pub fn header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.push((name.to_string(), value.into()));
        self
    }

    pub fn form(mut self, key: &str, value: impl Into<String>) -> Self {
        self.form.push((key.to_string(), value.into()));
        self
    }

    pub fn basic_auth(mut self, user: &str, password: &str) -> Self {
        self.basic_auth = Some((user.to_string(), password.to_string()));
        self
    }

    /// Look up a query parameter by name.
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Look up a header by name (case-insensitive).
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// URL with secret-bearing query values masked, for logging.
    pub(crate) fn redacted(&self) -> String {
        const SECRET_PARAMS: &[&str] = &["apikey", "apiKey", "api_key", "token", "access_token", "client"];

        if self.query.is_empty() {
            return self.url.clone();
        }
        let query = self
            .query
            .iter()
            .map(|(k, v)| {
                if SECRET_PARAMS.contains(&k.as_str()) {
                    format!("{}=***", k)
                } else {
                    format!("{}={}", k, v)
                }
            })
            .collect::<Vec<_>>()
            .join("&");
        format!("{}?{}", self.url, query)
    }
}

/// The HTTP primitive every adapter is built on.
///
/// Implementations must enforce a bounded timeout and report non-success
/// statuses as [`HttpError::Status`].
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// `GET url?query` with the given headers, decoding a JSON body.
    async fn get_json(&self, request: HttpRequest) -> Result<Value, HttpError>;

    /// `POST url` with a urlencoded form body and optional basic auth,
    /// decoding a JSON body.
    async fn post_form(&self, request: HttpRequest) -> Result<Value, HttpError>;
}
