use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde_json::Value;
use tracing::warn;

use super::{HttpError, HttpRequest, HttpTransport};

/// Timeout applied to every upstream call unless overridden.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Error bodies are truncated to this many characters.
const MAX_ERROR_BODY: usize = 512;

/// [`HttpTransport`] backed by a pooled `reqwest` client.
#[derive(Clone)]
pub struct ReqwestTransport {
    client: Client,
    timeout: Duration,
}

impl ReqwestTransport {
    pub fn new(timeout: Duration) -> Self {
        let client = Client::builder().timeout(timeout).build().unwrap_or_else(|e| {
            warn!("Failed to build HTTP client ({}), using defaults with per-request timeout", e);
            Client::new()
        });

        Self { client, timeout }
    }

    /// Upper bound on every request made through this transport.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn with_headers(mut builder: RequestBuilder, request: &HttpRequest) -> RequestBuilder {
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        builder
    }

    async fn send(builder: RequestBuilder) -> Result<Value, HttpError> {
        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                HttpError::Timeout
            } else {
                HttpError::Transport(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body: String = response
                .text()
                .await
                .unwrap_or_default()
                .chars()
                .take(MAX_ERROR_BODY)
                .collect();
            return Err(HttpError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let text = response.text().await.map_err(|e| {
            if e.is_timeout() {
                HttpError::Timeout
            } else {
                HttpError::Transport(e.to_string())
            }
        })?;

        serde_json::from_str(&text).map_err(|e| HttpError::Decode(e.to_string()))
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT)
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get_json(&self, request: HttpRequest) -> Result<Value, HttpError> {
        let builder = self
            .client
            .get(&request.url)
            .timeout(self.timeout)
            .query(&request.query);
        let builder = Self::with_headers(builder, &request);
        Self::send(builder).await
    }

    async fn post_form(&self, request: HttpRequest) -> Result<Value, HttpError> {
        let mut builder = self
            .client
            .post(&request.url)
            .timeout(self.timeout)
            .query(&request.query)
            .form(&request.form);
        if let Some((user, password)) = &request.basic_auth {
            builder = builder.basic_auth(user, Some(password));
        }
        let builder = Self::with_headers(builder, &request);
        Self::send(builder).await
    }
}
