#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use aurora_market_data::{ApiCredentials, HttpError, HttpRequest, HttpTransport};
use aurora_server::{api::app_router, build_state_with, config::Config};
use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

/// Canned upstream answers keyed by URL substring.
#[derive(Default)]
pub struct StubTransport {
    routes: Vec<(&'static str, Value)>,
    calls: AtomicUsize,
}

impl StubTransport {
    pub fn with(mut self, fragment: &'static str, body: Value) -> Self {
        self.routes.push((fragment, body));
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn answer(&self, request: &HttpRequest) -> Result<Value, HttpError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.routes
            .iter()
            .find(|(fragment, _)| request.url.contains(fragment))
            .map(|(_, body)| body.clone())
            .ok_or(HttpError::Status {
                status: 404,
                body: String::new(),
            })
    }
}

#[async_trait]
impl HttpTransport for StubTransport {
    async fn get_json(&self, request: HttpRequest) -> Result<Value, HttpError> {
        self.answer(&request)
    }

    async fn post_form(&self, request: HttpRequest) -> Result<Value, HttpError> {
        self.answer(&request)
    }
}

pub fn test_config(overrides: &[(&str, &str)]) -> Config {
    let env: HashMap<String, String> = overrides
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Config::from_source(&env).unwrap()
}

pub fn build_router(
    config: &Config,
    credentials: &ApiCredentials,
    transport: Arc<StubTransport>,
) -> Router {
    let state = build_state_with(config, credentials, transport);
    app_router(state, config)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));
    (status, body)
}
