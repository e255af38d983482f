//! Recording fake transport for adapter tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use super::{HttpError, HttpRequest, HttpTransport};

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Method {
    Get,
    Post,
}

#[derive(Clone, Debug)]
pub(crate) struct RecordedCall {
    pub method: Method,
    pub request: HttpRequest,
}

/// Answers requests from canned routes matched by URL substring.
///
/// Routes are checked in insertion order; unmatched requests get a 404.
pub(crate) struct MockTransport {
    routes: Vec<(String, Result<Value, HttpError>)>,
    calls: Mutex<Vec<RecordedCall>>,
    call_count: AtomicUsize,
    delay: Option<Duration>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            routes: Vec::new(),
            calls: Mutex::new(Vec::new()),
            call_count: AtomicUsize::new(0),
            delay: None,
        }
    }

    pub fn respond(mut self, url_fragment: &str, body: Value) -> Self {
        self.routes.push((url_fragment.to_string(), Ok(body)));
        self
    }

    pub fn fail(mut self, url_fragment: &str, error: HttpError) -> Self {
        self.routes.push((url_fragment.to_string(), Err(error)));
        self
    }

    /// Sleep before answering, to widen race windows in concurrency tests.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn calls_to(&self, url_fragment: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.request.url.contains(url_fragment))
            .count()
    }

    async fn answer(&self, method: Method, request: HttpRequest) -> Result<Value, HttpError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        let url = request.url.clone();
        self.calls
            .lock()
            .unwrap()
            .push(RecordedCall { method, request });

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        self.routes
            .iter()
            .find(|(fragment, _)| url.contains(fragment.as_str()))
            .map(|(_, response)| response.clone())
            .unwrap_or(Err(HttpError::Status {
                status: 404,
                body: format!("no mock route for {}", url),
            }))
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn get_json(&self, request: HttpRequest) -> Result<Value, HttpError> {
        self.answer(Method::Get, request).await
    }

    async fn post_form(&self, request: HttpRequest) -> Result<Value, HttpError> {
        self.answer(Method::Post, request).await
    }
}
