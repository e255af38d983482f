//! Reddit subreddit search provider.
//!
//! Reddit requires an application-only OAuth token. The adapter exchanges its
//! client id and secret once and caches the bearer token for its lifetime;
//! concurrent first searches share that single exchange.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::{debug, info};

use crate::credentials::{vars, ApiCredentials};
use crate::errors::MarketDataError;
use crate::http::{HttpRequest, HttpTransport};
use crate::provider::{
    exchange_client_credentials, missing_vars, path_segment, Capability, ClientCredentialsGrant,
    Provider, SearchSource, TokenCache,
};

const TOKEN_URL: &str = "https://www.reddit.com/api/v1/access_token";
const API_URL: &str = "https://oauth.reddit.com";
const PROVIDER_ID: &str = "REDDIT";

struct RedditCredentials<'a> {
    client_id: &'a str,
    client_secret: &'a str,
    user_agent: &'a str,
}

pub struct RedditProvider {
    transport: Arc<dyn HttpTransport>,
    client_id: Option<String>,
    client_secret: Option<String>,
    user_agent: Option<String>,
    token: TokenCache,
    token_url: String,
    api_url: String,
}

impl RedditProvider {
    pub fn new(
        transport: Arc<dyn HttpTransport>,
        client_id: Option<String>,
        client_secret: Option<String>,
        user_agent: Option<String>,
    ) -> Self {
        Self {
            transport,
            client_id,
            client_secret,
            user_agent,
            token: TokenCache::new(),
            token_url: TOKEN_URL.to_string(),
            api_url: API_URL.to_string(),
        }
    }

    pub fn from_credentials(transport: Arc<dyn HttpTransport>, credentials: &ApiCredentials) -> Self {
        Self::new(
            transport,
            credentials.reddit_client_id.clone(),
            credentials.reddit_client_secret.clone(),
            credentials.reddit_user_agent.clone(),
        )
    }

    fn credentials(&self) -> Result<RedditCredentials<'_>, MarketDataError> {
        match (&self.client_id, &self.client_secret, &self.user_agent) {
            (Some(client_id), Some(client_secret), Some(user_agent)) => Ok(RedditCredentials {
                client_id,
                client_secret,
                user_agent,
            }),
            _ => Err(MarketDataError::not_configured(
                PROVIDER_ID,
                self.missing_credentials(),
            )),
        }
    }

    async fn access_token(&self, creds: &RedditCredentials<'_>) -> Result<&str, MarketDataError> {
        self.token
            .get_or_fetch(|| async move {
                let token = exchange_client_credentials(
                    self.transport.as_ref(),
                    PROVIDER_ID,
                    ClientCredentialsGrant {
                        token_url: &self.token_url,
                        client_id: creds.client_id,
                        client_secret: creds.client_secret,
                        user_agent: creds.user_agent,
                    },
                )
                .await?;
                info!("Reddit: obtained application access token");
                Ok(token)
            })
            .await
    }
}

impl Provider for RedditProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    fn capabilities(&self) -> &'static [Capability] {
        &[Capability::Search]
    }

    fn missing_credentials(&self) -> Vec<&'static str> {
        missing_vars(&[
            (&self.client_id, vars::REDDIT_CLIENT_ID),
            (&self.client_secret, vars::REDDIT_CLIENT_SECRET),
            (&self.user_agent, vars::REDDIT_USER_AGENT),
        ])
    }
}

#[async_trait]
impl SearchSource for RedditProvider {
    async fn search(
        &self,
        subreddit: &str,
        query: &str,
        limit: usize,
    ) -> Result<Vec<Value>, MarketDataError> {
        let creds = self.credentials()?;
        let token = self.access_token(&creds).await?;

        let request = HttpRequest::new(format!(
            "{}/r/{}/search",
            self.api_url,
            path_segment(subreddit)
        ))
        .header("Authorization", format!("Bearer {}", token))
        .header("User-Agent", creds.user_agent)
        .query("q", query)
        .query("limit", limit.to_string())
        .query("sort", "new")
        .query("restrict_sr", "true");

        debug!("Reddit request: {}", request.redacted());

        let payload = self
            .transport
            .get_json(request)
            .await
            .map_err(|e| MarketDataError::from_http(PROVIDER_ID, e))?;

        let children = match payload.pointer("/data/children").and_then(Value::as_array) {
            Some(children) => children,
            None => return Ok(Vec::new()),
        };

        Ok(children
            .iter()
            .map(|child| child.get("data").cloned().unwrap_or_else(|| json!({})))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;
    use crate::http::mock::{Method, MockTransport};
    use crate::http::HttpError;
    use serde_json::json;
    use std::time::Duration;

    fn listing() -> Value {
        json!({
            "kind": "Listing",
            "data": {
                "children": [
                    {"kind": "t3", "data": {"title": "NVDA earnings thread", "score": 120}},
                    {"kind": "t3", "data": {"title": "NVDA calls?", "score": 8}}
                ]
            }
        })
    }

    fn configured(transport: Arc<MockTransport>) -> RedditProvider {
        RedditProvider::new(
            transport,
            Some("id".to_string()),
            Some("secret".to_string()),
            Some("aurora/0.1 by tester".to_string()),
        )
    }

    #[tokio::test]
    async fn test_missing_credentials_listed_without_network() {
        let transport = Arc::new(MockTransport::new());
        let provider = RedditProvider::new(transport.clone(), Some("id".to_string()), None, None);

        let err = provider.search("stocks", "NVDA", 5).await.unwrap_err();
        match err {
            MarketDataError::NotConfigured { missing, .. } => assert_eq!(
                missing,
                vec![vars::REDDIT_CLIENT_SECRET, vars::REDDIT_USER_AGENT]
            ),
            other => panic!("expected NotConfigured, got {:?}", other),
        }
        assert_eq!(transport.call_count(), 0);
    }

    #[tokio::test]
    async fn test_search_maps_children() {
        let transport = Arc::new(
            MockTransport::new()
                .respond("/access_token", json!({"access_token": "tok", "token_type": "bearer"}))
                .respond("/r/wallstreetbets/search", listing()),
        );
        let provider = configured(transport.clone());

        let posts = provider.search("wallstreetbets", "NVDA", 2).await.unwrap();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0]["title"], "NVDA earnings thread");

        let calls = transport.calls();
        assert_eq!(calls[0].method, Method::Post);
        let search = &calls[1].request;
        assert_eq!(search.header_value("Authorization"), Some("Bearer tok"));
        assert_eq!(search.header_value("User-Agent"), Some("aurora/0.1 by tester"));
        assert_eq!(search.query_value("q"), Some("NVDA"));
        assert_eq!(search.query_value("limit"), Some("2"));
        assert_eq!(search.query_value("sort"), Some("new"));
        assert_eq!(search.query_value("restrict_sr"), Some("true"));
    }

    #[tokio::test]
    async fn test_token_exchanged_once_across_searches() {
        let transport = Arc::new(
            MockTransport::new()
                .respond("/access_token", json!({"access_token": "tok"}))
                .respond("/search", listing()),
        );
        let provider = configured(transport.clone());

        provider.search("stocks", "AAPL", 5).await.unwrap();
        provider.search("investing", "AAPL", 5).await.unwrap();

        assert_eq!(transport.calls_to("/access_token"), 1);
        assert_eq!(transport.calls_to("/search"), 2);
    }

    #[tokio::test]
    async fn test_concurrent_first_searches_share_exchange() {
        let transport = Arc::new(
            MockTransport::new()
                .respond("/access_token", json!({"access_token": "tok"}))
                .respond("/search", listing())
                .with_delay(Duration::from_millis(20)),
        );
        let provider = configured(transport.clone());

        let (a, b) = tokio::join!(
            provider.search("stocks", "AAPL", 5),
            provider.search("stocks", "MSFT", 5)
        );
        assert!(a.is_ok() && b.is_ok());
        assert_eq!(transport.calls_to("/access_token"), 1);
    }

    #[tokio::test]
    async fn test_rejected_exchange_is_authentication_failure() {
        let transport = Arc::new(MockTransport::new().fail(
            "/access_token",
            HttpError::Status {
                status: 401,
                body: "{\"error\": 401}".to_string(),
            },
        ));
        let provider = configured(transport.clone());

        let err = provider.search("stocks", "AAPL", 5).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::AuthenticationFailed);
        assert_eq!(transport.calls_to("/search"), 0);
    }

    #[tokio::test]
    async fn test_listing_without_children_is_empty() {
        let transport = Arc::new(
            MockTransport::new()
                .respond("/access_token", json!({"access_token": "tok"}))
                .respond("/search", json!({"kind": "Listing", "data": {}})),
        );
        let provider = configured(transport);

        let posts = provider.search("private", "AAPL", 5).await.unwrap();
        assert!(posts.is_empty());
    }

    #[tokio::test]
    async fn test_child_without_data_becomes_empty_object() {
        let transport = Arc::new(
            MockTransport::new()
                .respond("/access_token", json!({"access_token": "tok"}))
                .respond(
                    "/search",
                    json!({"data": {"children": [{"kind": "more"}, {"data": {"title": "GME"}}]}}),
                ),
        );
        let provider = configured(transport);

        let posts = provider.search("stocks", "GME", 5).await.unwrap();
        assert_eq!(posts, vec![json!({}), json!({"title": "GME"})]);
    }
}
