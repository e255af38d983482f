mod common;

use std::sync::Arc;

use aurora_market_data::ApiCredentials;
use common::{build_router, get, test_config, StubTransport};
use serde_json::json;

fn snapshot_credentials() -> ApiCredentials {
    ApiCredentials {
        alpha_vantage_api_key: Some("av-key".to_string()),
        benzinga_api_key: Some("bz-key".to_string()),
        sec_edgar_user_agent: Some("AuroraQuant/0.1 (ops@example.com)".to_string()),
        ..ApiCredentials::default()
    }
}

fn upstream() -> StubTransport {
    StubTransport::default()
        .with(
            "alphavantage.co",
            json!({"Global Quote": {"01. symbol": "AAPL", "05. price": "189.50"}}),
        )
        .with(
            "benzinga.com",
            json!([{"id": 1, "title": "Apple beats estimates"}]),
        )
        .with(
            "company_tickers.json",
            json!({"0": {"cik_str": 320193, "ticker": "AAPL", "title": "Apple Inc."}}),
        )
}

#[tokio::test]
async fn snapshot_without_credentials_is_unavailable() {
    let config = test_config(&[]);
    let transport = Arc::new(StubTransport::default());
    let app = build_router(&config, &ApiCredentials::default(), transport.clone());

    let (status, body) = get(&app, "/api/v1/snapshot/AAPL").await;
    assert_eq!(status, 503);
    assert_eq!(body["kind"], "not_configured");
    assert_eq!(body["field"], "quote");
    assert_eq!(transport.calls(), 0);
}

#[tokio::test]
async fn snapshot_degrades_missing_fundamentals() {
    let config = test_config(&[]);
    let app = build_router(&config, &snapshot_credentials(), Arc::new(upstream()));

    let (status, body) = get(&app, "/api/v1/snapshot/AAPL").await;
    assert_eq!(status, 200);
    assert_eq!(body["symbol"], "AAPL");
    assert_eq!(body["quote"]["status"], "available");
    assert_eq!(body["quote"]["data"]["05. price"], "189.50");
    assert_eq!(body["news"]["data"][0]["title"], "Apple beats estimates");
    // No companyfacts route is stubbed, so SEC answers 404.
    assert_eq!(body["fundamentals"], json!({"status": "unavailable"}));
    assert!(body["fetchedAt"].is_string());
}

#[tokio::test]
async fn snapshot_with_mandatory_fundamentals_fails() {
    let config = test_config(&[("AURORA_MANDATORY_FIELDS", "quote,news,fundamentals")]);
    let app = build_router(&config, &snapshot_credentials(), Arc::new(upstream()));

    let (status, body) = get(&app, "/api/v1/snapshot/AAPL").await;
    assert_eq!(status, 502);
    assert_eq!(body["kind"], "upstream");
    assert_eq!(body["field"], "fundamentals");
}

#[tokio::test]
async fn snapshot_unknown_ticker_with_mandatory_fundamentals_is_not_found() {
    let config = test_config(&[("AURORA_MANDATORY_FIELDS", "fundamentals")]);
    let app = build_router(&config, &snapshot_credentials(), Arc::new(upstream()));

    let (status, body) = get(&app, "/api/v1/snapshot/ZZZZ").await;
    assert_eq!(status, 404);
    assert_eq!(body["kind"], "not_found");
}

#[tokio::test]
async fn quote_from_named_provider() {
    let config = test_config(&[]);
    let app = build_router(&config, &snapshot_credentials(), Arc::new(upstream()));

    let (status, body) = get(&app, "/api/v1/quote/alpha_vantage/AAPL").await;
    assert_eq!(status, 200);
    assert_eq!(body["01. symbol"], "AAPL");

    let (status, _) = get(&app, "/api/v1/quote/benzinga/AAPL").await;
    assert_eq!(status, 404);
}

#[tokio::test]
async fn social_stream_works_anonymously() {
    let config = test_config(&[]);
    let transport = StubTransport::default().with(
        "/streams/symbol/TSLA.json",
        json!({"symbol": {"symbol": "TSLA"}, "messages": []}),
    );
    let app = build_router(&config, &ApiCredentials::default(), Arc::new(transport));

    let (status, body) = get(&app, "/api/v1/social/TSLA").await;
    assert_eq!(status, 200);
    assert_eq!(body["symbol"]["symbol"], "TSLA");
}

#[tokio::test]
async fn reddit_search_requires_query() {
    let config = test_config(&[]);
    let app = build_router(&config, &ApiCredentials::default(), Arc::new(StubTransport::default()));

    let (status, _) = get(&app, "/api/v1/reddit/stocks/search?q=%20").await;
    assert_eq!(status, 400);

    let (status, body) = get(&app, "/api/v1/reddit/stocks/search?q=AAPL").await;
    assert_eq!(status, 503);
    assert_eq!(body["kind"], "not_configured");
}
