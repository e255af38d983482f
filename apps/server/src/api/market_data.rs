use std::sync::Arc;

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
};
use aurora_market_data::{
    CalendarSource, FactsSource, QuoteSource, SearchSource, SeriesSource, SocialSource,
    TickerSnapshot,
};
use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde_json::Value;

const DEFAULT_SEARCH_LIMIT: usize = 10;
const MAX_SEARCH_LIMIT: usize = 100;

fn require_param(name: &str, value: &str) -> ApiResult<()> {
    if value.trim().is_empty() {
        return Err(ApiError::BadRequest(format!("{} must not be empty", name)));
    }
    Ok(())
}

async fn get_snapshot(
    State(state): State<Arc<AppState>>,
    Path(symbol): Path<String>,
) -> ApiResult<Json<TickerSnapshot>> {
    require_param("symbol", &symbol)?;
    let snapshot = state.fusion.snapshot(&symbol).await?;
    Ok(Json(snapshot))
}

async fn get_quote(
    State(state): State<Arc<AppState>>,
    Path((provider, symbol)): Path<(String, String)>,
) -> ApiResult<Json<Value>> {
    require_param("symbol", &symbol)?;
    let source = state
        .registry
        .quote_source(&provider)
        .ok_or_else(|| ApiError::NotFound(format!("Unknown quote provider: {}", provider)))?;
    let quote = source.get_quote(symbol.trim()).await?;
    Ok(Json(quote))
}

async fn get_series(
    State(state): State<Arc<AppState>>,
    Path(series_id): Path<String>,
) -> ApiResult<Json<Value>> {
    require_param("series_id", &series_id)?;
    let series = state.registry.fred().get_series(series_id.trim()).await?;
    Ok(Json(series))
}

#[derive(serde::Deserialize)]
struct CalendarQuery {
    country: Option<String>,
}

async fn get_calendar(
    State(state): State<Arc<AppState>>,
    Query(q): Query<CalendarQuery>,
) -> ApiResult<Json<Vec<Value>>> {
    let events = state
        .registry
        .tradingeconomics()
        .get_calendar(q.country.as_deref())
        .await?;
    Ok(Json(events))
}

async fn get_social_stream(
    State(state): State<Arc<AppState>>,
    Path(symbol): Path<String>,
) -> ApiResult<Json<Value>> {
    require_param("symbol", &symbol)?;
    let stream = state
        .registry
        .stocktwits()
        .get_symbol_stream(symbol.trim())
        .await?;
    Ok(Json(stream))
}

#[derive(serde::Deserialize)]
struct SearchQuery {
    q: String,
    limit: Option<usize>,
}

async fn search_subreddit(
    State(state): State<Arc<AppState>>,
    Path(subreddit): Path<String>,
    Query(q): Query<SearchQuery>,
) -> ApiResult<Json<Vec<Value>>> {
    require_param("q", &q.q)?;
    let limit = q
        .limit
        .unwrap_or(DEFAULT_SEARCH_LIMIT)
        .clamp(1, MAX_SEARCH_LIMIT);
    let posts = state
        .registry
        .reddit()
        .search(&subreddit, q.q.trim(), limit)
        .await?;
    Ok(Json(posts))
}

async fn get_company_facts(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Value>> {
    require_param("id", &id)?;
    let facts = state.registry.sec_edgar().get_company_facts(&id).await?;
    Ok(Json(facts))
}

async fn get_submissions(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Value>> {
    require_param("id", &id)?;
    let submissions = state.registry.sec_edgar().get_submissions(&id).await?;
    Ok(Json(submissions))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/snapshot/{symbol}", get(get_snapshot))
        .route("/quote/{provider}/{symbol}", get(get_quote))
        .route("/series/{series_id}", get(get_series))
        .route("/calendar", get(get_calendar))
        .route("/social/{symbol}", get(get_social_stream))
        .route("/reddit/{subreddit}/search", get(search_subreddit))
        .route("/filings/{id}/facts", get(get_company_facts))
        .route("/filings/{id}/submissions", get(get_submissions))
}
