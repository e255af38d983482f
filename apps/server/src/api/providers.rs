use std::sync::Arc;

use crate::main_lib::AppState;
use aurora_market_data::ProviderStatus;
use axum::{extract::State, routing::get, Json, Router};

async fn get_provider_statuses(State(state): State<Arc<AppState>>) -> Json<Vec<ProviderStatus>> {
    Json(state.registry.statuses())
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/providers", get(get_provider_statuses))
}
