use std::sync::Arc;

use crate::config::Config;
use aurora_market_data::{
    ApiCredentials, FusionOrchestrator, FusionPolicy, HttpTransport, ProviderRegistry,
    ReqwestTransport,
};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub registry: Arc<ProviderRegistry>,
    pub fusion: Arc<FusionOrchestrator>,
}

pub fn init_tracing() {
    let log_format = std::env::var("AURORA_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

/// Build application state from the process environment.
pub fn build_state(config: &Config) -> Arc<AppState> {
    let credentials = ApiCredentials::from_env();
    tracing::info!("Credentials present: {:?}", credentials);
    let transport: Arc<dyn HttpTransport> = Arc::new(ReqwestTransport::new(config.http_timeout));
    build_state_with(config, &credentials, transport)
}

/// Build application state from explicit credentials and transport.
pub fn build_state_with(
    config: &Config,
    credentials: &ApiCredentials,
    transport: Arc<dyn HttpTransport>,
) -> Arc<AppState> {
    let registry = Arc::new(ProviderRegistry::new(credentials, transport));

    let policy = FusionPolicy::default()
        .with_mandatory(config.mandatory_fields.iter().copied())
        .with_news_limit(config.news_limit);
    tracing::info!(
        "Snapshot policy: mandatory fields {:?}, news limit {}",
        config.mandatory_fields,
        config.news_limit
    );
    let fusion = Arc::new(registry.fusion().with_policy(policy));

    Arc::new(AppState { registry, fusion })
}
