use std::{net::SocketAddr, time::Duration};

use anyhow::Context;
use aurora_market_data::fusion::DEFAULT_NEWS_LIMIT;
use aurora_market_data::http::DEFAULT_TIMEOUT;
use aurora_market_data::{EnvSource, ProcessEnv, SnapshotField};

pub struct Config {
    pub listen_addr: SocketAddr,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub http_timeout: Duration,
    pub news_limit: usize,
    pub mandatory_fields: Vec<SnapshotField>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_source(&ProcessEnv)
    }

    pub fn from_source(env: &dyn EnvSource) -> anyhow::Result<Self> {
        let listen_addr: SocketAddr = env
            .var("AURORA_LISTEN_ADDR")
            .unwrap_or_else(|| "0.0.0.0:8080".to_string())
            .parse()
            .context("Invalid AURORA_LISTEN_ADDR")?;
        let cors_allow = env
            .var("AURORA_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let request_timeout_ms: u64 = env
            .var("AURORA_REQUEST_TIMEOUT_MS")
            .and_then(|v| v.parse().ok())
            .unwrap_or(30000);
        let http_timeout = env
            .var("AURORA_HTTP_TIMEOUT_MS")
            .and_then(|v| v.parse().ok())
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_TIMEOUT);
        let news_limit = env
            .var("AURORA_NEWS_LIMIT")
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_NEWS_LIMIT);
        let mandatory_fields = env
            .var("AURORA_MANDATORY_FIELDS")
            .unwrap_or_else(|| "quote,news".into())
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| s.parse::<SnapshotField>())
            .collect::<Result<Vec<_>, _>>()
            .context("Invalid AURORA_MANDATORY_FIELDS")?;

        Ok(Self {
            listen_addr,
            cors_allow,
            request_timeout: Duration::from_millis(request_timeout_ms),
            http_timeout,
            news_limit,
            mandatory_fields,
        })
    }
}
