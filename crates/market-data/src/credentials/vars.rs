//! Environment variable names read by the credential resolver.

pub const ALPHA_VANTAGE_API_KEY: &str = "ALPHA_VANTAGE_API_KEY";
pub const ALPHA_VANTAGE_EMAIL: &str = "ALPHA_VANTAGE_EMAIL";
pub const BENZINGA_API_KEY: &str = "BENZINGA_API_KEY";
pub const FINNHUB_API_KEY: &str = "FINNHUB_API_KEY";
pub const FINNHUB_SECRET: &str = "FINNHUB_SECRET";
pub const FINNHUB_PROXY_URL: &str = "FINNHUB_PROXY_URL";
pub const OPENAI_API_KEY: &str = "OPENAI_API_KEY";
pub const POLYGON_API_KEY: &str = "POLYGON_API_KEY";
pub const POLYGON_ACCESS_KEY_ID: &str = "POLYGON_ACCESS_KEY_ID";
pub const POLYGON_SECRET_ACCESS_KEY: &str = "POLYGON_SECRET_ACCESS_KEY";
pub const POLYGON_S3_ENDPOINT: &str = "POLYGON_S3_ENDPOINT";
pub const SCHWAB_API_KEY: &str = "SCHWAB_API_KEY";
pub const SCHWAB_APP_SECRET: &str = "SCHWAB_APP_SECRET";
pub const SEC_EDGAR_USER_AGENT: &str = "SEC_EDGAR_USER_AGENT";
pub const FRED_API_KEY: &str = "FRED_API_KEY";
pub const REDDIT_CLIENT_ID: &str = "REDDIT_CLIENT_ID";
pub const REDDIT_CLIENT_SECRET: &str = "REDDIT_CLIENT_SECRET";
pub const REDDIT_USER_AGENT: &str = "REDDIT_USER_AGENT";
pub const STOCKTWITS_ACCESS_TOKEN: &str = "STOCKTWITS_ACCESS_TOKEN";
pub const IEX_API_TOKEN: &str = "IEX_API_TOKEN";
pub const TRADINGECONOMICS_CLIENT_KEY: &str = "TRADINGECONOMICS_CLIENT_KEY";
pub const TRADINGECONOMICS_CLIENT_SECRET: &str = "TRADINGECONOMICS_CLIENT_SECRET";
