//! Credential resolution for upstream providers.
//!
//! Every provider reads its secrets from a flat set of named values. An
//! explicitly supplied value always wins over the environment value of the
//! same name; empty strings count as absent. Resolution never fails: a missing
//! credential only surfaces as [`NotConfigured`] when the adapter that needs it
//! is called.
//!
//! [`NotConfigured`]: crate::errors::MarketDataError::NotConfigured

pub mod vars;

use std::collections::HashMap;
use std::fmt;

/// Read-only source of named configuration values.
pub trait EnvSource {
    fn var(&self, name: &str) -> Option<String>;
}

/// The process environment.
#[derive(Clone, Copy, Debug, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Resolve one credential: a non-empty explicit value, else the named lookup.
pub fn resolve_value(explicit: Option<&str>, name: &str, env: &dyn EnvSource) -> Option<String> {
    non_empty(explicit.map(str::to_string)).or_else(|| non_empty(env.var(name)))
}

macro_rules! api_credentials {
    ($($(#[$doc:meta])* $field:ident => $var:path,)*) => {
        /// Credentials for every upstream provider, one optional value per
        /// environment variable.
        ///
        /// Built once at startup and never mutated afterwards.
        #[derive(Clone, Default, PartialEq, Eq)]
        pub struct ApiCredentials {
            $($(#[$doc])* pub $field: Option<String>,)*
        }

        impl ApiCredentials {
            /// Every environment variable name the resolver reads.
            pub const VARIABLES: &'static [&'static str] = &[$($var),*];

            /// Load every credential from `env`.
            pub fn from_source(env: &dyn EnvSource) -> Self {
                Self {
                    $($field: resolve_value(None, $var, env),)*
                }
            }

            /// Fill the gaps in `self` from `env`; values already set win.
            pub fn resolve(&self, env: &dyn EnvSource) -> Self {
                Self {
                    $($field: resolve_value(self.$field.as_deref(), $var, env),)*
                }
            }

            /// Names of the variables that hold a value.
            pub fn present(&self) -> Vec<&'static str> {
                let mut present = Vec::new();
                $(if self.$field.is_some() {
                    present.push($var);
                })*
                present
            }
        }
    };
}

api_credentials! {
    alpha_vantage_api_key => vars::ALPHA_VANTAGE_API_KEY,
    alpha_vantage_email => vars::ALPHA_VANTAGE_EMAIL,
    benzinga_api_key => vars::BENZINGA_API_KEY,
    finnhub_api_key => vars::FINNHUB_API_KEY,
    finnhub_secret => vars::FINNHUB_SECRET,
    /// Replaces the Finnhub base endpoint when set.
    finnhub_proxy_url => vars::FINNHUB_PROXY_URL,
    openai_api_key => vars::OPENAI_API_KEY,
    polygon_api_key => vars::POLYGON_API_KEY,
    polygon_access_key_id => vars::POLYGON_ACCESS_KEY_ID,
    polygon_secret_access_key => vars::POLYGON_SECRET_ACCESS_KEY,
    polygon_s3_endpoint => vars::POLYGON_S3_ENDPOINT,
    schwab_api_key => vars::SCHWAB_API_KEY,
    schwab_app_secret => vars::SCHWAB_APP_SECRET,
    /// Contact string the SEC requires on every request.
    sec_edgar_user_agent => vars::SEC_EDGAR_USER_AGENT,
    fred_api_key => vars::FRED_API_KEY,
    reddit_client_id => vars::REDDIT_CLIENT_ID,
    reddit_client_secret => vars::REDDIT_CLIENT_SECRET,
    reddit_user_agent => vars::REDDIT_USER_AGENT,
    stocktwits_access_token => vars::STOCKTWITS_ACCESS_TOKEN,
    iex_api_token => vars::IEX_API_TOKEN,
    tradingeconomics_client_key => vars::TRADINGECONOMICS_CLIENT_KEY,
    tradingeconomics_client_secret => vars::TRADINGECONOMICS_CLIENT_SECRET,
}

impl ApiCredentials {
    /// Load every credential from the process environment.
    pub fn from_env() -> Self {
        Self::from_source(&ProcessEnv)
    }
}

// Secrets never reach logs; only the names of populated variables do.
impl fmt::Debug for ApiCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiCredentials")
            .field("present", &self.present())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_explicit_value_wins_over_env() {
        let source = env(&[("FRED_API_KEY", "from-env")]);
        let resolved = resolve_value(Some("explicit"), "FRED_API_KEY", &source);
        assert_eq!(resolved.as_deref(), Some("explicit"));
    }

    #[test]
    fn test_env_used_when_explicit_missing_or_empty() {
        let source = env(&[("FRED_API_KEY", "from-env")]);
        assert_eq!(
            resolve_value(None, "FRED_API_KEY", &source).as_deref(),
            Some("from-env")
        );
        assert_eq!(
            resolve_value(Some(""), "FRED_API_KEY", &source).as_deref(),
            Some("from-env")
        );
    }

    #[test]
    fn test_missing_everywhere_is_none() {
        let source = env(&[("FRED_API_KEY", "  ")]);
        assert!(resolve_value(None, "FRED_API_KEY", &source).is_none());
        assert!(resolve_value(None, "IEX_API_TOKEN", &source).is_none());
    }

    #[test]
    fn test_from_source_reads_every_variable() {
        let source = env(&[
            ("ALPHA_VANTAGE_API_KEY", "av"),
            ("REDDIT_CLIENT_ID", "rid"),
            ("SEC_EDGAR_USER_AGENT", "Aurora test@example.com"),
        ]);
        let creds = ApiCredentials::from_source(&source);

        assert_eq!(creds.alpha_vantage_api_key.as_deref(), Some("av"));
        assert_eq!(creds.reddit_client_id.as_deref(), Some("rid"));
        assert_eq!(
            creds.sec_edgar_user_agent.as_deref(),
            Some("Aurora test@example.com")
        );
        assert!(creds.benzinga_api_key.is_none());
        assert_eq!(creds.present().len(), 3);
    }

    #[test]
    fn test_resolve_keeps_explicit_and_fills_gaps() {
        let source = env(&[
            ("BENZINGA_API_KEY", "env-benzinga"),
            ("FINNHUB_API_KEY", "env-finnhub"),
        ]);
        let explicit = ApiCredentials {
            benzinga_api_key: Some("explicit-benzinga".to_string()),
            ..ApiCredentials::default()
        };

        let resolved = explicit.resolve(&source);
        assert_eq!(
            resolved.benzinga_api_key.as_deref(),
            Some("explicit-benzinga")
        );
        assert_eq!(resolved.finnhub_api_key.as_deref(), Some("env-finnhub"));
        assert!(resolved.fred_api_key.is_none());
    }

    #[test]
    fn test_empty_source_resolves_to_nothing() {
        let creds = ApiCredentials::from_source(&HashMap::<String, String>::new());
        assert_eq!(creds, ApiCredentials::default());
        assert!(creds.present().is_empty());
    }

    #[test]
    fn test_variables_listed_once() {
        let mut names = ApiCredentials::VARIABLES.to_vec();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), ApiCredentials::VARIABLES.len());
        assert!(names.contains(&vars::TRADINGECONOMICS_CLIENT_SECRET));
    }

    #[test]
    fn test_debug_does_not_leak_secrets() {
        let creds = ApiCredentials {
            iex_api_token: Some("pk_live_secret".to_string()),
            ..ApiCredentials::default()
        };
        let rendered = format!("{:?}", creds);
        assert!(rendered.contains("IEX_API_TOKEN"));
        assert!(!rendered.contains("pk_live_secret"));
    }
}
