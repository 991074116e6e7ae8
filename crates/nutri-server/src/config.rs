//! Server configuration
//!
//! Read once from the environment at startup and never mutated afterwards.

use std::time::Duration;

use nutri::ProviderCredentials;

pub const DEFAULT_EDAMAM_BASE_URL: &str = "https://api.edamam.com/api/food-database/v2/parser";
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 10;
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;

/// Process configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Edamam app id/key. `None` is allowed; searches then fail as misconfigured.
    pub credentials: Option<ProviderCredentials>,
    pub edamam_base_url: String,
    pub upstream_timeout: Duration,
    pub host: String,
    pub port: u16,
}

impl Config {
    /// Load configuration from process environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let credentials =
            ProviderCredentials::from_parts(get("EDAMAM_APP_ID"), get("EDAMAM_APP_KEY"));

        let upstream_timeout_secs = match get("UPSTREAM_TIMEOUT_SECS").map(|v| v.parse::<u64>()) {
            Some(Ok(secs)) if secs > 0 => secs,
            Some(_) => {
                tracing::warn!(
                    "⚠️  Invalid UPSTREAM_TIMEOUT_SECS - using {}s",
                    DEFAULT_UPSTREAM_TIMEOUT_SECS
                );
                DEFAULT_UPSTREAM_TIMEOUT_SECS
            }
            None => DEFAULT_UPSTREAM_TIMEOUT_SECS,
        };

        let port = match get("PORT").map(|v| v.parse::<u16>()) {
            Some(Ok(port)) => port,
            Some(Err(e)) => {
                tracing::warn!("⚠️  Invalid PORT ({}) - using {}", e, DEFAULT_PORT);
                DEFAULT_PORT
            }
            None => DEFAULT_PORT,
        };

        Self {
            credentials,
            edamam_base_url: get("EDAMAM_BASE_URL")
                .unwrap_or_else(|| DEFAULT_EDAMAM_BASE_URL.to_string()),
            upstream_timeout: Duration::from_secs(upstream_timeout_secs),
            host: get("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
