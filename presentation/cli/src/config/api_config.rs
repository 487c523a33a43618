use std::env;
use std::time::Duration;

use url::Url;

use super::error::ConfigError;

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:1211";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Where the shop backend lives and how long to wait for it.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: Url,
    pub timeout: Duration,
}

impl ApiConfig {
    /// Load API configuration from environment variables
    ///
    /// Environment variables:
    /// - SHOP_API_BASE_URL: backend root (default: "http://127.0.0.1:1211")
    /// - SHOP_API_TIMEOUT_SECS: request timeout in seconds (default: 30)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(
            env::var("SHOP_API_BASE_URL").ok(),
            env::var("SHOP_API_TIMEOUT_SECS").ok(),
        )
    }

    fn from_values(base_url: Option<String>, timeout: Option<String>) -> Result<Self, ConfigError> {
        let raw_url = base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let base_url = Url::parse(&raw_url).map_err(|_| ConfigError::InvalidBaseUrl(raw_url.clone()))?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidBaseUrl(raw_url));
        }

        let timeout_secs = match timeout {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or(ConfigError::InvalidTimeout(raw))?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            base_url,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}
