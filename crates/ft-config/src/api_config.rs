use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_API_TIMEOUT_SECS, MAX_API_TIMEOUT_SECS,
    MIN_API_TIMEOUT_SECS,
};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Login endpoint base URL, e.g. "https://api-dev.pengeluaran.com"
    pub base_url: String,
    /// Optional key sent as X-Api-Key on every request
    pub api_key: Option<String>,
    /// Fixed request deadline; there is no retry or backoff beyond it
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            api_key: None,
            timeout_secs: DEFAULT_API_TIMEOUT_SECS,
        }
    }
}

impl ApiConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.base_url.trim().is_empty() {
            return Err(ConfigError::api(
                "api.base_url must be configured (FT_API_BASE_URL or config.toml)",
            ));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ConfigError::api(format!(
                "api.base_url must start with http:// or https://, got {}",
                self.base_url
            )));
        }

        if self.timeout_secs < MIN_API_TIMEOUT_SECS || self.timeout_secs > MAX_API_TIMEOUT_SECS {
            return Err(ConfigError::api(format!(
                "api.timeout_secs must be {}-{}, got {}",
                MIN_API_TIMEOUT_SECS, MAX_API_TIMEOUT_SECS, self.timeout_secs
            )));
        }

        Ok(())
    }
}
