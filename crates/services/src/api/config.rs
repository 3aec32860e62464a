use std::env;
use std::time::Duration;

use url::Url;

use crate::error::ConfigError;

pub const API_URL_ENV: &str = "INTERVIEW_API_URL";
/// Variable name used by the earlier web frontend; still honoured.
pub const LEGACY_API_URL_ENV: &str = "NEXT_PUBLIC_API_URL";
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
    timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: REQUEST_TIMEOUT,
        }
    }
}

impl ApiConfig {
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidBaseUrl` unless `raw` is an absolute
    /// http(s) URL.
    pub fn new(raw: &str) -> Result<Self, ConfigError> {
        let trimmed = raw.trim();
        let invalid = |reason: String| ConfigError::InvalidBaseUrl {
            raw: raw.to_string(),
            reason,
        };
        let url = Url::parse(trimmed).map_err(|err| invalid(err.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme {}", url.scheme())));
        }
        if url.host_str().is_none() {
            return Err(invalid("missing host".to_string()));
        }

        Ok(Self {
            base_url: trimmed.trim_end_matches('/').to_string(),
            timeout: REQUEST_TIMEOUT,
        })
    }

    /// Read the base URL from the environment, falling back to the local default.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when the configured URL is invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// # Errors
    ///
    /// Returns `ConfigError` when the configured URL is invalid.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let configured = [API_URL_ENV, LEGACY_API_URL_ENV]
            .into_iter()
            .filter_map(|key| lookup(key))
            .find(|value| !value.trim().is_empty());
        match configured {
            Some(raw) => Self::new(&raw),
            None => Ok(Self::default()),
        }
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}
