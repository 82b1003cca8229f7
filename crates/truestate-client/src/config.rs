//! Client configuration.
//!
//! The only setting a deployment provides is the API base URL, read from the
//! environment.

use std::time::Duration;

/// Environment variable holding the API base URL.
pub const BASE_URL_ENV: &str = "TRUESTATE_API_BASE_URL";

/// Base URL used when the environment does not provide one.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";

/// HTTP request timeout.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Settings for [`crate::SalesClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API root without a trailing slash, e.g. `https://host/api`.
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }
}

impl ClientConfig {
    /// Creates a configuration for `base_url`, dropping trailing slashes.
    #[must_use]
    pub fn with_base_url(base_url: impl AsRef<str>) -> Self {
        Self {
            base_url: base_url.as_ref().trim().trim_end_matches('/').to_string(),
            timeout: REQUEST_TIMEOUT,
        }
    }

    /// Reads the base URL from [`BASE_URL_ENV`], falling back to
    /// [`DEFAULT_BASE_URL`] when unset or blank.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        match lookup(BASE_URL_ENV) {
            Some(value) if !value.trim().is_empty() => Self::with_base_url(value),
            _ => Self::default(),
        }
    }

    /// Address of the sales listing endpoint.
    #[must_use]
    pub fn sales_url(&self) -> String {
        format!("{}/sales/", self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_trailing_slash() {
        let config = ClientConfig::with_base_url("https://sales.example.com/api/");
        assert_eq!(config.base_url, "https://sales.example.com/api");
        assert_eq!(config.sales_url(), "https://sales.example.com/api/sales/");
    }

    #[test]
    fn falls_back_to_default() {
        assert_eq!(ClientConfig::from_lookup(|_| None), ClientConfig::default());
        assert_eq!(
            ClientConfig::from_lookup(|_| Some("  ".to_string())).base_url,
            DEFAULT_BASE_URL
        );
        assert_eq!(
            ClientConfig::from_lookup(|_| Some("http://10.0.0.2:9000".to_string())).base_url,
            "http://10.0.0.2:9000"
        );
    }
}
