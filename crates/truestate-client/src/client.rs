//! `reqwest` implementation of [`SalesSource`].

use reqwest::Url;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT};
use truestate_model::{SalesPage, SalesQuery};

use crate::config::ClientConfig;
use crate::error::{ClientError, Result};
use crate::params::query_pairs;
use crate::source::SalesSource;

/// User agent string for API requests.
const USER_AGENT_VALUE: &str = concat!("truestate-dashboard/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the sales listing endpoint.
#[derive(Debug, Clone)]
pub struct SalesClient {
    client: reqwest::Client,
    endpoint: Url,
}

impl SalesClient {
    /// Creates a client for the API described by `config`.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let endpoint = Url::parse(&config.sales_url())
            .map_err(|e| ClientError::InvalidBaseUrl(format!("{}: {e}", config.base_url)))?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .map_err(|e| ClientError::Network(format!("failed to create HTTP client: {e}")))?;

        Ok(Self { client, endpoint })
    }

    /// Full request URL for `query`.
    pub fn request_url(&self, query: &SalesQuery) -> Url {
        let mut url = self.endpoint.clone();
        {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query_pairs(query) {
                pairs.append_pair(key, &value);
            }
        }
        url
    }

    /// Fetches one page of sales.
    pub async fn fetch(&self, query: &SalesQuery) -> Result<SalesPage> {
        let url = self.request_url(query);
        tracing::debug!(%url, "fetching sales");

        let response = self.client.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "sales request failed");
            return Err(ClientError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.bytes().await?;
        let page = SalesPage::from_json_slice(&body)?;
        tracing::debug!(rows = page.data.len(), total = page.total, "sales page received");
        Ok(page)
    }
}

impl SalesSource for SalesClient {
    async fn fetch_sales(&self, query: &SalesQuery) -> Result<SalesPage> {
        self.fetch(query).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        assert!(SalesClient::new(&ClientConfig::default()).is_ok());
    }

    #[test]
    fn test_invalid_base_url() {
        let err = SalesClient::new(&ClientConfig::with_base_url("not a url")).unwrap_err();
        assert!(matches!(err, ClientError::InvalidBaseUrl(_)));
    }

    #[test]
    fn test_user_agent() {
        assert!(USER_AGENT_VALUE.starts_with("truestate-dashboard/"));
    }
}
