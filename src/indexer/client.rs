//! Indexing API client handle.
//!
//! # Responsibilities
//! - Hold the HTTP client and credential for the indexing REST API
//! - Fail fast when the API key is missing, before any request
//! - Map transport and HTTP failures to `TrackerError::Service`
//!
//! Constructed once per process and passed by reference to every read.

use reqwest::header::{HeaderValue, ACCEPT};
use serde::de::DeserializeOwned;

use crate::config::loader::API_KEY_ENV_VAR;
use crate::config::{AppConfig, SecretString};
use crate::error::{TrackerError, TrackerResult};

/// Header carrying the API credential.
const API_KEY_HEADER: &str = "X-API-Key";

/// Client for the blockchain-data indexing API.
#[derive(Clone)]
pub struct IndexerClient {
    http: reqwest::Client,
    base_url: String,
    api_key: SecretString,
}

impl IndexerClient {
    /// Create a client from the configuration.
    ///
    /// Fails with a configuration error when the API key is unset.
    pub fn new(config: &AppConfig) -> TrackerResult<Self> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| TrackerError::Service(format!("HTTP client setup failed: {}", e)))?;
        Self::with_http_client(config, http)
    }

    /// Create a client that sends requests through `http`.
    pub fn with_http_client(config: &AppConfig, http: reqwest::Client) -> TrackerResult<Self> {
        let api_key = config.secrets.indexer_api_key.clone().ok_or_else(|| {
            TrackerError::Configuration(format!(
                "{} environment variable is not set.",
                API_KEY_ENV_VAR
            ))
        })?;

        tracing::debug!(base_url = %config.indexer.base_url, "Indexer client initialized");

        Ok(Self {
            http,
            base_url: config.indexer.base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    /// GET `path` relative to the base URL and decode the JSON body.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> TrackerResult<T> {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        tracing::debug!(url = %url, "Indexer request");

        let api_key = HeaderValue::from_str(self.api_key.expose()).map_err(|_| {
            TrackerError::Configuration(format!(
                "{} contains characters not allowed in a header",
                API_KEY_ENV_VAR
            ))
        })?;

        let res = self
            .http
            .get(&url)
            .header(ACCEPT, "application/json")
            .header(API_KEY_HEADER, api_key)
            .query(query)
            .send()
            .await
            .map_err(|e| TrackerError::Service(format!("request to {} failed: {}", path, e)))?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(TrackerError::Service(format!(
                "{} returned status {}: {}",
                path,
                status,
                body.trim()
            )));
        }

        res.json::<T>()
            .await
            .map_err(|e| TrackerError::Service(format!("unexpected response from {}: {}", path, e)))
    }
}

impl std::fmt::Debug for IndexerClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IndexerClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_api_key() {
        let err = IndexerClient::new(&AppConfig::default()).unwrap_err();
        assert!(matches!(err, TrackerError::Configuration(_)));
        assert!(err.to_string().contains("MORALIS_API_KEY"));
    }

    #[test]
    fn test_debug_hides_key() {
        let mut config = AppConfig::default();
        config.secrets.indexer_api_key = Some(SecretString::new("super-secret"));
        let client = IndexerClient::new(&config).unwrap();
        let printed = format!("{:?}", client);
        assert!(!printed.contains("super-secret"));
        assert!(printed.contains("deep-index"));
    }
}
