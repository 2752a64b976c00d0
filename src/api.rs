//! Client for the homework-review status API

use crate::error::{BotError, Result};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// Fixed endpoint of the homework-status API
pub const ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";

/// Configuration for the status API client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Connection timeout (default: 10 seconds)
    pub connect_timeout: Duration,
    /// Request timeout (default: 30 seconds)
    pub request_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// HTTP client for polling homework review statuses
pub struct StatusClient {
    client: Client,
    token: String,
}

impl StatusClient {
    /// Create a new client with default timeouts
    pub fn new(token: &str) -> Result<Self> {
        Self::with_config(token, ClientConfig::default())
    }

    /// Create a new client with custom timeouts
    pub fn with_config(token: &str, config: ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| BotError::Request {
                endpoint: ENDPOINT.to_string(),
                source: e,
            })?;

        Ok(Self {
            client,
            token: token.to_string(),
        })
    }

    /// Fetch the review statuses changed since `timestamp`.
    ///
    /// Returns the decoded JSON payload; structural validation is the
    /// caller's job (see [`crate::status::check_response`]).
    pub async fn get_api_answer(&self, timestamp: i64) -> Result<Value> {
        debug!("Requesting homework statuses, from_date={}", timestamp);

        let response = self
            .client
            .get(ENDPOINT)
            .header("Authorization", format!("OAuth {}", self.token))
            .query(&[("from_date", timestamp)])
            .send()
            .await
            .map_err(|e| BotError::Request {
                endpoint: ENDPOINT.to_string(),
                source: e,
            })?;

        // Check for HTTP errors (4xx, 5xx)
        let status = response.status();
        if !status.is_success() {
            return Err(BotError::HttpStatus {
                endpoint: ENDPOINT.to_string(),
                status: status.as_u16(),
            });
        }

        let payload = response.json::<Value>().await.map_err(BotError::Json)?;
        debug!("Status API answered OK");

        Ok(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_config_default_values() {
        let config = ClientConfig::default();
        assert_eq!(config.connect_timeout, Duration::from_secs(10));
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }

    #[test]
    fn client_builds_with_custom_config() {
        let config = ClientConfig {
            connect_timeout: Duration::from_secs(5),
            request_timeout: Duration::from_secs(15),
        };
        assert!(StatusClient::with_config("token", config).is_ok());
    }
}
