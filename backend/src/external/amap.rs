//! AMap weather API client
//!
//! Issues `GET /v3/weather/weatherInfo` and hands the decoded body back
//! untouched. Interpreting `status` is left to the service layer.

use async_trait::async_trait;
use reqwest::Client;
use shared::ProviderResponse;

use super::{Operation, WeatherSource};
use crate::config::AmapConfig;
use crate::error::TransportError;

/// AMap weather API client
#[derive(Clone)]
pub struct AmapClient {
    client: Client,
    api_key: String,
    endpoint: String,
}

impl AmapClient {
    /// Create a new AmapClient from configuration
    pub fn new(config: &AmapConfig) -> Self {
        Self {
            client: Client::new(),
            api_key: config.api_key.clone(),
            endpoint: config.endpoint.clone(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn request(
        &self,
        operation: Operation,
        city: &str,
    ) -> Result<ProviderResponse, TransportError> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("key", self.api_key.as_str()),
                ("city", city),
                ("extensions", operation.extensions()),
                ("output", "JSON"),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status { status });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl WeatherSource for AmapClient {
    async fn fetch(
        &self,
        operation: Operation,
        city: &str,
    ) -> Result<ProviderResponse, TransportError> {
        tracing::debug!(%operation, city, "Fetching weather from AMap");

        let result = self.request(operation, city).await;
        match &result {
            Ok(resp) => tracing::debug!(
                %operation,
                status = %resp.status,
                info = %resp.info,
                "AMap responded"
            ),
            Err(err) => tracing::error!(%operation, city, "AMap request failed: {}", err),
        }

        result
    }
}

impl std::fmt::Debug for AmapClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AmapClient")
            .field("endpoint", &self.endpoint)
            .field("api_key", &"<redacted>")
            .finish()
    }
}
