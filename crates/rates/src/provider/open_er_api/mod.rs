//! open.er-api.com exchange-rate provider implementation.
//!
//! Free endpoint, no API key; serves one table per base currency and
//! refreshes upstream once a day.
//! API documentation: https://www.exchangerate-api.com/docs/free

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use super::ExchangeRateProvider;
use crate::errors::RatesError;
use crate::models::{RatePayload, RateTable};

const DEFAULT_URL: &str = "https://open.er-api.com/v6/latest/USD";
const PROVIDER_ID: &str = "OPEN_ER_API";

/// Default HTTP request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(8);

/// Exchange-rate provider backed by open.er-api.com.
pub struct OpenErApiProvider {
    client: Client,
    url: String,
}

impl OpenErApiProvider {
    /// Creates a provider against the default public endpoint.
    pub fn new() -> Self {
        Self::with_url(DEFAULT_URL.to_string())
    }

    /// Points the provider at a non-default endpoint (tests, mirrors).
    pub fn with_url(url: String) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client, url }
    }
}

impl Default for OpenErApiProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ExchangeRateProvider for OpenErApiProvider {
    fn provider_id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn fetch_latest(&self) -> Result<RateTable, RatesError> {
        debug!("Fetching latest exchange rates from {}", self.url);

        let response = self.client.get(&self.url).send().await.map_err(|e| {
            if e.is_timeout() {
                RatesError::Timeout {
                    provider: PROVIDER_ID.to_string(),
                }
            } else {
                RatesError::ProviderError {
                    provider: PROVIDER_ID.to_string(),
                    message: format!("Request failed: {}", e),
                }
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(RatesError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!("HTTP {}", status),
            });
        }

        let payload = response.json::<RatePayload>().await.map_err(|e| {
            if e.is_timeout() {
                RatesError::Timeout {
                    provider: PROVIDER_ID.to_string(),
                }
            } else {
                RatesError::InvalidPayload(format!("Failed to decode body: {}", e))
            }
        })?;

        payload.normalize().ok_or_else(|| {
            RatesError::InvalidPayload("Payload does not contain a usable rate table".to_string())
        })
    }
}
