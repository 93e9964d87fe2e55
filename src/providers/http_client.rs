use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::{debug, error, instrument};

use crate::core::currency::{CurrencyClient, CurrencyTypeResult, ExchangeRateResult};

/// Client for the remote currency service.
///
/// The underlying `reqwest::Client` is built once and reused for every call;
/// it is safe to share between concurrent requests.
pub struct HttpCurrencyClient {
    base_url: String,
    client: reqwest::Client,
}

impl HttpCurrencyClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent("conversor/1.0")
            .build()
            .context("Failed to build HTTP client")?;

        Ok(HttpCurrencyClient {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, endpoint);
        debug!("Requesting {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Request error for URL: {url}"))?;

        if !response.status().is_success() {
            return Err(anyhow!("HTTP error: {} for URL: {}", response.status(), url));
        }

        let text = response
            .text()
            .await
            .with_context(|| format!("Failed to get response text for URL: {url}"))?;

        match serde_json::from_str(&text) {
            Ok(data) => Ok(data),
            Err(e) => {
                error!(error = ?e, response = %text, "Failed to parse response");
                Err(e).with_context(|| format!("Failed to parse JSON response for URL: {url}"))
            }
        }
    }
}

#[async_trait]
impl CurrencyClient for HttpCurrencyClient {
    #[instrument(name = "CurrencyTypesFetch", skip(self))]
    async fn fetch_currency_types(&self) -> Result<CurrencyTypeResult> {
        let result: CurrencyTypeResult = self.get_json("/currency_types").await?;
        debug!(count = result.values.len(), "Received currency types");
        Ok(result)
    }

    #[instrument(name = "ExchangeRateFetch", skip(self))]
    async fn fetch_exchange_rate(&self, from: &str, to: &str) -> Result<ExchangeRateResult> {
        let result: ExchangeRateResult = self
            .get_json(&format!("/exchange_rate/{from}/{to}"))
            .await?;
        debug!(rate = result.exchange_rate, "Received exchange rate");
        Ok(result)
    }
}
