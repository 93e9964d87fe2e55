//! Currency data model and the remote client abstraction

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Three-letter currency code, e.g. "USD".
pub type CurrencyAcronym = String;

/// Outcome published to observers. The error is shared so the value can be
/// replayed to every subscriber while still carrying the original cause.
pub type Outcome<T> = std::result::Result<T, Arc<anyhow::Error>>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyType {
    pub acronym: CurrencyAcronym,
    pub symbol: String,
    pub display_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyTypeResult {
    pub values: Vec<CurrencyType>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeRateResult {
    pub from: CurrencyAcronym,
    pub to: CurrencyAcronym,
    pub exchange_rate: f64,
}

impl ExchangeRateResult {
    /// Rate between a currency and itself, which is always 1.
    pub fn identity(from: &str, to: &str) -> Self {
        Self {
            from: from.to_string(),
            to: to.to_string(),
            exchange_rate: 1.0,
        }
    }

    pub fn convert(&self, amount: f64) -> f64 {
        amount * self.exchange_rate
    }
}

#[async_trait]
pub trait CurrencyClient: Send + Sync {
    async fn fetch_currency_types(&self) -> Result<CurrencyTypeResult>;
    async fn fetch_exchange_rate(&self, from: &str, to: &str) -> Result<ExchangeRateResult>;
}
