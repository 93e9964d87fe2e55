//! Holds the currency list and current exchange rate for a session and
//! refreshes them in the background on request.

use crate::core::{CurrencyClient, CurrencyType, ExchangeRateResult, Observable, Outcome};
use std::sync::{Arc, Mutex, PoisonError};
use tokio::task::JoinSet;
use tracing::{debug, error, warn};

/// State holder between the presentation layer and the currency client.
///
/// Triggers never block: each one spawns a request and returns. Requests are
/// not de-duplicated or sequenced, so when several are in flight the one that
/// completes last decides the published value. Dropping the holder aborts
/// every request still in flight.
pub struct ExchangeState {
    client: Arc<dyn CurrencyClient>,
    currency_types: Observable<Outcome<Vec<CurrencyType>>>,
    exchange_rate: Observable<Outcome<Option<ExchangeRateResult>>>,
    tasks: Mutex<JoinSet<()>>,
}

impl ExchangeState {
    pub fn new(client: Arc<dyn CurrencyClient>) -> Self {
        Self {
            client,
            currency_types: Observable::new(Ok(Vec::new())),
            exchange_rate: Observable::new(Ok(None)),
            tasks: Mutex::new(JoinSet::new()),
        }
    }

    pub fn currency_types(&self) -> &Observable<Outcome<Vec<CurrencyType>>> {
        &self.currency_types
    }

    pub fn exchange_rate(&self) -> &Observable<Outcome<Option<ExchangeRateResult>>> {
        &self.exchange_rate
    }

    /// Refreshes the list of currency types. Must be called within a Tokio runtime.
    pub fn request_currency_types(&self) {
        let client = Arc::clone(&self.client);
        let observable = self.currency_types.clone();

        self.spawn(async move {
            let outcome = client
                .fetch_currency_types()
                .await
                .map(|result| result.values)
                .map_err(|e| {
                    warn!(error = %e, "Failed to fetch currency types");
                    Arc::new(e)
                });
            observable.publish(outcome);
        });
    }

    /// Refreshes the exchange rate for `from` -> `to`.
    ///
    /// A pair of identical currencies is answered immediately with a rate of
    /// 1 and never reaches the network.
    pub fn request_exchange_rate(&self, from: &str, to: &str) {
        if from == to {
            debug!(currency = %from, "Same currency on both sides, rate is 1");
            self.exchange_rate
                .publish(Ok(Some(ExchangeRateResult::identity(from, to))));
            return;
        }

        let client = Arc::clone(&self.client);
        let observable = self.exchange_rate.clone();
        let (from, to) = (from.to_string(), to.to_string());

        self.spawn(async move {
            let outcome = client
                .fetch_exchange_rate(&from, &to)
                .await
                .map(Some)
                .map_err(|e| {
                    warn!(error = %e, %from, %to, "Failed to fetch exchange rate");
                    Arc::new(e)
                });
            observable.publish(outcome);
        });
    }

    /// Waits until every request issued so far, and any issued while
    /// waiting, has completed.
    pub async fn settle(&self) {
        loop {
            let mut tasks = std::mem::take(&mut *self.lock_tasks());
            if tasks.is_empty() {
                return;
            }
            while let Some(joined) = tasks.join_next().await {
                if let Err(e) = joined {
                    error!(error = %e, "Request task did not complete");
                }
            }
        }
    }

    fn spawn<F>(&self, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let mut tasks = self.lock_tasks();
        // Reap finished requests so the set only tracks live ones
        while tasks.try_join_next().is_some() {}
        tasks.spawn(task);
    }

    fn lock_tasks(&self) -> std::sync::MutexGuard<'_, JoinSet<()>> {
        self.tasks.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
