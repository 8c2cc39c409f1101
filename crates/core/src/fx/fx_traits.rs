//! Service traits for the exchange-rate layer.

use async_trait::async_trait;

use super::fx_errors::FxError;
use super::fx_model::ExchangeRateSnapshot;

/// Cache-backed access to exchange rates against the reporting
/// currency. The aggregation layer depends on this trait so tests can
/// substitute canned snapshots.
#[async_trait]
pub trait FxServiceTrait: Send + Sync {
    /// Returns a rate snapshot, fetching a fresh table when the cached
    /// one has expired.
    async fn get_exchange_rates(&self) -> Result<ExchangeRateSnapshot, FxError>;

    /// Drops the cached table so the next call fetches.
    async fn invalidate(&self);
}
