//! Exchange-rate providers.

mod open_er_api;

pub use open_er_api::OpenErApiProvider;

use async_trait::async_trait;

use crate::errors::RatesError;
use crate::models::RateTable;

/// A source of latest exchange-rate tables.
///
/// Implementations perform one bounded HTTP request per call; callers
/// are responsible for caching.
#[async_trait]
pub trait ExchangeRateProvider: Send + Sync {
    /// Stable identifier of the provider, used in logs and errors.
    fn provider_id(&self) -> &'static str;

    /// Fetches and normalizes the latest rate table.
    async fn fetch_latest(&self) -> Result<RateTable, RatesError>;
}
