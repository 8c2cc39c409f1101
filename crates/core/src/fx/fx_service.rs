//! Time-limited exchange-rate cache.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use log::{debug, warn};
use rust_decimal::Decimal;
use tokio::sync::RwLock;

use cardfolio_rates::{ExchangeRateProvider, OpenErApiProvider, RateTable};

use crate::constants::{RATES_CACHE_TTL_SECS, REPORTING_CURRENCY};

use super::fx_errors::FxError;
use super::fx_model::ExchangeRateSnapshot;
use super::fx_traits::FxServiceTrait;

struct CachedRates {
    snapshot: ExchangeRateSnapshot,
    expires_at: DateTime<Utc>,
}

/// Caches the provider's rate table for a fixed TTL.
///
/// The read-check-fetch-write sequence holds the write lock across the
/// fetch, so concurrent cache-misses coalesce into a single upstream
/// request. Expired tables are never served; a failed refresh
/// propagates to the caller, which proceeds without conversion.
pub struct FxService {
    provider: Arc<dyn ExchangeRateProvider>,
    cache: RwLock<Option<CachedRates>>,
    ttl: Duration,
}

impl FxService {
    pub fn new(provider: Arc<dyn ExchangeRateProvider>) -> Self {
        Self::with_ttl(provider, Duration::seconds(RATES_CACHE_TTL_SECS))
    }

    pub fn with_ttl(provider: Arc<dyn ExchangeRateProvider>, ttl: Duration) -> Self {
        Self {
            provider,
            cache: RwLock::new(None),
            ttl,
        }
    }

    /// Service backed by the default public rate endpoint.
    pub fn default_provider() -> Self {
        Self::new(Arc::new(OpenErApiProvider::new()))
    }

    /// A table without a positive reporting-currency rate cannot
    /// convert anything, so it is rejected rather than cached.
    fn validate_table(table: RateTable) -> Result<ExchangeRateSnapshot, FxError> {
        let usable = table
            .rates
            .get(REPORTING_CURRENCY)
            .is_some_and(|rate| *rate > Decimal::ZERO);
        if !usable {
            warn!(
                "discarding rate table with base {}: no usable {} rate",
                table.base, REPORTING_CURRENCY
            );
            return Err(FxError::MissingReportingRate(
                REPORTING_CURRENCY.to_string(),
            ));
        }
        Ok(ExchangeRateSnapshot {
            base_currency: table.base,
            rates: table.rates,
            fetched_at: Utc::now(),
        })
    }

    async fn refresh(&self) -> Result<ExchangeRateSnapshot, FxError> {
        let mut guard = self.cache.write().await;
        // Re-check under the write lock; another caller may have
        // refreshed while we waited.
        if let Some(cached) = guard.as_ref() {
            if Utc::now() < cached.expires_at {
                return Ok(cached.snapshot.clone());
            }
        }

        debug!(
            "exchange-rate cache miss, fetching from {}",
            self.provider.provider_id()
        );
        let table = self.provider.fetch_latest().await?;
        let snapshot = Self::validate_table(table)?;
        *guard = Some(CachedRates {
            snapshot: snapshot.clone(),
            expires_at: Utc::now() + self.ttl,
        });
        Ok(snapshot)
    }
}

#[async_trait]
impl FxServiceTrait for FxService {
    async fn get_exchange_rates(&self) -> Result<ExchangeRateSnapshot, FxError> {
        {
            let guard = self.cache.read().await;
            if let Some(cached) = guard.as_ref() {
                if Utc::now() < cached.expires_at {
                    return Ok(cached.snapshot.clone());
                }
            }
        }
        self.refresh().await
    }

    async fn invalidate(&self) {
        let mut guard = self.cache.write().await;
        *guard = None;
    }
}
