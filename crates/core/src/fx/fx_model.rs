//! Exchange-rate snapshot model.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::REPORTING_CURRENCY;

/// A normalized exchange-rate table captured at a point in time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeRateSnapshot {
    /// Currency the `rates` values are quoted against.
    pub base_currency: String,
    /// Currency code -> units of that currency per one base unit.
    pub rates: HashMap<String, Decimal>,
    pub fetched_at: DateTime<Utc>,
}

impl ExchangeRateSnapshot {
    fn usable_rate(&self, code: &str) -> Option<Decimal> {
        self.rates
            .get(code)
            .copied()
            .filter(|rate| *rate > Decimal::ZERO)
    }

    /// Converts an amount into the reporting currency.
    ///
    /// Identity for amounts already in the reporting currency,
    /// regardless of what the snapshot contains. Returns `None` when a
    /// needed rate is missing or non-positive; callers decide how to
    /// degrade.
    pub fn convert_to_jpy(&self, amount: Decimal, currency: &str) -> Option<Decimal> {
        if currency == REPORTING_CURRENCY {
            return Some(amount);
        }
        let source_rate = self.usable_rate(currency)?;
        if self.base_currency == REPORTING_CURRENCY {
            return Some(amount / source_rate);
        }
        let reporting_rate = self.usable_rate(REPORTING_CURRENCY)?;
        Some(amount / source_rate * reporting_rate)
    }
}
