//! Wire and normalized models for exchange-rate payloads.

use num_traits::FromPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Base currency assumed when the payload does not name one.
const DEFAULT_BASE: &str = "USD";

/// Raw response shape of the open.er-api.com `latest` endpoint.
///
/// Both `base_code` (v6) and the older `base` field are accepted.
#[derive(Debug, Clone, Deserialize)]
pub struct RatePayload {
    /// "success" on a good response; some deployments omit it.
    #[serde(default)]
    pub result: Option<String>,
    #[serde(default)]
    pub base_code: Option<String>,
    #[serde(default)]
    pub base: Option<String>,
    /// Currency code -> units of that currency per one base unit.
    #[serde(default)]
    pub rates: HashMap<String, f64>,
}

impl RatePayload {
    /// Normalizes the payload into a [`RateTable`], dropping entries
    /// whose rate is non-finite or not strictly positive.
    ///
    /// Returns `None` when the service reports a non-success `result`
    /// or no usable rate survives the filtering.
    pub fn normalize(self) -> Option<RateTable> {
        if let Some(result) = &self.result {
            if result != "success" {
                return None;
            }
        }

        let base = self
            .base_code
            .or(self.base)
            .unwrap_or_else(|| DEFAULT_BASE.to_string())
            .to_uppercase();

        let rates: HashMap<String, Decimal> = self
            .rates
            .into_iter()
            .filter_map(|(code, value)| {
                if !value.is_finite() || value <= 0.0 {
                    return None;
                }
                Decimal::from_f64(value).map(|rate| (code.to_uppercase(), rate))
            })
            .collect();

        if rates.is_empty() {
            return None;
        }

        Some(RateTable { base, rates })
    }
}

/// A normalized rate table: every rate is positive and expressed as
/// units of the keyed currency per one unit of `base`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateTable {
    pub base: String,
    pub rates: HashMap<String, Decimal>,
}
