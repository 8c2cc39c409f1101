//! Monthly aggregation records.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::schedule::ScheduledPayment;

/// One calendar month of the upcoming window, with its charges split
/// by billing regime. Months with no charges are still present.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpcomingPaymentMonth {
    /// `YYYY-MM` grouping key.
    pub month_key: String,
    /// Japanese display label, e.g. `2025年9月`.
    pub label: String,
    pub credit_payments: Vec<ScheduledPayment>,
    pub debit_payments: Vec<ScheduledPayment>,
}

/// An amount left out of a monthly total because no usable rate was
/// available for its currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnconvertedAmount {
    pub subscription_id: String,
    pub service_name: String,
    pub amount: Decimal,
    pub currency: String,
}

/// Total charges for one calendar month, in the reporting currency.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyTotal {
    pub month_key: String,
    pub label: String,
    /// Sum of the convertible amounts only.
    pub total: Decimal,
    /// Every charge in the month, converted or not.
    pub payment_count: usize,
    /// Amounts excluded from `total` because conversion failed.
    pub unconverted: Vec<UnconvertedAmount>,
}

/// Monthly totals plus a degraded-mode marker.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyTotalsReport {
    /// Ascending by month key.
    pub months: Vec<MonthlyTotal>,
    /// True when at least one amount could not be converted into the
    /// reporting currency; the affected totals under-count by exactly
    /// the listed `unconverted` amounts.
    pub conversion_incomplete: bool,
}
