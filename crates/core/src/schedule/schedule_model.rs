//! Derived schedule records.

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::cards::CardType;
use crate::constants::{MAX_UPCOMING_EVENTS, UPCOMING_MONTHS};
use crate::subscriptions::BillingCycle;
use crate::utils::date_utils::{format_date_for_display, month_key};

/// One projected charge inside the upcoming window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledPayment {
    pub subscription_id: String,
    pub service_name: String,
    pub amount: Decimal,
    pub currency: String,
    pub cycle: BillingCycle,
    pub payment_date: NaiveDate,
    pub card_id: String,
    pub card_name: String,
    pub card_type: CardType,
}

impl ScheduledPayment {
    /// `YYYY-MM` key of the month this charge falls in.
    pub fn month_key(&self) -> String {
        month_key(self.payment_date)
    }

    /// Japanese display date, e.g. `2025/03/15 (土)`.
    pub fn display_date(&self) -> String {
        format_date_for_display(self.payment_date)
    }
}

/// Why a subscription was left out of the schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SkipReason {
    /// Amount is zero or negative.
    NonPositiveAmount,
    /// Start date does not parse as a calendar date.
    InvalidStartDate,
    /// Catch-up exhausted its step budget before reaching the window.
    ScheduleUnresolvable,
}

/// A subscription excluded from the schedule, with the reason, so
/// callers can surface data-quality problems instead of losing them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkippedSubscription {
    pub subscription_id: String,
    pub service_name: String,
    pub reason: SkipReason,
}

/// Options for the schedule enumerator.
#[derive(Debug, Clone, Copy)]
pub struct ScheduleOptions {
    /// First date the window covers; earlier occurrences are caught up
    /// past, not emitted.
    pub start_date_limit: NaiveDate,
    /// Window length in calendar months, counting the start month.
    pub months_limit: u32,
    /// Cap on emitted payments across all subscriptions combined.
    pub max_events: usize,
}

impl ScheduleOptions {
    pub fn new(start_date_limit: NaiveDate) -> Self {
        Self {
            start_date_limit,
            months_limit: UPCOMING_MONTHS,
            max_events: MAX_UPCOMING_EVENTS,
        }
    }
}

impl Default for ScheduleOptions {
    fn default() -> Self {
        Self::new(Utc::now().date_naive())
    }
}

/// Result of a schedule enumeration: the projected payments plus the
/// subscriptions that could not be scheduled.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleReport {
    /// Sorted by date ascending, capped at `max_events`.
    pub payments: Vec<ScheduledPayment>,
    pub skipped: Vec<SkippedSubscription>,
}
