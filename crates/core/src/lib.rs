//! Cardfolio Core - Recurring payment schedule and currency
//! normalization engine.
//!
//! This crate contains the core business logic behind the upcoming
//! payments dashboard: month-length-aware calendar arithmetic, the
//! next-occurrence resolver for card-aligned and subscription-anchored
//! billing, the horizon-bounded schedule enumerator, monthly
//! aggregation, and the time-limited exchange-rate cache used to
//! normalize amounts into the reporting currency.
//!
//! It is persistence- and transport-agnostic: the surrounding
//! application hands it plain card and subscription records and
//! consumes derived schedules and totals. The only I/O happens behind
//! the rate-provider trait from the `cardfolio-rates` crate.

pub mod cards;
pub mod constants;
pub mod errors;
pub mod fx;
pub mod schedule;
pub mod subscriptions;
pub mod summary;
pub mod utils;

// Re-export the dashboard-facing entry points
pub use schedule::{
    calculate_upcoming_payments, compute_next_payment_date, ScheduleOptions, ScheduleReport,
    ScheduledPayment,
};
pub use summary::{build_upcoming_payment_months, summarize_monthly_totals};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
