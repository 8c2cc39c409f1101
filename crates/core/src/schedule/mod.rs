//! Schedule module - calendar arithmetic, next-occurrence resolution
//! and horizon-bounded enumeration of upcoming payments.

pub(crate) mod calendar;
mod schedule_model;
mod schedule_service;

#[cfg(test)]
mod schedule_service_tests;

// Re-export the public interface
pub use calendar::{
    add_cycle, add_cycle_with_payment_day, align_date_to_payment_day, clamp_day_to_month,
    days_in_month, window_horizon,
};
pub use schedule_model::{
    ScheduleOptions, ScheduleReport, ScheduledPayment, SkipReason, SkippedSubscription,
};
pub use schedule_service::{calculate_upcoming_payments, compute_next_payment_date};
