//! Summary module - monthly bucketing and reporting-currency totals
//! over projected payments.

mod summary_model;
mod summary_service;


// Re-export the public interface
pub use summary_model::{
    MonthlyTotal, MonthlyTotalsReport, UnconvertedAmount, UpcomingPaymentMonth,
};
pub use summary_service::{build_upcoming_payment_months, summarize_monthly_totals};
