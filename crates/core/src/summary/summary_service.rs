//! Monthly bucketing and totals.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use log::warn;

use crate::cards::CardType;
use crate::constants::REPORTING_CURRENCY;
use crate::fx::ExchangeRateSnapshot;
use crate::schedule::calendar::add_months;
use crate::schedule::ScheduledPayment;
use crate::utils::date_utils::{month_key, month_label};

use super::summary_model::{
    MonthlyTotal, MonthlyTotalsReport, UnconvertedAmount, UpcomingPaymentMonth,
};

/// Builds a fixed-length, contiguous list of calendar months starting
/// at the reference date's month, bucketing each payment into its
/// month by the card's billing regime.
///
/// Every requested month appears even with zero charges, so consumers
/// never handle missing months. Payments outside the listed months are
/// dropped.
pub fn build_upcoming_payment_months(
    payments: &[ScheduledPayment],
    reference: NaiveDate,
    months_limit: u32,
) -> Vec<UpcomingPaymentMonth> {
    let mut months = Vec::with_capacity(months_limit as usize);
    for offset in 0..months_limit {
        let Some((year, month)) = add_months(reference.year(), reference.month(), i64::from(offset))
        else {
            break;
        };
        let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
            break;
        };
        months.push(UpcomingPaymentMonth {
            month_key: month_key(first),
            label: month_label(first),
            credit_payments: Vec::new(),
            debit_payments: Vec::new(),
        });
    }

    for payment in payments {
        let key = month_key(payment.payment_date);
        if let Some(bucket) = months.iter_mut().find(|month| month.month_key == key) {
            match payment.card_type {
                CardType::Credit => bucket.credit_payments.push(payment.clone()),
                CardType::Debit => bucket.debit_payments.push(payment.clone()),
            }
        }
    }

    months
}

/// Groups payments by month and sums their amounts in the reporting
/// currency.
///
/// Amounts that cannot be converted (no snapshot, or no usable rate
/// for their currency) are excluded from the total and listed per
/// month, with `conversion_incomplete` set so callers can warn. An
/// under-counted total with an explicit remainder beats a total that
/// silently mixes currencies.
pub fn summarize_monthly_totals(
    payments: &[ScheduledPayment],
    rates: Option<&ExchangeRateSnapshot>,
) -> MonthlyTotalsReport {
    let mut buckets: BTreeMap<String, MonthlyTotal> = BTreeMap::new();
    let mut conversion_incomplete = false;

    for payment in payments {
        let key = month_key(payment.payment_date);
        let bucket = buckets.entry(key.clone()).or_insert_with(|| MonthlyTotal {
            month_key: key,
            label: month_label(payment.payment_date),
            ..MonthlyTotal::default()
        });
        bucket.payment_count += 1;

        let converted = if payment.currency == REPORTING_CURRENCY {
            Some(payment.amount)
        } else {
            rates.and_then(|snapshot| snapshot.convert_to_jpy(payment.amount, &payment.currency))
        };
        match converted {
            Some(amount) => bucket.total += amount,
            None => {
                conversion_incomplete = true;
                warn!(
                    "no usable {} rate; excluding {} from the {} total",
                    payment.currency, payment.subscription_id, bucket.month_key
                );
                bucket.unconverted.push(UnconvertedAmount {
                    subscription_id: payment.subscription_id.clone(),
                    service_name: payment.service_name.clone(),
                    amount: payment.amount,
                    currency: payment.currency.clone(),
                });
            }
        }
    }

    MonthlyTotalsReport {
        months: buckets.into_values().collect(),
        conversion_incomplete,
    }
}
