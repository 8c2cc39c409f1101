//! Month-length-aware calendar arithmetic.
//!
//! Day-of-month anchors survive transitions into shorter months by
//! clamping into `[1, days_in_month]`. Two stepping policies exist:
//! [`add_cycle`] re-clamps the source date's own day (so a clamp
//! "drifts" and sticks), while [`add_cycle_with_payment_day`] re-snaps
//! to a fixed target day every step.
//!
//! Everything returns `Option`; `None` only occurs at the edges of
//! chrono's representable date range.

use chrono::{Datelike, NaiveDate};

/// Calendar days in the given month, accounting for leap years.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let (next_year, next_month) = add_months(year, month, 1)?;
    let next_first = NaiveDate::from_ymd_opt(next_year, next_month, 1)?;
    Some((next_first - first).num_days() as u32)
}

/// Clamps a target day into the valid range for the month. Day 0 and
/// day 32 both land on real dates; this is the sole mechanism by which
/// a "31st" anchor survives February.
pub fn clamp_day_to_month(year: i32, month: u32, day: u32) -> Option<u32> {
    let days = days_in_month(year, month)?;
    Some(day.clamp(1, days))
}

/// Steps a year/month pair forward by a number of months.
pub(crate) fn add_months(year: i32, month: u32, months: i64) -> Option<(i32, u32)> {
    let index = (i64::from(year))
        .checked_mul(12)?
        .checked_add(i64::from(month) - 1)?
        .checked_add(months)?;
    let new_year = i32::try_from(index.div_euclid(12)).ok()?;
    let new_month = (index.rem_euclid(12) + 1) as u32;
    Some((new_year, new_month))
}

/// Advances a date by one cycle, re-clamping the source date's own
/// day-of-month into the target month.
///
/// A day clamped by a shorter month stays clamped: Jan 31 -> Feb 28 ->
/// Mar 28, not Mar 31.
pub fn add_cycle(date: NaiveDate, cycle_months: u32) -> Option<NaiveDate> {
    let (year, month) = add_months(date.year(), date.month(), i64::from(cycle_months))?;
    let day = clamp_day_to_month(year, month, date.day())?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Advances a date by one cycle, re-clamping a fixed target day into
/// the target month. The target day is authoritative every step:
/// Jan 31 -> Feb 28 -> Mar 31.
pub fn add_cycle_with_payment_day(
    date: NaiveDate,
    cycle_months: u32,
    payment_day: u32,
) -> Option<NaiveDate> {
    let (year, month) = add_months(date.year(), date.month(), i64::from(cycle_months))?;
    let day = clamp_day_to_month(year, month, payment_day)?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Snaps a date forward to the nearest occurrence of the target day,
/// in the same month when it has not passed yet, otherwise in the next
/// month. Never moves backward.
pub fn align_date_to_payment_day(date: NaiveDate, payment_day: u32) -> Option<NaiveDate> {
    let same_month_day = clamp_day_to_month(date.year(), date.month(), payment_day)?;
    if same_month_day >= date.day() {
        return NaiveDate::from_ymd_opt(date.year(), date.month(), same_month_day);
    }
    let (year, month) = add_months(date.year(), date.month(), 1)?;
    let day = clamp_day_to_month(year, month, payment_day)?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Last calendar date of a window spanning `months_limit` months,
/// counting the start date's own month.
pub fn window_horizon(start: NaiveDate, months_limit: u32) -> Option<NaiveDate> {
    let (year, month) = add_months(start.year(), start.month(), i64::from(months_limit))?;
    NaiveDate::from_ymd_opt(year, month, 1)?.pred_opt()
}

/// Whole-month index difference between two dates, ignoring days.
pub(crate) fn month_span(from: NaiveDate, to: NaiveDate) -> i64 {
    (i64::from(to.year()) - i64::from(from.year())) * 12 + i64::from(to.month())
        - i64::from(from.month())
}
