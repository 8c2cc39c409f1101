//! Next-occurrence resolution and horizon-bounded enumeration.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};
use log::debug;
use rust_decimal::Decimal;

use crate::cards::{Card, CardType, FALLBACK_CARD_NAME};
use crate::constants::{MAX_CATCH_UP_STEPS, MAX_SCHEDULE_CATCH_UP_STEPS, MIN_DAYS_IN_MONTH};
use crate::subscriptions::Subscription;

use super::calendar::{
    add_cycle, add_cycle_with_payment_day, add_months, align_date_to_payment_day,
    clamp_day_to_month, month_span, window_horizon,
};
use super::schedule_model::{
    ScheduleOptions, ScheduleReport, ScheduledPayment, SkipReason, SkippedSubscription,
};

/// How occurrence dates step from one cycle to the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SteppingRule {
    /// Credit card with a usable payment day: every occurrence re-snaps
    /// to that day.
    FixedDay(u32),
    /// Debit card, unlinked subscription, or credit card without a
    /// usable payment day: occurrences follow the start date's own day,
    /// with clamp drift.
    Anchored,
}

impl SteppingRule {
    fn for_card(card: Option<&Card>) -> Self {
        match card {
            Some(card) if card.card_type == CardType::Credit => match card.resolve_payment_day() {
                Some(day) => SteppingRule::FixedDay(day),
                None => SteppingRule::Anchored,
            },
            _ => SteppingRule::Anchored,
        }
    }

    fn first_occurrence(&self, start: NaiveDate) -> Option<NaiveDate> {
        match self {
            SteppingRule::FixedDay(day) => align_date_to_payment_day(start, *day),
            SteppingRule::Anchored => Some(start),
        }
    }

    fn step(&self, date: NaiveDate, cycle_months: u32) -> Option<NaiveDate> {
        match self {
            SteppingRule::FixedDay(day) => add_cycle_with_payment_day(date, cycle_months, *day),
            SteppingRule::Anchored => add_cycle(date, cycle_months),
        }
    }
}

/// The date `cycles` whole cycles after `first`, computed in one jump.
///
/// Only valid when stepping is memoryless: a fixed payment day, or an
/// anchor day that no month can clamp.
fn jump(rule: SteppingRule, first: NaiveDate, cycle_months: u32, cycles: i64) -> Option<NaiveDate> {
    let months = cycles.checked_mul(i64::from(cycle_months))?;
    let (year, month) = add_months(first.year(), first.month(), months)?;
    let target_day = match rule {
        SteppingRule::FixedDay(day) => day,
        SteppingRule::Anchored => first.day(),
    };
    let day = clamp_day_to_month(year, month, target_day)?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Smallest occurrence on or after `reference`, via divmod on the month
/// count. At most two candidate evaluations: the floor estimate, then
/// one more cycle when the estimate's day falls short within the
/// reference month.
fn jump_to_reference(
    rule: SteppingRule,
    first: NaiveDate,
    cycle_months: u32,
    reference: NaiveDate,
) -> Option<NaiveDate> {
    let span = month_span(first, reference).max(0);
    let cycles = span.div_euclid(i64::from(cycle_months));
    let candidate = jump(rule, first, cycle_months, cycles)?;
    if candidate >= reference {
        return Some(candidate);
    }
    jump(rule, first, cycle_months, cycles + 1)
}

/// Advances `first` until it reaches `reference`.
///
/// Closed-form wherever stepping is memoryless; only a drifting anchor
/// on day 29-31 steps one cycle at a time, bounded by `max_steps`.
/// Exhausting the budget means no resolvable next occurrence.
fn catch_up(
    rule: SteppingRule,
    first: NaiveDate,
    cycle_months: u32,
    reference: NaiveDate,
    max_steps: u32,
) -> Option<NaiveDate> {
    if first >= reference {
        return Some(first);
    }
    match rule {
        SteppingRule::FixedDay(_) => jump_to_reference(rule, first, cycle_months, reference),
        SteppingRule::Anchored if first.day() <= MIN_DAYS_IN_MONTH => {
            jump_to_reference(rule, first, cycle_months, reference)
        }
        SteppingRule::Anchored => {
            let mut current = first;
            for _ in 0..max_steps {
                current = rule.step(current, cycle_months)?;
                if current >= reference {
                    return Some(current);
                }
            }
            None
        }
    }
}

/// Resolves a subscription's next charge date on or after `reference`.
///
/// Credit cards govern the day via their payment day (re-snap each
/// cycle); debit cards and unlinked subscriptions stay anchored to the
/// start date. `None` means nothing is scheduled, never a fault: the
/// start date did not parse, or catch-up ran out of budget.
pub fn compute_next_payment_date(
    subscription: &Subscription,
    card: Option<&Card>,
    reference: NaiveDate,
) -> Option<NaiveDate> {
    let start = subscription.start_date()?;
    let rule = SteppingRule::for_card(card);
    let first = rule.first_occurrence(start)?;
    catch_up(
        rule,
        first,
        subscription.cycle.months(),
        reference,
        MAX_CATCH_UP_STEPS,
    )
}

fn scheduled_payment(
    subscription: &Subscription,
    card: Option<&Card>,
    payment_date: NaiveDate,
) -> ScheduledPayment {
    ScheduledPayment {
        subscription_id: subscription.id.clone(),
        service_name: subscription.service_name.clone(),
        amount: subscription.amount,
        currency: subscription.normalized_currency(),
        cycle: subscription.cycle,
        payment_date,
        card_id: subscription.card_id.clone(),
        card_name: card
            .map(|card| card.card_name.clone())
            .unwrap_or_else(|| FALLBACK_CARD_NAME.to_string()),
        card_type: card.map(|card| card.card_type).unwrap_or_default(),
    }
}

fn skipped(subscription: &Subscription, reason: SkipReason) -> SkippedSubscription {
    debug!(
        "excluding subscription {} from schedule: {:?}",
        subscription.id, reason
    );
    SkippedSubscription {
        subscription_id: subscription.id.clone(),
        service_name: subscription.service_name.clone(),
        reason,
    }
}

/// Enumerates every projected charge inside the upcoming window.
///
/// Occurrences are emitted per subscription from the first one at or
/// after `start_date_limit` through the horizon (last day of the
/// window's final month), then sorted by date and truncated to the
/// global cap. Unschedulable subscriptions are reported in
/// [`ScheduleReport::skipped`] rather than dropped silently.
pub fn calculate_upcoming_payments(
    cards: &[Card],
    subscriptions: &[Subscription],
    options: &ScheduleOptions,
) -> ScheduleReport {
    let cards_by_id: HashMap<&str, &Card> =
        cards.iter().map(|card| (card.id.as_str(), card)).collect();
    let start = options.start_date_limit;
    let mut report = ScheduleReport::default();
    let Some(horizon) = window_horizon(start, options.months_limit) else {
        return report;
    };

    for subscription in subscriptions {
        if report.payments.len() >= options.max_events {
            break;
        }
        if subscription.amount <= Decimal::ZERO {
            report
                .skipped
                .push(skipped(subscription, SkipReason::NonPositiveAmount));
            continue;
        }
        let Some(start_date) = subscription.start_date() else {
            report
                .skipped
                .push(skipped(subscription, SkipReason::InvalidStartDate));
            continue;
        };

        let card = cards_by_id.get(subscription.card_id.as_str()).copied();
        let rule = SteppingRule::for_card(card);
        let cycle_months = subscription.cycle.months();
        let first = rule.first_occurrence(start_date).and_then(|first| {
            catch_up(rule, first, cycle_months, start, MAX_SCHEDULE_CATCH_UP_STEPS)
        });
        let Some(first) = first else {
            report
                .skipped
                .push(skipped(subscription, SkipReason::ScheduleUnresolvable));
            continue;
        };

        let mut current = first;
        while current <= horizon && report.payments.len() < options.max_events {
            report
                .payments
                .push(scheduled_payment(subscription, card, current));
            match rule.step(current, cycle_months) {
                Some(next) => current = next,
                None => break,
            }
        }
    }

    report
        .payments
        .sort_by(|a, b| a.payment_date.cmp(&b.payment_date));
    report.payments.truncate(options.max_events);
    report
}
