//! Tests for next-occurrence resolution and the schedule enumerator.

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    use crate::cards::{Card, CardType, FALLBACK_CARD_NAME};
    use crate::schedule::{
        calculate_upcoming_payments, compute_next_payment_date, ScheduleOptions, SkipReason,
    };
    use crate::subscriptions::{BillingCycle, Subscription};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn credit_card(id: &str, payment_day: Option<u32>) -> Card {
        Card {
            id: id.to_string(),
            user_id: "user-1".to_string(),
            card_name: "メインカード".to_string(),
            card_type: CardType::Credit,
            closing_day: Some(15),
            payment_day,
            ..Card::default()
        }
    }

    fn debit_card(id: &str) -> Card {
        Card {
            id: id.to_string(),
            user_id: "user-1".to_string(),
            card_name: "銀行カード".to_string(),
            card_type: CardType::Debit,
            billing_day: Some(5),
            ..Card::default()
        }
    }

    fn subscription(id: &str, card_id: &str, start: &str, cycle: BillingCycle) -> Subscription {
        Subscription {
            id: id.to_string(),
            user_id: "user-1".to_string(),
            card_id: card_id.to_string(),
            service_name: format!("サービス{id}"),
            amount: dec!(1000),
            currency: "JPY".to_string(),
            cycle,
            payment_start_date: start.to_string(),
            ..Subscription::default()
        }
    }

    // ==================== compute_next_payment_date ====================

    #[test]
    fn test_future_start_is_returned_as_is() {
        let sub = subscription("s1", "c1", "2025-09-15", BillingCycle::Monthly);
        assert_eq!(
            compute_next_payment_date(&sub, None, date(2025, 8, 20)),
            Some(date(2025, 9, 15))
        );
    }

    #[test]
    fn test_anchored_monthly_rolls_to_next_month() {
        // Start on the 15th, asked on the 20th: next charge is the
        // 15th of the following month.
        let sub = subscription("s1", "c1", "2025-08-15", BillingCycle::Monthly);
        assert_eq!(
            compute_next_payment_date(&sub, None, date(2025, 8, 20)),
            Some(date(2025, 9, 15))
        );
    }

    #[test]
    fn test_credit_card_aligns_to_payment_day() {
        let card = credit_card("c1", Some(27));
        let sub = subscription("s1", "c1", "2025-01-10", BillingCycle::Monthly);
        assert_eq!(
            compute_next_payment_date(&sub, Some(&card), date(2025, 1, 1)),
            Some(date(2025, 1, 27))
        );
    }

    #[test]
    fn test_credit_card_resnaps_day_31() {
        let card = credit_card("c1", Some(31));
        let sub = subscription("s1", "c1", "2025-01-31", BillingCycle::Monthly);
        assert_eq!(
            compute_next_payment_date(&sub, Some(&card), date(2025, 3, 1)),
            Some(date(2025, 3, 31))
        );
    }

    #[test]
    fn test_anchored_day_31_keeps_drift() {
        let sub = subscription("s1", "c1", "2025-01-31", BillingCycle::Monthly);
        assert_eq!(
            compute_next_payment_date(&sub, None, date(2025, 3, 1)),
            Some(date(2025, 3, 28))
        );
    }

    #[test]
    fn test_debit_card_is_anchored() {
        let card = debit_card("c2");
        let sub = subscription("s1", "c2", "2025-01-31", BillingCycle::Monthly);
        assert_eq!(
            compute_next_payment_date(&sub, Some(&card), date(2025, 3, 1)),
            Some(date(2025, 3, 28))
        );
    }

    #[test]
    fn test_credit_card_without_usable_payment_day_is_anchored() {
        for payment_day in [None, Some(0), Some(45)] {
            let card = credit_card("c1", payment_day);
            let sub = subscription("s1", "c1", "2025-01-31", BillingCycle::Monthly);
            assert_eq!(
                compute_next_payment_date(&sub, Some(&card), date(2025, 3, 1)),
                Some(date(2025, 3, 28)),
                "payment_day {payment_day:?}"
            );
        }
    }

    #[test]
    fn test_yearly_cycle_steps_twelve_months() {
        let sub = subscription("s1", "c1", "2024-09-10", BillingCycle::Yearly);
        assert_eq!(
            compute_next_payment_date(&sub, None, date(2025, 8, 20)),
            Some(date(2025, 9, 10))
        );
    }

    #[test]
    fn test_unparseable_start_date_is_none() {
        let sub = subscription("s1", "c1", "not-a-date", BillingCycle::Monthly);
        assert_eq!(compute_next_payment_date(&sub, None, date(2025, 8, 20)), None);
    }

    #[test]
    fn test_distant_past_start_resolves_in_closed_form() {
        // Ten-plus years of monthly cycles; day 15 never clamps so the
        // divmod path applies.
        let sub = subscription("s1", "c1", "2015-01-15", BillingCycle::Monthly);
        assert_eq!(
            compute_next_payment_date(&sub, None, date(2025, 8, 20)),
            Some(date(2025, 9, 15))
        );
    }

    #[test]
    fn test_distant_past_credit_start_resolves_in_closed_form() {
        let card = credit_card("c1", Some(31));
        let sub = subscription("s1", "c1", "2010-01-05", BillingCycle::Monthly);
        assert_eq!(
            compute_next_payment_date(&sub, Some(&card), date(2025, 8, 20)),
            Some(date(2025, 8, 31))
        );
    }

    #[test]
    fn test_drifting_anchor_exhausts_catch_up_budget() {
        // Day-31 anchors step one cycle at a time; 120 steps from 2010
        // never reach 2025, so there is no resolvable occurrence.
        let sub = subscription("s1", "c1", "2010-01-31", BillingCycle::Monthly);
        assert_eq!(compute_next_payment_date(&sub, None, date(2025, 8, 20)), None);
    }

    #[test]
    fn test_result_is_never_before_reference() {
        let reference = date(2025, 8, 20);
        let sub = subscription("s1", "c1", "2023-04-30", BillingCycle::Monthly);
        let next = compute_next_payment_date(&sub, None, reference).unwrap();
        assert!(next >= reference);
    }

    // ==================== calculate_upcoming_payments ====================

    #[test]
    fn test_one_occurrence_per_month_through_window() {
        let sub = subscription("s1", "c1", "2025-08-15", BillingCycle::Monthly);
        let options = ScheduleOptions::new(date(2025, 8, 1));

        let report = calculate_upcoming_payments(&[], &[sub], &options);

        let dates: Vec<NaiveDate> = report.payments.iter().map(|p| p.payment_date).collect();
        assert_eq!(
            dates,
            vec![
                date(2025, 8, 15),
                date(2025, 9, 15),
                date(2025, 10, 15),
                date(2025, 11, 15),
            ]
        );
        assert!(report.skipped.is_empty());
    }

    #[test]
    fn test_occurrences_past_horizon_are_not_emitted() {
        // First occurrence lands in the month after the window ends.
        let sub = subscription("s1", "c1", "2025-12-05", BillingCycle::Monthly);
        let options = ScheduleOptions::new(date(2025, 8, 1));

        let report = calculate_upcoming_payments(&[], &[sub], &options);

        assert!(report.payments.is_empty());
        assert!(report.skipped.is_empty());
    }

    #[test]
    fn test_yearly_subscription_emits_at_most_once() {
        let sub = subscription("s1", "c1", "2024-09-10", BillingCycle::Yearly);
        let options = ScheduleOptions::new(date(2025, 8, 1));

        let report = calculate_upcoming_payments(&[], &[sub], &options);

        assert_eq!(report.payments.len(), 1);
        assert_eq!(report.payments[0].payment_date, date(2025, 9, 10));
    }

    #[test]
    fn test_non_positive_amount_is_reported_as_skip() {
        let mut sub = subscription("s1", "c1", "2025-08-15", BillingCycle::Monthly);
        sub.amount = dec!(0);
        let options = ScheduleOptions::new(date(2025, 8, 1));

        let report = calculate_upcoming_payments(&[], &[sub], &options);

        assert!(report.payments.is_empty());
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].reason, SkipReason::NonPositiveAmount);
        assert_eq!(report.skipped[0].subscription_id, "s1");
    }

    #[test]
    fn test_invalid_start_date_is_reported_as_skip() {
        let sub = subscription("s1", "c1", "いつか", BillingCycle::Monthly);
        let options = ScheduleOptions::new(date(2025, 8, 1));

        let report = calculate_upcoming_payments(&[], &[sub], &options);

        assert_eq!(report.skipped[0].reason, SkipReason::InvalidStartDate);
    }

    #[test]
    fn test_exhausted_catch_up_is_reported_as_skip() {
        let sub = subscription("s1", "c1", "2010-01-31", BillingCycle::Monthly);
        let options = ScheduleOptions::new(date(2025, 8, 1));

        let report = calculate_upcoming_payments(&[], &[sub], &options);

        assert_eq!(report.skipped[0].reason, SkipReason::ScheduleUnresolvable);
    }

    #[test]
    fn test_bad_record_does_not_break_the_rest() {
        let good = subscription("s1", "c1", "2025-08-15", BillingCycle::Monthly);
        let bad = subscription("s2", "c1", "broken", BillingCycle::Monthly);
        let options = ScheduleOptions::new(date(2025, 8, 1));

        let report = calculate_upcoming_payments(&[], &[bad, good], &options);

        assert_eq!(report.payments.len(), 4);
        assert_eq!(report.skipped.len(), 1);
    }

    #[test]
    fn test_global_cap_and_sorting() {
        let subscriptions: Vec<Subscription> = (0..10)
            .map(|i| {
                subscription(
                    &format!("s{i}"),
                    "c1",
                    &format!("2025-08-{:02}", i + 1),
                    BillingCycle::Monthly,
                )
            })
            .collect();
        let options = ScheduleOptions::new(date(2025, 8, 1));

        let report = calculate_upcoming_payments(&[], &subscriptions, &options);

        assert_eq!(report.payments.len(), 24);
        assert!(report
            .payments
            .windows(2)
            .all(|pair| pair[0].payment_date <= pair[1].payment_date));
    }

    #[test]
    fn test_unlinked_subscription_uses_fallback_card_name() {
        let sub = subscription("s1", "ghost-card", "2025-08-15", BillingCycle::Monthly);
        let options = ScheduleOptions::new(date(2025, 8, 1));

        let report = calculate_upcoming_payments(&[], &[sub], &options);

        assert_eq!(report.payments[0].card_name, FALLBACK_CARD_NAME);
        assert_eq!(report.payments[0].card_type, CardType::Credit);
    }

    #[test]
    fn test_payments_carry_card_details() {
        let card = debit_card("c2");
        let sub = subscription("s1", "c2", "2025-08-15", BillingCycle::Monthly);
        let options = ScheduleOptions::new(date(2025, 8, 1));

        let report = calculate_upcoming_payments(&[card], &[sub], &options);

        assert_eq!(report.payments[0].card_name, "銀行カード");
        assert_eq!(report.payments[0].card_type, CardType::Debit);
        assert_eq!(report.payments[0].currency, "JPY");
        assert_eq!(report.payments[0].amount, dec!(1000));
    }

    #[test]
    fn test_credit_card_window_respects_payment_day() {
        let card = credit_card("c1", Some(27));
        let sub = subscription("s1", "c1", "2025-06-10", BillingCycle::Monthly);
        let options = ScheduleOptions::new(date(2025, 8, 1));

        let report = calculate_upcoming_payments(&[card], &[sub], &options);

        let dates: Vec<NaiveDate> = report.payments.iter().map(|p| p.payment_date).collect();
        assert_eq!(
            dates,
            vec![
                date(2025, 8, 27),
                date(2025, 9, 27),
                date(2025, 10, 27),
                date(2025, 11, 27),
            ]
        );
    }
}
