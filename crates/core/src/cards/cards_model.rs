//! Card domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};

/// Billing regime of a card, which governs how subscription charge
/// dates are projected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CardType {
    /// Charges re-snap to the card's payment day every cycle.
    #[default]
    Credit,
    /// Charges stay anchored to the subscription's start date.
    Debit,
}

impl CardType {
    /// Normalizes a raw record value; anything that is not `debit`
    /// counts as a credit card.
    pub fn from_record(value: &str) -> Self {
        if value == "debit" {
            CardType::Debit
        } else {
            CardType::Credit
        }
    }

    /// Japanese display label used by the dashboard views.
    pub fn label(&self) -> &'static str {
        match self {
            CardType::Credit => "クレジットカード",
            CardType::Debit => "デビットカード",
        }
    }
}

/// Returns true when the day is usable as a billing/closing/payment
/// day anchor.
pub fn valid_billing_day(day: u32) -> bool {
    (1..=31).contains(&day)
}

/// Domain model representing a registered payment card.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: String,
    pub user_id: String,
    pub card_name: String,
    pub card_brand: Option<String>,
    /// Last four digits of the card number, display only.
    pub last4_digits: Option<String>,
    pub card_type: CardType,
    /// Statement-close day (1-31), credit cards only.
    pub closing_day: Option<u32>,
    /// Charge day (1-31), credit cards only.
    pub payment_day: Option<u32>,
    /// Charge day (1-31) for debit-backed subscriptions.
    pub billing_day: Option<u32>,
    pub limit_amount: Option<Decimal>,
}

impl Card {
    /// Returns the card's payment day when it is usable as a schedule
    /// anchor; out-of-range or missing values count as absent.
    pub fn resolve_payment_day(&self) -> Option<u32> {
        self.payment_day.filter(|day| valid_billing_day(*day))
    }
}

/// Input model for registering a new card.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCard {
    pub user_id: String,
    pub card_name: String,
    pub card_brand: Option<String>,
    pub last4_digits: Option<String>,
    pub card_type: CardType,
    pub closing_day: Option<u32>,
    pub payment_day: Option<u32>,
    pub billing_day: Option<u32>,
    pub limit_amount: Option<Decimal>,
}

impl NewCard {
    /// Validates the payload and clears the day fields that do not
    /// apply to the card type: credit cards never carry a billing day,
    /// debit cards never carry closing/payment days.
    pub fn validate(&mut self) -> Result<()> {
        if self.card_name.trim().is_empty() {
            return Err(ValidationError::MissingField("cardName".to_string()).into());
        }

        if let Some(digits) = &self.last4_digits {
            let digits = digits.trim();
            if !digits.is_empty()
                && (digits.len() != 4 || !digits.chars().all(|c| c.is_ascii_digit()))
            {
                return Err(ValidationError::InvalidInput(
                    "last4Digits must be exactly four digits".to_string(),
                )
                .into());
            }
        }

        match self.card_type {
            CardType::Credit => {
                self.billing_day = None;
                let closing_day = self
                    .closing_day
                    .ok_or_else(|| ValidationError::MissingField("closingDay".to_string()))?;
                if !valid_billing_day(closing_day) {
                    return Err(ValidationError::InvalidInput(
                        "closingDay must be between 1 and 31".to_string(),
                    )
                    .into());
                }
                let payment_day = self
                    .payment_day
                    .ok_or_else(|| ValidationError::MissingField("paymentDay".to_string()))?;
                if !valid_billing_day(payment_day) {
                    return Err(ValidationError::InvalidInput(
                        "paymentDay must be between 1 and 31".to_string(),
                    )
                    .into());
                }
            }
            CardType::Debit => {
                self.closing_day = None;
                self.payment_day = None;
                if let Some(billing_day) = self.billing_day {
                    if !valid_billing_day(billing_day) {
                        return Err(ValidationError::InvalidInput(
                            "billingDay must be between 1 and 31".to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        if let Some(limit_amount) = self.limit_amount {
            if limit_amount < Decimal::ZERO {
                return Err(ValidationError::InvalidInput(
                    "limitAmount must not be negative".to_string(),
                )
                .into());
            }
        }

        Ok(())
    }
}
