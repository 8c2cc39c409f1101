//! Subscription domain models.

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};
use crate::fx::{normalize_currency_code, normalize_supported_currency};
use crate::utils::date_utils::parse_date_input;

/// Billing periodicity of a subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BillingCycle {
    #[default]
    Monthly,
    Yearly,
}

impl BillingCycle {
    /// Normalizes a raw record value; anything that is not `yearly`
    /// counts as monthly.
    pub fn from_record(value: &str) -> Self {
        if value == "yearly" {
            BillingCycle::Yearly
        } else {
            BillingCycle::Monthly
        }
    }

    /// Calendar months in one cycle step.
    pub fn months(&self) -> u32 {
        match self {
            BillingCycle::Monthly => 1,
            BillingCycle::Yearly => 12,
        }
    }

    /// Japanese display label (月額/年額).
    pub fn label(&self) -> &'static str {
        match self {
            BillingCycle::Monthly => "月額",
            BillingCycle::Yearly => "年額",
        }
    }
}

/// Domain model for a recurring subscription tied to a card.
///
/// `card_id` may dangle after the referenced card is deleted; such
/// subscriptions stay valid and are projected with the
/// start-date-anchored rules.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    pub id: String,
    pub user_id: String,
    pub card_id: String,
    pub service_name: String,
    pub amount: Decimal,
    /// ISO currency code; empty means the reporting currency.
    pub currency: String,
    pub cycle: BillingCycle,
    /// Raw start-date field as stored by the document layer. Parsed
    /// lazily so a bad record degrades to a skip, not an error.
    pub payment_start_date: String,
    /// Charge day override (1-31), meaningful on debit cards only.
    pub billing_day: Option<u32>,
    pub registered_email: Option<String>,
    pub notes: Option<String>,
}

impl Subscription {
    /// Parses the stored start date; `None` marks the record as
    /// unschedulable.
    pub fn start_date(&self) -> Option<NaiveDate> {
        parse_date_input(&self.payment_start_date)
    }

    /// The subscription currency as an upper-case ISO code, falling
    /// back to the reporting currency when unset.
    pub fn normalized_currency(&self) -> String {
        normalize_currency_code(&self.currency)
    }
}

/// Input model for registering a new subscription.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSubscription {
    pub user_id: String,
    pub card_id: String,
    pub service_name: String,
    pub amount: Decimal,
    pub currency: String,
    pub cycle: BillingCycle,
    pub payment_start_date: String,
    pub billing_day: Option<u32>,
    pub registered_email: Option<String>,
    pub notes: Option<String>,
}

impl NewSubscription {
    /// Validates the payload and clamps the currency to the supported
    /// set.
    pub fn validate(&mut self) -> Result<()> {
        if self.card_id.trim().is_empty() {
            return Err(ValidationError::MissingField("cardId".to_string()).into());
        }
        if self.service_name.trim().is_empty() {
            return Err(ValidationError::MissingField("serviceName".to_string()).into());
        }
        if self.amount <= Decimal::ZERO {
            return Err(ValidationError::InvalidInput(
                "amount must be greater than zero".to_string(),
            )
            .into());
        }
        if parse_date_input(&self.payment_start_date).is_none() {
            return Err(ValidationError::InvalidInput(
                "paymentStartDate must be a valid calendar date".to_string(),
            )
            .into());
        }
        self.currency = normalize_supported_currency(&self.currency);
        Ok(())
    }
}

/// Groups subscriptions by the card they are attached to.
pub fn group_subscriptions_by_card(
    subscriptions: &[Subscription],
) -> HashMap<String, Vec<Subscription>> {
    let mut grouped: HashMap<String, Vec<Subscription>> = HashMap::new();
    for subscription in subscriptions {
        grouped
            .entry(subscription.card_id.clone())
            .or_default()
            .push(subscription.clone());
    }
    grouped
}
