//! Subscriptions module - domain models for recurring charges.

mod subscriptions_model;


// Re-export the public interface
pub use subscriptions_model::{
    group_subscriptions_by_card, BillingCycle, NewSubscription, Subscription,
};
