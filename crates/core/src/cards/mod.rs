//! Cards module - domain models for registered payment cards.

mod cards_constants;
mod cards_model;


// Re-export the public interface
pub use cards_constants::{
    normalize_card_brand, FALLBACK_CARD_BRAND, FALLBACK_CARD_NAME, SUPPORTED_CARD_BRANDS,
};
pub use cards_model::{valid_billing_day, Card, CardType, NewCard};
