//! Constants for the cards module.

/// Card brands selectable on the card form.
pub const SUPPORTED_CARD_BRANDS: [&str; 5] = [
    "VISA",
    "Mastercard",
    "JCB",
    "American Express",
    "その他",
];

/// Brand label used when the submitted brand is not in the supported
/// set.
pub const FALLBACK_CARD_BRAND: &str = "その他";

/// Display name for payments whose card reference no longer resolves.
pub const FALLBACK_CARD_NAME: &str = "登録済みカード";

/// Returns the submitted brand when supported, otherwise the fallback.
pub fn normalize_card_brand(value: &str) -> &str {
    if SUPPORTED_CARD_BRANDS.contains(&value) {
        value
    } else {
        FALLBACK_CARD_BRAND
    }
}
