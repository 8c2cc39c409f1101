//! Currency code helpers.

use crate::constants::{REPORTING_CURRENCY, SUPPORTED_CURRENCIES};

/// Upper-cases a currency code, defaulting blanks to the reporting
/// currency.
pub fn normalize_currency_code(code: &str) -> String {
    let trimmed = code.trim();
    if trimmed.is_empty() {
        REPORTING_CURRENCY.to_string()
    } else {
        trimmed.to_uppercase()
    }
}

/// Like [`normalize_currency_code`], but clamps codes outside the
/// supported set to the reporting currency. Applied at the input
/// boundary so stored records only carry selectable currencies.
pub fn normalize_supported_currency(code: &str) -> String {
    let normalized = normalize_currency_code(code);
    if SUPPORTED_CURRENCIES.contains(&normalized.as_str()) {
        normalized
    } else {
        REPORTING_CURRENCY.to_string()
    }
}
