//! Error types for the exchange-rate client crate.

use thiserror::Error;

/// Errors that can occur while fetching or decoding exchange rates.
#[derive(Error, Debug)]
pub enum RatesError {
    /// The request to the rate service timed out.
    /// The surrounding application maps this to a dedicated user-facing
    /// message, so it stays distinct from other provider failures.
    #[error("Timeout: {provider}")]
    Timeout {
        /// The provider that timed out
        provider: String,
    },

    /// The rate service could not be reached or answered with an error.
    #[error("Provider error: {provider} - {message}")]
    ProviderError {
        /// The provider that returned the error
        provider: String,
        /// The error message from the provider
        message: String,
    },

    /// The payload decoded but does not describe a usable rate table.
    #[error("Invalid payload: {0}")]
    InvalidPayload(String),
}
