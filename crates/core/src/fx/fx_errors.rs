//! Error types for the exchange-rate layer.

use thiserror::Error;

use cardfolio_rates::RatesError;

/// Errors surfaced by the exchange-rate cache.
///
/// These are the only errors the engine raises at runtime; every other
/// data problem degrades to a skip or a `None`.
#[derive(Error, Debug)]
pub enum FxError {
    /// The upstream rate service did not answer within its timeout.
    /// Kept distinct so the application can show a dedicated message.
    #[error("Rate service timed out: {0}")]
    RateServiceTimeout(String),

    /// The upstream rate service failed or returned an undecodable
    /// payload.
    #[error("Rate service unavailable: {0}")]
    RateServiceUnavailable(String),

    /// A fetched table carried no usable rate for the reporting
    /// currency, so nothing could be converted with it.
    #[error("Rate table has no usable {0} rate")]
    MissingReportingRate(String),
}

impl From<RatesError> for FxError {
    fn from(err: RatesError) -> Self {
        match &err {
            RatesError::Timeout { .. } => FxError::RateServiceTimeout(err.to_string()),
            RatesError::ProviderError { .. } | RatesError::InvalidPayload(_) => {
                FxError::RateServiceUnavailable(err.to_string())
            }
        }
    }
}
