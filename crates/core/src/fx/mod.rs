//! Exchange-rate access and currency normalization.
//!
//! Wraps the `cardfolio-rates` provider behind a time-limited cache
//! and exposes conversion into the reporting currency.

mod currency;
mod fx_errors;
mod fx_model;
mod fx_service;
mod fx_traits;


// Re-export the public interface
pub use currency::{normalize_currency_code, normalize_supported_currency};
pub use fx_errors::FxError;
pub use fx_model::ExchangeRateSnapshot;
pub use fx_service::FxService;
pub use fx_traits::FxServiceTrait;
