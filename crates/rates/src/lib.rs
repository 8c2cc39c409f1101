//! Cardfolio Rates Crate
//!
//! Provider-agnostic fetching of currency exchange-rate tables for the
//! Cardfolio application.
//!
//! # Overview
//!
//! The rates crate supports:
//! - Fetching a full rate table for one base currency in a single request
//! - Payload normalization into positive, finite [`rust_decimal::Decimal`] rates
//! - Bounded request timeouts with a distinct timeout error
//!
//! # Core Types
//!
//! - [`ExchangeRateProvider`] - trait implemented by concrete rate sources
//! - [`OpenErApiProvider`] - the open.er-api.com implementation
//! - [`RateTable`] - normalized base currency plus rate map
//! - [`RatesError`] - fetch/decode error taxonomy

pub mod errors;
pub mod models;
pub mod provider;

pub use errors::RatesError;
pub use models::{RatePayload, RateTable};
pub use provider::{ExchangeRateProvider, OpenErApiProvider};
