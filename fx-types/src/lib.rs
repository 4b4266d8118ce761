//! # FX Types
//!
//! Domain types and port traits for the currency converter.
//! This crate performs no IO itself - only data structures, business rules,
//! and trait definitions. `CurrencyInfo` borrows its record type from
//! `currency-directory`, whose loaders are never called from here.
//!
//! ## Architecture
//!
//! This crate represents the **innermost core** of the hexagonal architecture:
//! - `domain/` - Pure domain types (CurrencyCode, ConversionRequest, Rate, ConversionResult)
//! - `ports/` - Trait definitions that adapters must implement
//! - `dto/` - Data Transfer Objects for API boundaries
//! - `error/` - Conversion error taxonomy

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{ConversionRequest, ConversionResult, CurrencyCode, Rate};
pub use dto::*;
pub use error::ConversionError;
pub use ports::{RateError, RateProvider};
