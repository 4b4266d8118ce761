//! # FX Hex
//!
//! Application service layer and HTTP adapter for the currency converter.
//!
//! ## Architecture
//!
//! - `service/` - Application service (validation, rate lookup, arithmetic)
//! - `inbound/` - HTTP adapter (Axum server)
//! - `openapi/` - OpenAPI document for the HTTP adapter
//!
//! The service is generic over `P: RateProvider`, allowing
//! different rate providers to be injected.

pub mod inbound;
pub mod openapi;
pub mod service;

#[cfg(test)]
mod service_tests;

pub use service::ConversionService;
