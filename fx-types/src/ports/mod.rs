//! Port traits (interfaces for adapters).
//!
//! These are the contracts that adapters must implement.
//! The application layer depends on these traits, not concrete implementations.

mod rate_provider;

pub use rate_provider::{RateError, RateProvider};
