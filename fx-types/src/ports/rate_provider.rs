//! Exchange rate provider port.
//!
//! This trait defines the interface for exchange rate services.
//! Implementations can be HTTP clients, mock providers, etc.

use crate::domain::{CurrencyCode, Rate};

/// Error type for exchange rate lookups.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RateError {
    /// The provider answered but does not quote this pair.
    #[error("Conversion rate for {base} to {target} not found.")]
    Unavailable {
        base: CurrencyCode,
        target: CurrencyCode,
    },

    /// The lookup itself failed (transport, status, or body).
    #[error("Rate provider error: {0}")]
    Provider(String),
}

/// Port trait for exchange rate providers.
#[async_trait::async_trait]
pub trait RateProvider: Send + Sync {
    /// Get the exchange rate from one currency to another.
    /// Returns how many units of `target` you get for 1 unit of `base`.
    ///
    /// Exactly one lookup per call; implementations keep no state between calls.
    async fn get_rate(&self, base: &CurrencyCode, target: &CurrencyCode)
    -> Result<Rate, RateError>;
}
