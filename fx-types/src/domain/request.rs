//! Conversion request value object.

use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;
use utoipa::ToSchema;

use super::{ConversionResult, CurrencyCode, Rate};
use crate::error::ConversionError;

/// A validated (amount, base, target) triple.
///
/// Immutable once built: codes are normalized exactly once, here.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ConversionRequest {
    #[schema(value_type = String, example = "100")]
    amount: Decimal,
    base: CurrencyCode,
    target: CurrencyCode,
}

impl ConversionRequest {
    /// Creates a new request.
    ///
    /// Only rejects negative amounts. Zero is accepted here; callers that need a
    /// strictly positive amount must check before building the request.
    pub fn new(amount: Decimal, base: &str, target: &str) -> Result<Self, ConversionError> {
        if amount < Decimal::ZERO {
            return Err(ConversionError::InvalidAmount);
        }
        Ok(Self {
            amount,
            base: CurrencyCode::new(base),
            target: CurrencyCode::new(target),
        })
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn base(&self) -> &CurrencyCode {
        &self.base
    }

    pub fn target(&self) -> &CurrencyCode {
        &self.target
    }

    /// Applies a quoted rate, producing the amount in the target currency.
    pub fn apply(&self, rate: &Rate) -> Result<ConversionResult, ConversionError> {
        if !rate.is_positive() {
            return Err(ConversionError::NonPositiveRate(rate.value));
        }
        let converted = self
            .amount
            .checked_mul(rate.value)
            .ok_or(ConversionError::ResultOverflow)?;
        Ok(ConversionResult::new(self.clone(), rate.clone(), converted))
    }
}

impl fmt::Display for ConversionRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Convert {} {} to {}", self.amount, self.base, self.target)
    }
}
