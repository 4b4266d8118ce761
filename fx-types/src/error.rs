//! Error types for currency conversion.

use rust_decimal::Decimal;

use crate::domain::CurrencyCode;
use crate::ports::RateError;

/// Every way a single conversion can fail.
///
/// The `Display` text of each variant is the message shown to the user.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConversionError {
    #[error("Please enter an amount to convert.")]
    EmptyAmount,

    #[error("Amount must be greater than zero.")]
    NonPositiveAmount,

    #[error("'{0}' is not a valid number.")]
    InvalidNumber(String),

    #[error("'{0}' is outside the supported amount range.")]
    AmountOutOfRange(String),

    #[error("Amount must be non-negative.")]
    InvalidAmount,

    #[error("Please select different currencies for conversion.")]
    SameCurrency,

    #[error("Conversion rate for {base} to {target} not found.")]
    RateUnavailable {
        base: CurrencyCode,
        target: CurrencyCode,
    },

    #[error("Conversion failed: {0}")]
    ProviderError(String),

    #[error("Conversion rate must be positive, got {0}.")]
    NonPositiveRate(Decimal),

    #[error("Converted amount is too large to represent.")]
    ResultOverflow,
}

impl ConversionError {
    /// Stable machine-readable name of the failure kind.
    pub fn kind(&self) -> &'static str {
        match self {
            ConversionError::EmptyAmount => "EMPTY_AMOUNT",
            ConversionError::NonPositiveAmount => "NON_POSITIVE_AMOUNT",
            ConversionError::InvalidNumber(_) => "INVALID_NUMBER",
            ConversionError::AmountOutOfRange(_) => "AMOUNT_OUT_OF_RANGE",
            ConversionError::InvalidAmount => "INVALID_AMOUNT",
            ConversionError::SameCurrency => "SAME_CURRENCY",
            ConversionError::RateUnavailable { .. } => "RATE_UNAVAILABLE",
            ConversionError::ProviderError(_) => "PROVIDER_ERROR",
            ConversionError::NonPositiveRate(_) => "NON_POSITIVE_RATE",
            ConversionError::ResultOverflow => "RESULT_OVERFLOW",
        }
    }

    /// True for failures caused by the caller's input or currency selection.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            ConversionError::EmptyAmount
                | ConversionError::NonPositiveAmount
                | ConversionError::InvalidNumber(_)
                | ConversionError::AmountOutOfRange(_)
                | ConversionError::InvalidAmount
                | ConversionError::SameCurrency
                | ConversionError::ResultOverflow
        )
    }
}

impl From<RateError> for ConversionError {
    fn from(err: RateError) -> Self {
        match err {
            RateError::Unavailable { base, target } => {
                ConversionError::RateUnavailable { base, target }
            }
            RateError::Provider(msg) => ConversionError::ProviderError(msg),
        }
    }
}
