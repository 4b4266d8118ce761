//! Data Transfer Objects (DTOs) for requests and responses.

use chrono::{DateTime, Utc};
use currency_directory::Currency;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{ConversionResult, CurrencyCode};

// ─────────────────────────────────────────────────────────────────────────────
// Conversion DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Request to convert an amount between two currencies.
///
/// The amount is raw user input; parsing and validation happen in the service.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ConvertRequest {
    /// Amount in the base currency, as typed by the user
    #[schema(example = "100")]
    pub amount: String,
    /// Currency to convert from
    #[schema(example = "USD")]
    pub base: String,
    /// Currency to convert to
    #[schema(example = "EUR")]
    pub target: String,
}

/// Response after a successful conversion.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ConversionResponse {
    pub base: CurrencyCode,
    pub target: CurrencyCode,
    /// Amount in the base currency
    #[schema(value_type = String, example = "100")]
    pub amount: Decimal,
    /// Units of target per unit of base
    #[schema(value_type = String, example = "0.92")]
    pub rate: Decimal,
    /// Unrounded amount in the target currency
    #[schema(value_type = String, example = "92.00")]
    pub converted: Decimal,
    /// Converted amount formatted for display
    #[schema(example = "92.00")]
    pub display: String,
    /// Quote timestamp reported by the provider
    #[serde(skip_serializing_if = "Option::is_none")]
    pub as_of: Option<DateTime<Utc>>,
}

impl From<&ConversionResult> for ConversionResponse {
    fn from(result: &ConversionResult) -> Self {
        Self {
            base: result.request().base().clone(),
            target: result.request().target().clone(),
            amount: result.request().amount(),
            rate: result.rate().value,
            converted: result.converted(),
            display: result.display_amount(),
            as_of: result.rate().as_of,
        }
    }
}

/// Error body returned by the HTTP adapter.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable message
    #[schema(example = "Please select different currencies for conversion.")]
    pub error: String,
    /// HTTP status code
    #[schema(example = 400)]
    pub code: u16,
    /// Failure kind
    #[schema(example = "SAME_CURRENCY")]
    pub kind: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Currency directory DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// A currency listed in the directory.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CurrencyInfo {
    #[schema(example = "EUR")]
    pub code: String,
    #[schema(example = "Euro")]
    pub name: String,
    #[schema(example = "European Union")]
    pub country: String,
    #[schema(example = "EU")]
    pub country_code: String,
    /// Flag image as a data URI, only on single-currency lookups
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flag: Option<String>,
}

impl CurrencyInfo {
    /// Directory entry without the flag image.
    pub fn summary(currency: &Currency) -> Self {
        Self {
            code: currency.code.clone(),
            name: currency.name.clone(),
            country: currency.country.clone(),
            country_code: currency.country_code.clone(),
            flag: None,
        }
    }

    /// Directory entry including the flag image, if the currency has one.
    pub fn detailed(currency: &Currency) -> Self {
        Self {
            flag: currency.flag.as_ref().map(|f| f.to_data_uri()),
            ..Self::summary(currency)
        }
    }
}
