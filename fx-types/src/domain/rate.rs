//! Exchange rate quoted for a single currency pair.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::CurrencyCode;

/// Units of `target` currency per one unit of `base` currency.
///
/// A rate is scoped to exactly one pair and one point in time. It is never
/// cached; every conversion fetches a fresh one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Rate {
    pub base: CurrencyCode,
    pub target: CurrencyCode,
    /// Quoted value, as returned by the provider
    #[schema(value_type = String, example = "0.92")]
    pub value: Decimal,
    /// When the provider produced the quote, if it said so
    #[serde(skip_serializing_if = "Option::is_none")]
    pub as_of: Option<DateTime<Utc>>,
}

impl Rate {
    /// Creates a rate without a quote timestamp.
    pub fn new(base: CurrencyCode, target: CurrencyCode, value: Decimal) -> Self {
        Self {
            base,
            target,
            value,
            as_of: None,
        }
    }

    /// Attaches the provider's quote timestamp.
    pub fn with_as_of(mut self, as_of: DateTime<Utc>) -> Self {
        self.as_of = Some(as_of);
        self
    }

    pub fn is_positive(&self) -> bool {
        self.value > Decimal::ZERO
    }

    /// Key under which quote services list this pair, e.g. `USDEUR`.
    pub fn pair_key(base: &CurrencyCode, target: &CurrencyCode) -> String {
        format!("{}{}", base, target)
    }
}
