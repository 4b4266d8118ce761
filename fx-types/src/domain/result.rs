//! Outcome of a successful conversion.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use std::fmt;
use utoipa::ToSchema;

use super::{ConversionRequest, Rate};

/// `amount * rate`, expressed in the target currency.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ConversionResult {
    request: ConversionRequest,
    rate: Rate,
    #[schema(value_type = String, example = "92.00")]
    converted: Decimal,
}

impl ConversionResult {
    pub(crate) fn new(request: ConversionRequest, rate: Rate, converted: Decimal) -> Self {
        Self {
            request,
            rate,
            converted,
        }
    }

    pub fn request(&self) -> &ConversionRequest {
        &self.request
    }

    pub fn rate(&self) -> &Rate {
        &self.rate
    }

    /// Unrounded converted amount.
    pub fn converted(&self) -> Decimal {
        self.converted
    }

    /// Converted amount rounded to two places with thousands separators,
    /// e.g. `1,234,567.89`.
    pub fn display_amount(&self) -> String {
        format_grouped(self.converted)
    }
}

impl fmt::Display for ConversionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} = {} {}",
            self.request.amount(),
            self.request.base(),
            self.display_amount(),
            self.request.target()
        )
    }
}

fn format_grouped(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let text = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{}{}.{}", sign, grouped, frac_part)
}
