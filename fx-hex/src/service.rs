//! Conversion Application Service
//!
//! Orchestrates validation, rate lookup and arithmetic through the rate provider port.
//! Contains NO infrastructure logic - pure business orchestration.

use std::str::FromStr;

use rust_decimal::Decimal;

use fx_types::{ConversionError, ConversionRequest, ConversionResult, CurrencyCode, RateProvider};

/// Application service for currency conversion.
///
/// Generic over `P: RateProvider` - the adapter is injected at compile time.
/// The service holds no mutable state, so calls are independent of each other.
pub struct ConversionService<P: RateProvider> {
    provider: P,
}

impl<P: RateProvider> ConversionService<P> {
    /// Creates a new conversion service with the given rate provider.
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Returns a reference to the underlying provider.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Converts a raw, user-typed amount from `base` to `target`.
    ///
    /// Checks run in a fixed order and the first failure wins:
    /// empty input, identical currencies, number syntax, positivity.
    /// Only then is the provider asked for a rate. Nothing is retried.
    pub async fn convert(
        &self,
        raw_amount: &str,
        base: &str,
        target: &str,
    ) -> Result<ConversionResult, ConversionError> {
        if raw_amount.trim().is_empty() {
            return Err(ConversionError::EmptyAmount);
        }

        if CurrencyCode::new(base) == CurrencyCode::new(target) {
            return Err(ConversionError::SameCurrency);
        }

        let amount = parse_amount(raw_amount)?;
        if amount <= Decimal::ZERO {
            return Err(ConversionError::NonPositiveAmount);
        }

        let request = ConversionRequest::new(amount, base, target)?;

        let rate = self
            .provider
            .get_rate(request.base(), request.target())
            .await?;

        request.apply(&rate)
    }
}

/// Parses plain (`12.50`) or scientific (`1.25e1`) decimal notation.
///
/// Numbers that are well formed but do not fit a `Decimal` (too large, or so
/// small they would round to zero) are `AmountOutOfRange`, unless they are not
/// positive anyway.
fn parse_amount(raw: &str) -> Result<Decimal, ConversionError> {
    let trimmed = raw.trim();
    let parsed = Decimal::from_str(trimmed).or_else(|_| Decimal::from_scientific(trimmed));

    let as_float = trimmed.parse::<f64>().ok().filter(|f| f.is_finite());
    match (parsed, as_float) {
        (Ok(amount), Some(f)) if amount.is_zero() && f != 0.0 => Err(out_of_range(trimmed, f)),
        (Ok(amount), _) => Ok(amount),
        (Err(_), Some(f)) => Err(out_of_range(trimmed, f)),
        (Err(_), None) => Err(ConversionError::InvalidNumber(trimmed.to_string())),
    }
}

fn out_of_range(trimmed: &str, value: f64) -> ConversionError {
    if value > 0.0 {
        ConversionError::AmountOutOfRange(trimmed.to_string())
    } else {
        ConversionError::NonPositiveAmount
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("100").unwrap(), dec!(100));
        assert_eq!(parse_amount(" 12.50 ").unwrap(), dec!(12.50));
        assert_eq!(parse_amount("1.25e2").unwrap(), dec!(125));
        assert_eq!(parse_amount("-5").unwrap(), dec!(-5));
    }

    #[test]
    fn test_parse_amount_rejects_garbage() {
        for raw in ["abc", "1,000", "12..5", "NaN", "inf", "-inf", "5 USD"] {
            assert_eq!(
                parse_amount(raw),
                Err(ConversionError::InvalidNumber(raw.to_string())),
                "input {:?}",
                raw
            );
        }
    }

    #[test]
    fn test_parse_amount_outside_decimal_range() {
        for raw in ["1e29", "1e-30", "0.0000000000000000000000000000001"] {
            assert_eq!(
                parse_amount(raw),
                Err(ConversionError::AmountOutOfRange(raw.to_string())),
                "input {:?}",
                raw
            );
        }
        assert_eq!(parse_amount("-1e29"), Err(ConversionError::NonPositiveAmount));
    }
}
