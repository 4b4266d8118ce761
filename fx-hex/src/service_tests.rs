//! ConversionService unit tests.

#[cfg(test)]
pub(crate) mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use fx_types::{ConversionError, CurrencyCode, Rate, RateError, RateProvider};

    use crate::ConversionService;

    /// In-memory rate provider that mimics a `quotes` map keyed by `BASE+TARGET`.
    pub struct MockProvider {
        quotes: HashMap<String, Decimal>,
        failure: Option<RateError>,
        calls: Mutex<Vec<(CurrencyCode, CurrencyCode)>>,
    }

    impl MockProvider {
        pub fn new() -> Self {
            Self {
                quotes: HashMap::new(),
                failure: None,
                calls: Mutex::new(Vec::new()),
            }
        }

        pub fn with_quote(mut self, key: &str, value: Decimal) -> Self {
            self.quotes.insert(key.to_string(), value);
            self
        }

        pub fn failing(mut self, err: RateError) -> Self {
            self.failure = Some(err);
            self
        }

        pub fn calls(&self) -> Vec<(CurrencyCode, CurrencyCode)> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl RateProvider for MockProvider {
        async fn get_rate(
            &self,
            base: &CurrencyCode,
            target: &CurrencyCode,
        ) -> Result<Rate, RateError> {
            self.calls
                .lock()
                .unwrap()
                .push((base.clone(), target.clone()));

            if let Some(err) = &self.failure {
                return Err(err.clone());
            }

            self.quotes
                .get(&Rate::pair_key(base, target))
                .map(|value| Rate::new(base.clone(), target.clone(), *value))
                .ok_or_else(|| RateError::Unavailable {
                    base: base.clone(),
                    target: target.clone(),
                })
        }
    }

    fn create_service() -> ConversionService<MockProvider> {
        ConversionService::new(
            MockProvider::new()
                .with_quote("USDEUR", dec!(0.92))
                .with_quote("EURUSD", dec!(1.087)),
        )
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Input validation
    // ─────────────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_empty_amount() {
        let service = create_service();
        for raw in ["", "   ", "\t\n"] {
            let result = service.convert(raw, "USD", "EUR").await;
            assert_eq!(result, Err(ConversionError::EmptyAmount));
        }
        assert!(service.provider().calls().is_empty());
    }

    #[tokio::test]
    async fn test_same_currency() {
        let service = create_service();
        let result = service.convert("100", "USD", "USD").await;
        assert_eq!(result, Err(ConversionError::SameCurrency));
    }

    #[tokio::test]
    async fn test_same_currency_ignores_case() {
        let service = create_service();
        let result = service.convert("100", "usd", "USD").await;
        assert_eq!(result, Err(ConversionError::SameCurrency));
    }

    #[tokio::test]
    async fn test_same_currency_checked_before_number_syntax() {
        let service = create_service();
        let result = service.convert("abc", "EUR", "EUR").await;
        assert_eq!(result, Err(ConversionError::SameCurrency));
    }

    #[tokio::test]
    async fn test_invalid_number() {
        let service = create_service();
        let result = service.convert("abc", "USD", "EUR").await;
        assert!(matches!(result, Err(ConversionError::InvalidNumber(_))));
    }

    #[tokio::test]
    async fn test_tiny_positive_amount_is_out_of_range() {
        let service = create_service();
        let result = service
            .convert("0.0000000000000000000000000000001", "USD", "EUR")
            .await;
        assert_eq!(
            result,
            Err(ConversionError::AmountOutOfRange(
                "0.0000000000000000000000000000001".into()
            ))
        );
        assert!(service.provider().calls().is_empty());
    }

    #[tokio::test]
    async fn test_negative_amount() {
        let service = create_service();
        let result = service.convert("-5", "USD", "EUR").await;
        assert_eq!(result, Err(ConversionError::NonPositiveAmount));
    }

    #[tokio::test]
    async fn test_zero_amount() {
        let service = create_service();
        for raw in ["0", "0.00", "-0"] {
            let result = service.convert(raw, "USD", "EUR").await;
            assert_eq!(result, Err(ConversionError::NonPositiveAmount));
        }
        assert!(service.provider().calls().is_empty());
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Conversion
    // ─────────────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_convert_success() {
        let service = create_service();
        let result = service.convert("100", "USD", "EUR").await.unwrap();

        assert_eq!(result.converted(), dec!(92.00));
        assert_eq!(result.display_amount(), "92.00");
        assert_eq!(result.rate().value, dec!(0.92));
        assert_eq!(result.request().to_string(), "Convert 100 USD to EUR");
    }

    #[tokio::test]
    async fn test_codes_are_normalized_before_lookup() {
        let service = create_service();
        let result = service.convert(" 250 ", "usd", "eur").await.unwrap();
        assert_eq!(result.converted(), dec!(230));

        let calls = service.provider().calls();
        assert_eq!(
            calls,
            vec![(CurrencyCode::new("USD"), CurrencyCode::new("EUR"))]
        );
    }

    #[tokio::test]
    async fn test_convert_is_idempotent() {
        let service = create_service();
        let first = service.convert("42.5", "EUR", "USD").await.unwrap();
        let second = service.convert("42.5", "EUR", "USD").await.unwrap();

        assert_eq!(first, second);
        assert_eq!(service.provider().calls().len(), 2, "no caching between calls");
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Provider failures
    // ─────────────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_missing_quote_is_rate_unavailable() {
        let service = create_service();
        let result = service.convert("100", "USD", "JPY").await;
        assert_eq!(
            result,
            Err(ConversionError::RateUnavailable {
                base: CurrencyCode::new("USD"),
                target: CurrencyCode::new("JPY"),
            })
        );
    }

    #[tokio::test]
    async fn test_provider_error_propagates_once() {
        let service = ConversionService::new(
            MockProvider::new().failing(RateError::Provider("HTTP 500".into())),
        );
        let result = service.convert("100", "USD", "EUR").await;

        assert_eq!(result, Err(ConversionError::ProviderError("HTTP 500".into())));
        assert_eq!(service.provider().calls().len(), 1, "no retry");
    }

    #[tokio::test]
    async fn test_non_positive_rate() {
        let service = ConversionService::new(
            MockProvider::new()
                .with_quote("USDEUR", Decimal::ZERO)
                .with_quote("USDGBP", dec!(-0.79)),
        );

        let result = service.convert("100", "USD", "EUR").await;
        assert_eq!(result, Err(ConversionError::NonPositiveRate(Decimal::ZERO)));

        let result = service.convert("100", "USD", "GBP").await;
        assert_eq!(result, Err(ConversionError::NonPositiveRate(dec!(-0.79))));
    }
}
