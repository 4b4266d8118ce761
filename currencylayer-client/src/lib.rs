//! # currencylayer Client
//!
//! `RateProvider` adapter for the currencylayer `live` endpoint.
//!
//! One call to [`CurrencyLayerClient::get_rate`] is one GET request. Nothing is
//! cached and failed requests are not retried.

use std::str::FromStr;

use async_trait::async_trait;
use chrono::DateTime;
use fx_types::{CurrencyCode, Rate, RateError, RateProvider};
use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;

/// Public currencylayer API root.
pub const DEFAULT_BASE_URL: &str = "http://api.currencylayer.com/";

/// Error object sent with `"success": false`.
///
/// Read best-effort for logging only; it never decides the outcome.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    code: Option<Value>,
    #[serde(default)]
    info: Option<String>,
    #[serde(default, rename = "type")]
    kind: Option<String>,
}

impl ApiErrorBody {
    fn describe(&self) -> String {
        let text = self
            .info
            .clone()
            .or_else(|| self.kind.clone())
            .unwrap_or_else(|| "request rejected".to_string());
        match &self.code {
            Some(code) => format!("{} (code {})", text, code),
            None => text,
        }
    }
}

/// currencylayer API client.
pub struct CurrencyLayerClient {
    base_url: String,
    access_key: String,
    http: Client,
}

impl CurrencyLayerClient {
    /// Creates a client for the public endpoint.
    pub fn new(access_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.trim_end_matches('/').to_string(),
            access_key: access_key.into(),
            http: Client::new(),
        }
    }

    /// Points the client at another API root.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn live_url(&self) -> String {
        format!("{}/live", self.base_url)
    }
}

#[async_trait]
impl RateProvider for CurrencyLayerClient {
    #[tracing::instrument(skip_all, fields(base = %base, target = %target))]
    async fn get_rate(
        &self,
        base: &CurrencyCode,
        target: &CurrencyCode,
    ) -> Result<Rate, RateError> {
        let resp = self
            .http
            .get(self.live_url())
            .query(&[
                ("access_key", self.access_key.as_str()),
                ("source", base.as_str()),
                ("currencies", target.as_str()),
                ("format", "1"),
            ])
            .send()
            .await
            .map_err(transport_error)?;

        let status = resp.status();
        let body = resp.text().await.map_err(transport_error)?;
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "rate provider returned an error status");
            return Err(RateError::Provider(format!("HTTP {}", status)));
        }

        let rate = parse_live_quote(&body, base, target)?;
        tracing::debug!(rate = %rate.value, "fetched rate");
        Ok(rate)
    }
}

/// Strips the request URL so the access key never ends up in a message.
fn transport_error(err: reqwest::Error) -> RateError {
    RateError::Provider(err.without_url().to_string())
}

/// Extracts the `BASE+TARGET` quote from a `live` response body.
///
/// Only a body that is not JSON is a provider failure. Any JSON without a
/// numeric quote for the pair, including `"success": false`, means the rate is
/// unavailable. `timestamp` is optional and ignored when it is not an integer.
fn parse_live_quote(
    body: &str,
    base: &CurrencyCode,
    target: &CurrencyCode,
) -> Result<Rate, RateError> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| RateError::Provider(format!("malformed response body: {}", e)))?;

    let key = Rate::pair_key(base, target);
    let quote = value
        .get("quotes")
        .and_then(|quotes| quotes.get(&key))
        .and_then(decimal_from_json);

    let Some(quote) = quote else {
        if let Some(err) = value
            .get("error")
            .and_then(|err| serde_json::from_value::<ApiErrorBody>(err.clone()).ok())
        {
            tracing::debug!(reason = %err.describe(), "rate provider rejected the pair");
        }
        return Err(RateError::Unavailable {
            base: base.clone(),
            target: target.clone(),
        });
    };

    let rate = Rate::new(base.clone(), target.clone(), quote);
    let as_of = value
        .get("timestamp")
        .and_then(Value::as_i64)
        .and_then(|ts| DateTime::from_timestamp(ts, 0));
    Ok(match as_of {
        Some(as_of) => rate.with_as_of(as_of),
        None => rate,
    })
}

/// Reads a JSON number as a decimal without going through binary floating point.
fn decimal_from_json(value: &Value) -> Option<Decimal> {
    let Value::Number(number) = value else {
        return None;
    };
    let text = number.to_string();
    Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .ok()
}
