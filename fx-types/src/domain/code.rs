//! Currency code value type.

use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// A currency code such as `USD`.
///
/// Codes are trimmed and uppercased on construction. Whether the code is
/// actually quoted by anyone is left to the rate provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(from = "String", into = "String")]
#[schema(value_type = String, example = "USD")]
pub struct CurrencyCode(String);

impl CurrencyCode {
    /// Creates a normalized currency code.
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_uppercase())
    }

    /// Returns the normalized code.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True for three ASCII letters, the ISO-4217 shape.
    pub fn is_iso_shaped(&self) -> bool {
        self.0.len() == 3 && self.0.bytes().all(|b| b.is_ascii_uppercase())
    }
}

impl From<String> for CurrencyCode {
    fn from(raw: String) -> Self {
        Self::new(&raw)
    }
}

impl From<&str> for CurrencyCode {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<CurrencyCode> for String {
    fn from(code: CurrencyCode) -> Self {
        code.0
    }
}

impl AsRef<str> for CurrencyCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
