//! Currency directory: read-only reference data for currency pickers.
//!
//! The directory is an ordered list of currency records (code, display name,
//! issuing country, country code and an optional flag image). It is loaded once
//! at startup, either from a JSON file or from the dataset compiled into this
//! crate, and never changes afterwards.
//!
//! Records are validated when loaded: a missing field, an empty or duplicated
//! code, or a flag that does not decode rejects the whole dataset.
//!
//! # Example
//! ```
//! use currency_directory::CurrencyDirectory;
//!
//! let directory = CurrencyDirectory::embedded().unwrap();
//! let euro = directory.find("eur").unwrap();
//! assert_eq!(euro.name, "Euro");
//! ```

mod error;
mod flag;

use std::path::Path;

use serde::Deserialize;

pub use error::DirectoryError;
pub use flag::Flag;

/// Dataset compiled into the binary.
const EMBEDDED_DATASET: &str = include_str!("../data/currencies.json");

/// A currency record as it appears in the data source.
#[derive(Debug, Deserialize)]
struct RawCurrency {
    code: String,
    name: String,
    country: String,
    #[serde(rename = "countryCode")]
    country_code: String,
    #[serde(default)]
    flag: Option<String>,
}

/// A validated currency record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Currency {
    /// Uppercase currency code, e.g. `USD`
    pub code: String,
    pub name: String,
    pub country: String,
    /// ISO 3166 country code, e.g. `US`
    pub country_code: String,
    pub flag: Option<Flag>,
}

/// Ordered, read-only collection of currencies.
#[derive(Debug, Clone, Default)]
pub struct CurrencyDirectory {
    currencies: Vec<Currency>,
}

impl CurrencyDirectory {
    /// Loads the dataset shipped with this crate.
    pub fn embedded() -> Result<Self, DirectoryError> {
        Self::from_json(EMBEDDED_DATASET)
    }

    /// Loads a dataset from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DirectoryError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(DirectoryError::NotFound {
                path: path.to_path_buf(),
            });
        }
        let json = std::fs::read_to_string(path).map_err(|source| DirectoryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Parses and validates a JSON array of currency records.
    pub fn from_json(json: &str) -> Result<Self, DirectoryError> {
        let raw: Vec<RawCurrency> = serde_json::from_str(json)?;

        let mut currencies: Vec<Currency> = Vec::with_capacity(raw.len());
        for (index, record) in raw.into_iter().enumerate() {
            let code = record.code.trim().to_uppercase();
            if code.is_empty() {
                return Err(DirectoryError::InvalidRecord {
                    index,
                    reason: "code is empty".into(),
                });
            }
            if currencies.iter().any(|c| c.code == code) {
                return Err(DirectoryError::DuplicateCode(code));
            }

            let flag = match record.flag.as_deref() {
                Some(text) => Flag::parse(text).map_err(|reason| DirectoryError::InvalidFlag {
                    code: code.clone(),
                    reason,
                })?,
                None => None,
            };

            currencies.push(Currency {
                code,
                name: record.name,
                country: record.country,
                country_code: record.country_code,
                flag,
            });
        }

        Ok(Self { currencies })
    }

    /// All currencies, in dataset order.
    pub fn all(&self) -> &[Currency] {
        &self.currencies
    }

    pub fn iter(&self) -> impl Iterator<Item = &Currency> {
        self.currencies.iter()
    }

    /// Finds a currency by code, ignoring case.
    pub fn find(&self, code: &str) -> Option<&Currency> {
        let code = code.trim();
        self.currencies
            .iter()
            .find(|c| c.code.eq_ignore_ascii_case(code))
    }

    pub fn contains(&self, code: &str) -> bool {
        self.find(code).is_some()
    }

    pub fn len(&self) -> usize {
        self.currencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.currencies.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const PIXEL: &str = "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNkYPhfDwAChwGA60e6kgAAAABJRU5ErkJggg==";

    fn record(code: &str, flag: &str) -> String {
        format!(
            r#"{{"code": "{}", "name": "Name {}", "country": "Land", "countryCode": "LD", "flag": "{}"}}"#,
            code, code, flag
        )
    }

    #[test]
    fn test_embedded_dataset_loads() {
        let directory = CurrencyDirectory::embedded().unwrap();
        assert!(directory.len() > 20);
        assert_eq!(directory.all()[0].code, "USD");
        assert!(directory.iter().all(|c| c.flag.is_some()));
    }

    #[test]
    fn test_find_is_case_insensitive() {
        let directory = CurrencyDirectory::embedded().unwrap();
        assert_eq!(directory.find("gbp").unwrap().country_code, "GB");
        assert_eq!(directory.find(" Jpy ").unwrap().name, "Japanese Yen");
        assert!(directory.find("GB").is_none());
        assert!(!directory.contains("XYZ"));
    }

    #[test]
    fn test_order_is_preserved() {
        let json = format!("[{}, {}, {}]", record("zar", ""), record("aud", ""), record("mxn", ""));
        let directory = CurrencyDirectory::from_json(&json).unwrap();
        let codes: Vec<&str> = directory.iter().map(|c| c.code.as_str()).collect();
        assert_eq!(codes, vec!["ZAR", "AUD", "MXN"]);
    }

    #[test]
    fn test_missing_flag_field_is_allowed() {
        let json = r#"[{"code": "USD", "name": "US Dollar", "country": "United States", "countryCode": "US"}]"#;
        let directory = CurrencyDirectory::from_json(json).unwrap();
        assert!(directory.find("USD").unwrap().flag.is_none());
    }

    #[test]
    fn test_data_uri_flag_is_decoded() {
        let json = format!("[{}]", record("USD", &format!("data:image/png;base64,{}", PIXEL)));
        let directory = CurrencyDirectory::from_json(&json).unwrap();
        let flag = directory.find("USD").unwrap().flag.as_ref().unwrap();
        assert_eq!(flag.media_type(), Some("image/png"));
        assert!(flag.bytes().starts_with(b"\x89PNG"));
    }

    #[test]
    fn test_missing_required_field_fails() {
        let json = r#"[{"code": "USD", "name": "US Dollar", "country": "United States"}]"#;
        let result = CurrencyDirectory::from_json(json);
        assert!(matches!(result, Err(DirectoryError::Parse(_))));
    }

    #[test]
    fn test_malformed_json_fails() {
        let result = CurrencyDirectory::from_json("{not json");
        assert!(matches!(result, Err(DirectoryError::Parse(_))));
    }

    #[test]
    fn test_empty_code_fails() {
        let json = format!("[{}, {}]", record("USD", ""), record("  ", ""));
        let result = CurrencyDirectory::from_json(&json);
        assert!(matches!(
            result,
            Err(DirectoryError::InvalidRecord { index: 1, .. })
        ));
    }

    #[test]
    fn test_duplicate_code_fails() {
        let json = format!("[{}, {}]", record("USD", ""), record("usd", ""));
        let result = CurrencyDirectory::from_json(&json);
        assert!(matches!(result, Err(DirectoryError::DuplicateCode(code)) if code == "USD"));
    }

    #[test]
    fn test_bad_flag_rejects_load() {
        let json = format!("[{}]", record("EUR", "data:image/png;base64,***"));
        let result = CurrencyDirectory::from_json(&json);
        assert!(matches!(result, Err(DirectoryError::InvalidFlag { code, .. }) if code == "EUR"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[{}]", record("chf", PIXEL)).unwrap();

        let directory = CurrencyDirectory::load(file.path()).unwrap();
        assert_eq!(directory.len(), 1);
        assert_eq!(directory.find("CHF").unwrap().name, "Name chf");
    }

    #[test]
    fn test_load_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = CurrencyDirectory::load(dir.path().join("missing.json"));
        assert!(matches!(result, Err(DirectoryError::NotFound { .. })));
    }
}
