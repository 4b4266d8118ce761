//! Configuration loading from environment.

use std::env;
use std::fmt;
use std::path::PathBuf;

use currencylayer_client::DEFAULT_BASE_URL;

/// Application configuration.
pub struct Config {
    pub port: u16,
    /// currencylayer access key; never logged
    pub access_key: String,
    pub provider_base_url: String,
    /// Currency dataset to load instead of the embedded one
    pub directory_path: Option<PathBuf>,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_vars(|name| env::var(name).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let port = var("PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse()
            .map_err(|e| anyhow::anyhow!("PORT is not a valid port number: {}", e))?;

        let access_key = var("CURRENCYLAYER_ACCESS_KEY")
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                anyhow::anyhow!("CURRENCYLAYER_ACCESS_KEY environment variable is required")
            })?;

        let provider_base_url =
            var("CURRENCYLAYER_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let directory_path = var("CURRENCY_DIRECTORY_PATH")
            .filter(|path| !path.is_empty())
            .map(PathBuf::from);

        Ok(Self {
            port,
            access_key,
            provider_base_url,
            directory_path,
        })
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("port", &self.port)
            .field("access_key", &"<redacted>")
            .field("provider_base_url", &self.provider_base_url)
            .field("directory_path", &self.directory_path)
            .finish()
    }
}
