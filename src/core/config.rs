//! Environment-driven configuration.

use crate::core::client::constants::{
    API_KEY_ENV_VAR, BASE_URL_ENV_VAR, CONNECT_TIMEOUT_ENV_VAR, DEBUG_ENV_VAR, DEFAULT_BASE_URL,
    TIMEOUT_ENV_VAR,
};
use crate::core::error::{EodError, Result};

/// Client settings, usually read from the environment.
///
/// | Variable | Field | Default |
/// |---|---|---|
/// | `EOD_HISTORICAL_API_KEY` | `api_key` | none |
/// | `EOD_BASE_URL` | `base_url` | `https://eodhistoricaldata.com/api` |
/// | `EOD_TIMEOUT_SECS` | `timeout_secs` | none |
/// | `EOD_CONNECT_TIMEOUT_SECS` | `connect_timeout_secs` | none |
/// | `EOD_DEBUG` | `verbose_errors` | `false` |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_key: Option<String>,
    pub base_url: String,
    pub timeout_secs: Option<u64>,
    pub connect_timeout_secs: Option<u64>,
    /// Log transport faults with their full error chain instead of a one-line notice.
    pub verbose_errors: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: None,
            connect_timeout_secs: None,
            verbose_errors: false,
        }
    }
}

impl Config {
    /// Loads `.env` if present, then reads the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`EodError::Config`] if a numeric or boolean variable does not parse.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds a config from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns [`EodError::Config`] if a numeric or boolean variable does not parse.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let timeout_secs = non_empty(TIMEOUT_ENV_VAR)
            .map(|v| parse_secs(TIMEOUT_ENV_VAR, &v))
            .transpose()?;
        let connect_timeout_secs = non_empty(CONNECT_TIMEOUT_ENV_VAR)
            .map(|v| parse_secs(CONNECT_TIMEOUT_ENV_VAR, &v))
            .transpose()?;
        let verbose_errors = non_empty(DEBUG_ENV_VAR)
            .map(|v| parse_flag(DEBUG_ENV_VAR, &v))
            .transpose()?
            .unwrap_or(false);

        Ok(Self {
            api_key: non_empty(API_KEY_ENV_VAR),
            base_url: non_empty(BASE_URL_ENV_VAR).unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            timeout_secs,
            connect_timeout_secs,
            verbose_errors,
        })
    }
}

/// Name of the environment variable the API key is read from.
pub fn api_key_env_var() -> &'static str {
    API_KEY_ENV_VAR
}

fn parse_secs(name: &str, raw: &str) -> Result<u64> {
    raw.trim()
        .parse()
        .map_err(|_| EodError::Config(format!("invalid {name}: `{raw}` is not a number of seconds")))
}

fn parse_flag(name: &str, raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(EodError::Config(format!("invalid {name}: `{raw}` is not a boolean"))),
    }
}
