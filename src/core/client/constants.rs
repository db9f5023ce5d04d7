//! Centralized constants for default endpoints, UA and credential handling.

/// Identifies the crate to the API.
pub(crate) const USER_AGENT: &str = concat!("eod-rs/", env!("CARGO_PKG_VERSION"));

/// EOD Historical Data API base (endpoint paths are appended).
pub(crate) const DEFAULT_BASE_URL: &str = "https://eodhistoricaldata.com/api";

/// Environment variable holding the API key.
pub(crate) const API_KEY_ENV_VAR: &str = "EOD_HISTORICAL_API_KEY";

/// Environment variable overriding the API base URL.
pub(crate) const BASE_URL_ENV_VAR: &str = "EOD_BASE_URL";

/// Environment variable for the overall request timeout, in seconds.
pub(crate) const TIMEOUT_ENV_VAR: &str = "EOD_TIMEOUT_SECS";

/// Environment variable for the connect timeout, in seconds.
pub(crate) const CONNECT_TIMEOUT_ENV_VAR: &str = "EOD_CONNECT_TIMEOUT_SECS";

/// Environment variable switching on full error detail in transport-fault logs.
pub(crate) const DEBUG_ENV_VAR: &str = "EOD_DEBUG";

/// Query parameter carrying the API key.
pub(crate) const API_TOKEN_PARAM: &str = "api_token";

/// Placeholder written in place of the API key in logs and errors.
pub(crate) const REDACTED_API_KEY: &str = "YOUR_HIDDEN_API";

/// Status returned when the key's plan does not cover an endpoint.
pub(crate) const STATUS_FORBIDDEN: u16 = 403;
