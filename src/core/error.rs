use thiserror::Error;

use crate::core::session::TransportError;

/// The primary error type for all fallible operations in this crate.
///
/// Two outcomes of a network call are deliberately *not* errors: an entitlement refusal
/// (HTTP 403) and a suppressed connection fault. Those surface as
/// [`Outcome::Denied`](crate::Outcome::Denied) and [`Outcome::Empty`](crate::Outcome::Empty).
#[derive(Debug, Error)]
pub enum EodError {
    /// The requested date range is malformed, incomplete or inverted.
    #[error("invalid date range: {0}")]
    InvalidRange(String),

    /// No usable API key was available for a network call.
    #[error(
        "API key not set: export {env_var} (or add it to a .env file) or pass one explicitly with `.api_key(..)`"
    )]
    MissingCredential {
        /// Name of the environment variable the key is read from.
        env_var: &'static str,
    },

    /// The server answered with a non-success status other than 403.
    #[error("remote data error: {status} {reason} at {url}")]
    RemoteData {
        /// The HTTP status code.
        status: u16,
        /// The reason phrase for the status code.
        reason: String,
        /// The request URL with the API key replaced by a placeholder.
        url: String,
    },

    /// The response body did not have the expected shape.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// A transport failure that is not suppressed (anything but connect errors,
    /// connect timeouts and exhausted retries).
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// An error occurred while building the HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// A configuration value could not be understood.
    #[error("configuration error: {0}")]
    Config(String),
}

impl EodError {
    pub(crate) fn malformed(msg: impl Into<String>) -> Self {
        EodError::MalformedResponse(msg.into())
    }

    pub(crate) fn invalid_range(msg: impl Into<String>) -> Self {
        EodError::InvalidRange(msg.into())
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, EodError>;
