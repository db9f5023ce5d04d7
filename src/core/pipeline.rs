//! The two cross-cutting stages every network call passes through: the credential guard
//! before anything is built, and the transport-fault mapping after the request is sent.

use crate::core::client::constants::API_KEY_ENV_VAR;
use crate::core::error::{EodError, Result};
use crate::core::session::{RawResponse, TransportError};

/// Returns the key if it is usable.
///
/// # Errors
///
/// Returns [`EodError::MissingCredential`] if the key is absent, empty or only whitespace.
pub fn require_api_key(key: Option<&str>) -> Result<&str> {
    match key.map(str::trim) {
        Some(k) if !k.is_empty() => Ok(k),
        _ => Err(EodError::MissingCredential {
            env_var: API_KEY_ENV_VAR,
        }),
    }
}

/// Maps a send result: suppressible faults become `Ok(None)`, other faults propagate.
///
/// `url` must already be redacted.
pub(crate) fn suppress_transport(
    sent: std::result::Result<RawResponse, TransportError>,
    url: &str,
    verbose: bool,
) -> Result<Option<RawResponse>> {
    match sent {
        Ok(resp) => Ok(Some(resp)),
        Err(e) if e.is_suppressed() => {
            if verbose {
                tracing::error!(error = ?e, url, "request failed at the transport level: {e}");
            } else {
                tracing::warn!("connection error");
            }
            Ok(None)
        }
        Err(e) => Err(EodError::Transport(e)),
    }
}
