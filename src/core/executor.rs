//! The request executor shared by every endpoint and by both call styles.
//!
//! A call is split into `prepare` (credential check, date sanitization, URL building),
//! the send itself (done by the async or the blocking client), and `complete`
//! (fault mapping, status branching, decoding). Only the send differs between the two
//! clients.

use url::Url;

use crate::core::client::ClientSettings;
use crate::core::client::constants::STATUS_FORBIDDEN;
use crate::core::dates::{DateBound, sanitize_dates};
use crate::core::error::{EodError, Result};
use crate::core::outcome::Outcome;
use crate::core::params::{QueryParams, build_url, redacted_url};
use crate::core::pipeline::{require_api_key, suppress_transport};
use crate::core::session::{RawResponse, TransportError};

/// Turns a successful response body into the endpoint's result type.
pub(crate) type Decoder<T> = fn(&str) -> Result<T>;

/// Everything one endpoint call needs, before any validation.
pub(crate) struct EndpointRequest<T> {
    pub(crate) segments: Vec<String>,
    pub(crate) start: Option<DateBound>,
    pub(crate) end: Option<DateBound>,
    pub(crate) api_key: Option<String>,
    pub(crate) decode: Decoder<T>,
}

impl<T> EndpointRequest<T> {
    pub(crate) fn new(segments: Vec<String>, decode: Decoder<T>) -> Self {
        Self {
            segments,
            start: None,
            end: None,
            api_key: None,
            decode,
        }
    }
}

/// A validated request ready to be sent.
#[derive(Debug)]
pub(crate) struct Prepared {
    pub(crate) url: Url,
    /// Safe for logs and errors.
    pub(crate) redacted: String,
}

pub(crate) fn prepare<T>(settings: &ClientSettings, req: &EndpointRequest<T>) -> Result<Prepared> {
    let key = req.api_key.as_deref().or(settings.api_key.as_deref());
    let key = require_api_key(key)?;

    let mut params = QueryParams::with_api_key(key);
    if req.start.is_some() || req.end.is_some() {
        let range = sanitize_dates(req.start.clone(), req.end.clone())?;
        params.push_range(&range);
    }

    let segments: Vec<&str> = req.segments.iter().map(String::as_str).collect();
    let url = build_url(&settings.base_url, &segments, &params)?;
    let redacted = redacted_url(&settings.base_url, &segments, &params)?;
    tracing::debug!(url = %redacted, "prepared request");
    Ok(Prepared { url, redacted })
}

pub(crate) fn complete<T>(
    sent: std::result::Result<RawResponse, TransportError>,
    prepared: &Prepared,
    verbose: bool,
    decode: Decoder<T>,
) -> Result<Outcome<T>> {
    match suppress_transport(sent, &prepared.redacted, verbose)? {
        Some(resp) => interpret(resp, prepared, decode),
        None => Ok(Outcome::Empty),
    }
}

fn interpret<T>(resp: RawResponse, prepared: &Prepared, decode: Decoder<T>) -> Result<Outcome<T>> {
    tracing::info!(status = resp.status, url = %prepared.redacted, "status code: {}", resp.status);

    match resp.status {
        200 => decode(&resp.body).map(Outcome::Data),
        STATUS_FORBIDDEN => {
            tracing::warn!(
                url = %prepared.redacted,
                "API key restricted for this endpoint; try upgrading your API key"
            );
            Ok(Outcome::Denied)
        }
        status => Err(EodError::RemoteData {
            status,
            reason: resp.reason.unwrap_or_else(|| "Unknown".to_string()),
            url: prepared.redacted.clone(),
        }),
    }
}
