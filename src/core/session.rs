//! The transport seam.
//!
//! Every request goes through a [`Session`] (blocking) or an [`AsyncSession`] (async).
//! Both are implemented for the matching `reqwest` client, and callers can inject their own
//! implementation to add caching, retries or instrumentation around the raw GET.

use thiserror::Error;
use url::Url;

pub use futures::future::BoxFuture;

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A response reduced to what the executor needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub reason: Option<String>,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, reason: Option<&str>, body: impl Into<String>) -> Self {
        Self {
            status,
            reason: reason.map(str::to_string),
            body: body.into(),
        }
    }
}

/// A failure below the HTTP layer.
///
/// `Connect`, `ConnectTimeout` and `RetriesExhausted` are suppressed by the client and
/// reported as [`Outcome::Empty`](crate::Outcome::Empty); `Other` propagates.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The connection could not be established.
    #[error("connection error: {0}")]
    Connect(#[source] BoxError),

    /// Establishing the connection took longer than the configured timeout.
    #[error("connect timeout: {0}")]
    ConnectTimeout(#[source] BoxError),

    /// A retrying session gave up.
    #[error("retries exhausted: {0}")]
    RetriesExhausted(#[source] BoxError),

    /// Any other transport failure (read timeout, body decoding, ...).
    #[error("transport error: {0}")]
    Other(#[source] BoxError),
}

impl TransportError {
    /// Whether the client turns this failure into an empty outcome.
    pub fn is_suppressed(&self) -> bool {
        !matches!(self, TransportError::Other(_))
    }

    /// Sorts a `reqwest` error into the matching variant.
    ///
    /// The request URL is stripped first; it carries the API key.
    pub fn from_reqwest(e: reqwest::Error) -> Self {
        let e = e.without_url();
        if e.is_connect() && e.is_timeout() {
            TransportError::ConnectTimeout(Box::new(e))
        } else if e.is_connect() {
            TransportError::Connect(Box::new(e))
        } else {
            TransportError::Other(Box::new(e))
        }
    }
}

/// A blocking HTTP GET capability.
pub trait Session: Send + Sync {
    /// Issues one GET and returns the status and body.
    fn fetch(&self, url: &Url) -> Result<RawResponse, TransportError>;
}

/// An async HTTP GET capability.
///
/// Implementations suspend only while sending the request and reading the body.
pub trait AsyncSession: Send + Sync {
    /// Issues one GET and returns the status and body.
    fn fetch<'a>(&'a self, url: &'a Url) -> BoxFuture<'a, Result<RawResponse, TransportError>>;
}

impl AsyncSession for reqwest::Client {
    fn fetch<'a>(&'a self, url: &'a Url) -> BoxFuture<'a, Result<RawResponse, TransportError>> {
        Box::pin(async move {
            let resp = self
                .get(url.clone())
                .send()
                .await
                .map_err(TransportError::from_reqwest)?;
            let status = resp.status();
            let body = resp.text().await.map_err(TransportError::from_reqwest)?;
            Ok(RawResponse::new(
                status.as_u16(),
                status.canonical_reason(),
                body,
            ))
        })
    }
}

impl Session for reqwest::blocking::Client {
    fn fetch(&self, url: &Url) -> Result<RawResponse, TransportError> {
        let resp = self
            .get(url.clone())
            .send()
            .map_err(TransportError::from_reqwest)?;
        let status = resp.status();
        let body = resp.text().map_err(TransportError::from_reqwest)?;
        Ok(RawResponse::new(
            status.as_u16(),
            status.canonical_reason(),
            body,
        ))
    }
}
