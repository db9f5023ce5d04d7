//! End-of-day price history: `GET /eod/{symbol}.{exchange}`.

mod model;

pub use model::EodBar;

use crate::core::dates::DateBound;
use crate::core::executor::EndpointRequest;
use crate::core::{EodClient, Outcome, Result};
use crate::table::{CsvOptions, TimeSeriesTable, parse_csv};

/// A builder for one end-of-day price request.
///
/// Without [`between`](Self::between) (or both [`start`](Self::start) and
/// [`end`](Self::end)) the API returns the full available history.
#[derive(Debug, Clone)]
pub struct EodBuilder<'a, C> {
    client: &'a C,
    pub(crate) symbol: String,
    pub(crate) exchange: String,
    start: Option<DateBound>,
    end: Option<DateBound>,
    api_key: Option<String>,
}

impl<'a, C> EodBuilder<'a, C> {
    pub(crate) fn new(client: &'a C, symbol: impl Into<String>, exchange: impl Into<String>) -> Self {
        Self {
            client,
            symbol: symbol.into(),
            exchange: exchange.into(),
            start: None,
            end: None,
            api_key: None,
        }
    }

    /// Restricts the request to `start..=end`.
    pub fn between(mut self, start: impl Into<DateBound>, end: impl Into<DateBound>) -> Self {
        self.start = Some(start.into());
        self.end = Some(end.into());
        self
    }

    /// Sets the first day. Requires [`end`](Self::end) too.
    pub fn start(mut self, start: impl Into<DateBound>) -> Self {
        self.start = Some(start.into());
        self
    }

    /// Sets the last day. Requires [`start`](Self::start) too.
    pub fn end(mut self, end: impl Into<DateBound>) -> Self {
        self.end = Some(end.into());
        self
    }

    /// Uses this key instead of the client's for this call only.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub(crate) fn client(&self) -> &'a C {
        self.client
    }

    pub(crate) fn into_request(self) -> EndpointRequest<TimeSeriesTable> {
        let ticker = format!("{}.{}", self.symbol, self.exchange);
        let mut req = EndpointRequest::new(vec!["eod".into(), ticker], decode);
        req.start = self.start;
        req.end = self.end;
        req.api_key = self.api_key;
        req
    }
}

impl EodBuilder<'_, EodClient> {
    /// Sends the request.
    ///
    /// # Errors
    ///
    /// Pre-flight failures ([`MissingCredential`](crate::EodError::MissingCredential),
    /// [`InvalidRange`](crate::EodError::InvalidRange)) are returned before any request is
    /// made. A 403 is [`Outcome::Denied`], a connection fault [`Outcome::Empty`].
    #[tracing::instrument(skip(self), err, fields(symbol = %self.symbol, exchange = %self.exchange))]
    pub async fn fetch(self) -> Result<Outcome<TimeSeriesTable>> {
        let client = self.client();
        client.execute(self.into_request()).await
    }
}

fn decode(body: &str) -> Result<TimeSeriesTable> {
    parse_csv(body, CsvOptions::api())
}
