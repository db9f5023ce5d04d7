//! Dividend history: `GET /div/{symbol},{exchange}`.

mod model;

pub use model::Dividend;

use crate::core::dates::DateBound;
use crate::core::executor::EndpointRequest;
use crate::core::{EodClient, Outcome, Result};
use crate::table::{CsvOptions, DividendSeries, TimeSeriesTable, parse_csv};

/// A builder for one dividend history request.
///
/// The result is a single date-indexed series named after the response's only data column.
#[derive(Debug, Clone)]
pub struct DividendsBuilder<'a, C> {
    client: &'a C,
    pub(crate) symbol: String,
    pub(crate) exchange: String,
    start: Option<DateBound>,
    end: Option<DateBound>,
    api_key: Option<String>,
}

impl<'a, C> DividendsBuilder<'a, C> {
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

    pub fn start(mut self, start: impl Into<DateBound>) -> Self {
        self.start = Some(start.into());
        self
    }

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

    pub(crate) fn into_request(self) -> EndpointRequest<DividendSeries> {
        let ticker = format!("{},{}", self.symbol, self.exchange);
        let mut req = EndpointRequest::new(vec!["div".into(), ticker], decode);
        req.start = self.start;
        req.end = self.end;
        req.api_key = self.api_key;
        req
    }
}

impl DividendsBuilder<'_, EodClient> {
    /// Sends the request.
    ///
    /// # Errors
    ///
    /// As [`EodBuilder::fetch`](crate::EodBuilder::fetch); additionally a body with more or
    /// fewer than one data column is
    /// [`MalformedResponse`](crate::EodError::MalformedResponse).
    #[tracing::instrument(skip(self), err, fields(symbol = %self.symbol, exchange = %self.exchange))]
    pub async fn fetch(self) -> Result<Outcome<DividendSeries>> {
        let client = self.client();
        client.execute(self.into_request()).await
    }
}

fn decode(body: &str) -> Result<DividendSeries> {
    let table: TimeSeriesTable = parse_csv(body, CsvOptions::api())?;
    table.into_single_series()
}
