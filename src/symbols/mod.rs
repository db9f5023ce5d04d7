//! Exchange symbol directory: `GET /exchanges/{exchange_code}`.

mod model;

pub use model::SymbolListing;

use crate::core::executor::EndpointRequest;
use crate::core::{EodClient, Outcome, Result};
use crate::table::{CsvOptions, SymbolDirectory, parse_csv};

/// A builder for the list of symbols traded on one exchange.
#[derive(Debug, Clone)]
pub struct SymbolsBuilder<'a, C> {
    client: &'a C,
    pub(crate) exchange_code: String,
    api_key: Option<String>,
}

impl<'a, C> SymbolsBuilder<'a, C> {
    pub(crate) fn new(client: &'a C, exchange_code: impl Into<String>) -> Self {
        Self {
            client,
            exchange_code: exchange_code.into(),
            api_key: None,
        }
    }

    /// Uses this key instead of the client's for this call only.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub(crate) fn client(&self) -> &'a C {
        self.client
    }

    pub(crate) fn into_request(self) -> EndpointRequest<SymbolDirectory> {
        let mut req = EndpointRequest::new(vec!["exchanges".into(), self.exchange_code], decode);
        req.api_key = self.api_key;
        req
    }
}

impl SymbolsBuilder<'_, EodClient> {
    /// Sends the request.
    ///
    /// # Errors
    ///
    /// See [`EodBuilder::fetch`](crate::EodBuilder::fetch).
    #[tracing::instrument(skip(self), err, fields(exchange = %self.exchange_code))]
    pub async fn fetch(self) -> Result<Outcome<SymbolDirectory>> {
        let client = self.client();
        client.execute(self.into_request()).await
    }
}

fn decode(body: &str) -> Result<SymbolDirectory> {
    parse_csv(body, CsvOptions::api())
}
