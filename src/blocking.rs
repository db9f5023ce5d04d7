//! Blocking twin of [`EodClient`](crate::EodClient).
//!
//! Same endpoints, same builders, same results; `fetch` waits on the calling thread instead
//! of returning a future. Do not use it from inside an async runtime.
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = eod_rs::blocking::EodClient::from_env()?;
//! let divs = client.dividends("KO", "US").between(2019, 2020).fetch()?;
//! println!("{divs:?}");
//! # Ok(())
//! # }
//! ```

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use url::Url;

use crate::core::client::{ClientOptions, ClientSettings};
use crate::core::config::Config;
use crate::core::executor::{self, EndpointRequest};
use crate::core::session::Session;
use crate::core::{Outcome, Result};
use crate::dividends::DividendsBuilder;
use crate::eod::EodBuilder;
use crate::symbols::SymbolsBuilder;
use crate::table::{DividendSeries, SymbolDirectory, TimeSeriesTable};

/// Blocking client for the EOD Historical Data API.
#[derive(Clone)]
pub struct EodClient {
    session: Arc<dyn Session>,
    settings: ClientSettings,
}

impl fmt::Debug for EodClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("blocking::EodClient")
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

impl EodClient {
    pub fn builder() -> EodClientBuilder {
        EodClientBuilder::default()
    }

    /// Builds a client from [`Config::from_env`].
    pub fn from_env() -> Result<Self> {
        Self::builder().config(&Config::from_env()?).build()
    }

    pub fn eod(&self, symbol: impl Into<String>, exchange: impl Into<String>) -> EodBuilder<'_, Self> {
        EodBuilder::new(self, symbol, exchange)
    }

    pub fn dividends(
        &self,
        symbol: impl Into<String>,
        exchange: impl Into<String>,
    ) -> DividendsBuilder<'_, Self> {
        DividendsBuilder::new(self, symbol, exchange)
    }

    pub fn exchange_symbols(&self, exchange_code: impl Into<String>) -> SymbolsBuilder<'_, Self> {
        SymbolsBuilder::new(self, exchange_code)
    }

    pub fn base_url(&self) -> &Url {
        &self.settings.base_url
    }

    pub(crate) fn execute<T>(&self, req: EndpointRequest<T>) -> Result<Outcome<T>> {
        let prepared = executor::prepare(&self.settings, &req)?;
        let sent = self.session.fetch(&prepared.url);
        executor::complete(sent, &prepared, self.settings.verbose_errors, req.decode)
    }
}

/// Builder for the blocking [`EodClient`].
#[derive(Default)]
pub struct EodClientBuilder {
    options: ClientOptions,
    session: Option<Arc<dyn Session>>,
}

impl EodClientBuilder {
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.options.api_key = Some(key.into());
        self
    }

    pub fn base_url(mut self, url: Url) -> Self {
        self.options.base_url = Some(url);
        self
    }

    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.options.user_agent = Some(ua.into());
        self
    }

    pub fn timeout(mut self, dur: Duration) -> Self {
        self.options.timeout = Some(dur);
        self
    }

    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.options.connect_timeout = Some(dur);
        self
    }

    pub fn verbose_errors(mut self, yes: bool) -> Self {
        self.options.verbose_errors = yes;
        self
    }

    pub fn config(mut self, cfg: &Config) -> Self {
        self.options.apply_config(cfg);
        self
    }

    /// Send requests through a caller-owned session.
    pub fn session(mut self, session: Arc<dyn Session>) -> Self {
        self.session = Some(session);
        self
    }

    pub fn build(self) -> Result<EodClient> {
        let settings = self.options.settings()?;
        let session: Arc<dyn Session> = match self.session {
            Some(s) => s,
            None => {
                let mut httpb =
                    reqwest::blocking::Client::builder().user_agent(self.options.user_agent());
                if let Some(t) = self.options.timeout {
                    httpb = httpb.timeout(t);
                }
                if let Some(ct) = self.options.connect_timeout {
                    httpb = httpb.connect_timeout(ct);
                }
                Arc::new(httpb.build()?)
            }
        };
        Ok(EodClient { session, settings })
    }
}

impl EodBuilder<'_, EodClient> {
    /// Sends the request and waits for the answer.
    #[tracing::instrument(skip(self), err, fields(symbol = %self.symbol, exchange = %self.exchange))]
    pub fn fetch(self) -> Result<Outcome<TimeSeriesTable>> {
        let client = self.client();
        client.execute(self.into_request())
    }
}

impl DividendsBuilder<'_, EodClient> {
    /// Sends the request and waits for the answer.
    #[tracing::instrument(skip(self), err, fields(symbol = %self.symbol, exchange = %self.exchange))]
    pub fn fetch(self) -> Result<Outcome<DividendSeries>> {
        let client = self.client();
        client.execute(self.into_request())
    }
}

impl SymbolsBuilder<'_, EodClient> {
    /// Sends the request and waits for the answer.
    #[tracing::instrument(skip(self), err, fields(exchange = %self.exchange_code))]
    pub fn fetch(self) -> Result<Outcome<SymbolDirectory>> {
        let client = self.client();
        client.execute(self.into_request())
    }
}
