//! Public client surface + builder.
//! Defaults live in `constants`; the blocking twin is in [`crate::blocking`].

pub(crate) mod constants;

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use constants::{DEFAULT_BASE_URL, USER_AGENT};
use url::Url;

use crate::core::config::Config;
use crate::core::error::Result;
use crate::core::executor::{self, EndpointRequest};
use crate::core::outcome::Outcome;
use crate::core::session::AsyncSession;
use crate::dividends::DividendsBuilder;
use crate::eod::EodBuilder;
use crate::symbols::SymbolsBuilder;

/// The per-client state the executor reads.
#[derive(Clone)]
pub(crate) struct ClientSettings {
    pub(crate) base_url: Url,
    pub(crate) api_key: Option<String>,
    pub(crate) verbose_errors: bool,
}

impl fmt::Debug for ClientSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientSettings")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("verbose_errors", &self.verbose_errors)
            .finish()
    }
}

/// Async client for the EOD Historical Data API.
///
/// Cheap to clone; clones share the underlying session.
///
/// ```no_run
/// # use eod_rs::{EodClient, Outcome};
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = EodClient::builder().api_key("demo").build()?;
/// let prices = client.eod("AAPL", "US").between("2020-02-01", "2020-02-10").fetch().await?;
/// if let Outcome::Data(table) = prices {
///     for bar in table.to_eod_bars()? {
///         println!("{} {}", bar.date, bar.close);
///     }
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct EodClient {
    session: Arc<dyn AsyncSession>,
    settings: ClientSettings,
}

impl fmt::Debug for EodClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EodClient")
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

impl EodClient {
    /// Create a new builder.
    pub fn builder() -> EodClientBuilder {
        EodClientBuilder::default()
    }

    /// Builds a client from [`Config::from_env`].
    ///
    /// # Errors
    ///
    /// Fails if the environment holds invalid values or the HTTP client cannot be built.
    /// A missing API key is *not* an error here; it is reported by the first call.
    pub fn from_env() -> Result<Self> {
        Self::builder().config(&Config::from_env()?).build()
    }

    /// End-of-day prices for `symbol` on `exchange`.
    pub fn eod(&self, symbol: impl Into<String>, exchange: impl Into<String>) -> EodBuilder<'_, Self> {
        EodBuilder::new(self, symbol, exchange)
    }

    /// Dividend history for `symbol` on `exchange`.
    pub fn dividends(
        &self,
        symbol: impl Into<String>,
        exchange: impl Into<String>,
    ) -> DividendsBuilder<'_, Self> {
        DividendsBuilder::new(self, symbol, exchange)
    }

    /// The list of symbols traded on `exchange_code`.
    pub fn exchange_symbols(&self, exchange_code: impl Into<String>) -> SymbolsBuilder<'_, Self> {
        SymbolsBuilder::new(self, exchange_code)
    }

    pub fn base_url(&self) -> &Url {
        &self.settings.base_url
    }

    pub(crate) async fn execute<T>(&self, req: EndpointRequest<T>) -> Result<Outcome<T>> {
        let prepared = executor::prepare(&self.settings, &req)?;
        let sent = self.session.fetch(&prepared.url).await;
        executor::complete(sent, &prepared, self.settings.verbose_errors, req.decode)
    }
}

/* ----------------------- Builder ----------------------- */

/// Options shared by the async and the blocking builders.
#[derive(Default, Clone)]
pub(crate) struct ClientOptions {
    pub(crate) api_key: Option<String>,
    pub(crate) base_url: Option<Url>,
    pub(crate) base_url_raw: Option<String>,
    pub(crate) user_agent: Option<String>,
    pub(crate) timeout: Option<Duration>,
    pub(crate) connect_timeout: Option<Duration>,
    pub(crate) verbose_errors: bool,
}

impl ClientOptions {
    pub(crate) fn apply_config(&mut self, cfg: &Config) {
        if cfg.api_key.is_some() {
            self.api_key = cfg.api_key.clone();
        }
        self.base_url_raw = Some(cfg.base_url.clone());
        self.base_url = None;
        self.timeout = cfg.timeout_secs.map(Duration::from_secs);
        self.connect_timeout = cfg.connect_timeout_secs.map(Duration::from_secs);
        self.verbose_errors = cfg.verbose_errors;
    }

    pub(crate) fn settings(&self) -> Result<ClientSettings> {
        let base_url = match (&self.base_url, &self.base_url_raw) {
            (Some(u), _) => u.clone(),
            (None, Some(raw)) => Url::parse(raw)?,
            (None, None) => Url::parse(DEFAULT_BASE_URL)?,
        };
        Ok(ClientSettings {
            base_url,
            api_key: self.api_key.clone(),
            verbose_errors: self.verbose_errors,
        })
    }

    pub(crate) fn user_agent(&self) -> &str {
        self.user_agent.as_deref().unwrap_or(USER_AGENT)
    }
}

/// Builder for [`EodClient`].
#[derive(Default)]
pub struct EodClientBuilder {
    options: ClientOptions,
    session: Option<Arc<dyn AsyncSession>>,
}

impl EodClientBuilder {
    /// Default API key for every call made by the client.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.options.api_key = Some(key.into());
        self
    }

    /// Override the API base (e.g., `https://eodhistoricaldata.com/api`).
    pub fn base_url(mut self, url: Url) -> Self {
        self.options.base_url = Some(url);
        self
    }

    /// Override the User-Agent of the built-in HTTP client.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.options.user_agent = Some(ua.into());
        self
    }

    /// Set a global request timeout (overall). Default: none.
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.options.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.options.connect_timeout = Some(dur);
        self
    }

    /// Log suppressed transport faults with their full error chain.
    pub fn verbose_errors(mut self, yes: bool) -> Self {
        self.options.verbose_errors = yes;
        self
    }

    /// Take key, base URL, timeouts and verbosity from a [`Config`].
    pub fn config(mut self, cfg: &Config) -> Self {
        self.options.apply_config(cfg);
        self
    }

    /// Send requests through a caller-owned session (caching, retrying, ...).
    ///
    /// Timeout and User-Agent options are ignored when a session is supplied.
    pub fn session(mut self, session: Arc<dyn AsyncSession>) -> Self {
        self.session = Some(session);
        self
    }

    pub fn build(self) -> Result<EodClient> {
        let settings = self.options.settings()?;
        let session: Arc<dyn AsyncSession> = match self.session {
            Some(s) => s,
            None => {
                let mut httpb = reqwest::Client::builder().user_agent(self.options.user_agent());
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
