//! eod-rs: ergonomic client for the EOD Historical Data API.
//!
//! - End-of-day prices: [`EodClient::eod`]
//! - Dividend history: [`EodClient::dividends`]
//! - Symbols listed on an exchange: [`EodClient::exchange_symbols`]
//! - Embedded exchange, currency and index lists: [`reference`]
//!
//! Every network call returns `Result<Outcome<T>>`. Errors cover bad input, a missing API
//! key, unexpected HTTP statuses and malformed bodies; a 403 (the key's plan does not cover
//! the endpoint) is [`Outcome::Denied`] and a connection failure is [`Outcome::Empty`].
//!
//! A blocking client with the same surface lives in [`blocking`].
//!
//! ```no_run
//! use eod_rs::{EodClient, Outcome};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Reads EOD_HISTORICAL_API_KEY (and a .env file, if present).
//! let client = EodClient::from_env()?;
//!
//! if let Outcome::Data(listing) = client.exchange_symbols("US").fetch().await? {
//!     println!("{} symbols", listing.len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod blocking;
pub mod core;
pub mod dividends;
pub mod eod;
pub mod reference;
pub mod symbols;
pub mod table;

pub use crate::core::{
    AsyncSession, BoxFuture, Config, DateBound, DateRange, EodClient, EodClientBuilder, EodError,
    Outcome, RawResponse, Result, Session, TransportError, api_key_env_var, sanitize_dates,
};
pub use dividends::{Dividend, DividendsBuilder};
pub use eod::{EodBar, EodBuilder};
pub use symbols::{SymbolListing, SymbolsBuilder};
pub use table::{
    CsvOptions, DividendSeries, Row, Series, SymbolDirectory, Table, TimeSeriesTable, Value,
    parse_csv,
};

/// Installs a `tracing` subscriber that honours `RUST_LOG`. Handy in examples and tests.
#[cfg(feature = "tracing-subscriber")]
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
