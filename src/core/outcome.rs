/// The result of a network-backed call that did not fail outright.
///
/// `Denied` and `Empty` are routine conditions rather than errors, which is why they live
/// here instead of in [`EodError`](crate::EodError):
///
/// ```no_run
/// # use eod_rs::{EodClient, Outcome};
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = EodClient::from_env()?;
/// match client.eod("AAPL", "US").between(2020, 2021).fetch().await? {
///     Outcome::Data(table) => println!("{} bars", table.len()),
///     Outcome::Denied => println!("this key's plan does not include EOD data"),
///     Outcome::Empty => println!("could not reach the API"),
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub enum Outcome<T> {
    /// The request succeeded and the body parsed.
    Data(T),
    /// The server was reached but the API key is not entitled to this endpoint (HTTP 403).
    Denied,
    /// A connection-level fault was logged and suppressed; there is no result.
    Empty,
}

impl<T> Outcome<T> {
    pub fn is_data(&self) -> bool {
        matches!(self, Outcome::Data(_))
    }

    pub fn is_denied(&self) -> bool {
        matches!(self, Outcome::Denied)
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Outcome::Empty)
    }

    /// The payload, if any.
    pub fn data(self) -> Option<T> {
        match self {
            Outcome::Data(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_data(&self) -> Option<&T> {
        match self {
            Outcome::Data(t) => Some(t),
            _ => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Outcome::Data(t) => Outcome::Data(f(t)),
            Outcome::Denied => Outcome::Denied,
            Outcome::Empty => Outcome::Empty,
        }
    }
}
