//! Query-string assembly and credential redaction.

use url::Url;

use crate::core::client::constants::{API_TOKEN_PARAM, REDACTED_API_KEY};
use crate::core::dates::DateRange;
use crate::core::error::{EodError, Result};

/// Ordered query parameters for one request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a parameter list with the API key.
    pub fn with_api_key(api_key: &str) -> Self {
        let mut params = Self::new();
        params.push(API_TOKEN_PARAM, api_key);
        params
    }

    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((name.into(), value.into()));
    }

    /// Appends `from` / `to` for a resolved range.
    pub fn push_range(&mut self, range: &DateRange) {
        let (from, to) = range.query_values();
        self.push("from", from);
        self.push("to", to);
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// A copy with the API key value replaced by a placeholder.
    pub fn redacted(&self) -> Self {
        let pairs = self
            .pairs
            .iter()
            .map(|(k, v)| {
                if k == API_TOKEN_PARAM {
                    (k.clone(), REDACTED_API_KEY.to_string())
                } else {
                    (k.clone(), v.clone())
                }
            })
            .collect();
        Self { pairs }
    }
}

/// Joins `segments` onto `base` and appends the percent-encoded query.
///
/// Each segment is encoded on its own, so `AAPL.US` or `AAPL,US` stay a single path
/// segment. When `params` is empty the URL carries no query string at all.
///
/// # Errors
///
/// Returns [`EodError::Config`] if `base` cannot carry a path (e.g. a `mailto:` URL).
pub fn build_url(base: &Url, segments: &[&str], params: &QueryParams) -> Result<Url> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|()| EodError::Config(format!("base URL `{base}` cannot be a base")))?
        .pop_if_empty()
        .extend(segments);

    if params.is_empty() {
        url.set_query(None);
    } else {
        url.query_pairs_mut().clear().extend_pairs(params.iter());
    }
    Ok(url)
}

/// The request URL as it may appear in logs and errors.
pub fn redacted_url(base: &Url, segments: &[&str], params: &QueryParams) -> Result<String> {
    build_url(base, segments, &params.redacted()).map(String::from)
}
