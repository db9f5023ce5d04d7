//! Date range normalization for the time-series endpoints.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone};

use crate::core::error::{EodError, Result};

const TEXT_DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%Y%m%d"];
const TEXT_DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

/// One end of a requested date range, as supplied by the caller.
///
/// Anything that reasonably names a calendar day converts into a `DateBound`:
///
/// ```
/// use eod_rs::DateBound;
///
/// let _ = DateBound::from(2020); // 2020-01-01
/// let _ = DateBound::from("2020-02-10");
/// let _ = DateBound::from(chrono::NaiveDate::from_ymd_opt(2020, 2, 10).unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateBound {
    /// A bare year, read as January 1st of that year.
    Year(i32),
    /// A calendar date.
    Date(NaiveDate),
    /// A date and time; only the date part is used.
    DateTime(NaiveDateTime),
    /// A date string such as `2020-02-10`, `2020/02/10`, `20200210` or an RFC 3339 timestamp.
    Text(String),
}

impl DateBound {
    /// Resolves this bound to a calendar date.
    ///
    /// # Errors
    ///
    /// Returns [`EodError::InvalidRange`] if a year is out of range or a string does not parse.
    pub fn resolve(&self) -> Result<NaiveDate> {
        match self {
            DateBound::Year(y) => NaiveDate::from_ymd_opt(*y, 1, 1)
                .ok_or_else(|| EodError::invalid_range(format!("year {y} is out of range"))),
            DateBound::Date(d) => Ok(*d),
            DateBound::DateTime(dt) => Ok(dt.date()),
            DateBound::Text(s) => parse_text(s),
        }
    }
}

fn parse_text(raw: &str) -> Result<NaiveDate> {
    let s = raw.trim();
    for fmt in TEXT_DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Ok(d);
        }
    }
    for fmt in TEXT_DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(dt.date());
        }
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.date_naive());
    }
    Err(EodError::invalid_range(format!("cannot parse `{raw}` as a date")))
}

impl From<i32> for DateBound {
    fn from(year: i32) -> Self {
        DateBound::Year(year)
    }
}

impl From<NaiveDate> for DateBound {
    fn from(d: NaiveDate) -> Self {
        DateBound::Date(d)
    }
}

impl From<NaiveDateTime> for DateBound {
    fn from(dt: NaiveDateTime) -> Self {
        DateBound::DateTime(dt)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for DateBound {
    fn from(dt: DateTime<Tz>) -> Self {
        DateBound::DateTime(dt.naive_local())
    }
}

impl From<&str> for DateBound {
    fn from(s: &str) -> Self {
        DateBound::Text(s.to_string())
    }
}

impl From<String> for DateBound {
    fn from(s: String) -> Self {
        DateBound::Text(s)
    }
}

/// A resolved, validated `(start, end)` pair with `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Builds a range from two calendar dates.
    ///
    /// # Errors
    ///
    /// Returns [`EodError::InvalidRange`] if `start > end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(EodError::invalid_range(format!(
                "end ({end}) must not be before start ({start})"
            )));
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// The `(from, to)` values as sent on the wire (`YYYY-MM-DD`).
    pub(crate) fn query_values(&self) -> (String, String) {
        (format_date(self.start), format_date(self.end))
    }
}

pub(crate) fn format_date(d: NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}

/// Resolves both bounds and checks their order.
///
/// # Errors
///
/// Returns [`EodError::InvalidRange`] if either bound is missing or unparseable,
/// or if the resolved start falls after the resolved end.
pub fn sanitize_dates(start: Option<DateBound>, end: Option<DateBound>) -> Result<DateRange> {
    let (Some(start), Some(end)) = (start, end) else {
        return Err(EodError::invalid_range(
            "both start and end must be given as a year, a date or a date string",
        ));
    };
    DateRange::new(start.resolve()?, end.resolve()?)
}
