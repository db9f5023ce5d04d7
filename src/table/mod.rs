//! Tabular results: an index column plus named data columns, rows in API order.

mod parse;

pub use parse::{CsvOptions, parse_csv};

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

use crate::core::error::{EodError, Result};

/// A date-indexed table (EOD prices).
pub type TimeSeriesTable = Table<NaiveDate>;
/// A ticker-indexed table (exchange symbol list).
pub type SymbolDirectory = Table<String>;
/// A date-indexed single column (dividends).
pub type DividendSeries = Series<NaiveDate>;

/// A single cell, with its type inferred from the text.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Number(f64),
    Text(String),
    Null,
}

const NULL_MARKERS: &[&str] = &["", "NA", "N/A", "NaN", "nan", "null", "NULL", "None"];

impl Value {
    /// Infers a value from raw cell text: null markers, then numbers, then text.
    pub fn infer(raw: &str) -> Self {
        let s = raw.trim();
        if NULL_MARKERS.contains(&s) {
            return Value::Null;
        }
        match s.parse::<f64>() {
            Ok(n) => Value::Number(n),
            Err(_) => Value::Text(s.to_string()),
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{n}"),
            Value::Text(s) => f.write_str(s),
            Value::Null => Ok(()),
        }
    }
}

/// Types usable as a table index.
pub trait IndexKey: Sized {
    /// Parses one raw index cell; `None` rejects the row.
    fn parse_key(raw: &str) -> Option<Self>;
}

impl IndexKey for NaiveDate {
    fn parse_key(raw: &str) -> Option<Self> {
        let s = raw.trim();
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").map(|dt| dt.date()))
            .ok()
    }
}

impl IndexKey for String {
    fn parse_key(raw: &str) -> Option<Self> {
        Some(raw.trim().to_string())
    }
}

impl IndexKey for u32 {
    fn parse_key(raw: &str) -> Option<Self> {
        raw.trim().parse().ok()
    }
}

/// One row: its index key and one value per data column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Row<K> {
    pub key: K,
    pub values: Vec<Value>,
    #[serde(skip)]
    raw: Vec<String>,
}

impl<K> Row<K> {
    /// Keeps each trimmed cell and infers its value.
    pub(crate) fn from_cells<'c>(key: K, cells: impl IntoIterator<Item = &'c str>) -> Self {
        let raw: Vec<String> = cells.into_iter().map(|c| c.trim().to_string()).collect();
        let values = raw.iter().map(|c| Value::infer(c)).collect();
        Self { key, values, raw }
    }

    /// Keeps every cell as text.
    pub(crate) fn text<'c>(key: K, cells: impl IntoIterator<Item = &'c str>) -> Self {
        let raw: Vec<String> = cells.into_iter().map(str::to_string).collect();
        let values = raw.iter().cloned().map(Value::Text).collect();
        Self { key, values, raw }
    }

    /// The cell at `i` as it appeared in the response, trimmed.
    pub fn raw(&self, i: usize) -> Option<&str> {
        self.raw.get(i).map(String::as_str)
    }
}

impl<K: fmt::Display> Row<K> {
    /// The numeric cell at `i`; anything else is malformed.
    pub(crate) fn number(&self, i: usize, column: &str) -> Result<f64> {
        self.values.get(i).and_then(Value::as_f64).ok_or_else(|| {
            EodError::malformed(format!("row {}: `{column}` is not a number", self.key))
        })
    }

    pub(crate) fn opt_number(&self, i: Option<usize>) -> Option<f64> {
        i.and_then(|i| self.values.get(i)).and_then(Value::as_f64)
    }

    /// The raw text at `i`; only an empty cell is `None`.
    pub(crate) fn opt_text(&self, i: Option<usize>) -> Option<String> {
        i.and_then(|i| self.raw(i))
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    }
}

/// Rows keyed by `K`, columns named by the response header.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table<K> {
    index_name: String,
    columns: Vec<String>,
    rows: Vec<Row<K>>,
}

impl<K> Table<K> {
    pub(crate) fn new(index_name: String, columns: Vec<String>, rows: Vec<Row<K>>) -> Self {
        Self {
            index_name,
            columns,
            rows,
        }
    }

    /// Name of the index column (`Date`, `Code`, ...).
    pub fn index_name(&self) -> &str {
        &self.index_name
    }

    /// Data column names, index excluded.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row<K>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.rows.iter().map(|r| &r.key)
    }

    /// Position of a data column, compared case-insensitively.
    pub fn column_position(&self, name: &str) -> Option<usize> {
        self.columns
            .iter()
            .position(|c| c.eq_ignore_ascii_case(name))
    }

    /// `(key, value)` pairs of one column, in row order.
    pub fn column(&self, name: &str) -> Option<impl Iterator<Item = (&K, &Value)>> {
        let i = self.column_position(name)?;
        Some(self.rows.iter().map(move |r| (&r.key, &r.values[i])))
    }

    /// Like [`column_position`](Self::column_position), but a missing column is malformed.
    pub(crate) fn require_column(&self, name: &str) -> Result<usize> {
        self.column_position(name)
            .ok_or_else(|| EodError::malformed(format!("missing column `{name}`")))
    }

    /// Turns a one-column table into a named series.
    ///
    /// # Errors
    ///
    /// Returns [`EodError::MalformedResponse`] unless exactly one data column is present.
    pub fn into_single_series(self) -> Result<Series<K>> {
        if self.columns.len() != 1 {
            return Err(EodError::malformed(format!(
                "expected exactly one data column, found {} ({})",
                self.columns.len(),
                self.columns.join(", ")
            )));
        }
        let name = self.columns.into_iter().next().unwrap_or_default();
        let points = self
            .rows
            .into_iter()
            .map(|mut r| (r.key, r.values.pop().unwrap_or(Value::Null)))
            .collect();
        Ok(Series {
            name,
            index_name: self.index_name,
            points,
        })
    }
}

impl<K: PartialEq> Table<K> {
    pub fn row(&self, key: &K) -> Option<&Row<K>> {
        self.rows.iter().find(|r| &r.key == key)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.row(key).is_some()
    }

    /// The cell at `key` / `column`.
    pub fn get(&self, key: &K, column: &str) -> Option<&Value> {
        let i = self.column_position(column)?;
        self.row(key).map(|r| &r.values[i])
    }
}

/// A single named column keyed by `K`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series<K> {
    name: String,
    index_name: String,
    points: Vec<(K, Value)>,
}

impl<K> Series<K> {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn index_name(&self) -> &str {
        &self.index_name
    }

    pub fn points(&self) -> &[(K, Value)] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
