use csv::ReaderBuilder;

use super::{IndexKey, Row, Table};
use crate::core::error::{EodError, Result};

/// How a CSV body is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvOptions {
    /// Field delimiter.
    pub delimiter: u8,
    /// Drop the last non-blank line before parsing. The API appends a footer to every
    /// CSV response.
    pub skip_footer: bool,
}

impl CsvOptions {
    /// Comma-separated with one trailing footer line, as the API responds.
    pub const fn api() -> Self {
        Self {
            delimiter: b',',
            skip_footer: true,
        }
    }
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self::api()
    }
}

/// Parses a CSV body whose first column is the index.
///
/// # Errors
///
/// Returns [`EodError::MalformedResponse`] if the header is missing, a row has the wrong
/// number of fields, or an index cell does not parse as `K`. Bad rows are never skipped.
pub fn parse_csv<K: IndexKey>(body: &str, opts: CsvOptions) -> Result<Table<K>> {
    let mut lines: Vec<&str> = body.lines().collect();
    while lines.last().is_some_and(|l| l.trim().is_empty()) {
        lines.pop();
    }
    if opts.skip_footer {
        lines.pop();
    }
    if lines.is_empty() {
        return Err(EodError::malformed("response body has no header row"));
    }
    let text = lines.join("\n");

    let mut rdr = ReaderBuilder::new()
        .delimiter(opts.delimiter)
        .has_headers(true)
        .flexible(false)
        .from_reader(text.as_bytes());

    let headers = rdr
        .headers()
        .map_err(|e| EodError::malformed(format!("bad header: {e}")))?
        .clone();
    let mut names = headers.iter().map(|h| h.trim().to_string());
    let index_name = names.next().unwrap_or_default();
    let columns: Vec<String> = names.collect();

    let mut rows = Vec::new();
    for (i, record) in rdr.records().enumerate() {
        let line = i + 2;
        let record = record.map_err(|e| EodError::malformed(format!("line {line}: {e}")))?;
        let raw_key = record.get(0).unwrap_or_default();
        let key = K::parse_key(raw_key).ok_or_else(|| {
            EodError::malformed(format!("line {line}: invalid index value `{raw_key}`"))
        })?;
        rows.push(Row::from_cells(key, record.iter().skip(1)));
    }

    Ok(Table::new(index_name, columns, rows))
}
