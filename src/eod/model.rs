use chrono::NaiveDate;
use serde::Serialize;

use crate::core::Result;
use crate::table::TimeSeriesTable;

/// One daily OHLCV bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EodBar {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    /// Close adjusted for splits and dividends, when the response carries it.
    pub adjusted_close: Option<f64>,
    pub volume: Option<u64>,
}

impl TimeSeriesTable {
    /// Reads the table as OHLCV bars.
    ///
    /// # Errors
    ///
    /// Returns [`EodError::MalformedResponse`](crate::EodError::MalformedResponse) if a price
    /// column is missing or a price cell is not a number.
    pub fn to_eod_bars(&self) -> Result<Vec<EodBar>> {
        let open = self.require_column("Open")?;
        let high = self.require_column("High")?;
        let low = self.require_column("Low")?;
        let close = self.require_column("Close")?;
        let adjusted = self.column_position("Adjusted_close");
        let volume = self.column_position("Volume");

        self.rows()
            .iter()
            .map(|row| {
                Ok(EodBar {
                    date: row.key,
                    open: row.number(open, "Open")?,
                    high: row.number(high, "High")?,
                    low: row.number(low, "Low")?,
                    close: row.number(close, "Close")?,
                    adjusted_close: row.opt_number(adjusted),
                    volume: row
                        .opt_number(volume)
                        .filter(|v| *v >= 0.0)
                        .map(|v| v.round() as u64),
                })
            })
            .collect()
    }
}
