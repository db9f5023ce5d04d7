use chrono::NaiveDate;
use serde::Serialize;

use crate::core::{EodError, Result};
use crate::table::DividendSeries;

/// One dividend payment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Dividend {
    pub date: NaiveDate,
    pub amount: f64,
}

impl DividendSeries {
    /// Reads the series as dividend payments.
    ///
    /// # Errors
    ///
    /// Returns [`EodError::MalformedResponse`] if an amount is not a number.
    pub fn to_dividends(&self) -> Result<Vec<Dividend>> {
        self.points()
            .iter()
            .map(|(date, value)| {
                let amount = value.as_f64().ok_or_else(|| {
                    EodError::malformed(format!("{date}: dividend `{value}` is not a number"))
                })?;
                Ok(Dividend {
                    date: *date,
                    amount,
                })
            })
            .collect()
    }
}
