use serde::Serialize;

use crate::table::SymbolDirectory;

/// One row of an exchange's symbol directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SymbolListing {
    pub code: String,
    pub name: Option<String>,
    pub country: Option<String>,
    pub exchange: Option<String>,
    pub currency: Option<String>,
    /// Instrument type (`Common Stock`, `ETF`, `FUND`, ...).
    pub kind: Option<String>,
}

impl SymbolDirectory {
    /// Reads the directory as listings. Columns the response lacks come back as `None`.
    pub fn to_listings(&self) -> Vec<SymbolListing> {
        let name = self.column_position("Name");
        let country = self.column_position("Country");
        let exchange = self.column_position("Exchange");
        let currency = self.column_position("Currency");
        let kind = self.column_position("Type");

        self.rows()
            .iter()
            .map(|row| SymbolListing {
                code: row.key.clone(),
                name: row.opt_text(name),
                country: row.opt_text(country),
                exchange: row.opt_text(exchange),
                currency: row.opt_text(currency),
                kind: row.opt_text(kind),
            })
            .collect()
    }
}
