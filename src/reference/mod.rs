//! Static reference lists: supported exchanges, currencies and indexes.
//!
//! Nothing here touches the network; every accessor returns the same embedded data for the
//! lifetime of the process.

mod data;

use serde::Serialize;

use crate::table::{Row, Table};

/// A supported exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Exchange {
    pub id: u32,
    pub name: &'static str,
    /// The code used in `{symbol}.{exchange}` tickers (`US`, `LSE`, `XETRA`, ...).
    pub code: &'static str,
}

/// A supported currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Currency {
    pub id: u32,
    pub exchange_code: &'static str,
    pub code: &'static str,
}

/// A supported index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Index {
    pub id: u32,
    pub exchange_code: &'static str,
    pub code: &'static str,
    pub name: &'static str,
}

pub fn exchanges() -> &'static [Exchange] {
    data::EXCHANGES
}

pub fn currencies() -> &'static [Currency] {
    data::CURRENCIES
}

pub fn indexes() -> &'static [Index] {
    data::INDEXES
}

/// Case-insensitive lookup by exchange code.
pub fn exchange_by_code(code: &str) -> Option<&'static Exchange> {
    exchanges().iter().find(|e| e.code.eq_ignore_ascii_case(code))
}

/// Case-insensitive lookup by currency code.
pub fn currency_by_code(code: &str) -> Option<&'static Currency> {
    currencies().iter().find(|c| c.code.eq_ignore_ascii_case(code))
}

/// Case-insensitive lookup by index code (`GSPC`, `DJI`, ...).
pub fn index_by_code(code: &str) -> Option<&'static Index> {
    indexes().iter().find(|i| i.code.eq_ignore_ascii_case(code))
}

/// The exchanges as an ID-indexed table, shaped like the API's own listings.
pub fn exchange_table() -> Table<u32> {
    to_table(
        &["Exchange Name", "Exchange Code"],
        exchanges().iter().map(|e| (e.id, vec![e.name, e.code])),
    )
}

pub fn currency_table() -> Table<u32> {
    to_table(
        &["Exchange Code", "Currency Code"],
        currencies()
            .iter()
            .map(|c| (c.id, vec![c.exchange_code, c.code])),
    )
}

pub fn index_table() -> Table<u32> {
    to_table(
        &["Exchange Code", "Code", "Index Name"],
        indexes()
            .iter()
            .map(|i| (i.id, vec![i.exchange_code, i.code, i.name])),
    )
}

fn to_table<'a>(
    columns: &[&str],
    rows: impl Iterator<Item = (u32, Vec<&'a str>)>,
) -> Table<u32> {
    let rows = rows
        .map(|(key, cells)| Row::text(key, cells))
        .collect();
    Table::new(
        "ID".to_string(),
        columns.iter().map(|c| c.to_string()).collect(),
        rows,
    )
}
