use eod_rs::Value;
use eod_rs::reference;

#[test]
fn well_known_entries_are_present() {
    let us = reference::exchange_by_code("US").expect("US exchange");
    assert_eq!(us.id, 11);
    assert_eq!(us.name, "USA Stocks");

    assert_eq!(reference::currency_by_code("usd").map(|c| c.id), Some(1));
    assert_eq!(reference::currency_by_code("BTC").map(|c| c.exchange_code), Some("FX"));

    let gspc = reference::index_by_code("GSPC").expect("S&P 500");
    assert_eq!(gspc.name, "S&P 500");
    assert_eq!(gspc.exchange_code, "INDX");

    assert!(reference::exchange_by_code("NOPE").is_none());
}

#[test]
fn accessors_are_stable_across_calls() {
    assert_eq!(reference::exchanges(), reference::exchanges());
    assert!(std::ptr::eq(reference::indexes(), reference::indexes()));
    assert_eq!(reference::currency_table(), reference::currency_table());
}

#[test]
fn tables_are_indexed_by_id() {
    let t = reference::index_table();
    assert_eq!(t.len(), reference::indexes().len());
    assert_eq!(t.columns(), ["Exchange Code", "Code", "Index Name"]);
    assert_eq!(t.get(&137, "Code"), Some(&Value::Text("IXIC".into())));

    let c = reference::currency_table();
    assert_eq!(c.get(&2, "Currency Code").and_then(Value::as_str), Some("EUR"));
}
