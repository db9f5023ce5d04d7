use eod_rs::Value;
use httpmock::{Method::GET, MockServer};

use crate::common::{self, API_KEY};

#[tokio::test]
async fn exchange_symbols_are_keyed_by_code() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/exchanges/US")
            .query_param("api_token", API_KEY);
        then.status(200).body(common::fixture("exchanges_US.csv"));
    });

    let client = common::client(&server);
    let dir = client
        .exchange_symbols("US")
        .fetch()
        .await
        .unwrap()
        .data()
        .expect("expected data");
    mock.assert();

    assert_eq!(dir.index_name(), "Code");
    assert_eq!(dir.len(), 3);
    let codes: Vec<&String> = dir.keys().collect();
    assert_eq!(codes, ["AAPL", "KO", "SPY"]);
    assert_eq!(
        dir.get(&"SPY".to_string(), "Type"),
        Some(&Value::Text("ETF".into()))
    );

    let listings = dir.to_listings();
    assert_eq!(listings[1].name.as_deref(), Some("The Coca-Cola Company"));
    assert_eq!(listings[0].currency.as_deref(), Some("USD"));
}

#[tokio::test]
async fn directory_request_never_carries_dates() {
    let spy = common::SpySession::replying(200, "Code,Name\nVOD,Vodafone Group\nfooter\n");
    let client = common::spy_client(&spy, Some("k"));
    let out = client.exchange_symbols("LSE").fetch().await.unwrap();
    assert!(out.is_data());

    let urls = spy.urls();
    assert_eq!(urls.len(), 1);
    assert_eq!(urls[0].path(), "/api/exchanges/LSE");
    assert_eq!(urls[0].query(), Some("api_token=k"));
}
