use httpmock::{Method::GET, MockServer};

use crate::common;

fn mock_all(server: &MockServer) {
    server.mock(|when, then| {
        when.method(GET).path("/api/eod/AAPL.US");
        then.status(200).body(common::fixture("eod_AAPL.US.csv"));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/div/KO,US");
        then.status(200).body(common::fixture("div_KO.US.csv"));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/exchanges/US");
        then.status(200).body(common::fixture("exchanges_US.csv"));
    });
}

#[test]
fn blocking_and_async_agree() {
    let server = MockServer::start();
    mock_all(&server);

    let rt = tokio::runtime::Runtime::new().unwrap();
    let (eod, div, sym) = rt.block_on(async {
        let client = common::client(&server);
        (
            client.eod("AAPL", "US").between(2020, 2021).fetch().await.unwrap(),
            client.dividends("KO", "US").fetch().await.unwrap(),
            client.exchange_symbols("US").fetch().await.unwrap(),
        )
    });
    drop(rt);

    let client = common::blocking_client(&server);
    assert_eq!(
        client.eod("AAPL", "US").between(2020, 2021).fetch().unwrap(),
        eod
    );
    assert_eq!(client.dividends("KO", "US").fetch().unwrap(), div);
    assert_eq!(client.exchange_symbols("US").fetch().unwrap(), sym);
    assert!(eod.is_data() && div.is_data() && sym.is_data());
}
