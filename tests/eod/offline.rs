use chrono::NaiveDate;
use eod_rs::{Outcome, Value};
use httpmock::{Method::GET, MockServer};

use crate::common::{self, API_KEY};

#[tokio::test]
async fn eod_parses_fixture_and_drops_footer() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/eod/AAPL.US")
            .query_param("api_token", API_KEY)
            .query_param("from", "2020-02-01")
            .query_param("to", "2020-02-10");
        then.status(200)
            .header("content-type", "text/csv")
            .body(common::fixture("eod_AAPL.US.csv"));
    });

    let client = common::client(&server);
    let out = client
        .eod("AAPL", "US")
        .between("2020-02-01", NaiveDate::from_ymd_opt(2020, 2, 10).unwrap())
        .fetch()
        .await
        .unwrap();
    mock.assert();

    let table = out.data().expect("expected data");
    assert_eq!(table.len(), 3);
    assert_eq!(table.index_name(), "Date");
    assert_eq!(
        table.columns(),
        ["Open", "High", "Low", "Close", "Adjusted_close", "Volume"]
    );

    let first = NaiveDate::from_ymd_opt(2020, 2, 3).unwrap();
    let last = NaiveDate::from_ymd_opt(2020, 2, 5).unwrap();
    assert_eq!(table.keys().next(), Some(&first));
    assert_eq!(table.keys().last(), Some(&last));
    assert_eq!(table.get(&first, "Close"), Some(&Value::Number(308.66)));

    let bars = table.to_eod_bars().unwrap();
    assert_eq!(bars[2].volume, Some(29_706_700));
    assert_eq!(bars[1].adjusted_close, Some(78.1431));
}

#[tokio::test]
async fn year_bounds_become_january_first() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/eod/MSFT.US")
            .query_param("from", "2019-01-01")
            .query_param("to", "2020-01-01");
        then.status(200).body(common::fixture("eod_AAPL.US.csv"));
    });

    let client = common::client(&server);
    let out = client
        .eod("MSFT", "US")
        .start(2019)
        .end(2020)
        .fetch()
        .await
        .unwrap();
    mock.assert();
    assert!(out.is_data());
}

#[tokio::test]
async fn per_call_key_overrides_client_key() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/eod/AAPL.US")
            .query_param("api_token", "per-call");
        then.status(200).body(common::fixture("eod_AAPL.US.csv"));
    });

    let client = common::client(&server);
    let out = client
        .eod("AAPL", "US")
        .api_key("per-call")
        .fetch()
        .await
        .unwrap();
    mock.assert();
    assert_eq!(out.as_data().map(|t| t.len()), Some(3));
}

#[tokio::test]
async fn ragged_body_is_malformed() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/eod/BAD.US");
        then.status(200)
            .body("Date,Open,Close\n2020-01-02,1,2\n2020-01-03,1\nfooter\n");
    });

    let client = common::client(&server);
    let err = client.eod("BAD", "US").fetch().await.unwrap_err();
    mock.assert();
    assert!(
        matches!(err, eod_rs::EodError::MalformedResponse(_)),
        "got {err:?}"
    );
}

#[tokio::test]
async fn header_only_body_is_an_empty_table() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/eod/NEW.US");
        then.status(200).body("Date,Open,High,Low,Close,Volume\nfooter\n");
    });

    let client = common::client(&server);
    let out = client.eod("NEW", "US").fetch().await.unwrap();
    mock.assert();
    match out {
        Outcome::Data(t) => assert!(t.is_empty()),
        other => panic!("expected data, got {other:?}"),
    }
}
