use eod_rs::{EodError, Outcome, TransportError};
use httpmock::{Method::GET, MockServer};
use url::Url;

use crate::common::{self, API_KEY, SpySession};

#[test]
fn blocking_eod_parses_fixture() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/eod/AAPL.US")
            .query_param("api_token", API_KEY)
            .query_param("from", "2020-02-01")
            .query_param("to", "2020-02-10");
        then.status(200).body(common::fixture("eod_AAPL.US.csv"));
    });

    let client = common::blocking_client(&server);
    let table = client
        .eod("AAPL", "US")
        .between("2020-02-01", "2020-02-10")
        .fetch()
        .unwrap()
        .data()
        .expect("expected data");
    mock.assert();
    assert_eq!(table.len(), 3);
}

#[test]
fn blocking_forbidden_and_error_statuses() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/div/KO,US");
        then.status(403);
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/exchanges/XX");
        then.status(502);
    });

    let client = common::blocking_client(&server);
    assert_eq!(
        client.dividends("KO", "US").fetch().unwrap(),
        Outcome::Denied
    );
    match client.exchange_symbols("XX").fetch().unwrap_err() {
        EodError::RemoteData { status, url, .. } => {
            assert_eq!(status, 502);
            assert!(!url.contains(API_KEY));
        }
        other => panic!("expected RemoteData, got {other:?}"),
    }
}

#[test]
fn blocking_preflight_failures_send_nothing() {
    let spy = SpySession::replying(200, "Date,Open\nfooter\n");

    let client = common::blocking_spy_client(&spy, None);
    let err = client.eod("AAPL", "US").fetch().unwrap_err();
    assert!(matches!(err, EodError::MissingCredential { .. }));

    let client = common::blocking_spy_client(&spy, Some("k"));
    let err = client
        .dividends("AAPL", "US")
        .between(2021, 2020)
        .fetch()
        .unwrap_err();
    assert!(matches!(err, EodError::InvalidRange(_)));

    assert_eq!(spy.calls(), 0);
}

#[test]
fn blocking_connection_faults_are_empty() {
    let spy = SpySession::failing(|| TransportError::Connect("refused".into()));
    let client = common::blocking_spy_client(&spy, Some("k"));
    assert_eq!(client.exchange_symbols("US").fetch().unwrap(), Outcome::Empty);

    let client = eod_rs::blocking::EodClient::builder()
        .base_url(Url::parse("http://127.0.0.1:1/api").unwrap())
        .api_key("k")
        .build()
        .unwrap();
    assert_eq!(client.eod("AAPL", "US").fetch().unwrap(), Outcome::Empty);
}
