use eod_rs::{EodError, Outcome};

use crate::common::{self, SpySession};

const BODY: &str = "Date,Open\n2020-01-02,1\nfooter\n";

#[tokio::test]
async fn inverted_range_fails_before_any_request() {
    let spy = SpySession::replying(200, BODY);
    let client = common::spy_client(&spy, Some("k"));

    let err = client
        .eod("AAPL", "US")
        .between("2021-01-01", "2020-01-01")
        .fetch()
        .await
        .unwrap_err();
    assert!(matches!(err, EodError::InvalidRange(_)), "got {err:?}");

    let err = client
        .dividends("AAPL", "US")
        .between(2021, 2020)
        .fetch()
        .await
        .unwrap_err();
    assert!(matches!(err, EodError::InvalidRange(_)), "got {err:?}");

    assert_eq!(spy.calls(), 0);
}

#[tokio::test]
async fn a_single_bound_is_rejected() {
    let spy = SpySession::replying(200, BODY);
    let client = common::spy_client(&spy, Some("k"));

    let err = client.eod("AAPL", "US").start(2020).fetch().await.unwrap_err();
    assert!(matches!(err, EodError::InvalidRange(_)));
    let err = client.eod("AAPL", "US").end(2020).fetch().await.unwrap_err();
    assert!(matches!(err, EodError::InvalidRange(_)));
    assert_eq!(spy.calls(), 0);
}

#[tokio::test]
async fn unparseable_text_bound_is_rejected() {
    let spy = SpySession::replying(200, BODY);
    let client = common::spy_client(&spy, Some("k"));

    let err = client
        .eod("AAPL", "US")
        .between("yesterday", "2020-01-01")
        .fetch()
        .await
        .unwrap_err();
    assert!(matches!(err, EodError::InvalidRange(_)));
    assert_eq!(spy.calls(), 0);
}

#[tokio::test]
async fn no_range_sends_no_dates() {
    let spy = SpySession::replying(200, BODY);
    let client = common::spy_client(&spy, Some("k"));

    let out = client.eod("AAPL", "US").fetch().await.unwrap();
    assert!(matches!(out, Outcome::Data(_)));
    let url = &spy.urls()[0];
    assert_eq!(url.as_str(), "https://spy.invalid/api/eod/AAPL.US?api_token=k");
}

#[tokio::test]
async fn same_day_range_is_allowed() {
    let spy = SpySession::replying(200, BODY);
    let client = common::spy_client(&spy, Some("k"));

    client
        .eod("AAPL", "US")
        .between("2020-01-02", "2020/01/02")
        .fetch()
        .await
        .unwrap();
    assert_eq!(
        spy.urls()[0].query(),
        Some("api_token=k&from=2020-01-02&to=2020-01-02")
    );
}
