use eod_rs::EodError;

use crate::common::{self, SpySession};

#[tokio::test]
async fn missing_key_fails_before_any_request() {
    let spy = SpySession::replying(200, "Date,Open\nfooter\n");
    let client = common::spy_client(&spy, None);

    let err = client.eod("AAPL", "US").fetch().await.unwrap_err();
    assert!(matches!(
        err,
        EodError::MissingCredential {
            env_var: "EOD_HISTORICAL_API_KEY"
        }
    ));

    let err = client.dividends("AAPL", "US").fetch().await.unwrap_err();
    assert!(matches!(err, EodError::MissingCredential { .. }));

    let err = client.exchange_symbols("US").fetch().await.unwrap_err();
    assert!(matches!(err, EodError::MissingCredential { .. }));

    assert_eq!(spy.calls(), 0);
}

#[tokio::test]
async fn blank_key_counts_as_missing() {
    let spy = SpySession::replying(200, "Date,Open\nfooter\n");
    let client = common::spy_client(&spy, Some("   "));

    let err = client.eod("AAPL", "US").fetch().await.unwrap_err();
    assert!(matches!(err, EodError::MissingCredential { .. }));
    assert_eq!(spy.calls(), 0);
}

#[tokio::test]
async fn per_call_key_satisfies_the_guard() {
    let spy = SpySession::replying(200, "Date,Open\n2020-01-02,1\nfooter\n");
    let client = common::spy_client(&spy, None);

    let out = client
        .eod("AAPL", "US")
        .api_key("per-call")
        .fetch()
        .await
        .unwrap();
    assert!(out.is_data());
    assert_eq!(spy.urls()[0].query(), Some("api_token=per-call"));
}

#[tokio::test]
async fn missing_key_message_points_at_the_fix() {
    let spy = SpySession::replying(200, "");
    let client = common::spy_client(&spy, None);
    let msg = client.eod("AAPL", "US").fetch().await.unwrap_err().to_string();
    assert!(msg.contains(eod_rs::api_key_env_var()), "{msg}");
    assert!(msg.contains(".api_key("), "{msg}");
}
