use std::time::Duration;

use eod_rs::{EodClient, EodError, Outcome, TransportError};
use httpmock::{Method::GET, MockServer};
use url::Url;

use crate::common::{self, SpySession};

fn refused() -> TransportError {
    TransportError::Connect("connection refused".into())
}

#[tokio::test]
async fn connection_faults_are_suppressed() {
    let faults: [fn() -> TransportError; 3] = [
        refused,
        || TransportError::ConnectTimeout("connect timed out".into()),
        || TransportError::RetriesExhausted("max retries exceeded".into()),
    ];
    for fault in faults {
        let spy = SpySession::failing(fault);
        let client = common::spy_client(&spy, Some("k"));
        let out = client.eod("AAPL", "US").between(2020, 2021).fetch().await.unwrap();
        assert_eq!(out, Outcome::Empty);
        assert_eq!(spy.calls(), 1);
    }
}

#[tokio::test]
async fn other_transport_faults_propagate() {
    let spy = SpySession::failing(|| TransportError::Other("body decode failed".into()));
    let client = common::spy_client(&spy, Some("k"));
    let err = client.exchange_symbols("US").fetch().await.unwrap_err();
    assert!(matches!(err, EodError::Transport(TransportError::Other(_))), "got {err:?}");
}

#[tokio::test]
async fn verbose_mode_still_suppresses() {
    let spy = SpySession::failing(refused);
    let client = EodClient::builder()
        .base_url(Url::parse("https://spy.invalid/api").unwrap())
        .api_key("k")
        .verbose_errors(true)
        .session(spy.clone())
        .build()
        .unwrap();
    let out = client.dividends("KO", "US").fetch().await.unwrap();
    assert!(out.is_empty());
}

#[tokio::test]
async fn unreachable_host_is_empty() {
    // Port 1 on loopback: nothing listens there, so the connect is refused.
    let client = EodClient::builder()
        .base_url(Url::parse("http://127.0.0.1:1/api").unwrap())
        .api_key("k")
        .connect_timeout(Duration::from_secs(2))
        .build()
        .unwrap();
    let out = client.eod("AAPL", "US").fetch().await.unwrap();
    assert_eq!(out, Outcome::Empty);
}

#[tokio::test]
async fn connect_fault_hides_the_key() {
    let secret = "sk-live-SECRET123";
    let url = Url::parse(&format!("http://127.0.0.1:1/api/eod/AAPL.US?api_token={secret}")).unwrap();
    let err = eod_rs::AsyncSession::fetch(&reqwest::Client::new(), &url)
        .await
        .unwrap_err();
    assert!(err.is_suppressed(), "got {err:?}");
    assert!(!err.to_string().contains(secret), "{err}");
    assert!(!format!("{err:?}").contains(secret), "{err:?}");
}

#[tokio::test]
async fn timeout_error_hides_the_key() {
    let secret = "sk-live-SECRET123";
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/eod/AAPL.US");
        then.status(200).delay(Duration::from_secs(3)).body("Date,Open\nfooter\n");
    });

    let client = EodClient::builder()
        .base_url(common::api_base(&server))
        .api_key(secret)
        .timeout(Duration::from_millis(300))
        .build()
        .unwrap();
    let err = client.eod("AAPL", "US").fetch().await.unwrap_err();
    assert!(matches!(err, EodError::Transport(TransportError::Other(_))), "got {err:?}");
    assert!(!err.to_string().contains(secret), "{err}");
    assert!(!format!("{err:?}").contains(secret), "{err:?}");
}
