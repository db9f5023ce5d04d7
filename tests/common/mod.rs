#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;
use std::sync::Mutex;

use eod_rs::{AsyncSession, BoxFuture, RawResponse, Session, TransportError};
use httpmock::MockServer;
use url::Url;

pub const API_KEY: &str = "test-key-123";

pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures")
}

pub fn fixture(name: &str) -> String {
    let path = fixtures_dir().join(name);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {}", path.display(), e))
}

pub fn api_base(server: &MockServer) -> Url {
    Url::parse(&server.url("/api")).unwrap()
}

pub fn client(server: &MockServer) -> eod_rs::EodClient {
    eod_rs::EodClient::builder()
        .base_url(api_base(server))
        .api_key(API_KEY)
        .build()
        .unwrap()
}

pub fn blocking_client(server: &MockServer) -> eod_rs::blocking::EodClient {
    eod_rs::blocking::EodClient::builder()
        .base_url(api_base(server))
        .api_key(API_KEY)
        .build()
        .unwrap()
}

type Responder = Box<dyn Fn() -> Result<RawResponse, TransportError> + Send + Sync>;

/// A session that never touches the network: it records every URL it is asked for and
/// answers with a canned response or fault.
pub struct SpySession {
    urls: Mutex<Vec<Url>>,
    respond: Responder,
}

impl SpySession {
    pub fn replying(status: u16, body: &'static str) -> Arc<Self> {
        Arc::new(Self {
            urls: Mutex::new(Vec::new()),
            respond: Box::new(move || Ok(RawResponse::new(status, None, body))),
        })
    }

    pub fn failing(fault: fn() -> TransportError) -> Arc<Self> {
        Arc::new(Self {
            urls: Mutex::new(Vec::new()),
            respond: Box::new(move || Err(fault())),
        })
    }

    pub fn calls(&self) -> usize {
        self.urls.lock().unwrap().len()
    }

    pub fn urls(&self) -> Vec<Url> {
        self.urls.lock().unwrap().clone()
    }

    fn record(&self, url: &Url) -> Result<RawResponse, TransportError> {
        self.urls.lock().unwrap().push(url.clone());
        (self.respond)()
    }
}

impl Session for SpySession {
    fn fetch(&self, url: &Url) -> Result<RawResponse, TransportError> {
        self.record(url)
    }
}

impl AsyncSession for SpySession {
    fn fetch<'a>(&'a self, url: &'a Url) -> BoxFuture<'a, Result<RawResponse, TransportError>> {
        let out = self.record(url);
        Box::pin(async move { out })
    }
}

pub fn spy_client(spy: &Arc<SpySession>, api_key: Option<&str>) -> eod_rs::EodClient {
    let mut b = eod_rs::EodClient::builder()
        .base_url(Url::parse("https://spy.invalid/api").unwrap())
        .session(spy.clone());
    if let Some(k) = api_key {
        b = b.api_key(k);
    }
    b.build().unwrap()
}

pub fn blocking_spy_client(
    spy: &Arc<SpySession>,
    api_key: Option<&str>,
) -> eod_rs::blocking::EodClient {
    let mut b = eod_rs::blocking::EodClient::builder()
        .base_url(Url::parse("https://spy.invalid/api").unwrap())
        .session(spy.clone());
    if let Some(k) = api_key {
        b = b.api_key(k);
    }
    b.build().unwrap()
}
