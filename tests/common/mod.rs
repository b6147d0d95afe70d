//! Common test utilities

use std::sync::{Arc, Mutex};

use axum::{
    body::{to_bytes, Body},
    http::{HeaderMap, Request, StatusCode},
    Router,
};
use money_humanizer::api::{self, AppState};
use money_humanizer::{EnglishMoneyHumanizer, MoneyHumanizer};
use rust_decimal::Decimal;
use tower::util::ServiceExt;

pub const TEST_VERSION: &str = "0.0.0-test";

/// Humanizer stub that returns a fixed sentence and records its inputs
#[derive(Default)]
pub struct RecordingHumanizer {
    pub reply: String,
    pub calls: Mutex<Vec<Decimal>>,
}

impl RecordingHumanizer {
    pub fn returning(reply: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: reply.to_string(),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> Vec<Decimal> {
        self.calls.lock().unwrap().clone()
    }
}

impl MoneyHumanizer for RecordingHumanizer {
    fn humanize(&self, value: Decimal) -> String {
        self.calls.lock().unwrap().push(value);
        self.reply.clone()
    }
}

/// Humanizer stub that always panics
pub struct PanickingHumanizer;

impl MoneyHumanizer for PanickingHumanizer {
    fn humanize(&self, _value: Decimal) -> String {
        panic!("humanizer exploded")
    }
}

/// App wired with the real English humanizer
pub fn test_app() -> Router {
    app_with(Arc::new(EnglishMoneyHumanizer::new()), true)
}

pub fn app_with(humanizer: Arc<dyn MoneyHumanizer>, docs_enabled: bool) -> Router {
    api::build_app(AppState::new(humanizer, TEST_VERSION), docs_enabled)
}

/// Send a GET request and collect status, headers and body text
pub async fn get(app: &Router, uri: &str, headers: &[(&str, &str)]) -> (StatusCode, HeaderMap, String) {
    let mut builder = Request::builder().method("GET").uri(uri);
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }
    let req = builder.body(Body::empty()).unwrap();

    let response = app.clone().oneshot(req).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    (status, headers, String::from_utf8(body.to_vec()).unwrap())
}
