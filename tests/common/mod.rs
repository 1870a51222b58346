//! Shared helpers for integration tests.
#![allow(dead_code)] // not every test binary uses every helper

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header::AUTHORIZATION, Request},
    Router,
};
use serde_json::Value;
use tempfile::TempDir;
use webhook_sink::{create_router, Config, RecordStore, ServerState};

pub const TEST_TOKEN: &str = "test-secret-token";

/// Router wired to a fresh temporary storage directory. The returned
/// `TempDir` guard must stay alive for the duration of the test.
pub fn test_app() -> (Router, TempDir) {
    let data_dir = TempDir::new().expect("create temp dir");
    let config = Config {
        port: 0,
        bearer_token: TEST_TOKEN.to_string(),
        data_dir: data_dir.path().to_path_buf(),
    };
    let store = RecordStore::new(config.data_dir.clone());
    let state = ServerState { config: Arc::new(config), store };
    (create_router(state), data_dir)
}

/// A POST /webhook request carrying the given body and, optionally, an
/// authorization header value.
pub fn webhook_request(auth_header: Option<&str>, body: &str) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri("/webhook")
        .header("content-type", "application/json");
    if let Some(value) = auth_header {
        builder = builder.header(AUTHORIZATION, value);
    }
    builder.body(Body::from(body.to_string())).expect("request build")
}

/// Names of the files currently present in the storage directory, sorted.
pub fn record_files(dir: &TempDir) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir.path())
        .expect("read data dir")
        .map(|e| e.expect("dir entry").file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

/// Parse a response body as JSON.
pub async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read response body");
    serde_json::from_slice(&bytes).expect("response body should be valid JSON")
}

/// Assert a filename follows `webhook-<millis>-<8 hex>.json`.
pub fn assert_filename_pattern(name: &str) {
    let rest = name.strip_prefix("webhook-").expect("filename should start with webhook-");
    let rest = rest.strip_suffix(".json").expect("filename should end with .json");
    let (millis, suffix) = rest.rsplit_once('-').expect("filename should have a random suffix");
    assert!(!millis.is_empty() && millis.chars().all(|c| c.is_ascii_digit()));
    assert_eq!(suffix.len(), 8);
    assert!(suffix.chars().all(|c| c.is_ascii_hexdigit()));
}
