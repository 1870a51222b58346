use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// One received webhook as persisted on disk: capture time, the request
/// headers as observed, and the parsed body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredWebhook {
    pub timestamp: String,
    pub headers: HashMap<String, String>,
    pub payload: Value,
}

/// Acknowledgement returned to the caller once a record is on disk.
#[derive(Debug, Serialize)]
pub struct WebhookAck {
    pub success: bool,
    pub message: String,
    pub filename: String,
    pub timestamp: String,
}

/// Liveness report for `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: String,
    pub timestamp: String,
}
