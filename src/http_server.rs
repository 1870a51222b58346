use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{DefaultBodyLimit, State},
    http::HeaderMap,
    routing::{get, post},
    Json, Router,
};
use chrono::{SecondsFormat, Utc};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::auth;
use crate::config::Config;
use crate::error::ApiError;
use crate::store::RecordStore;
use crate::types::{HealthStatus, StoredWebhook, WebhookAck};

/// Hard cap on request bodies. Larger requests are rejected before the
/// handler runs.
const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Read-only state shared by all requests.
#[derive(Clone)]
pub struct ServerState {
    pub config: Arc<Config>,
    pub store: RecordStore,
}

/// Build the application router: the authenticated ingestion route and the
/// open health route, with request tracing and the body-size cap applied.
pub fn create_router(state: ServerState) -> Router {
    Router::new()
        .route("/webhook", post(handle_webhook))
        .route("/health", get(handle_health))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind the configured address and serve until CTRL+C or SIGTERM.
pub async fn serve(state: ServerState) -> std::io::Result<()> {
    let addr = state.config.listen_addr();
    let app = create_router(state);

    let listener = TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

/// POST /webhook: authenticate, parse the body as JSON, persist the record,
/// acknowledge. Exactly one file is created per success; none on failure.
async fn handle_webhook(
    State(state): State<ServerState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<WebhookAck>, ApiError> {
    auth::authenticate(&headers, &state.config.bearer_token)?;

    let payload: serde_json::Value =
        serde_json::from_slice(&body).map_err(ApiError::InvalidJson)?;

    let received_at = Utc::now();
    let timestamp = received_at.to_rfc3339_opts(SecondsFormat::Millis, true);

    let record = StoredWebhook {
        timestamp: timestamp.clone(),
        headers: extract_headers(&headers),
        payload,
    };

    let filename = match state.store.save(&record, received_at).await {
        Ok(filename) => filename,
        Err(e) => {
            error!(error = %e, "failed to persist webhook record");
            return Err(ApiError::Storage(e));
        }
    };

    info!(filename = %filename, "webhook received and saved");

    Ok(Json(WebhookAck {
        success: true,
        message: "Webhook received and saved".to_string(),
        filename,
        timestamp,
    }))
}

/// GET /health: always healthy while the process is serving.
async fn handle_health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "healthy".to_string(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}

/// Collect request headers into the shape records carry. Values that are
/// not valid UTF-8 are skipped.
fn extract_headers(headers: &HeaderMap) -> HashMap<String, String> {
    headers
        .iter()
        .filter_map(|(name, value)| {
            value.to_str().ok().map(|v| (name.as_str().to_string(), v.to_string()))
        })
        .collect()
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {e}");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => tracing::error!("failed to install SIGTERM handler: {e}"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("received CTRL+C, shutting down"),
        () = terminate => info!("received SIGTERM, shutting down"),
    }
}
