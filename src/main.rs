use std::sync::Arc;

use anyhow::Result;
use tracing::{info, warn};

use webhook_sink::{Config, RecordStore, ServerState};

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let config = Config::from_env();
    // The token itself is deliberately kept out of the logs.
    info!(
        port = config.port,
        data_dir = %config.data_dir.display(),
        "starting webhook-sink"
    );
    if config.uses_default_token() {
        warn!("BEARER_TOKEN is not set; the built-in placeholder token is in effect");
    }

    let store = RecordStore::new(config.data_dir.clone());
    // Directory creation failure is non-fatal; writes fail per-request with
    // a 500 until storage becomes usable.
    if let Err(e) = store.ensure_dir().await {
        warn!(
            data_dir = %config.data_dir.display(),
            error = %e,
            "could not create data directory"
        );
    }

    let state = ServerState { config: Arc::new(config), store };
    webhook_sink::serve(state).await?;

    info!("webhook-sink stopped");
    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,webhook_sink=debug"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .init();
}
