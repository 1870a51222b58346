use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tracing::debug;
use uuid::Uuid;

use crate::error::StoreError;
use crate::types::StoredWebhook;

/// Writes webhook records beneath a base directory, one file per record.
/// Records are only ever created, never mutated or deleted.
#[derive(Debug, Clone)]
pub struct RecordStore {
    data_dir: PathBuf,
}

impl RecordStore {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Create the base directory if it does not exist yet. Idempotent.
    pub async fn ensure_dir(&self) -> std::io::Result<()> {
        tokio::fs::create_dir_all(&self.data_dir).await
    }

    /// Persist one record and return the filename it was written under.
    ///
    /// The record lands as pretty-printed JSON. It is written to a temp
    /// name first and renamed into place, so readers never observe a
    /// partially written file.
    pub async fn save(
        &self,
        record: &StoredWebhook,
        received_at: DateTime<Utc>,
    ) -> Result<String, StoreError> {
        let filename = generate_filename(received_at);
        let json = serde_json::to_vec_pretty(record)?;

        let final_path = self.data_dir.join(&filename);
        let tmp_path = self.data_dir.join(format!("{filename}.tmp"));

        tokio::fs::write(&tmp_path, &json)
            .await
            .map_err(|e| StoreError::Write { filename: filename.clone(), source: e })?;

        if let Err(e) = tokio::fs::rename(&tmp_path, &final_path).await {
            // Leave no stray temp file behind on a failed rename.
            let _ = tokio::fs::remove_file(&tmp_path).await;
            return Err(StoreError::Write { filename, source: e });
        }

        debug!(filename = %filename, "record written");
        Ok(filename)
    }
}

/// `webhook-<unix millis>-<8 hex chars>.json`. The suffix comes from four
/// random bytes of a v4 UUID, which keeps same-millisecond writes from
/// colliding.
pub fn generate_filename(received_at: DateTime<Utc>) -> String {
    let suffix = hex::encode(&Uuid::new_v4().as_bytes()[..4]);
    format!("webhook-{}-{}.json", received_at.timestamp_millis(), suffix)
}
