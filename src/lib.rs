//! Minimal webhook ingestion service.
//!
//! Accepts authenticated webhook POSTs, persists each payload together with
//! the request headers as a uniquely named JSON file under a storage
//! directory, and acknowledges receipt. A companion `/health` endpoint
//! reports liveness without authentication.

pub mod auth;
pub mod config;
pub mod error;
pub mod http_server;
pub mod store;
pub mod types;

pub use config::Config;
pub use http_server::{create_router, serve, ServerState};
pub use store::RecordStore;
