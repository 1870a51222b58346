use std::net::SocketAddr;
use std::path::PathBuf;

/// Placeholder accepted when `BEARER_TOKEN` is unset. Real deployments must
/// override it.
pub const DEFAULT_BEARER_TOKEN: &str = "your-secret-token";

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_DATA_DIR: &str = "/app/data";

/// Process-wide configuration, read once at startup and handed to every
/// handler through the router state. Never mutated after load.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub bearer_token: String,
    pub data_dir: PathBuf,
}

impl Config {
    /// Load from `PORT`, `BEARER_TOKEN` and `DATA_DIR`, defaulting each
    /// value when the variable is absent or unparseable.
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        let bearer_token =
            std::env::var("BEARER_TOKEN").unwrap_or_else(|_| DEFAULT_BEARER_TOKEN.to_string());

        let data_dir = std::env::var("DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_DIR));

        Self { port, bearer_token, data_dir }
    }

    /// Bind address: all interfaces on the configured port.
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }

    /// True while the built-in placeholder token is still in effect.
    pub fn uses_default_token(&self) -> bool {
        self.bearer_token == DEFAULT_BEARER_TOKEN
    }
}
