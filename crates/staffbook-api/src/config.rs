//! Server configuration.
//!
//! Every setting can come from a flag or an environment variable; the
//! binary loads a `.env` file first so local overrides work without
//! exporting anything.

use clap::Parser;
use staffbook_storage::StoreConfig;
use staffbook_storage::config::DEFAULT_STORE_ADDRESS;

/// Default listening port.
pub const DEFAULT_PORT: u16 = 5000;

/// Default prefix under which `/employees` is mounted.
pub const DEFAULT_BASE_PATH: &str = "/api";

/// Staffbook API server settings.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "staffbook-server")]
#[command(about = "Serve the Staffbook employee records API", long_about = None)]
#[command(version)]
pub struct ServerConfig {
    /// Interface to listen on
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Store address: `memory://`, `redb://<path>`, or a bare file path
    #[arg(long, env = "STAFFBOOK_STORE", default_value = DEFAULT_STORE_ADDRESS)]
    pub store: StoreConfig,

    /// Path prefix for the employee routes
    #[arg(long, env = "STAFFBOOK_BASE_PATH", default_value = DEFAULT_BASE_PATH)]
    pub base_path: String,
}

impl ServerConfig {
    /// `host:port` string suitable for binding.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// The base path with a single leading slash and no trailing slash.
    ///
    /// Returns an empty string when routes should sit at the root.
    pub fn normalized_base_path(&self) -> String {
        let trimmed = self.base_path.trim().trim_matches('/');
        if trimmed.is_empty() {
            String::new()
        } else {
            format!("/{trimmed}")
        }
    }

    /// Same settings with an in-memory store, for tests and demos.
    pub fn in_memory() -> Self {
        Self {
            store: StoreConfig::Memory,
            ..Self::default()
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            store: StoreConfig::default(),
            base_path: DEFAULT_BASE_PATH.to_string(),
        }
    }
}
