//! Store selection from a connection address.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

use crate::{EmployeeStore, Error, MemoryStore, RedbStore, Result};

/// Default address used when none is configured.
pub const DEFAULT_STORE_ADDRESS: &str = "redb://data/staffbook.redb";

/// Which backend to open, parsed from an address string.
///
/// | Address | Backend |
/// |---|---|
/// | `memory://` | [`MemoryStore`] |
/// | `redb://<path>` | [`RedbStore`] at `<path>` |
/// | `<path>` | [`RedbStore`] at `<path>` |
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreConfig {
    /// Ephemeral in-process store.
    Memory,
    /// redb database file.
    Redb {
        /// Database file location.
        path: PathBuf,
    },
}

impl StoreConfig {
    /// Parse a store address.
    pub fn parse(address: &str) -> Result<Self> {
        let address = address.trim();
        if address.is_empty() {
            return Err(Error::config("store address is empty"));
        }

        if let Some(rest) = address.strip_prefix("memory://") {
            if !rest.is_empty() {
                return Err(Error::config(format!(
                    "memory store takes no location, got '{address}'"
                )));
            }
            return Ok(StoreConfig::Memory);
        }

        let path = match address.strip_prefix("redb://") {
            Some(path) => path,
            None if address.contains("://") => {
                return Err(Error::config(format!(
                    "unsupported store scheme in '{address}' (expected memory:// or redb://)"
                )));
            }
            None => address,
        };

        if path.is_empty() {
            return Err(Error::config("redb store address has no path"));
        }
        Ok(StoreConfig::Redb {
            path: PathBuf::from(path),
        })
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig::Redb {
            path: PathBuf::from("data/staffbook.redb"),
        }
    }
}

impl FromStr for StoreConfig {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for StoreConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreConfig::Memory => f.write_str("memory://"),
            StoreConfig::Redb { path } => write!(f, "redb://{}", path.display()),
        }
    }
}

/// Open the backend described by `config`.
///
/// Parent directories of a redb file are created if missing.
pub fn open_store(config: &StoreConfig) -> Result<Arc<dyn EmployeeStore>> {
    match config {
        StoreConfig::Memory => {
            log::info!("Using in-memory employee store");
            Ok(Arc::new(MemoryStore::new()))
        }
        StoreConfig::Redb { path } => {
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                std::fs::create_dir_all(parent)?;
            }
            Ok(Arc::new(RedbStore::open(path)?))
        }
    }
}
