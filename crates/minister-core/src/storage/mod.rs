mod config;
pub mod database;
mod memory;

pub use config::{Config, HttpConfig, LogConfig};
pub use database::Database;
pub use memory::MemoryStore;

use std::path::PathBuf;

use crate::error::{ConfigError, StoreError};
use crate::status::Status;

/// Key holding the Slack incoming-webhook URL. Empty means unconfigured.
pub const WEBHOOK_ENDPOINT_KEY: &str = "minister-webhook-endpoint";
/// Key holding the last successfully broadcast [`Status`].
pub const STATUS_KEY: &str = "minister-status";

/// Key-value store for process-wide persisted state.
///
/// The dispatcher reads both keys at action time and writes only
/// [`STATUS_KEY`]; the preferences surface owns [`WEBHOOK_ENDPOINT_KEY`].
pub trait StateStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Configured endpoint, or an empty string.
    fn webhook_endpoint(&self) -> Result<String, StoreError> {
        Ok(self.get(WEBHOOK_ENDPOINT_KEY)?.unwrap_or_default())
    }

    fn set_webhook_endpoint(&self, endpoint: &str) -> Result<(), StoreError> {
        self.set(WEBHOOK_ENDPOINT_KEY, endpoint.trim())
    }

    /// Current status, [`Status::Offline`] when never set.
    fn current_status(&self) -> Result<Status, StoreError> {
        match self.get(STATUS_KEY)? {
            None => Ok(Status::default()),
            Some(value) => value.parse::<Status>().map_err(|_| StoreError::InvalidValue {
                key: STATUS_KEY.to_string(),
                value,
            }),
        }
    }

    fn set_status(&self, status: Status) -> Result<(), StoreError> {
        self.set(STATUS_KEY, status.as_str())
    }
}

/// Returns the data directory location without touching the filesystem.
///
/// `MINISTER_DATA_DIR` overrides the location entirely. Otherwise this is
/// `~/.config/minister[-dev]/`, with `MINISTER_ENV=dev` selecting the
/// development directory.
pub fn data_dir_path() -> PathBuf {
    match std::env::var_os("MINISTER_DATA_DIR") {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");

            let env = std::env::var("MINISTER_ENV").unwrap_or_else(|_| "production".to_string());

            if env == "dev" {
                base_dir.join("minister-dev")
            } else {
                base_dir.join("minister")
            }
        }
    }
}

/// Returns the data directory, creating it if needed.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let dir = data_dir_path();
    std::fs::create_dir_all(&dir).map_err(|source| ConfigError::DataDir {
        path: dir.clone(),
        source,
    })?;
    Ok(dir)
}
