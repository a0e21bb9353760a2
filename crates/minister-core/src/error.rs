//! Core error types for minister-core.
//!
//! This module defines the error hierarchy using thiserror. Delivery
//! failures ([`NotifyError`]) are absorbed by the dispatcher and reported
//! as an outcome, so [`CoreError`] only carries state and config failures.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for minister-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// State store errors
    #[error("State store error: {0}")]
    Store(#[from] StoreError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Key-value state store errors.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to open the backing database
    #[error("Failed to open state database at {path}: {source}")]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// Query execution failed
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Database is locked
    #[error("State database is locked")]
    Locked,

    /// A stored value could not be interpreted
    #[error("Invalid stored value for '{key}': {value}")]
    InvalidValue { key: String, value: String },
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Unknown configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Data directory could not be prepared
    #[error("Cannot prepare data directory {path}: {source}")]
    DataDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Webhook delivery errors.
#[derive(Error, Debug)]
pub enum NotifyError {
    /// Transport-level failure (DNS, connect, timeout, TLS)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status
    #[error("Webhook rejected the message: HTTP {status}: {body}")]
    Rejected { status: u16, body: String },

    /// The endpoint is not a usable URL
    #[error("Invalid webhook endpoint '{0}'")]
    InvalidEndpoint(String),
}

/// Validation errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Leave duration outside the fixed set
    #[error("Unsupported leave duration: {0} minutes (expected one of 30, 60, 120, 180)")]
    LeaveDuration(u32),
}

impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        match &err {
            rusqlite::Error::SqliteFailure(e, _msg) => {
                if e.code == rusqlite::ErrorCode::DatabaseLocked {
                    StoreError::Locked
                } else {
                    StoreError::QueryFailed(err.to_string())
                }
            }
            _ => StoreError::QueryFailed(err.to_string()),
        }
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
