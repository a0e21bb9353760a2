//! # Minister Core Library
//!
//! This library provides the core logic for Minister, a small utility that
//! broadcasts a work status (online / leave / offline) to a Slack channel
//! through an incoming webhook. The `minister` CLI is a thin layer over the
//! same library.
//!
//! ## Architecture
//!
//! - **Status**: the three presence states and their menu-bar icon
//! - **Clock**: back-time rounding to the next half hour and the clock glyph table
//! - **Actions**: the fixed message templates and the status each one sets
//! - **Storage**: SQLite key-value state and TOML-based configuration
//! - **Integrations**: the Slack incoming-webhook notifier
//! - **Dispatch**: send-then-commit status transitions
//!
//! ## Key Components
//!
//! - [`StatusDispatcher`]: Sends a status message and records the new status
//! - [`StateStore`]: Key-value seam for persisted state
//! - [`Database`]: SQLite-backed [`StateStore`]
//! - [`Config`]: Application configuration management
//! - [`Notifier`]: Trait for outbound status delivery

pub mod action;
pub mod clock;
pub mod dispatch;
pub mod error;
pub mod integrations;
pub mod menu;
pub mod status;
pub mod storage;

pub use action::{Action, GoingHome};
pub use clock::{back_time, clock_glyph, glyph_for, LeaveDuration};
pub use dispatch::{DispatchOutcome, StatusDispatcher};
pub use error::{ConfigError, CoreError, NotifyError, StoreError, ValidationError};
pub use integrations::{Notifier, SlackWebhook};
pub use menu::{build_menu, Menu, MenuAction, MenuEntry, MenuSection};
pub use status::{Status, StatusIcon};
pub use storage::{Config, Database, HttpConfig, MemoryStore, StateStore};
