//! Core types for parameter checks.
//!
//! - **Errors**: the failure taxonomy with thiserror derives
//! - **Config**: observability configuration for hosts embedding the checks

mod config;
mod errors;

pub use config::{Config, ObservabilityConfig, ENV_LOG_FORMAT, ENV_LOG_LEVEL};
pub use errors::{Error, ErrorKind, ErrorReport, Result};
