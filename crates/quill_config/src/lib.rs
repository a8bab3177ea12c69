//! Parsing and validation of `quill.toml` report configuration.
//!
//! This crate reads the process-wide presentation settings used when
//! rendering diagnostic reports: the program name shown in report headers,
//! the target divider width, and whether output is colored. The settings
//! are loaded once at startup and injected into the renderer as immutable
//! values rather than living in global state.

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod types;

pub use error::ConfigError;
pub use loader::{load_config, load_config_from_str};
pub use types::{ReportConfig, ReportSettings};
