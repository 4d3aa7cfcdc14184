//! Typed error variants for the term-views-config crate.
//!
//! `Config::load_from` and friends return `anyhow::Result`; a `ConfigError`
//! can be recovered with `downcast_ref` when a caller needs to tell a missing
//! permission apart from a malformed file.

use thiserror::Error;

/// Errors that can occur when loading, saving or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An I/O error occurred reading or writing a config file.
    #[error("I/O error reading config: {0}")]
    Io(#[from] std::io::Error),

    /// A config file contained invalid YAML.
    #[error("YAML parse error in config: {0}")]
    Parse(#[from] serde_yaml_ng::Error),

    /// A field value failed semantic validation.
    #[error("Config validation error: {0}")]
    Validation(String),
}
