//! # Application Error Types

use std::path::PathBuf;

use lumen_procedural::ConfigError;
use lumen_ui::UiError;
use thiserror::Error;

/// Errors surfaced by the LUMEN application layer.
#[derive(Error, Debug)]
pub enum LumenError {
    /// The config file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML or has unknown keys.
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Scene settings were rejected.
    #[error(transparent)]
    Scene(#[from] ConfigError),

    /// Preview run settings were rejected.
    #[error("invalid preview settings: {0}")]
    InvalidPreview(String),

    /// Reveal settings were rejected.
    #[error(transparent)]
    Ui(#[from] UiError),
}

/// Result type for application operations.
pub type LumenResult<T> = Result<T, LumenError>;
