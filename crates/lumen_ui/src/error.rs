//! # UI Error Types

use thiserror::Error;

/// Errors raised while building reveal configuration.
///
/// Observation itself never fails; only malformed settings are rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UiError {
    /// A root margin string could not be parsed.
    #[error("invalid root margin {input:?}: {reason}")]
    InvalidRootMargin {
        /// The offending input.
        input: String,
        /// What was wrong with it.
        reason: String,
    },
}

/// Result type for UI configuration.
pub type UiResult<T> = Result<T, UiError>;
