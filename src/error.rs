//! Error types for the annotation session core.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by session controller operations.
///
/// Every variant is a local, recoverable condition: a rejected operation
/// leaves the session state untouched and the session stays usable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// An index outside `[0, len)` was passed to a navigation or item
    /// operation.
    #[error("index {index} out of range for {len} item(s)")]
    OutOfRange { index: usize, len: usize },

    /// A label reference that does not resolve in the session's label set.
    #[error("unknown label: {0}")]
    UnknownLabel(String),

    /// An operation requiring a current item was invoked on a zero-item
    /// dataset.
    #[error("session has no items")]
    EmptySession,

    /// A mutating operation arrived after the session was finalized.
    #[error("session already finalized")]
    AlreadyFinalized,
}

/// Errors raised while reading or writing datasets, label configs, session
/// config files, or export files.
#[derive(Debug, Error)]
pub enum FileError {
    #[error("{}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("label config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("session config: {0}")]
    TomlRead(#[from] toml::de::Error),

    #[error("session config: {0}")]
    TomlWrite(#[from] toml::ser::Error),

    #[error("no label config found")]
    MissingLabels,
}
