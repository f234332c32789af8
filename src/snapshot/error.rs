//! Snapshot loading error types.

use std::path::PathBuf;

/// Errors that can occur while building a state snapshot from serialized data.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    /// Failed to read snapshot file
    #[error("Failed to read snapshot from {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Snapshot is not a valid JSON state tree
    #[error("Malformed JSON snapshot: {0}")]
    Json(#[from] serde_json::Error),

    /// Snapshot is not a valid YAML state tree
    #[error("Malformed YAML snapshot: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// File extension names no supported format
    #[error("Unsupported snapshot format: {path}")]
    UnsupportedFormat { path: PathBuf },
}
