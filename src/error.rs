//! Application-wide error types.
//!
//! This module defines the main error type hierarchy for the crate, allowing
//! for type-safe error handling throughout the codebase.

pub use crate::catalog::CatalogError;
pub use crate::config::ConfigError;
pub use crate::snapshot::SnapshotError;

/// Main application error type.
///
/// This is the top-level error type that encompasses all error types
/// in the crate. It uses `thiserror` for automatic error derivation
/// and conversion.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Snapshot loading errors
    #[error("Snapshot error: {0}")]
    Snapshot(#[from] SnapshotError),

    /// Catalog token errors
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Logger initialization errors
    #[error("Logger error: {0}")]
    Logger(#[from] log::SetLoggerError),

    /// Output serialization errors
    #[error("Output error: {0}")]
    Output(#[from] serde_json::Error),

    /// Subcommand the inspector does not know
    #[error("Unknown command: {0}")]
    UnknownCommand(String),
}

/// Convenience type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;
