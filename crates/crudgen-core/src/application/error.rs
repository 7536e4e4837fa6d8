//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Note what is deliberately *not* here: a missing table degrades to an
//! empty rule set, and an already-registered route is a no-op notice -
//! neither is an error.

use std::path::PathBuf;
use thiserror::Error;

use crate::application::ports::StubId;
use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// A stub could not be loaded. Fatal for the single artifact being
    /// rendered; other artifacts in the run are still attempted.
    #[error("Stub not found: {stub}")]
    StubNotFound { stub: StubId },

    /// A filesystem write could not complete.
    #[error("Write failed at {path}: {reason}")]
    WriteFailed { path: PathBuf, reason: String },

    /// A filesystem read or directory operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// The schema source itself failed (distinct from a missing table,
    /// which is not an error). `origin` names the table or schema file.
    /// Not called `source`: thiserror reserves that name for a chained
    /// error value, and this is plain data.
    #[error("Schema source error ({origin}): {reason}")]
    SchemaUnavailable { origin: String, reason: String },

    /// Shared adapter state is locked (poisoned lock, etc.).
    #[error("Adapter state lock error")]
    StoreLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::StubNotFound { stub } => vec![
                format!("No stub available for '{stub}'"),
                "Check your --stubs directory, or omit it to use the built-in stubs".into(),
            ],
            Self::WriteFailed { path, .. } | Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::SchemaUnavailable { origin, .. } => vec![
                format!("Could not read schema metadata from '{origin}'"),
                "Check the --schema file path and format".into(),
            ],
            Self::StoreLockError => vec!["Try again in a moment".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::StubNotFound { .. } => ErrorCategory::NotFound,
            Self::WriteFailed { .. } | Self::FilesystemError { .. } | Self::StoreLockError => {
                ErrorCategory::Internal
            }
            Self::SchemaUnavailable { .. } => ErrorCategory::Configuration,
        }
    }
}
