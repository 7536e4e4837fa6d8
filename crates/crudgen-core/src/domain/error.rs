use thiserror::Error;

use crate::error::ErrorCategory;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (for retry logic)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    #[error("Invalid resource name '{name}': {reason}")]
    InvalidResourceName { name: String, reason: String },

    #[error("Invalid placeholder name '{0}'")]
    InvalidPlaceholder(String),
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidResourceName { name, reason } => vec![
                format!("Resource name '{name}' is invalid: {reason}"),
                "Use alphanumeric characters, e.g. 'Project' or 'UserProfile'".into(),
            ],
            Self::InvalidPlaceholder(name) => vec![
                format!("'{name}' is not a known stub placeholder"),
                "Check the stub file against the documented placeholder set".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::Validation
    }
}
