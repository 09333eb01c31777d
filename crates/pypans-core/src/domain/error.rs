//! Errors raised before anything touches the workspace.

use thiserror::Error;

/// Rejected input or an unknown catalog name.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    #[error("Invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: String },

    #[error("Invalid {field}: {reason}")]
    InvalidIdentity { field: &'static str, reason: String },

    /// A logical template name not present in the catalog.
    #[error("Unknown template '{name}'")]
    UnknownTemplate { name: String },
}

impl DomainError {
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidProjectName { name, reason } => vec![
                format!("Project name '{}' is invalid: {}", name, reason),
                "The name becomes both a directory and a Python package".into(),
                "Use lowercase letters, digits, and underscores".into(),
                "Start with a letter or underscore".into(),
                "Examples: bomber, my_app, service2".into(),
            ],
            Self::InvalidIdentity { field, .. } => vec![
                format!("Provide a non-empty {}", field),
                "It is written verbatim into README.md, AUTHORS.md, and LICENSE.md".into(),
            ],
            Self::UnknownTemplate { name } => vec![
                format!("'{}' is not part of the template catalog", name),
                "This is a bug in pypans, please report it".into(),
            ],
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidProjectName { .. } | Self::InvalidIdentity { .. } => {
                ErrorCategory::Validation
            }
            Self::UnknownTemplate { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
