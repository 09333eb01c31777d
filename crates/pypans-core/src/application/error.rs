//! Application layer errors.
//!
//! These errors represent failures while mutating the workspace, not
//! validation of the descriptor. Validation errors are `DomainError` from
//! `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::TemplateKind;
use crate::error::ErrorCategory;

/// Errors that occur while a build phase runs.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// The package or tests directory already exists.
    #[error("Directory already exists: {path}")]
    DirectoryExists { path: PathBuf },

    /// A catalog entry is missing from the template root.
    #[error("Template '{template}' is missing from the template root: {path}")]
    TemplateSourceMissing { template: TemplateKind, path: PathBuf },

    /// A file to rewrite does not exist.
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FileAccess { path: PathBuf, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::DirectoryExists { path } => vec![
                format!("Directory already exists: {}", path.display()),
                "pypans never merges into an existing project".into(),
                "Choose a different project name".into(),
                "Or run pypans from an empty directory".into(),
            ],
            Self::TemplateSourceMissing { template, path } => vec![
                format!(
                    "The '{}' template was expected at {}",
                    template,
                    path.display()
                ),
                "The pypans installation looks incomplete".into(),
                "Point --templates or $PYPANS_TEMPLATES_DIR at a full template set".into(),
            ],
            Self::FileNotFound { path } => vec![
                format!("Expected file is missing: {}", path.display()),
                "Another process may have removed it during the build".into(),
            ],
            Self::FileAccess { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check available disk space".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::DirectoryExists { .. } => ErrorCategory::Conflict,
            Self::TemplateSourceMissing { .. } => ErrorCategory::NotFound,
            Self::FileNotFound { .. } | Self::FileAccess { .. } => ErrorCategory::Internal,
        }
    }
}
