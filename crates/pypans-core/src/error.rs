//! The error type returned by every public operation of this crate.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Either a rejected input or a failed workspace mutation.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PansError {
    /// Errors from the domain layer (invalid input, catalog invariants).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Errors from the application layer (workspace mutation failures).
    #[error(transparent)]
    Application(#[from] ApplicationError),
}

impl PansError {
    /// Hints for the operator.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Conflict,
    NotFound,
    Internal,
}

/// Convenient result type alias.
pub type PansResult<T> = Result<T, PansError>;

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::domain::TemplateKind;

    #[test]
    fn directory_exists_is_a_conflict() {
        let err: PansError = ApplicationError::DirectoryExists {
            path: PathBuf::from("bomber"),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Conflict);
        assert_eq!(err.to_string(), "Directory already exists: bomber");
    }

    #[test]
    fn missing_template_names_the_template() {
        let err: PansError = ApplicationError::TemplateSourceMissing {
            template: TemplateKind::License,
            path: PathBuf::from("/opt/pypans/templates/LICENSE.md"),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::NotFound);
        assert!(err.to_string().contains("'license'"));
        assert!(err.suggestions().iter().any(|s| s.contains("LICENSE.md")));
    }

    #[test]
    fn unknown_template_is_internal() {
        let err: PansError = DomainError::UnknownTemplate { name: "x".into() }.into();
        assert_eq!(err.category(), ErrorCategory::Internal);
    }

    #[test]
    fn invalid_name_is_validation() {
        let err: PansError = DomainError::InvalidProjectName {
            name: "1x".into(),
            reason: "bad".into(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert!(!err.suggestions().is_empty());
    }
}
