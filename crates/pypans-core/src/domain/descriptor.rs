//! Project descriptor: the validated input to a build run.

use std::fmt;

use crate::domain::{error::DomainError, placeholder::residual_placeholders};

/// Name of the test package directory.
///
/// Derived from the role of the tests builder, lower-cased; it is fixed and
/// never depends on the project name.
pub const TESTS_PACKAGE: &str = "tests";

const PYTHON_KEYWORDS: &[&str] = &[
    "false", "none", "true", "and", "as", "assert", "async", "await", "break", "class",
    "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global",
    "if", "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return",
    "try", "while", "with", "yield",
];

/// Author identity written into generated files.
///
/// Values are trimmed but otherwise used verbatim; they are never parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    display_name: String,
    email: String,
}

impl Identity {
    pub fn new(display_name: impl Into<String>, email: impl Into<String>) -> Result<Self, DomainError> {
        let display_name = non_empty("username", display_name.into())?;
        let email = non_empty("email", email.into())?;
        Ok(Self {
            display_name,
            email,
        })
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Display name as an index username: lower-cased, spaces become dots.
    pub fn index_username(&self) -> String {
        self.display_name.to_lowercase().replace(' ', ".")
    }
}

fn non_empty(field: &'static str, value: String) -> Result<String, DomainError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::InvalidIdentity {
            field,
            reason: "cannot be empty".into(),
        });
    }
    // A value carrying a token would be rewritten again by a later pass.
    if let Some(token) = residual_placeholders(trimmed).first() {
        return Err(DomainError::InvalidIdentity {
            field,
            reason: format!("cannot contain the placeholder {token}"),
        });
    }
    Ok(trimmed.to_string())
}

/// Everything a build run needs to know about the project.
///
/// Immutable once constructed. The name is used verbatim as a directory name
/// and as a Python identifier, so it is validated for both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDescriptor {
    name: String,
    owner: Identity,
}

impl ProjectDescriptor {
    pub fn new(name: impl Into<String>, owner: Identity) -> Result<Self, DomainError> {
        let name = name.into();
        validate_name(&name)?;
        Ok(Self { name, owner })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn owner(&self) -> &Identity {
        &self.owner
    }
}

impl fmt::Display for ProjectDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} <{}>)",
            self.name, self.owner.display_name, self.owner.email
        )
    }
}

fn validate_name(name: &str) -> Result<(), DomainError> {
    let invalid = |reason: &str| DomainError::InvalidProjectName {
        name: name.into(),
        reason: reason.into(),
    };

    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return Err(invalid("name cannot be empty"));
    };
    if !(first.is_ascii_alphabetic() || first == '_') {
        return Err(invalid("name must start with a letter or underscore"));
    }
    if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(invalid(
            "name may only contain letters, digits, and underscores",
        ));
    }
    if PYTHON_KEYWORDS.contains(&name.to_ascii_lowercase().as_str()) {
        return Err(invalid("name is a reserved Python keyword"));
    }
    if name == TESTS_PACKAGE {
        return Err(invalid("name collides with the tests package"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ada() -> Identity {
        Identity::new("Ada Lovelace", "ada@example.com").unwrap()
    }

    #[test]
    fn valid_names_pass() {
        for name in ["bomber", "my_app", "_private", "service2", "Bomber"] {
            assert!(ProjectDescriptor::new(name, ada()).is_ok(), "failed for: {name}");
        }
    }

    #[test]
    fn empty_name_is_invalid() {
        assert!(matches!(
            ProjectDescriptor::new("", ada()),
            Err(DomainError::InvalidProjectName { .. })
        ));
    }

    #[test]
    fn names_that_are_not_identifiers_are_invalid() {
        for name in ["2fast", "my-app", "my app", "a/b", "..", "caf\u{e9}"] {
            assert!(ProjectDescriptor::new(name, ada()).is_err(), "accepted: {name}");
        }
    }

    #[test]
    fn python_keywords_are_invalid() {
        assert!(ProjectDescriptor::new("import", ada()).is_err());
        assert!(ProjectDescriptor::new("None", ada()).is_err());
    }

    #[test]
    fn tests_package_name_is_reserved() {
        let err = ProjectDescriptor::new("tests", ada()).unwrap_err();
        assert!(err.to_string().contains("tests package"));
    }

    #[test]
    fn identity_is_trimmed() {
        let id = Identity::new("  Ada Lovelace ", " ada@example.com\n").unwrap();
        assert_eq!(id.display_name(), "Ada Lovelace");
        assert_eq!(id.email(), "ada@example.com");
    }

    #[test]
    fn blank_identity_fields_are_rejected() {
        assert!(matches!(
            Identity::new("   ", "ada@example.com"),
            Err(DomainError::InvalidIdentity { field: "username", .. })
        ));
        assert!(matches!(
            Identity::new("Ada", ""),
            Err(DomainError::InvalidIdentity { field: "email", .. })
        ));
    }

    #[test]
    fn identity_cannot_smuggle_placeholders() {
        let err = Identity::new("<email>", "ada@example.com").unwrap_err();
        assert!(err.to_string().contains("<email>"));
    }

    #[test]
    fn index_username_is_dotted_lowercase() {
        assert_eq!(ada().index_username(), "ada.lovelace");
    }

    #[test]
    fn display_includes_owner() {
        let d = ProjectDescriptor::new("bomber", ada()).unwrap();
        assert_eq!(d.to_string(), "bomber (Ada Lovelace <ada@example.com>)");
    }
}
