//! The fixed template catalog.
//!
//! # Design
//!
//! The catalog is a compile-time array, not a directory scan. Every template
//! pypans ships has exactly one [`TemplateKind`] variant and one
//! [`TemplateEntry`] in [`CATALOG`]; the order of that array is the copy order
//! used by the meta builder, so it must stay stable.
//!
//! # Adding a template
//!
//! 1. Add the enum variant and its `as_str` / `relative_path` arms
//! 2. Append an entry to [`CATALOG`]
//! 3. If the file carries placeholders, register them in `substitution.rs`

use std::fmt;
use std::str::FromStr;

use crate::domain::error::DomainError;

/// Logical name of a shipped template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateKind {
    Flake,
    Pydoc,
    Pylint,
    Mypy,
    Black,
    Travis,
    Pytest,
    Analyser,
    Icon,
    Gitignore,
    Authors,
    Changelog,
    Requirements,
    DevRequirements,
    Readme,
    License,
    Manifest,
    Pypirc,
    Runtime,
    Setup,
    Procfile,
}

impl TemplateKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Flake => "flake",
            Self::Pydoc => "pydoc",
            Self::Pylint => "pylint",
            Self::Mypy => "mypy",
            Self::Black => "black",
            Self::Travis => "travis",
            Self::Pytest => "pytest",
            Self::Analyser => "analyser",
            Self::Icon => "icon",
            Self::Gitignore => "gitignore",
            Self::Authors => "authors",
            Self::Changelog => "changelog",
            Self::Requirements => "requirements",
            Self::DevRequirements => "dev-requirements",
            Self::Readme => "readme",
            Self::License => "license",
            Self::Manifest => "manifest",
            Self::Pypirc => "pypirc",
            Self::Runtime => "runtime",
            Self::Setup => "setup",
            Self::Procfile => "procfile",
        }
    }

    /// Path of the template, relative to both the template root and the
    /// workspace root.
    pub const fn relative_path(&self) -> &'static str {
        match self {
            Self::Flake => ".flake8",
            Self::Pydoc => ".pydocstyle",
            Self::Pylint => ".pylintrc",
            Self::Mypy => "mypy.ini",
            Self::Black => "pyproject.toml",
            Self::Travis => ".travis.yml",
            Self::Pytest => "pytest.ini",
            Self::Analyser => "analyse-source-code.sh",
            Self::Icon => "icon.png",
            Self::Gitignore => ".gitignore",
            Self::Authors => "AUTHORS.md",
            Self::Changelog => "CHANGELOG.md",
            Self::Requirements => "requirements.txt",
            Self::DevRequirements => "requirements-dev.txt",
            Self::Readme => "README.md",
            Self::License => "LICENSE.md",
            Self::Manifest => "MANIFEST.in",
            Self::Pypirc => ".pypirc",
            Self::Runtime => "runtime.txt",
            Self::Setup => "setup.py",
            Self::Procfile => "Procfile",
        }
    }

    /// Binary assets are copied verbatim and never rewritten.
    pub const fn is_binary(&self) -> bool {
        matches!(self, Self::Icon)
    }

    /// Templates that must be executable after materialization.
    pub const fn is_executable(&self) -> bool {
        matches!(self, Self::Analyser)
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemplateKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CATALOG
            .iter()
            .map(|entry| entry.kind)
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| DomainError::UnknownTemplate { name: s.into() })
    }
}

/// One catalog record: logical name plus relative output path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateEntry {
    pub kind: TemplateKind,
    pub relative_path: &'static str,
}

impl TemplateEntry {
    const fn of(kind: TemplateKind) -> Self {
        Self {
            kind,
            relative_path: kind.relative_path(),
        }
    }
}

/// Every template pypans ships, in copy order.
pub const CATALOG: [TemplateEntry; 21] = [
    TemplateEntry::of(TemplateKind::Flake),
    TemplateEntry::of(TemplateKind::Pydoc),
    TemplateEntry::of(TemplateKind::Pylint),
    TemplateEntry::of(TemplateKind::Mypy),
    TemplateEntry::of(TemplateKind::Black),
    TemplateEntry::of(TemplateKind::Travis),
    TemplateEntry::of(TemplateKind::Pytest),
    TemplateEntry::of(TemplateKind::Analyser),
    TemplateEntry::of(TemplateKind::Icon),
    TemplateEntry::of(TemplateKind::Gitignore),
    TemplateEntry::of(TemplateKind::Authors),
    TemplateEntry::of(TemplateKind::Changelog),
    TemplateEntry::of(TemplateKind::Requirements),
    TemplateEntry::of(TemplateKind::DevRequirements),
    TemplateEntry::of(TemplateKind::Readme),
    TemplateEntry::of(TemplateKind::License),
    TemplateEntry::of(TemplateKind::Manifest),
    TemplateEntry::of(TemplateKind::Pypirc),
    TemplateEntry::of(TemplateKind::Runtime),
    TemplateEntry::of(TemplateKind::Setup),
    TemplateEntry::of(TemplateKind::Procfile),
];

/// The catalog in copy order.
pub fn entries() -> &'static [TemplateEntry] {
    &CATALOG
}

/// Resolve a logical template name to its relative path.
pub fn resolve(logical_name: &str) -> Result<&'static str, DomainError> {
    logical_name
        .parse::<TemplateKind>()
        .map(|kind| kind.relative_path())
}
