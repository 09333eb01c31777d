//! Placeholder tokens and per-file token maps.
//!
//! Placeholders are literal substrings like `<package>`. There is no syntax
//! beyond that: substitution is a plain find/replace per token.

use std::collections::BTreeMap;
use std::fmt;

/// A placeholder token recognised in shipped templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Placeholder {
    Package,
    Username,
    Email,
    Year,
    Date,
    Version,
}

impl Placeholder {
    pub const ALL: [Placeholder; 6] = [
        Self::Package,
        Self::Username,
        Self::Email,
        Self::Year,
        Self::Date,
        Self::Version,
    ];

    /// The literal token as it appears in template text.
    pub const fn token(&self) -> &'static str {
        match self {
            Self::Package => "<package>",
            Self::Username => "<username>",
            Self::Email => "<email>",
            Self::Year => "<year>",
            Self::Date => "<date>",
            Self::Version => "<version>",
        }
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Placeholder → replacement mapping for a single file.
///
/// Iteration order is the placeholder order, which keeps rewrites
/// deterministic; correctness does not depend on it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenMap {
    entries: BTreeMap<Placeholder, String>,
}

impl TokenMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, placeholder: Placeholder, value: impl Into<String>) -> Self {
        self.insert(placeholder, value);
        self
    }

    pub fn insert(&mut self, placeholder: Placeholder, value: impl Into<String>) {
        self.entries.insert(placeholder, value.into());
    }

    pub fn get(&self, placeholder: Placeholder) -> Option<&str> {
        self.entries.get(&placeholder).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Placeholder, &str)> {
        self.entries.iter().map(|(p, v)| (*p, v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Apply every mapping to an in-memory buffer.
    pub fn apply(&self, text: &str) -> String {
        self.iter()
            .fold(text.to_string(), |acc, (p, value)| acc.replace(p.token(), value))
    }
}

/// Any known placeholder still present in `text`, declared or not.
pub fn residual_placeholders(text: &str) -> Vec<Placeholder> {
    Placeholder::ALL
        .into_iter()
        .filter(|p| text.contains(p.token()))
        .collect()
}
