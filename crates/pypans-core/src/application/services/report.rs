//! What each build phase wrote, for display and machine-readable output.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

/// The three build phases, in their realistic run order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Package,
    Tests,
    Meta,
}

impl Phase {
    pub const ALL: [Phase; 3] = [Self::Package, Self::Tests, Self::Meta];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Package => "package",
            Self::Tests => "tests",
            Self::Meta => "meta",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Workspace-relative paths a phase created or wrote, in write order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhaseReport {
    pub phase: Phase,
    pub created: Vec<PathBuf>,
}

impl PhaseReport {
    pub fn new(phase: Phase) -> Self {
        Self {
            phase,
            created: Vec::new(),
        }
    }

    pub(crate) fn record(&mut self, path: impl Into<PathBuf>) {
        self.created.push(path.into());
    }

    pub fn len(&self) -> usize {
        self.created.len()
    }

    pub fn is_empty(&self) -> bool {
        self.created.is_empty()
    }
}
