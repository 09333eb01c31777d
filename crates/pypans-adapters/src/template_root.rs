//! Template root discovery.
//!
//! The catalog is copied from a single directory on disk. This module finds
//! that directory so the CLI can fail before prompting when the installation
//! is incomplete.
//!
//! # Resolution order
//!
//! An explicit `--templates <DIR>` is used alone: if it does not hold the
//! catalog, discovery fails without trying anything else.
//!
//! Otherwise candidates are probed in this priority order, stopping at the
//! first directory that holds at least one catalog file:
//!
//! 1. **`templates.local_path`** - from the config file or environment.
//! 2. **`$PYPANS_TEMPLATES_DIR`** - environment variable override.
//! 3. **`<executable-dir>/templates`** - sibling to the `pypans` binary.
//! 4. **`<executable-dir>/../share/pypans/templates`** - packaged installs.
//! 5. **the source tree's `templates/`** - development builds.
//!
//! The current working directory is never a candidate: it is the workspace
//! being generated into.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info, instrument, warn};

use pypans_core::domain::catalog;

/// Environment variable naming a template directory.
pub const TEMPLATES_DIR_ENV: &str = "PYPANS_TEMPLATES_DIR";

/// No candidate directory held the template catalog.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("No template directory found (searched {} locations)", searched.len())]
pub struct TemplateRootNotFound {
    pub searched: Vec<PathBuf>,
}

/// Explicit sources consulted before the built-in locations.
#[derive(Debug, Clone, Default)]
pub struct TemplateRootSources {
    /// `--templates` flag.
    pub explicit: Option<PathBuf>,
    /// `templates.local_path` from configuration.
    pub configured: Option<PathBuf>,
    /// Value of [`TEMPLATES_DIR_ENV`].
    pub environment: Option<PathBuf>,
}

impl TemplateRootSources {
    /// Sources with the environment variable read from the process.
    pub fn from_env(explicit: Option<PathBuf>, configured: Option<PathBuf>) -> Self {
        Self {
            explicit,
            configured,
            environment: std::env::var_os(TEMPLATES_DIR_ENV)
                .filter(|value| !value.is_empty())
                .map(PathBuf::from),
        }
    }

    /// Ordered candidate directories.
    ///
    /// With an explicit directory, that directory is the only candidate.
    pub fn candidates(&self) -> Vec<PathBuf> {
        if let Some(explicit) = &self.explicit {
            debug!(path = %explicit.display(), origin = "--templates", "template root candidate");
            return vec![explicit.clone()];
        }

        let mut paths = Vec::with_capacity(5);

        for (origin, path) in [
            ("config", &self.configured),
            (TEMPLATES_DIR_ENV, &self.environment),
        ] {
            if let Some(path) = path {
                debug!(path = %path.display(), origin, "template root candidate");
                paths.push(path.clone());
            }
        }

        if let Some(exe_dir) = exe_dir() {
            paths.push(exe_dir.join("templates"));
            paths.push(exe_dir.join("../share/pypans/templates"));
        }

        paths.push(source_tree_templates());
        paths
    }

    /// Find the first candidate holding the catalog.
    #[instrument(skip(self))]
    pub fn discover(&self) -> Result<PathBuf, TemplateRootNotFound> {
        let searched = self.candidates();

        if let Some(found) = searched.iter().find(|path| holds_catalog(path)) {
            info!(path = %found.display(), "template root resolved");
            return Ok(found.clone());
        }

        warn!(count = searched.len(), "no template root found");
        Err(TemplateRootNotFound { searched })
    }
}

/// A directory counts as a template root if any catalog file is present.
///
/// Missing individual entries are reported later, by the build itself.
fn holds_catalog(path: &Path) -> bool {
    if !path.is_dir() {
        debug!(path = %path.display(), "not a directory, skipping");
        return false;
    }
    catalog::entries()
        .iter()
        .any(|entry| path.join(entry.relative_path).is_file())
}

fn exe_dir() -> Option<PathBuf> {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
}

fn source_tree_templates() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../templates")
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn seed(root: &Path) {
        fs::write(root.join("README.md"), "# <package>\n").unwrap();
    }

    #[test]
    fn configured_comes_before_environment() {
        let sources = TemplateRootSources {
            explicit: None,
            configured: Some("/b".into()),
            environment: Some("/c".into()),
        };
        let candidates = sources.candidates();
        assert_eq!(&candidates[..2], &[PathBuf::from("/b"), PathBuf::from("/c")]);
    }

    #[test]
    fn explicit_directory_is_the_only_candidate() {
        let sources = TemplateRootSources {
            explicit: Some("/a".into()),
            configured: Some("/b".into()),
            environment: Some("/c".into()),
        };
        assert_eq!(sources.candidates(), vec![PathBuf::from("/a")]);
    }

    #[test]
    fn missing_explicit_directory_does_not_fall_back() {
        let real = TempDir::new().unwrap();
        seed(real.path());
        let missing = real.path().join("not-here");

        let sources = TemplateRootSources {
            explicit: Some(missing.clone()),
            configured: Some(real.path().to_path_buf()),
            environment: Some(real.path().to_path_buf()),
        };
        assert_eq!(sources.discover(), Err(TemplateRootNotFound {
            searched: vec![missing]
        }));
    }

    #[test]
    fn explicit_directory_without_catalog_files_is_rejected() {
        let empty = TempDir::new().unwrap();
        let sources = TemplateRootSources {
            explicit: Some(empty.path().to_path_buf()),
            configured: None,
            environment: None,
        };
        assert!(sources.discover().is_err());
    }

    #[test]
    fn source_tree_is_the_last_candidate() {
        let candidates = TemplateRootSources::default().candidates();
        assert_eq!(candidates.last(), Some(&source_tree_templates()));
        assert!(!candidates.contains(&PathBuf::from("templates")));
    }

    #[test]
    fn empty_directory_is_skipped() {
        let empty = TempDir::new().unwrap();
        let real = TempDir::new().unwrap();
        seed(real.path());

        let sources = TemplateRootSources {
            explicit: None,
            configured: Some(empty.path().to_path_buf()),
            environment: Some(real.path().to_path_buf()),
        };
        assert_eq!(sources.discover().unwrap(), real.path());
    }

    #[test]
    fn shipped_templates_are_discoverable() {
        assert!(holds_catalog(&source_tree_templates()));
    }

    #[test]
    fn file_is_not_a_template_root() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("README.md");
        fs::write(&file, "x").unwrap();
        assert!(!holds_catalog(&file));
    }
}
