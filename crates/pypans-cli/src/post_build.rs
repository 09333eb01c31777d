//! External commands run after a successful build.

use std::fmt;
use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::error::{CliError, CliResult};

/// A follow-up command the operator opted into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PostBuildStep {
    GitInit,
    InstallDependencies,
}

impl PostBuildStep {
    pub fn program(&self) -> &'static str {
        match self {
            Self::GitInit => "git",
            Self::InstallDependencies => "python3",
        }
    }

    pub fn args(&self) -> &'static [&'static str] {
        match self {
            Self::GitInit => &["init"],
            Self::InstallDependencies => &["-m", "pip", "install", "-r", "requirements-dev.txt"],
        }
    }

    /// Steps selected by the two yes/no answers, in run order.
    pub fn selected(git_init: bool, install_dependencies: bool) -> Vec<Self> {
        let mut steps = Vec::with_capacity(2);
        if git_init {
            steps.push(Self::GitInit);
        }
        if install_dependencies {
            steps.push(Self::InstallDependencies);
        }
        steps
    }

    /// Run the step inside `root`.
    ///
    /// The child's stdout goes to our stderr so JSON on stdout stays clean.
    #[instrument(skip(self, root), fields(step = %self))]
    pub fn run(&self, root: &Path) -> CliResult<()> {
        debug!(root = %root.display(), "spawning");

        let status = Command::new(self.program())
            .args(self.args())
            .current_dir(root)
            .stdin(Stdio::null())
            .stdout(Stdio::from(io::stderr()))
            .status()
            .map_err(|e| CliError::ExternalCommandFailed {
                command: self.to_string(),
                reason: e.to_string(),
                source: Some(e),
            })?;

        if !status.success() {
            return Err(CliError::ExternalCommandFailed {
                command: self.to_string(),
                reason: status.to_string(),
                source: None,
            });
        }

        info!("completed");
        Ok(())
    }
}

impl fmt::Display for PostBuildStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program())?;
        for arg in self.args() {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_keeps_run_order() {
        assert_eq!(
            PostBuildStep::selected(true, true),
            vec![PostBuildStep::GitInit, PostBuildStep::InstallDependencies]
        );
        assert_eq!(
            PostBuildStep::selected(false, true),
            vec![PostBuildStep::InstallDependencies]
        );
        assert!(PostBuildStep::selected(false, false).is_empty());
    }

    #[test]
    fn display_is_the_full_command_line() {
        assert_eq!(PostBuildStep::GitInit.to_string(), "git init");
        assert_eq!(
            PostBuildStep::InstallDependencies.to_string(),
            "python3 -m pip install -r requirements-dev.txt"
        );
    }

    #[test]
    fn missing_directory_is_reported_as_command_failure() {
        let temp = tempfile::TempDir::new().unwrap();
        let missing = temp.path().join("gone");
        let err = PostBuildStep::GitInit.run(&missing).unwrap_err();
        assert!(matches!(
            err,
            CliError::ExternalCommandFailed { ref command, .. } if command == "git init"
        ));
    }
}
