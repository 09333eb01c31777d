//! CLI error type.
//!
//! Every failure that reaches `main` is a [`CliError`]. It knows its
//! [`ErrorCategory`] (and so its exit code) and which hints to print.

use std::error::Error as _;
use std::io;
use std::path::PathBuf;

use owo_colors::OwoColorize;
use thiserror::Error;

use pypans_adapters::TemplateRootNotFound;
use pypans_core::domain::DomainError;
use pypans_core::error::{ErrorCategory as CoreCategory, PansError};

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// Configuration could not be read, parsed, or written.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A build phase failed.
    #[error("Build failed: {0}")]
    Core(#[from] PansError),

    /// No directory holding the template catalog was found.
    #[error("Template directory not found")]
    TemplatesNotFound { searched: Vec<PathBuf> },

    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: io::Error,
    },

    /// Input closed while a question was pending.
    #[error("Operation cancelled")]
    Cancelled,

    /// A post-build command could not be spawned or exited non-zero.
    #[error("External command failed: {command} ({reason})")]
    ExternalCommandFailed {
        command: String,
        reason: String,
        #[source]
        source: Option<io::Error>,
    },
}

impl From<io::Error> for CliError {
    fn from(err: io::Error) -> Self {
        Self::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<DomainError> for CliError {
    fn from(err: DomainError) -> Self {
        Self::Core(err.into())
    }
}

impl From<TemplateRootNotFound> for CliError {
    fn from(err: TemplateRootNotFound) -> Self {
        Self::TemplatesNotFound {
            searched: err.searched,
        }
    }
}

#[cfg(feature = "interactive")]
impl From<dialoguer::Error> for CliError {
    fn from(err: dialoguer::Error) -> Self {
        Self::IoError {
            message: "prompt failed".into(),
            source: io::Error::other(err),
        }
    }
}

impl CliError {
    /// Hints printed under the error message.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidInput { .. } => vec!["Run 'pypans --help' for usage".into()],

            Self::ConfigError { .. } => vec![
                "Check the file passed with --config and any PYPANS_* variables".into(),
                "Run 'pypans --init-config --force' to start from the defaults".into(),
            ],

            Self::Core(core) => core.suggestions(),

            Self::TemplatesNotFound { searched } => {
                let mut hints = Vec::with_capacity(searched.len() + 2);
                hints.push("Looked in:".to_string());
                hints.extend(searched.iter().map(|p| format!("  - {}", p.display())));
                hints.push("Pass --templates <DIR> or set PYPANS_TEMPLATES_DIR".into());
                hints
            }

            Self::IoError { .. } => vec!["Check permissions on the current directory".into()],

            Self::Cancelled => vec!["Nothing was written".into()],

            Self::ExternalCommandFailed { command, .. } => vec![
                format!("Make sure '{command}' works from this directory"),
                "The project files are in place; run the command by hand".into(),
            ],
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidInput { .. } | Self::Cancelled => ErrorCategory::UserError,
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::TemplatesNotFound { .. } => ErrorCategory::NotFound,
            Self::IoError { .. } | Self::ExternalCommandFailed { .. } => ErrorCategory::Internal,
            Self::Core(core) => match core.category() {
                CoreCategory::Validation | CoreCategory::Conflict => ErrorCategory::UserError,
                CoreCategory::NotFound => ErrorCategory::NotFound,
                CoreCategory::Internal => ErrorCategory::Internal,
            },
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.category().exit_code()
    }

    /// Render the error, its causes (with `verbose`), and the hints.
    pub fn render(&self, verbose: bool, color: bool) -> String {
        let mut out = format!("\n{} {self}\n", label(color, "error:", red_bold));

        if verbose {
            let mut cause = self.source();
            while let Some(err) = cause {
                out.push_str(&format!("  {} {err}\n", label(color, "caused by:", dimmed)));
                cause = err.source();
            }
        }

        let hints = self.suggestions();
        if !hints.is_empty() {
            out.push('\n');
            for hint in hints {
                out.push_str(&format!("{} {hint}\n", label(color, "hint:", yellow)));
            }
        }

        if !verbose && self.source().is_some() {
            out.push_str("\nRe-run with -v to see the underlying cause.\n");
        }

        out
    }

    /// Emit the error as a tracing event at a level matching its category.
    pub fn log(&self) {
        let code = self.exit_code();
        match self.category() {
            ErrorCategory::UserError | ErrorCategory::NotFound => {
                tracing::warn!(code, error = %self, "command failed")
            }
            ErrorCategory::Configuration | ErrorCategory::Internal => {
                tracing::error!(code, error = %self, "command failed")
            }
        }
    }
}

fn label(color: bool, text: &str, style: fn(&str) -> String) -> String {
    if color { style(text) } else { text.to_string() }
}

fn red_bold(text: &str) -> String {
    text.red().bold().to_string()
}

fn dimmed(text: &str) -> String {
    text.dimmed().to_string()
}

fn yellow(text: &str) -> String {
    text.yellow().to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Bad input, an existing project, or a cancelled prompt.
    UserError,
    /// Templates or a template file missing.
    NotFound,
    Configuration,
    Internal,
}

impl ErrorCategory {
    pub const fn exit_code(self) -> u8 {
        match self {
            Self::Internal => 1,
            Self::UserError => 2,
            Self::NotFound => 3,
            Self::Configuration => 4,
        }
    }
}

/// Attach a message to an `io::Error` while converting it.
pub trait IntoCli<T> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T> IntoCli<T> for Result<T, io::Error> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|source| CliError::IoError {
            message: f().into(),
            source,
        })
    }
}
