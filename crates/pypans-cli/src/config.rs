//! Configuration loaded once at startup.
//!
//! Later sources win: built-in defaults, then the TOML file (`--config` or
//! the platform config directory), then `PYPANS_<SECTION>__<KEY>` variables.
//! Flags given on the command line are applied by the actions themselves.

use std::path::{Path, PathBuf};

use anyhow::Context;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

/// Prefix of configuration environment variables.
pub const ENV_PREFIX: &str = "PYPANS";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Prompt defaults.
    pub defaults: Defaults,
    /// Template settings.
    pub templates: TemplateConfig,
    /// Interpreter settings.
    pub runtime: RuntimeConfig,
    /// Steps run after a successful build.
    pub post_build: PostBuildConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    /// Written to `runtime.txt`; probed from `python3 --version` if unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub python_version: Option<String>,
}

/// Answers used for the yes/no decisions when `--yes` is given, and the
/// prompt defaults otherwise.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostBuildConfig {
    pub git_init: bool,
    pub install_dependencies: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl AppConfig {
    /// Load configuration, layering file and environment over defaults.
    ///
    /// An explicit `config_file` must exist; the default location is optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.clone(), true),
            None => (Self::config_path(), false),
        };

        let settings = Config::builder()
            .add_source(
                Config::try_from(&Self::default()).context("Failed to build default config")?,
            )
            .add_source(
                File::from(path.as_path())
                    .format(FileFormat::Toml)
                    .required(required),
            )
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .with_context(|| format!("Failed to read configuration from {}", path.display()))?;

        settings
            .try_deserialize()
            .context("Configuration has an invalid shape")
    }

    /// `config.toml` in the platform config directory, or `.pypans.toml` when
    /// no home directory is known.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "pypans", "pypans")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".pypans.toml"))
    }

    /// Template root override from configuration.
    pub fn template_root(&self) -> Option<&Path> {
        self.templates.local_path.as_deref()
    }
}
