// Rust guideline compliant 2026-02-06

//! Configuration management for prready.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File name of the per-repository configuration file.
pub const CONFIG_FILE_NAME: &str = ".prready.toml";

/// Where the divergence gate gets its local-vs-upstream status from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DivergenceSource {
    /// Ahead/behind counts computed from the commit graph.
    #[default]
    Structured,
    /// Keyword matching on the output of `git status -uno`.
    Summary,
}

/// Configuration for prready behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Remote the branch is checked against.
    #[serde(default = "default_remote")]
    pub remote: String,

    /// Command performing a clean full build.
    #[serde(default = "default_build_command")]
    pub build_command: Vec<String>,

    /// Command listing the build tool's tasks.
    #[serde(default = "default_tasks_command")]
    pub tasks_command: Vec<String>,

    /// Name of the lint task looked up in the task list.
    #[serde(default = "default_lint_task")]
    pub lint_task: String,

    /// Command running the lint task without stopping at the first finding.
    #[serde(default = "default_lint_command")]
    pub lint_command: Vec<String>,

    /// Source used by the divergence gate.
    #[serde(default)]
    pub divergence_source: DivergenceSource,

    /// Skip the build and lint gates entirely.
    #[serde(default)]
    pub skip_build: bool,
}

fn default_remote() -> String {
    "origin".to_string()
}

fn default_build_command() -> Vec<String> {
    split_command("./gradlew clean build")
}

fn default_tasks_command() -> Vec<String> {
    split_command("./gradlew tasks --all")
}

fn default_lint_task() -> String {
    "detekt".to_string()
}

fn default_lint_command() -> Vec<String> {
    split_command("./gradlew detekt --continue")
}

fn split_command(line: &str) -> Vec<String> {
    line.split_whitespace().map(str::to_string).collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            remote: default_remote(),
            build_command: default_build_command(),
            tasks_command: default_tasks_command(),
            lint_task: default_lint_task(),
            lint_command: default_lint_command(),
            divergence_source: DivergenceSource::default(),
            skip_build: false,
        }
    }
}

impl Config {
    /// Loads configuration for the repository rooted at `repo_root`.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. Configuration file at `<repo_root>/.prready.toml`
    /// 3. Environment variables with `PRREADY_` prefix
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration file exists but cannot be read
    /// - Configuration file contains invalid TOML
    /// - Configuration values fail validation
    pub fn load(repo_root: &Path) -> Result<Self> {
        Self::load_from(&repo_root.join(CONFIG_FILE_NAME))
    }

    /// Loads configuration from an explicit file path.
    ///
    /// A missing file is not an error; defaults and environment overrides still apply.
    ///
    /// # Errors
    ///
    /// Same as [`Config::load`].
    pub fn load_from(config_path: &Path) -> Result<Self> {
        let mut config = Self::default();

        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            config = toml::from_str(&content).map_err(|e| {
                Error::Config(format!("{}: {}", config_path.display(), e))
            })?;
        }

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Applies environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `PRREADY_REMOTE` - Remote name
    /// - `PRREADY_BUILD_COMMAND` - Build command (whitespace separated)
    /// - `PRREADY_TASKS_COMMAND` - Task listing command (whitespace separated)
    /// - `PRREADY_LINT_TASK` - Lint task name
    /// - `PRREADY_LINT_COMMAND` - Lint command (whitespace separated)
    /// - `PRREADY_DIVERGENCE_SOURCE` - structured/summary
    /// - `PRREADY_SKIP_BUILD` - Skip build and lint (true/false)
    ///
    /// # Errors
    ///
    /// Returns an error if environment variable values are invalid.
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("PRREADY_REMOTE") {
            self.remote = val;
        }

        if let Ok(val) = std::env::var("PRREADY_BUILD_COMMAND") {
            self.build_command = split_command(&val);
        }

        if let Ok(val) = std::env::var("PRREADY_TASKS_COMMAND") {
            self.tasks_command = split_command(&val);
        }

        if let Ok(val) = std::env::var("PRREADY_LINT_TASK") {
            self.lint_task = val;
        }

        if let Ok(val) = std::env::var("PRREADY_LINT_COMMAND") {
            self.lint_command = split_command(&val);
        }

        if let Ok(val) = std::env::var("PRREADY_DIVERGENCE_SOURCE") {
            self.divergence_source = match val.as_str() {
                "structured" => DivergenceSource::Structured,
                "summary" => DivergenceSource::Summary,
                _ => {
                    return Err(Error::Config(
                        "PRREADY_DIVERGENCE_SOURCE must be structured or summary".to_string(),
                    ))
                }
            };
        }

        if let Ok(val) = std::env::var("PRREADY_SKIP_BUILD") {
            self.skip_build = val.parse().map_err(|_| {
                Error::Config("PRREADY_SKIP_BUILD must be true or false".to_string())
            })?;
        }

        Ok(())
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if the remote or lint task is blank, or any command is empty.
    fn validate(&self) -> Result<()> {
        if self.remote.trim().is_empty() {
            return Err(Error::Config("remote must not be empty".to_string()));
        }

        if self.lint_task.trim().is_empty() {
            return Err(Error::Config("lint_task must not be empty".to_string()));
        }

        for (name, command) in [
            ("build_command", &self.build_command),
            ("tasks_command", &self.tasks_command),
            ("lint_command", &self.lint_command),
        ] {
            if command.is_empty() || command[0].trim().is_empty() {
                return Err(Error::Config(format!("{} must not be empty", name)));
            }
        }

        Ok(())
    }

    /// Renders the configuration as TOML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))
    }

    /// Saves the configuration to `<repo_root>/.prready.toml`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written or serialization fails.
    pub fn save(&self, repo_root: &Path) -> Result<()> {
        std::fs::write(repo_root.join(CONFIG_FILE_NAME), self.to_toml()?)?;
        Ok(())
    }
}
