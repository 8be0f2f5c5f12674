// Rust guideline compliant 2026-02-06

//! Build tool adapter: clean build, lint task discovery, lint run.

use crate::command::{CommandRunner, CommandSpec};
use crate::gate::GateFailure;
use crate::{Config, Result};

/// The project's build tool as described by configuration.
#[derive(Debug, Clone)]
pub struct BuildTool {
    build: CommandSpec,
    tasks: CommandSpec,
    lint: CommandSpec,
    lint_task: String,
}

impl BuildTool {
    /// Builds the adapter from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configured command is empty.
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self {
            build: CommandSpec::from_argv(&config.build_command)?,
            tasks: CommandSpec::from_argv(&config.tasks_command)?,
            lint: CommandSpec::from_argv(&config.lint_command)?,
            lint_task: config.lint_task.clone(),
        })
    }

    /// Name of the lint task.
    pub fn lint_task(&self) -> &str {
        &self.lint_task
    }

    /// Runs the clean build.
    ///
    /// # Errors
    ///
    /// Returns [`GateFailure::Build`] on a non-zero exit, or an error if the
    /// build command cannot be started.
    pub fn build(&self, runner: &dyn CommandRunner) -> Result<()> {
        let exit_code = runner.run(&self.build)?;
        if exit_code != 0 {
            return Err(GateFailure::Build { exit_code }.into());
        }
        Ok(())
    }

    /// Returns whether the lint task appears in the build tool's task list.
    ///
    /// A task-list command that fails is treated as "not configured".
    ///
    /// # Errors
    ///
    /// Returns an error if the task-list command cannot be started.
    pub fn lint_configured(&self, runner: &dyn CommandRunner) -> Result<bool> {
        let output = runner.capture(&self.tasks)?;
        if !output.success() {
            tracing::warn!(
                command = %self.tasks,
                exit_code = output.exit_code,
                "task listing failed; treating lint as not configured"
            );
            return Ok(false);
        }
        Ok(task_listed(&output.stdout, &self.lint_task))
    }

    /// Runs the lint task, collecting every finding before exiting.
    ///
    /// # Errors
    ///
    /// Returns [`GateFailure::Lint`] on a non-zero exit, or an error if the
    /// lint command cannot be started.
    pub fn lint(&self, runner: &dyn CommandRunner) -> Result<()> {
        let exit_code = runner.run(&self.lint)?;
        if exit_code != 0 {
            return Err(GateFailure::Lint {
                task: self.lint_task.clone(),
                exit_code,
            }
            .into());
        }
        Ok(())
    }
}

/// Whether `task` is listed as a whole token in a task listing.
///
/// Gradle prints `name - description`; other tools print one name per line.
/// Qualified names such as `:app:detekt` match on their last segment.
pub fn task_listed(listing: &str, task: &str) -> bool {
    listing.lines().any(|line| {
        line.split_whitespace().any(|token| {
            token.rsplit(':').next().is_some_and(|last| last == task)
        })
    })
}
