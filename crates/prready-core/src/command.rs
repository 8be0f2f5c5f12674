// Rust guideline compliant 2026-02-06

//! External command execution.
//!
//! Build, lint and status-summary steps all shell out. They go through the
//! [`CommandRunner`] trait so the checker can be driven by a fake in tests.

use crate::{Error, Result};
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// An external command: program plus arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    /// Program to execute.
    pub program: String,
    /// Arguments passed to the program.
    pub args: Vec<String>,
    /// Extra environment variables for the child process.
    pub env: Vec<(String, String)>,
}

impl CommandSpec {
    /// Creates a command from a program and its arguments.
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
            env: Vec::new(),
        }
    }

    /// Adds an environment variable for the child process.
    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.push((key.into(), value.into()));
        self
    }

    /// Creates a command from an argv-style list.
    ///
    /// # Errors
    ///
    /// Returns an error if `argv` is empty.
    pub fn from_argv(argv: &[String]) -> Result<Self> {
        let (program, args) = argv
            .split_first()
            .ok_or_else(|| Error::Config("command must not be empty".to_string()))?;
        Ok(Self::new(program.clone(), args.iter().cloned()))
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Captured result of a finished command.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandOutput {
    /// Process exit code, `-1` when terminated by a signal.
    pub exit_code: i32,
    /// Captured standard output.
    pub stdout: String,
    /// Captured standard error.
    pub stderr: String,
}

impl CommandOutput {
    /// Whether the command exited with status zero.
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Runs external commands and waits for them to finish.
pub trait CommandRunner {
    /// Runs a command with its output streamed to stderr and returns its exit code.
    ///
    /// # Errors
    ///
    /// Returns an error if the command cannot be started.
    fn run(&self, spec: &CommandSpec) -> Result<i32>;

    /// Runs a command and captures its output.
    ///
    /// # Errors
    ///
    /// Returns an error if the command cannot be started.
    fn capture(&self, spec: &CommandSpec) -> Result<CommandOutput>;
}

/// [`CommandRunner`] backed by real child processes.
///
/// Streamed commands write their stdout to this process's stderr, keeping
/// stdout free for reports.
#[derive(Debug, Clone)]
pub struct ProcessRunner {
    working_dir: PathBuf,
}

impl ProcessRunner {
    /// Creates a runner that starts every command in `working_dir`.
    pub fn new(working_dir: impl Into<PathBuf>) -> Self {
        Self {
            working_dir: working_dir.into(),
        }
    }

    /// Directory commands are started in.
    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    fn command(&self, spec: &CommandSpec) -> Command {
        let mut command = Command::new(&spec.program);
        command
            .args(&spec.args)
            .envs(spec.env.iter().map(|(k, v)| (k.as_str(), v.as_str())))
            .current_dir(&self.working_dir);
        command
    }
}

impl CommandRunner for ProcessRunner {
    fn run(&self, spec: &CommandSpec) -> Result<i32> {
        tracing::debug!(command = %spec, dir = %self.working_dir.display(), "running command");
        let status = self
            .command(spec)
            .stdin(Stdio::null())
            .stdout(Stdio::from(std::io::stderr()))
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| Error::CommandSpawn {
                command: spec.to_string(),
                source,
            })?;
        let exit_code = status.code().unwrap_or(-1);
        tracing::debug!(command = %spec, exit_code, "command finished");
        Ok(exit_code)
    }

    fn capture(&self, spec: &CommandSpec) -> Result<CommandOutput> {
        tracing::debug!(command = %spec, dir = %self.working_dir.display(), "capturing command");
        let output = self
            .command(spec)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| Error::CommandSpawn {
                command: spec.to_string(),
                source,
            })?;
        let exit_code = output.status.code().unwrap_or(-1);
        tracing::debug!(command = %spec, exit_code, "command finished");
        Ok(CommandOutput {
            exit_code,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_display() {
        let spec = CommandSpec::new("./gradlew", ["clean", "build"]);
        assert_eq!(spec.to_string(), "./gradlew clean build");
    }

    #[test]
    fn test_from_argv_rejects_empty() {
        assert!(CommandSpec::from_argv(&[]).is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_capture_simple_command() {
        let runner = ProcessRunner::new(std::env::temp_dir());
        let output = runner
            .capture(&CommandSpec::new("echo", ["hello"]))
            .expect("echo should run");
        assert!(output.success());
        assert!(output.stdout.contains("hello"));
    }

    #[cfg(unix)]
    #[test]
    fn test_run_failing_command() {
        let runner = ProcessRunner::new(std::env::temp_dir());
        let exit_code = runner
            .run(&CommandSpec::new("false", Vec::<String>::new()))
            .expect("false should run");
        assert_ne!(exit_code, 0);
    }

    #[test]
    fn test_missing_program_is_spawn_error() {
        let runner = ProcessRunner::new(std::env::temp_dir());
        let result = runner.run(&CommandSpec::new(
            "prready-definitely-missing-program",
            Vec::<String>::new(),
        ));
        assert!(matches!(result, Err(Error::CommandSpawn { .. })));
    }
}
