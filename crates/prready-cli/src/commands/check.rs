// Rust guideline compliant 2026-02-06

//! Implementation of the `prready check` command.
//!
//! Runs every readiness gate against the repository in the current directory.

use anyhow::Result;
use prready_hooks::{pre_push_hook, PushInvocation};
use std::path::PathBuf;
use termcolor::StandardStream;

use crate::commands::config::{load_config, repo_root};
use crate::output::{OutputFormat, TerminalReporter};
use crate::terminal::color_choice;

/// Options shared by every command that runs the gates.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Explicit config file.
    pub config_path: Option<PathBuf>,
    /// Output format.
    pub format: OutputFormat,
    /// Whether to color terminal output.
    pub use_color: bool,
}

/// Executes the check command.
///
/// # Returns
///
/// `Ok(true)` if every gate passed, `Ok(false)` if the run was rejected.
///
/// # Errors
///
/// Returns an error if the repository or configuration cannot be loaded.
pub fn execute(options: &RunOptions) -> Result<bool> {
    run_gates(options, &PushInvocation::default())
}

/// Loads configuration and runs the gates, reporting to stderr.
///
/// Failures inside the run (gate rejections, git or command errors) are
/// reported through the terminal reporter and yield `Ok(false)`.
///
/// # Errors
///
/// Returns an error if the repository or configuration cannot be loaded.
pub(crate) fn run_gates(options: &RunOptions, invocation: &PushInvocation) -> Result<bool> {
    let root = repo_root(&std::env::current_dir()?)?;
    let config = load_config(&root, options.config_path.as_deref())?;
    tracing::debug!(root = %root.display(), format = ?options.format, "running gates");

    let stderr = StandardStream::stderr(color_choice(options.use_color));
    let mut reporter = TerminalReporter::new(stderr, options.format);
    let outcome = pre_push_hook(&root, &config, invocation, &mut reporter);

    if let Some(json) = reporter.finish(outcome.as_ref()) {
        println!("{}", json);
    }
    Ok(outcome.is_ok())
}
