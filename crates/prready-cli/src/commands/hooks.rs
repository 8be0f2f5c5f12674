// Rust guideline compliant 2026-02-06

//! Hook command wrappers for invoking prready Git hooks from the CLI.

use anyhow::Result;
use prready_hooks::{parse_push_updates, PushInvocation};

use crate::commands::check::{run_gates, RunOptions};

/// Supported hook actions.
#[derive(Debug, Clone, PartialEq, Eq, clap::Subcommand)]
pub enum HookAction {
    /// Run the pre-push hook (reads ref updates from stdin)
    PrePush {
        /// Name of the remote being pushed to
        remote: Option<String>,

        /// URL of the remote being pushed to
        url: Option<String>,
    },
}

/// Runs the requested hook action.
///
/// # Returns
///
/// `Ok(true)` if the push may proceed, `Ok(false)` if it is rejected.
///
/// # Errors
///
/// Returns an error if the hook input is malformed or the repository or
/// configuration cannot be loaded.
pub fn execute(action: HookAction, options: &RunOptions) -> Result<bool> {
    match action {
        HookAction::PrePush { remote, url } => {
            let invocation = PushInvocation {
                remote_name: remote,
                remote_url: url,
                updates: parse_push_updates(std::io::stdin().lock())?,
            };
            run_gates(options, &invocation)
        }
    }
}
