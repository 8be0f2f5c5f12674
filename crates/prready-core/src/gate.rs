// Rust guideline compliant 2026-02-06

//! Gate identities and the failures each gate can report.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// The checks run before a push, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GateKind {
    /// Clean build of the project.
    Build,
    /// Static analysis task, when the build tool provides one.
    Lint,
    /// No untracked, non-ignored files.
    UntrackedFiles,
    /// No staged or unstaged modifications.
    UncommittedChanges,
    /// Local HEAD contains every commit of the remote default branch.
    RemoteSync,
    /// Informational: the current branch exists on the remote.
    RemoteBranch,
    /// Local branch and its upstream point at the same history.
    Divergence,
}

impl GateKind {
    /// All gates in the order the checker runs them.
    pub const ALL: [GateKind; 7] = [
        GateKind::Build,
        GateKind::Lint,
        GateKind::UntrackedFiles,
        GateKind::UncommittedChanges,
        GateKind::RemoteSync,
        GateKind::RemoteBranch,
        GateKind::Divergence,
    ];

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            GateKind::Build => "Build",
            GateKind::Lint => "Lint",
            GateKind::UntrackedFiles => "Untracked files",
            GateKind::UncommittedChanges => "Uncommitted changes",
            GateKind::RemoteSync => "Remote sync",
            GateKind::RemoteBranch => "Remote branch",
            GateKind::Divergence => "Divergence",
        }
    }
}

impl fmt::Display for GateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome recorded for a gate that ran (or was skipped).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// The gate passed.
    Passed,
    /// The gate did not block the push but reported a warning.
    Warned,
    /// The gate was disabled by configuration.
    Skipped,
    /// The gate rejected the push.
    Failed,
}

/// A gate paired with its verdict and a one-line explanation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GateRecord {
    /// Which gate.
    pub gate: GateKind,
    /// What happened.
    pub verdict: Verdict,
    /// Message shown to the user.
    pub message: String,
}

impl GateRecord {
    /// Creates a record.
    pub fn new(gate: GateKind, verdict: Verdict, message: impl Into<String>) -> Self {
        Self {
            gate,
            verdict,
            message: message.into(),
        }
    }
}

/// Reasons a gate rejects a push.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GateFailure {
    /// The clean build exited non-zero.
    #[error("Build failed (exit code {exit_code}). Fix the build before pushing.")]
    Build {
        /// Exit code of the build command.
        exit_code: i32,
    },

    /// The lint task exited non-zero.
    #[error("Lint task '{task}' reported problems (exit code {exit_code}). Fix the findings before pushing.")]
    Lint {
        /// Name of the lint task.
        task: String,
        /// Exit code of the lint command.
        exit_code: i32,
    },

    /// Untracked files are present in the working tree.
    #[error("Untracked files present. Add or ignore them before pushing:\n{}", format_paths(.0))]
    UntrackedFiles(Vec<String>),

    /// The working tree or index has modifications.
    #[error("Uncommitted changes present. Commit or stash them before pushing:\n{}", format_paths(.0))]
    UncommittedChanges(Vec<String>),

    /// The remote default branch has commits missing locally.
    #[error("Branch '{branch}' is {count} commit(s) behind '{remote_branch}'. Pull or rebase before pushing.")]
    BehindRemote {
        /// Current local branch.
        branch: String,
        /// Remote default branch the count was taken against.
        remote_branch: String,
        /// Number of missing commits.
        count: usize,
    },

    /// The upstream has commits missing locally.
    #[error("Branch '{branch}' is behind its upstream. Pull before pushing.")]
    NeedsPull {
        /// Current local branch.
        branch: String,
    },

    /// Local commits are not yet on the upstream.
    #[error("Branch '{branch}' is ahead of its upstream. Push your commits through review first.")]
    Ahead {
        /// Current local branch.
        branch: String,
    },

    /// Local and upstream histories have diverged.
    #[error("Branch '{branch}' has diverged from its upstream. Merge or rebase before pushing.")]
    Diverged {
        /// Current local branch.
        branch: String,
    },
}

impl GateFailure {
    /// The gate that produced this failure.
    pub fn gate(&self) -> GateKind {
        match self {
            GateFailure::Build { .. } => GateKind::Build,
            GateFailure::Lint { .. } => GateKind::Lint,
            GateFailure::UntrackedFiles(_) => GateKind::UntrackedFiles,
            GateFailure::UncommittedChanges(_) => GateKind::UncommittedChanges,
            GateFailure::BehindRemote { .. } => GateKind::RemoteSync,
            GateFailure::NeedsPull { .. }
            | GateFailure::Ahead { .. }
            | GateFailure::Diverged { .. } => GateKind::Divergence,
        }
    }
}

fn format_paths(paths: &[String]) -> String {
    paths
        .iter()
        .map(|path| format!("  {}", path))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_maps_to_gate() {
        let failure = GateFailure::Diverged {
            branch: "feature".to_string(),
        };
        assert_eq!(failure.gate(), GateKind::Divergence);

        let failure = GateFailure::BehindRemote {
            branch: "feature".to_string(),
            remote_branch: "origin/main".to_string(),
            count: 3,
        };
        assert_eq!(failure.gate(), GateKind::RemoteSync);
    }

    #[test]
    fn test_behind_message_cites_count_and_branch() {
        let failure = GateFailure::BehindRemote {
            branch: "feature".to_string(),
            remote_branch: "origin/main".to_string(),
            count: 3,
        };
        let msg = failure.to_string();
        assert!(msg.contains("'feature'"));
        assert!(msg.contains("3 commit(s)"));
    }

    #[test]
    fn test_untracked_message_lists_paths() {
        let failure =
            GateFailure::UntrackedFiles(vec!["notes.txt".to_string(), "tmp/a.log".to_string()]);
        let msg = failure.to_string();
        assert!(msg.contains("  notes.txt"));
        assert!(msg.contains("  tmp/a.log"));
    }

    #[test]
    fn test_gate_order() {
        assert_eq!(GateKind::ALL.first(), Some(&GateKind::Build));
        assert_eq!(GateKind::ALL.last(), Some(&GateKind::Divergence));
    }
}
