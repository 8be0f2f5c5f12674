// Rust guideline compliant 2026-02-06

//! Version-control queries the checker depends on.

use crate::status::TrackingStatus;
use crate::Result;

/// Repository queries used by the file-state and remote-sync gates.
///
/// Everything here is read-only except [`Vcs::fetch`], which refreshes
/// remote-tracking refs.
pub trait Vcs {
    /// Name of the remote the checks run against.
    fn remote(&self) -> &str;

    /// Paths in the working tree that are neither tracked nor ignored.
    fn untracked_files(&self) -> Result<Vec<String>>;

    /// Tracked paths with staged or unstaged modifications.
    fn uncommitted_changes(&self) -> Result<Vec<String>>;

    /// Refreshes the remote-tracking refs of [`Vcs::remote`].
    fn fetch(&self) -> Result<()>;

    /// Short name of the remote's default branch, e.g. `main`.
    fn default_branch(&self) -> Result<String>;

    /// Commits reachable from `<remote>/<default_branch>` but not from HEAD.
    fn behind_count(&self, default_branch: &str) -> Result<usize>;

    /// Short name of the checked-out branch, `HEAD` when detached.
    fn current_branch(&self) -> Result<String>;

    /// Whether `refs/remotes/<remote>/<branch>` exists.
    fn remote_branch_exists(&self, branch: &str) -> Result<bool>;

    /// Ahead/behind relation between HEAD and its upstream.
    fn tracking_status(&self) -> Result<TrackingStatus>;

    /// Human-readable status text (`git status -uno`).
    fn status_summary(&self) -> Result<String>;
}
