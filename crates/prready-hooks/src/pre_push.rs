// Rust guideline compliant 2026-02-06

//! Pre-push hook implementation.
//!
//! Git runs the hook as `pre-push <remote name> <remote url>` and writes one
//! line per ref update to stdin:
//! `<local ref> <local sha> <remote ref> <remote sha>`.

use anyhow::Result;
use prready_core::{
    CheckReport, Checker, Config, Error, GateKind, GateRecord, GitRepository, ProcessRunner,
    Reporter, Verdict,
};
use std::io::{BufRead, Write};
use std::path::Path;

const ZERO_SHA_CHAR: char = '0';

/// One ref update announced by git on the hook's stdin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushUpdate {
    /// Local ref being pushed, `(delete)` for deletions.
    pub local_ref: String,
    /// Object the local ref points at.
    pub local_sha: String,
    /// Ref updated on the remote.
    pub remote_ref: String,
    /// Object the remote ref currently points at.
    pub remote_sha: String,
}

impl PushUpdate {
    /// Whether this update deletes the remote ref.
    pub fn is_delete(&self) -> bool {
        self.local_sha.chars().all(|c| c == ZERO_SHA_CHAR)
    }
}

/// Arguments and stdin git hands to a pre-push hook.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PushInvocation {
    /// Remote name (or URL when pushing to an unnamed remote).
    pub remote_name: Option<String>,
    /// Remote URL.
    pub remote_url: Option<String>,
    /// Announced ref updates.
    pub updates: Vec<PushUpdate>,
}

/// Parses the ref updates git writes to the pre-push hook's stdin.
///
/// Blank lines are skipped.
///
/// # Errors
///
/// Returns [`Error::Protocol`] for a line that does not have exactly four
/// fields, or [`Error::Io`] if reading fails.
pub fn parse_push_updates<R: BufRead>(reader: R) -> prready_core::Result<Vec<PushUpdate>> {
    let mut updates = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split_whitespace().collect();
        let [local_ref, local_sha, remote_ref, remote_sha] = fields.as_slice() else {
            return Err(Error::Protocol(format!(
                "line {}: expected 4 fields, found {}",
                idx + 1,
                fields.len()
            )));
        };
        updates.push(PushUpdate {
            local_ref: local_ref.to_string(),
            local_sha: local_sha.to_string(),
            remote_ref: remote_ref.to_string(),
            remote_sha: remote_sha.to_string(),
        });
    }
    Ok(updates)
}

/// Runs the pre-push checks.
///
/// The checks run against `config.remote`; the remote git reports is only logged.
///
/// # Arguments
///
/// * `repo_path` - Any path inside the Git repository
/// * `config` - Effective configuration
/// * `invocation` - What git passed to the hook
/// * `reporter` - Receives gate progress
///
/// # Returns
///
/// The report of a run in which every gate passed.
///
/// # Errors
///
/// Returns an error if:
/// - The repository cannot be opened
/// - Any gate rejects the push
/// - A command or git query fails
pub fn pre_push_hook(
    repo_path: &Path,
    config: &Config,
    invocation: &PushInvocation,
    reporter: &mut dyn Reporter,
) -> Result<CheckReport> {
    tracing::debug!(
        remote = invocation.remote_name.as_deref().unwrap_or("-"),
        url = invocation.remote_url.as_deref().unwrap_or("-"),
        updates = invocation.updates.len(),
        "pre-push invoked"
    );
    for update in &invocation.updates {
        tracing::debug!(
            local_ref = %update.local_ref,
            remote_ref = %update.remote_ref,
            delete = update.is_delete(),
            "ref update"
        );
    }
    if let Some(name) = invocation.remote_name.as_deref() {
        if name != config.remote {
            tracing::warn!(
                pushed_to = name,
                checked = %config.remote,
                "push target differs from the configured remote"
            );
        }
    }

    let repo = GitRepository::discover(repo_path, config.remote.clone())?;
    let runner = ProcessRunner::new(repo.workdir());
    let mut checker = Checker::new(config, &runner, &repo)?;
    Ok(checker.run(reporter)?)
}

/// Reporter writing one uncolored line per finished gate.
pub struct PlainReporter<W: Write> {
    out: W,
}

impl<W: Write> PlainReporter<W> {
    /// Creates a reporter writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Reporter for PlainReporter<W> {
    fn gate_started(&mut self, _gate: GateKind) {}

    fn gate_finished(&mut self, record: &GateRecord) {
        let marker = match record.verdict {
            Verdict::Passed => "✓",
            Verdict::Warned => "⚠",
            Verdict::Skipped => "-",
            Verdict::Failed => "✗",
        };
        let _ = writeln!(self.out, "{} {}: {}", marker, record.gate, record.message);
    }
}
