// Rust guideline compliant 2026-02-06

//! The pre-push gate sequence.
//!
//! Gates run in [`GateKind::ALL`] order. The first failing gate ends the run;
//! no later gate executes.

use crate::command::CommandRunner;
use crate::config::{Config, DivergenceSource};
use crate::gate::{GateFailure, GateKind, GateRecord, Verdict};
use crate::status::TrackingStatus;
use crate::toolchain::BuildTool;
use crate::vcs::Vcs;
use crate::Result;
use serde::Serialize;

/// Receives progress events while the checker runs.
pub trait Reporter {
    /// Called before a gate executes.
    fn gate_started(&mut self, gate: GateKind);

    /// Called after a gate produced a verdict, including failures.
    fn gate_finished(&mut self, record: &GateRecord);
}

/// Reporter that discards every event.
#[derive(Debug, Default)]
pub struct NullReporter;

impl Reporter for NullReporter {
    fn gate_started(&mut self, _gate: GateKind) {}

    fn gate_finished(&mut self, _record: &GateRecord) {}
}

/// Result of a run in which every gate passed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    /// Local branch that was checked.
    pub current_branch: String,
    /// Remote the branch was compared against.
    pub remote: String,
    /// Default branch of the remote.
    pub default_branch: String,
    /// Every gate in execution order.
    pub gates: Vec<GateRecord>,
}

impl CheckReport {
    /// Messages of gates that passed with a warning.
    pub fn warnings(&self) -> Vec<&str> {
        self.gates
            .iter()
            .filter(|record| record.verdict == Verdict::Warned)
            .map(|record| record.message.as_str())
            .collect()
    }

    /// One-line confirmation naming the checked branches.
    pub fn summary(&self) -> String {
        format!(
            "All checks passed. '{}' is ready for a PR against '{}/{}'.",
            self.current_branch, self.remote, self.default_branch
        )
    }
}

#[derive(Debug, Default)]
struct SyncContext {
    current_branch: Option<String>,
    default_branch: Option<String>,
}

/// Runs the gate sequence against a build tool and a repository.
pub struct Checker<'a> {
    config: &'a Config,
    build_tool: BuildTool,
    runner: &'a dyn CommandRunner,
    vcs: &'a dyn Vcs,
    records: Vec<GateRecord>,
    context: SyncContext,
}

impl<'a> Checker<'a> {
    /// Creates a checker.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured commands are invalid.
    pub fn new(config: &'a Config, runner: &'a dyn CommandRunner, vcs: &'a dyn Vcs) -> Result<Self> {
        Ok(Self {
            config,
            build_tool: BuildTool::from_config(config)?,
            runner,
            vcs,
            records: Vec::new(),
            context: SyncContext::default(),
        })
    }

    /// Gates executed by the last run, including the failing one.
    pub fn records(&self) -> &[GateRecord] {
        &self.records
    }

    /// Runs every gate in order.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Gate`] for the first gate that rejects the push,
    /// or any error raised while running a command or querying git.
    pub fn run(&mut self, reporter: &mut dyn Reporter) -> Result<CheckReport> {
        self.records.clear();
        self.context = SyncContext::default();

        for gate in GateKind::ALL {
            self.execute(gate, reporter)?;
        }

        let current_branch = self.current_branch()?;
        let default_branch = match self.context.default_branch.take() {
            Some(name) => name,
            None => self.vcs.default_branch()?,
        };

        Ok(CheckReport {
            current_branch,
            remote: self.vcs.remote().to_string(),
            default_branch,
            gates: self.records.clone(),
        })
    }

    fn execute(&mut self, gate: GateKind, reporter: &mut dyn Reporter) -> Result<()> {
        reporter.gate_started(gate);
        tracing::info!(gate = %gate, "gate started");

        let outcome = match gate {
            GateKind::Build => self.check_build(),
            GateKind::Lint => self.check_lint(),
            GateKind::UntrackedFiles => self.check_untracked(),
            GateKind::UncommittedChanges => self.check_uncommitted(),
            GateKind::RemoteSync => self.check_remote_sync(),
            GateKind::RemoteBranch => self.check_remote_branch(),
            GateKind::Divergence => self.check_divergence(),
        };

        let (record, result) = match outcome {
            Ok((verdict, message)) => (GateRecord::new(gate, verdict, message), Ok(())),
            Err(err) => (GateRecord::new(gate, Verdict::Failed, err.to_string()), Err(err)),
        };

        match record.verdict {
            Verdict::Warned => tracing::warn!(gate = %gate, message = %record.message, "gate warning"),
            Verdict::Failed => tracing::info!(gate = %gate, "gate failed"),
            _ => tracing::info!(gate = %gate, verdict = ?record.verdict, "gate finished"),
        }

        reporter.gate_finished(&record);
        self.records.push(record);
        result
    }

    fn check_build(&mut self) -> Result<(Verdict, String)> {
        if self.config.skip_build {
            return Ok((Verdict::Skipped, "Build skipped by configuration".to_string()));
        }
        self.build_tool.build(self.runner)?;
        Ok((Verdict::Passed, "Clean build succeeded".to_string()))
    }

    fn check_lint(&mut self) -> Result<(Verdict, String)> {
        if self.config.skip_build {
            return Ok((Verdict::Skipped, "Lint skipped by configuration".to_string()));
        }
        let task = self.build_tool.lint_task().to_string();
        if !self.build_tool.lint_configured(self.runner)? {
            return Ok((
                Verdict::Warned,
                format!("Lint task '{}' not found; skipping lint", task),
            ));
        }
        self.build_tool.lint(self.runner)?;
        Ok((Verdict::Passed, format!("Lint task '{}' passed", task)))
    }

    fn check_untracked(&mut self) -> Result<(Verdict, String)> {
        let untracked = self.vcs.untracked_files()?;
        if !untracked.is_empty() {
            return Err(GateFailure::UntrackedFiles(untracked).into());
        }
        Ok((Verdict::Passed, "No untracked files".to_string()))
    }

    fn check_uncommitted(&mut self) -> Result<(Verdict, String)> {
        let changes = self.vcs.uncommitted_changes()?;
        if !changes.is_empty() {
            return Err(GateFailure::UncommittedChanges(changes).into());
        }
        Ok((Verdict::Passed, "No uncommitted changes".to_string()))
    }

    fn check_remote_sync(&mut self) -> Result<(Verdict, String)> {
        self.vcs.fetch()?;
        let default_branch = self.vcs.default_branch()?;
        let current_branch = self.current_branch()?;
        let behind = self.vcs.behind_count(&default_branch)?;
        let remote_branch = format!("{}/{}", self.vcs.remote(), default_branch);
        tracing::debug!(%current_branch, %remote_branch, behind, "behind count");

        self.context.default_branch = Some(default_branch);
        if behind > 0 {
            return Err(GateFailure::BehindRemote {
                branch: current_branch,
                remote_branch,
                count: behind,
            }
            .into());
        }
        Ok((
            Verdict::Passed,
            format!("'{}' contains every commit of '{}'", current_branch, remote_branch),
        ))
    }

    fn check_remote_branch(&mut self) -> Result<(Verdict, String)> {
        let branch = self.current_branch()?;
        let remote = self.vcs.remote();
        if branch == "HEAD" {
            return Ok((
                Verdict::Warned,
                "HEAD is detached; no branch to look up on the remote".to_string(),
            ));
        }
        if self.vcs.remote_branch_exists(&branch)? {
            Ok((
                Verdict::Passed,
                format!("Branch '{}' exists on '{}'", branch, remote),
            ))
        } else {
            Ok((
                Verdict::Warned,
                format!("Branch '{}' does not exist on '{}' yet", branch, remote),
            ))
        }
    }

    fn check_divergence(&mut self) -> Result<(Verdict, String)> {
        let status = match self.config.divergence_source {
            DivergenceSource::Structured => self.vcs.tracking_status()?,
            DivergenceSource::Summary => TrackingStatus::from_summary(&self.vcs.status_summary()?),
        };
        tracing::debug!(?status, "tracking status");

        let branch = self.current_branch()?;
        match status {
            TrackingStatus::UpToDate => {
                Ok((Verdict::Passed, "Branch is up to date with its upstream".to_string()))
            }
            TrackingStatus::Behind(_) => Err(GateFailure::NeedsPull { branch }.into()),
            TrackingStatus::Ahead(_) => Err(GateFailure::Ahead { branch }.into()),
            TrackingStatus::Diverged { .. } => Err(GateFailure::Diverged { branch }.into()),
            TrackingStatus::UnstagedChanges => Ok((
                Verdict::Passed,
                "Unstaged changes reported; covered by the uncommitted-changes gate".to_string(),
            )),
            TrackingStatus::Unrecognized(text) => Ok((
                Verdict::Warned,
                format!(
                    "Unrecognized tracking status: {}",
                    text.lines().last().unwrap_or_default()
                ),
            )),
        }
    }

    fn current_branch(&mut self) -> Result<String> {
        if let Some(branch) = &self.context.current_branch {
            return Ok(branch.clone());
        }
        let branch = self.vcs.current_branch()?;
        self.context.current_branch = Some(branch.clone());
        Ok(branch)
    }
}
