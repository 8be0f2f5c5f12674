// Rust guideline compliant 2026-02-12

//! [`Vcs`] implementation over libgit2.

use crate::command::{CommandRunner, CommandSpec, ProcessRunner};
use crate::status::TrackingStatus;
use crate::vcs::Vcs;
use crate::{Error, Result};
use git2::{
    BranchType, Cred, Direction, ErrorCode, FetchOptions, RemoteCallbacks, Repository, Status,
    StatusOptions,
};
use std::path::{Path, PathBuf};

/// A git repository with a working tree.
pub struct GitRepository {
    repo: Repository,
    remote: String,
    runner: ProcessRunner,
}

impl GitRepository {
    /// Discovers the repository containing `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if no repository is found or it has no working tree.
    pub fn discover(path: &Path, remote: impl Into<String>) -> Result<Self> {
        let repo = Repository::discover(path)?;
        let workdir = repo
            .workdir()
            .ok_or_else(|| {
                Error::Git(git2::Error::from_str(
                    "repository has no working tree (bare repository)",
                ))
            })?
            .to_path_buf();
        Ok(Self {
            repo,
            remote: remote.into(),
            runner: ProcessRunner::new(workdir),
        })
    }

    /// Root of the working tree.
    pub fn workdir(&self) -> PathBuf {
        self.runner.working_dir().to_path_buf()
    }

    fn statuses(&self, include_untracked: bool) -> Result<Vec<(Status, String)>> {
        let mut options = StatusOptions::new();
        options
            .include_untracked(include_untracked)
            .recurse_untracked_dirs(include_untracked)
            .include_ignored(false);
        let statuses = self.repo.statuses(Some(&mut options))?;
        Ok(statuses
            .iter()
            .map(|entry| {
                (
                    entry.status(),
                    String::from_utf8_lossy(entry.path_bytes()).to_string(),
                )
            })
            .collect())
    }

    fn remote_ref(&self, branch: &str) -> String {
        format!("refs/remotes/{}/{}", self.remote, branch)
    }

    fn head_oid(&self) -> Result<git2::Oid> {
        let head = self.repo.head()?;
        head.target()
            .ok_or_else(|| Error::Git(git2::Error::from_str("HEAD does not point at a commit")))
    }

    fn callbacks(&self) -> Result<RemoteCallbacks<'static>> {
        let mut callbacks = RemoteCallbacks::new();
        let config = self.repo.config()?;
        callbacks.credentials(move |url, username_from_url, _allowed| {
            Cred::credential_helper(&config, url, username_from_url)
                .or_else(|_| Cred::default())
                .or_else(|_| Cred::ssh_key_from_agent(username_from_url.unwrap_or("git")))
        });
        Ok(callbacks)
    }
}

impl Vcs for GitRepository {
    fn remote(&self) -> &str {
        &self.remote
    }

    fn untracked_files(&self) -> Result<Vec<String>> {
        Ok(self
            .statuses(true)?
            .into_iter()
            .filter(|(status, _)| status.is_wt_new())
            .map(|(_, path)| path)
            .collect())
    }

    fn uncommitted_changes(&self) -> Result<Vec<String>> {
        Ok(self
            .statuses(false)?
            .into_iter()
            .filter(|(status, _)| !status.is_ignored() && *status != Status::CURRENT)
            .map(|(_, path)| path)
            .collect())
    }

    fn fetch(&self) -> Result<()> {
        tracing::debug!(remote = %self.remote, "fetching remote");
        let mut remote = self.repo.find_remote(&self.remote)?;
        let mut fetch_options = FetchOptions::new();
        fetch_options.remote_callbacks(self.callbacks()?);
        remote.fetch(&[] as &[&str], Some(&mut fetch_options), None)?;
        Ok(())
    }

    fn default_branch(&self) -> Result<String> {
        let prefix = format!("refs/remotes/{}/", self.remote);
        match self.repo.find_reference(&self.remote_ref("HEAD")) {
            Ok(head) => {
                if let Some(target) = head.symbolic_target() {
                    if let Some(name) = target.strip_prefix(&prefix) {
                        return Ok(name.to_string());
                    }
                }
            }
            Err(err) if err.code() == ErrorCode::NotFound => {}
            Err(err) => return Err(err.into()),
        }

        tracing::debug!(remote = %self.remote, "no remote HEAD ref; asking the remote");
        let mut remote = self.repo.find_remote(&self.remote)?;
        let connection = remote.connect_auth(Direction::Fetch, Some(self.callbacks()?), None)?;
        let advertised = connection.default_branch()?;
        let name = advertised
            .as_str()
            .ok_or_else(|| Error::Git(git2::Error::from_str("default branch is not valid UTF-8")))?;
        Ok(name.strip_prefix("refs/heads/").unwrap_or(name).to_string())
    }

    fn behind_count(&self, default_branch: &str) -> Result<usize> {
        let upstream = self
            .repo
            .refname_to_id(&self.remote_ref(default_branch))?;
        let (_ahead, behind) = self.repo.graph_ahead_behind(self.head_oid()?, upstream)?;
        Ok(behind)
    }

    fn current_branch(&self) -> Result<String> {
        let head = self.repo.head()?;
        if !head.is_branch() {
            return Ok("HEAD".to_string());
        }
        head.shorthand()
            .map(str::to_string)
            .ok_or_else(|| Error::Git(git2::Error::from_str("branch name is not valid UTF-8")))
    }

    fn remote_branch_exists(&self, branch: &str) -> Result<bool> {
        match self.repo.find_reference(&self.remote_ref(branch)) {
            Ok(_) => Ok(true),
            Err(err) if err.code() == ErrorCode::NotFound => Ok(false),
            Err(err) => Err(err.into()),
        }
    }

    fn tracking_status(&self) -> Result<TrackingStatus> {
        let branch_name = self.current_branch()?;
        if branch_name == "HEAD" {
            return Ok(TrackingStatus::Unrecognized(
                "HEAD is detached".to_string(),
            ));
        }
        let branch = self.repo.find_branch(&branch_name, BranchType::Local)?;
        let upstream = match branch.upstream() {
            Ok(upstream) => upstream,
            Err(err) if err.code() == ErrorCode::NotFound => {
                return Ok(TrackingStatus::Unrecognized(format!(
                    "no upstream configured for '{}'",
                    branch_name
                )));
            }
            Err(err) => return Err(err.into()),
        };
        let upstream_oid = upstream
            .get()
            .target()
            .ok_or_else(|| Error::Git(git2::Error::from_str("upstream has no target")))?;
        let (ahead, behind) = self
            .repo
            .graph_ahead_behind(self.head_oid()?, upstream_oid)?;
        Ok(TrackingStatus::from_counts(ahead, behind))
    }

    fn status_summary(&self) -> Result<String> {
        let spec = CommandSpec::new("git", ["status", "-uno"]).env("LC_ALL", "C");
        let output = self.runner.capture(&spec)?;
        if !output.success() {
            return Err(Error::Git(git2::Error::from_str(&format!(
                "`{}` failed: {}",
                spec,
                output.stderr.trim()
            ))));
        }
        Ok(output.stdout)
    }
}
