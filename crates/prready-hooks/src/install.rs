// Rust guideline compliant 2026-02-06

//! Installation of the pre-push hook script.

use anyhow::{Context, Result};
use git2::Repository;
use std::fs;
use std::path::{Path, PathBuf};

/// Marker line identifying hook scripts written by prready.
pub const HOOK_MARKER: &str = "# installed by prready";

/// Installs an executable `pre-push` hook that runs `prready hooks pre-push`.
///
/// Honors `core.hooksPath` when set. An existing hook written by prready is
/// replaced; any other existing hook is left alone unless `force` is set.
///
/// # Arguments
///
/// * `repo_path` - Any path inside the Git repository
/// * `force` - Overwrite a foreign `pre-push` hook
///
/// # Returns
///
/// The path of the installed hook.
///
/// # Errors
///
/// Returns an error if:
/// - The path is not inside a Git repository
/// - A foreign hook exists and `force` is not set
/// - The hook file cannot be written
pub fn install_pre_push_hook(repo_path: &Path, force: bool) -> Result<PathBuf> {
    let repo = Repository::discover(repo_path)
        .map_err(|_| anyhow::anyhow!("Not a git repository. Run 'git init' first."))?;
    let hooks_dir = hooks_dir(&repo)?;
    fs::create_dir_all(&hooks_dir)
        .with_context(|| format!("Failed to create {}", hooks_dir.display()))?;

    let hook_path = hooks_dir.join("pre-push");
    if hook_path.exists() && !force {
        let existing = fs::read_to_string(&hook_path).unwrap_or_default();
        if !existing.contains(HOOK_MARKER) {
            anyhow::bail!(
                "A pre-push hook already exists at {}. Re-run with --force to replace it.",
                hook_path.display()
            );
        }
    }

    let content = format!("#!/bin/sh\n{}\nexec prready hooks pre-push \"$@\"\n", HOOK_MARKER);
    fs::write(&hook_path, content)
        .with_context(|| format!("Failed to write {}", hook_path.display()))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = fs::metadata(&hook_path)?.permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&hook_path, perms)?;
    }

    tracing::info!(path = %hook_path.display(), "installed pre-push hook");
    Ok(hook_path)
}

fn hooks_dir(repo: &Repository) -> Result<PathBuf> {
    let config = repo.config()?;
    match config.get_path("core.hooksPath") {
        Ok(path) if path.is_absolute() => Ok(path),
        Ok(path) => {
            let base = repo.workdir().unwrap_or_else(|| repo.path());
            Ok(base.join(path))
        }
        Err(_) => Ok(repo.path().join("hooks")),
    }
}
