// Rust guideline compliant 2026-02-06

//! Implementation of the `prready install` command.

use anyhow::Result;

/// Installs the pre-push hook into the current repository.
///
/// # Arguments
///
/// * `force` - Replace an existing hook not written by prready
///
/// # Errors
///
/// Returns an error if the hook cannot be installed.
pub fn execute(force: bool) -> Result<()> {
    let hook_path = prready_hooks::install_pre_push_hook(&std::env::current_dir()?, force)?;
    println!("✓ Installed pre-push hook at {}", hook_path.display());
    Ok(())
}
