// Rust guideline compliant 2026-02-06

//! Implementation of the `prready config` commands.

use anyhow::Result;
use prready_core::{Config, GitRepository, CONFIG_FILE_NAME};
use std::path::{Path, PathBuf};

/// Config subcommands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration as TOML
    Show,
    /// Write a default .prready.toml at the repository root
    Init,
}

/// Returns the working-tree root of the repository containing `path`.
///
/// # Errors
///
/// Returns an error if `path` is not inside a non-bare repository.
pub fn repo_root(path: &Path) -> Result<PathBuf> {
    let repo = GitRepository::discover(path, "origin")
        .map_err(|_| anyhow::anyhow!("Not a git repository. Run 'git init' first."))?;
    Ok(repo.workdir())
}

/// Loads the effective configuration.
///
/// # Arguments
///
/// * `repo_root` - Working-tree root
/// * `config_path` - Explicit config file overriding `<repo_root>/.prready.toml`
///
/// # Errors
///
/// Returns an error if the configuration is invalid.
pub fn load_config(repo_root: &Path, config_path: Option<&Path>) -> Result<Config> {
    let config = match config_path {
        Some(path) => Config::load_from(path)?,
        None => Config::load(repo_root)?,
    };
    Ok(config)
}

/// Runs a config action in the current repository.
///
/// # Errors
///
/// Returns an error if the repository cannot be found, the configuration is
/// invalid, or the config file cannot be written.
pub fn execute(action: ConfigAction, config_path: Option<&Path>) -> Result<()> {
    let root = repo_root(&std::env::current_dir()?)?;
    match action {
        ConfigAction::Show => {
            let config = load_config(&root, config_path)?;
            print!("{}", config.to_toml()?);
        }
        ConfigAction::Init => {
            let path = root.join(CONFIG_FILE_NAME);
            if path.exists() {
                println!("{} already exists; leaving it unchanged.", path.display());
            } else {
                Config::default().save(&root)?;
                println!("✓ Wrote {}", path.display());
            }
        }
    }
    Ok(())
}
