// Rust guideline compliant 2026-02-06

//! Integration tests for prready hooks.

use git2::{BranchType, Repository, RepositoryInitOptions, Signature};
use prready_core::{Config, GateKind, NullReporter};
use prready_hooks::{install_pre_push_hook, pre_push_hook, PushInvocation, HOOK_MARKER};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn init_repo(path: &Path) -> Repository {
    let mut options = RepositoryInitOptions::new();
    options.initial_head("main");
    Repository::init_opts(path, &options).expect("Failed to init repo")
}

fn commit_readme(repo: &Repository) {
    let workdir = repo.workdir().expect("Repo has a workdir");
    fs::write(workdir.join("README.md"), "hello\n").expect("Failed to write README");
    let mut index = repo.index().expect("Failed to open index");
    index.add_path(Path::new("README.md")).expect("Failed to stage");
    index.write().expect("Failed to write index");
    let tree = repo
        .find_tree(index.write_tree().expect("Failed to write tree"))
        .expect("Failed to find tree");
    let signature = Signature::now("Tester", "tester@example.com").expect("Signature");
    repo.commit(Some("HEAD"), &signature, &signature, "Initial commit", &tree, &[])
        .expect("Failed to commit");
}

/// A repository pushed to a bare `origin` with `main` tracking `origin/main`.
fn synced_repo(temp_dir: &TempDir) -> Repository {
    let remote_path = temp_dir.path().join("remote.git");
    let mut bare_options = RepositoryInitOptions::new();
    bare_options.bare(true).initial_head("main");
    Repository::init_opts(&remote_path, &bare_options).expect("Failed to init remote");

    let repo = init_repo(&temp_dir.path().join("local"));
    commit_readme(&repo);
    {
        let mut remote = repo
            .remote("origin", remote_path.to_str().expect("UTF-8 path"))
            .expect("Failed to add remote");
        remote
            .push(&["refs/heads/main:refs/heads/main"], None)
            .expect("Failed to push");
        remote
            .fetch(&[] as &[&str], None, None)
            .expect("Failed to fetch");
    }
    repo.find_branch("main", BranchType::Local)
        .expect("main branch")
        .set_upstream(Some("origin/main"))
        .expect("Failed to set upstream");
    repo.reference_symbolic(
        "refs/remotes/origin/HEAD",
        "refs/remotes/origin/main",
        true,
        "remote HEAD",
    )
    .expect("Failed to set remote HEAD");
    repo
}

fn skip_build_config() -> Config {
    Config {
        skip_build: true,
        ..Config::default()
    }
}

#[test]
fn test_pre_push_passes_on_clean_repository() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let repo = synced_repo(&temp_dir);
    let workdir = repo.workdir().expect("workdir").to_path_buf();

    let invocation = PushInvocation {
        remote_name: Some("origin".to_string()),
        remote_url: None,
        updates: Vec::new(),
    };
    let report = pre_push_hook(&workdir, &skip_build_config(), &invocation, &mut NullReporter)
        .expect("Pre-push hook failed");

    assert_eq!(report.current_branch, "main");
    assert_eq!(report.default_branch, "main");
}

#[test]
fn test_pre_push_rejects_untracked_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let repo = synced_repo(&temp_dir);
    let workdir = repo.workdir().expect("workdir").to_path_buf();
    fs::write(workdir.join("scratch.txt"), "wip").expect("Failed to write file");

    let err = pre_push_hook(
        &workdir,
        &skip_build_config(),
        &PushInvocation::default(),
        &mut NullReporter,
    )
    .expect_err("Pre-push hook should fail");

    let core_err = err
        .downcast_ref::<prready_core::Error>()
        .expect("Core error");
    assert_eq!(core_err.gate(), Some(GateKind::UntrackedFiles));
}

#[test]
fn test_pre_push_build_failure_stops_run() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let repo = synced_repo(&temp_dir);
    let workdir = repo.workdir().expect("workdir").to_path_buf();
    fs::write(workdir.join("scratch.txt"), "wip").expect("Failed to write file");

    let config = Config {
        build_command: vec!["false".to_string()],
        ..Config::default()
    };
    let err = pre_push_hook(&workdir, &config, &PushInvocation::default(), &mut NullReporter)
        .expect_err("Pre-push hook should fail");

    let core_err = err
        .downcast_ref::<prready_core::Error>()
        .expect("Core error");
    assert_eq!(core_err.gate(), Some(GateKind::Build));
}

#[test]
fn test_install_writes_executable_hook() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    init_repo(temp_dir.path());

    let hook_path = install_pre_push_hook(temp_dir.path(), false).expect("Install failed");

    assert!(hook_path.ends_with(".git/hooks/pre-push"));
    let content = fs::read_to_string(&hook_path).expect("Failed to read hook");
    assert!(content.starts_with("#!/bin/sh\n"));
    assert!(content.contains(HOOK_MARKER));
    assert!(content.contains("prready hooks pre-push \"$@\""));

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mode = fs::metadata(&hook_path).expect("metadata").permissions().mode();
        assert_eq!(mode & 0o111, 0o111);
    }
}

#[test]
fn test_install_is_repeatable() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    init_repo(temp_dir.path());

    install_pre_push_hook(temp_dir.path(), false).expect("First install failed");
    install_pre_push_hook(temp_dir.path(), false).expect("Second install failed");
}

#[test]
fn test_install_refuses_foreign_hook_without_force() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let repo = init_repo(temp_dir.path());
    let hooks_dir = repo.path().join("hooks");
    fs::create_dir_all(&hooks_dir).expect("Failed to create hooks dir");
    fs::write(hooks_dir.join("pre-push"), "#!/bin/sh\nexit 0\n").expect("Failed to write hook");

    assert!(install_pre_push_hook(temp_dir.path(), false).is_err());

    install_pre_push_hook(temp_dir.path(), true).expect("Forced install failed");
    let content = fs::read_to_string(hooks_dir.join("pre-push")).expect("Failed to read hook");
    assert!(content.contains(HOOK_MARKER));
}

fn run_hook_binary(workdir: &Path, envs: &[(&str, &str)]) -> std::process::Output {
    let mut command = std::process::Command::new(env!("CARGO_BIN_EXE_prready-pre-push"));
    command
        .args(["origin", "unused-url"])
        .current_dir(workdir)
        .stdin(std::process::Stdio::null())
        .env("PRREADY_SKIP_BUILD", "true")
        .env_remove("RUST_LOG");
    for (key, value) in envs {
        command.env(key, value);
    }
    command.output().expect("Failed to run hook binary")
}

#[test]
fn test_hook_binary_reports_rejection_with_bell() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let repo = synced_repo(&temp_dir);
    let workdir = repo.workdir().expect("workdir").to_path_buf();
    fs::write(workdir.join("scratch.txt"), "wip").expect("Failed to write file");

    let output = run_hook_binary(&workdir, &[("NO_COLOR", "1")]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("✗ Push rejected:"), "stderr: {}", stderr);
    assert!(stderr.contains("scratch.txt"));
    assert!(stderr.ends_with('\x07'));
    assert!(!stderr.contains("Error: "));
}

#[test]
fn test_hook_binary_logs_with_rust_log() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let repo = synced_repo(&temp_dir);
    let workdir = repo.workdir().expect("workdir").to_path_buf();

    let output = run_hook_binary(&workdir, &[("RUST_LOG", "debug")]);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(output.status.success(), "stderr: {}", stderr);
    assert!(stderr.contains("fetching remote"));
    assert!(stderr.contains("All checks passed."));
}
