// Rust guideline compliant 2026-02-06

//! prready Core Library
//!
//! This crate provides the pieces of the pre-push readiness check:
//! - Gate identities, verdicts and failure reasons
//! - Configuration loading (file + environment)
//! - External command execution behind a trait seam
//! - Build tool adapter (clean build, lint discovery, lint run)
//! - Version-control queries and their libgit2 implementation
//! - Tracking status classification
//! - The gate checker itself

pub mod checker;
pub mod command;
pub mod config;
pub mod error;
pub mod gate;
pub mod git;
pub mod status;
pub mod toolchain;
pub mod vcs;

pub use checker::{CheckReport, Checker, NullReporter, Reporter};
pub use command::{CommandOutput, CommandRunner, CommandSpec, ProcessRunner};
pub use config::{Config, DivergenceSource, CONFIG_FILE_NAME};
pub use error::{Error, Result};
pub use gate::{GateFailure, GateKind, GateRecord, Verdict};
pub use git::GitRepository;
pub use status::TrackingStatus;
pub use toolchain::BuildTool;
pub use vcs::Vcs;
