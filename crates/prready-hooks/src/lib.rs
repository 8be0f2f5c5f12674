// Rust guideline compliant 2026-02-06

//! prready Git Hooks
//!
//! This crate provides the Git hook side of prready:
//! - Pre-push readiness checks
//! - Hook installation
//! - Terminal and logging setup shared by the binaries

pub mod install;
pub mod pre_push;
pub mod telemetry;
pub mod terminal;

pub use install::{install_pre_push_hook, HOOK_MARKER};
pub use pre_push::{parse_push_updates, pre_push_hook, PlainReporter, PushInvocation, PushUpdate};
