// Rust guideline compliant 2026-02-06

//! Command implementations for the prready CLI.

pub mod check;
pub mod config;
pub mod hooks;
pub mod install;
