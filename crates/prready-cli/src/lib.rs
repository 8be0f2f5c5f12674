// Rust guideline compliant 2026-02-06

//! prready CLI library.
//!
//! This library exposes the CLI modules for use in tests and external code.

pub mod commands;
pub mod output;

pub use prready_hooks::{telemetry, terminal};

pub use output::{render_json, render_table, OutputFormat, TerminalReporter};
pub use terminal::should_use_color;
