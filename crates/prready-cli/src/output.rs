// Rust guideline compliant 2026-02-06

//! Output formatting module for the prready CLI.
//!
//! Gate progress is written to stderr as colored status lines. The `table`
//! format appends a summary table; the `json` format stays silent while the
//! checks run and produces one JSON document for stdout at the end.

use prready_core::{CheckReport, GateKind, GateRecord, Reporter, Verdict};
use serde::Serialize;
use std::io::Write;
use tabled::{builder::Builder, settings::Style};
use termcolor::{Color, WriteColor};

use crate::terminal::{
    ring_bell, write_error, write_info, write_status, write_success, write_warning,
};

/// Output format selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Colored status lines.
    #[default]
    Plain,
    /// Status lines plus a summary table.
    Table,
    /// A single JSON document on stdout.
    Json,
}

/// Returns the gate that failed, if `err` is a gate failure.
pub fn failed_gate(err: &anyhow::Error) -> Option<GateKind> {
    err.downcast_ref::<prready_core::Error>()
        .and_then(prready_core::Error::gate)
}

fn verdict_label(verdict: Verdict) -> &'static str {
    match verdict {
        Verdict::Passed => "passed",
        Verdict::Warned => "warning",
        Verdict::Skipped => "skipped",
        Verdict::Failed => "failed",
    }
}

/// Renders gate records as a table.
pub fn render_table(records: &[GateRecord]) -> String {
    let mut builder = Builder::default();
    builder.push_record(vec!["Gate", "Result", "Details"]);
    for record in records {
        let details = record.message.lines().next().unwrap_or_default();
        builder.push_record(vec![
            record.gate.label(),
            verdict_label(record.verdict),
            details,
        ]);
    }

    let mut table = builder.build();
    table.with(Style::modern());
    table.to_string()
}

#[derive(Serialize)]
struct JsonRun<'a> {
    passed: bool,
    checked_at: String,
    current_branch: Option<&'a str>,
    remote: Option<&'a str>,
    default_branch: Option<&'a str>,
    gates: &'a [GateRecord],
    warnings: Vec<&'a str>,
    failed_gate: Option<GateKind>,
    error: Option<String>,
}

/// Renders the outcome of a run as a JSON document.
pub fn render_json(
    outcome: Result<&CheckReport, &anyhow::Error>,
    records: &[GateRecord],
) -> String {
    let warnings = records
        .iter()
        .filter(|record| record.verdict == Verdict::Warned)
        .map(|record| record.message.as_str())
        .collect();
    let run = match outcome {
        Ok(report) => JsonRun {
            passed: true,
            checked_at: chrono::Utc::now().to_rfc3339(),
            current_branch: Some(report.current_branch.as_str()),
            remote: Some(report.remote.as_str()),
            default_branch: Some(report.default_branch.as_str()),
            gates: records,
            warnings,
            failed_gate: None,
            error: None,
        },
        Err(err) => JsonRun {
            passed: false,
            checked_at: chrono::Utc::now().to_rfc3339(),
            current_branch: None,
            remote: None,
            default_branch: None,
            gates: records,
            warnings,
            failed_gate: failed_gate(err),
            error: Some(format!("{:#}", err)),
        },
    };
    serde_json::to_string_pretty(&run)
        .unwrap_or_else(|_| serde_json::json!({ "error": "Failed to serialize run" }).to_string())
}

/// [`Reporter`] writing gate progress to a terminal stream.
pub struct TerminalReporter<W: WriteColor> {
    out: W,
    format: OutputFormat,
    records: Vec<GateRecord>,
}

impl<W: WriteColor> TerminalReporter<W> {
    /// Creates a reporter.
    ///
    /// # Arguments
    /// * `out` - Stream for progress lines (normally stderr)
    /// * `format` - Selected output format
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self {
            out,
            format,
            records: Vec::new(),
        }
    }

    /// Gates reported so far.
    pub fn records(&self) -> &[GateRecord] {
        &self.records
    }

    /// Writes the closing lines of a run.
    ///
    /// On failure the terminal bell is rung.
    ///
    /// # Returns
    /// The JSON document to print on stdout when the format is `json`.
    pub fn finish(&mut self, outcome: Result<&CheckReport, &anyhow::Error>) -> Option<String> {
        if self.format == OutputFormat::Json {
            return Some(render_json(outcome, &self.records));
        }

        if self.format == OutputFormat::Table && !self.records.is_empty() {
            let table = render_table(&self.records);
            let _ = writeln!(self.out, "{}", table);
        }

        match outcome {
            Ok(report) => write_success(&mut self.out, &report.summary()),
            Err(err) => {
                match failed_gate(err) {
                    Some(gate) => write_error(
                        &mut self.out,
                        &format!("Push rejected: {} check failed.", gate),
                    ),
                    None => write_error(&mut self.out, &format!("{:#}", err)),
                }
                ring_bell(&mut self.out);
            }
        }
        None
    }

    /// Returns the underlying stream.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: WriteColor> Reporter for TerminalReporter<W> {
    fn gate_started(&mut self, gate: GateKind) {
        if self.format == OutputFormat::Json {
            return;
        }
        if matches!(gate, GateKind::Build | GateKind::Lint | GateKind::RemoteSync) {
            write_info(&mut self.out, &format!("{}...", gate));
        }
    }

    fn gate_finished(&mut self, record: &GateRecord) {
        self.records.push(record.clone());
        if self.format == OutputFormat::Json {
            return;
        }
        let line = format!("{}: {}", record.gate, record.message);
        match record.verdict {
            Verdict::Passed => write_success(&mut self.out, &line),
            Verdict::Warned => write_warning(&mut self.out, &line),
            Verdict::Skipped => write_status(&mut self.out, "-", Color::Cyan, &line),
            Verdict::Failed => write_error(&mut self.out, &line),
        }
    }
}
