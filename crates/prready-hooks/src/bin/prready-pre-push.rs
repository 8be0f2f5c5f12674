// Rust guideline compliant 2026-02-06

//! CLI entry point for the prready pre-push hook.

use prready_core::{CheckReport, Config, GitRepository};
use prready_hooks::telemetry::init_tracing;
use prready_hooks::terminal::{color_choice, ring_bell, should_use_color, write_error};
use prready_hooks::{parse_push_updates, pre_push_hook, PlainReporter, PushInvocation};
use std::process::ExitCode;
use termcolor::StandardStream;

fn run() -> anyhow::Result<CheckReport> {
    let mut args = std::env::args().skip(1);
    let cwd = std::env::current_dir()?;
    let workdir = GitRepository::discover(&cwd, "origin")?.workdir();
    let config = Config::load(&workdir)?;

    let invocation = PushInvocation {
        remote_name: args.next(),
        remote_url: args.next(),
        updates: parse_push_updates(std::io::stdin().lock())?,
    };

    let mut reporter = PlainReporter::new(std::io::stderr());
    pre_push_hook(&workdir, &config, &invocation, &mut reporter)
}

fn main() -> ExitCode {
    init_tracing(0);

    match run() {
        Ok(report) => {
            eprintln!("{}", report.summary());
            ExitCode::SUCCESS
        }
        Err(err) => {
            let mut stderr = StandardStream::stderr(color_choice(should_use_color()));
            write_error(&mut stderr, &format!("Push rejected: {:#}", err));
            ring_bell(&mut stderr);
            ExitCode::FAILURE
        }
    }
}
