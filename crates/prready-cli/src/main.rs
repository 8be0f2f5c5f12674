// Rust guideline compliant 2026-02-06

//! prready CLI Application
//!
//! Command-line interface for the prready pre-push readiness checks.

use clap::Parser;
use prready_cli::commands::{self, check::RunOptions, config::ConfigAction, hooks::HookAction};
use prready_cli::output::OutputFormat;
use prready_cli::telemetry::init_tracing;
use prready_cli::terminal::{color_choice, ring_bell, should_use_color, write_error};
use std::path::PathBuf;
use std::process::ExitCode;
use termcolor::StandardStream;

#[derive(Parser, Debug)]
#[command(
    name = "prready",
    version,
    about = "prready: PR-readiness checks for git pre-push",
    long_about = "prready runs a clean build, the lint task, working-tree checks and remote-sync checks, and rejects the push on the first failure.",
    after_help = "Examples:\n  prready install\n  prready check\n  prready check --format table\n  prready config show\n"
)]
struct Cli {
    /// Enable JSON output
    #[arg(long, global = true)]
    json: bool,

    /// Output format
    #[arg(long, value_enum, global = true)]
    format: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Custom config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Run every readiness check in the current repository
    Check,

    /// Run prready Git hooks
    Hooks {
        #[command(subcommand)]
        action: HookAction,
    },

    /// Install the pre-push hook
    Install {
        /// Replace an existing pre-push hook not written by prready
        #[arg(long)]
        force: bool,
    },

    /// Inspect or create configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let use_color = !cli.no_color && should_use_color();
    let format = match cli.format {
        Some(format) => format,
        None if cli.json => OutputFormat::Json,
        None => OutputFormat::Plain,
    };
    let options = RunOptions {
        config_path: cli.config.clone(),
        format,
        use_color,
    };

    let result = match cli.command {
        Some(Commands::Check) => commands::check::execute(&options),
        Some(Commands::Hooks { action }) => commands::hooks::execute(action, &options),
        Some(Commands::Install { force }) => commands::install::execute(force).map(|_| true),
        Some(Commands::Config { action }) => {
            commands::config::execute(action, cli.config.as_deref()).map(|_| true)
        }
        None => {
            println!("Use --help for usage information");
            Ok(true)
        }
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            let mut stderr = StandardStream::stderr(color_choice(use_color));
            write_error(&mut stderr, &format!("{:#}", err));
            ring_bell(&mut stderr);
            ExitCode::FAILURE
        }
    }
}
