//! Loxt CLI - command-line front end for the Lox scanner.
//!
//! This is the main entry point for the loxt CLI application.
//! It uses clap for argument parsing and dispatches to the matching
//! command handler based on user input.

mod commands;
mod config;
mod error;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::common::{exit_codes, CommandOutcome, OutputFormat};
use commands::traits::CommandDescription;
use commands::{run_keywords, run_repl, run_scan, KeywordsArgs, ReplArgs, ScanArgs};
use config::Config;
use error::{LoxtError, Result};

/// Loxt - A CLI for the Lox scanner
///
/// Loxt turns Lox source into tokens, either from files or typed at an
/// interactive prompt, and reports lexical errors with their position.
#[derive(Parser, Debug)]
#[command(name = "loxt")]
#[command(author = "Lox Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "A CLI for the Lox scanner", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "LOXT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "LOXT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "LOXT_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the loxt CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    #[command(
        about = commands::scan::ScanCommand::description(),
        long_about = commands::scan::ScanCommand::help()
    )]
    Scan(ScanCommand),

    #[command(
        about = commands::repl::ReplCommand::description(),
        long_about = commands::repl::ReplCommand::help()
    )]
    Repl(ReplCommand),

    #[command(
        about = commands::keywords::KeywordsCommand::description(),
        long_about = commands::keywords::KeywordsCommand::help()
    )]
    Keywords(KeywordsCommand),
}

/// Arguments for the scan subcommand.
#[derive(Parser, Debug)]
struct ScanCommand {
    /// Source files to scan ('-' reads stdin)
    #[arg(required = true)]
    input: Vec<PathBuf>,

    /// Output format (default: from config)
    #[arg(short = 'F', long, value_enum)]
    format: Option<OutputFormat>,

    /// Don't print comment tokens
    #[arg(long)]
    no_comments: bool,

    /// Stop each file at its first lexical error
    #[arg(long)]
    stop_on_error: bool,
}

/// Arguments for the repl subcommand.
#[derive(Parser, Debug)]
struct ReplCommand {
    /// Prompt shown before each line (default: from config)
    #[arg(short, long)]
    prompt: Option<String>,

    /// Output format (default: from config)
    #[arg(short = 'F', long, value_enum)]
    format: Option<OutputFormat>,

    /// Exit with code 65 after the first line with lexical errors
    #[arg(long)]
    exit_on_error: bool,
}

/// Arguments for the keywords subcommand.
#[derive(Parser, Debug)]
struct KeywordsCommand {
    /// Output format (default: from config)
    #[arg(short = 'F', long, value_enum)]
    format: Option<OutputFormat>,
}

/// Main entry point for the loxt CLI.
///
/// Parses command-line arguments, loads configuration, initializes logging,
/// and dispatches to the selected command. Exits with 65 when the scanned
/// source had lexical errors and with 1 when the tool itself failed.
fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(outcome) => ExitCode::from(outcome.exit_code),
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::from(exit_codes::FAILURE)
        },
    }
}

/// Load configuration, set up logging, and run the command.
fn run(cli: Cli) -> Result<CommandOutcome> {
    // Load configuration
    let config = load_config(cli.config.as_deref())?;
    let verbose = cli.verbose || config.verbose;

    // Initialize logging
    init_logging(verbose, cli.no_color)?;

    let outcome = execute_command(cli.command, verbose, config)?;
    tracing::debug!(
        inputs = outcome.summary.inputs,
        tokens = outcome.summary.tokens,
        errors = outcome.summary.errors,
        exit_code = outcome.exit_code,
        "command finished"
    );
    Ok(outcome)
}

/// Initialize the logging system.
///
/// Log events go to stderr so stdout only carries tokens.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| LoxtError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
fn execute_command(command: Commands, verbose: bool, config: Config) -> Result<CommandOutcome> {
    match command {
        Commands::Scan(args) => execute_scan(args, verbose, config),
        Commands::Repl(args) => execute_repl(args, config),
        Commands::Keywords(args) => execute_keywords(args, config),
    }
}

/// Execute the scan command.
fn execute_scan(args: ScanCommand, verbose: bool, config: Config) -> Result<CommandOutcome> {
    let scan_args = ScanArgs {
        verbose,
        input: args.input,
        format: args.format,
        no_comments: args.no_comments,
        stop_on_error: args.stop_on_error,
    };
    run_scan(scan_args, config)
}

/// Execute the repl command.
fn execute_repl(args: ReplCommand, config: Config) -> Result<CommandOutcome> {
    let repl_args = ReplArgs {
        prompt: args.prompt,
        format: args.format,
        exit_on_error: args.exit_on_error,
    };
    run_repl(repl_args, config)
}

/// Execute the keywords command.
fn execute_keywords(args: KeywordsCommand, config: Config) -> Result<CommandOutcome> {
    let keywords_args = KeywordsArgs {
        format: args.format.unwrap_or(config.output.format),
    };
    run_keywords(keywords_args)
}
