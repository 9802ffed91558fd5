//! Scan command implementation.
//!
//! Scans one or more Lox source files (or stdin, given as `-`) and prints
//! every token and lexical error found.

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::commands::common::{
    error_messages, scan_input, CommandOutcome, Emitter, OutputFormat, ScanSummary,
};
use crate::commands::traits::{Command, CommandDescription};
use crate::config::{Config, OutputConfig};
use crate::error::{LoxtError, Result};

/// Path that stands for standard input.
pub const STDIN_PATH: &str = "-";

/// Arguments for the scan command.
#[derive(Debug, Clone, Default)]
pub struct ScanArgs {
    /// Enable verbose output.
    pub verbose: bool,
    /// Input files to scan.
    pub input: Vec<PathBuf>,
    /// Output format, overriding the configuration.
    pub format: Option<OutputFormat>,
    /// Hide comment tokens.
    pub no_comments: bool,
    /// Stop each input at its first lexical error.
    pub stop_on_error: bool,
}

/// Scan command handler.
pub struct ScanCommand {
    args: ScanArgs,
    config: Config,
}

impl ScanCommand {
    /// Create a new ScanCommand using the given configuration.
    pub fn with_config(args: ScanArgs, config: Config) -> Self {
        Self { args, config }
    }

    /// Execute the command against stdout and stderr.
    pub fn run(&self) -> Result<CommandOutcome> {
        let stdout = io::stdout();
        let stderr = io::stderr();
        self.run_with(stdout.lock(), stderr.lock())
    }

    /// Execute the command, writing tokens to `out` and errors to `err`.
    pub fn run_with<W: Write, E: Write>(&self, out: W, err: E) -> Result<CommandOutcome> {
        let start_time = Instant::now();

        let output = self.get_output_config();
        let mut emitter = Emitter::new(out, err, output.format, output.show_comments);
        let (summary, files_failed) = self.process_all_files(&mut emitter, output.stop_on_error)?;
        emitter.flush()?;

        tracing::debug!(
            inputs = summary.inputs,
            tokens = summary.tokens,
            errors = summary.errors,
            elapsed_ms = start_time.elapsed().as_millis() as u64,
            "scan finished"
        );
        self.check_for_failures(files_failed)?;

        if summary.errors > 0 {
            Ok(CommandOutcome::data_error(summary))
        } else {
            Ok(CommandOutcome::success(summary))
        }
    }

    /// Get the effective output configuration.
    pub fn get_output_config(&self) -> OutputConfig {
        let mut config = self.config.output.clone();

        if let Some(format) = self.args.format {
            config.format = format;
        }

        if self.args.no_comments {
            config.show_comments = false;
        }

        if self.args.stop_on_error {
            config.stop_on_error = true;
        }

        config
    }

    /// Scan every input and return the merged summary with the failure count.
    fn process_all_files<W: Write, E: Write>(
        &self,
        emitter: &mut Emitter<W, E>,
        stop_on_error: bool,
    ) -> Result<(ScanSummary, usize)> {
        let mut summary = ScanSummary::default();
        let mut files_failed = 0;

        for input_path in &self.args.input {
            match self.scan_file(input_path, emitter, stop_on_error) {
                Ok(file_summary) => summary.merge(file_summary),
                Err(e) => {
                    files_failed += 1;
                    tracing::warn!(path = %input_path.display(), error = %e, "failed to scan input");
                    writeln!(emitter.err(), "{}: {}", input_path.display(), e)?;
                },
            }
        }

        Ok((summary, files_failed))
    }

    /// Scan a single file, or stdin for `-`.
    fn scan_file<W: Write, E: Write>(
        &self,
        input_path: &Path,
        emitter: &mut Emitter<W, E>,
        stop_on_error: bool,
    ) -> Result<ScanSummary> {
        if input_path == Path::new(STDIN_PATH) {
            let stdin = io::stdin();
            return scan_input(stdin.lock(), Some("<stdin>"), emitter, stop_on_error);
        }

        self.validate_input_file(input_path)?;

        let file = File::open(input_path).map_err(|e| {
            LoxtError::FileOperation(format!("{}: {}", input_path.display(), e))
        })?;
        let source = input_path.display().to_string();

        if self.args.verbose {
            tracing::info!(path = %source, "scanning");
        }

        let summary = scan_input(BufReader::new(file), Some(&source), emitter, stop_on_error)?;
        tracing::debug!(
            path = %source,
            tokens = summary.tokens,
            errors = summary.errors,
            "scanned input"
        );
        Ok(summary)
    }

    /// Validate that input file exists and is a file.
    fn validate_input_file(&self, input_path: &Path) -> Result<()> {
        if !input_path.exists() {
            return Err(LoxtError::Validation(format!(
                "{} {}",
                error_messages::INPUT_PATH_NOT_EXIST,
                input_path.display()
            )));
        }

        if !input_path.is_file() {
            return Err(LoxtError::Validation(format!(
                "{} {}",
                error_messages::INPUT_PATH_NOT_FILE,
                input_path.display()
            )));
        }
        Ok(())
    }

    /// Check for inputs that could not be scanned and return error if any.
    fn check_for_failures(&self, files_failed: usize) -> Result<()> {
        if files_failed > 0 {
            return Err(LoxtError::CommandExecution(format!(
                "{} {}",
                files_failed,
                error_messages::FILES_FAILED
            )));
        }
        Ok(())
    }
}

impl Command for ScanCommand {
    type Args = ScanArgs;
    type Output = CommandOutcome;

    fn new(args: Self::Args) -> Self {
        Self::with_config(args, Config::default())
    }

    fn execute(&self) -> Result<Self::Output> {
        self.run()
    }

    fn name() -> &'static str {
        "scan"
    }
}

impl CommandDescription for ScanCommand {
    fn description() -> &'static str {
        "Scan Lox source files and print their tokens"
    }

    fn help() -> &'static str {
        "Reads each file (or stdin for '-'), prints one line per token and \
         reports lexical errors on stderr. Exits with code 65 if any lexical \
         error was found."
    }
}

/// Run the scan command.
pub fn run_scan(args: ScanArgs, config: Config) -> Result<CommandOutcome> {
    let command = ScanCommand::with_config(args, config);
    tracing::debug!(command = ScanCommand::name(), inputs = command.args.input.len(), "running");
    command.execute()
}
