//! Repl command implementation.
//!
//! Reads source one line at a time, scanning each line on its own and
//! printing its tokens before asking for the next one.

use std::io::{self, BufRead, Write};

use crate::commands::common::{scan_input, CommandOutcome, Emitter, OutputFormat, ScanSummary};
use crate::commands::traits::{Command, CommandDescription};
use crate::config::Config;
use crate::error::Result;

/// Arguments for the repl command.
#[derive(Debug, Clone, Default)]
pub struct ReplArgs {
    /// Prompt, overriding the configuration.
    pub prompt: Option<String>,
    /// Output format, overriding the configuration.
    pub format: Option<OutputFormat>,
    /// Leave with exit code 65 after the first line with lexical errors.
    pub exit_on_error: bool,
}

/// Repl command handler.
pub struct ReplCommand {
    args: ReplArgs,
    config: Config,
}

impl ReplCommand {
    /// Create a new ReplCommand using the given configuration.
    pub fn with_config(args: ReplArgs, config: Config) -> Self {
        Self { args, config }
    }

    /// Execute the command on stdin, stdout and stderr.
    pub fn run(&self) -> Result<CommandOutcome> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        let stderr = io::stderr();
        self.run_with(stdin.lock(), stdout.lock(), stderr.lock())
    }

    /// Execute the command on the given streams.
    pub fn run_with<R, W, E>(&self, mut input: R, out: W, err: E) -> Result<CommandOutcome>
    where
        R: BufRead,
        W: Write,
        E: Write,
    {
        let prompt = self.prompt();
        let exit_on_error = self.exit_on_error();
        let output = &self.config.output;
        let format = self.args.format.unwrap_or(output.format);

        let mut emitter = Emitter::new(out, err, format, output.show_comments);
        let mut total = ScanSummary::default();
        let mut line = String::new();

        loop {
            write!(emitter.out(), "{}", prompt)?;
            emitter.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                writeln!(emitter.out())?;
                break;
            }

            let summary = scan_input(line.as_bytes(), None, &mut emitter, output.stop_on_error)?;
            total.merge(summary);

            tracing::debug!(tokens = summary.tokens, errors = summary.errors, "line scanned");

            if summary.errors > 0 && exit_on_error {
                emitter.flush()?;
                tracing::debug!(lines = total.inputs, "leaving after lexical error");
                return Ok(CommandOutcome::data_error(total));
            }
        }

        emitter.flush()?;
        Ok(CommandOutcome::success(total))
    }

    /// Prompt printed before each line.
    pub fn prompt(&self) -> &str {
        self.args
            .prompt
            .as_deref()
            .unwrap_or(&self.config.repl.prompt)
    }

    /// Whether an erroneous line ends the session.
    pub fn exit_on_error(&self) -> bool {
        self.args.exit_on_error || self.config.repl.exit_on_error
    }
}

impl Command for ReplCommand {
    type Args = ReplArgs;
    type Output = CommandOutcome;

    fn new(args: Self::Args) -> Self {
        Self::with_config(args, Config::default())
    }

    fn execute(&self) -> Result<Self::Output> {
        self.run()
    }

    fn name() -> &'static str {
        "repl"
    }
}

impl CommandDescription for ReplCommand {
    fn description() -> &'static str {
        "Scan source typed at an interactive prompt"
    }

    fn help() -> &'static str {
        "Prints a prompt, scans each line read from stdin and prints its \
         tokens. Lexical errors are reported and the session continues \
         unless --exit-on-error is given. Ends at end of input."
    }
}

/// Run the repl command.
pub fn run_repl(args: ReplArgs, config: Config) -> Result<CommandOutcome> {
    let command = ReplCommand::with_config(args, config);
    tracing::debug!(command = ReplCommand::name(), prompt = command.prompt(), "running");
    command.execute()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::common::exit_codes;

    fn session(command: &ReplCommand, input: &str) -> (CommandOutcome, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let outcome = command
            .run_with(input.as_bytes(), &mut out, &mut err)
            .unwrap();
        (
            outcome,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn test_empty_input_prints_one_prompt() {
        let command = ReplCommand::new(ReplArgs::default());
        let (outcome, out, err) = session(&command, "");

        assert_eq!(outcome.exit_code, exit_codes::SUCCESS);
        assert_eq!(outcome.summary.inputs, 0);
        assert_eq!(out, "> \n");
        assert!(err.is_empty());
    }

    #[test]
    fn test_each_line_is_scanned_separately() {
        let command = ReplCommand::new(ReplArgs::default());
        let (outcome, out, _) = session(&command, "1+1\nprint x;\n");

        assert_eq!(outcome.summary.inputs, 2);
        assert_eq!(
            out,
            "> Number line 1 number literal: 1\n\
             Plus line 1\n\
             Number line 1 number literal: 1\n\
             > Print line 1\n\
             Identifier line 1 identifier: \"x\"\n\
             Semicolon line 1\n\
             > \n"
        );
    }

    #[test]
    fn test_errors_do_not_end_session() {
        let command = ReplCommand::new(ReplArgs::default());
        let (outcome, out, err) = session(&command, "@\nx\n");

        assert_eq!(outcome.exit_code, exit_codes::SUCCESS);
        assert_eq!(outcome.summary.errors, 1);
        assert_eq!(err, "Error: unexpected symbol: @ (1:1)\n");
        assert!(out.contains("Identifier line 1 identifier: \"x\""));
    }

    #[test]
    fn test_exit_on_error() {
        let command = ReplCommand::new(ReplArgs {
            exit_on_error: true,
            ..ReplArgs::default()
        });
        let (outcome, out, _) = session(&command, "\"open\nx\n");

        assert_eq!(outcome.exit_code, exit_codes::DATA_ERROR);
        assert_eq!(outcome.summary.inputs, 1);
        assert!(!out.contains("Identifier"));
    }

    #[test]
    fn test_last_line_without_newline() {
        let command = ReplCommand::new(ReplArgs::default());
        let (outcome, out, _) = session(&command, "x");

        assert_eq!(outcome.summary.inputs, 1);
        assert_eq!(out, "> Identifier line 1 identifier: \"x\"\n> \n");
    }

    #[test]
    fn test_prompt_from_args_then_config() {
        let mut config = Config::default();
        config.repl.prompt = "lox> ".to_string();

        let from_config = ReplCommand::with_config(ReplArgs::default(), config.clone());
        assert_eq!(from_config.prompt(), "lox> ");

        let from_args = ReplCommand::with_config(
            ReplArgs {
                prompt: Some(">> ".to_string()),
                ..ReplArgs::default()
            },
            config,
        );
        assert_eq!(from_args.prompt(), ">> ");
    }

    #[test]
    fn test_exit_on_error_from_config() {
        let mut config = Config::default();
        config.repl.exit_on_error = true;
        let command = ReplCommand::with_config(ReplArgs::default(), config);
        assert!(command.exit_on_error());
    }

    #[test]
    fn test_json_format() {
        let command = ReplCommand::new(ReplArgs {
            prompt: Some(String::new()),
            format: Some(OutputFormat::Json),
            ..ReplArgs::default()
        });
        let (_, out, _) = session(&command, "and\n");

        let first: serde_json::Value = serde_json::from_str(out.lines().next().unwrap()).unwrap();
        assert_eq!(first, serde_json::json!({"kind": "And", "line": 1}));
    }

    #[test]
    fn test_command_metadata() {
        assert_eq!(ReplCommand::name(), "repl");
        assert!(!ReplCommand::description().is_empty());
        assert!(!ReplCommand::help().is_empty());
    }
}
