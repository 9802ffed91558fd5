//! Keywords command implementation.

use std::io::{self, Write};

use loxc_lex::KEYWORDS;
use serde::Serialize;

use crate::commands::common::{CommandOutcome, OutputFormat, ScanSummary};
use crate::commands::traits::{Command, CommandDescription};
use crate::error::Result;

/// Arguments for the keywords command.
#[derive(Debug, Clone, Default)]
pub struct KeywordsArgs {
    /// Output format.
    pub format: OutputFormat,
}

#[derive(Serialize)]
struct KeywordRecord {
    keyword: &'static str,
    kind: &'static str,
}

/// Keywords command handler.
pub struct KeywordsCommand {
    args: KeywordsArgs,
}

impl KeywordsCommand {
    /// Print the keyword table to stdout.
    pub fn run(&self) -> Result<CommandOutcome> {
        let stdout = io::stdout();
        self.run_with(stdout.lock())
    }

    /// Print the keyword table to `out`.
    pub fn run_with<W: Write>(&self, mut out: W) -> Result<CommandOutcome> {
        match self.args.format {
            OutputFormat::Text => {
                for (keyword, kind) in KEYWORDS.iter() {
                    writeln!(out, "{:<8} {}", keyword, kind)?;
                }
            },
            OutputFormat::Json => {
                let records: Vec<KeywordRecord> = KEYWORDS
                    .iter()
                    .map(|(keyword, kind)| KeywordRecord {
                        keyword: *keyword,
                        kind: kind.name(),
                    })
                    .collect();
                writeln!(out, "{}", serde_json::to_string_pretty(&records)?)?;
            },
        }
        out.flush()?;
        Ok(CommandOutcome::success(ScanSummary::default()))
    }
}

impl Command for KeywordsCommand {
    type Args = KeywordsArgs;
    type Output = CommandOutcome;

    fn new(args: Self::Args) -> Self {
        Self { args }
    }

    fn execute(&self) -> Result<Self::Output> {
        self.run()
    }

    fn name() -> &'static str {
        "keywords"
    }
}

impl CommandDescription for KeywordsCommand {
    fn description() -> &'static str {
        "List the reserved words"
    }

    fn help() -> &'static str {
        "Prints every reserved word together with the token kind it scans to."
    }
}

/// Run the keywords command.
pub fn run_keywords(args: KeywordsArgs) -> Result<CommandOutcome> {
    KeywordsCommand::new(args).execute()
}
