//! Command traits for the loxt CLI.
//!
//! Every subcommand handler implements [`Command`] so that `main` can drive
//! them the same way, and [`CommandDescription`] for its help text.

use crate::error::Result;

/// Standard command trait that all loxt commands implement.
///
/// # Type Parameters
/// * `Args` - The arguments type for this command
/// * `Output` - The output type returned by this command
pub trait Command {
    /// The arguments type for this command.
    type Args;

    /// The output type returned by this command.
    type Output;

    /// Create a new command instance with the given arguments and the
    /// default configuration.
    fn new(args: Self::Args) -> Self;

    /// Execute the command against the process's standard streams.
    fn execute(&self) -> Result<Self::Output>;

    /// Get the command name.
    fn name() -> &'static str;
}

/// Short and long help text of a command.
pub trait CommandDescription {
    /// A brief one-line description.
    fn description() -> &'static str;

    /// Multi-line help text explaining usage.
    fn help() -> &'static str;
}
