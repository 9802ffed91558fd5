//! Command modules for the loxt CLI.
//!
//! Each subcommand is implemented in its own file following the same
//! pattern: an `Args` struct, a handler implementing `Command`, and a
//! `run_*` entry point used by `main`.

pub mod common;
pub mod traits;

pub mod keywords;
pub mod repl;
pub mod scan;

pub use keywords::{run_keywords, KeywordsArgs};
pub use repl::{run_repl, ReplArgs};
pub use scan::{run_scan, ScanArgs};
