//! CLI module
//!
//! Provides the command-line presentation layer:
//! - derive: one-shot derivation
//! - repl: line-per-postulate loop over stdin

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{run, run_command};
pub use errors::{CliError, CliResult};
pub use io::{read_postulates, write_json_report, write_report, ReportEnvelope};
