//! CLI command implementations
//!
//! The CLI is a thin presentation layer: pass a string in, display a
//! string out. A derivation that fails still exits zero with its error
//! report on stdout; only I/O failures exit non-zero.

use crate::deriver::{self, DeriveError};
use crate::observability::Logger;

use super::args::{Cli, Command};
use super::errors::CliResult;
use super::io::{read_postulates, write_json_report, write_report, ReportEnvelope};

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli)
}

/// Dispatch a parsed command line
pub fn run_command(cli: Cli) -> CliResult<()> {
    match cli.command {
        Command::Derive { ref postulate } => emit(postulate, cli.json),
        Command::Repl => repl(cli.json),
    }
}

/// One-shot derivation
fn emit(postulate: &str, json: bool) -> CliResult<()> {
    Logger::info("DERIVE_START", &[("postulate", postulate)]);

    match deriver::derive(postulate) {
        Ok(derivation) => {
            for name in &derivation.unrecognized {
                Logger::warn(
                    "SYMBOL_UNRECOGNIZED",
                    &[("name", name.as_str()), ("postulate", postulate)],
                );
            }
            Logger::info(
                "DERIVE_COMPLETE",
                &[
                    ("law", derivation.law_line.as_str()),
                    ("target", derivation.target.as_str()),
                ],
            );
            if json {
                write_json_report(&ReportEnvelope {
                    status: "ok",
                    postulate,
                    report: &derivation.report,
                    unrecognized: &derivation.unrecognized,
                })
            } else {
                write_report(&derivation.report)
            }
        }
        Err(err) => {
            Logger::error(
                "DERIVE_FAILED",
                &[("code", err.code()), ("message", &err.to_string())],
            );
            let report = render_failure(postulate, &err);
            if json {
                write_json_report(&ReportEnvelope {
                    status: "error",
                    postulate,
                    report: &report,
                    unrecognized: &[],
                })
            } else {
                write_report(&report)
            }
        }
    }
}

/// Line-per-postulate loop over stdin
fn repl(json: bool) -> CliResult<()> {
    for line in read_postulates() {
        let postulate = line?;
        emit(&postulate, json)?;
    }
    Ok(())
}

fn render_failure(postulate: &str, err: &DeriveError) -> String {
    deriver::format_error(postulate, err)
}
