//! Report I/O for the CLI
//!
//! Reports go to stdout, either as plain text or wrapped in a JSON
//! envelope. Log lines go to stderr via the logger and never interleave
//! with reports.

use std::io::{self, BufRead, Write};

use serde::Serialize;

use super::errors::CliResult;

/// JSON envelope for a single derivation report
#[derive(Debug, Serialize)]
pub struct ReportEnvelope<'a> {
    /// "ok" or "error"
    pub status: &'a str,
    /// The postulate as given
    pub postulate: &'a str,
    /// The full report text (trace or error report)
    pub report: &'a str,
    /// Symbols left unsubstituted during normalization
    pub unrecognized: &'a [String],
}

/// Iterate over postulate lines from stdin, skipping blank lines
pub fn read_postulates() -> impl Iterator<Item = CliResult<String>> {
    let stdin = io::stdin();
    stdin
        .lock()
        .lines()
        .map(|line| line.map_err(Into::into))
        .filter(|line| match line {
            Ok(text) => !text.trim().is_empty(),
            Err(_) => true,
        })
}

/// Write a plain-text report to stdout
pub fn write_report(report: &str) -> CliResult<()> {
    let mut stdout = io::stdout();
    writeln!(stdout, "{}", report)?;
    stdout.flush()?;
    Ok(())
}

/// Write a report wrapped in the JSON envelope to stdout
pub fn write_json_report(envelope: &ReportEnvelope<'_>) -> CliResult<()> {
    let mut stdout = io::stdout();
    serde_json::to_writer(&mut stdout, envelope)?;
    writeln!(stdout)?;
    stdout.flush()?;
    Ok(())
}
