//! CLI argument definitions using clap
//!
//! Commands:
//! - lawforge derive <POSTULATE>
//! - lawforge repl

use clap::{Parser, Subcommand};

/// LawForge - derive physical laws from dimensionless postulates
#[derive(Parser, Debug)]
#[command(name = "lawforge")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Emit the report wrapped in a JSON envelope
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Derive the law for a single postulate and exit
    Derive {
        /// Postulate of the form 'TARGET ~ EXPRESSION', e.g. 'E ~ m'
        postulate: String,
    },

    /// Read postulates from stdin, one per line
    Repl,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
