//! Postulate deriver
//!
//! End-to-end pipeline from a postulate string to a dimensionally-correct
//! law: parse, normalize against the Planck unit table, solve the
//! dimensionless equation for the target, and format a derivation trace.
//!
//! The public boundary is typed: `derive` returns a `Derivation` or a
//! `DeriveError`. `derive_report` keeps the single-string channel for
//! callers that only display text: it renders whichever branch occurred
//! and never fails.
//!
//! Every call is independent and stateless; the only shared state is the
//! read-only unit table.

mod errors;
mod normalize;
mod postulate;
mod solve;
mod trace;

pub use errors::{DeriveError, DeriveResult};
pub use normalize::{normalize, Normalized};
pub use postulate::{parse_postulate, Postulate};
pub use solve::solve_for_target;
pub use trace::{format_error, format_trace};

use crate::algebra::Polynomial;
use crate::units::UnitTable;

/// The outcome of a successful derivation
#[derive(Debug, Clone)]
pub struct Derivation {
    /// The raw postulate string
    pub input: String,
    /// Target variable name
    pub target: String,
    /// The solved law, without the `k` prefactor
    pub law: Polynomial,
    /// The law line, e.g. `E = k*c**2*m`
    pub law_line: String,
    /// Expression symbols that had no dimension mapping and were left
    /// unsubstituted
    pub unrecognized: Vec<String>,
    /// The full formatted derivation trace
    pub report: String,
}

/// Derive the physical law a postulate implies
pub fn derive(input: &str) -> DeriveResult<Derivation> {
    let table = UnitTable::global();

    let postulate = parse_postulate(input)?;
    let eq = normalize(&postulate, table)?;
    let law = solve_for_target(&eq, &postulate.target)?;

    let law_line = trace::format_law(&postulate.target, &law);
    let report = format_trace(&postulate, &eq, &law_line);

    Ok(Derivation {
        input: postulate.input.clone(),
        target: postulate.target.clone(),
        law,
        law_line,
        unrecognized: eq.unrecognized.clone(),
        report,
    })
}

/// Derive and render, collapsing both branches to one displayable string
///
/// The success branch is the derivation trace; the failure branch is an
/// `ERROR:` report. Identical inputs produce identical output strings.
pub fn derive_report(input: &str) -> String {
    match derive(input) {
        Ok(derivation) => derivation.report,
        Err(err) => format_error(input, &err),
    }
}
