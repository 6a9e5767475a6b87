//! Solve stage
//!
//! The dimensionless equation always has the shape
//! `target**p * M = R` with `M` a monomial of constants and `R` the
//! normalized expression. Isolating the target is algebra on exponents:
//! divide through by `M`, move any target factor in `R` across, and take
//! the `p`-th root. All symbols are positive reals, so the principal
//! (positive) root is the solution; that is the deterministic selection
//! rule when even roots would otherwise be ambiguous.

use num_traits::{One, Zero};

use crate::algebra::{AlgebraError, Polynomial};

use super::errors::{DeriveError, DeriveResult};
use super::normalize::Normalized;

/// Solve the dimensionless equation for the target symbol
pub fn solve_for_target(eq: &Normalized, target: &str) -> DeriveResult<Polynomial> {
    let lhs_power = eq.lhs.exponent_of(target);
    if lhs_power.is_zero() {
        return Err(DeriveError::Unsolvable(format!(
            "'{}' does not appear on the left-hand side",
            target
        )));
    }
    let lhs_rest = eq.lhs.without_symbol(target);

    if !eq.rhs.contains(target) {
        if lhs_power.is_one() {
            let solution = eq.rhs.div_monomial(&lhs_rest).map_err(root_failure)?;
            return Ok(solution);
        }
        // Fractional or higher power: need a single monomial to take roots
        let term = eq.rhs.as_single_term().ok_or_else(|| {
            DeriveError::Unsolvable(format!(
                "cannot take a {} root of a sum",
                lhs_power
            ))
        })?;
        let base = term.div(&lhs_rest).map_err(root_failure)?;
        let solution = base.pow_rational(&lhs_power.recip()).map_err(root_failure)?;
        return Ok(Polynomial::from_monomial(solution));
    }

    // Target also appears on the right: only a monomial right-hand side
    // keeps the equation in the supported shape
    let term = eq.rhs.as_single_term().ok_or_else(|| {
        DeriveError::Unsolvable(format!("'{}' appears inside a sum", target))
    })?;

    let net_power = &lhs_power - &term.exponent_of(target);
    if net_power.is_zero() {
        return Err(DeriveError::Unsolvable(format!(
            "'{}' cancels from both sides",
            target
        )));
    }

    let base = term
        .without_symbol(target)
        .div(&lhs_rest)
        .map_err(root_failure)?;
    let solution = base.pow_rational(&net_power.recip()).map_err(root_failure)?;
    Ok(Polynomial::from_monomial(solution))
}

/// Algebra failures during the solve step mean the equation has no
/// solution the engine can express, not that the input was malformed
fn root_failure(err: AlgebraError) -> DeriveError {
    DeriveError::Unsolvable(err.to_string())
}
