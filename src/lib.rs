//! lawforge - a strict, deterministic engine that derives physical laws
//! from dimensionless postulates
//!
//! A postulate relates a target quantity to an expression of other
//! quantities up to an unknown dimensionless prefactor (`E ~ m`). The
//! engine normalizes every quantity against its Planck scale, solves the
//! resulting dimensionless equation for the target, and reports the
//! dimensionally-correct law (`E = k*c**2*m`). The prefactor `k` is never
//! derived.

pub mod algebra;
pub mod cli;
pub mod deriver;
pub mod observability;
pub mod units;

pub use deriver::{derive, derive_report, Derivation, DeriveError, DeriveResult};
