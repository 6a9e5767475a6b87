//! Deriver error taxonomy
//!
//! Four kinds, one per way a derivation can fail: bad postulate format,
//! a target without a dimension, an equation the solver cannot isolate the
//! target in, and anything unexpected from the algebra engine. All of them
//! stay typed at the library boundary; rendering to an error report is the
//! presentation layer's job (see `trace`).

use thiserror::Error;

use crate::algebra::AlgebraError;
use crate::units::UnitError;

/// Result type for derivation operations
pub type DeriveResult<T> = Result<T, DeriveError>;

/// Errors from the postulate-to-law pipeline
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DeriveError {
    /// Input has no `~` separator
    #[error("postulate must contain '~' to separate sides")]
    MissingSeparator,

    /// Input has more than one `~` separator
    #[error("postulate must contain exactly one '~'")]
    ExtraSeparator,

    /// Left-hand side is not a single variable name
    #[error("target must be a single variable, got '{0}'")]
    InvalidTarget(String),

    /// Target variable has no dimension mapping
    #[error("unknown target variable: {0}")]
    UnknownTarget(String),

    /// The solver found no candidate for the target
    #[error("could not solve for the target variable: {0}")]
    Unsolvable(String),

    /// Expression parsing or canonicalization failed
    #[error("expression error: {0}")]
    Expression(#[from] AlgebraError),

    /// A failure no stage anticipates
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<UnitError> for DeriveError {
    fn from(err: UnitError) -> Self {
        DeriveError::Internal(err.to_string())
    }
}

impl DeriveError {
    /// Stable error code for reports and logs
    ///
    /// Syntax failures in the expression are format errors; a well-formed
    /// expression the engine cannot reduce (a power of a sum, an inexact
    /// root) is unsolvable, not malformed.
    pub fn code(&self) -> &'static str {
        match self {
            DeriveError::MissingSeparator
            | DeriveError::ExtraSeparator
            | DeriveError::InvalidTarget(_) => "FORMAT_ERROR",
            DeriveError::Expression(err) if err.is_syntax() => "FORMAT_ERROR",
            DeriveError::Expression(_) => "UNSOLVABLE",
            DeriveError::UnknownTarget(_) => "UNKNOWN_TARGET",
            DeriveError::Unsolvable(_) => "UNSOLVABLE",
            DeriveError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// The pipeline stage that raised the error
    pub fn stage(&self) -> &'static str {
        match self {
            DeriveError::MissingSeparator
            | DeriveError::ExtraSeparator
            | DeriveError::InvalidTarget(_) => "parse",
            DeriveError::Expression(err) if err.is_syntax() => "parse",
            DeriveError::Expression(_) | DeriveError::UnknownTarget(_) => "normalize",
            DeriveError::Unsolvable(_) => "solve",
            DeriveError::Internal(_) => "internal",
        }
    }
}
