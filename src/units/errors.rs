//! Unit table error types

use thiserror::Error;

use super::dimension::Dimension;

/// Result type for unit table operations
pub type UnitResult<T> = Result<T, UnitError>;

/// Errors from the Planck unit registry
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnitError {
    /// No Planck scale is registered for this dimension
    ///
    /// Velocity and frequency land here on a direct lookup: they are
    /// derived ratios, not independent Planck quantities.
    #[error("no Planck scale registered for dimension '{0}'")]
    UnknownDimension(Dimension),
}
