//! Algebra error types
//!
//! Errors raised while tokenizing, parsing, or canonicalizing symbolic
//! expressions. The engine is scoped to the postulate grammar (products,
//! quotients, rational powers, top-level sums), so anything outside that
//! shape is rejected rather than approximated.

use thiserror::Error;

/// Result type for algebra operations
pub type AlgebraResult<T> = Result<T, AlgebraError>;

/// Errors from the symbolic expression engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlgebraError {
    /// A character the tokenizer does not recognize
    #[error("unexpected character '{ch}' at position {pos}")]
    UnexpectedChar { ch: char, pos: usize },

    /// A number literal that could not be read
    #[error("malformed number literal '{0}'")]
    MalformedNumber(String),

    /// Expression ended where a value or operator was expected
    #[error("unexpected end of expression")]
    UnexpectedEnd,

    /// A token that cannot appear at this point in the grammar
    #[error("unexpected token '{0}'")]
    UnexpectedToken(String),

    /// Structure outside the supported grammar (e.g. a power of a sum)
    #[error("unsupported expression: {0}")]
    Unsupported(String),

    /// Division by a zero value
    #[error("division by zero")]
    DivisionByZero,

    /// A rational root of a coefficient that has no exact value
    #[error("no exact rational root: {0}")]
    InexactRoot(String),
}

impl AlgebraError {
    /// Whether the error is a syntax failure from tokenizing or parsing,
    /// as opposed to a well-formed expression the engine cannot reduce
    pub fn is_syntax(&self) -> bool {
        matches!(
            self,
            AlgebraError::UnexpectedChar { .. }
                | AlgebraError::MalformedNumber(_)
                | AlgebraError::UnexpectedEnd
                | AlgebraError::UnexpectedToken(_)
        )
    }
}
