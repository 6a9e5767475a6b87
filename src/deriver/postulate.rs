//! Parse stage
//!
//! A postulate is `TARGET ~ EXPRESSION`: a bare identifier, exactly one
//! `~`, and an algebraic expression. Unrecognized variable names in the
//! expression are accepted here; normalization decides what they mean.

use crate::algebra::{parse_expr, Expr};

use super::errors::{DeriveError, DeriveResult};

/// A parsed postulate, alive for one derivation call
#[derive(Debug, Clone, PartialEq)]
pub struct Postulate {
    /// The raw input string, echoed in the trace
    pub input: String,
    /// Target variable name
    pub target: String,
    /// Right-hand side expression
    pub expression: Expr,
}

/// Parse a postulate string
pub fn parse_postulate(input: &str) -> DeriveResult<Postulate> {
    let parts: Vec<&str> = input.split('~').collect();
    let (target_str, expr_str) = match parts.as_slice() {
        [_] => return Err(DeriveError::MissingSeparator),
        [lhs, rhs] => (lhs.trim(), rhs.trim()),
        _ => return Err(DeriveError::ExtraSeparator),
    };

    if !is_identifier(target_str) {
        return Err(DeriveError::InvalidTarget(target_str.to_string()));
    }

    let expression = parse_expr(expr_str)?;

    Ok(Postulate {
        input: input.to_string(),
        target: target_str.to_string(),
        expression,
    })
}

/// A bare variable name: alphabetic start, then alphanumerics or `_`
fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => chars.all(|c| c.is_ascii_alphanumeric() || c == '_'),
        _ => false,
    }
}
