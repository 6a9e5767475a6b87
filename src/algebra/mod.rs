//! Symbolic expression engine
//!
//! Scoped deliberately to the postulate grammar: products, quotients,
//! rational powers of named symbols, and top-level sums. Everything is
//! exact (rationals throughout, no floating point) and deterministic
//! (canonical ordering everywhere), so the same input always produces the
//! same canonical form and the same rendering.

mod errors;
mod expr;
mod monomial;
mod parser;
mod pretty;
mod token;

pub use errors::{AlgebraError, AlgebraResult};
pub use expr::Expr;
pub use monomial::{Monomial, Polynomial};
pub use parser::parse_expr;
pub use pretty::{law_line, oneline_monomial, oneline_polynomial, pretty_equation};
