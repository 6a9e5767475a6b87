//! Algebra Invariant Tests
//!
//! The expression engine is exact and deterministic:
//! - Parsing is faithful to the grammar (implicit multiplication,
//!   precedence, right-associative powers)
//! - Canonicalization merges and cancels exponents exactly
//! - Rendering is stable across calls
//! - Everything outside the postulate grammar is rejected, never
//!   approximated

use lawforge::algebra::{
    oneline_monomial, oneline_polynomial, parse_expr, AlgebraError, Monomial, Polynomial,
};

// =============================================================================
// Helper Functions
// =============================================================================

fn poly(input: &str) -> Polynomial {
    Polynomial::from_expr(&parse_expr(input).unwrap()).unwrap()
}

// =============================================================================
// Parsing
// =============================================================================

/// Adjacent atoms multiply: `M1 M2` equals `M1*M2`.
#[test]
fn test_implicit_multiplication_equals_explicit() {
    assert_eq!(poly("M1 M2"), poly("M1*M2"));
    assert_eq!(poly("2 r"), poly("2*r"));
    assert_eq!(poly("m (r + l)"), poly("m*(r + l)"));
}

/// `**` binds tighter than `*` and `/`.
#[test]
fn test_power_precedence() {
    assert_eq!(poly("M1*M2/r**2"), poly("M1*M2/(r**2)"));
    assert_eq!(poly("2*m**2"), poly("2*(m**2)"));
}

/// `**` is right associative.
#[test]
fn test_power_right_associativity() {
    assert_eq!(poly("2**3**2"), poly("2**9"));
}

/// Unary minus distributes through canonicalization.
#[test]
fn test_unary_minus() {
    assert_eq!(poly("-m + m"), poly("0"));
    assert_eq!(poly("-(m*r)"), poly("-1*m*r"));
    assert_eq!(poly("m**-2"), poly("1/m**2"));
}

/// Decimal literals are exact rationals, not floats.
#[test]
fn test_decimals_are_exact() {
    assert_eq!(poly("0.5*m"), poly("m/2"));
    assert_eq!(poly("0.1 + 0.2"), poly("3/10"));
}

// =============================================================================
// Canonicalization
// =============================================================================

/// Exponents merge and cancel exactly.
#[test]
fn test_exponent_cancellation() {
    assert_eq!(poly("m**3/m**2"), poly("m"));
    assert_eq!(poly("m/m"), poly("1"));
    assert_eq!(poly("m*r/(r*m)"), poly("1"));
}

/// Like terms combine; opposite terms vanish.
#[test]
fn test_term_combination() {
    assert_eq!(poly("m + m + m"), poly("3*m"));
    assert_eq!(poly("m - m"), poly("0"));
    assert_eq!(poly("2*m*r + r*m"), poly("3*m*r"));
}

/// Positive-real semantics: a square root undoes a square.
#[test]
fn test_root_of_square() {
    assert_eq!(poly("(x**2)**0.5"), poly("x"));
    assert_eq!(poly("(x**4)**0.5"), poly("x**2"));
}

/// Perfect-power coefficients admit exact roots; others are rejected.
#[test]
fn test_coefficient_roots() {
    assert_eq!(poly("4**0.5"), poly("2"));
    assert_eq!(poly("27**(1/3)"), poly("3"));
    assert!(matches!(
        Polynomial::from_expr(&parse_expr("2**0.5").unwrap()),
        Err(AlgebraError::InexactRoot(_))
    ));
}

/// Shapes outside the grammar are rejected.
#[test]
fn test_unsupported_shapes_rejected() {
    assert!(matches!(
        Polynomial::from_expr(&parse_expr("(a + b)**2").unwrap()),
        Err(AlgebraError::Unsupported(_))
    ));
    assert!(matches!(
        Polynomial::from_expr(&parse_expr("a**b").unwrap()),
        Err(AlgebraError::Unsupported(_))
    ));
    assert!(matches!(
        Polynomial::from_expr(&parse_expr("m/0").unwrap()),
        Err(AlgebraError::DivisionByZero)
    ));
}

// =============================================================================
// Rendering
// =============================================================================

/// Factor order in rendered output is fixed, whatever the input order.
#[test]
fn test_rendering_is_order_independent() {
    assert_eq!(oneline_polynomial(&poly("m*c**2")), "c**2*m");
    assert_eq!(oneline_polynomial(&poly("c**2*m")), "c**2*m");
    assert_eq!(oneline_polynomial(&poly("M2*G*M1/r**2")), "G*M1*M2/r**2");
}

/// Half-integer exponents render under a single sqrt.
#[test]
fn test_sqrt_rendering() {
    let m = Monomial::symbol_pow("h", 1, 2)
        .mul(&Monomial::symbol_pow("c", 1, 2))
        .mul(&Monomial::symbol_pow("G", -1, 2));
    assert_eq!(oneline_monomial(&m), "sqrt(c*h/G)");
}

/// Other fractional exponents render explicitly.
#[test]
fn test_quarter_power_rendering() {
    let m = Monomial::symbol_pow("c", 9, 4);
    assert_eq!(oneline_monomial(&m), "c**(9/4)");
}

/// The parsed tree echoes back in conventional notation.
#[test]
fn test_expression_echo() {
    assert_eq!(parse_expr("M1*M2/r**2").unwrap().to_string(), "M1*M2/r**2");
    assert_eq!(parse_expr("M1 M2/r**2").unwrap().to_string(), "M1*M2/r**2");
    assert_eq!(parse_expr("a - b").unwrap().to_string(), "a - b");
}
