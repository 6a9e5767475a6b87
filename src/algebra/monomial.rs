//! Canonical product form
//!
//! A `Monomial` is an exact rational coefficient times a product of symbols
//! raised to rational powers, stored in a `BTreeMap` so every operation is
//! deterministic. All symbols are positive reals, which is what makes
//! rational powers well defined without branch cuts: `(x**2)**(1/2)` is `x`,
//! unconditionally.
//!
//! A `Polynomial` is a sum of monomials and covers the top-level sums the
//! grammar admits. Powers of sums are outside the supported shape and are
//! rejected during canonicalization.

use std::collections::BTreeMap;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, ToPrimitive, Zero};

use super::errors::{AlgebraError, AlgebraResult};
use super::expr::Expr;

/// Coefficient times a product of symbols with rational exponents
#[derive(Debug, Clone, PartialEq)]
pub struct Monomial {
    /// Exact rational coefficient
    pub coeff: BigRational,
    /// Symbol name -> exponent; zero exponents are never stored
    pub factors: BTreeMap<String, BigRational>,
}

impl Monomial {
    /// The multiplicative identity
    pub fn one() -> Self {
        Monomial {
            coeff: BigRational::one(),
            factors: BTreeMap::new(),
        }
    }

    /// A bare symbol to the first power
    pub fn symbol(name: impl Into<String>) -> Self {
        let mut factors = BTreeMap::new();
        factors.insert(name.into(), BigRational::one());
        Monomial {
            coeff: BigRational::one(),
            factors,
        }
    }

    /// A symbol raised to `numer/denom`
    pub fn symbol_pow(name: impl Into<String>, numer: i64, denom: i64) -> Self {
        let mut factors = BTreeMap::new();
        factors.insert(
            name.into(),
            BigRational::new(BigInt::from(numer), BigInt::from(denom)),
        );
        Monomial {
            coeff: BigRational::one(),
            factors,
        }
    }

    /// Whether this is a bare constant with no symbolic part
    pub fn is_constant(&self) -> bool {
        self.factors.is_empty()
    }

    /// Exponent of `name`, zero if absent
    pub fn exponent_of(&self, name: &str) -> BigRational {
        self.factors.get(name).cloned().unwrap_or_else(BigRational::zero)
    }

    /// Whether `name` appears with a nonzero exponent
    pub fn contains(&self, name: &str) -> bool {
        self.factors.contains_key(name)
    }

    /// Product of two monomials; exponents merge and cancellations drop out
    pub fn mul(&self, other: &Monomial) -> Monomial {
        let mut out = self.clone();
        out.coeff *= &other.coeff;
        for (name, exp) in &other.factors {
            let entry = out
                .factors
                .entry(name.clone())
                .or_insert_with(BigRational::zero);
            *entry += exp;
            if entry.is_zero() {
                out.factors.remove(name);
            }
        }
        out
    }

    /// Quotient of two monomials
    pub fn div(&self, other: &Monomial) -> AlgebraResult<Monomial> {
        if other.coeff.is_zero() {
            return Err(AlgebraError::DivisionByZero);
        }
        Ok(self.mul(&other.invert()))
    }

    /// Multiplicative inverse; the coefficient must be nonzero
    fn invert(&self) -> Monomial {
        let mut out = Monomial {
            coeff: self.coeff.recip(),
            factors: BTreeMap::new(),
        };
        for (name, exp) in &self.factors {
            out.factors.insert(name.clone(), -exp.clone());
        }
        out
    }

    /// Raise to a rational power
    ///
    /// Symbol exponents scale exactly. The coefficient must admit an exact
    /// rational result: integer exponents always do, fractional exponents
    /// require the numerator and denominator to be perfect powers.
    pub fn pow_rational(&self, exponent: &BigRational) -> AlgebraResult<Monomial> {
        let mut out = Monomial {
            coeff: rational_pow(&self.coeff, exponent)?,
            factors: BTreeMap::new(),
        };
        if exponent.is_zero() {
            return Ok(out);
        }
        for (name, exp) in &self.factors {
            out.factors.insert(name.clone(), exp * exponent);
        }
        Ok(out)
    }

    /// Replace `name` by `name * scale`: an occurrence of `name**e` becomes
    /// `name**e * scale**e`
    pub fn rescale_symbol(&self, name: &str, scale: &Monomial) -> AlgebraResult<Monomial> {
        match self.factors.get(name) {
            None => Ok(self.clone()),
            Some(exp) => {
                let exp = exp.clone();
                Ok(self.mul(&scale.pow_rational(&exp)?))
            }
        }
    }

    /// Drop `name` from the product entirely
    pub fn without_symbol(&self, name: &str) -> Monomial {
        let mut out = self.clone();
        out.factors.remove(name);
        out
    }
}

/// `base ** exponent` for exact rationals, or an error when no exact
/// rational result exists
fn rational_pow(base: &BigRational, exponent: &BigRational) -> AlgebraResult<BigRational> {
    if exponent.is_zero() {
        return Ok(BigRational::one());
    }
    if base.is_zero() {
        if exponent.is_negative() {
            return Err(AlgebraError::DivisionByZero);
        }
        return Ok(BigRational::zero());
    }
    if base.is_one() {
        return Ok(BigRational::one());
    }

    let int_part = exponent.numer();
    let root_part = exponent.denom();

    let rooted = if root_part.is_one() {
        base.clone()
    } else {
        let n = root_part
            .to_u32()
            .ok_or_else(|| AlgebraError::InexactRoot(format!("{}**({})", base, exponent)))?;
        if base.is_negative() && n % 2 == 0 {
            return Err(AlgebraError::InexactRoot(format!("{}**({})", base, exponent)));
        }
        let numer = exact_nth_root(base.numer(), n)
            .ok_or_else(|| AlgebraError::InexactRoot(format!("{}**({})", base, exponent)))?;
        let denom = exact_nth_root(base.denom(), n)
            .ok_or_else(|| AlgebraError::InexactRoot(format!("{}**({})", base, exponent)))?;
        BigRational::new(numer, denom)
    };

    let power = int_part
        .to_i64()
        .ok_or_else(|| AlgebraError::InexactRoot(format!("{}**({})", base, exponent)))?;
    Ok(int_rational_pow(&rooted, power))
}

/// Exact integer nth root, or `None` when the value is not a perfect power
fn exact_nth_root(value: &BigInt, n: u32) -> Option<BigInt> {
    let root = value.nth_root(n);
    if num_traits::pow(root.clone(), n as usize) == *value {
        Some(root)
    } else {
        None
    }
}

fn int_rational_pow(base: &BigRational, power: i64) -> BigRational {
    let magnitude = num_traits::pow(base.clone(), power.unsigned_abs() as usize);
    if power < 0 {
        magnitude.recip()
    } else {
        magnitude
    }
}

/// Sum of monomials in canonical form
#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial {
    /// Terms with distinct factor maps; empty means zero
    pub terms: Vec<Monomial>,
}

impl Polynomial {
    /// A polynomial with a single term
    pub fn from_monomial(m: Monomial) -> Self {
        Polynomial { terms: vec![m] }.combined()
    }

    /// Canonicalize an expression tree into a sum of monomials
    ///
    /// Rejects powers with symbolic exponents and powers of sums: the solve
    /// shape is a monomial-like dimensionless equation, and anything wider
    /// is out of scope.
    pub fn from_expr(expr: &Expr) -> AlgebraResult<Polynomial> {
        let poly = match expr {
            Expr::Number(n) => Polynomial {
                terms: vec![Monomial {
                    coeff: n.clone(),
                    factors: BTreeMap::new(),
                }],
            },
            Expr::Symbol(name) => Polynomial {
                terms: vec![Monomial::symbol(name.clone())],
            },
            Expr::Add(terms) => {
                let mut out = Polynomial { terms: Vec::new() };
                for term in terms {
                    out.terms.extend(Polynomial::from_expr(term)?.terms);
                }
                out
            }
            Expr::Mul(factors) => {
                let mut out = Polynomial {
                    terms: vec![Monomial::one()],
                };
                for factor in factors {
                    out = out.mul_poly(&Polynomial::from_expr(factor)?);
                }
                out
            }
            Expr::Pow(base, exponent) => {
                let exp = match Polynomial::from_expr(exponent)?.as_constant() {
                    Some(n) => n,
                    None => {
                        return Err(AlgebraError::Unsupported(format!(
                            "symbolic exponent in {}",
                            expr
                        )))
                    }
                };
                let base_poly = Polynomial::from_expr(base)?;
                match base_poly.terms.as_slice() {
                    // Zero base: 0**e is 0 for positive e, undefined otherwise
                    [] => {
                        if exp.is_negative() {
                            return Err(AlgebraError::DivisionByZero);
                        }
                        if exp.is_zero() {
                            Polynomial {
                                terms: vec![Monomial::one()],
                            }
                        } else {
                            Polynomial { terms: Vec::new() }
                        }
                    }
                    [m] => Polynomial {
                        terms: vec![m.pow_rational(&exp)?],
                    },
                    _ => {
                        return Err(AlgebraError::Unsupported(format!(
                            "power of a sum in {}",
                            expr
                        )))
                    }
                }
            }
        };
        Ok(poly.combined())
    }

    /// Merge like terms and drop zero terms
    fn combined(mut self) -> Polynomial {
        let mut merged: Vec<Monomial> = Vec::new();
        for term in self.terms.drain(..) {
            if term.coeff.is_zero() {
                continue;
            }
            match merged.iter_mut().find(|m| m.factors == term.factors) {
                Some(existing) => existing.coeff += &term.coeff,
                None => merged.push(term),
            }
        }
        merged.retain(|m| !m.coeff.is_zero());
        merged.sort_by(|a, b| a.factors.cmp(&b.factors));
        Polynomial { terms: merged }
    }

    /// The constant value, if this polynomial is a bare number
    pub fn as_constant(&self) -> Option<BigRational> {
        match self.terms.as_slice() {
            [] => Some(BigRational::zero()),
            [m] if m.is_constant() => Some(m.coeff.clone()),
            _ => None,
        }
    }

    /// The single term, if there is exactly one
    pub fn as_single_term(&self) -> Option<&Monomial> {
        match self.terms.as_slice() {
            [m] => Some(m),
            _ => None,
        }
    }

    /// Whether `name` appears in any term
    pub fn contains(&self, name: &str) -> bool {
        self.terms.iter().any(|m| m.contains(name))
    }

    /// Polynomial product (distributes term by term)
    pub fn mul_poly(&self, other: &Polynomial) -> Polynomial {
        let mut terms = Vec::with_capacity(self.terms.len() * other.terms.len());
        for a in &self.terms {
            for b in &other.terms {
                terms.push(a.mul(b));
            }
        }
        Polynomial { terms }.combined()
    }

    /// Multiply every term by a monomial
    pub fn mul_monomial(&self, m: &Monomial) -> Polynomial {
        Polynomial {
            terms: self.terms.iter().map(|t| t.mul(m)).collect(),
        }
        .combined()
    }

    /// Divide every term by a monomial
    pub fn div_monomial(&self, m: &Monomial) -> AlgebraResult<Polynomial> {
        let mut terms = Vec::with_capacity(self.terms.len());
        for t in &self.terms {
            terms.push(t.div(m)?);
        }
        Ok(Polynomial { terms }.combined())
    }

    /// Apply `rescale_symbol` to every term
    pub fn rescale_symbol(&self, name: &str, scale: &Monomial) -> AlgebraResult<Polynomial> {
        let mut terms = Vec::with_capacity(self.terms.len());
        for t in &self.terms {
            terms.push(t.rescale_symbol(name, scale)?);
        }
        Ok(Polynomial { terms }.combined())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algebra::parser::parse_expr;

    fn poly(input: &str) -> Polynomial {
        Polynomial::from_expr(&parse_expr(input).unwrap()).unwrap()
    }

    #[test]
    fn test_exponent_cancellation() {
        let p = poly("m**2/m");
        assert_eq!(p, Polynomial::from_monomial(Monomial::symbol("m")));
    }

    #[test]
    fn test_full_cancellation_leaves_constant() {
        let p = poly("m/m");
        assert_eq!(p.as_constant(), Some(BigRational::one()));
    }

    #[test]
    fn test_like_terms_merge() {
        let p = poly("m + m");
        let m = p.as_single_term().unwrap();
        assert_eq!(m.coeff, BigRational::from(BigInt::from(2)));
    }

    #[test]
    fn test_opposite_terms_vanish() {
        let p = poly("m - m");
        assert_eq!(p.as_constant(), Some(BigRational::zero()));
    }

    #[test]
    fn test_square_root_of_square() {
        let p = poly("(x**2)**0.5");
        assert_eq!(p, Polynomial::from_monomial(Monomial::symbol("x")));
    }

    #[test]
    fn test_exact_coefficient_root() {
        let p = poly("4**0.5");
        assert_eq!(p.as_constant(), Some(BigRational::from(BigInt::from(2))));
    }

    #[test]
    fn test_inexact_coefficient_root_fails() {
        let e = parse_expr("2**0.5").unwrap();
        assert!(matches!(
            Polynomial::from_expr(&e),
            Err(AlgebraError::InexactRoot(_))
        ));
    }

    #[test]
    fn test_power_of_sum_rejected() {
        let e = parse_expr("(a + b)**2").unwrap();
        assert!(matches!(
            Polynomial::from_expr(&e),
            Err(AlgebraError::Unsupported(_))
        ));
    }

    #[test]
    fn test_rescale_symbol_scales_by_exponent() {
        // r**(-2) rescaled by s: picks up s**(-2)
        let m = Monomial::symbol_pow("r", -2, 1);
        let rescaled = m.rescale_symbol("r", &Monomial::symbol("s")).unwrap();
        assert_eq!(rescaled.exponent_of("s"), BigRational::new(BigInt::from(-2), BigInt::from(1)));
        assert_eq!(rescaled.exponent_of("r"), BigRational::new(BigInt::from(-2), BigInt::from(1)));
    }

    #[test]
    fn test_division_by_zero_rejected() {
        let e = parse_expr("m/0").unwrap();
        assert!(matches!(
            Polynomial::from_expr(&e),
            Err(AlgebraError::DivisionByZero)
        ));
    }
}
