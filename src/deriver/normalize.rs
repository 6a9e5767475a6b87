//! Normalization stage
//!
//! Every physical quantity is divided by its Planck scale so the equation
//! becomes dimensionless. Velocity and frequency are the two derived
//! ratios: `v` normalizes as `v/c`, `f` as `f * t_P`. Symbols with no
//! dimension mapping stay unsubstituted in the expression (the caller is
//! told, but it is not fatal); a target with no mapping is a hard error.

use num_bigint::BigInt;
use num_rational::BigRational;

use crate::algebra::{Monomial, Polynomial};
use crate::units::{Dimension, UnitTable, SPEED_OF_LIGHT};

use super::errors::{DeriveError, DeriveResult};
use super::postulate::Postulate;

/// The dimensionless equation `lhs = rhs`, plus the symbols that had no
/// dimension mapping
#[derive(Debug, Clone)]
pub struct Normalized {
    /// Normalized target: the target symbol times its inverse scale
    pub lhs: Monomial,
    /// Normalized expression
    pub rhs: Polynomial,
    /// Expression symbols left unsubstituted, in sorted order
    pub unrecognized: Vec<String>,
}

/// Normalize both sides of a postulate against the unit table
pub fn normalize(postulate: &Postulate, table: &UnitTable) -> DeriveResult<Normalized> {
    let target_dim = table
        .dimension_of(&postulate.target)
        .ok_or_else(|| DeriveError::UnknownTarget(postulate.target.clone()))?;

    let lhs = Monomial::symbol(postulate.target.clone())
        .mul(&normalization_factor(target_dim, table)?);

    let mut rhs = Polynomial::from_expr(&postulate.expression)?;
    let mut unrecognized = Vec::new();

    for name in postulate.expression.free_symbols() {
        match table.dimension_of(&name) {
            Some(dim) => {
                let factor = normalization_factor(dim, table)?;
                rhs = rhs.rescale_symbol(&name, &factor)?;
            }
            None => unrecognized.push(name),
        }
    }

    Ok(Normalized {
        lhs,
        rhs,
        unrecognized,
    })
}

/// The dimensionless form of a quantity is the quantity times this factor
fn normalization_factor(dim: Dimension, table: &UnitTable) -> DeriveResult<Monomial> {
    match dim {
        // v/c: velocity has no Planck scale of its own
        Dimension::Velocity => Ok(Monomial::symbol_pow(SPEED_OF_LIGHT, -1, 1)),
        // f*t_P: frequency is an inverse time
        Dimension::Frequency => Ok(table.scale_for(Dimension::Time)?.clone()),
        other => {
            let scale = table.scale_for(other)?;
            Ok(scale.pow_rational(&BigRational::from(BigInt::from(-1)))?)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algebra::oneline_monomial;
    use crate::deriver::postulate::parse_postulate;

    fn normalized(input: &str) -> Normalized {
        normalize(&parse_postulate(input).unwrap(), UnitTable::global()).unwrap()
    }

    #[test]
    fn test_target_divided_by_its_scale() {
        let n = normalized("E ~ m");
        // E / sqrt(h*c**5/G)
        assert_eq!(oneline_monomial(&n.lhs), "E/sqrt(c**5*h/G)");
        assert!(n.lhs.contains("E"));
    }

    #[test]
    fn test_velocity_normalizes_against_c_directly() {
        let n = normalized("E ~ m*v**2");
        let term = n.rhs.as_single_term().unwrap();
        assert_eq!(
            term.exponent_of("c"),
            BigRational::new(BigInt::from(-5), BigInt::from(2))
        );
        assert_eq!(
            term.exponent_of("v"),
            BigRational::new(BigInt::from(2), BigInt::from(1))
        );
    }

    #[test]
    fn test_frequency_multiplies_by_time_scale() {
        let n = normalized("E ~ f");
        let term = n.rhs.as_single_term().unwrap();
        // f * sqrt(h*G/c**5)
        assert_eq!(
            term.exponent_of("h"),
            BigRational::new(BigInt::from(1), BigInt::from(2))
        );
        assert_eq!(
            term.exponent_of("c"),
            BigRational::new(BigInt::from(-5), BigInt::from(2))
        );
    }

    #[test]
    fn test_unknown_expression_symbols_pass_through() {
        let n = normalized("E ~ zeta*m");
        assert_eq!(n.unrecognized, vec!["zeta"]);
        assert!(n.rhs.contains("zeta"));
    }

    #[test]
    fn test_unknown_target_is_fatal() {
        let err = normalize(&parse_postulate("Q ~ m").unwrap(), UnitTable::global()).unwrap_err();
        assert_eq!(err, DeriveError::UnknownTarget("Q".to_string()));
    }
}
