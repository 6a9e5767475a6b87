//! Planck scale table
//!
//! Each dimension's natural unit, expressed symbolically over the four
//! fundamental constants. The constants are opaque positive reals and are
//! never assigned numeric values; a scale is therefore a monomial with
//! rational exponents, e.g. the mass scale `sqrt(h*c/G)` is
//! `h**(1/2) * c**(1/2) * G**(-1/2)`.
//!
//! The table is built once behind a `OnceLock` and is read-only for the
//! life of the process. There is no mutation API.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use crate::algebra::Monomial;

use super::dimension::{dimension_of, Dimension};
use super::errors::{UnitError, UnitResult};

/// Speed of light
pub const SPEED_OF_LIGHT: &str = "c";
/// Gravitational constant
pub const GRAVITATIONAL_CONSTANT: &str = "G";
/// Planck constant
pub const PLANCK_CONSTANT: &str = "h";
/// Boltzmann constant
pub const BOLTZMANN_CONSTANT: &str = "k_B";

/// The four base symbolic constants
pub const BASE_CONSTANTS: [&str; 4] = [
    SPEED_OF_LIGHT,
    GRAVITATIONAL_CONSTANT,
    PLANCK_CONSTANT,
    BOLTZMANN_CONSTANT,
];

/// Read-only registry of Planck scales and variable dimensions
pub struct UnitTable {
    scales: BTreeMap<Dimension, Monomial>,
}

impl UnitTable {
    /// The process-wide table, built on first use
    pub fn global() -> &'static UnitTable {
        static TABLE: OnceLock<UnitTable> = OnceLock::new();
        TABLE.get_or_init(UnitTable::build)
    }

    fn build() -> UnitTable {
        let mut scales = BTreeMap::new();

        // m_P = sqrt(h*c/G)
        scales.insert(Dimension::Mass, scale(&[("h", 1, 2), ("c", 1, 2), ("G", -1, 2)]));
        // l_P = sqrt(h*G/c**3)
        scales.insert(
            Dimension::Length,
            scale(&[("h", 1, 2), ("G", 1, 2), ("c", -3, 2)]),
        );
        // t_P = sqrt(h*G/c**5)
        scales.insert(
            Dimension::Time,
            scale(&[("h", 1, 2), ("G", 1, 2), ("c", -5, 2)]),
        );
        // T_P = sqrt(h*c**5/(G*k_B**2))
        scales.insert(
            Dimension::Temperature,
            scale(&[("h", 1, 2), ("c", 5, 2), ("G", -1, 2), ("k_B", -1, 1)]),
        );
        // E_P = sqrt(h*c**5/G)
        scales.insert(
            Dimension::Energy,
            scale(&[("h", 1, 2), ("c", 5, 2), ("G", -1, 2)]),
        );
        // F_P = c**4/G
        scales.insert(Dimension::Force, scale(&[("c", 4, 1), ("G", -1, 1)]));
        // P_P = c**5/G
        scales.insert(Dimension::Power, scale(&[("c", 5, 1), ("G", -1, 1)]));
        // rho_P = c**7/(h*G**2)
        scales.insert(
            Dimension::Density,
            scale(&[("c", 7, 1), ("h", -1, 1), ("G", -2, 1)]),
        );
        // p_P = sqrt(h*c**3/G)
        scales.insert(
            Dimension::Momentum,
            scale(&[("h", 1, 2), ("c", 3, 2), ("G", -1, 2)]),
        );
        // a_P = sqrt(c**7/(h*G))
        scales.insert(
            Dimension::Acceleration,
            scale(&[("c", 7, 2), ("h", -1, 2), ("G", -1, 2)]),
        );

        UnitTable { scales }
    }

    /// The Planck scale for a dimension
    ///
    /// Velocity and frequency have no scale of their own and return
    /// `UnknownDimension`; their normalization is a ratio handled by the
    /// deriver.
    pub fn scale_for(&self, dimension: Dimension) -> UnitResult<&Monomial> {
        self.scales
            .get(&dimension)
            .ok_or(UnitError::UnknownDimension(dimension))
    }

    /// The dimension a conventional variable name denotes, if any
    pub fn dimension_of(&self, name: &str) -> Option<Dimension> {
        dimension_of(name)
    }
}

/// Build a scale monomial from `(constant, numer, denom)` exponent triples
fn scale(factors: &[(&str, i64, i64)]) -> Monomial {
    let mut out = Monomial::one();
    for (name, numer, denom) in factors {
        out = out.mul(&Monomial::symbol_pow(*name, *numer, *denom));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algebra::oneline_monomial;

    #[test]
    fn test_every_non_derived_dimension_has_a_scale() {
        let table = UnitTable::global();
        for dim in Dimension::ALL {
            if dim.is_derived_ratio() {
                assert_eq!(
                    table.scale_for(dim),
                    Err(UnitError::UnknownDimension(dim))
                );
            } else {
                assert!(table.scale_for(dim).is_ok(), "missing scale for {}", dim);
            }
        }
    }

    #[test]
    fn test_scales_use_only_base_constants() {
        let table = UnitTable::global();
        for dim in Dimension::ALL {
            if let Ok(scale) = table.scale_for(dim) {
                for name in scale.factors.keys() {
                    assert!(
                        BASE_CONSTANTS.contains(&name.as_str()),
                        "{} scale uses non-constant {}",
                        dim,
                        name
                    );
                }
            }
        }
    }

    #[test]
    fn test_mass_scale_renders_as_sqrt() {
        let table = UnitTable::global();
        let mass = table.scale_for(Dimension::Mass).unwrap();
        assert_eq!(oneline_monomial(mass), "sqrt(c*h/G)");
    }
}
