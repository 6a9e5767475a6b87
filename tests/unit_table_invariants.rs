//! Unit Table Invariant Tests
//!
//! The Planck scale table is the foundation the whole derivation rests on:
//! - Every recognized variable maps to a dimension
//! - Every non-derived dimension has a scale over the four base constants
//! - The scales are mutually consistent (energy = mass * c**2, and so on),
//!   which is what makes every normalized equation dimensionless

use lawforge::algebra::Monomial;
use lawforge::units::{
    dimension_of, Dimension, UnitError, UnitTable, BASE_CONSTANTS, RECOGNIZED_VARIABLES,
};

// =============================================================================
// Helper Functions
// =============================================================================

fn scale(dim: Dimension) -> Monomial {
    UnitTable::global().scale_for(dim).unwrap().clone()
}

fn symbol_pow(name: &str, numer: i64, denom: i64) -> Monomial {
    Monomial::symbol_pow(name, numer, denom)
}

// =============================================================================
// Table Coverage
// =============================================================================

/// Every recognized variable name has a dimension.
#[test]
fn test_every_variable_has_a_dimension() {
    for name in RECOGNIZED_VARIABLES {
        assert!(dimension_of(name).is_some(), "no dimension for '{}'", name);
    }
}

/// Every non-derived dimension has a scale; velocity and frequency do not.
#[test]
fn test_scale_coverage() {
    let table = UnitTable::global();
    for dim in Dimension::ALL {
        if dim.is_derived_ratio() {
            assert_eq!(table.scale_for(dim), Err(UnitError::UnknownDimension(dim)));
        } else {
            assert!(table.scale_for(dim).is_ok(), "no scale for {}", dim);
        }
    }
}

/// Scales are built from the four base constants and nothing else.
#[test]
fn test_scales_use_only_base_constants() {
    let table = UnitTable::global();
    for dim in Dimension::ALL {
        if let Ok(scale) = table.scale_for(dim) {
            for name in scale.factors.keys() {
                assert!(
                    BASE_CONSTANTS.contains(&name.as_str()),
                    "{} scale contains '{}'",
                    dim,
                    name
                );
            }
        }
    }
}

/// The global table is one instance, built once.
#[test]
fn test_global_table_is_shared() {
    let a = UnitTable::global() as *const UnitTable;
    let b = UnitTable::global() as *const UnitTable;
    assert_eq!(a, b);
}

// =============================================================================
// Mutual Consistency
// =============================================================================

/// E_P = m_P * c**2
#[test]
fn test_energy_is_mass_times_c_squared() {
    let expected = scale(Dimension::Mass).mul(&symbol_pow("c", 2, 1));
    assert_eq!(scale(Dimension::Energy), expected);
}

/// p_P = m_P * c
#[test]
fn test_momentum_is_mass_times_c() {
    let expected = scale(Dimension::Mass).mul(&symbol_pow("c", 1, 1));
    assert_eq!(scale(Dimension::Momentum), expected);
}

/// l_P = c * t_P
#[test]
fn test_length_is_c_times_time() {
    let expected = scale(Dimension::Time).mul(&symbol_pow("c", 1, 1));
    assert_eq!(scale(Dimension::Length), expected);
}

/// F_P = m_P * a_P
#[test]
fn test_force_is_mass_times_acceleration() {
    let expected = scale(Dimension::Mass).mul(&scale(Dimension::Acceleration));
    assert_eq!(scale(Dimension::Force), expected);
}

/// P_P = E_P / t_P
#[test]
fn test_power_is_energy_over_time() {
    let expected = scale(Dimension::Energy)
        .div(&scale(Dimension::Time))
        .unwrap();
    assert_eq!(scale(Dimension::Power), expected);
}

/// a_P = c / t_P
#[test]
fn test_acceleration_is_c_over_time() {
    let expected = symbol_pow("c", 1, 1).div(&scale(Dimension::Time)).unwrap();
    assert_eq!(scale(Dimension::Acceleration), expected);
}

/// T_P = E_P / k_B
#[test]
fn test_temperature_is_energy_over_boltzmann() {
    let expected = scale(Dimension::Energy)
        .div(&symbol_pow("k_B", 1, 1))
        .unwrap();
    assert_eq!(scale(Dimension::Temperature), expected);
}

/// rho_P = E_P / l_P**3 (the density scale is an energy density)
#[test]
fn test_density_is_energy_over_length_cubed() {
    let cubed = scale(Dimension::Length).pow_rational(&rational(3, 1)).unwrap();
    let expected = scale(Dimension::Energy).div(&cubed).unwrap();
    assert_eq!(scale(Dimension::Density), expected);
}

fn rational(numer: i64, denom: i64) -> num_rational::BigRational {
    num_rational::BigRational::new(
        num_bigint::BigInt::from(numer),
        num_bigint::BigInt::from(denom),
    )
}
