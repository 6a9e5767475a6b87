//! Physical dimensions and the variable-name table
//!
//! Conventional variable names map to the dimension they denote, the way
//! they appear in textbook postulates: `M`, `M1`, `M2` and `m` are masses,
//! `r`, `l`, `x`, `lambda` and `r_s` are lengths, and so on. Names outside
//! the table have no dimension; callers decide whether that is fatal.

use std::fmt;

/// Abstract physical dimension of a quantity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Dimension {
    Mass,
    Length,
    Time,
    Temperature,
    Energy,
    Force,
    Power,
    Density,
    Momentum,
    Acceleration,
    /// Derived ratio: normalizes against `c` directly, no Planck scale
    Velocity,
    /// Derived ratio: normalizes against the inverse Planck time
    Frequency,
}

impl Dimension {
    /// All dimensions, in declaration order
    pub const ALL: [Dimension; 12] = [
        Dimension::Mass,
        Dimension::Length,
        Dimension::Time,
        Dimension::Temperature,
        Dimension::Energy,
        Dimension::Force,
        Dimension::Power,
        Dimension::Density,
        Dimension::Momentum,
        Dimension::Acceleration,
        Dimension::Velocity,
        Dimension::Frequency,
    ];

    /// Lowercase dimension name
    pub fn name(&self) -> &'static str {
        match self {
            Dimension::Mass => "mass",
            Dimension::Length => "length",
            Dimension::Time => "time",
            Dimension::Temperature => "temperature",
            Dimension::Energy => "energy",
            Dimension::Force => "force",
            Dimension::Power => "power",
            Dimension::Density => "density",
            Dimension::Momentum => "momentum",
            Dimension::Acceleration => "acceleration",
            Dimension::Velocity => "velocity",
            Dimension::Frequency => "frequency",
        }
    }

    /// Whether this dimension normalizes as a ratio of other scales rather
    /// than by its own Planck scale
    pub fn is_derived_ratio(&self) -> bool {
        matches!(self, Dimension::Velocity | Dimension::Frequency)
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Dimension denoted by a conventional variable name, if recognized
pub fn dimension_of(name: &str) -> Option<Dimension> {
    match name {
        "M" | "M1" | "M2" | "m" => Some(Dimension::Mass),
        "r" | "l" | "x" | "lambda" | "r_s" => Some(Dimension::Length),
        "t" => Some(Dimension::Time),
        "T" => Some(Dimension::Temperature),
        "E" => Some(Dimension::Energy),
        "F" => Some(Dimension::Force),
        "P" => Some(Dimension::Power),
        "rho" => Some(Dimension::Density),
        "p" => Some(Dimension::Momentum),
        "a" => Some(Dimension::Acceleration),
        "v" => Some(Dimension::Velocity),
        "f" => Some(Dimension::Frequency),
        _ => None,
    }
}

/// Every recognized variable name, in table order
pub const RECOGNIZED_VARIABLES: [&str; 19] = [
    "M", "M1", "M2", "m", "r", "l", "x", "lambda", "r_s", "t", "T", "E", "F", "P", "rho", "p",
    "a", "v", "f",
];
