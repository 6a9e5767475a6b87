//! Planck unit registry
//!
//! Two fixed lookup tables drive normalization: dimension -> Planck scale
//! (symbolic, over the four fundamental constants) and variable name ->
//! dimension. Both are immutable after construction and safe to read from
//! any number of threads.

mod dimension;
mod errors;
mod planck;

pub use dimension::{dimension_of, Dimension, RECOGNIZED_VARIABLES};
pub use errors::{UnitError, UnitResult};
pub use planck::{
    UnitTable, BASE_CONSTANTS, BOLTZMANN_CONSTANT, GRAVITATIONAL_CONSTANT, PLANCK_CONSTANT,
    SPEED_OF_LIGHT,
};
