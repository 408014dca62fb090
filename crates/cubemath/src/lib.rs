//! Exact 3D lattice vectors and quarter-turn rotation matrices.
//!
//! Everything that mutates committed puzzle state uses integer math so that
//! repeated turns never drift. Floating-point is only used for rendering
//! in-flight animation frames (see [`matrix::partial_rotation`]).

pub use cgmath;

/// Floating-point type used for tolerance comparisons.
pub type Float = f64;

/// Small floating-point value used for comparisons.
pub const EPSILON: Float = 0.000001;

/// Names for the three axes.
pub const AXIS_NAMES: &str = "XYZ";

pub mod axis;
pub mod matrix;
pub mod sign;
pub mod vector;

/// Structs, traits, and constants.
pub mod prelude {
    pub use crate::axis::Axis;
    pub use crate::matrix::Matrix3;
    pub use crate::sign::Sign;
    pub use crate::vector::Vector3;
    pub use crate::{AXIS_NAMES, EPSILON, Float};
}
pub use prelude::*;

#[cfg(test)]
mod tests;
