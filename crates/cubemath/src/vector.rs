//! Integer 3D vectors on the cube lattice.

use std::fmt;
use std::ops::{Add, Index, IndexMut, Mul, Neg, Sub};

use crate::{Axis, Float, Sign};

/// 3D vector with integer components.
///
/// Used for cubie positions (each component in `-1..=1`) and for facelet
/// normals (unit axis vectors).
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Vector3(pub [i32; 3]);

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [x, y, z] = self.0;
        write!(f, "({x}, {y}, {z})")
    }
}

impl Index<Axis> for Vector3 {
    type Output = i32;

    fn index(&self, axis: Axis) -> &i32 {
        &self.0[axis.idx()]
    }
}
impl IndexMut<Axis> for Vector3 {
    fn index_mut(&mut self, axis: Axis) -> &mut i32 {
        &mut self.0[axis.idx()]
    }
}

impl Add for Vector3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(std::array::from_fn(|i| self.0[i] + rhs.0[i]))
    }
}
impl Sub for Vector3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(std::array::from_fn(|i| self.0[i] - rhs.0[i]))
    }
}
impl Neg for Vector3 {
    type Output = Self;

    fn neg(self) -> Self {
        Self(self.0.map(|x| -x))
    }
}
impl Mul<i32> for Vector3 {
    type Output = Self;

    fn mul(self, rhs: i32) -> Self {
        Self(self.0.map(|x| x * rhs))
    }
}

impl Vector3 {
    /// Zero vector.
    pub const ZERO: Self = Self([0; 3]);

    /// Constructs a vector from its components.
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self([x, y, z])
    }

    /// Returns the unit vector pointing along `axis` in the direction `sign`.
    pub fn unit(axis: Axis, sign: Sign) -> Self {
        let mut ret = Self::ZERO;
        ret[axis] = sign.to_i32();
        ret
    }

    /// Rounds each component of a floating-point vector to the nearest
    /// integer.
    pub fn from_rounded(v: [Float; 3]) -> Self {
        Self(v.map(|x| x.round() as i32))
    }

    /// Returns the dot product of two vectors.
    pub fn dot(self, rhs: Self) -> i32 {
        std::iter::zip(self.0, rhs.0).map(|(l, r)| l * r).sum()
    }

    /// Returns whether every component is in `-1..=1`.
    pub fn is_lattice_point(self) -> bool {
        self.0.iter().all(|x| (-1..=1).contains(x))
    }

    /// Returns the number of nonzero components.
    pub fn nonzero_count(self) -> usize {
        self.0.iter().filter(|&&x| x != 0).count()
    }

    /// Returns the components as floats.
    pub fn to_float(self) -> [Float; 3] {
        self.0.map(|x| x as Float)
    }

    /// Converts the vector to a `cgmath` vector for rendering.
    pub fn to_cgmath(self) -> cgmath::Vector3<f32> {
        let [x, y, z] = self.0;
        cgmath::Vector3::new(x as f32, y as f32, z as f32)
    }
}
