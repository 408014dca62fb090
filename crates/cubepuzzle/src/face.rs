use std::fmt;

use cubemath::prelude::*;
use strum::EnumIter;

/// Face of the cube. Each face also names the color of the facelets that
/// start on it.
#[derive(Debug, EnumIter, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub enum Face {
    /// Up (white).
    U,
    /// Down (yellow).
    D,
    /// Front (green).
    F,
    /// Back (blue).
    B,
    /// Left (orange).
    L,
    /// Right (red).
    R,
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.char())
    }
}

impl Face {
    /// Returns the face with the given outward direction.
    pub fn new(axis: Axis, sign: Sign) -> Self {
        // Y points down, so the up face is on the negative side.
        match (axis, sign) {
            (Axis::X, Sign::Pos) => Face::R,
            (Axis::X, Sign::Neg) => Face::L,
            (Axis::Y, Sign::Pos) => Face::D,
            (Axis::Y, Sign::Neg) => Face::U,
            (Axis::Z, Sign::Pos) => Face::F,
            (Axis::Z, Sign::Neg) => Face::B,
        }
    }

    /// Returns the axis perpendicular to this face.
    pub fn axis(self) -> Axis {
        match self {
            Face::L | Face::R => Axis::X,
            Face::U | Face::D => Axis::Y,
            Face::F | Face::B => Axis::Z,
        }
    }
    /// Returns the sign of this face along its perpendicular axis.
    pub fn sign(self) -> Sign {
        match self {
            Face::D | Face::F | Face::R => Sign::Pos,
            Face::U | Face::B | Face::L => Sign::Neg,
        }
    }

    /// Returns the unit outward normal of this face in the solved cube.
    pub fn normal(self) -> Vector3 {
        Vector3::unit(self.axis(), self.sign())
    }

    /// Returns the notation letter for this face.
    pub fn char(self) -> char {
        match self {
            Face::U => 'U',
            Face::D => 'D',
            Face::F => 'F',
            Face::B => 'B',
            Face::L => 'L',
            Face::R => 'R',
        }
    }
    /// Returns the face for a notation letter (case-insensitive).
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'U' => Some(Face::U),
            'D' => Some(Face::D),
            'F' => Some(Face::F),
            'B' => Some(Face::B),
            'L' => Some(Face::L),
            'R' => Some(Face::R),
            _ => None,
        }
    }

    /// Returns an iterator over all faces, in the order `U D F B L R`.
    pub fn iter() -> impl Iterator<Item = Face> {
        <Self as strum::IntoEnumIterator>::iter()
    }
}
