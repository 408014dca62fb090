//! Cartesian axes.

use strum::Display;

use crate::AXIS_NAMES;

/// A 3-dimensional axis.
///
/// The cube uses a screen-style frame: X points right, Y points **down**, and
/// Z points towards the viewer.
#[derive(Debug, Display, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Axis {
    /// X axis (right).
    X = 0,
    /// Y axis (down).
    Y = 1,
    /// Z axis (towards the viewer).
    Z = 2,
}

impl Axis {
    /// Returns an integer index for this axis; X = 0, Y = 1, Z = 2.
    pub const fn idx(self) -> usize {
        self as usize
    }

    /// Returns the axis with the given index, or `None` if out of range.
    pub const fn from_idx(idx: usize) -> Option<Self> {
        match idx {
            0 => Some(Axis::X),
            1 => Some(Axis::Y),
            2 => Some(Axis::Z),
            _ => None,
        }
    }

    /// Returns the axis for a character (case-insensitive).
    pub fn from_char(c: char) -> Option<Self> {
        AXIS_NAMES
            .find(c.to_ascii_uppercase())
            .and_then(Self::from_idx)
    }

    /// Returns the lowercase name of the axis, as used in CSS transforms.
    pub const fn lowercase_char(self) -> char {
        match self {
            Axis::X => 'x',
            Axis::Y => 'y',
            Axis::Z => 'z',
        }
    }

    /// Returns an iterator over all axes.
    pub fn iter() -> impl Clone + Iterator<Item = Axis> {
        [Axis::X, Axis::Y, Axis::Z].into_iter()
    }
}
