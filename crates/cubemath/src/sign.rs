//! Direction along an axis.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Mul, Neg};

use crate::Float;

/// Which end of an axis: the outer layer at +1 or at -1, or the direction of
/// a quarter turn.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Sign {
    /// +1
    Pos,
    /// -1
    Neg,
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Sign::Pos => "+",
            Sign::Neg => "-",
        })
    }
}

impl Neg for Sign {
    type Output = Self;

    fn neg(self) -> Self {
        match self {
            Sign::Pos => Sign::Neg,
            Sign::Neg => Sign::Pos,
        }
    }
}

impl Sign {
    /// Returns `1` or `-1`.
    pub const fn to_i32(self) -> i32 {
        match self {
            Sign::Pos => 1,
            Sign::Neg => -1,
        }
    }

    /// Returns the sign of a lattice coordinate, or `None` for zero.
    pub fn from_nonzero(value: i32) -> Option<Self> {
        match value.cmp(&0) {
            Ordering::Less => Some(Sign::Neg),
            Ordering::Equal => None,
            Ordering::Greater => Some(Sign::Pos),
        }
    }

    /// Returns both signs, positive first.
    pub fn iter() -> impl Clone + Iterator<Item = Sign> {
        [Sign::Pos, Sign::Neg].into_iter()
    }
}

/// Flips `self` when multiplied by [`Sign::Neg`].
macro_rules! flip_by_sign {
    ($($ty:ty),+) => {
        $(
            impl Mul<Sign> for $ty {
                type Output = $ty;

                fn mul(self, rhs: Sign) -> $ty {
                    match rhs {
                        Sign::Pos => self,
                        Sign::Neg => -self,
                    }
                }
            }
        )+
    };
}

flip_by_sign!(Sign, i32, Float);
