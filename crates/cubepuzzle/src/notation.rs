//! Face-turn notation and the static move table.

use std::fmt;
use std::str::FromStr;

use cubemath::prelude::*;
use itertools::Itertools;
use thiserror::Error;

use crate::Face;

/// Quarter turn of one outer layer, in world coordinates.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Twist {
    /// Axis of rotation.
    pub axis: Axis,
    /// Which outer layer along `axis` is turned.
    pub layer: Sign,
    /// Direction of rotation, using the right-hand rule around `axis`.
    pub direction: Sign,
}

impl fmt::Display for Twist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let axis = self.axis.lowercase_char();
        let layer = self.layer.to_i32();
        let degrees = self.degrees();
        write!(f, "{axis}{layer:+} {degrees:+}°")
    }
}

impl Twist {
    /// Constructs a twist from its parameters.
    pub const fn new(axis: Axis, layer: Sign, direction: Sign) -> Self {
        Self {
            axis,
            layer,
            direction,
        }
    }

    /// Returns the signed angle of the twist in degrees: either 90 or -90.
    pub fn degrees(self) -> i32 {
        self.direction.to_i32() * cubemath::matrix::QUARTER_TURN_DEGREES
    }

    /// Returns the rotation matrix for the twist.
    pub fn matrix(self) -> Matrix3 {
        Matrix3::quarter_turn(self.axis, self.direction)
    }

    /// Returns the twist that undoes this one.
    #[must_use]
    pub fn rev(self) -> Self {
        Self {
            direction: -self.direction,
            ..self
        }
    }

    /// Returns the face whose layer this twist turns.
    pub fn face(self) -> Face {
        Face::new(self.axis, self.layer)
    }
}

/// Single face turn in standard notation, such as `R` or `U'`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub struct Move {
    /// Face to turn.
    pub face: Face,
    /// Whether the turn is counterclockwise as seen from the face.
    pub prime: bool,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.face)?;
        if self.prime {
            write!(f, "'")?;
        }
        Ok(())
    }
}

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let first = chars.next().ok_or(ParseMoveError::Empty)?;
        // Lowercase letters mean wide turns in standard notation, so only
        // accept uppercase.
        let face = match first.is_ascii_uppercase() {
            true => Face::from_char(first),
            false => None,
        }
        .ok_or(ParseMoveError::UnknownFace(first))?;
        let prime = match chars.as_str() {
            "" => false,
            "'" => true,
            rest => return Err(ParseMoveError::TrailingCharacters(rest.to_owned())),
        };
        Ok(Self { face, prime })
    }
}

impl Move {
    /// All 12 moves, in the order `U U' D D' F F' B B' L L' R R'`.
    pub const ALL: [Move; 12] = [
        Move::new(Face::U, false),
        Move::new(Face::U, true),
        Move::new(Face::D, false),
        Move::new(Face::D, true),
        Move::new(Face::F, false),
        Move::new(Face::F, true),
        Move::new(Face::B, false),
        Move::new(Face::B, true),
        Move::new(Face::L, false),
        Move::new(Face::L, true),
        Move::new(Face::R, false),
        Move::new(Face::R, true),
    ];

    /// Constructs a move.
    pub const fn new(face: Face, prime: bool) -> Self {
        Self { face, prime }
    }

    /// Looks up the twist for a notation string. Returns `None` if the
    /// notation is not one of the 12 face turns.
    pub fn lookup(notation: &str) -> Option<Twist> {
        notation.parse::<Move>().ok().map(Move::twist)
    }

    /// Returns the twist performed by this move.
    pub const fn twist(self) -> Twist {
        use Axis::{X, Y, Z};
        use Sign::{Neg, Pos};

        let (axis, layer, direction) = match (self.face, self.prime) {
            (Face::U, false) => (Y, Neg, Neg),
            (Face::U, true) => (Y, Neg, Pos),
            (Face::D, false) => (Y, Pos, Pos),
            (Face::D, true) => (Y, Pos, Neg),
            (Face::F, false) => (Z, Pos, Pos),
            (Face::F, true) => (Z, Pos, Neg),
            (Face::B, false) => (Z, Neg, Neg),
            (Face::B, true) => (Z, Neg, Pos),
            (Face::L, false) => (X, Neg, Neg),
            (Face::L, true) => (X, Neg, Pos),
            (Face::R, false) => (X, Pos, Pos),
            (Face::R, true) => (X, Pos, Neg),
        };
        Twist::new(axis, layer, direction)
    }

    /// Returns the move that undoes this one.
    #[must_use]
    pub fn rev(self) -> Self {
        Self {
            prime: !self.prime,
            ..self
        }
    }
}

/// Parses a whitespace-separated sequence of moves, such as `R U R' U'`.
pub fn parse_moves(s: &str) -> Result<Vec<Move>, ParseMoveError> {
    s.split_whitespace().map(str::parse).collect()
}

/// Formats a sequence of moves separated by spaces.
pub fn format_moves<'a>(moves: impl IntoIterator<Item = &'a Move>) -> String {
    moves.into_iter().join(" ")
}

/// Error produced when parsing a move.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseMoveError {
    /// Empty string
    #[error("empty move")]
    Empty,
    /// First character is not a face letter
    #[error("unknown face {0:?}")]
    UnknownFace(char),
    /// Extra characters after the face letter
    #[error("unexpected {0:?} after face")]
    TrailingCharacters(String),
}
