//! 3x3x3 cubie store, move notation, and solved-state detection.
//!
//! This crate contains no timing or animation; see `cubeview` for that.
//! Everything here is pure state: [`CubeState`] holds the 27 cubies and
//! [`CubeState::apply_twist()`] commits a single quarter turn.

pub use cubemath;

macro_rules! debug_panic {
    ($($tok:tt)*) => {
        match cfg!(debug_assertions) {
            true => panic!($($tok)*),
            false => log::error!($($tok)*),
        }
    };
}

mod cubie;
mod face;
mod notation;
pub mod scramble;
mod state;

pub use cubie::{Cubie, Facelet};
pub use face::Face;
pub use notation::{Move, ParseMoveError, Twist, format_moves, parse_moves};
pub use scramble::Scramble;
pub use state::{CUBIE_COUNT, CubeState, DEFAULT_SOLVED_THRESHOLD, LAYER_SIZE, TwistGroup};

/// Structs, traits, and constants.
pub mod prelude {
    pub use cubemath::prelude::*;

    pub use crate::{
        CubeState, Cubie, Face, Facelet, Move, ParseMoveError, Scramble, Twist, TwistGroup,
    };
}
