use cubepuzzle::{Face, Move};

use crate::ViewNudge;

/// Returns the move bound to a key, if any.
///
/// The six face letters map to their face, ignoring case; holding shift
/// selects the counterclockwise move.
pub fn key_to_move(key: char, shift: bool) -> Option<Move> {
    Some(Move::new(Face::from_char(key)?, shift))
}

/// Host input, independent of any windowing library.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum InputCommand {
    /// Face move button.
    Move(Move),
    /// Key press.
    Key {
        /// Character on the key.
        key: char,
        /// Whether shift was held.
        shift: bool,
    },
    /// Scramble button.
    Scramble,
    /// Reset button.
    Reset,
    /// View nudge button.
    Nudge(ViewNudge),
    /// Pointer pressed at a position in pixels.
    DragStart([f32; 2]),
    /// Pointer moved to a position in pixels.
    DragMove([f32; 2]),
    /// Pointer released or left the window.
    DragEnd,
}
