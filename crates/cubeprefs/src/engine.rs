use serde::{Deserialize, Serialize};

/// Maximum number of moves waiting behind the one being animated.
pub const DEFAULT_QUEUE_CAPACITY: usize = 5;
/// Number of random moves in a scramble.
pub const DEFAULT_SCRAMBLE_LENGTH: usize = cubepuzzle::scramble::DEFAULT_SCRAMBLE_LENGTH;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct EnginePreferences {
    /// Moves issued while a turn is animating are dropped once this many are
    /// already waiting. Scrambles are not limited by this.
    pub queue_capacity: usize,
    pub scramble_length: usize,
    /// Minimum dot product between each facelet's normal and its home
    /// direction for the cube to count as solved.
    pub solved_threshold: f64,
}
impl Default for EnginePreferences {
    fn default() -> Self {
        Self {
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
            scramble_length: DEFAULT_SCRAMBLE_LENGTH,
            solved_threshold: cubepuzzle::DEFAULT_SOLVED_THRESHOLD,
        }
    }
}
