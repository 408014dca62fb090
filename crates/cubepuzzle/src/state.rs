use std::collections::HashSet;

use cubemath::prelude::*;
use itertools::iproduct;
use smallvec::SmallVec;

use crate::{Cubie, Move, Twist};

/// Number of cubies in the puzzle, including the hidden center.
pub const CUBIE_COUNT: usize = 27;
/// Number of cubies in one layer.
pub const LAYER_SIZE: usize = 9;

/// Default threshold for [`CubeState::is_solved()`].
///
/// Each facelet normal is compared with its target direction via a dot
/// product. With exact quarter-turn arithmetic that product is always 1, 0,
/// or -1.
pub const DEFAULT_SOLVED_THRESHOLD: Float = 0.9;

/// Indices of the cubies affected by a twist.
pub type TwistGroup = SmallVec<[usize; LAYER_SIZE]>;

/// Positions and orientations of all 27 cubies.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CubeState {
    cubies: Vec<Cubie>,
}

impl Default for CubeState {
    fn default() -> Self {
        Self::new()
    }
}

impl CubeState {
    /// Constructs a solved cube.
    ///
    /// Cubies are created with X outermost, then Y, then Z, each counting from
    /// -1 to 1. This order is stable, so cubie indices can be used as
    /// identifiers by a renderer.
    pub fn new() -> Self {
        let cubies = iproduct!(-1..=1, -1..=1, -1..=1)
            .map(|(x, y, z)| Cubie::new(Vector3::new(x, y, z)))
            .collect();
        Self { cubies }
    }

    /// Returns all the cubies, in creation order.
    pub fn cubies(&self) -> &[Cubie] {
        &self.cubies
    }

    /// Returns the cubie currently at `position`, if there is one.
    pub fn cubie_at(&self, position: Vector3) -> Option<&Cubie> {
        self.cubies.iter().find(|c| c.position() == position)
    }

    /// Returns the indices of the cubies in the layer turned by `twist`.
    pub fn select_group(&self, twist: Twist) -> TwistGroup {
        self.cubies
            .iter()
            .enumerate()
            .filter(|(_, cubie)| cubie.is_in_layer(twist.axis, twist.layer))
            .map(|(i, _)| i)
            .collect()
    }

    /// Applies `twist` to the cubies in `group`.
    ///
    /// `group` must have been computed by [`Self::select_group()`] for the
    /// same twist on the current state.
    pub fn commit_group(&mut self, group: &[usize], twist: Twist) {
        for &i in group {
            match self.cubies.get_mut(i) {
                Some(cubie) => cubie.rotate(twist),
                None => debug_panic!("cubie index {i} out of range"),
            }
        }
    }

    /// Applies a twist immediately.
    pub fn apply_twist(&mut self, twist: Twist) {
        let group = self.select_group(twist);
        self.commit_group(&group, twist);
    }

    /// Applies a sequence of moves immediately.
    pub fn apply_moves<'a>(&mut self, moves: impl IntoIterator<Item = &'a Move>) {
        for m in moves {
            self.apply_twist(m.twist());
        }
    }

    /// Returns whether every facelet points the same way as its home face,
    /// within `threshold`.
    ///
    /// This compares orientations only, so it ignores where cubies are. For
    /// cubies reachable by face turns, orientation determines position.
    pub fn is_solved(&self, threshold: Float) -> bool {
        self.cubies.iter().all(|cubie| {
            cubie.facelets().iter().all(|facelet| {
                let normal = cubie.world_normal(facelet);
                let face = facelet.color;
                normal[face.axis()] as Float * face.sign() > threshold
            })
        })
    }

    /// Returns whether the cubies occupy all 27 lattice cells exactly once.
    pub fn is_lattice_permutation(&self) -> bool {
        let mut seen = HashSet::new();
        self.cubies.len() == CUBIE_COUNT
            && self
                .cubies
                .iter()
                .all(|c| c.position().is_lattice_point() && seen.insert(c.position()))
    }

    /// Returns whether every cubie orientation is a proper rotation.
    pub fn orientations_are_rotations(&self) -> bool {
        self.cubies.iter().all(|c| c.orientation().is_rotation())
    }
}
