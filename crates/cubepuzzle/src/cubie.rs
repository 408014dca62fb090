use cubemath::prelude::*;
use smallvec::SmallVec;

use crate::{Face, Twist};

/// Colored face of a cubie.
///
/// The color and normal are fixed when the cube is built; turning the cube
/// only changes the orientation of the cubie that owns the facelet.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Facelet {
    /// Face that this facelet starts on, which also determines its color.
    pub color: Face,
    /// Outward normal of the facelet in the solved cube.
    pub home_normal: Vector3,
}

impl Facelet {
    /// Constructs the facelet that starts on `face`.
    pub fn new(face: Face) -> Self {
        Self {
            color: face,
            home_normal: face.normal(),
        }
    }
}

/// One of the 27 unit cubes that make up the puzzle.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cubie {
    /// Position of the cubie in the solved cube.
    home: Vector3,
    /// Current lattice cell, with each coordinate in `-1..=1`.
    position: Vector3,
    /// Cumulative rotation applied to the cubie since it was built.
    orientation: Matrix3,
    /// Facelets on the outside of the solved cube. The center cubie has none.
    facelets: SmallVec<[Facelet; 3]>,
}

impl Cubie {
    /// Constructs a cubie in its solved position, with one facelet for each
    /// outer face it touches.
    pub fn new(home: Vector3) -> Self {
        let facelets = Face::iter()
            .filter(|face| home[face.axis()] == face.sign().to_i32())
            .map(Facelet::new)
            .collect();
        Self {
            home,
            position: home,
            orientation: Matrix3::IDENT,
            facelets,
        }
    }

    /// Returns the position of the cubie in the solved cube.
    pub fn home(&self) -> Vector3 {
        self.home
    }
    /// Returns the current lattice cell of the cubie.
    pub fn position(&self) -> Vector3 {
        self.position
    }
    /// Returns the cumulative rotation applied to the cubie.
    pub fn orientation(&self) -> Matrix3 {
        self.orientation
    }
    /// Returns the cubie's facelets.
    pub fn facelets(&self) -> &[Facelet] {
        &self.facelets
    }

    /// Returns whether the cubie lies in the given layer.
    pub fn is_in_layer(&self, axis: Axis, layer: Sign) -> bool {
        self.position[axis] == layer.to_i32()
    }

    /// Returns the current outward normal of a facelet.
    pub fn world_normal(&self, facelet: &Facelet) -> Vector3 {
        self.orientation * facelet.home_normal
    }

    /// Returns which face a facelet currently points towards.
    pub fn facing(&self, facelet: &Facelet) -> Option<Face> {
        let normal = self.world_normal(facelet);
        let axis = Axis::iter().find(|&axis| normal[axis] != 0)?;
        Some(Face::new(axis, Sign::from_nonzero(normal[axis])?))
    }

    /// Applies a twist to the cubie: first the position, then the
    /// orientation.
    pub(crate) fn rotate(&mut self, twist: Twist) {
        let m = twist.matrix();
        self.position = Vector3::from_rounded((m * self.position).to_float());
        self.orientation = m * self.orientation;
        if !self.position.is_lattice_point() {
            debug_panic!("cubie {} left the lattice at {}", self.home, self.position);
        }
    }
}
