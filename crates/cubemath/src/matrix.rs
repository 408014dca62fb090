//! Exact 3x3 rotation matrices.

use std::fmt;
use std::ops::{Mul, MulAssign};

use cgmath::{Deg, Matrix3 as CgMatrix3};

use crate::{Axis, Float, Sign, Vector3};

/// Angle of a quarter turn, in degrees.
pub const QUARTER_TURN_DEGREES: i32 = 90;

/// 3-by-3 integer matrix.
///
/// Quarter-turn rotations have entries in `{-1, 0, 1}`, so composing them is
/// exact and never drifts away from orthogonality.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Matrix3 {
    /// Elements stored in **row-major** order.
    elems: [i32; 9],
}

impl Default for Matrix3 {
    fn default() -> Self {
        Self::IDENT
    }
}

impl fmt::Display for Matrix3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            if row > 0 {
                write!(f, "; ")?;
            }
            let [a, b, c] = self.row(row);
            write!(f, "{a} {b} {c}")?;
        }
        Ok(())
    }
}

impl Matrix3 {
    /// Identity matrix.
    pub const IDENT: Self = Self {
        elems: [1, 0, 0, 0, 1, 0, 0, 0, 1],
    };

    /// Constructs a matrix from nine elements in **row-major** order.
    ///
    /// ```
    /// # use cubemath::Matrix3;
    /// let m = Matrix3::from_rows([1, 2, 3, 4, 5, 6, 7, 8, 9]);
    /// assert_eq!(m.get(0, 2), 3);
    /// assert_eq!(m.get(2, 0), 7);
    /// ```
    pub const fn from_rows(elems: [i32; 9]) -> Self {
        Self { elems }
    }

    /// Returns the rotation by `angle` about `axis`, using the right-hand rule
    /// in the cube's (Y-down) frame.
    ///
    /// The trigonometric values are snapped to the nearest integer, which is
    /// exact for multiples of 90 degrees. Other angles produce a matrix that
    /// is not a rotation; use [`partial_rotation`] for those.
    pub fn from_axis_angle(axis: Axis, degrees: i32) -> Self {
        let (sin, cos) = (degrees as Float).to_radians().sin_cos();
        let s = sin.round() as i32;
        let c = cos.round() as i32;
        let elems = match axis {
            Axis::X => [1, 0, 0, 0, c, -s, 0, s, c],
            Axis::Y => [c, 0, s, 0, 1, 0, -s, 0, c],
            Axis::Z => [c, -s, 0, s, c, 0, 0, 0, 1],
        };
        Self { elems }
    }

    /// Returns the 90-degree rotation about `axis` in the direction `sign`.
    pub fn quarter_turn(axis: Axis, sign: Sign) -> Self {
        Self::from_axis_angle(axis, sign.to_i32() * QUARTER_TURN_DEGREES)
    }

    /// Returns the element at `row` and `col`.
    ///
    /// # Panics
    ///
    /// This method panics if `row >= 3 || col >= 3`.
    pub fn get(&self, row: usize, col: usize) -> i32 {
        assert!(row < 3 && col < 3, "matrix index ({row}, {col}) out of range");
        self.elems[row * 3 + col]
    }

    /// Returns a row of the matrix.
    pub fn row(&self, row: usize) -> [i32; 3] {
        std::array::from_fn(|col| self.get(row, col))
    }
    /// Returns a column of the matrix.
    pub fn col(&self, col: usize) -> [i32; 3] {
        std::array::from_fn(|row| self.get(row, col))
    }

    /// Returns the transpose of the matrix. For a rotation, this is also its
    /// inverse.
    #[must_use]
    pub fn transpose(&self) -> Self {
        Self {
            elems: std::array::from_fn(|i| self.get(i % 3, i / 3)),
        }
    }

    /// Returns the determinant of the matrix.
    pub fn determinant(&self) -> i32 {
        let m = |r, c| self.get(r, c);
        m(0, 0) * (m(1, 1) * m(2, 2) - m(1, 2) * m(2, 1))
            - m(0, 1) * (m(1, 0) * m(2, 2) - m(1, 2) * m(2, 0))
            + m(0, 2) * (m(1, 0) * m(2, 1) - m(1, 1) * m(2, 0))
    }

    /// Returns whether the matrix is a proper rotation: orthogonal with
    /// determinant 1.
    pub fn is_rotation(&self) -> bool {
        *self * self.transpose() == Self::IDENT && self.determinant() == 1
    }

    /// Converts the matrix to a `cgmath` matrix for rendering.
    pub fn to_cgmath(&self) -> CgMatrix3<f32> {
        // `cgmath` takes its arguments in column-major order.
        let [c0, c1, c2] = [0, 1, 2].map(|col| self.col(col).map(|x| x as f32));
        CgMatrix3::new(
            c0[0], c0[1], c0[2], //
            c1[0], c1[1], c1[2], //
            c2[0], c2[1], c2[2],
        )
    }
}

impl Mul for Matrix3 {
    type Output = Matrix3;

    fn mul(self, rhs: Matrix3) -> Matrix3 {
        Matrix3 {
            elems: std::array::from_fn(|i| {
                let (row, col) = (i / 3, i % 3);
                (0..3).map(|k| self.get(row, k) * rhs.get(k, col)).sum()
            }),
        }
    }
}
impl MulAssign for Matrix3 {
    fn mul_assign(&mut self, rhs: Matrix3) {
        *self = *self * rhs;
    }
}

impl Mul<Vector3> for Matrix3 {
    type Output = Vector3;

    fn mul(self, rhs: Vector3) -> Vector3 {
        Vector3(std::array::from_fn(|row| {
            Vector3(self.row(row)).dot(rhs)
        }))
    }
}

/// Returns the floating-point rotation by `degrees` about `axis`, using the
/// same convention as [`Matrix3::from_axis_angle`].
///
/// This is for animating a turn in progress; committed state never uses it.
pub fn partial_rotation(axis: Axis, degrees: f32) -> CgMatrix3<f32> {
    match axis {
        Axis::X => CgMatrix3::from_angle_x(Deg(degrees)),
        Axis::Y => CgMatrix3::from_angle_y(Deg(degrees)),
        Axis::Z => CgMatrix3::from_angle_z(Deg(degrees)),
    }
}
