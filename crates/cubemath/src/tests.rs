use itertools::Itertools;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

use crate::matrix::partial_rotation;
use crate::*;

fn all_quarter_turns() -> Vec<Matrix3> {
    Axis::iter()
        .cartesian_product(Sign::iter())
        .map(|(axis, sign)| Matrix3::quarter_turn(axis, sign))
        .collect()
}

#[test]
fn test_quarter_turn_matrices() {
    // Rotating +90 degrees about X sends +Y to +Z.
    let rx = Matrix3::quarter_turn(Axis::X, Sign::Pos);
    assert_eq!(rx * Vector3::new(0, 1, 0), Vector3::new(0, 0, 1));
    assert_eq!(
        rx,
        Matrix3::from_rows([
            1, 0, 0, //
            0, 0, -1, //
            0, 1, 0,
        ]),
    );

    // Rotating +90 degrees about Y sends +Z to +X.
    let ry = Matrix3::quarter_turn(Axis::Y, Sign::Pos);
    assert_eq!(ry * Vector3::new(0, 0, 1), Vector3::new(1, 0, 0));

    // Rotating -90 degrees about Z sends +X to -Y.
    let rz = Matrix3::quarter_turn(Axis::Z, Sign::Neg);
    assert_eq!(rz * Vector3::new(1, 0, 0), Vector3::new(0, -1, 0));
}

#[test]
fn test_quarter_turns_are_rotations() {
    for m in all_quarter_turns() {
        assert!(m.is_rotation(), "{m} is not a rotation");
        assert_eq!(m.determinant(), 1);
    }
}

#[test]
fn test_quarter_turn_order() {
    for m in all_quarter_turns() {
        assert_ne!(m, Matrix3::IDENT);
        assert_eq!(m * m * m * m, Matrix3::IDENT);
    }
    for axis in Axis::iter() {
        let cw = Matrix3::quarter_turn(axis, Sign::Pos);
        let ccw = Matrix3::quarter_turn(axis, Sign::Neg);
        assert_eq!(cw * ccw, Matrix3::IDENT);
        assert_eq!(cw.transpose(), ccw);
    }
}

#[test]
fn test_rotation_group_closure() {
    // Quarter turns generate the 24-element rotation group of the cube.
    let generators = all_quarter_turns();
    let mut group = vec![Matrix3::IDENT];
    let mut i = 0;
    while i < group.len() {
        for &g in &generators {
            let m = g * group[i];
            if !group.contains(&m) {
                group.push(m);
            }
        }
        i += 1;
    }
    assert_eq!(group.len(), 24);
    assert!(group.iter().all(Matrix3::is_rotation));
}

#[test]
fn test_matrix_vector_mul() {
    let m = Matrix3::from_rows([1, 2, 3, 4, 5, 6, 7, 8, 9]);
    assert_eq!(m * Vector3::new(1, 0, -1), Vector3::new(-2, -2, -2));
    assert_eq!(m.transpose().row(0), [1, 4, 7]);
    assert_eq!(m.determinant(), 0);
    assert!(!m.is_rotation());
}

#[test]
fn test_partial_rotation_matches_quarter_turn() {
    for axis in Axis::iter() {
        for sign in Sign::iter() {
            let exact = Matrix3::quarter_turn(axis, sign).to_cgmath();
            let approx = partial_rotation(axis, sign.to_i32() as f32 * 90.0);
            for (col, row) in (0..3).cartesian_product(0..3) {
                let (a, b) = (exact[col][row], approx[col][row]);
                assert!((a - b).abs() < EPSILON as f32, "{axis} {sign}: {a} != {b}");
            }
        }
    }
}

#[test]
fn test_from_rounded() {
    assert_eq!(
        Vector3::from_rounded([0.9999999, -6.1e-17, -1.0000001]),
        Vector3::new(1, 0, -1),
    );
}

#[test]
fn test_sign() {
    assert_eq!(-Sign::Pos, Sign::Neg);
    assert_eq!(Sign::Neg * Sign::Neg, Sign::Pos);
    assert_eq!(Sign::from_nonzero(-3), Some(Sign::Neg));
    assert_eq!(Sign::from_nonzero(0), None);
    assert_eq!(-1.5_f64 * Sign::Neg, 1.5);
    assert_eq!(Sign::iter().map(Sign::to_i32).collect::<Vec<_>>(), [1, -1]);
    assert_eq!(Sign::Neg.to_string(), "-");
    assert_eq!(4 * Sign::Neg, -4);
    assert_eq!(Vector3::unit(Axis::Y, Sign::Neg), Vector3::new(0, -1, 0));
}

#[test]
fn test_axis_chars() {
    assert_eq!(Axis::from_char('y'), Some(Axis::Y));
    assert_eq!(Axis::from_char('Z'), Some(Axis::Z));
    assert_eq!(Axis::from_char('w'), None);
    assert_eq!(Axis::X.lowercase_char(), 'x');
}

fn arbitrary_quarter_turn() -> impl Strategy<Value = Matrix3> {
    prop::sample::select(all_quarter_turns())
}

proptest! {
    #[test]
    fn proptest_compositions_stay_rotations(turns in prop::collection::vec(arbitrary_quarter_turn(), 0..64)) {
        let m = turns.into_iter().fold(Matrix3::IDENT, |acc, t| t * acc);
        prop_assert!(m.is_rotation());
    }

    #[test]
    fn proptest_rotation_preserves_lattice(
        turns in prop::collection::vec(arbitrary_quarter_turn(), 1..16),
        x in -1..=1_i32,
        y in -1..=1_i32,
        z in -1..=1_i32,
    ) {
        let v = Vector3::new(x, y, z);
        let rotated = turns.into_iter().fold(v, |acc, t| t * acc);
        prop_assert!(rotated.is_lattice_point());
        prop_assert_eq!(rotated.nonzero_count(), v.nonzero_count());
    }
}
