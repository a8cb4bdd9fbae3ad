//! tests for the metric functions: bond distances and bond, out-of-plane,
//! and torsional angles

use std::f64::consts::PI;

use approx::assert_abs_diff_eq;

use crate::{molecule, Molecule};

/// water in bohr
fn water() -> Molecule {
    Molecule::from_geom(
        "3
8 0.000000000000 0.000000000000 -0.143225816552
1 0.000000000000 1.638036840407 1.136548822547
1 0.000000000000 -1.638036840407 1.136548822547
",
    )
    .unwrap()
}

/// a bent, non-planar 4-atom arrangement for the oop and torsion tests
fn bent() -> Molecule {
    molecule![
        N 0.0 1.0 0.0
        C 0.0 0.0 0.0
        C 1.0 0.0 0.0
        O 1.0 0.0 1.0
    ]
}

#[test]
fn bond() {
    let mol = molecule![
        H 0.0 0.0 0.0
        H 0.0 3.0 4.0
    ];
    assert_eq!(mol.bond(0, 1), 5.0);

    let mol = water();
    for a in 0..3 {
        assert_eq!(mol.bond(a, a), 0.0);
        for b in 0..3 {
            assert_eq!(mol.bond(a, b), mol.bond(b, a));
        }
    }
    assert_abs_diff_eq!(mol.bond(0, 1), mol.bond(0, 2), epsilon = 1e-12);
}

#[test]
fn unit_norm() {
    let mol = water();
    for a in 0..3 {
        for b in 0..3 {
            if a != b {
                assert_abs_diff_eq!(
                    mol.unit(a, b).norm(),
                    1.0,
                    epsilon = 1e-12
                );
            }
        }
    }
}

#[test]
fn angle() {
    let mol = molecule![
        H 1.0 0.0 0.0
        O 0.0 0.0 0.0
        H 0.0 1.0 0.0
    ];
    assert_abs_diff_eq!(mol.angle(0, 1, 2), PI / 2.0, epsilon = 1e-12);

    // symmetric in the outer atoms
    let mol = water();
    assert_abs_diff_eq!(
        mol.angle(1, 0, 2),
        mol.angle(2, 0, 1),
        epsilon = 1e-12
    );
}

#[test]
fn angle_collinear() {
    // the dot product evaluates to exactly ±1 here; the clamp keeps acos in
    // its domain even when rounding pushes it past
    let mol = molecule![
        O 0.0 0.0 1.0
        C 0.0 0.0 0.0
        O 0.0 0.0 -1.0
    ];
    let got = mol.angle(0, 1, 2);
    assert!(got.is_finite());
    assert_abs_diff_eq!(got, PI, epsilon = 1e-12);
}

#[test]
fn oop() {
    // a sits along +z off the plane of b, c, d
    let mol = molecule![
        H 0.0 0.0 1.0
        O 1.0 0.0 0.0
        C 0.0 0.0 0.0
        N 0.0 1.0 0.0
    ];
    let got = mol.oop(0, 1, 2, 3);
    assert_abs_diff_eq!(got, PI / 2.0, epsilon = 1e-12);
    // swapping b and d flips the orientation of the plane normal
    assert_abs_diff_eq!(got, -mol.oop(0, 3, 2, 1), epsilon = 1e-12);
}

#[test]
fn torsion() {
    let mol = bent();
    let got = mol.torsion(0, 1, 2, 3);
    assert_abs_diff_eq!(got, PI / 2.0, epsilon = 1e-12);
    // reversing the atom order flips the sign
    assert_abs_diff_eq!(got, -mol.torsion(3, 2, 1, 0), epsilon = 1e-12);
}

#[test]
fn torsion_planar() {
    // trans arrangement. the sign cross product vanishes here, and the NaN
    // it produces must fall through to a positive sign, not a panic
    let mol = molecule![
        N 0.0 1.0 0.0
        C 0.0 0.0 0.0
        C 1.0 0.0 0.0
        O 1.0 -1.0 0.0
    ];
    assert_abs_diff_eq!(mol.torsion(0, 1, 2, 3), PI, epsilon = 1e-12);
}

#[test]
fn translation_invariance() {
    let shift = crate::Vec3::new(1.7, -2.3, 0.9);

    let mut mol = water();
    let (bond, angle) = (mol.bond(0, 1), mol.angle(1, 0, 2));
    mol.translate(shift);
    assert_abs_diff_eq!(mol.bond(0, 1), bond, epsilon = 1e-8);
    assert_abs_diff_eq!(mol.angle(1, 0, 2), angle, epsilon = 1e-8);

    let mut mol = bent();
    let (oop, torsion) = (mol.oop(3, 0, 2, 1), mol.torsion(0, 1, 2, 3));
    mol.translate(shift);
    assert_abs_diff_eq!(mol.oop(3, 0, 2, 1), oop, epsilon = 1e-8);
    assert_abs_diff_eq!(mol.torsion(0, 1, 2, 3), torsion, epsilon = 1e-8);
}
