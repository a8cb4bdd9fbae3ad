//! rotor classification and rotational constants

use approx::assert_abs_diff_eq;
use test_case::test_case;

use crate::{
    rot::{rot_consts_cm1, rot_consts_mhz},
    Molecule, Rotor, ROTOR_EPS,
};

const WATER: &str = "3
8 0.000000000000 0.000000000000 -0.143225816552
1 0.000000000000 1.638036840407 1.136548822547
1 0.000000000000 -1.638036840407 1.136548822547
";

const HCL: &str = "2
1 0.0 0.0 0.0
17 0.0 0.0 2.4086
";

const CO2: &str = "3
8 0.0 0.0 -2.19208
6 0.0 0.0 0.0
8 0.0 0.0 2.19208
";

const CH4: &str = "5
6 0.0 0.0 0.0
1 1.18367 1.18367 1.18367
1 1.18367 -1.18367 -1.18367
1 -1.18367 1.18367 -1.18367
1 -1.18367 -1.18367 1.18367
";

const BF3: &str = "4
5 0.0 0.0 0.0
9 2.5 0.0 0.0
9 -1.25 2.1650635094610966 0.0
9 -1.25 -2.1650635094610966 0.0
";

/// a fluorine ring with two chlorines on the ring axis, elongated enough
/// that the unique moment is the smallest
const RING_AXIAL: &str = "5
9 2.0 0.0 0.0
9 -1.0 1.7320508075688772 0.0
9 -1.0 -1.7320508075688772 0.0
17 0.0 0.0 3.0
17 0.0 0.0 -3.0
";

#[test_case(HCL, Rotor::Diatomic ; "diatomic")]
#[test_case(CO2, Rotor::Linear ; "linear")]
#[test_case(CH4, Rotor::SphericalTop ; "spherical top")]
#[test_case(BF3, Rotor::OblateSymmTop ; "oblate top")]
#[test_case(RING_AXIAL, Rotor::ProlateSymmTop ; "prolate top")]
#[test_case(WATER, Rotor::AsymmTop ; "asymmetric top")]
fn classify(geom: &str, want: Rotor) {
    let mut mol = Molecule::from_geom(geom).unwrap();
    mol.translate_to_com();
    let moms = mol.principal_moments();
    assert_eq!(mol.rotor_type(&moms, ROTOR_EPS), want);
}

#[test]
fn linear_smallest_moment() {
    let mut mol = Molecule::from_geom(CO2).unwrap();
    mol.translate_to_com();
    let moms = mol.principal_moments();
    assert!(moms[0].abs() < 1e-4);
}

/// CO at its equilibrium bond length of 2.13221 bohr. B_e is 57898 MHz or
/// 1.93128 cm⁻¹
#[test]
fn co_rotational_constants() {
    let mut mol = Molecule::from_geom(
        "2
6 0.0 0.0 0.0
8 0.0 0.0 2.13221
",
    )
    .unwrap();
    mol.translate_to_com();
    let moms = mol.principal_moments();

    let mhz = rot_consts_mhz(&moms);
    assert!((mhz[1] - 57898.0).abs() / 57898.0 < 1e-2);
    assert_abs_diff_eq!(mhz[1], mhz[2], epsilon = 1e-6);
    // the vanishing moment along the bond axis blows up, as it should for a
    // diatomic
    assert!(mhz[0].abs() > 1e10 || mhz[0].is_infinite());

    let cm = rot_consts_cm1(&moms);
    assert!((cm[1] - 1.93128).abs() / 1.93128 < 1e-2);
}

/// the end-to-end scenario: water built from 0.96 Å bonds at 104.5°,
/// converted to bohr
#[test]
fn water_end_to_end() {
    let r = 0.96;
    let half = (104.5_f64 / 2.0).to_radians();
    let atomic_numbers = [8, 1, 1];
    let coords = [
        0.0,
        0.0,
        0.0,
        r * half.sin(),
        0.0,
        r * half.cos(),
        -r * half.sin(),
        0.0,
        r * half.cos(),
    ];
    let mut mol = Molecule::from_slices(&atomic_numbers, &coords);
    mol.to_bohr();

    assert_abs_diff_eq!(mol.bond(0, 1), mol.bond(0, 2), epsilon = 1e-10);
    let angle = mol.angle(1, 0, 2).to_degrees();
    assert!((angle - 104.5).abs() < 0.5);

    mol.translate_to_com();
    let moms = mol.principal_moments();
    assert_eq!(mol.rotor_type(&moms, ROTOR_EPS), Rotor::AsymmTop);

    // A ≥ B ≥ C
    let mhz = rot_consts_mhz(&moms);
    assert!(mhz[0] >= mhz[1] && mhz[1] >= mhz[2]);
    assert!(mhz.iter().all(|r| r.is_finite() && *r > 0.0));
}
