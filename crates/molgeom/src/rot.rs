//! rotational constants from principal moments of inertia

use crate::{
    consts::{LIGHT_CM, ROT_HZ},
    Vec3,
};

/// compute the rotational constants A ≥ B ≥ C in MHz from the principal
/// moments of inertia in `moms` (amu·bohr², ascending). a vanishing moment
/// (linear or diatomic rotor) gives an infinite constant, which is the
/// physically expected result, not an error
pub fn rot_consts_mhz(moms: &Vec3) -> Vec3 {
    let conv = ROT_HZ * 1e-6;
    Vec3::from_iterator(moms.iter().map(|m| conv / m))
}

/// compute the rotational constants A ≥ B ≥ C in cm⁻¹ from the principal
/// moments of inertia in `moms` (amu·bohr², ascending)
pub fn rot_consts_cm1(moms: &Vec3) -> Vec3 {
    let conv = ROT_HZ / LIGHT_CM;
    Vec3::from_iterator(moms.iter().map(|m| conv / m))
}
