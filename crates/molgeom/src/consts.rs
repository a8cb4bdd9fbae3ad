use std::f64::consts::PI;

/// Å per bohr
pub const BOHR: f64 = 0.529177249;

/// one amu in g
pub const AMU_TO_G: f64 = 1.6605402e-24;

/// one amu in kg
pub const AMU_TO_KG: f64 = 1.6605402e-27;

/// one bohr in cm
pub const BOHR_CM: f64 = 0.529177249e-8;

/// one bohr in m
pub const BOHR_M: f64 = 0.529177249e-10;

/// planck's constant in J·s
pub const PLANCK: f64 = 6.6260755e-34;

/// speed of light in cm/s
pub const LIGHT_CM: f64 = 2.99792458e10;

/// amu·bohr² → amu·Å²
pub const MOI_AMU_ANG: f64 = BOHR * BOHR;

/// amu·bohr² → g·cm²
pub const MOI_G_CM: f64 = AMU_TO_G * BOHR_CM * BOHR_CM;

/// h/(8π²) divided by one amu·bohr², in Hz. dividing this by a principal
/// moment in amu·bohr² gives the corresponding rotational constant
pub(crate) const ROT_HZ: f64 =
    PLANCK / (8.0 * PI * PI) / (AMU_TO_KG * BOHR_M * BOHR_M);
