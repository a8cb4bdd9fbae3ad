//! principal-isotope atomic masses in amu, indexed by atomic number. index 0
//! is a placeholder so that `MASSES[z]` works directly.

pub static MASSES: [f64; 37] = [
    0.0,
    1.00782503207,
    4.002603254,
    7.016004548,
    9.012182201,
    11.009305406,
    12.0,
    14.0030740048,
    15.9949146196,
    18.998403224,
    19.99244017542,
    22.98976928087,
    23.985041699,
    26.981538627,
    27.97692653246,
    30.97376163,
    31.972070999,
    34.96885268,
    39.9623831225,
    38.963706679,
    39.962590983,
    44.955911909,
    47.947946281,
    50.943959507,
    51.940507472,
    54.938045141,
    55.934937475,
    58.933195048,
    57.935342907,
    62.929597474,
    63.929142222,
    68.925573587,
    73.921177767,
    74.921596478,
    79.916521271,
    78.918337087,
    83.911506876,
];

/// look up the mass of `atomic_number`, returning None if it falls outside
/// the table. the mass table is a fixed set of physical constants, so a miss
/// here is a configuration error, not something to recover from.
pub fn mass(atomic_number: usize) -> Option<f64> {
    if atomic_number == 0 || atomic_number >= MASSES.len() {
        return None;
    }
    Some(MASSES[atomic_number])
}
