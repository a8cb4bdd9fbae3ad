use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// the type of molecular rotor, as determined by the pattern of equalities
/// among the principal moments of inertia
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rotor {
    Diatomic,
    Linear,
    SphericalTop,
    OblateSymmTop,
    ProlateSymmTop,
    AsymmTop,
}

impl Rotor {
    /// Report whether or not `self` is either an `OblateSymmTop` or a
    /// `ProlateSymmTop`
    pub fn is_sym_top(&self) -> bool {
        matches!(self, Self::OblateSymmTop | Self::ProlateSymmTop)
    }

    /// Returns `true` if the rotor is [`Linear`] or [`Diatomic`].
    ///
    /// [`Linear`]: Rotor::Linear
    /// [`Diatomic`]: Rotor::Diatomic
    #[must_use]
    pub fn is_linear(&self) -> bool {
        matches!(self, Self::Linear | Self::Diatomic)
    }

    /// Returns `true` if the rotor is [`Diatomic`].
    ///
    /// [`Diatomic`]: Rotor::Diatomic
    #[must_use]
    pub fn is_diatomic(&self) -> bool {
        matches!(self, Self::Diatomic)
    }

    /// Returns `true` if the rotor is [`SphericalTop`].
    ///
    /// [`SphericalTop`]: Rotor::SphericalTop
    #[must_use]
    pub fn is_spherical_top(&self) -> bool {
        matches!(self, Self::SphericalTop)
    }

    /// Returns `true` if the rotor is [`AsymmTop`].
    ///
    /// [`AsymmTop`]: Rotor::AsymmTop
    #[must_use]
    pub fn is_asymm_top(&self) -> bool {
        matches!(self, Self::AsymmTop)
    }
}

impl Display for Rotor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Rotor::Diatomic => "diatomic",
                Rotor::Linear => "linear",
                Rotor::SphericalTop => "spherical top",
                Rotor::OblateSymmTop => "oblate symmetric top",
                Rotor::ProlateSymmTop => "prolate symmetric top",
                Rotor::AsymmTop => "asymmetric top",
            }
        )
    }
}
