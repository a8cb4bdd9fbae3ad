use crate::{Atom, Molecule, NUMBER_TO_SYMBOL};
use approx::AbsDiffEq;
use std::{fmt::Display, io, str::FromStr};

impl std::fmt::Debug for Molecule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self}")
    }
}

/// A Molecule is AbsDiffEq if each of its Atoms is
impl AbsDiffEq for Molecule {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        1e-8
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        if self.atoms.len() != other.atoms.len() {
            return false;
        }
        let mut theirs = other.atoms.clone();
        for atom in &self.atoms {
            let Some(i) = theirs
                .iter()
                .position(|btom| atom.abs_diff_eq(btom, epsilon))
            else {
                return false;
            };
            // remove the match so it can't be double-counted
            theirs.remove(i);
        }
        true
    }
}

impl PartialEq for Molecule {
    /// compare molecules for equality, irrespective of atom order
    fn eq(&self, other: &Self) -> bool {
        self.abs_diff_eq(other, 1e-8)
    }
}

impl FromStr for Molecule {
    type Err = io::Error;

    /// parse lines like
    ///      O           0.000000000    0.000000000   -0.124238453
    ///      H           0.000000000    1.431390207    0.986041184
    ///      H           0.000000000   -1.431390207    0.986041184
    /// into a molecule. lines without exactly four fields are skipped
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut ret = Self::default();
        for line in s.lines() {
            if line.split_whitespace().count() == 4 {
                ret.atoms.push(Atom::from_str(line)?);
            }
        }
        Ok(ret)
    }
}

impl Display for Molecule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let precision = f.precision().unwrap_or(8);
        let width = f.width().unwrap_or(precision + 4);
        writeln!(f)?;
        for atom in &self.atoms {
            writeln!(
                f,
                "{:5}{:w$.p$}{:w$.p$}{:w$.p$}",
                NUMBER_TO_SYMBOL[atom.atomic_number],
                atom.x,
                atom.y,
                atom.z,
                w = width,
                p = precision,
            )?;
        }
        Ok(())
    }
}
