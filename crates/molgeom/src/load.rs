//! load a [Molecule] from the plain-text geometry format: the number of
//! atoms on the first line, followed by one `atomic_number x y z` record per
//! atom with the coordinates in bohr.

use std::{error::Error, fmt::Display, io, path::Path};

use crate::{masses::mass, Atom, Molecule};

#[derive(Debug)]
pub enum LoadError {
    Io(io::Error),
    /// the atom count or one of the atom records failed to parse
    Malformed(String),
    /// an atomic number with no entry in the mass table. fatal, since every
    /// COM and inertia computation needs the mass
    UnknownElement(usize),
}

impl Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::Io(e) => write!(f, "{e}"),
            LoadError::Malformed(msg) => write!(f, "malformed input: {msg}"),
            LoadError::UnknownElement(z) => {
                write!(f, "no mass table entry for atomic number {z}")
            }
        }
    }
}

impl Error for LoadError {}

impl From<io::Error> for LoadError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl Molecule {
    /// parse a geometry like
    ///
    /// ```text
    /// 3
    /// 8 0.000000000000 0.000000000000 -0.143225816552
    /// 1 0.000000000000 1.638036840407 1.136548822547
    /// 1 0.000000000000 -1.638036840407 1.136548822547
    /// ```
    ///
    /// with the coordinates in bohr
    pub fn from_geom(s: &str) -> Result<Self, LoadError> {
        let mut toks = s.split_whitespace();
        let natom: usize = toks
            .next()
            .ok_or_else(|| LoadError::Malformed("empty input".to_string()))?
            .parse()
            .map_err(|e| LoadError::Malformed(format!("atom count: {e}")))?;
        if natom == 0 {
            return Err(LoadError::Malformed("zero atoms".to_string()));
        }
        let mut atoms = Vec::with_capacity(natom);
        for i in 0..natom {
            let mut field = |what: &str| {
                toks.next().ok_or_else(|| {
                    LoadError::Malformed(format!(
                        "missing {what} in record {i}"
                    ))
                })
            };
            let z: usize = field("atomic number")?.parse().map_err(|e| {
                LoadError::Malformed(format!("atomic number in record {i}: {e}"))
            })?;
            mass(z).ok_or(LoadError::UnknownElement(z))?;
            let mut coord = [0.0; 3];
            for (axis, c) in coord.iter_mut().enumerate() {
                *c = field("coordinate")?.parse().map_err(|e| {
                    LoadError::Malformed(format!(
                        "coordinate {axis} in record {i}: {e}"
                    ))
                })?;
            }
            atoms.push(Atom::new(z, coord[0], coord[1], coord[2]));
        }
        log::debug!("read {natom} atoms");
        Ok(Self::new(atoms))
    }

    /// read the geometry format of [Molecule::from_geom] from the file at
    /// `path`
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let s = std::fs::read_to_string(path)?;
        Self::from_geom(&s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WATER: &str = "3
8 0.000000000000 0.000000000000 -0.143225816552
1 0.000000000000 1.638036840407 1.136548822547
1 0.000000000000 -1.638036840407 1.136548822547
";

    #[test]
    fn from_geom() {
        let mol = Molecule::from_geom(WATER).unwrap();
        assert_eq!(mol.atoms.len(), 3);
        assert_eq!(mol.atomic_numbers(), vec![8, 1, 1]);
        assert_eq!(mol.atoms[1].y, 1.638036840407);
    }

    #[test]
    fn malformed_count() {
        let got = Molecule::from_geom("three\n8 0.0 0.0 0.0\n");
        assert!(matches!(got, Err(LoadError::Malformed(_))));
    }

    #[test]
    fn truncated_record() {
        let got = Molecule::from_geom("2\n8 0.0 0.0 0.0\n1 0.0 0.0\n");
        assert!(matches!(got, Err(LoadError::Malformed(_))));
    }

    #[test]
    fn unknown_element() {
        let got = Molecule::from_geom("1\n99 0.0 0.0 0.0\n");
        assert!(matches!(got, Err(LoadError::UnknownElement(99))));
    }
}
