//! static geometric and inertial analysis of a single molecular structure:
//! interatomic distances, bond/out-of-plane/torsional angles, the center of
//! mass, the moment of inertia tensor, principal moments, rotor
//! classification, and rotational constants. input coordinates are in bohr.

pub use atom::*;
use na::SymmetricEigen;
pub use load::LoadError;
pub use rotor::Rotor;
use serde::{Deserialize, Serialize};

#[cfg(test)]
mod tests;

pub mod atom;
pub mod consts;
mod geom;
mod load;
pub mod masses;
mod mol_traits;
pub mod rot;
pub mod rotor;

use nalgebra as na;

pub type Vec3 = na::Vector3<f64>;
pub type Mat3 = na::Matrix3<f64>;

/// tolerance for comparing principal moments of inertia when classifying a
/// rotor
pub const ROTOR_EPS: f64 = 1e-4;

#[macro_export]
macro_rules! molecule {
    ($($num:ident $x:literal $y:literal $z:literal)+) => {
	$crate::Molecule::new(vec![
	    $($crate::Atom::new_from_label(stringify!($num), $x, $y, $z),)*
	    ])
    };
}

#[derive(Clone, Default, Serialize, Deserialize)]
pub struct Molecule {
    pub atoms: Vec<Atom>,
    /// net charge. informational only, no formula in this crate uses it
    #[serde(default)]
    pub charge: i32,
}

fn close(a: f64, b: f64, eps: f64) -> bool {
    f64::abs(a - b) < eps
}

impl Molecule {
    pub fn new(atoms: Vec<Atom>) -> Self {
        Self { atoms, charge: 0 }
    }

    /// build a `Molecule` from a slice of coordinates and a slice of
    /// atomic_numbers
    pub fn from_slices(atomic_numbers: &[usize], coords: &[f64]) -> Self {
        assert_eq!(3 * atomic_numbers.len(), coords.len());
        let mut atoms = Vec::with_capacity(atomic_numbers.len());
        for (i, atom) in coords.chunks(3).enumerate() {
            atoms.push(Atom::new(atomic_numbers[i], atom[0], atom[1], atom[2]));
        }
        Self::new(atoms)
    }

    /// return the atomic numbers of each atom as a vector
    pub fn atomic_numbers(&self) -> Vec<usize> {
        self.atoms.iter().map(|a| a.atomic_number).collect()
    }

    /// return the mass of each atom in amu, assuming the most abundant
    /// isotope unless an atom carries an explicit weight
    pub fn weights(&self) -> Vec<f64> {
        self.atoms.iter().map(Atom::weight).collect()
    }

    /// convert the coordinates in `self` from Angstroms to Bohr
    pub fn to_bohr(&mut self) {
        for atom in self.atoms.iter_mut() {
            atom.x /= consts::BOHR;
            atom.y /= consts::BOHR;
            atom.z /= consts::BOHR;
        }
    }

    /// convert the coordinates in `self` from Bohr to Angstroms
    pub fn to_angstrom(&mut self) {
        for atom in self.atoms.iter_mut() {
            atom.x *= consts::BOHR;
            atom.y *= consts::BOHR;
            atom.z *= consts::BOHR;
        }
    }

    /// compute the center of mass of `self`, assuming the most abundant
    /// isotope masses
    pub fn com(&self) -> Vec3 {
        let mut sum = 0.0;
        let mut com = Vec3::zeros();
        for atom in &self.atoms {
            let w = atom.weight();
            sum += w;
            com += w * atom.coord();
        }
        com / sum
    }

    /// compute the moment of inertia tensor in amu·bohr². the tensor is only
    /// physically meaningful if `self` has already been translated to its
    /// center of mass
    pub fn moi(&self) -> Mat3 {
        let mut ret = Mat3::zeros();
        for atom in &self.atoms {
            let Atom { x, y, z, .. } = atom;
            let w = atom.weight();
            // diagonal
            ret[(0, 0)] += w * (y * y + z * z);
            ret[(1, 1)] += w * (x * x + z * z);
            ret[(2, 2)] += w * (x * x + y * y);
            // lower triangle
            ret[(1, 0)] -= w * x * y;
            ret[(2, 0)] -= w * x * z;
            ret[(2, 1)] -= w * y * z;
        }
        // mirror so the returned matrix is exactly symmetric
        ret[(0, 1)] = ret[(1, 0)];
        ret[(0, 2)] = ret[(2, 0)];
        ret[(1, 2)] = ret[(2, 1)];
        ret
    }

    /// eigenfactorize the moment of inertia tensor and return the principal
    /// moments of inertia in ascending order
    pub fn principal_moments(&self) -> Vec3 {
        let (moms, _) = symm_eigen_decomp3(self.moi());
        moms
    }

    /// eigenfactorize the moment of inertia tensor and return the principal
    /// axes as a 3x3 matrix, with columns ordered by ascending eigenvalue
    pub fn principal_axes(&self) -> Mat3 {
        let (_, axes) = symm_eigen_decomp3(self.moi());
        axes
    }

    /// compute the type of molecular rotor based on the moments of inertia
    /// in `moms` to the tolerance in `eps`. These tests are taken from the
    /// [Crawford Programming
    /// Projects](https://github.com/CrawfordGroup/ProgrammingProjects/blob/master/Project%2301/hints/step7-solution.md)
    pub fn rotor_type(&self, moms: &Vec3, eps: f64) -> Rotor {
        if self.atoms.len() == 2 {
            return Rotor::Diatomic;
        }
        if moms[0] < eps {
            Rotor::Linear
        } else if close(moms[0], moms[1], eps) && close(moms[1], moms[2], eps) {
            Rotor::SphericalTop
        } else if close(moms[0], moms[1], eps) && !close(moms[1], moms[2], eps)
        {
            Rotor::OblateSymmTop
        } else if !close(moms[0], moms[1], eps) && close(moms[1], moms[2], eps)
        {
            Rotor::ProlateSymmTop
        } else {
            Rotor::AsymmTop
        }
    }

    /// translate each of the atoms in `self` by vec
    pub fn translate(&mut self, vec: Vec3) -> &mut Self {
        for atom in self.atoms.iter_mut() {
            *atom += vec;
        }
        self
    }

    /// translate `self` to its center of mass and return the translation
    /// that was applied
    pub fn translate_to_com(&mut self) -> Vec3 {
        let com = self.com();
        self.translate(-com);
        -com
    }

    /// apply the transformation matrix `mat` to the atoms in `self` and
    /// return the new Molecule
    pub fn transform(&self, mat: Mat3) -> Self {
        let mut ret = Vec::with_capacity(self.atoms.len());
        for a @ Atom { x, y, z, .. } in self.atoms.iter() {
            let v = mat * na::vector![*x, *y, *z];
            ret.push(Atom {
                x: v[0],
                y: v[1],
                z: v[2],
                ..*a
            });
        }
        Self {
            atoms: ret,
            charge: self.charge,
        }
    }

    /// rotate `self` by `deg` degrees about the cartesian axis `axis`
    /// (0 = x, 1 = y, 2 = z)
    pub fn rotate(&self, deg: f64, axis: usize) -> Self {
        let deg = deg.to_radians();
        let ct = deg.cos();
        let st = deg.sin();
        // from
        // https://en.wikipedia.org/wiki/Rotation_matrix#In_three_dimensions
        let rot_mat = match axis {
            0 => na::matrix![
                1., 0., 0.;
                0., ct, -st;
                0., st, ct;
            ],
            1 => na::matrix![
                ct, 0., st;
                0., 1., 0.;
                -st, 0., ct;
            ],
            2 => na::matrix![
                ct, -st, 0.;
                st, ct, 0.;
                0., 0., 1.;
            ],
            _ => panic!("unrecognized axis {axis}"),
        };
        self.transform(rot_mat)
    }
}

/// return the eigendecomposition of `mat`, with the eigenvalues and
/// corresponding eigenvectors in ascending order.
pub fn symm_eigen_decomp3(mat: Mat3) -> (Vec3, Mat3) {
    let SymmetricEigen {
        eigenvectors: vecs,
        eigenvalues: vals,
    } = SymmetricEigen::new(mat);
    let mut pairs: Vec<_> = vals.iter().enumerate().collect();
    pairs.sort_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap());
    let (_, cols) = vecs.shape();
    let mut ret = Mat3::zeros();
    (0..cols).for_each(|i| {
        ret.set_column(i, &vecs.column(pairs[i].0));
    });
    (Vec3::from_iterator(pairs.iter().map(|a| *a.1)), ret)
}
