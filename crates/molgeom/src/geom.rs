//! geometric measurements on a [Molecule]: bond distances and bond,
//! out-of-plane, and torsional angles. every angular formula here is built
//! from the unit-vector primitive in [Molecule::unit].

use crate::{Molecule, Vec3};

impl Molecule {
    /// Euclidean distance between atoms `a` and `b`, in the same units as
    /// the coordinates. zero iff the two positions coincide, including a == b
    pub fn bond(&self, a: usize, b: usize) -> f64 {
        (self.atoms[a].coord() - self.atoms[b].coord()).norm()
    }

    /// unit vector along the displacement between atoms `a` and `b`,
    /// `-(r_a - r_b) / bond(a, b)`. a must differ from b, otherwise the
    /// division by bond(a, a) = 0 yields NaN components
    pub fn unit(&self, a: usize, b: usize) -> Vec3 {
        -(self.atoms[a].coord() - self.atoms[b].coord()) / self.bond(a, b)
    }

    /// angle at vertex `b` subtended by atoms `a` and `c`, in radians. the
    /// dot product is clamped to [-1, 1] before the inverse cosine so that
    /// floating-point error near collinearity cannot leave the acos domain
    pub fn angle(&self, a: usize, b: usize, c: usize) -> f64 {
        self.unit(b, a).dot(&self.unit(b, c)).clamp(-1.0, 1.0).acos()
    }

    /// out-of-plane angle of the bond c-a against the plane through atoms
    /// b, c, and d, in radians. the sign follows the orientation of the
    /// (b, c, d) cross product, so swapping b and d flips it
    pub fn oop(&self, a: usize, b: usize, c: usize, d: usize) -> f64 {
        let ebcd = self.unit(c, b).cross(&self.unit(c, d));
        let theta = ebcd.dot(&self.unit(c, a)) / self.angle(b, c, d).sin();
        theta.clamp(-1.0, 1.0).asin()
    }

    /// torsional angle between the planes (a, b, c) and (b, c, d), in
    /// radians. the magnitude comes from the normals of the two planes and
    /// the sign from their cross product against the central bond, so
    /// reversing the atom order flips the sign
    pub fn torsion(&self, a: usize, b: usize, c: usize, d: usize) -> f64 {
        let eabc = self.unit(b, a).cross(&self.unit(b, c));
        let ebcd = self.unit(c, b).cross(&self.unit(c, d));

        let tau = eabc.dot(&ebcd)
            / (self.angle(a, b, c).sin() * self.angle(b, c, d).sin());
        let tau = tau.clamp(-1.0, 1.0).acos();

        let cross = eabc.cross(&ebcd);
        let cross = cross / cross.norm();
        let sign = if cross.dot(&self.unit(b, c)) < 0.0 {
            -1.0
        } else {
            1.0
        };

        tau * sign
    }
}
