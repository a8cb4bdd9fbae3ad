//! the analysis report: distances, angles, the center of mass, and the
//! inertial analysis. all of the enumeration loops over atom tuples live
//! here; the formulas live in the molgeom library.

use std::io::{self, Write};

use molgeom::{
    consts::{MOI_AMU_ANG, MOI_G_CM},
    rot::{rot_consts_cm1, rot_consts_mhz},
    symm_eigen_decomp3, Molecule, ROTOR_EPS,
};

/// two atoms count as bonded for the angle reports if they lie within this
/// distance in bohr
const BOND_CUTOFF: f64 = 4.0;

pub fn write_report(w: &mut impl Write, mol: &mut Molecule) -> io::Result<()> {
    let n = mol.atoms.len();
    writeln!(w, "Number of atoms: {n}")?;
    writeln!(w, "Input Cartesian coordinates (bohr):")?;
    write!(w, "{mol:14.8}")?;

    writeln!(w, "\nInteratomic distances (bohr):")?;
    for i in 0..n {
        for j in 0..i {
            writeln!(w, "{i:2} {j:2} {:8.5}", mol.bond(i, j))?;
        }
    }

    writeln!(w, "\nBond angles (deg):")?;
    for i in 0..n {
        for j in 0..i {
            for k in 0..j {
                if mol.bond(i, j) < BOND_CUTOFF && mol.bond(j, k) < BOND_CUTOFF
                {
                    writeln!(
                        w,
                        "{i:2}-{j:2}-{k:2} {:10.6}",
                        mol.angle(i, j, k).to_degrees()
                    )?;
                }
            }
        }
    }

    writeln!(w, "\nOut-of-plane angles (deg):")?;
    for i in 0..n {
        for k in 0..n {
            for j in 0..n {
                for l in 0..j {
                    let distinct =
                        i != j && i != k && i != l && j != k && k != l;
                    if distinct
                        && mol.bond(i, k) < BOND_CUTOFF
                        && mol.bond(k, j) < BOND_CUTOFF
                        && mol.bond(k, l) < BOND_CUTOFF
                    {
                        writeln!(
                            w,
                            "{i:2}-{j:2}-{k:2}-{l:2} {:10.6}",
                            mol.oop(i, j, k, l).to_degrees()
                        )?;
                    }
                }
            }
        }
    }

    writeln!(w, "\nTorsional angles (deg):")?;
    for i in 0..n {
        for j in 0..i {
            for k in 0..j {
                for l in 0..k {
                    if mol.bond(i, j) < BOND_CUTOFF
                        && mol.bond(j, k) < BOND_CUTOFF
                        && mol.bond(k, l) < BOND_CUTOFF
                    {
                        writeln!(
                            w,
                            "{i:2}-{j:2}-{k:2}-{l:2} {:10.6}",
                            mol.torsion(i, j, k, l).to_degrees()
                        )?;
                    }
                }
            }
        }
    }

    let com = mol.com();
    writeln!(
        w,
        "\nMolecular center of mass (bohr): {:12.8} {:12.8} {:12.8}",
        com[0], com[1], com[2]
    )?;
    mol.translate(-com);

    let moi = mol.moi();
    writeln!(w, "\nMoment of inertia tensor (amu bohr^2):")?;
    write!(w, "{moi:14.8}")?;

    let (moms, _axes) = symm_eigen_decomp3(moi);
    writeln!(w, "\nPrincipal moments of inertia (amu bohr^2):")?;
    writeln!(w, "{:14.8} {:14.8} {:14.8}", moms[0], moms[1], moms[2])?;
    writeln!(w, "\nPrincipal moments of inertia (amu AA^2):")?;
    writeln!(
        w,
        "{:14.8} {:14.8} {:14.8}",
        moms[0] * MOI_AMU_ANG,
        moms[1] * MOI_AMU_ANG,
        moms[2] * MOI_AMU_ANG
    )?;
    writeln!(w, "\nPrincipal moments of inertia (g cm^2):")?;
    writeln!(
        w,
        "{:14.8e} {:14.8e} {:14.8e}",
        moms[0] * MOI_G_CM,
        moms[1] * MOI_G_CM,
        moms[2] * MOI_G_CM
    )?;

    let rotor = mol.rotor_type(&moms, ROTOR_EPS);
    writeln!(w, "\nRotor type: {rotor}")?;

    let mhz = rot_consts_mhz(&moms);
    writeln!(w, "\nRotational constants (MHz):")?;
    writeln!(
        w,
        "\tA = {:12.4}\t B = {:12.4}\t C = {:12.4}",
        mhz[0], mhz[1], mhz[2]
    )?;

    let cm = rot_consts_cm1(&moms);
    writeln!(w, "\nRotational constants (cm-1):")?;
    writeln!(
        w,
        "\tA = {:12.4}\t B = {:12.4}\t C = {:12.4}",
        cm[0], cm[1], cm[2]
    )?;

    Ok(())
}
