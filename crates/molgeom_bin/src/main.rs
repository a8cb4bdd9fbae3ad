use std::io;

use anyhow::Context;
use clap::Parser;
use molgeom::Molecule;

mod report;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// geometry file: the atom count on the first line, followed by one
    /// `atomic_number x y z` record per atom with the coordinates in bohr
    #[arg(value_parser, default_value = "geom.dat")]
    infile: String,

    /// net molecular charge
    #[arg(short, long, value_parser, default_value_t = 0)]
    charge: i32,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let mut mol = Molecule::load(&args.infile)
        .with_context(|| format!("failed to load {}", args.infile))?;
    mol.charge = args.charge;
    log::info!("loaded {} atoms from {}", mol.atoms.len(), args.infile);
    report::write_report(&mut io::stdout().lock(), &mut mol)?;
    Ok(())
}
