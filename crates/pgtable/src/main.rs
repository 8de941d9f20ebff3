use std::{error::Error, process::ExitCode};

use clap::Parser;
use pgtable::Args;
use symm::Registry;

fn main() -> Result<ExitCode, Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();
    let registry = Registry::standard()?;
    let mut stdout = std::io::stdout().lock();
    let status = pgtable::run(&mut stdout, &registry, &args)?;
    Ok(status.into())
}
