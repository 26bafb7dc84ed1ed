//! Pedigree command implementation.

use crate::cli::PedigreeArgs;
use crate::error::Result;
use crate::output::Formatter;
use petz_domain::traits::AnimalStore;
use petz_domain::AnimalId;
use petz_lineage::PetService;
use std::fmt::Display;

/// Execute the pedigree command.
pub fn execute_pedigree<S>(
    args: PedigreeArgs,
    service: &PetService<S>,
    formatter: &Formatter,
) -> Result<()>
where
    S: AnimalStore,
    S::Error: Display,
{
    let pedigree = service.get_pedigree(AnimalId::from_value(args.id), args.generations)?;
    println!("{}", formatter.format_pedigree(&pedigree)?);
    eprintln!("{}", formatter.pedigree_summary(&pedigree));
    Ok(())
}
