//! Profile command implementation.

use crate::cli::ProfileArgs;
use crate::error::Result;
use crate::output::Formatter;
use petz_domain::traits::AnimalStore;
use petz_domain::AnimalId;
use petz_lineage::PetService;
use std::fmt::Display;

/// Execute the profile command.
pub fn execute_profile<S>(
    args: ProfileArgs,
    service: &PetService<S>,
    formatter: &Formatter,
) -> Result<()>
where
    S: AnimalStore,
    S::Error: Display,
{
    let profile = service.get_pet_profile(AnimalId::from_value(args.id))?;
    println!("{}", formatter.format_profile(&profile)?);
    Ok(())
}
