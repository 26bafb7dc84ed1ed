//! Pet profile assembly

use crate::ancestors::fetch_ancestors;
use crate::error::LineageError;
use petz_domain::traits::AnimalStore;
use petz_domain::{build_pedigree, compute_siblings, AnimalId, Pedigree, PetProfile, ProfileSource};
use std::fmt::Display;

/// Fetch ancestors of `id` and lay them out as a pedigree
///
/// Only existence is checked; the root's status is not consulted.
pub fn resolve_pedigree<S>(
    store: &S,
    id: AnimalId,
    generations: u32,
) -> Result<Pedigree, LineageError>
where
    S: AnimalStore,
    S::Error: Display,
{
    let ancestors = fetch_ancestors(store, id, generations)?;
    build_pedigree(id, generations as usize, &ancestors).ok_or(LineageError::NotFound(id))
}

/// Build the profile of `id` with a pedigree `generations` deep
///
/// Fails with [`LineageError::NotFound`] for absent animals and for
/// animals still pending registration.
pub fn assemble_profile<S>(
    store: &S,
    id: AnimalId,
    generations: u32,
) -> Result<PetProfile, LineageError>
where
    S: AnimalStore,
    S::Error: Display,
{
    let source = store
        .get_profile_source(id)
        .map_err(|e| LineageError::Store(e.to_string()))?
        .filter(|source| source.animal.is_visible())
        .ok_or(LineageError::NotFound(id))?;

    let pedigree = resolve_pedigree(store, id, generations)?;

    Ok(compose(source, pedigree))
}

fn compose(source: ProfileSource, pedigree: Pedigree) -> PetProfile {
    let siblings = compute_siblings(
        source.animal.id,
        &source.dam_offspring,
        &source.sire_offspring,
    );
    let animal = source.animal;

    PetProfile {
        id: animal.id,
        show_name: animal.show_name,
        affix_id: animal.affix_id,
        affix_name: source.affix_name,
        pedigree_number: animal.pedigree_number,
        registration_date: animal.registration_date,
        age: animal.age,
        sex: animal.sex,
        game_version: animal.game_version,
        breed_id: animal.breed_id,
        breed_name: source.breed_name,
        owner_id: animal.owner_id,
        owner_name: source.owner_name,
        breeder_id: animal.breeder_id,
        breeder_name: source.breeder_name,
        offspring: source.offspring,
        siblings,
        pedigree,
    }
}
