//! Profile module - the consolidated read view of one animal

use crate::animal::{AnimalId, AnimalRecord, GameVersion, Sex};
use crate::pedigree::Pedigree;
use crate::sibling::Sibling;

/// Minimal reference to another animal (offspring, siblings)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PetLink {
    /// Animal identifier
    pub id: AnimalId,

    /// Full show name
    pub show_name: String,

    /// Sex
    pub sex: Sex,
}

impl From<&AnimalRecord> for PetLink {
    fn from(animal: &AnimalRecord) -> Self {
        Self {
            id: animal.id,
            show_name: animal.show_name.clone(),
            sex: animal.sex,
        }
    }
}

/// Everything the profile assembler needs from the entity lookup
///
/// Fetched eagerly in one request to the persistence collaborator.
/// Display names are denormalized by the store; `None` means the
/// referenced row is absent (or the reference itself is unset).
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileSource {
    /// The animal itself
    pub animal: AnimalRecord,

    /// Affix (kennel) name
    pub affix_name: Option<String>,

    /// Breed name
    pub breed_name: Option<String>,

    /// Owner display name
    pub owner_name: Option<String>,

    /// Breeder display name
    pub breeder_name: Option<String>,

    /// Animals with this animal as sire or dam
    pub offspring: Vec<PetLink>,

    /// Offspring of this animal's dam (empty when the dam is unknown)
    pub dam_offspring: Vec<PetLink>,

    /// Offspring of this animal's sire (empty when the sire is unknown)
    pub sire_offspring: Vec<PetLink>,
}

/// User-facing profile of a registered animal
#[derive(Debug, Clone, PartialEq)]
pub struct PetProfile {
    /// Animal identifier
    pub id: AnimalId,

    /// Full show name
    pub show_name: String,

    /// Affix id
    pub affix_id: Option<i64>,

    /// Affix name
    pub affix_name: Option<String>,

    /// Pedigree number
    pub pedigree_number: Option<String>,

    /// Registration date (unix seconds)
    pub registration_date: Option<u64>,

    /// Age in game weeks
    pub age: u32,

    /// Sex
    pub sex: Sex,

    /// Game release tag
    pub game_version: GameVersion,

    /// Breed id
    pub breed_id: i64,

    /// Breed name
    pub breed_name: Option<String>,

    /// Owner id
    pub owner_id: i64,

    /// Owner display name
    pub owner_name: Option<String>,

    /// Breeder id
    pub breeder_id: Option<i64>,

    /// Breeder display name
    pub breeder_name: Option<String>,

    /// Direct offspring
    pub offspring: Vec<PetLink>,

    /// Full and half siblings
    pub siblings: Vec<Sibling>,

    /// Fixed-depth ancestry
    pub pedigree: Pedigree,
}
