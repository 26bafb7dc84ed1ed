//! Pedigree reconstruction
//!
//! Turns the flat list of rows produced by ancestor traversal back into a
//! positional binary tree. Generation `i` holds `2^(i+1)` slots; each slot
//! of generation `i - 1` contributes its `[sire, dam]` pair, left to right,
//! so a slot's index encodes its paternal/maternal path from the root.

use crate::animal::{AncestorRecord, AnimalId, AnimalRecord};
use std::collections::HashMap;

/// Public projection of an ancestor occupying a pedigree slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PedigreeEntry {
    /// Animal identifier
    pub id: AnimalId,

    /// Registry pedigree number, if assigned
    pub pedigree_number: Option<String>,

    /// Full show name
    pub show_name: String,
}

impl From<&AnimalRecord> for PedigreeEntry {
    fn from(animal: &AnimalRecord) -> Self {
        Self {
            id: animal.id,
            pedigree_number: animal.pedigree_number.clone(),
            show_name: animal.show_name.clone(),
        }
    }
}

/// Generation-indexed ancestry of one animal
///
/// `entries[0]` is `[sire, dam]` of the root, `entries[1]` their parents,
/// and so on. Unknown ancestors are `None`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Pedigree {
    /// Slots per generation
    pub entries: Vec<Vec<Option<PedigreeEntry>>>,
}

impl Pedigree {
    /// Number of generations
    pub fn generations(&self) -> usize {
        self.entries.len()
    }

    /// Slots of generation `index` (0 = parents)
    pub fn generation(&self, index: usize) -> Option<&[Option<PedigreeEntry>]> {
        self.entries.get(index).map(Vec::as_slice)
    }

    /// Count of non-empty slots across all generations
    pub fn known_ancestors(&self) -> usize {
        self.entries
            .iter()
            .map(|generation| generation.iter().filter(|slot| slot.is_some()).count())
            .sum()
    }
}

/// Build the pedigree of `root` from traversal output
///
/// Returns `None` when `root` is not among `ancestors`. Parent references
/// are resolved by identity against the supplied rows only; a parent that
/// was not fetched produces an empty slot. An animal that appears at
/// several positions (inbreeding) fills each of them.
///
/// # Examples
///
/// ```
/// use petz_domain::{build_pedigree, AnimalId};
///
/// assert!(build_pedigree(AnimalId::from_value(1), 3, &[]).is_none());
/// ```
pub fn build_pedigree(
    root: AnimalId,
    generations: usize,
    ancestors: &[AncestorRecord],
) -> Option<Pedigree> {
    let by_id: HashMap<AnimalId, &AnimalRecord> = ancestors
        .iter()
        .map(|row| (row.animal.id, &row.animal))
        .collect();

    let root = *by_id.get(&root)?;

    let resolve = |id: Option<AnimalId>| id.and_then(|id| by_id.get(&id).copied());
    let parents_of = |slot: Option<&AnimalRecord>| match slot {
        Some(animal) => [resolve(animal.sire_id), resolve(animal.dam_id)],
        None => [None, None],
    };

    let mut tree: Vec<Vec<Option<&AnimalRecord>>> = Vec::with_capacity(generations);
    for _ in 0..generations {
        let generation = match tree.last() {
            None => parents_of(Some(root)).to_vec(),
            Some(previous) => {
                let mut next = Vec::with_capacity(previous.len() * 2);
                for slot in previous {
                    next.extend(parents_of(*slot));
                }
                next
            }
        };
        tree.push(generation);
    }

    let entries = tree
        .into_iter()
        .map(|generation| {
            generation
                .into_iter()
                .map(|slot| slot.map(PedigreeEntry::from))
                .collect()
        })
        .collect();

    Some(Pedigree { entries })
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::animal::{GameVersion, PetStatus, Sex};
    use proptest::prelude::*;

    fn record(id: i64, sire: Option<i64>, dam: Option<i64>) -> AncestorRecord {
        AncestorRecord {
            animal: AnimalRecord {
                id: AnimalId::from_value(id),
                show_name: id.to_string(),
                partial_show_name: id.to_string(),
                call_name: id.to_string(),
                pedigree_number: None,
                registration_date: None,
                registrar_id: None,
                age: 0,
                sex: Sex::Male,
                game_version: GameVersion::Petz5,
                status: PetStatus::Registered,
                sire_id: sire.map(AnimalId::from_value),
                dam_id: dam.map(AnimalId::from_value),
                affix_id: None,
                breed_id: 0,
                owner_id: 0,
                breeder_id: None,
                created_at: 0,
                added_by: None,
                last_modified_at: None,
                modified_by: None,
            },
            depth: 0,
        }
    }

    proptest! {
        /// Property: generation i always has 2^(i+1) slots
        #[test]
        fn test_slot_counts(
            parents in prop::collection::vec((prop::option::of(0i64..12), prop::option::of(0i64..12)), 12),
            generations in 1usize..6,
        ) {
            let rows: Vec<AncestorRecord> = parents
                .iter()
                .enumerate()
                .map(|(id, (sire, dam))| record(id as i64, *sire, *dam))
                .collect();

            let pedigree = build_pedigree(AnimalId::from_value(0), generations, &rows).unwrap();
            prop_assert_eq!(pedigree.generations(), generations);
            for (i, generation) in pedigree.entries.iter().enumerate() {
                prop_assert_eq!(generation.len(), 1usize << (i + 1));
            }
        }

        /// Property: rebuilding from the same rows gives the same structure
        #[test]
        fn test_deterministic(
            parents in prop::collection::vec((prop::option::of(0i64..8), prop::option::of(0i64..8)), 8),
        ) {
            let rows: Vec<AncestorRecord> = parents
                .iter()
                .enumerate()
                .map(|(id, (sire, dam))| record(id as i64, *sire, *dam))
                .collect();

            let first = build_pedigree(AnimalId::from_value(0), 4, &rows);
            let second = build_pedigree(AnimalId::from_value(0), 4, &rows);
            prop_assert_eq!(first, second);
        }
    }
}
