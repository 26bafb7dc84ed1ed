//! Bounded ancestor traversal
//!
//! Walks sire/dam edges breadth-first, one generation per batched store
//! lookup. Expansion is path-wise: an animal reachable along two paths is
//! emitted twice. The generation bound is the only stopping condition, so
//! cyclic parentage data still terminates.

use crate::error::LineageError;
use petz_domain::traits::AnimalStore;
use petz_domain::{AncestorRecord, AnimalId, AnimalRecord};
use std::collections::HashMap;
use std::fmt::Display;

/// Fetch `root` and its ancestors up to `max_generations` parent edges away
///
/// Rows are ordered by depth; within a depth, each row of the previous
/// depth contributes its sire then its dam. Returns an empty list only
/// when `root` does not exist. At most `2^(max_generations + 1) - 1` rows
/// are returned.
///
/// All lookups run inside one store snapshot.
pub fn fetch_ancestors<S>(
    store: &S,
    root: AnimalId,
    max_generations: u32,
) -> Result<Vec<AncestorRecord>, LineageError>
where
    S: AnimalStore,
    S::Error: Display,
{
    store
        .with_snapshot(|store| walk(store, root, max_generations))
        .map_err(|e: S::Error| LineageError::Store(e.to_string()))
}

fn walk<S: AnimalStore>(
    store: &S,
    root: AnimalId,
    max_generations: u32,
) -> Result<Vec<AncestorRecord>, S::Error> {
    let Some(root_animal) = store.get_animals(&[root])?.into_iter().find(|a| a.id == root) else {
        return Ok(Vec::new());
    };

    let mut rows = vec![AncestorRecord {
        animal: root_animal,
        depth: 0,
    }];
    let mut frontier_start = 0;

    for depth in 1..=max_generations {
        let frontier = &rows[frontier_start..];
        let wanted: Vec<AnimalId> = frontier
            .iter()
            .flat_map(|row| row.animal.parents())
            .flatten()
            .collect();

        if wanted.is_empty() {
            break;
        }

        tracing::debug!(depth, frontier = frontier.len(), lookups = wanted.len(), "fetching ancestor generation");

        let found: HashMap<AnimalId, AnimalRecord> = store
            .get_animals(&wanted)?
            .into_iter()
            .map(|animal| (animal.id, animal))
            .collect();

        let next: Vec<AncestorRecord> = wanted
            .iter()
            .filter_map(|id| found.get(id))
            .map(|animal| AncestorRecord {
                animal: animal.clone(),
                depth,
            })
            .collect();

        if next.is_empty() {
            break;
        }

        frontier_start = rows.len();
        rows.extend(next);
    }

    Ok(rows)
}
