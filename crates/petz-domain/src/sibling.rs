//! Sibling resolution over the dam's and sire's offspring

use crate::animal::AnimalId;
use crate::profile::PetLink;
use std::collections::HashSet;

/// How closely a sibling is related
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kinship {
    /// Shares both dam and sire
    Full,

    /// Shares exactly one parent
    Half,
}

/// A sibling of some reference animal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sibling {
    /// The sibling
    pub link: PetLink,

    /// Full or half
    pub kinship: Kinship,
}

impl Sibling {
    /// Whether both parents are shared
    pub fn is_full(&self) -> bool {
        self.kinship == Kinship::Full
    }
}

/// Combine the offspring of an animal's dam and sire into its siblings
///
/// `root` is dropped from both lists. The result keeps the dam's offspring
/// first, in their order, followed by any of the sire's offspring not yet
/// listed. A sibling is [`Kinship::Full`] when it occurs in both lists.
///
/// The inputs are never modified, so both may be views over the same
/// underlying collection.
///
/// # Examples
///
/// ```
/// use petz_domain::{compute_siblings, AnimalId, PetLink, Sex};
///
/// let link = |id| PetLink { id: AnimalId::from_value(id), show_name: id.to_string(), sex: Sex::Male };
/// let siblings = compute_siblings(AnimalId::from_value(9), &[link(1), link(9)], &[link(1)]);
///
/// assert_eq!(siblings.len(), 1);
/// assert!(siblings[0].is_full());
/// ```
pub fn compute_siblings(
    root: AnimalId,
    dam_offspring: &[PetLink],
    sire_offspring: &[PetLink],
) -> Vec<Sibling> {
    let via_dam: HashSet<AnimalId> = dam_offspring.iter().map(|l| l.id).collect();
    let via_sire: HashSet<AnimalId> = sire_offspring.iter().map(|l| l.id).collect();

    let mut seen = HashSet::new();
    dam_offspring
        .iter()
        .chain(sire_offspring)
        .filter(|link| link.id != root && seen.insert(link.id))
        .map(|link| Sibling {
            link: link.clone(),
            kinship: if via_dam.contains(&link.id) && via_sire.contains(&link.id) {
                Kinship::Full
            } else {
                Kinship::Half
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animal::Sex;

    fn link(id: i64) -> PetLink {
        PetLink {
            id: AnimalId::from_value(id),
            show_name: format!("Sib {}", id),
            sex: if id % 2 == 0 { Sex::Male } else { Sex::Female },
        }
    }

    fn ids(siblings: &[Sibling]) -> Vec<i64> {
        siblings.iter().map(|s| s.link.id.value()).collect()
    }

    #[test]
    fn test_full_and_half_siblings() {
        // dam offspring {A, C, root}, sire offspring {B, C, root}
        let (a, b, c, root) = (1, 2, 3, 100);
        let siblings = compute_siblings(
            AnimalId::from_value(root),
            &[link(a), link(c), link(root)],
            &[link(b), link(c), link(root)],
        );

        assert_eq!(ids(&siblings), vec![a, c, b]);
        assert_eq!(siblings[0].kinship, Kinship::Half);
        assert_eq!(siblings[1].kinship, Kinship::Full);
        assert_eq!(siblings[2].kinship, Kinship::Half);
    }

    #[test]
    fn test_no_parents_known() {
        assert!(compute_siblings(AnimalId::from_value(1), &[], &[]).is_empty());
    }

    #[test]
    fn test_only_child() {
        let siblings = compute_siblings(AnimalId::from_value(1), &[link(1)], &[link(1)]);
        assert!(siblings.is_empty());
    }

    #[test]
    fn test_same_collection_for_both_parents() {
        let shared = vec![link(4), link(5), link(6)];
        let siblings = compute_siblings(AnimalId::from_value(5), &shared, &shared);

        assert_eq!(ids(&siblings), vec![4, 6]);
        assert!(siblings.iter().all(Sibling::is_full));
        assert_eq!(shared.len(), 3);
    }

    #[test]
    fn test_only_sire_side() {
        let siblings = compute_siblings(AnimalId::from_value(1), &[], &[link(8), link(7)]);
        assert_eq!(ids(&siblings), vec![8, 7]);
        assert!(siblings.iter().all(|s| !s.is_full()));
    }
}
