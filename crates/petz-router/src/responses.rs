//! JSON response bodies and their conversions from domain types.

use petz_domain::{Pedigree, PedigreeEntry, PetLink, PetProfile, Sibling};
use serde::{Deserialize, Serialize};

/// One occupied pedigree slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PedigreeEntryResponse {
    /// Animal id
    pub id: i64,
    /// Pedigree number
    pub pedigree_number: Option<String>,
    /// Show name
    pub show_name: String,
}

/// Pedigree body: one array per generation, `null` for unknown slots
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PedigreeResponse {
    /// Slots per generation
    pub entries: Vec<Vec<Option<PedigreeEntryResponse>>>,
}

/// Offspring link
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PetLinkResponse {
    /// Animal id
    pub id: i64,
    /// Show name
    pub show_name: String,
    /// "male" or "female"
    pub sex: String,
}

/// Sibling link
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiblingResponse {
    /// Animal id
    pub id: i64,
    /// Show name
    pub show_name: String,
    /// "male" or "female"
    pub sex: String,
    /// Shares both parents
    pub full: bool,
}

/// Pet profile body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PetProfileResponse {
    /// Animal id
    pub id: i64,
    /// Show name
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
    /// "male" or "female"
    pub sex: String,
    /// Game release tag
    pub game_version: String,
    /// Breed id
    pub breed_id: i64,
    /// Breed name
    pub breed_name: Option<String>,
    /// Owner id
    pub owner_id: i64,
    /// Owner name
    pub owner_name: Option<String>,
    /// Breeder id
    pub breeder_id: Option<i64>,
    /// Breeder name
    pub breeder_name: Option<String>,
    /// Direct offspring
    pub offspring: Vec<PetLinkResponse>,
    /// Full and half siblings
    pub siblings: Vec<SiblingResponse>,
    /// Three-generation pedigree
    pub pedigree: PedigreeResponse,
}

impl From<&PedigreeEntry> for PedigreeEntryResponse {
    fn from(entry: &PedigreeEntry) -> Self {
        Self {
            id: entry.id.value(),
            pedigree_number: entry.pedigree_number.clone(),
            show_name: entry.show_name.clone(),
        }
    }
}

impl From<&Pedigree> for PedigreeResponse {
    fn from(pedigree: &Pedigree) -> Self {
        Self {
            entries: pedigree
                .entries
                .iter()
                .map(|generation| {
                    generation
                        .iter()
                        .map(|slot| slot.as_ref().map(PedigreeEntryResponse::from))
                        .collect()
                })
                .collect(),
        }
    }
}

impl From<&PetLink> for PetLinkResponse {
    fn from(link: &PetLink) -> Self {
        Self {
            id: link.id.value(),
            show_name: link.show_name.clone(),
            sex: link.sex.as_str().to_string(),
        }
    }
}

impl From<&Sibling> for SiblingResponse {
    fn from(sibling: &Sibling) -> Self {
        Self {
            id: sibling.link.id.value(),
            show_name: sibling.link.show_name.clone(),
            sex: sibling.link.sex.as_str().to_string(),
            full: sibling.is_full(),
        }
    }
}

impl From<&PetProfile> for PetProfileResponse {
    fn from(profile: &PetProfile) -> Self {
        Self {
            id: profile.id.value(),
            show_name: profile.show_name.clone(),
            affix_id: profile.affix_id,
            affix_name: profile.affix_name.clone(),
            pedigree_number: profile.pedigree_number.clone(),
            registration_date: profile.registration_date,
            age: profile.age,
            sex: profile.sex.as_str().to_string(),
            game_version: profile.game_version.as_str().to_string(),
            breed_id: profile.breed_id,
            breed_name: profile.breed_name.clone(),
            owner_id: profile.owner_id,
            owner_name: profile.owner_name.clone(),
            breeder_id: profile.breeder_id,
            breeder_name: profile.breeder_name.clone(),
            offspring: profile.offspring.iter().map(PetLinkResponse::from).collect(),
            siblings: profile.siblings.iter().map(SiblingResponse::from).collect(),
            pedigree: PedigreeResponse::from(&profile.pedigree),
        }
    }
}
