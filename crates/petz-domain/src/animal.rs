//! Animal module - the registered pet and its parentage references

use std::fmt;

/// Unique identifier for an animal record
///
/// Identifiers are assigned by the registration collaborator and are only
/// ever read by the lineage engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AnimalId(i64);

impl AnimalId {
    /// Create an AnimalId from a raw value
    ///
    /// # Examples
    ///
    /// ```
    /// use petz_domain::AnimalId;
    ///
    /// let id = AnimalId::from_value(42);
    /// assert_eq!(id.value(), 42);
    /// ```
    pub fn from_value(value: i64) -> Self {
        Self(value)
    }

    /// Get the raw value
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for AnimalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for AnimalId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(Self)
            .map_err(|e| format!("Invalid animal id '{}': {}", s, e))
    }
}

/// Sex of an animal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sex {
    /// Male; may appear as a sire
    Male,

    /// Female; may appear as a dam
    Female,
}

impl Sex {
    /// Get the sex as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
        }
    }

    /// Parse a sex from a string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "male" | "m" => Some(Sex::Male),
            "female" | "f" => Some(Sex::Female),
            _ => None,
        }
    }
}

impl std::str::FromStr for Sex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid sex: {}", s))
    }
}

/// Lifecycle status of an animal record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PetStatus {
    /// Submitted but not yet accepted by a registrar.
    /// Hidden from profile views.
    PendingRegistration,

    /// Accepted into the registry
    Registered,

    /// Registration was refused
    Rejected,
}

impl PetStatus {
    /// Get the status name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            PetStatus::PendingRegistration => "pending_registration",
            PetStatus::Registered => "registered",
            PetStatus::Rejected => "rejected",
        }
    }

    /// Parse a status from a string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pending_registration" | "pendingregistration" => Some(PetStatus::PendingRegistration),
            "registered" => Some(PetStatus::Registered),
            "rejected" => Some(PetStatus::Rejected),
            _ => None,
        }
    }
}

impl std::str::FromStr for PetStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid status: {}", s))
    }
}

/// Game release an animal was bred in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameVersion {
    /// Petz 3
    Petz3,
    /// Petz 4
    Petz4,
    /// Petz 5
    Petz5,
}

impl GameVersion {
    /// Get the version tag as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameVersion::Petz3 => "petz3",
            GameVersion::Petz4 => "petz4",
            GameVersion::Petz5 => "petz5",
        }
    }

    /// Parse a version tag from a string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "petz3" => Some(GameVersion::Petz3),
            "petz4" => Some(GameVersion::Petz4),
            "petz5" => Some(GameVersion::Petz5),
            _ => None,
        }
    }
}

impl std::str::FromStr for GameVersion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid game version: {}", s))
    }
}

/// Read-only projection of an animal as stored by the registry
///
/// Parentage is modelled as two nullable references. Nothing prevents the
/// stored data from containing a cycle; traversals are bounded by depth.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimalRecord {
    /// Unique identifier
    pub id: AnimalId,

    /// Full show name, including the affix
    pub show_name: String,

    /// Show name without the affix
    pub partial_show_name: String,

    /// Everyday name
    pub call_name: String,

    /// Registry-assigned pedigree number (set on registration)
    pub pedigree_number: Option<String>,

    /// When the registration was accepted (unix seconds)
    pub registration_date: Option<u64>,

    /// Member who accepted the registration
    pub registrar_id: Option<i64>,

    /// Age in game weeks
    pub age: u32,

    /// Sex
    pub sex: Sex,

    /// Game release tag
    pub game_version: GameVersion,

    /// Lifecycle status
    pub status: PetStatus,

    /// Male parent
    pub sire_id: Option<AnimalId>,

    /// Female parent
    pub dam_id: Option<AnimalId>,

    /// Kennel name the show name is registered under
    pub affix_id: Option<i64>,

    /// Breed
    pub breed_id: i64,

    /// Current owner (member)
    pub owner_id: i64,

    /// Breeder (member)
    pub breeder_id: Option<i64>,

    /// When this record was created (unix seconds)
    pub created_at: u64,

    /// Member who created the record
    pub added_by: Option<i64>,

    /// When this record was last changed (unix seconds)
    pub last_modified_at: Option<u64>,

    /// Member who last changed the record
    pub modified_by: Option<i64>,
}

impl AnimalRecord {
    /// Whether this animal may be the target of a profile query
    pub fn is_visible(&self) -> bool {
        self.status != PetStatus::PendingRegistration
    }

    /// Sire and dam, in that order
    pub fn parents(&self) -> [Option<AnimalId>; 2] {
        [self.sire_id, self.dam_id]
    }
}

/// An animal reached by ancestor traversal
///
/// `depth` is the number of parent edges walked from the root along the
/// path this row was discovered on. The same animal may appear several
/// times at different depths when it is reachable by several paths.
#[derive(Debug, Clone, PartialEq)]
pub struct AncestorRecord {
    /// The animal
    pub animal: AnimalRecord,

    /// Distance from the root in parent edges
    pub depth: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_animal_id_parse() {
        let id: AnimalId = " 17 ".parse().unwrap();
        assert_eq!(id, AnimalId::from_value(17));
        assert!("seventeen".parse::<AnimalId>().is_err());
    }

    #[test]
    fn test_enum_parsing() {
        assert_eq!(Sex::parse("F"), Some(Sex::Female));
        assert_eq!(PetStatus::parse("Registered"), Some(PetStatus::Registered));
        assert_eq!(
            PetStatus::parse(PetStatus::PendingRegistration.as_str()),
            Some(PetStatus::PendingRegistration)
        );
        assert_eq!(GameVersion::parse("PETZ4"), Some(GameVersion::Petz4));
        assert!("petz9".parse::<GameVersion>().is_err());
    }
}
