//! Petz Registry Domain Layer
//!
//! This crate contains the domain model for the pedigree registry and the
//! pure parts of the lineage engine. It has no external dependencies and
//! performs no I/O; persistence is reached only through the traits in
//! [`traits`].
//!
//! ## Key Concepts
//!
//! - **Animal**: a registered pet with at most one sire and one dam
//! - **Ancestor record**: an animal discovered by traversal, tagged with its depth
//! - **Pedigree**: generation-indexed binary tree of ancestor slots
//! - **Siblings**: animals sharing one (half) or both (full) parents
//! - **Profile**: the consolidated read view of a single animal
//!
//! ## Architecture
//!
//! - Pure business logic only
//! - Infrastructure implementations live in other crates
//! - Trait definitions for all external interactions

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod animal;
pub mod pedigree;
pub mod profile;
pub mod sibling;
pub mod traits;

// Re-exports for convenience
pub use animal::{AncestorRecord, AnimalId, AnimalRecord, GameVersion, PetStatus, Sex};
pub use pedigree::{build_pedigree, Pedigree, PedigreeEntry};
pub use profile::{PetLink, PetProfile, ProfileSource};
pub use sibling::{compute_siblings, Kinship, Sibling};
