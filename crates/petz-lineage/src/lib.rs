//! Petz Lineage
//!
//! Pedigree and lineage resolution over the registry's parentage graph.
//!
//! # Overview
//!
//! A profile request runs:
//!
//! 1. **Entity lookup**: the animal, its related display names and the
//!    offspring of itself, its dam and its sire
//! 2. **Ancestor traversal**: root plus ancestors, one batched lookup per
//!    generation, bounded by depth ([`fetch_ancestors`])
//! 3. **Pedigree reconstruction**: positional binary tree with empty slots
//!    for unknown ancestors ([`petz_domain::build_pedigree`])
//! 4. **Sibling resolution**: full/half tagging over the two parents'
//!    offspring ([`petz_domain::compute_siblings`])
//!
//! A standalone pedigree request runs steps 2 and 3 only, at a depth chosen
//! by the caller and checked against [`LineageConfig::max_generations`].
//!
//! # Usage
//!
//! ```no_run
//! use petz_lineage::{LineageConfig, PetService};
//! use petz_domain::AnimalId;
//! use petz_store::SqliteStore;
//! use std::sync::{Arc, Mutex};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let store = Arc::new(Mutex::new(SqliteStore::new("petz.db")?));
//! let service = PetService::new(store, LineageConfig::default())?;
//!
//! let profile = service.get_pet_profile(AnimalId::from_value(1))?;
//! for sibling in &profile.siblings {
//!     println!("{} (full: {})", sibling.link.show_name, sibling.is_full());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration
//!
//! ```toml
//! [lineage]
//! profile_generations = 3
//! max_generations = 8
//! ```

#![warn(missing_docs)]

mod ancestors;
mod config;
mod error;
mod profile;
mod service;

pub use ancestors::fetch_ancestors;
pub use config::{LineageConfig, GENERATIONS_LIMIT};
pub use error::LineageError;
pub use profile::{assemble_profile, resolve_pedigree};
pub use service::PetService;
