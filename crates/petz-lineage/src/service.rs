//! Service boundary for profile and pedigree reads

use crate::config::LineageConfig;
use crate::error::LineageError;
use crate::profile::{assemble_profile, resolve_pedigree};
use petz_domain::traits::AnimalStore;
use petz_domain::{AnimalId, Pedigree, PetProfile};
use std::fmt::Display;
use std::sync::{Arc, Mutex, MutexGuard};

/// Read-only entry point to the lineage engine
///
/// Every call is independent: one bounded traversal plus in-memory
/// reconstruction, with no state carried between requests.
///
/// # Examples
///
/// ```no_run
/// use petz_lineage::{LineageConfig, PetService};
/// use petz_domain::AnimalId;
/// use petz_store::SqliteStore;
/// use std::sync::{Arc, Mutex};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let store = Arc::new(Mutex::new(SqliteStore::new("petz.db")?));
/// let service = PetService::new(store, LineageConfig::default())?;
///
/// let pedigree = service.get_pedigree(AnimalId::from_value(1), 4)?;
/// println!("{} known ancestors", pedigree.known_ancestors());
/// # Ok(())
/// # }
/// ```
pub struct PetService<S: AnimalStore> {
    store: Arc<Mutex<S>>,
    config: LineageConfig,
}

impl<S> PetService<S>
where
    S: AnimalStore,
    S::Error: Display,
{
    /// Create a new service over a shared store
    pub fn new(store: Arc<Mutex<S>>, config: LineageConfig) -> Result<Self, LineageError> {
        config.validate().map_err(LineageError::Config)?;
        Ok(Self { store, config })
    }

    /// The active configuration
    pub fn config(&self) -> &LineageConfig {
        &self.config
    }

    /// Profile of a registered animal, with a pedigree of
    /// `profile_generations` depth
    pub fn get_pet_profile(&self, id: AnimalId) -> Result<PetProfile, LineageError> {
        tracing::info!(pet_id = %id, "resolving pet profile");

        let store = self.lock()?;
        let profile = assemble_profile(&*store, id, self.config.profile_generations)?;

        tracing::debug!(
            pet_id = %id,
            offspring = profile.offspring.len(),
            siblings = profile.siblings.len(),
            "pet profile assembled"
        );
        Ok(profile)
    }

    /// Pedigree of any existing animal, `generations` deep
    ///
    /// Depths of zero or above `max_generations` are rejected before any
    /// store access.
    pub fn get_pedigree(&self, id: AnimalId, generations: u32) -> Result<Pedigree, LineageError> {
        self.check_generations(generations)?;
        tracing::info!(pet_id = %id, generations, "resolving pedigree");

        let store = self.lock()?;
        resolve_pedigree(&*store, id, generations)
    }

    fn check_generations(&self, generations: u32) -> Result<(), LineageError> {
        if generations == 0 || generations > self.config.max_generations {
            tracing::warn!(generations, max = self.config.max_generations, "rejected pedigree depth");
            return Err(LineageError::InvalidArgument(format!(
                "generations must be between 1 and {}, got {}",
                self.config.max_generations, generations
            )));
        }
        Ok(())
    }

    fn lock(&self) -> Result<MutexGuard<'_, S>, LineageError> {
        self.store
            .lock()
            .map_err(|_| LineageError::Store("store lock poisoned".to_string()))
    }
}
