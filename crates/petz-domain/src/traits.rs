//! Trait definitions for external interactions
//!
//! These traits define the boundary between the lineage engine and the
//! persistence collaborator. Implementations live in other crates.

use crate::{AnimalId, AnimalRecord, ProfileSource};

/// Read access to animal records
///
/// Implemented by the infrastructure layer (petz-store)
pub trait AnimalStore {
    /// Error type for store operations
    type Error;

    /// Fetch every animal whose id is in `ids`
    ///
    /// Unknown ids are absent from the result. Result order is unspecified.
    /// No status filtering is applied.
    fn get_animals(&self, ids: &[AnimalId]) -> Result<Vec<AnimalRecord>, Self::Error>;

    /// Fetch an animal together with its related display names and the
    /// offspring collections of itself, its dam and its sire
    ///
    /// Returns `None` when the animal is absent or still pending registration.
    fn get_profile_source(&self, id: AnimalId) -> Result<Option<ProfileSource>, Self::Error>;

    /// Run `f` against a read-consistent view of the store
    ///
    /// Reads issued from inside `f` observe a single snapshot. The default
    /// implementation gives no such guarantee and simply calls `f`.
    fn with_snapshot<T, E, F>(&self, f: F) -> Result<T, E>
    where
        F: FnOnce(&Self) -> Result<T, E>,
        E: From<Self::Error>,
        Self: Sized,
    {
        f(self)
    }
}
