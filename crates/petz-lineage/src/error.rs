//! Error types for lineage operations

use petz_domain::AnimalId;
use thiserror::Error;

/// Errors that can occur while resolving lineage views
#[derive(Error, Debug)]
pub enum LineageError {
    /// Animal is absent, or hidden from the requested view
    #[error("Animal not found: {0}")]
    NotFound(AnimalId),

    /// Caller supplied an unusable argument (e.g. generation depth)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Storage layer error
    #[error("Storage error: {0}")]
    Store(String),
}
