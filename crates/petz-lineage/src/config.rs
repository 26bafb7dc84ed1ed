//! Configuration for lineage queries
//!
//! Bounds how deep ancestor traversal may go. Each extra generation doubles
//! the number of pedigree slots and the worst-case number of fetched rows.

use serde::{Deserialize, Serialize};

/// Hard ceiling on `max_generations`
///
/// A pedigree of `n` generations always holds `2^(n+1) - 2` slots, and the
/// deepest batched lookup binds up to `2^n` ids. Twelve generations keeps
/// both at a few thousand, well inside SQLite's bound-parameter limit.
pub const GENERATIONS_LIMIT: u32 = 12;

/// Configuration for the lineage engine
///
/// # Examples
///
/// ```
/// use petz_lineage::LineageConfig;
///
/// let config = LineageConfig::default();
/// assert_eq!(config.profile_generations, 3);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineageConfig {
    /// Pedigree depth embedded in a pet profile
    /// Default: 3 (parents, grandparents, great-grandparents)
    #[serde(default = "default_profile_generations")]
    pub profile_generations: u32,

    /// Largest depth accepted by a standalone pedigree query
    /// Default: 8 (510 slots)
    #[serde(default = "default_max_generations")]
    pub max_generations: u32,
}

fn default_profile_generations() -> u32 {
    3
}

fn default_max_generations() -> u32 {
    8
}

impl Default for LineageConfig {
    fn default() -> Self {
        Self {
            profile_generations: default_profile_generations(),
            max_generations: default_max_generations(),
        }
    }
}

impl LineageConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.profile_generations == 0 {
            return Err("profile_generations must be greater than 0".to_string());
        }
        if self.max_generations == 0 {
            return Err("max_generations must be greater than 0".to_string());
        }
        if self.max_generations > GENERATIONS_LIMIT {
            return Err(format!("max_generations cannot exceed {}", GENERATIONS_LIMIT));
        }
        if self.profile_generations > self.max_generations {
            return Err("profile_generations cannot exceed max_generations".to_string());
        }
        Ok(())
    }
}
