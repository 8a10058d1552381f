//! Configuration types for the linearization engine

use crate::error::{MroError, Result};
use serde::{Deserialize, Serialize};

/// Main configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MroConfig {
    /// Linearizer behavior
    pub linearizer: LinearizerConfig,

    /// Shared cache behavior
    pub cache: CacheConfig,
}

/// Linearizer configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinearizerConfig {
    /// Memoize sub-linearizations within a run
    pub memoize: bool,

    /// Maximum number of types on the longest base chain from a queried type to a root
    ///
    /// A root alone has depth 1. Checked on the graph before any merge runs.
    pub max_depth: usize,

    /// Validate the whole graph before each linearization, not only the reachable part
    pub validate_whole_graph: bool,
}

impl Default for LinearizerConfig {
    fn default() -> Self {
        Self {
            memoize: true,
            max_depth: 512,
            validate_whole_graph: false,
        }
    }
}

/// Shared linearization cache configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Enable the shared cache
    pub enabled: bool,

    /// Maximum cached linearizations; inserts stop once reached
    pub max_entries: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_entries: 10_000,
        }
    }
}

impl MroConfig {
    /// Check value ranges
    ///
    /// # Errors
    ///
    /// Returns `MroError::ConfigError` describing the first invalid value.
    pub fn validate(&self) -> Result<()> {
        if self.linearizer.max_depth == 0 {
            return Err(MroError::config(
                "linearizer.max_depth must be greater than 0",
            ));
        }
        if self.cache.enabled && self.cache.max_entries == 0 {
            return Err(MroError::config(
                "cache.max_entries must be greater than 0 when the cache is enabled",
            ));
        }
        Ok(())
    }
}
