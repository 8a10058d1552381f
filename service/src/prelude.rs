//! Prelude module for the linearization service
//!
//! This module re-exports commonly used types and functions for convenient import.

// Re-export core types
pub use mro_core::prelude::*;

// Re-export linearization entry points
pub use crate::inheritance::{
    LinearizationContext, Linearizer, SharedLinearizer, common_ancestors, is_subclass_of,
    linearize, merge, next_in_mro,
};

// Re-export loading utilities
pub use crate::config::{load_config, load_config_or_default};
pub use crate::loader::{load_hierarchy, parse_hierarchy};
