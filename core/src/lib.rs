//! # MRO Core
//!
//! Core types for computing C3 method resolution orders.
//!
//! This crate provides the hierarchy model that linearization runs over,
//! the shared error taxonomy, and configuration types.
//!
//! ## Design Principles
//!
//! - **Explicit graphs**: ancestry is an adjacency mapping of identifiers,
//!   never native subtyping
//! - **Immutable snapshots**: a `HierarchyGraph` is not mutated while queried
//! - **Typed failures**: unknown types, cycles and inconsistent orderings are
//!   distinct error variants

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Core error types
pub mod error;

/// Identifier, node and linearization types
pub mod types;

/// Hierarchy graph and structural validation
pub mod hierarchy;

/// Configuration types
pub mod config;

pub use config::{CacheConfig, LinearizerConfig, MroConfig};
pub use error::{MroError, Result};
pub use hierarchy::{HierarchyDescription, HierarchyGraph};
pub use types::{Linearization, TypeId, TypeNode};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::*;
    pub use crate::error::{MroError, Result};
    pub use crate::hierarchy::{HierarchyDescription, HierarchyGraph};
    pub use crate::types::*;
}
