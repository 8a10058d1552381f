//! # MRO Service
//!
//! C3 linearization engine: computes the method resolution order of a type
//! from an explicit description of its declared bases.
//!
//! ## Overview
//!
//! - **Merge**: the C3 merge of ordered ancestor sequences, with
//!   left-to-right good-head selection
//! - **Linearizer**: recursive, memoized linearization over an immutable
//!   [`HierarchyGraph`](mro_core::HierarchyGraph) snapshot
//! - **Shared cache**: a thread-safe linearizer for repeated queries against
//!   one snapshot
//! - **Loading**: hierarchy descriptions from YAML or JSON files
//!
//! ## Quick Start
//!
//! ```rust
//! use mro_service::prelude::*;
//!
//! # fn main() -> mro_service::Result<()> {
//! let graph = HierarchyGraph::new()
//!     .with_type("O", Vec::<&str>::new())
//!     .with_type("D", ["O"])
//!     .with_type("E", ["O"])
//!     .with_type("B", ["D", "E"]);
//!
//! let order = linearize(&graph, "B")?;
//! assert_eq!(order.to_string(), "B -> D -> E -> O");
//! # Ok(())
//! # }
//! ```
//!
//! Unknown bases, cycles and conflicting base orders are reported as
//! distinct [`MroError`](mro_core::MroError) variants; no partial order is
//! ever returned.

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Command-line application
pub mod cli_enhanced;

/// Configuration loading
pub mod config;

/// C3 merge, linearizer and queries
pub mod inheritance;

/// Hierarchy file loaders
pub mod loader;

/// Prelude for convenient imports
pub mod prelude;

pub use inheritance::{Linearizer, SharedLinearizer, linearize};
pub use mro_core::{HierarchyGraph, Linearization, MroConfig, MroError, Result, TypeId, TypeNode};
