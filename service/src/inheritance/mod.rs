//! C3 linearization of type hierarchies
//!
//! This module provides:
//! - The C3 merge of ordered ancestor sequences
//! - Recursive, memoized linearization over a hierarchy snapshot
//! - A thread-safe linearizer with a shared cache
//! - Subclass and cooperative super-call queries

pub mod linearizer;
pub mod merge;
pub mod queries;
pub mod shared;

pub use linearizer::{LinearizationContext, Linearizer, linearize};
pub use merge::merge;
pub use queries::{common_ancestors, get_inheritance_chain, is_subclass_of, next_in_mro};
pub use shared::SharedLinearizer;
