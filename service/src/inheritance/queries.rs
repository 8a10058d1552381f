//! Hierarchy queries answered from linearizations

use super::linearizer::linearize;
use mro_core::prelude::*;

/// Get the complete resolution order for a type
///
/// # Errors
///
/// See [`super::Linearizer::linearize`].
pub fn get_inheritance_chain(graph: &HierarchyGraph, type_id: &str) -> Result<Vec<TypeId>> {
    linearize(graph, type_id).map(Linearization::into_vec)
}

/// Check if a type is a subclass of another; every type is a subclass of itself
///
/// # Errors
///
/// Returns `MroError::UnknownType` if either type is absent, or any failure
/// linearizing `child`.
pub fn is_subclass_of(graph: &HierarchyGraph, child: &str, parent: &str) -> Result<bool> {
    graph.node(parent)?;
    if child == parent {
        graph.node(child)?;
        return Ok(true);
    }
    Ok(linearize(graph, child)?.contains(parent))
}

/// The type a cooperative super call made from `current` resolves to
///
/// Looks `current` up in the order of `start` and returns the next entry, or
/// `None` when `current` is last.
///
/// # Errors
///
/// Returns `MroError::UnknownType` if `current` does not appear in the order
/// of `start`, or any failure linearizing `start`.
pub fn next_in_mro(graph: &HierarchyGraph, start: &str, current: &str) -> Result<Option<TypeId>> {
    let order = linearize(graph, start)?;
    if !order.contains(current) {
        return Err(MroError::unknown_type(current));
    }
    Ok(order.next_after(current).cloned())
}

/// Entries of `L[a]` that also appear in `L[b]`, in `L[a]` order
///
/// # Errors
///
/// Any failure linearizing `a` or `b`.
pub fn common_ancestors(graph: &HierarchyGraph, a: &str, b: &str) -> Result<Vec<TypeId>> {
    let left = linearize(graph, a)?;
    let right = linearize(graph, b)?;
    Ok(left
        .iter()
        .filter(|id| right.contains(id.as_str()))
        .cloned()
        .collect())
}
