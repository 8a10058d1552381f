//! Recursive C3 linearization over a hierarchy snapshot
//!
//! `L[C] = [C] + merge(L[B1], ..., L[Bn], [B1, ..., Bn])` for a type `C` with
//! declared bases `B1..Bn`. A type without bases linearizes to itself.

use super::merge::merge;
use indexmap::IndexMap;
use mro_core::prelude::*;
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Run-scoped memo of already computed linearizations
///
/// A context is only meaningful for the graph it was filled from; reusing it
/// against a different hierarchy returns stale orders.
#[derive(Debug, Default)]
pub struct LinearizationContext {
    memo: HashMap<TypeId, Linearization>,
}

impl LinearizationContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, type_id: &str) -> Option<&Linearization> {
        self.memo.get(type_id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.memo.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.memo.is_empty()
    }

    /// Consume the context, yielding every memoized linearization
    pub fn into_entries(self) -> impl Iterator<Item = (TypeId, Linearization)> {
        self.memo.into_iter()
    }
}

/// Computes linearizations against a borrowed, immutable graph
pub struct Linearizer<'g> {
    graph: &'g HierarchyGraph,
    config: LinearizerConfig,
}

impl<'g> Linearizer<'g> {
    /// Create a linearizer with default configuration
    #[must_use]
    pub fn new(graph: &'g HierarchyGraph) -> Self {
        Self::with_config(graph, &LinearizerConfig::default())
    }

    #[must_use]
    pub fn with_config(graph: &'g HierarchyGraph, config: &LinearizerConfig) -> Self {
        Self {
            graph,
            config: config.clone(),
        }
    }

    #[must_use]
    pub fn graph(&self) -> &'g HierarchyGraph {
        self.graph
    }

    /// Compute the method resolution order of `type_id`
    ///
    /// # Errors
    ///
    /// Returns `MroError::UnknownType`, `MroError::CyclicHierarchy` or
    /// `MroError::InconsistentHierarchy`; no partial order is ever returned.
    pub fn linearize(&self, type_id: &str) -> Result<Linearization> {
        let mut ctx = LinearizationContext::new();
        self.linearize_in(&mut ctx, type_id)
    }

    /// Compute the order of `type_id`, reusing and extending `ctx`
    ///
    /// # Errors
    ///
    /// Same as [`Linearizer::linearize`].
    pub fn linearize_in(
        &self,
        ctx: &mut LinearizationContext,
        type_id: &str,
    ) -> Result<Linearization> {
        self.check_structure(type_id)?;
        debug!("Linearizing '{type_id}'");
        let order = self.compute(ctx, type_id)?;
        debug!("Linearized '{type_id}': {order}");
        Ok(order)
    }

    /// Linearize every type in the graph, in insertion order
    ///
    /// # Errors
    ///
    /// Returns the first failure encountered.
    pub fn linearize_all(&self) -> Result<IndexMap<TypeId, Linearization>> {
        self.graph.validate()?;
        let mut ctx = LinearizationContext::new();
        let mut all = IndexMap::with_capacity(self.graph.len());
        for id in self.graph.type_ids() {
            self.check_depth(id.as_str(), self.graph.depth(id.as_str())?)?;
            let order = self.compute(&mut ctx, id.as_str())?;
            all.insert(id.clone(), order);
        }
        debug!("Linearized {} types", all.len());
        Ok(all)
    }

    /// Linearize a type with the given bases without adding it to the graph
    ///
    /// An id already present in the graph is shadowed for this computation only.
    ///
    /// # Errors
    ///
    /// Returns `MroError::UnknownType` for an undeclared base,
    /// `MroError::CyclicHierarchy` if `type_id` is itself an ancestor of one
    /// of `bases`, or `MroError::InconsistentHierarchy`.
    pub fn linearize_hypothetical<I, B>(
        &self,
        type_id: impl Into<TypeId>,
        bases: I,
    ) -> Result<Linearization>
    where
        I: IntoIterator<Item = B>,
        B: Into<TypeId>,
    {
        let node = TypeNode::new(type_id, bases);
        let mut deepest_base = 0;
        for base in &node.bases {
            deepest_base = deepest_base.max(self.graph.depth(base.as_str())?);
            if let Some(path) = self.path_to(base, &node.id, &mut HashSet::new()) {
                let mut cycle = vec![node.id.clone()];
                cycle.extend(path);
                return Err(MroError::cyclic(cycle));
            }
        }

        self.check_depth(node.id.as_str(), deepest_base + 1)?;

        debug!("Linearizing hypothetical '{}'", node.id);
        let mut ctx = LinearizationContext::new();
        self.linearize_node(&mut ctx, &node)
    }

    /// Validate the graph and bound the structural depth of `type_id`
    ///
    /// Runs before any merge, so the recursion in `compute` never goes deeper
    /// than `max_depth` whichever order sub-linearizations are evaluated in.
    fn check_structure(&self, type_id: &str) -> Result<()> {
        if self.config.validate_whole_graph {
            self.graph.node(type_id)?;
            self.graph.validate()?;
        }
        self.check_depth(type_id, self.graph.depth(type_id)?)
    }

    fn check_depth(&self, type_id: &str, depth: usize) -> Result<()> {
        if depth > self.config.max_depth {
            return Err(MroError::DepthLimitExceeded {
                type_id: type_id.into(),
                limit: self.config.max_depth,
            });
        }
        Ok(())
    }

    fn compute(&self, ctx: &mut LinearizationContext, type_id: &str) -> Result<Linearization> {
        if self.config.memoize
            && let Some(found) = ctx.memo.get(type_id)
        {
            return Ok(found.clone());
        }

        let node = self.graph.node(type_id)?;
        let order = self.linearize_node(ctx, node)?;
        if self.config.memoize {
            ctx.memo.insert(node.id.clone(), order.clone());
        }
        Ok(order)
    }

    fn linearize_node(
        &self,
        ctx: &mut LinearizationContext,
        node: &TypeNode,
    ) -> Result<Linearization> {
        if node.is_root() {
            return Ok(Linearization::new(vec![node.id.clone()]));
        }

        let mut sequences: Vec<Vec<TypeId>> = Vec::with_capacity(node.bases.len() + 1);
        for base in &node.bases {
            sequences.push(self.compute(ctx, base.as_str())?.into_vec());
        }
        sequences.push(node.bases.clone());

        let merged = merge(&sequences).map_err(|err| err.for_type(&node.id))?;
        let mut order = Vec::with_capacity(merged.len() + 1);
        order.push(node.id.clone());
        order.extend(merged);
        Ok(Linearization::new(order))
    }

    /// Base chain from `from` up to, but excluding, `target`
    fn path_to(
        &self,
        from: &TypeId,
        target: &TypeId,
        seen: &mut HashSet<TypeId>,
    ) -> Option<Vec<TypeId>> {
        if from == target {
            return Some(Vec::new());
        }
        if !seen.insert(from.clone()) {
            return None;
        }
        let node = self.graph.get(from.as_str())?;
        for base in &node.bases {
            if let Some(mut rest) = self.path_to(base, target, seen) {
                rest.insert(0, node.id.clone());
                return Some(rest);
            }
        }
        None
    }
}

/// Compute the method resolution order of `type_id` with default configuration
///
/// # Errors
///
/// See [`Linearizer::linearize`].
pub fn linearize(graph: &HierarchyGraph, type_id: &str) -> Result<Linearization> {
    Linearizer::new(graph).linearize(type_id)
}
