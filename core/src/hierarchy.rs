//! Hierarchy graph of types and their declared bases
//!
//! The graph is an explicit adjacency mapping from identifier to node. It is
//! treated as an immutable snapshot while queries run against it; callers that
//! need to change a hierarchy build a new graph.

use crate::error::{MroError, Result};
use crate::types::{TypeId, TypeNode};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use tracing::warn;

/// Serialized form of a hierarchy: each type mapped to its ordered bases
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HierarchyDescription {
    /// Types in declaration order
    #[serde(default, deserialize_with = "deserialize_unique_types")]
    pub types: IndexMap<TypeId, Vec<TypeId>>,
}

/// Custom deserializer for `types` that rejects a type declared twice
fn deserialize_unique_types<'de, D>(
    deserializer: D,
) -> std::result::Result<IndexMap<TypeId, Vec<TypeId>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::{self, Visitor};

    struct UniqueTypesVisitor;

    impl<'de> Visitor<'de> for UniqueTypesVisitor {
        type Value = IndexMap<TypeId, Vec<TypeId>>;

        fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
            formatter.write_str("a map of type names to ordered base lists")
        }

        fn visit_map<M>(self, mut map: M) -> std::result::Result<Self::Value, M::Error>
        where
            M: de::MapAccess<'de>,
        {
            let mut types = IndexMap::with_capacity(map.size_hint().unwrap_or_default());
            while let Some((id, bases)) = map.next_entry::<TypeId, Vec<TypeId>>()? {
                if types.contains_key(&id) {
                    return Err(de::Error::custom(format!(
                        "type '{id}' is declared more than once"
                    )));
                }
                types.insert(id, bases);
            }
            Ok(types)
        }
    }

    deserializer.deserialize_map(UniqueTypesVisitor)
}

/// Mapping from type identifier to its node, in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HierarchyGraph {
    nodes: IndexMap<TypeId, TypeNode>,
}

impl HierarchyGraph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style declaration; replaces an existing declaration with the same id
    #[must_use]
    pub fn with_type<I, B>(mut self, id: impl Into<TypeId>, bases: I) -> Self
    where
        I: IntoIterator<Item = B>,
        B: Into<TypeId>,
    {
        let node = TypeNode::new(id, bases);
        self.nodes.insert(node.id.clone(), node);
        self
    }

    /// Add a node to the graph
    ///
    /// # Errors
    ///
    /// Returns `MroError::DuplicateType` if a node with the same id exists.
    pub fn insert(&mut self, node: TypeNode) -> Result<()> {
        if self.nodes.contains_key(&node.id) {
            return Err(MroError::duplicate_type(node.id));
        }
        self.nodes.insert(node.id.clone(), node);
        Ok(())
    }

    /// Build a graph from its serialized description
    ///
    /// # Errors
    ///
    /// Returns `MroError::DuplicateType` if the description repeats a type.
    pub fn from_description(description: HierarchyDescription) -> Result<Self> {
        let mut graph = Self::new();
        for (id, bases) in description.types {
            graph.insert(TypeNode { id, bases })?;
        }
        Ok(graph)
    }

    #[must_use]
    pub fn to_description(&self) -> HierarchyDescription {
        HierarchyDescription {
            types: self
                .nodes
                .values()
                .map(|node| (node.id.clone(), node.bases.clone()))
                .collect(),
        }
    }

    #[must_use]
    pub fn get(&self, type_id: &str) -> Option<&TypeNode> {
        self.nodes.get(type_id)
    }

    #[must_use]
    pub fn contains(&self, type_id: &str) -> bool {
        self.nodes.contains_key(type_id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Identifiers in insertion order
    pub fn type_ids(&self) -> impl Iterator<Item = &TypeId> {
        self.nodes.keys()
    }

    /// Types that declare no bases
    pub fn roots(&self) -> impl Iterator<Item = &TypeId> {
        self.nodes
            .values()
            .filter(|node| node.is_root())
            .map(|node| &node.id)
    }

    /// Look up a node, failing if it is absent
    ///
    /// # Errors
    ///
    /// Returns `MroError::UnknownType` if `type_id` is not in the graph.
    pub fn node(&self, type_id: &str) -> Result<&TypeNode> {
        self.nodes
            .get(type_id)
            .ok_or_else(|| MroError::unknown_type(type_id))
    }

    /// Direct bases of a type, in declaration order
    ///
    /// # Errors
    ///
    /// Returns `MroError::UnknownType` if `type_id` is not in the graph.
    pub fn get_bases(&self, type_id: &str) -> Result<&[TypeId]> {
        self.node(type_id).map(|node| node.bases.as_slice())
    }

    /// Validate every type reachable from `type_id`
    ///
    /// Every reachable base must be declared and no type may transitively
    /// declare itself as a base.
    ///
    /// # Errors
    ///
    /// Returns `MroError::UnknownType` for the first undeclared type reached, or
    /// `MroError::CyclicHierarchy` with the members of the first cycle found.
    pub fn all_declared(&self, type_id: &str) -> Result<()> {
        self.depth(type_id).map(|_| ())
    }

    /// Number of types on the longest base chain from `type_id` to a root
    ///
    /// A root has depth 1. The value depends only on the graph, never on the
    /// order in which bases are visited.
    ///
    /// # Errors
    ///
    /// Same as [`HierarchyGraph::all_declared`].
    pub fn depth(&self, type_id: &str) -> Result<usize> {
        let mut finished = HashMap::new();
        self.check_acyclic_from(type_id, &mut finished)
    }

    /// Validate the whole graph, starting from each type in insertion order
    ///
    /// # Errors
    ///
    /// Returns the first failure `all_declared` would report.
    pub fn validate(&self) -> Result<()> {
        let mut finished = HashMap::new();
        for id in self.nodes.keys() {
            self.check_acyclic_from(id.as_str(), &mut finished)?;
        }
        Ok(())
    }

    /// Depth-first check from `start`, recording the depth of every finished type
    fn check_acyclic_from<'g>(
        &'g self,
        start: &str,
        finished: &mut HashMap<&'g str, usize>,
    ) -> Result<usize> {
        let start_node = self.node(start)?;
        if let Some(&depth) = finished.get(start) {
            return Ok(depth);
        }

        // Each frame is a node on the active path plus the index of its next base
        let mut path: Vec<(&'g TypeNode, usize)> = vec![(start_node, 0)];
        let mut visiting: HashSet<&'g str> = HashSet::from([start_node.id.as_str()]);

        while let Some(frame) = path.last_mut() {
            let current: &'g TypeNode = frame.0;
            let index = frame.1;
            frame.1 += 1;

            let Some(base) = current.bases.get(index) else {
                // Every base has finished by the time its derived type is popped
                let depth = 1 + current
                    .bases
                    .iter()
                    .filter_map(|b| finished.get(b.as_str()).copied())
                    .max()
                    .unwrap_or_default();
                visiting.remove(current.id.as_str());
                finished.insert(current.id.as_str(), depth);
                path.pop();
                continue;
            };

            if visiting.contains(base.as_str()) {
                let start_at = path
                    .iter()
                    .position(|(node, _)| node.id == *base)
                    .unwrap_or_default();
                let cycle: Vec<TypeId> = path[start_at..]
                    .iter()
                    .map(|(node, _)| node.id.clone())
                    .collect();
                warn!("Cycle detected through '{base}' while validating '{start}'");
                return Err(MroError::cyclic(cycle));
            }
            if finished.contains_key(base.as_str()) {
                continue;
            }

            let base_node = self.node(base.as_str())?;
            visiting.insert(base_node.id.as_str());
            path.push((base_node, 0));
        }

        Ok(finished
            .get(start_node.id.as_str())
            .copied()
            .unwrap_or(1))
    }

    /// All transitive ancestors of `type_id`, excluding itself
    ///
    /// Ancestors are listed depth-first in declaration order, each once. This
    /// is a reachability listing, not a linearization.
    ///
    /// # Errors
    ///
    /// Returns `MroError::UnknownType` if `type_id` or any reachable base is
    /// undeclared.
    pub fn ancestors(&self, type_id: &str) -> Result<Vec<TypeId>> {
        let root = self.node(type_id)?;
        let mut seen: HashSet<&str> = HashSet::from([root.id.as_str()]);
        let mut ordered = Vec::new();
        let mut stack: Vec<&TypeId> = root.bases.iter().rev().collect();

        while let Some(id) = stack.pop() {
            if !seen.insert(id.as_str()) {
                continue;
            }
            let node = self.node(id.as_str())?;
            ordered.push(node.id.clone());
            stack.extend(node.bases.iter().rev());
        }

        Ok(ordered)
    }

    /// Every type that has `type_id` as a transitive ancestor, in insertion order
    ///
    /// # Errors
    ///
    /// Returns `MroError::UnknownType` if `type_id` is absent or a reachable
    /// base is undeclared.
    pub fn descendants(&self, type_id: &str) -> Result<Vec<TypeId>> {
        self.node(type_id)?;
        let mut found = Vec::new();
        for id in self.nodes.keys() {
            if id == type_id {
                continue;
            }
            if self.ancestors(id.as_str())?.iter().any(|a| a == type_id) {
                found.push(id.clone());
            }
        }
        Ok(found)
    }
}

impl TryFrom<HierarchyDescription> for HierarchyGraph {
    type Error = MroError;

    fn try_from(description: HierarchyDescription) -> Result<Self> {
        Self::from_description(description)
    }
}
