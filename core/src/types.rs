//! Identifier, node and linearization types

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Unique identifier of a type within a hierarchy
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeId(String);

impl TypeId {
    /// Create a new identifier
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TypeId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for TypeId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&TypeId> for TypeId {
    fn from(id: &TypeId) -> Self {
        id.clone()
    }
}

impl AsRef<str> for TypeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for TypeId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for TypeId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for TypeId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// A type and its directly declared bases
///
/// Base order is significant and is never deduplicated here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeNode {
    /// Identifier of this type
    pub id: TypeId,
    /// Direct bases in declaration order
    pub bases: Vec<TypeId>,
}

impl TypeNode {
    /// Create a node with the given bases
    #[must_use]
    pub fn new<I, B>(id: impl Into<TypeId>, bases: I) -> Self
    where
        I: IntoIterator<Item = B>,
        B: Into<TypeId>,
    {
        Self {
            id: id.into(),
            bases: bases.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a node with no bases
    #[must_use]
    pub fn root(id: impl Into<TypeId>) -> Self {
        Self {
            id: id.into(),
            bases: Vec::new(),
        }
    }

    /// A node without bases is a root of the hierarchy
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.bases.is_empty()
    }
}

/// The method resolution order of one type
///
/// The first entry is the type itself, followed by every ancestor exactly once.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Linearization(Vec<TypeId>);

impl Linearization {
    /// Wrap an already computed order
    #[must_use]
    pub fn new(order: Vec<TypeId>) -> Self {
        Self(order)
    }

    /// The linearized type itself
    #[must_use]
    pub fn head(&self) -> Option<&TypeId> {
        self.0.first()
    }

    /// Every entry after the head
    #[must_use]
    pub fn ancestors(&self) -> &[TypeId] {
        self.0.get(1..).unwrap_or_default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TypeId> {
        self.0.iter()
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.0.iter().any(|t| t == id)
    }

    #[must_use]
    pub fn position(&self, id: &str) -> Option<usize> {
        self.0.iter().position(|t| t == id)
    }

    /// Whether `first` comes strictly before `second`; false if either is absent
    #[must_use]
    pub fn precedes(&self, first: &str, second: &str) -> bool {
        match (self.position(first), self.position(second)) {
            (Some(a), Some(b)) => a < b,
            _ => false,
        }
    }

    /// The entry following `id`, as a cooperative super call would see it
    #[must_use]
    pub fn next_after(&self, id: &str) -> Option<&TypeId> {
        self.position(id).and_then(|pos| self.0.get(pos + 1))
    }

    #[must_use]
    pub fn as_slice(&self) -> &[TypeId] {
        &self.0
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<TypeId> {
        self.0
    }
}

impl fmt::Display for Linearization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, id) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{id}")?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Linearization {
    type Item = &'a TypeId;
    type IntoIter = std::slice::Iter<'a, TypeId>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl From<Linearization> for Vec<TypeId> {
    fn from(linearization: Linearization) -> Self {
        linearization.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lin(ids: &[&str]) -> Linearization {
        Linearization::new(ids.iter().map(|s| TypeId::from(*s)).collect())
    }

    #[test]
    fn test_linearization_queries() {
        let l = lin(&["A", "B", "C", "O"]);
        assert_eq!(l.head().map(TypeId::as_str), Some("A"));
        assert_eq!(l.ancestors().len(), 3);
        assert!(l.precedes("B", "O"));
        assert!(!l.precedes("O", "B"));
        assert!(!l.precedes("B", "Z"));
        assert_eq!(l.next_after("B").map(TypeId::as_str), Some("C"));
        assert_eq!(l.next_after("O"), None);
        assert_eq!(l.to_string(), "A -> B -> C -> O");
    }

    #[test]
    fn test_empty_linearization_has_no_ancestors() {
        let l = Linearization::new(Vec::new());
        assert!(l.is_empty());
        assert!(l.ancestors().is_empty());
        assert_eq!(l.head(), None);
    }

    #[test]
    fn test_serde_is_a_plain_list() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let json = serde_json::to_string(&lin(&["D", "O"]))?;
        assert_eq!(json, r#"["D","O"]"#);

        let node: TypeNode = serde_json::from_str(r#"{"id":"D","bases":["O"]}"#)?;
        assert_eq!(node, TypeNode::new("D", ["O"]));
        assert!(!node.is_root());
        Ok(())
    }
}
