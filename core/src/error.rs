//! Error types for linearization operations

use crate::types::TypeId;
use thiserror::Error;

/// Main error type for hierarchy and linearization operations
#[derive(Error, Debug)]
pub enum MroError {
    /// A referenced type identifier is not present in the hierarchy
    #[error("Unknown type '{type_id}'")]
    UnknownType {
        /// The missing identifier
        type_id: TypeId,
    },

    /// The declared-bases graph contains a cycle
    #[error("Cyclic hierarchy: {}", render_cycle(.cycle))]
    CyclicHierarchy {
        /// Members of the cycle, in traversal order
        cycle: Vec<TypeId>,
    },

    /// The merge step found no good head
    #[error(
        "Inconsistent hierarchy{}: cannot order {}",
        render_owner(.type_id),
        render_list(.blocking)
    )]
    InconsistentHierarchy {
        /// Type being linearized, when known
        type_id: Option<TypeId>,
        /// Heads that blocked selection
        blocking: Vec<TypeId>,
    },

    /// A type was declared twice while building a hierarchy
    #[error("Type '{type_id}' is already declared")]
    DuplicateType {
        /// The duplicated identifier
        type_id: TypeId,
    },

    /// Hierarchy nesting exceeded the configured depth limit
    #[error("Hierarchy depth limit of {limit} exceeded while linearizing '{type_id}'")]
    DepthLimitExceeded {
        /// Type being linearized when the limit was hit
        type_id: TypeId,
        /// Configured limit
        limit: usize,
    },

    /// Hierarchy description parsing errors
    #[error("Failed to parse hierarchy: {message}")]
    ParseError {
        /// Error message
        message: String,
        /// Location in the input if available
        location: Option<String>,
    },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// IO errors
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Result type alias for linearization operations
pub type Result<T> = std::result::Result<T, MroError>;

fn render_cycle(cycle: &[TypeId]) -> String {
    let mut parts: Vec<&str> = cycle.iter().map(TypeId::as_str).collect();
    if let Some(first) = cycle.first() {
        parts.push(first.as_str());
    }
    parts.join(" -> ")
}

fn render_owner(type_id: &Option<TypeId>) -> String {
    type_id
        .as_ref()
        .map(|id| format!(" for '{id}'"))
        .unwrap_or_default()
}

fn render_list(ids: &[TypeId]) -> String {
    let parts: Vec<&str> = ids.iter().map(TypeId::as_str).collect();
    format!("[{}]", parts.join(", "))
}

impl MroError {
    /// Create an unknown type error
    #[must_use]
    pub fn unknown_type(type_id: impl Into<TypeId>) -> Self {
        Self::UnknownType {
            type_id: type_id.into(),
        }
    }

    /// Create a cyclic hierarchy error
    #[must_use]
    pub fn cyclic(cycle: Vec<TypeId>) -> Self {
        Self::CyclicHierarchy { cycle }
    }

    /// Create an inconsistent hierarchy error with no owning type
    #[must_use]
    pub fn inconsistent(blocking: Vec<TypeId>) -> Self {
        Self::InconsistentHierarchy {
            type_id: None,
            blocking,
        }
    }

    /// Create a duplicate type error
    #[must_use]
    pub fn duplicate_type(type_id: impl Into<TypeId>) -> Self {
        Self::DuplicateType {
            type_id: type_id.into(),
        }
    }

    /// Create a new parse error
    #[must_use]
    pub fn parse(message: impl Into<String>) -> Self {
        Self::ParseError {
            message: message.into(),
            location: None,
        }
    }

    /// Create a new parse error with location
    #[must_use]
    pub fn parse_at(message: impl Into<String>, location: impl Into<String>) -> Self {
        Self::ParseError {
            message: message.into(),
            location: Some(location.into()),
        }
    }

    /// Create a new configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigError(message.into())
    }

    /// Attach the type being linearized to an inconsistency error.
    ///
    /// Other variants, and inconsistencies that already name a type, pass through unchanged.
    #[must_use]
    pub fn for_type(self, type_id: &TypeId) -> Self {
        match self {
            Self::InconsistentHierarchy {
                type_id: None,
                blocking,
            } => Self::InconsistentHierarchy {
                type_id: Some(type_id.clone()),
                blocking,
            },
            other => other,
        }
    }

    /// Whether this is an `UnknownType` error
    #[must_use]
    pub fn is_unknown_type(&self) -> bool {
        matches!(self, Self::UnknownType { .. })
    }

    /// Whether this is a `CyclicHierarchy` error
    #[must_use]
    pub fn is_cyclic(&self) -> bool {
        matches!(self, Self::CyclicHierarchy { .. })
    }

    /// Whether this is an `InconsistentHierarchy` error
    #[must_use]
    pub fn is_inconsistent(&self) -> bool {
        matches!(self, Self::InconsistentHierarchy { .. })
    }
}

impl From<serde_json::Error> for MroError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

impl From<serde_yaml::Error> for MroError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = MroError::parse("Invalid YAML");
        assert!(matches!(err, MroError::ParseError { .. }));

        let err = MroError::parse_at("Invalid syntax", "line 10");
        match err {
            MroError::ParseError { location, .. } => {
                assert_eq!(location.as_deref(), Some("line 10"));
            }
            _ => panic!("Wrong error type"),
        }
    }

    #[test]
    fn test_cycle_display() {
        let err = MroError::cyclic(vec!["A".into(), "B".into()]);
        assert_eq!(err.to_string(), "Cyclic hierarchy: A -> B -> A");

        let err = MroError::cyclic(vec!["A".into()]);
        assert_eq!(err.to_string(), "Cyclic hierarchy: A -> A");
    }

    #[test]
    fn test_inconsistent_display() {
        let err = MroError::inconsistent(vec!["X".into(), "Y".into()]);
        assert_eq!(
            err.to_string(),
            "Inconsistent hierarchy: cannot order [X, Y]"
        );

        let err = err.for_type(&"C".into());
        assert_eq!(
            err.to_string(),
            "Inconsistent hierarchy for 'C': cannot order [X, Y]"
        );
        assert!(err.is_inconsistent());
    }

    #[test]
    fn test_for_type_keeps_existing_owner() {
        let err = MroError::inconsistent(vec!["X".into()])
            .for_type(&"B".into())
            .for_type(&"A".into());
        match err {
            MroError::InconsistentHierarchy { type_id, .. } => {
                assert_eq!(type_id.as_ref().map(TypeId::as_str), Some("B"));
            }
            _ => panic!("Wrong error type"),
        }
    }

    #[test]
    fn test_error_conversions() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid").unwrap_err();
        let err: MroError = json_err.into();
        assert!(matches!(err, MroError::SerializationError(_)));
        assert!(MroError::unknown_type("Z").is_unknown_type());
    }
}
