//! Loading hierarchy graphs from YAML and JSON files
//!
//! ```yaml
//! types:
//!   O: []
//!   D: [O]
//!   E: [O]
//!   B: [D, E]
//! ```

pub mod json;
pub mod traits;
pub mod yaml;

pub use json::JsonLoader;
pub use traits::{HierarchyLoader, LoaderRegistry};
pub use yaml::YamlLoader;

use mro_core::prelude::*;
use std::path::Path;
use tracing::debug;

/// Parse a hierarchy from text using the loader registered under `format`
///
/// # Errors
///
/// Returns `MroError::ParseError` for an unknown format, malformed input, or a
/// type declared more than once.
pub fn parse_hierarchy(content: &str, format: &str) -> Result<HierarchyGraph> {
    let registry = LoaderRegistry::with_defaults();
    let loader = registry
        .get(format)
        .ok_or_else(|| MroError::parse(format!("Unsupported hierarchy format '{format}'")))?;
    HierarchyGraph::from_description(loader.load_str(content)?)
}

/// Load a hierarchy file, choosing the loader from its extension
///
/// # Errors
///
/// Returns `MroError::IoError` if the file cannot be read, or any error
/// `parse_hierarchy` reports.
pub fn load_hierarchy(path: &Path) -> Result<HierarchyGraph> {
    let registry = LoaderRegistry::with_defaults();
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default();
    let loader = registry.get_for_extension(extension).ok_or_else(|| {
        MroError::parse_at(
            format!("Unsupported hierarchy file extension '{extension}'"),
            path.display().to_string(),
        )
    })?;

    let content = std::fs::read_to_string(path)?;
    let graph = HierarchyGraph::from_description(loader.load_str(&content)?)?;
    debug!(
        "Loaded {} types from {} with the {} loader",
        graph.len(),
        path.display(),
        loader.name()
    );
    Ok(graph)
}
