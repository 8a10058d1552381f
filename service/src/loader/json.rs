//! JSON hierarchy loader

use super::traits::HierarchyLoader;
use mro_core::prelude::*;

/// Loads descriptions of the form `{"types": {"Name": ["Base", ...]}}`
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonLoader;

impl HierarchyLoader for JsonLoader {
    fn name(&self) -> &'static str {
        "json"
    }

    fn supported_extensions(&self) -> Vec<&str> {
        vec!["json"]
    }

    fn load_str(&self, content: &str) -> Result<HierarchyDescription> {
        serde_json::from_str(content).map_err(|e| {
            MroError::parse_at(
                e.to_string(),
                format!("line {}, column {}", e.line(), e.column()),
            )
        })
    }
}
