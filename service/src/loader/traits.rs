//! Loader trait and registry for hierarchy descriptions

use mro_core::prelude::*;
use std::collections::HashMap;

/// Parses a hierarchy description from one text format
pub trait HierarchyLoader: Send + Sync {
    /// Name of the loader
    fn name(&self) -> &str;

    /// Supported file extensions, without the leading dot
    fn supported_extensions(&self) -> Vec<&str>;

    /// Parse a description from text
    ///
    /// # Errors
    ///
    /// Returns `MroError::ParseError` if the text is not a valid description.
    fn load_str(&self, content: &str) -> Result<HierarchyDescription>;
}

/// Registry of loaders, looked up by name or file extension
pub struct LoaderRegistry {
    loaders: HashMap<String, Box<dyn HierarchyLoader>>,
}

impl LoaderRegistry {
    /// Create an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self {
            loaders: HashMap::new(),
        }
    }

    /// Create a registry with the YAML and JSON loaders
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(super::yaml::YamlLoader));
        registry.register(Box::new(super::json::JsonLoader));
        registry
    }

    /// Register a loader under its own name
    pub fn register(&mut self, loader: Box<dyn HierarchyLoader>) {
        self.loaders.insert(loader.name().to_string(), loader);
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&dyn HierarchyLoader> {
        self.loaders.get(name).map(std::convert::AsRef::as_ref)
    }

    /// Get loader for file extension, compared case-insensitively
    #[must_use]
    pub fn get_for_extension(&self, extension: &str) -> Option<&dyn HierarchyLoader> {
        let extension = extension.to_ascii_lowercase();
        self.loaders
            .values()
            .find(|loader| loader.supported_extensions().contains(&extension.as_str()))
            .map(std::convert::AsRef::as_ref)
    }
}

impl Default for LoaderRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
