//! YAML hierarchy loader

use super::traits::HierarchyLoader;
use mro_core::prelude::*;

/// Loads descriptions of the form `types: { Name: [Base, ...] }`
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlLoader;

impl HierarchyLoader for YamlLoader {
    fn name(&self) -> &'static str {
        "yaml"
    }

    fn supported_extensions(&self) -> Vec<&str> {
        vec!["yaml", "yml"]
    }

    fn load_str(&self, content: &str) -> Result<HierarchyDescription> {
        serde_yaml::from_str(content).map_err(|e| match e.location() {
            Some(at) => MroError::parse_at(
                e.to_string(),
                format!("line {}, column {}", at.line(), at.column()),
            ),
            None => MroError::parse(e.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_yaml() -> Result<()> {
        let description = YamlLoader.load_str("types:\n  O: []\n  D: [O]\n")?;
        assert_eq!(description.types.len(), 2);
        assert_eq!(description.types["D"], vec![TypeId::from("O")]);
        Ok(())
    }

    #[test]
    fn test_bad_yaml_reports_location() {
        let err = YamlLoader.load_str("types:\n  D: [O\n").unwrap_err();
        assert!(matches!(err, MroError::ParseError { location: Some(_), .. }));
    }
}
