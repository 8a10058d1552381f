//! Loading hierarchies from files

use mro_service::prelude::*;
use pretty_assertions::assert_eq;
use std::io::Write;
use tempfile::Builder;

const DIAMOND_YAML: &str = "\
types:
  O: []
  D: [O]
  E: [O]
  F: [O]
  B: [D, E]
  C: [D, F]
  A: [B, C]
";

fn write_temp(suffix: &str, content: &str) -> tempfile::NamedTempFile {
    let mut file = Builder::new().suffix(suffix).tempfile().expect("temp file");
    file.write_all(content.as_bytes()).expect("write temp file");
    file
}

#[test]
fn test_load_yaml_file() -> Result<()> {
    let file = write_temp(".yaml", DIAMOND_YAML);
    let graph = load_hierarchy(file.path())?;
    assert_eq!(graph.len(), 7);
    assert_eq!(
        linearize(&graph, "A")?.to_string(),
        "A -> B -> C -> D -> E -> F -> O"
    );
    Ok(())
}

#[test]
fn test_load_json_file() -> Result<()> {
    let file = write_temp(".json", r#"{"types": {"O": [], "D": ["O"]}}"#);
    let graph = load_hierarchy(file.path())?;
    assert_eq!(linearize(&graph, "D")?.len(), 2);
    Ok(())
}

#[test]
fn test_unsupported_extension() {
    let file = write_temp(".toml", "[types]\n");
    let err = load_hierarchy(file.path()).unwrap_err();
    assert!(matches!(err, MroError::ParseError { .. }));
}

#[test]
fn test_missing_file_is_io_error() {
    let err = load_hierarchy(std::path::Path::new("/nonexistent/hierarchy.yaml")).unwrap_err();
    assert!(matches!(err, MroError::IoError(_)));
}

#[test]
fn test_parse_and_describe_round_trip() -> Result<()> {
    let graph = parse_hierarchy(DIAMOND_YAML, "yaml")?;
    let yaml = serde_yaml::to_string(&graph.to_description())?;
    assert_eq!(parse_hierarchy(&yaml, "yaml")?, graph);
    Ok(())
}

#[test]
fn test_unknown_base_survives_loading() {
    // Loading does not validate; linearization reports the missing base
    let graph = parse_hierarchy("types:\n  A: [Z]\n", "yaml").expect("parses");
    assert!(linearize(&graph, "A").unwrap_err().is_unknown_type());
}

#[test]
fn test_json_duplicate_type_rejected() {
    let err = parse_hierarchy(r#"{"types": {"O": [], "A": ["O"], "A": ["Q"]}}"#, "json")
        .unwrap_err();
    match err {
        MroError::ParseError { message, .. } => {
            assert!(message.contains("declared more than once"), "{message}");
        }
        other => panic!("expected ParseError, got {other:?}"),
    }
}

#[test]
fn test_yaml_duplicate_type_rejected() {
    let err = parse_hierarchy("types:\n  O: []\n  A: [O]\n  A: [Q]\n", "yaml").unwrap_err();
    assert!(matches!(err, MroError::ParseError { .. }), "{err:?}");
}

#[test]
fn test_duplicate_type_in_file_rejected() {
    let file = write_temp(".yaml", "types:\n  O: []\n  O: [A]\n  A: []\n");
    assert!(matches!(
        load_hierarchy(file.path()).unwrap_err(),
        MroError::ParseError { .. }
    ));
}
