//! Configuration file loading

use mro_service::prelude::*;
use std::env;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_load_config_file() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    writeln!(file, "linearizer:\n  memoize: false\n  max_depth: 64\ncache:\n  enabled: false")?;

    let config = load_config(file.path())?;
    assert!(!config.linearizer.memoize);
    assert_eq!(config.linearizer.max_depth, 64);
    assert!(!config.cache.enabled);
    assert_eq!(config.cache.max_entries, 10_000);
    Ok(())
}

#[test]
fn test_environment_substitution() -> Result<()> {
    unsafe {
        env::set_var("MRO_CONFIG_TEST_DEPTH", "16");
    }
    let mut file = NamedTempFile::new()?;
    writeln!(file, "linearizer:\n  max_depth: ${{MRO_CONFIG_TEST_DEPTH:-8}}")?;

    let config = load_config(file.path())?;
    assert_eq!(config.linearizer.max_depth, 16);

    unsafe {
        env::remove_var("MRO_CONFIG_TEST_DEPTH");
    }
    let config = load_config(file.path())?;
    assert_eq!(config.linearizer.max_depth, 8);
    Ok(())
}

#[test]
fn test_malformed_config() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    writeln!(file, "linearizer: [not, a, mapping]")?;
    assert!(matches!(load_config(file.path()), Err(MroError::ConfigError(_))));
    Ok(())
}

#[test]
fn test_config_drives_linearizer() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    writeln!(file, "linearizer:\n  max_depth: 1")?;
    let config = load_config_or_default(Some(file.path()))?;

    let graph = HierarchyGraph::new()
        .with_type("O", Vec::<&str>::new())
        .with_type("A", ["O"]);
    let err = Linearizer::with_config(&graph, &config.linearizer)
        .linearize("A")
        .unwrap_err();
    assert!(matches!(err, MroError::DepthLimitExceeded { limit: 1, .. }));
    Ok(())
}
