//! Configuration loading
//!
//! Configuration is read from YAML files with environment variable
//! substitution support and validated before use.

use mro_core::{MroConfig, MroError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::env;
use std::path::Path;
use tracing::debug;

/// `${VAR}` or `${VAR:-default}`
static ENV_VAR_PATTERN: Lazy<std::result::Result<Regex, regex::Error>> =
    Lazy::new(|| Regex::new(r"\$\{([^}:]+)(?::(-)?([^}]*))?\}"));

/// Load configuration from a `YAML` file with environment variable substitution
///
/// # Errors
///
/// Returns `MroError::IoError` if the file cannot be read and
/// `MroError::ConfigError` if the YAML cannot be parsed or a value is out of range.
pub fn load_config(path: &Path) -> Result<MroConfig> {
    let contents = std::fs::read_to_string(path)?;
    let config = parse_config(&contents)?;
    debug!("Loaded configuration from {}", path.display());
    Ok(config)
}

/// Parse and validate configuration from `YAML` text
///
/// # Errors
///
/// Returns `MroError::ConfigError` if the YAML cannot be parsed or a value is out of range.
pub fn parse_config(contents: &str) -> Result<MroConfig> {
    let substituted = substitute_env_vars(contents)?;
    // An empty document deserializes to unit, not a mapping
    let config: MroConfig = if substituted.trim().is_empty() {
        MroConfig::default()
    } else {
        serde_yaml::from_str(&substituted)
            .map_err(|e| MroError::config(format!("Failed to parse YAML config: {e}")))?
    };
    config.validate()?;
    Ok(config)
}

/// Load the file at `path`, or the defaults when no path is given
///
/// # Errors
///
/// Same as [`load_config`].
pub fn load_config_or_default(path: Option<&Path>) -> Result<MroConfig> {
    match path {
        Some(path) => load_config(path),
        None => Ok(MroConfig::default()),
    }
}

/// Substitute environment variables in the format `${VAR:-default}`
fn substitute_env_vars(content: &str) -> Result<String> {
    let re = Lazy::force(&ENV_VAR_PATTERN)
        .as_ref()
        .map_err(|e| MroError::config(format!("Invalid substitution pattern: {e}")))?;

    Ok(re
        .replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            let default_value = caps.get(3).map_or("", |m| m.as_str());
            env::var(var_name).unwrap_or_else(|_| default_value.to_string())
        })
        .to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_used_for_unset_variable() -> Result<()> {
        let text = "cache:\n  max_entries: ${MRO_TEST_SURELY_UNSET_VAR:-42}\n";
        let config = parse_config(text)?;
        assert_eq!(config.cache.max_entries, 42);
        Ok(())
    }

    #[test]
    fn test_empty_document_gives_defaults() -> Result<()> {
        assert_eq!(parse_config("")?, MroConfig::default());
        Ok(())
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = parse_config("linearizer:\n  max_depth: 0\n").unwrap_err();
        assert!(matches!(err, MroError::ConfigError(_)));
    }

    #[test]
    fn test_missing_path_uses_defaults() -> Result<()> {
        assert_eq!(load_config_or_default(None)?, MroConfig::default());
        Ok(())
    }
}
