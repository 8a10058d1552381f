//! `mro` CLI application.

use super::types::{MroCli, MroCommand, OutputFormat};
use crate::config::load_config_or_default;
use crate::inheritance::{LinearizationContext, Linearizer};
use crate::loader::load_hierarchy;
use anyhow::{Context, Result};
use clap::Parser;
use indexmap::IndexMap;
use mro_core::{HierarchyGraph, Linearization, TypeId};
use std::fmt::Write as FmtWrite;
use std::path::Path;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

/// Main `mro` CLI application
pub struct MroApp {
    cli: MroCli,
}

impl MroApp {
    /// Create the application from command line arguments
    #[must_use]
    pub fn from_args() -> Self {
        Self::new(MroCli::parse())
    }

    #[must_use]
    pub fn new(cli: MroCli) -> Self {
        Self { cli }
    }

    /// Run the command and print its output
    ///
    /// # Errors
    ///
    /// Returns error if configuration or hierarchy loading fails, or if any
    /// requested linearization fails.
    pub fn run(self) -> Result<()> {
        self.init_logging();
        info!("Starting mro");

        match self.execute() {
            Ok(output) => {
                println!("{}", output.trim_end());
                Ok(())
            }
            Err(err) => {
                error!("Command failed: {err:#}");
                if !self.cli.quiet {
                    eprintln!("Error: {err:#}");
                }
                Err(err)
            }
        }
    }

    /// Configure tracing subscriber based on CLI flags; `RUST_LOG` takes precedence
    fn init_logging(&self) {
        let level = if self.cli.quiet {
            "error"
        } else if self.cli.verbose {
            "debug"
        } else {
            "info"
        };
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
        if let Err(e) = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .try_init()
        {
            // An embedding process already installed a subscriber
            debug!("Keeping existing tracing subscriber: {e}");
        }
    }

    /// Execute the command, returning the rendered output
    ///
    /// # Errors
    ///
    /// Same as [`MroApp::run`].
    pub fn execute(&self) -> Result<String> {
        let config = load_config_or_default(self.cli.config.as_deref())
            .context("Failed to load configuration")?;

        match &self.cli.command {
            MroCommand::Linearize { hierarchy, types } => {
                let graph = Self::load(hierarchy)?;
                let linearizer = Linearizer::with_config(&graph, &config.linearizer);
                let mut ctx = LinearizationContext::new();
                let mut results = IndexMap::new();
                for name in types {
                    let order = linearizer
                        .linearize_in(&mut ctx, name)
                        .with_context(|| format!("Cannot linearize '{name}'"))?;
                    results.insert(TypeId::from(name.as_str()), order);
                }
                self.render(&results)
            }
            MroCommand::Check { hierarchy } => {
                let graph = Self::load(hierarchy)?;
                let results = Linearizer::with_config(&graph, &config.linearizer)
                    .linearize_all()
                    .with_context(|| format!("Hierarchy {} is invalid", hierarchy.display()))?;
                let mut output = self.render(&results)?;
                if self.cli.format == OutputFormat::Pretty {
                    write!(output, "{} types linearized", results.len())?;
                }
                Ok(output)
            }
            MroCommand::Hypothetical {
                hierarchy,
                type_name,
                bases,
            } => {
                let graph = Self::load(hierarchy)?;
                let order = Linearizer::with_config(&graph, &config.linearizer)
                    .linearize_hypothetical(type_name.as_str(), bases.iter().map(String::as_str))
                    .with_context(|| format!("Cannot linearize hypothetical '{type_name}'"))?;
                let mut results = IndexMap::new();
                results.insert(TypeId::from(type_name.as_str()), order);
                self.render(&results)
            }
        }
    }

    fn load(path: &Path) -> Result<HierarchyGraph> {
        load_hierarchy(path)
            .with_context(|| format!("Failed to load hierarchy from {}", path.display()))
    }

    fn render(&self, results: &IndexMap<TypeId, Linearization>) -> Result<String> {
        let output = match self.cli.format {
            OutputFormat::Pretty => {
                let mut out = String::new();
                for (id, order) in results {
                    writeln!(out, "{id}: {order}")?;
                }
                out
            }
            OutputFormat::Json => serde_json::to_string_pretty(results)?,
            OutputFormat::Yaml => serde_yaml::to_string(results)?,
        };
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_tolerates_existing_subscriber() {
        let cli = MroCli::try_parse_from(["mro", "--quiet", "check", "-H", "h.yaml"])
            .expect("valid arguments");
        let app = MroApp::new(cli);
        app.init_logging();
        // Second install fails inside try_init and is only logged
        app.init_logging();
    }
}
