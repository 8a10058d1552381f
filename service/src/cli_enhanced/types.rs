//! CLI type definitions and enums

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// `mro` command-line interface
#[derive(Parser, Debug)]
#[command(name = "mro", version, about = "C3 method resolution order tools")]
pub struct MroCli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode - suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Configuration file (YAML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short = 'f', long, global = true, default_value = "pretty")]
    pub format: OutputFormat,

    /// Command to execute
    #[command(subcommand)]
    pub command: MroCommand,
}

/// Output formats for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One `Type: A -> B -> O` line per type
    Pretty,
    /// JSON object of type to order
    Json,
    /// YAML mapping of type to order
    Yaml,
}

/// `mro` subcommands
#[derive(Subcommand, Debug)]
pub enum MroCommand {
    /// Print the method resolution order of one or more types
    Linearize {
        /// Hierarchy file (.yaml, .yml or .json)
        #[arg(short = 'H', long)]
        hierarchy: PathBuf,
        /// Types to linearize
        #[arg(required = true)]
        types: Vec<String>,
    },

    /// Validate a hierarchy and linearize every type in it
    Check {
        /// Hierarchy file (.yaml, .yml or .json)
        #[arg(short = 'H', long)]
        hierarchy: PathBuf,
    },

    /// Linearize a type that is not declared in the hierarchy
    Hypothetical {
        /// Hierarchy file (.yaml, .yml or .json)
        #[arg(short = 'H', long)]
        hierarchy: PathBuf,
        /// Name of the hypothetical type
        type_name: String,
        /// Declared bases, comma separated, in order
        #[arg(short, long, value_delimiter = ',')]
        bases: Vec<String>,
    },
}
