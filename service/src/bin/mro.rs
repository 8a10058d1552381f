//! `mro` command-line interface
//!
//! Prints C3 method resolution orders for hierarchies described in YAML or
//! JSON files.

use mro_service::cli_enhanced;
use std::process::ExitCode;

fn main() -> ExitCode {
    match cli_enhanced::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}
