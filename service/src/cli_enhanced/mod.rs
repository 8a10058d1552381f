//! Command-line tools for hierarchy linearization.

mod app;
mod types;

pub use app::MroApp;
pub use types::{MroCli, MroCommand, OutputFormat};

/// Main entry point for the CLI
///
/// # Errors
/// Returns error if CLI execution fails.
pub fn run() -> anyhow::Result<()> {
    MroApp::from_args().run()
}
