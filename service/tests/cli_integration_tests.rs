//! CLI command execution without spawning a process

use clap::Parser;
use mro_service::cli_enhanced::{MroApp, MroCli};
use std::io::Write;
use tempfile::{Builder, NamedTempFile};

fn hierarchy_file(content: &str) -> NamedTempFile {
    let mut file = Builder::new().suffix(".yaml").tempfile().expect("temp file");
    file.write_all(content.as_bytes()).expect("write hierarchy");
    file
}

fn execute(args: &[&str]) -> anyhow::Result<String> {
    let cli = MroCli::try_parse_from(std::iter::once("mro").chain(args.iter().copied()))?;
    MroApp::new(cli).execute()
}

const HIERARCHY: &str = "\
types:
  O: []
  X: [O]
  Y: [O]
  A: [X, Y]
  B: [Y, X]
";

#[test]
fn test_linearize_pretty() -> anyhow::Result<()> {
    let file = hierarchy_file(HIERARCHY);
    let path = file.path().to_str().expect("utf-8 path");
    let output = execute(&["linearize", "-H", path, "A", "B"])?;
    assert_eq!(output, "A: A -> X -> Y -> O\nB: B -> Y -> X -> O\n");
    Ok(())
}

#[test]
fn test_linearize_json() -> anyhow::Result<()> {
    let file = hierarchy_file(HIERARCHY);
    let path = file.path().to_str().expect("utf-8 path");
    let output = execute(&["--format", "json", "linearize", "-H", path, "A"])?;
    let value: serde_json::Value = serde_json::from_str(&output)?;
    assert_eq!(value["A"], serde_json::json!(["A", "X", "Y", "O"]));
    Ok(())
}

#[test]
fn test_check_summary() -> anyhow::Result<()> {
    let file = hierarchy_file(HIERARCHY);
    let path = file.path().to_str().expect("utf-8 path");
    let output = execute(&["check", "--hierarchy", path])?;
    assert!(output.ends_with("5 types linearized"));
    Ok(())
}

#[test]
fn test_hypothetical_inconsistent() {
    let file = hierarchy_file(HIERARCHY);
    let path = file.path().to_str().expect("utf-8 path");
    let err = execute(&["hypothetical", "-H", path, "C", "--bases", "B,A"]).unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("Cannot linearize hypothetical 'C'"));
    assert!(message.contains("Inconsistent hierarchy"));
}

#[test]
fn test_check_reports_cycle() {
    let file = hierarchy_file("types:\n  A: [B]\n  B: [A]\n");
    let path = file.path().to_str().expect("utf-8 path");
    let err = execute(&["check", "-H", path]).unwrap_err();
    assert!(format!("{err:#}").contains("Cyclic hierarchy"));
}
