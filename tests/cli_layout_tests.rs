//! End-to-end tests for `macrohard layout`.

use serde::Deserialize;
use std::process::Command;

mod fixtures;
use fixtures::*;

#[derive(Debug, Deserialize)]
struct Cell {
    kind: String,
    row: usize,
    column: usize,
    #[serde(default)]
    index: Option<usize>,
    #[serde(default)]
    row_span: Option<usize>,
}

#[derive(Debug, Deserialize)]
struct GroupReport {
    label: String,
    columns: usize,
    rows_count: usize,
    cells: Vec<Cell>,
}

#[derive(Debug, Deserialize)]
struct LayoutResponse {
    groups: Vec<GroupReport>,
}

/// Path to the macrohard binary (set by cargo at compile time)
fn macrohard_bin() -> &'static str {
    env!("CARGO_BIN_EXE_macrohard")
}

#[test]
fn test_layout_text_output() {
    let (path, _temp_dir) = create_temp_ribbon_file(&test_ribbon_legacy());

    let output = Command::new(macrohard_bin())
        .args(["layout", path.to_str().unwrap()])
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Clipboard (2 columns, 2 rows)"));
    assert!(stdout.contains("row 0, col 1: Cut (spans 2 rows)"));
    assert!(stdout.contains("Calibri [dropdown: 2 items]"));
    assert!(stdout.contains("Empty (1 columns, 1 rows)"));
}

#[test]
fn test_layout_json_output() {
    let (path, _temp_dir) = create_temp_ribbon_file(&test_ribbon_wide());

    let output = Command::new(macrohard_bin())
        .args(["layout", path.to_str().unwrap(), "--json"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let response: LayoutResponse =
        serde_json::from_slice(&output.stdout).expect("Output should be valid JSON");

    let group = &response.groups[0];
    assert_eq!(group.label, "Wide");
    assert_eq!(group.columns, 3);
    assert_eq!(group.rows_count, 3);

    // 7 components in 3 columns leave two placeholders on the last row
    let placeholders = group.cells.iter().filter(|c| c.kind == "placeholder").count();
    assert_eq!(placeholders, 2);
    let last = group
        .cells
        .iter()
        .find(|c| c.index == Some(6))
        .expect("component 6 emitted");
    assert_eq!((last.row, last.column, last.row_span), (2, 0, Some(1)));
}

#[test]
fn test_layout_defaults_to_starter_ribbon() {
    let output = Command::new(macrohard_bin())
        .args(["layout"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Clipboard"));
    assert!(stdout.contains("Font"));
}

#[test]
fn test_layout_missing_file_is_io_error() {
    let output = Command::new(macrohard_bin())
        .args(["layout", "/nonexistent/ribbon.json"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to load ribbon"));
}

#[test]
fn test_layout_invalid_json_is_io_error() {
    let (path, _temp_dir) = create_temp_file("ribbon.json", "{ not json");

    let output = Command::new(macrohard_bin())
        .args(["layout", path.to_str().unwrap()])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_layout_column_out_of_range_is_validation_error() {
    let (path, _temp_dir) = create_temp_file(
        "ribbon.json",
        r#"[{ "id": "g", "label": "G", "columns": 2, "components": [
            { "id": "a", "label": "A", "column": 5 }
        ]}]"#,
    );

    let output = Command::new(macrohard_bin())
        .args(["layout", path.to_str().unwrap()])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("column 5"));
}

#[test]
fn test_layout_oversized_group_is_validation_error() {
    let (path, _temp_dir) = create_temp_file(
        "ribbon.json",
        r#"[{ "id": "g", "label": "Huge", "columns": 1152921504606846976, "components": [
            { "id": "a", "label": "A" }
        ]}]"#,
    );

    let output = Command::new(macrohard_bin())
        .args(["layout", path.to_str().unwrap()])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Group 'Huge' has"));
}
