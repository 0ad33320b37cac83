//! Shared test fixtures for ribbon and CLI tests.
#![allow(dead_code)] // Not every test file uses every fixture

use macrohard::config::{Config, ThemeMode};
use macrohard::models::{RibbonComponent, RibbonGroup, RibbonSubcomponent};
use macrohard::parser::to_json_string;
use macrohard::tui::AppState;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Legacy-shaped ribbon: no component carries an explicit column.
///
/// - "Clipboard": 2 columns, [Paste, Cut, Copy]
/// - "Font": 1 column, [Calibri (dropdown: Arial, Consolas)]
/// - "Empty": no components
pub fn test_ribbon_legacy() -> Vec<RibbonGroup> {
    vec![
        RibbonGroup::new("group-clipboard", "Clipboard")
            .with_columns(2)
            .with_component(RibbonComponent::new("comp-paste", "Paste"))
            .with_component(RibbonComponent::new("comp-cut", "Cut"))
            .with_component(RibbonComponent::new("comp-copy", "Copy")),
        RibbonGroup::new("group-font", "Font").with_component(
            RibbonComponent::new("comp-font", "Calibri").with_subcomponents(vec![
                RibbonSubcomponent::new("sub-arial", "Arial"),
                RibbonSubcomponent::new("sub-consolas", "Consolas"),
            ]),
        ),
        RibbonGroup::new("group-empty", "Empty"),
    ]
}

/// Three-column group with seven legacy components.
pub fn test_ribbon_wide() -> Vec<RibbonGroup> {
    let mut group = RibbonGroup::new("group-wide", "Wide").with_columns(3);
    for i in 0..7 {
        group = group.with_component(RibbonComponent::new(format!("comp-{i}"), format!("C{i}")));
    }
    vec![group]
}

/// Writes `groups` as a ribbon JSON file in a fresh temp directory.
///
/// Keep the returned `TempDir` alive for as long as the file is needed.
pub fn create_temp_ribbon_file(groups: &[RibbonGroup]) -> (PathBuf, TempDir) {
    let json = to_json_string(groups).expect("Failed to serialize ribbon");
    create_temp_file("ribbon.json", &json)
}

/// Writes raw `content` to `name` in a fresh temp directory.
pub fn create_temp_file(name: &str, content: &str) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join(name);
    fs::write(&path, content).expect("Failed to write temp file");
    (path, temp_dir)
}

/// Application state over `groups` with a fixed dark theme.
pub fn test_state(groups: &[RibbonGroup]) -> AppState {
    let mut config = Config::new();
    config.ui.theme_mode = ThemeMode::Dark;
    AppState::new(groups, None, config)
}
