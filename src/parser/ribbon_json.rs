//! JSON ribbon files.

use anyhow::{Context, Result};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::models::{RibbonGroup, MAX_COLUMNS};

/// Parses a ribbon from JSON text.
///
/// Accepts both column-tracked and legacy data (components without a
/// `column`).
pub fn parse_ribbon_str(content: &str) -> Result<Vec<RibbonGroup>> {
    serde_json::from_str(content).context("Failed to parse ribbon JSON")
}

/// Reads and parses a ribbon file.
pub fn parse_ribbon_json(path: &Path) -> Result<Vec<RibbonGroup>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read ribbon file: {}", path.display()))?;
    parse_ribbon_str(&content).with_context(|| format!("Invalid ribbon file: {}", path.display()))
}

/// Serializes a ribbon as pretty-printed JSON.
pub fn to_json_string(groups: &[RibbonGroup]) -> Result<String> {
    serde_json::to_string_pretty(groups).context("Failed to serialize ribbon")
}

/// Problems that make a parsed ribbon unusable as-is.
///
/// Reports groups wider than [`MAX_COLUMNS`], explicit columns outside
/// their group and identifiers used more than once. An empty list means the ribbon is valid.
#[must_use]
pub fn validate_ribbon(groups: &[RibbonGroup]) -> Vec<String> {
    let mut problems = Vec::new();
    let mut seen = HashSet::new();

    for group in groups {
        if !seen.insert(group.id.as_str()) {
            problems.push(format!("Duplicate id '{}'", group.id));
        }
        let columns = group.column_count();
        if columns > MAX_COLUMNS {
            problems.push(format!(
                "Group '{}' has {columns} columns; at most {MAX_COLUMNS} are supported",
                group.label
            ));
        }
        for component in &group.components {
            if !seen.insert(component.id.as_str()) {
                problems.push(format!("Duplicate id '{}'", component.id));
            }
            if let Some(column) = component.column.filter(|&c| c >= columns) {
                problems.push(format!(
                    "Component '{}' in group '{}' uses column {column} but the group has {columns}",
                    component.label, group.label
                ));
            }
            for item in component.items() {
                if !seen.insert(item.id.as_str()) {
                    problems.push(format!("Duplicate id '{}'", item.id));
                }
            }
        }
    }

    problems
}
