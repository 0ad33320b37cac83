//! Layout command: print the resolved grid of every group.

use crate::cli::common::{CliError, CliResult};
use crate::models::{starter_ribbon, RibbonGroup};
use crate::parser::{parse_ribbon_json, validate_ribbon};
use crate::services::{GridCell, GroupLayout};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;
use tracing::debug;

/// Print each group's columns, rows and grid cells
#[derive(Debug, Clone, Args)]
pub struct LayoutArgs {
    /// Ribbon JSON file (defaults to the starter ribbon)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Layout of one group in the JSON report.
#[derive(Debug, Clone, Serialize)]
pub struct GroupReport {
    /// Group id
    pub id: String,
    /// Group label
    pub label: String,
    /// Column count
    pub columns: usize,
    /// Row count
    pub rows_count: usize,
    /// Emitted cells, row-major
    pub cells: Vec<GridCell>,
}

/// JSON response of the layout command.
#[derive(Debug, Clone, Serialize)]
pub struct LayoutResponse {
    /// One entry per group, in ribbon order
    pub groups: Vec<GroupReport>,
}

impl LayoutResponse {
    /// Builds the report for `groups`.
    #[must_use]
    pub fn build(groups: &[RibbonGroup]) -> Self {
        let groups = groups
            .iter()
            .map(|group| {
                let layout = GroupLayout::compute(group);
                GroupReport {
                    id: group.id.clone(),
                    label: group.label.clone(),
                    columns: layout.columns,
                    rows_count: layout.rows_count,
                    cells: layout.cells(),
                }
            })
            .collect();
        Self { groups }
    }
}

impl LayoutArgs {
    /// Execute the layout command
    pub fn execute(&self) -> CliResult<()> {
        let groups = match &self.file {
            Some(path) => parse_ribbon_json(path)
                .map_err(|e| CliError::io(format!("Failed to load ribbon: {e:#}")))?,
            None => starter_ribbon(),
        };

        let problems = validate_ribbon(&groups);
        if !problems.is_empty() {
            return Err(CliError::validation(format!(
                "Invalid ribbon:\n  {}",
                problems.join("\n  ")
            )));
        }

        debug!(groups = groups.len(), "Computing ribbon layout");
        let response = LayoutResponse::build(&groups);

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&response)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else {
            print!("{}", format_text(&groups, &response));
        }

        Ok(())
    }
}

/// Human-readable report.
fn format_text(groups: &[RibbonGroup], response: &LayoutResponse) -> String {
    let mut out = String::new();

    for (group, report) in groups.iter().zip(&response.groups) {
        out.push_str(&format!(
            "{} ({} columns, {} rows)\n",
            report.label, report.columns, report.rows_count
        ));
        if report.cells.is_empty() {
            out.push_str("  (no components)\n");
            continue;
        }
        for cell in &report.cells {
            let place = format!("  row {}, col {}: ", cell.row(), cell.column());
            let Some(component) = cell.component_index().and_then(|i| group.component(i)) else {
                out.push_str(&format!("{place}-\n"));
                continue;
            };
            out.push_str(&place);
            out.push_str(&component.label);
            if component.is_dropdown() {
                out.push_str(&format!(" [dropdown: {} items]", component.items().len()));
            }
            if cell.row_span() > 1 {
                out.push_str(&format!(" (spans {} rows)", cell.row_span()));
            }
            out.push('\n');
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RibbonComponent;

    fn clipboard() -> Vec<RibbonGroup> {
        vec![RibbonGroup::new("g", "Clipboard")
            .with_columns(2)
            .with_component(RibbonComponent::new("a", "Paste"))
            .with_component(RibbonComponent::new("b", "Cut"))
            .with_component(RibbonComponent::new("c", "Copy"))]
    }

    #[test]
    fn test_report_counts() {
        let response = LayoutResponse::build(&clipboard());
        let group = &response.groups[0];
        assert_eq!(group.columns, 2);
        assert_eq!(group.rows_count, 2);
        assert_eq!(group.cells.len(), 3);
    }

    #[test]
    fn test_text_report_marks_spans() {
        let groups = clipboard();
        let text = format_text(&groups, &LayoutResponse::build(&groups));
        assert!(text.starts_with("Clipboard (2 columns, 2 rows)\n"));
        assert!(text.contains("row 0, col 0: Paste\n"));
        assert!(text.contains("row 0, col 1: Cut (spans 2 rows)\n"));
        assert!(text.contains("row 1, col 0: Copy\n"));
    }

    #[test]
    fn test_text_report_for_empty_group() {
        let groups = vec![RibbonGroup::new("g", "Empty")];
        let text = format_text(&groups, &LayoutResponse::build(&groups));
        assert_eq!(text, "Empty (1 columns, 1 rows)\n  (no components)\n");
    }
}
