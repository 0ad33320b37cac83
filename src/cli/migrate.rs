//! Migrate command: fill in explicit columns for legacy ribbon files.

use crate::cli::common::{CliError, CliResult};
use crate::parser::{parse_ribbon_json, to_json_string, validate_ribbon};
use crate::services::{is_column_tracked, migrate_groups_to_column_tracking};
use clap::Args;
use std::path::PathBuf;
use tracing::info;

/// Print a ribbon file with every component's column made explicit
#[derive(Debug, Clone, Args)]
pub struct MigrateArgs {
    /// Ribbon JSON file to migrate
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

impl MigrateArgs {
    /// Execute the migrate command
    pub fn execute(&self) -> CliResult<()> {
        let groups = parse_ribbon_json(&self.file)
            .map_err(|e| CliError::io(format!("Failed to load ribbon: {e:#}")))?;

        let problems = validate_ribbon(&groups);
        if !problems.is_empty() {
            return Err(CliError::validation(format!(
                "Invalid ribbon:\n  {}",
                problems.join("\n  ")
            )));
        }

        if is_column_tracked(&groups) {
            info!(file = %self.file.display(), "Ribbon already tracks columns");
        }

        let migrated = migrate_groups_to_column_tracking(&groups);
        let json = to_json_string(&migrated)
            .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
        println!("{json}");

        Ok(())
    }
}
