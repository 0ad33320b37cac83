//! CLI command handlers for MACROHARD.
//!
//! Headless access to the ribbon layout engine for scripting and tests.

pub mod common;
pub mod layout;
pub mod migrate;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult, ExitCode};
pub use layout::LayoutArgs;
pub use migrate::MigrateArgs;
