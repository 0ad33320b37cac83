//! Service layer for ribbon logic.
//!
//! Layout math, editing commands and context-menu rules live here so the
//! TUI and the CLI share one implementation.

pub mod context_actions;
pub mod ids;
pub mod migrate;
pub mod ribbon_editor;
pub mod ribbon_layout;

// Re-export commonly used types and functions
pub use context_actions::{available_actions, MenuAction};
pub use migrate::{is_column_tracked, migrate_groups_to_column_tracking};
pub use ribbon_editor::{CommandOutcome, RibbonCommand, RibbonEditor};
pub use ribbon_layout::{resolve_column, GridCell, GroupLayout};
