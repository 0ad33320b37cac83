//! Data models for the ribbon tree, context menu targets and tabs.
//!
//! Models are independent of the terminal UI and of the editing commands.

pub mod context_menu;
pub mod ribbon;
pub mod tab;

// Re-export all model types
pub use context_menu::{ContextMenuPosition, MenuTarget};
pub use ribbon::{
    starter_ribbon, RibbonComponent, RibbonGroup, RibbonSubcomponent, MAX_COLUMNS,
};
pub use tab::RibbonTab;
