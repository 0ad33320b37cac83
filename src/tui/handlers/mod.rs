//! Input handler modules for different TUI contexts.

pub mod action_handlers;
pub mod actions;
pub mod dropdown;
pub mod editing;
pub mod main;
pub mod popups;

// Re-export handler functions
pub use actions::{apply_command, dispatch_action};
pub use dropdown::handle_dropdown_input;
pub use editing::handle_label_editor_input;
pub use main::handle_main_input;
pub use popups::handle_popup_input;
