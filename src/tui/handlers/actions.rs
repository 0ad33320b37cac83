//! Action dispatch and command application.

use anyhow::Result;

use crate::services::{CommandOutcome, RibbonCommand};
use crate::shortcuts::Action;
use crate::tui::AppState;

use super::action_handlers::{dropdown, editing, menu, navigation};

/// Apply a ribbon command and report it in the status bar as `label`.
pub fn apply_command(state: &mut AppState, command: &RibbonCommand, label: &str) -> CommandOutcome {
    let outcome = state.editor.apply(command);
    match outcome {
        CommandOutcome::Applied => state.set_status(format!("✓ {label}")),
        CommandOutcome::Ignored => state.set_status(format!("Nothing to do: {label}")),
    }
    outcome
}

/// Dispatch action to appropriate handler
pub fn dispatch_action(state: &mut AppState, action: Action) -> Result<bool> {
    match action {
        // Navigation
        Action::PreviousGroup => navigation::handle_previous_group(state),
        Action::NextGroup => navigation::handle_next_group(state),
        Action::PreviousComponent => navigation::handle_previous_component(state),
        Action::NextComponent => navigation::handle_next_component(state),

        // Tabs
        Action::NextTab => navigation::handle_next_tab(state),
        Action::PreviousTab => navigation::handle_previous_tab(state),

        // Editing
        Action::OpenContextMenu => menu::handle_open_context_menu(state),
        Action::OpenRibbonMenu => menu::handle_open_ribbon_menu(state),
        Action::Rename => editing::handle_start_rename(state),
        Action::ToggleDropdown => dropdown::handle_toggle_dropdown(state),

        Action::Cancel => {
            if state.focus.take().is_some() {
                state.set_status("Focus cleared");
            }
            Ok(false)
        }
        Action::Quit => {
            state.should_quit = true;
            Ok(true)
        }
    }
}
