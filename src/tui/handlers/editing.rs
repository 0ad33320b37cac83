//! Inline label editor input handler.

use anyhow::Result;
use crossterm::event;

use crate::tui::component::Component;
use crate::tui::label_editor::EditOutcome;
use crate::tui::AppState;

/// Handle input while a label is being edited
pub fn handle_label_editor_input(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    let Some(editor) = state.editing.as_mut() else {
        return Ok(false);
    };
    let target = editor.target();

    match editor.handle_input(key) {
        None => {}
        Some(EditOutcome::Cancelled) => {
            state.editing = None;
            state.set_status("Rename cancelled");
        }
        Some(EditOutcome::Commit(label)) => {
            state.editing = None;
            let command = target.rename_command(label);
            super::apply_command(state, &command, "Rename");
        }
    }

    Ok(false)
}
