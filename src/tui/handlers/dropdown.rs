//! Open dropdown input handler (ContextualComponent pattern)

use anyhow::Result;
use crossterm::event;

use crate::services::RibbonCommand;
use crate::tui::component::ContextualComponent;
use crate::tui::dropdown::DropdownEvent;
use crate::tui::{AppState, EditTarget, LabelEditor};

/// Handle input while a dropdown list is open
pub fn handle_dropdown_input(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    let Some(dropdown) = state.dropdown.as_mut() else {
        return Ok(false);
    };
    let (group, component) = (dropdown.group(), dropdown.component());

    let Some(entry) = state.editor.component(group, component) else {
        // Owner vanished or stopped being a dropdown
        state.dropdown = None;
        return Ok(false);
    };

    let Some(event) = dropdown.handle_input(key, entry) else {
        return Ok(false);
    };

    match event {
        DropdownEvent::Closed => {
            state.dropdown = None;
            state.set_status("Dropdown closed");
        }
        DropdownEvent::AddItem => {
            let command = RibbonCommand::AddSubcomponent { group, component };
            let outcome = super::apply_command(state, &command, "Add item");
            if outcome.is_applied() {
                let count = state
                    .editor
                    .component(group, component)
                    .map_or(0, |entry| entry.items().len());
                if let Some(dropdown) = state.dropdown.as_mut() {
                    dropdown.select(count.saturating_sub(1));
                }
            }
        }
        DropdownEvent::Rename(subcomponent) => {
            let current = state
                .editor
                .component(group, component)
                .and_then(|entry| entry.items().get(subcomponent))
                .map(|item| item.label.clone());
            if let Some(current) = current {
                state.editing = Some(LabelEditor::new(
                    EditTarget::Subcomponent {
                        group,
                        component,
                        subcomponent,
                    },
                    &current,
                ));
                state.set_status("Renaming item - Enter to commit, Esc to cancel");
            }
        }
    }

    Ok(false)
}
