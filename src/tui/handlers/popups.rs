//! Popup input handlers (Component trait pattern)

use anyhow::Result;
use crossterm::event;

use crate::tui::component::Component;
use crate::tui::context_menu::MenuEvent;
use crate::tui::{ActiveComponent, AppState, PopupType};

use super::action_handlers::menu::apply_menu_action;

/// Handle input for the active popup
pub fn handle_popup_input(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    match state.active_popup {
        Some(PopupType::ContextMenu) => handle_context_menu_input(state, key),
        None => Ok(false),
    }
}

/// Handle input for the context menu
fn handle_context_menu_input(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    // Extract the component from active_component
    let Some(ActiveComponent::ContextMenu(mut menu)) = state.active_component.take() else {
        state.set_error("Context menu component not found");
        state.active_popup = None;
        return Ok(false);
    };

    match menu.handle_input(key) {
        None => {
            // Still open
            state.active_component = Some(ActiveComponent::ContextMenu(menu));
        }
        Some(MenuEvent::Cancelled) => {
            state.close_component();
            state.set_status("Menu closed");
        }
        Some(MenuEvent::Selected(action)) => {
            state.close_component();
            match menu.target() {
                Some(target) => apply_menu_action(state, target, action),
                None => state.set_status(format!("Nothing to do: {}", action.label())),
            }
        }
    }

    Ok(false)
}
