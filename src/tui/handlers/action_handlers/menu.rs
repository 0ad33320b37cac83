// Context menu action handlers

use anyhow::Result;

use crate::models::{ContextMenuPosition, MenuTarget};
use crate::services::{available_actions, MenuAction, RibbonCommand};
use crate::tui::{ribbon_widget, AppState, ContextMenu, RibbonFocus};

/// Screen anchor for a menu on `target`: just below the element.
fn menu_position(state: &AppState, target: MenuTarget) -> ContextMenuPosition {
    let groups = state.editor.groups();
    let ribbon = state.screen_areas().ribbon;

    match target {
        MenuTarget::Ribbon => ContextMenuPosition::ribbon(ribbon.x + 1, ribbon.bottom()),
        MenuTarget::Group(group) => {
            let rect = ribbon_widget::group_areas(groups, ribbon)
                .get(group)
                .copied()
                .unwrap_or(ribbon);
            ContextMenuPosition::group(rect.x + 1, rect.bottom(), group)
        }
        MenuTarget::Component { group, component } => {
            let rect = ribbon_widget::component_area(groups, ribbon, group, component)
                .unwrap_or(ribbon);
            ContextMenuPosition::component(rect.x, rect.bottom(), group, component)
        }
    }
}

fn open_menu(state: &mut AppState, target: MenuTarget) -> Result<bool> {
    let actions = available_actions(state.editor.groups(), target);
    if actions.is_empty() {
        state.set_status("No actions here");
        return Ok(false);
    }

    let position = menu_position(state, target);
    state.open_context_menu(ContextMenu::new(position, actions));
    state.set_status("Select an action");
    Ok(false)
}

/// Handle context menu on the focused element
pub fn handle_open_context_menu(state: &mut AppState) -> Result<bool> {
    let target = state.focus_target();
    open_menu(state, target)
}

/// Handle context menu on the ribbon background
pub fn handle_open_ribbon_menu(state: &mut AppState) -> Result<bool> {
    open_menu(state, MenuTarget::Ribbon)
}

/// Apply a chosen menu entry to its target and move focus to what it created.
pub fn apply_menu_action(state: &mut AppState, target: MenuTarget, action: MenuAction) {
    let Some(command) = action.command(target) else {
        state.set_status(format!("Nothing to do: {}", action.label()));
        return;
    };

    let outcome = crate::tui::handlers::apply_command(state, &command, action.label());
    if !outcome.is_applied() {
        return;
    }

    match command {
        RibbonCommand::CreateGroup { insert_after } => {
            let index = insert_after
                .map_or(state.editor.groups().len(), |after| after + 1)
                .min(state.editor.groups().len().saturating_sub(1));
            state.focus = Some(RibbonFocus::group(index));
        }
        RibbonCommand::CreateComponent {
            group,
            insert_after,
        } => {
            let len = state.editor.group(group).map_or(0, |g| g.components.len());
            let index = insert_after
                .map_or(len, |after| after + 1)
                .min(len.saturating_sub(1));
            state.focus = Some(RibbonFocus::component(group, index));
        }
        RibbonCommand::DestroyDropdown { group, component } => {
            if state
                .dropdown
                .as_ref()
                .is_some_and(|open| open.group() == group && open.component() == component)
            {
                state.dropdown = None;
            }
        }
        _ => {}
    }
}
