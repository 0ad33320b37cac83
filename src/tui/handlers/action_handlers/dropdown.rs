// Dropdown action handlers

use anyhow::Result;

use crate::tui::{AppState, DropdownMenu, RibbonFocus};

/// Handle toggling the focused component's dropdown
pub fn handle_toggle_dropdown(state: &mut AppState) -> Result<bool> {
    let Some(RibbonFocus {
        group,
        component: Some(component),
    }) = state.valid_focus()
    else {
        state.set_status("Focus a dropdown component first");
        return Ok(false);
    };

    let Some((label, is_dropdown)) = state
        .editor
        .component(group, component)
        .map(|entry| (entry.label.clone(), entry.is_dropdown()))
    else {
        return Ok(false);
    };

    if !is_dropdown {
        state.set_status(format!("{label} has no dropdown"));
        return Ok(false);
    }

    let already_open = state
        .dropdown
        .as_ref()
        .is_some_and(|open| open.group() == group && open.component() == component);

    if already_open {
        state.dropdown = None;
        state.set_status("Dropdown closed");
    } else {
        state.dropdown = Some(DropdownMenu::new(group, component));
        state.set_status(format!("{label} dropdown"));
    }
    Ok(false)
}
