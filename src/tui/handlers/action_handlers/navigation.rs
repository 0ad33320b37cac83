// Navigation action handlers

use anyhow::Result;

use crate::services::GroupLayout;
use crate::tui::{AppState, RibbonFocus};

/// Handle focus previous group action
pub fn handle_previous_group(state: &mut AppState) -> Result<bool> {
    let count = state.editor.groups().len();
    if count == 0 {
        return Ok(false);
    }
    let group = match state.valid_focus() {
        Some(focus) => focus.group.checked_sub(1).unwrap_or(count - 1),
        None => count - 1,
    };
    state.focus = Some(RibbonFocus::group(group));
    state.clear_error();
    Ok(false)
}

/// Handle focus next group action
pub fn handle_next_group(state: &mut AppState) -> Result<bool> {
    let count = state.editor.groups().len();
    if count == 0 {
        return Ok(false);
    }
    let group = state
        .valid_focus()
        .map_or(0, |focus| (focus.group + 1) % count);
    state.focus = Some(RibbonFocus::group(group));
    state.clear_error();
    Ok(false)
}

/// Component indices of `group` in grid emission order.
fn focus_order(state: &AppState, group: usize) -> Vec<usize> {
    state
        .editor
        .group(group)
        .map(|group| GroupLayout::compute(group).focus_order())
        .unwrap_or_default()
}

/// Handle focus next component action
///
/// From the group itself this enters its first component; the last
/// component keeps focus.
pub fn handle_next_component(state: &mut AppState) -> Result<bool> {
    let Some(focus) = state.valid_focus() else {
        if !state.editor.groups().is_empty() {
            state.focus = Some(RibbonFocus::group(0));
        }
        return Ok(false);
    };

    let order = focus_order(state, focus.group);
    let next = match focus.component {
        None => order.first().copied(),
        Some(current) => order
            .iter()
            .position(|&index| index == current)
            .and_then(|position| order.get(position + 1))
            .copied(),
    };

    if let Some(component) = next {
        state.focus = Some(RibbonFocus::component(focus.group, component));
    }
    Ok(false)
}

/// Handle focus previous component action
///
/// Up from the first component returns focus to the group.
pub fn handle_previous_component(state: &mut AppState) -> Result<bool> {
    let Some(RibbonFocus {
        group,
        component: Some(current),
    }) = state.valid_focus()
    else {
        return Ok(false);
    };

    let order = focus_order(state, group);
    let previous = order
        .iter()
        .position(|&index| index == current)
        .and_then(|position| position.checked_sub(1))
        .and_then(|position| order.get(position))
        .copied();

    state.focus = Some(match previous {
        Some(component) => RibbonFocus::component(group, component),
        None => RibbonFocus::group(group),
    });
    Ok(false)
}

/// Handle next tab action
pub fn handle_next_tab(state: &mut AppState) -> Result<bool> {
    state.selected_tab = state.selected_tab.next();
    state.set_status(format!("{} tab", state.selected_tab));
    Ok(false)
}

/// Handle previous tab action
pub fn handle_previous_tab(state: &mut AppState) -> Result<bool> {
    state.selected_tab = state.selected_tab.previous();
    state.set_status(format!("{} tab", state.selected_tab));
    Ok(false)
}
