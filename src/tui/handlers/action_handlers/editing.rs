// Rename action handlers

use anyhow::Result;

use crate::tui::{AppState, EditTarget, LabelEditor, RibbonFocus};

/// Handle rename of the focused group or component
pub fn handle_start_rename(state: &mut AppState) -> Result<bool> {
    let editor = match state.valid_focus() {
        None => None,
        Some(RibbonFocus {
            group,
            component: None,
        }) => state
            .editor
            .group(group)
            .map(|g| LabelEditor::new(EditTarget::Group { group }, &g.label)),
        Some(RibbonFocus {
            group,
            component: Some(component),
        }) => state.editor.component(group, component).map(|c| {
            LabelEditor::new(EditTarget::Component { group, component }, &c.label)
        }),
    };

    match editor {
        Some(editor) => {
            state.editing = Some(editor);
            state.set_status("Renaming - Enter to commit, Esc to cancel");
        }
        None => state.set_status("Nothing to rename"),
    }
    Ok(false)
}
