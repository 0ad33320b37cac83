//! Status bar widget for displaying status messages and help

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::services::GroupLayout;
use crate::shortcuts::Action;

use super::{AppState, Theme};

/// Input context the help line describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelpContext {
    /// Ribbon navigation
    Main,
    /// Context menu open
    ContextMenu,
    /// Dropdown list open
    Dropdown,
    /// Inline label editor active
    Editing,
}

impl HelpContext {
    /// Context for the current state, in input routing order.
    #[must_use]
    pub fn current(state: &AppState) -> Self {
        if state.editing.is_some() {
            Self::Editing
        } else if state.active_popup.is_some() {
            Self::ContextMenu
        } else if state.dropdown.is_some() {
            Self::Dropdown
        } else {
            Self::Main
        }
    }

    /// (keys, description) pairs shown in the help line.
    #[must_use]
    pub fn hints(self) -> Vec<(&'static str, &'static str)> {
        match self {
            Self::Main => vec![
                ("←→", Action::NextGroup.description()),
                ("↑↓", Action::NextComponent.description()),
                ("Tab", Action::NextTab.description()),
                ("m", Action::OpenContextMenu.description()),
                ("M", Action::OpenRibbonMenu.description()),
                ("r", Action::Rename.description()),
                ("Enter", Action::ToggleDropdown.description()),
                ("q", Action::Quit.description()),
            ],
            Self::ContextMenu => vec![("↑↓", "choose"), ("Enter", "apply"), ("Esc", "close")],
            Self::Dropdown => vec![
                ("↑↓", "item"),
                ("Enter", "rename/add"),
                ("a", "add item"),
                ("Esc", "close"),
            ],
            Self::Editing => vec![("Enter", "commit"), ("Esc", "cancel"), ("Ctrl+U", "clear")],
        }
    }
}

/// Status bar widget
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar with contextual help
    pub fn render(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let first_line = if let Some(error) = &state.error_message {
            Line::from(vec![
                Span::styled("ERROR: ", Style::default().fg(theme.error)),
                Span::raw(error.clone()),
            ])
        } else if !state.status_message.is_empty() {
            Line::from(state.status_message.clone())
        } else {
            Self::focus_line(state, theme)
        };

        let status = Paragraph::new(vec![first_line, Self::help_line(state, theme)])
            .style(Style::default().fg(theme.text).bg(theme.background))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Status ")
                    .style(Style::default().bg(theme.background)),
            );

        f.render_widget(status, area);
    }

    /// Describe what has focus
    fn focus_line(state: &AppState, theme: &Theme) -> Line<'static> {
        let muted = Style::default().fg(theme.text_muted);
        let Some(focus) = state.focus else {
            return Line::from(Span::styled("Nothing focused", muted));
        };
        let Some(group) = state.editor.group(focus.group) else {
            return Line::from(Span::styled("Nothing focused", muted));
        };

        let label_style = Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD);

        match focus.component.and_then(|index| Some((index, group.component(index)?))) {
            Some((index, component)) => {
                let layout = GroupLayout::compute(group);
                let column = layout.column_of(index).unwrap_or(0) + 1;
                let row = layout.row_of(index).unwrap_or(0) + 1;
                let kind = if component.is_dropdown() {
                    format!("dropdown, {} items", component.items().len())
                } else {
                    "button".to_string()
                };
                Line::from(vec![
                    Span::styled(component.label.clone(), label_style),
                    Span::styled(
                        format!(" in {}: column {column}, row {row} ({kind})", group.label),
                        muted,
                    ),
                ])
            }
            None => Line::from(vec![
                Span::styled(group.label.clone(), label_style),
                Span::styled(
                    format!(
                        ": {} columns, {} components",
                        group.column_count(),
                        group.components.len()
                    ),
                    muted,
                ),
            ]),
        }
    }

    /// Help line for the current context
    fn help_line(state: &AppState, theme: &Theme) -> Line<'static> {
        let mut spans: Vec<Span<'static>> = vec![Span::styled(
            "Help: ",
            Style::default().fg(theme.primary),
        )];

        for (i, (key, action)) in HelpContext::current(state).hints().into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" | "));
            }
            spans.push(Span::styled(key, Style::default().fg(theme.accent)));
            spans.push(Span::raw(": "));
            spans.push(Span::raw(action));
        }

        Line::from(spans)
    }
}
