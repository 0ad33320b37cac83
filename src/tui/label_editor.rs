//! Inline label editor for groups, components and dropdown items.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame,
};

use crate::services::RibbonCommand;

use super::component::Component;
use super::Theme;

/// The label being edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditTarget {
    /// A group label
    Group {
        /// Group index
        group: usize,
    },
    /// A component label
    Component {
        /// Group index
        group: usize,
        /// Component index
        component: usize,
    },
    /// A dropdown item label
    Subcomponent {
        /// Group index
        group: usize,
        /// Component index
        component: usize,
        /// Item index
        subcomponent: usize,
    },
}

impl EditTarget {
    /// Rename command that commits `label` to this target.
    #[must_use]
    pub fn rename_command(self, label: String) -> RibbonCommand {
        match self {
            Self::Group { group } => RibbonCommand::RenameGroup { group, label },
            Self::Component { group, component } => RibbonCommand::RenameComponent {
                group,
                component,
                label,
            },
            Self::Subcomponent {
                group,
                component,
                subcomponent,
            } => RibbonCommand::RenameSubcomponent {
                group,
                component,
                subcomponent,
                label,
            },
        }
    }
}

/// Events emitted by the label editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// Enter: commit the typed text
    Commit(String),
    /// Esc: keep the old label
    Cancelled,
}

/// Single-line text input pre-filled with the current label.
#[derive(Debug, Clone)]
pub struct LabelEditor {
    target: EditTarget,
    input: String,
}

impl LabelEditor {
    /// Starts editing `target`, whose current label is `current`.
    #[must_use]
    pub fn new(target: EditTarget, current: &str) -> Self {
        Self {
            target,
            input: current.to_string(),
        }
    }

    /// What is being edited.
    #[must_use]
    pub const fn target(&self) -> EditTarget {
        self.target
    }

    /// Text typed so far.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl Component for LabelEditor {
    type Event = EditOutcome;

    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event> {
        match key.code {
            KeyCode::Enter => Some(EditOutcome::Commit(self.input.clone())),
            KeyCode::Esc => Some(EditOutcome::Cancelled),
            KeyCode::Backspace => {
                self.input.pop();
                None
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.input.clear();
                None
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.input.push(c);
                None
            }
            _ => None,
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let area = Rect::new(area.x, area.y, area.width, 1);

        // Keep the tail (and the cursor) visible in narrow cells
        let visible = usize::from(area.width.saturating_sub(1));
        let skip = self.input.chars().count().saturating_sub(visible);
        let shown: String = self.input.chars().skip(skip).collect();

        f.render_widget(Clear, area);
        let line = Line::from(vec![
            Span::styled(shown, Style::default().fg(theme.text)),
            Span::styled("█", Style::default().fg(theme.accent)),
        ]);
        f.render_widget(
            Paragraph::new(line).style(
                Style::default()
                    .bg(theme.highlight_bg)
                    .add_modifier(Modifier::BOLD),
            ),
            area,
        );
    }
}
