//! Ribbon context menu popup.
//!
//! The menu is anchored at the screen position it was opened for and lists
//! the entries available for its target. Entries of different sections are
//! separated by a rule.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::models::{ContextMenuPosition, MenuTarget};
use crate::services::MenuAction;

use super::component::Component;
use super::Theme;

/// Events emitted by the context menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    /// An entry was chosen
    Selected(MenuAction),
    /// The menu was dismissed
    Cancelled,
}

/// Context menu state.
#[derive(Debug, Clone)]
pub struct ContextMenu {
    position: ContextMenuPosition,
    actions: Vec<MenuAction>,
    selected: usize,
}

impl ContextMenu {
    /// Creates a menu at `position` offering `actions`.
    #[must_use]
    pub fn new(position: ContextMenuPosition, actions: Vec<MenuAction>) -> Self {
        Self {
            position,
            actions,
            selected: 0,
        }
    }

    /// Where the menu was opened.
    #[must_use]
    pub const fn position(&self) -> ContextMenuPosition {
        self.position
    }

    /// What the menu acts on.
    #[must_use]
    pub fn target(&self) -> Option<MenuTarget> {
        self.position.target()
    }

    /// Offered entries, in display order.
    #[must_use]
    pub fn actions(&self) -> &[MenuAction] {
        &self.actions
    }

    /// Highlighted entry.
    #[must_use]
    pub fn selected_action(&self) -> Option<MenuAction> {
        self.actions.get(self.selected).copied()
    }

    fn select_previous(&mut self) {
        if !self.actions.is_empty() {
            self.selected = self
                .selected
                .checked_sub(1)
                .unwrap_or(self.actions.len() - 1);
        }
    }

    fn select_next(&mut self) {
        if !self.actions.is_empty() {
            self.selected = (self.selected + 1) % self.actions.len();
        }
    }

    /// Menu lines, including separators.
    fn lines(&self, theme: &Theme, width: u16) -> Vec<Line<'static>> {
        let mut lines = Vec::with_capacity(self.actions.len() * 2);
        let mut previous_section = None;

        for (index, action) in self.actions.iter().enumerate() {
            if previous_section.is_some_and(|section| section != action.section()) {
                lines.push(Line::from(Span::styled(
                    "─".repeat(usize::from(width)),
                    Style::default().fg(theme.text_muted),
                )));
            }
            previous_section = Some(action.section());

            let style = if index == self.selected {
                Style::default()
                    .fg(theme.accent)
                    .bg(theme.highlight_bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.text)
            };
            lines.push(Line::from(Span::styled(format!(" {} ", action.label()), style)));
        }

        lines
    }

    /// Popup rectangle, anchored at the menu position and kept inside `bounds`.
    #[must_use]
    pub fn popup_area(&self, bounds: Rect) -> Rect {
        let label_width = self
            .actions
            .iter()
            .map(|action| action.label().chars().count())
            .max()
            .unwrap_or(0);
        let separators = self
            .actions
            .windows(2)
            .filter(|pair| pair[0].section() != pair[1].section())
            .count();

        let width = (label_width as u16 + 4).min(bounds.width);
        let height = ((self.actions.len() + separators) as u16 + 2).min(bounds.height);

        let max_x = bounds.right().saturating_sub(width);
        let max_y = bounds.bottom().saturating_sub(height);
        Rect::new(
            self.position.x.clamp(bounds.x, max_x.max(bounds.x)),
            self.position.y.clamp(bounds.y, max_y.max(bounds.y)),
            width,
            height,
        )
    }
}

impl Component for ContextMenu {
    type Event = MenuEvent;

    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event> {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => Some(MenuEvent::Cancelled),
            KeyCode::Up | KeyCode::Char('k') => {
                self.select_previous();
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.select_next();
                None
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                Some(self.selected_action().map_or(MenuEvent::Cancelled, MenuEvent::Selected))
            }
            _ => None,
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let popup = self.popup_area(area);
        f.render_widget(Clear, popup);

        let inner_width = popup.width.saturating_sub(2);
        let menu = Paragraph::new(self.lines(theme, inner_width)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.primary))
                .style(Style::default().bg(theme.surface)),
        );
        f.render_widget(menu, popup);
    }
}
