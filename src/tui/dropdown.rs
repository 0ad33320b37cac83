//! Dropdown item list shown under a dropdown component.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::models::RibbonComponent;

use super::component::ContextualComponent;
use super::Theme;

/// Label of the trailing entry that appends an item.
pub const ADD_ITEM_LABEL: &str = "+ Add item";

/// Events emitted by the dropdown list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropdownEvent {
    /// Append a new item
    AddItem,
    /// Rename the item at this index
    Rename(usize),
    /// Close the list
    Closed,
}

/// The open dropdown. At most one exists at a time.
#[derive(Debug, Clone)]
pub struct DropdownMenu {
    group: usize,
    component: usize,
    selected: usize,
}

impl DropdownMenu {
    /// Opens the list of the component at (`group`, `component`).
    #[must_use]
    pub const fn new(group: usize, component: usize) -> Self {
        Self {
            group,
            component,
            selected: 0,
        }
    }

    /// Group of the owning component.
    #[must_use]
    pub const fn group(&self) -> usize {
        self.group
    }

    /// Index of the owning component.
    #[must_use]
    pub const fn component(&self) -> usize {
        self.component
    }

    /// Highlighted row (`items.len()` is the add entry).
    #[must_use]
    pub const fn selected(&self) -> usize {
        self.selected
    }

    /// Highlights the row at `index`.
    pub fn select(&mut self, index: usize) {
        self.selected = index;
    }

    /// Popup rectangle below `anchor`, kept inside `bounds`.
    #[must_use]
    pub fn popup_area(anchor: Rect, bounds: Rect, component: &RibbonComponent) -> Rect {
        let widest = component
            .items()
            .iter()
            .map(|item| item.label.chars().count())
            .chain(std::iter::once(ADD_ITEM_LABEL.chars().count()))
            .max()
            .unwrap_or(0) as u16;

        let width = (widest + 4).max(anchor.width).min(bounds.width);
        let height = (component.items().len() as u16 + 3).min(bounds.height);
        let y = anchor.bottom().min(bounds.bottom().saturating_sub(height));
        let x = anchor.x.min(bounds.right().saturating_sub(width));
        Rect::new(x, y, width, height)
    }

    /// Row rectangle of the entry at `index` inside a popup drawn at `popup`.
    #[must_use]
    pub fn row_area(popup: Rect, index: usize) -> Rect {
        Rect::new(
            popup.x + 1,
            popup.y + 1 + index as u16,
            popup.width.saturating_sub(2),
            1,
        )
        .intersection(popup)
    }
}

impl ContextualComponent for DropdownMenu {
    type Context = RibbonComponent;
    type Event = DropdownEvent;

    fn handle_input(&mut self, key: KeyEvent, component: &RibbonComponent) -> Option<Self::Event> {
        let rows = component.items().len() + 1;
        let on_item = self.selected < component.items().len();

        match key.code {
            KeyCode::Esc | KeyCode::Char(' ' | 'q') => Some(DropdownEvent::Closed),
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.checked_sub(1).unwrap_or(rows - 1);
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.selected = (self.selected + 1) % rows;
                None
            }
            KeyCode::Enter if on_item => Some(DropdownEvent::Rename(self.selected)),
            KeyCode::Enter | KeyCode::Char('a') => Some(DropdownEvent::AddItem),
            KeyCode::Char('r') | KeyCode::F(2) if on_item => {
                Some(DropdownEvent::Rename(self.selected))
            }
            _ => None,
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme, component: &RibbonComponent) {
        f.render_widget(Clear, area);

        let highlight = Style::default()
            .fg(theme.accent)
            .bg(theme.highlight_bg)
            .add_modifier(Modifier::BOLD);

        let mut lines: Vec<Line> = component
            .items()
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let style = if index == self.selected {
                    highlight
                } else {
                    Style::default().fg(theme.text)
                };
                Line::from(Span::styled(format!(" {}", item.label), style))
            })
            .collect();

        let add_style = if self.selected >= component.items().len() {
            highlight
        } else {
            Style::default().fg(theme.success)
        };
        lines.push(Line::from(Span::styled(format!(" {ADD_ITEM_LABEL}"), add_style)));

        let list = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.primary))
                .style(Style::default().bg(theme.surface)),
        );
        f.render_widget(list, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RibbonSubcomponent;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn font() -> RibbonComponent {
        RibbonComponent::new("font", "Calibri").with_subcomponents(vec![
            RibbonSubcomponent::new("s1", "Arial"),
            RibbonSubcomponent::new("s2", "Calibri"),
        ])
    }

    #[test]
    fn test_selection_wraps_over_add_entry() {
        let component = font();
        let mut menu = DropdownMenu::new(0, 0);

        menu.handle_input(key(KeyCode::Up), &component);
        assert_eq!(menu.selected(), 2);
        assert_eq!(
            menu.handle_input(key(KeyCode::Enter), &component),
            Some(DropdownEvent::AddItem)
        );

        menu.handle_input(key(KeyCode::Down), &component);
        assert_eq!(menu.selected(), 0);
        assert_eq!(
            menu.handle_input(key(KeyCode::Enter), &component),
            Some(DropdownEvent::Rename(0))
        );
    }

    #[test]
    fn test_empty_dropdown_only_offers_add() {
        let component = RibbonComponent::new("c", "C").with_subcomponents(Vec::new());
        let mut menu = DropdownMenu::new(0, 0);
        assert_eq!(menu.handle_input(key(KeyCode::Char('r')), &component), None);
        assert_eq!(
            menu.handle_input(key(KeyCode::Enter), &component),
            Some(DropdownEvent::AddItem)
        );
    }

    #[test]
    fn test_escape_and_space_close() {
        let component = font();
        let mut menu = DropdownMenu::new(0, 0);
        assert_eq!(
            menu.handle_input(key(KeyCode::Esc), &component),
            Some(DropdownEvent::Closed)
        );
        assert_eq!(
            menu.handle_input(key(KeyCode::Char(' ')), &component),
            Some(DropdownEvent::Closed)
        );
    }

    #[test]
    fn test_popup_sits_below_anchor() {
        let anchor = Rect::new(10, 5, 13, 1);
        let bounds = Rect::new(0, 0, 80, 24);
        let popup = DropdownMenu::popup_area(anchor, bounds, &font());

        assert_eq!(popup.y, 6);
        assert_eq!(popup.x, 10);
        // Two items, the add entry, two borders
        assert_eq!(popup.height, 5);
        assert_eq!(DropdownMenu::row_area(popup, 1).y, 8);
    }
}
