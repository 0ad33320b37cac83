//! Ribbon widget: groups drawn left to right, cells placed on each group's grid.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::RibbonGroup;
use crate::services::{GridCell, GroupLayout};

use super::dropdown::DropdownMenu;
use super::{AppState, RibbonFocus};

/// Width of one grid column, separator included.
pub const CELL_WIDTH: u16 = 14;

/// Horizontal gap between groups.
const GROUP_GAP: u16 = 1;

fn saturating_u16(value: usize) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}

/// Height the ribbon needs: the tallest group plus its borders.
#[must_use]
pub fn ribbon_height(groups: &[RibbonGroup]) -> u16 {
    let rows = groups
        .iter()
        .map(|group| GroupLayout::compute(group).rows_count)
        .max()
        .unwrap_or(1);
    saturating_u16(rows).saturating_add(2)
}

/// Screen rectangle of every group. Groups past the right edge get an empty rectangle.
#[must_use]
pub fn group_areas(groups: &[RibbonGroup], area: Rect) -> Vec<Rect> {
    let mut x = area.x;
    groups
        .iter()
        .map(|group| {
            let width = saturating_u16(group.column_count())
                .saturating_mul(CELL_WIDTH)
                .saturating_add(2);
            let rect = Rect::new(x, area.y, width, area.height).intersection(area);
            x = x.saturating_add(width).saturating_add(GROUP_GAP);
            rect
        })
        .collect()
}

/// Area inside a group's border.
#[must_use]
pub fn group_inner(rect: Rect) -> Rect {
    Rect::new(
        rect.x.saturating_add(1),
        rect.y.saturating_add(1),
        rect.width.saturating_sub(2),
        rect.height.saturating_sub(2),
    )
}

/// Screen rectangle of a grid cell inside a group.
#[must_use]
pub fn cell_area(inner: Rect, cell: &GridCell) -> Rect {
    Rect::new(
        inner
            .x
            .saturating_add(saturating_u16(cell.column()).saturating_mul(CELL_WIDTH)),
        inner.y.saturating_add(saturating_u16(cell.row())),
        CELL_WIDTH - 1,
        saturating_u16(cell.row_span()),
    )
    .intersection(inner)
}

/// Screen rectangle of the component at (`group`, `component`).
#[must_use]
pub fn component_area(
    groups: &[RibbonGroup],
    area: Rect,
    group: usize,
    component: usize,
) -> Option<Rect> {
    let rect = *group_areas(groups, area).get(group)?;
    let layout = GroupLayout::compute(groups.get(group)?);
    layout
        .cells()
        .iter()
        .find(|cell| cell.component_index() == Some(component))
        .map(|cell| cell_area(group_inner(rect), cell))
}

/// Ribbon widget
pub struct RibbonWidget;

impl RibbonWidget {
    /// Render the ribbon
    pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
        let theme = &state.theme;
        let groups = state.editor.groups();

        if groups.is_empty() {
            let hint = Paragraph::new("Empty ribbon. Press M to create a group.")
                .style(Style::default().fg(theme.text_muted))
                .block(Block::default().borders(Borders::ALL));
            f.render_widget(hint, area);
            return;
        }

        for (index, (group, rect)) in groups.iter().zip(group_areas(groups, area)).enumerate() {
            if rect.width < 3 {
                continue;
            }
            let focus = state.focus.filter(|focus| focus.group == index);
            Self::render_group(f, rect, index, group, focus, state);
        }
    }

    fn render_group(
        f: &mut Frame,
        rect: Rect,
        group_index: usize,
        group: &RibbonGroup,
        focus: Option<RibbonFocus>,
        state: &AppState,
    ) {
        let theme = &state.theme;
        let group_focused = focus.is_some_and(|focus| focus.component.is_none());
        let border_style = if group_focused {
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)
        } else if focus.is_some() {
            Style::default().fg(theme.primary)
        } else {
            Style::default().fg(theme.inactive)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title_bottom(Line::from(format!(" {} ", group.label)).centered());
        f.render_widget(block, rect);

        let inner = group_inner(rect);
        let layout = GroupLayout::compute(group);
        if layout.is_empty() {
            let empty = Paragraph::new("(empty)").style(Style::default().fg(theme.text_muted));
            f.render_widget(empty, inner);
            return;
        }

        let focused_component = focus.and_then(|focus| focus.component);
        let open_dropdown = state
            .dropdown
            .as_ref()
            .filter(|dropdown| dropdown.group() == group_index)
            .map(DropdownMenu::component);

        for cell in layout.cells() {
            let area = cell_area(inner, &cell);
            if area.is_empty() {
                continue;
            }
            let Some(index) = cell.component_index() else {
                let placeholder =
                    Paragraph::new("·").style(Style::default().fg(theme.text_muted));
                f.render_widget(placeholder, area);
                continue;
            };
            let Some(component) = group.component(index) else {
                continue;
            };

            let mut label = component.label.clone();
            if component.is_dropdown() {
                label.push_str(" ▾");
            }

            let style = if focused_component == Some(index) {
                Style::default()
                    .fg(theme.background)
                    .bg(theme.accent)
                    .add_modifier(Modifier::BOLD)
            } else if open_dropdown == Some(index) {
                Style::default().fg(theme.accent)
            } else {
                Style::default().fg(theme.text).bg(theme.surface)
            };

            // Spanning cells carry their label on the middle row
            let mut lines = vec![Line::from(""); usize::from(area.height / 2)];
            lines.push(Line::from(label));
            f.render_widget(Paragraph::new(lines).style(style), area);
        }
    }
}
