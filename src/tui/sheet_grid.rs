//! Blank spreadsheet grid drawn under the ribbon.
//!
//! Purely decorative: lettered columns, numbered rows, no cell content.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table},
    Frame,
};

use super::Theme;

/// Number of lettered columns (A to Z).
pub const SHEET_COLUMNS: usize = 26;
/// Number of numbered rows.
pub const SHEET_ROWS: usize = 50;
/// Width of a sheet column in terminal cells.
const COLUMN_WIDTH: u16 = 8;
/// Width of the row-number gutter.
const ROW_HEADER_WIDTH: u16 = 4;

/// Letter heading the sheet column at `index` (0 is `A`).
#[must_use]
pub fn column_letter(index: usize) -> char {
    char::from(b'A' + (index % SHEET_COLUMNS) as u8)
}

/// Sheet grid widget
pub struct SheetGrid;

impl SheetGrid {
    /// Render the grid, clipped to `area`
    pub fn render(f: &mut Frame, area: Rect, theme: &Theme) {
        let header_style = Style::default()
            .fg(theme.text_secondary)
            .bg(theme.surface)
            .add_modifier(Modifier::BOLD);

        let header = Row::new(
            std::iter::once(Cell::from(""))
                .chain((0..SHEET_COLUMNS).map(|i| Cell::from(format!("{:^8}", column_letter(i))))),
        )
        .style(header_style);

        let visible_rows = usize::from(area.height.saturating_sub(3)).min(SHEET_ROWS);
        let rows = (1..=visible_rows).map(|number| {
            let mut cells = Vec::with_capacity(SHEET_COLUMNS + 1);
            cells.push(Cell::from(format!("{number:>3}")).style(header_style));
            cells.extend((0..SHEET_COLUMNS).map(|_| Cell::from("")));
            Row::new(cells).style(Style::default().fg(theme.text_muted))
        });

        let widths = std::iter::once(Constraint::Length(ROW_HEADER_WIDTH))
            .chain(std::iter::repeat(Constraint::Length(COLUMN_WIDTH)).take(SHEET_COLUMNS));

        let table = Table::new(rows, widths)
            .header(header)
            .column_spacing(1)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.inactive))
                    .style(Style::default().bg(theme.background)),
            );

        f.render_widget(table, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_letters() {
        assert_eq!(column_letter(0), 'A');
        assert_eq!(column_letter(25), 'Z');
        let letters: String = (0..SHEET_COLUMNS).map(column_letter).collect();
        assert_eq!(letters, "ABCDEFGHIJKLMNOPQRSTUVWXYZ");
    }
}
