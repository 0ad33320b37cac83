//! Ribbon tab strip.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Tabs},
    Frame,
};

use crate::models::RibbonTab;

use super::Theme;

/// Render the tab strip with `selected` highlighted.
pub fn render_tabs(f: &mut Frame, area: Rect, selected: RibbonTab, theme: &Theme) {
    let titles: Vec<Line> = RibbonTab::ALL
        .iter()
        .map(|tab| Line::from(format!(" {tab} ")))
        .collect();

    let tabs = Tabs::new(titles)
        .select(selected.index())
        .style(Style::default().fg(theme.text_secondary))
        .highlight_style(
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )
        .divider("│")
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(theme.inactive)),
        );

    f.render_widget(tabs, area);
}
