//! Terminal user interface components and state management.
//!
//! This module contains the main TUI loop, `AppState`, event handling,
//! and all UI widgets using Ratatui.

// Input handlers use Result<bool> for consistency even when they never fail
#![allow(clippy::unnecessary_wraps)]
// Allow intentional type casts for terminal coordinates
#![allow(clippy::cast_possible_truncation)]

pub mod component;
pub mod context_menu;
pub mod dropdown;
pub mod handlers;
pub mod label_editor;
pub mod ribbon_widget;
pub mod sheet_grid;
pub mod status_bar;
pub mod tabs;
pub mod theme;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout as RatatuiLayout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame, Terminal,
};
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info};

use crate::config::Config;
use crate::constants::APP_NAME;
use crate::models::{MenuTarget, RibbonGroup};
use crate::services::{migrate_groups_to_column_tracking, RibbonEditor};

// Re-export TUI components
pub use component::{Component, ContextualComponent};
pub use context_menu::{ContextMenu, MenuEvent};
pub use dropdown::{DropdownEvent, DropdownMenu};
pub use label_editor::{EditOutcome, EditTarget, LabelEditor};
pub use ribbon_widget::RibbonWidget;
pub use sheet_grid::SheetGrid;
pub use status_bar::StatusBar;
pub use theme::Theme;

/// Popup types that can be displayed over the main UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupType {
    /// Ribbon context menu
    ContextMenu,
}

/// Active component - holds the currently active popup component
#[derive(Debug)]
pub enum ActiveComponent {
    /// Context menu component
    ContextMenu(ContextMenu),
}

/// Keyboard focus on the ribbon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RibbonFocus {
    /// Focused group
    pub group: usize,
    /// Focused component, or `None` for the group itself
    pub component: Option<usize>,
}

impl RibbonFocus {
    /// Focus on a group.
    #[must_use]
    pub const fn group(group: usize) -> Self {
        Self {
            group,
            component: None,
        }
    }

    /// Focus on a component.
    #[must_use]
    pub const fn component(group: usize, component: usize) -> Self {
        Self {
            group,
            component: Some(component),
        }
    }
}

/// Screen regions, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    /// Title bar
    pub title: Rect,
    /// Tab strip
    pub tabs: Rect,
    /// Ribbon
    pub ribbon: Rect,
    /// Sheet grid
    pub grid: Rect,
    /// Status bar
    pub status: Rect,
}

/// Splits the screen for the given ribbon.
#[must_use]
pub fn screen_areas(area: Rect, groups: &[RibbonGroup]) -> ScreenAreas {
    let chunks = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title bar
            Constraint::Length(2), // Tabs
            Constraint::Length(ribbon_widget::ribbon_height(groups)), // Ribbon
            Constraint::Min(4),    // Sheet grid
            Constraint::Length(4), // Status bar
        ])
        .split(area);

    ScreenAreas {
        title: chunks[0],
        tabs: chunks[1],
        ribbon: chunks[2],
        grid: chunks[3],
        status: chunks[4],
    }
}

/// Application state - single source of truth
///
/// All UI components read from this state immutably.
/// Only event handlers modify state explicitly.
pub struct AppState {
    // Core data
    /// Ribbon tree and its command set
    pub editor: RibbonEditor,
    /// File the ribbon was seeded from
    pub source_path: Option<PathBuf>,

    // UI state
    /// Current UI theme
    pub theme: Theme,
    /// Selected ribbon tab
    pub selected_tab: crate::models::RibbonTab,
    /// Keyboard focus
    pub focus: Option<RibbonFocus>,
    /// Open dropdown list (at most one)
    pub dropdown: Option<DropdownMenu>,
    /// Inline label editor (at most one)
    pub editing: Option<LabelEditor>,
    /// Currently active popup (if any)
    pub active_popup: Option<PopupType>,
    /// Currently active component (if any)
    pub active_component: Option<ActiveComponent>,
    /// Status bar message
    pub status_message: String,
    /// Current error message (if any)
    pub error_message: Option<String>,
    /// Last known terminal size, used to anchor popups
    pub viewport: Rect,

    // System resources
    /// Application configuration
    pub config: Config,

    // Control flags
    /// Whether application should exit
    pub should_quit: bool,
}

impl AppState {
    /// Creates the state for a session seeded with `groups`.
    ///
    /// Legacy groups are migrated to explicit columns first.
    #[must_use]
    pub fn new(groups: &[RibbonGroup], source_path: Option<PathBuf>, config: Config) -> Self {
        let groups = migrate_groups_to_column_tracking(groups);
        let focus = if groups.is_empty() {
            None
        } else {
            Some(RibbonFocus::group(0))
        };

        Self {
            editor: RibbonEditor::new(groups),
            source_path,
            theme: Theme::from_mode(config.ui.theme_mode),
            selected_tab: config.ui.start_tab,
            focus,
            dropdown: None,
            editing: None,
            active_popup: None,
            active_component: None,
            status_message: String::new(),
            error_message: None,
            viewport: Rect::new(0, 0, 120, 40),
            config,
            should_quit: false,
        }
    }

    /// Set status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.error_message = None;
    }

    /// Set error message
    pub fn set_error(&mut self, error: impl Into<String>) {
        self.error_message = Some(error.into());
    }

    /// Clear error message
    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    /// Focus, validated against the current tree.
    #[must_use]
    pub fn valid_focus(&self) -> Option<RibbonFocus> {
        let focus = self.focus?;
        let group = self.editor.group(focus.group)?;
        match focus.component {
            Some(component) if component >= group.components.len() => {
                Some(RibbonFocus::group(focus.group))
            }
            _ => Some(focus),
        }
    }

    /// Context menu target for the focused element.
    #[must_use]
    pub fn focus_target(&self) -> MenuTarget {
        match self.valid_focus() {
            None => MenuTarget::Ribbon,
            Some(RibbonFocus {
                group,
                component: None,
            }) => MenuTarget::Group(group),
            Some(RibbonFocus {
                group,
                component: Some(component),
            }) => MenuTarget::Component { group, component },
        }
    }

    /// Current screen regions.
    #[must_use]
    pub fn screen_areas(&self) -> ScreenAreas {
        screen_areas(self.viewport, self.editor.groups())
    }

    /// Open the context menu component
    pub fn open_context_menu(&mut self, menu: ContextMenu) {
        self.dropdown = None;
        self.active_component = Some(ActiveComponent::ContextMenu(menu));
        self.active_popup = Some(PopupType::ContextMenu);
    }

    /// Close the currently active component
    pub fn close_component(&mut self) {
        self.active_component = None;
        self.active_popup = None;
    }
}

/// Initialize terminal for TUI
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Main event loop
pub fn run_tui<B: Backend>(state: &mut AppState, terminal: &mut Terminal<B>) -> Result<()> {
    info!(groups = state.editor.groups().len(), "Starting ribbon editor");

    loop {
        let size = terminal.size().context("Failed to read terminal size")?;
        state.viewport = Rect::new(0, 0, size.width, size.height);

        // Render current state
        terminal.draw(|f| render(f, state))?;

        // Poll for events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) if key.kind == event::KeyEventKind::Press => {
                    if handle_key_event(state, key)? {
                        break; // User quit
                    }
                }
                Event::Resize(width, height) => {
                    debug!(width, height, "Terminal resized");
                }
                _ => {}
            }
        }

        // Check if should quit
        if state.should_quit {
            break;
        }
    }

    info!("Ribbon editor closed");
    Ok(())
}

/// Render the UI from current state
pub fn render(f: &mut Frame, state: &AppState) {
    // Fill entire screen with theme background color first
    let full_bg = Block::default().style(Style::default().bg(state.theme.background));
    f.render_widget(full_bg, f.area());

    let areas = screen_areas(f.area(), state.editor.groups());

    render_title_bar(f, areas.title, state);
    tabs::render_tabs(f, areas.tabs, state.selected_tab, &state.theme);
    RibbonWidget::render(f, areas.ribbon, state);
    SheetGrid::render(f, areas.grid, &state.theme);
    StatusBar::render(f, areas.status, state, &state.theme);

    if let Some(dropdown) = &state.dropdown {
        render_dropdown(f, dropdown, &areas, state);
    }

    if let Some(editor) = &state.editing {
        if let Some(area) = label_editor_area(editor.target(), &areas, state) {
            editor.render(f, area, &state.theme);
        }
    }

    // Render popup if active
    if let Some(popup_type) = state.active_popup {
        render_popup(f, popup_type, state);
    }

    // Render error overlay on top of everything if error is present
    if let Some(ref error) = state.error_message {
        render_error_overlay(f, error, &state.theme);
    }
}

/// Render title bar with the application name and ribbon source
fn render_title_bar(f: &mut Frame, area: Rect, state: &AppState) {
    let source = state
        .source_path
        .as_ref()
        .and_then(|path| path.file_name())
        .map_or_else(
            || "Starter ribbon".to_string(),
            |name| name.to_string_lossy().into_owned(),
        );
    let title = format!(" {APP_NAME} - {source}");

    let title_widget = Paragraph::new(title)
        .style(
            Style::default()
                .fg(state.theme.brand)
                .bg(state.theme.background)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(state.theme.brand))
                .style(Style::default().bg(state.theme.background)),
        );

    f.render_widget(title_widget, area);
}

/// Anchor and popup rectangle of the open dropdown
fn dropdown_popup_area(
    dropdown: &DropdownMenu,
    areas: &ScreenAreas,
    state: &AppState,
    bounds: Rect,
) -> Option<Rect> {
    let groups = state.editor.groups();
    let component = state.editor.component(dropdown.group(), dropdown.component())?;
    let anchor =
        ribbon_widget::component_area(groups, areas.ribbon, dropdown.group(), dropdown.component())?;
    Some(DropdownMenu::popup_area(anchor, bounds, component))
}

/// Render the open dropdown list under its component
fn render_dropdown(f: &mut Frame, dropdown: &DropdownMenu, areas: &ScreenAreas, state: &AppState) {
    let Some(component) = state.editor.component(dropdown.group(), dropdown.component()) else {
        return;
    };
    if let Some(area) = dropdown_popup_area(dropdown, areas, state, f.area()) {
        dropdown.render(f, area, &state.theme, component);
    }
}

/// Where the inline editor for `target` is drawn
fn label_editor_area(target: EditTarget, areas: &ScreenAreas, state: &AppState) -> Option<Rect> {
    let groups = state.editor.groups();
    match target {
        EditTarget::Group { group } => {
            let rect = *ribbon_widget::group_areas(groups, areas.ribbon).get(group)?;
            Some(Rect::new(
                rect.x + 1,
                rect.bottom().saturating_sub(1),
                rect.width.saturating_sub(2),
                1,
            ))
        }
        EditTarget::Component { group, component } => {
            ribbon_widget::component_area(groups, areas.ribbon, group, component)
        }
        EditTarget::Subcomponent { subcomponent, .. } => {
            let dropdown = state.dropdown.as_ref()?;
            let popup = dropdown_popup_area(dropdown, areas, state, state.viewport)?;
            Some(DropdownMenu::row_area(popup, subcomponent))
        }
    }
}

/// Render active popup
fn render_popup(f: &mut Frame, popup_type: PopupType, state: &AppState) {
    match popup_type {
        PopupType::ContextMenu => {
            if let Some(ActiveComponent::ContextMenu(ref menu)) = state.active_component {
                menu.render(f, f.area(), &state.theme);
            }
        }
    }
}

/// Render error overlay on top of all other UI elements
fn render_error_overlay(f: &mut Frame, error: &str, theme: &Theme) {
    let area = centered_rect(70, 40, f.area());

    // Clear the background area first
    f.render_widget(Clear, area);

    let chunks = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(3),    // Error message
            Constraint::Length(3), // Help text
        ])
        .split(area);

    let title = Paragraph::new("ERROR")
        .style(
            Style::default()
                .fg(theme.error)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .style(Style::default().fg(theme.error).bg(theme.background)),
        );
    f.render_widget(title, chunks[0]);

    let error_text = Paragraph::new(error)
        .style(Style::default().fg(theme.text))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Details ")
                .style(Style::default().bg(theme.background)),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(error_text, chunks[1]);

    let help = Paragraph::new(Line::from(vec![
        Span::styled(
            "Enter/Esc",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" Dismiss"),
    ]))
    .style(Style::default().fg(theme.text).bg(theme.background))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .style(Style::default().bg(theme.background)),
    );
    f.render_widget(help, chunks[2]);
}

/// Helper to create a centered rectangle
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    RatatuiLayout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Handle keyboard input events
///
/// Returns `true` when the user asked to quit.
pub fn handle_key_event(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    use crossterm::event::KeyCode;

    // If error overlay is shown, allow dismissing with Enter or Esc
    if state.error_message.is_some() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            state.clear_error();
        }
        // Block all other input while error is shown
        return Ok(false);
    }

    if state.editing.is_some() {
        return handlers::handle_label_editor_input(state, key);
    }

    // Route to popup handler if popup is active
    if state.active_popup.is_some() {
        return handlers::handle_popup_input(state, key);
    }

    if state.dropdown.is_some() {
        return handlers::handle_dropdown_input(state, key);
    }

    // Main UI key handling
    handlers::handle_main_input(state, key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ThemeMode;
    use crate::models::starter_ribbon;
    use ratatui::backend::TestBackend;

    fn state() -> AppState {
        let mut config = Config::new();
        config.ui.theme_mode = ThemeMode::Dark;
        AppState::new(&starter_ribbon(), None, config)
    }

    fn screen_text(state: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|f| render(f, state)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_new_state_migrates_and_focuses_first_group() {
        let state = state();
        assert!(crate::services::is_column_tracked(state.editor.groups()));
        assert_eq!(state.focus, Some(RibbonFocus::group(0)));
        assert_eq!(state.theme, Theme::dark());
    }

    #[test]
    fn test_empty_ribbon_has_no_focus() {
        let state = AppState::new(&[], None, Config::new());
        assert_eq!(state.focus, None);
        assert_eq!(state.focus_target(), MenuTarget::Ribbon);
    }

    #[test]
    fn test_focus_target_drops_stale_component() {
        let mut state = state();
        state.focus = Some(RibbonFocus::component(0, 99));
        assert_eq!(state.focus_target(), MenuTarget::Group(0));

        state.focus = Some(RibbonFocus::group(99));
        assert_eq!(state.focus_target(), MenuTarget::Ribbon);
    }

    #[test]
    fn test_screen_areas_stack_vertically() {
        let state = state();
        let areas = state.screen_areas();
        assert_eq!(areas.title.y, 0);
        assert_eq!(areas.tabs.y, 3);
        assert_eq!(areas.ribbon.y, 5);
        assert_eq!(
            areas.ribbon.height,
            ribbon_widget::ribbon_height(state.editor.groups())
        );
        assert_eq!(areas.status.bottom(), 40);
    }

    #[test]
    fn test_render_shows_ribbon_and_tabs() {
        let text = screen_text(&state());
        assert!(text.contains(APP_NAME));
        assert!(text.contains("Formulas"));
        assert!(text.contains("Clipboard"));
        assert!(text.contains("Paste"));
        assert!(text.contains("Calibri ▾"));
    }

    #[test]
    fn test_render_error_overlay() {
        let mut state = state();
        state.set_error("Something broke");
        let text = screen_text(&state);
        assert!(text.contains("ERROR"));
        assert!(text.contains("Something broke"));
    }
}
