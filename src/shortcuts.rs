//! Centralized shortcut and action system.
//!
//! This module maps key events on the main screen to actions, so the event
//! handlers and the status bar hints agree on the same bindings.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// All possible actions on the main screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // === NAVIGATION ===
    /// Focus the previous group
    PreviousGroup,
    /// Focus the next group
    NextGroup,
    /// Focus the previous component (or the group itself)
    PreviousComponent,
    /// Focus the next component
    NextComponent,

    // === TABS ===
    /// Select the next ribbon tab
    NextTab,
    /// Select the previous ribbon tab
    PreviousTab,

    // === EDITING ===
    /// Context menu on the focused element
    OpenContextMenu,
    /// Context menu on the ribbon background
    OpenRibbonMenu,
    /// Rename the focused element
    Rename,
    /// Open or close the focused dropdown
    ToggleDropdown,

    // === GENERAL ===
    /// Close the dropdown or clear focus
    Cancel,
    /// Quit the application
    Quit,
}

impl Action {
    /// Short description used in status bar hints.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::PreviousGroup | Self::NextGroup => "group",
            Self::PreviousComponent | Self::NextComponent => "component",
            Self::NextTab | Self::PreviousTab => "tab",
            Self::OpenContextMenu => "menu",
            Self::OpenRibbonMenu => "ribbon menu",
            Self::Rename => "rename",
            Self::ToggleDropdown => "dropdown",
            Self::Cancel => "back",
            Self::Quit => "quit",
        }
    }
}

/// Shortcut registry that maps key events to actions for a given context.
pub struct ShortcutRegistry {
    /// Maps (context, key_binding) to Action
    bindings: HashMap<(String, KeyBinding), Action>,
}

/// A key binding (key + modifiers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    /// Key code
    pub code: KeyCode,
    /// Modifier state
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    /// Create a new key binding.
    #[must_use]
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Create a key binding from a KeyEvent.
    #[must_use]
    pub const fn from_event(event: KeyEvent) -> Self {
        Self {
            code: event.code,
            modifiers: event.modifiers,
        }
    }
}

impl ShortcutRegistry {
    /// Create a new shortcut registry with default bindings.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self {
            bindings: HashMap::new(),
        };

        registry.register_main_shortcuts();
        registry
    }

    /// Register all shortcuts for the main context.
    fn register_main_shortcuts(&mut self) {
        use KeyCode as K;
        use KeyModifiers as M;

        let ctx = "main";

        // === NAVIGATION ===
        self.register(ctx, K::Left, M::NONE, Action::PreviousGroup);
        self.register(ctx, K::Right, M::NONE, Action::NextGroup);
        self.register(ctx, K::Up, M::NONE, Action::PreviousComponent);
        self.register(ctx, K::Down, M::NONE, Action::NextComponent);
        self.register(ctx, K::Char('h'), M::NONE, Action::PreviousGroup);
        self.register(ctx, K::Char('l'), M::NONE, Action::NextGroup);
        self.register(ctx, K::Char('k'), M::NONE, Action::PreviousComponent);
        self.register(ctx, K::Char('j'), M::NONE, Action::NextComponent);

        // === TABS ===
        self.register(ctx, K::Tab, M::NONE, Action::NextTab);
        self.register(ctx, K::BackTab, M::SHIFT, Action::PreviousTab);
        self.register(ctx, K::BackTab, M::NONE, Action::PreviousTab);

        // === EDITING ===
        self.register(ctx, K::Char('m'), M::NONE, Action::OpenContextMenu);
        self.register(ctx, K::Menu, M::NONE, Action::OpenContextMenu);
        self.register(ctx, K::Char('M'), M::SHIFT, Action::OpenRibbonMenu);
        self.register(ctx, K::Char('M'), M::NONE, Action::OpenRibbonMenu);
        self.register(ctx, K::Char('r'), M::NONE, Action::Rename);
        self.register(ctx, K::F(2), M::NONE, Action::Rename);
        self.register(ctx, K::Enter, M::NONE, Action::ToggleDropdown);
        self.register(ctx, K::Char(' '), M::NONE, Action::ToggleDropdown);

        // === GENERAL ===
        self.register(ctx, K::Esc, M::NONE, Action::Cancel);
        self.register(ctx, K::Char('q'), M::NONE, Action::Quit);
        self.register(ctx, K::Char('q'), M::CONTROL, Action::Quit);
    }

    /// Register a shortcut binding.
    fn register(&mut self, context: &str, code: KeyCode, modifiers: KeyModifiers, action: Action) {
        let binding = KeyBinding::new(code, modifiers);
        self.bindings.insert((context.to_string(), binding), action);
    }

    /// Look up an action for a given context and key event.
    #[must_use]
    pub fn lookup(&self, context: &str, event: KeyEvent) -> Option<Action> {
        let binding = KeyBinding::from_event(event);
        self.bindings.get(&(context.to_string(), binding)).copied()
    }

    /// Check if a key event matches a specific action in the given context.
    #[must_use]
    pub fn matches(&self, context: &str, event: KeyEvent, action: Action) -> bool {
        self.lookup(context, event) == Some(action)
    }
}

impl Default for ShortcutRegistry {
    fn default() -> Self {
        Self::new()
    }
}
