//! Ribbon tab strip entries.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A ribbon tab. Selection is visual only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RibbonTab {
    /// File tab
    File,
    /// Home tab
    #[default]
    Home,
    /// Insert tab
    Insert,
    /// Formulas tab
    Formulas,
}

impl RibbonTab {
    /// All tabs in display order.
    pub const ALL: [Self; 4] = [Self::File, Self::Home, Self::Insert, Self::Formulas];

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::File => "File",
            Self::Home => "Home",
            Self::Insert => "Insert",
            Self::Formulas => "Formulas",
        }
    }

    /// Position in [`Self::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::File => 0,
            Self::Home => 1,
            Self::Insert => 2,
            Self::Formulas => 3,
        }
    }

    /// Next tab, wrapping around.
    #[must_use]
    pub const fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous tab, wrapping around.
    #[must_use]
    pub const fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for RibbonTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
