//! Timestamp-based identifiers for newly created ribbon nodes.

use chrono::Utc;

/// Kind of node an identifier is minted for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdKind {
    /// Ribbon group
    Group,
    /// Ribbon component
    Component,
    /// Dropdown item
    Subcomponent,
}

impl IdKind {
    /// Identifier prefix.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Group => "group",
            Self::Component => "comp",
            Self::Subcomponent => "sub",
        }
    }
}

/// Mints `<kind>-<unix millis>` identifiers.
///
/// Stamps never repeat within one generator: when the clock has not moved
/// since the last id, the previous stamp plus one is used.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last_stamp: i64,
}

impl IdGenerator {
    /// Creates a generator.
    #[must_use]
    pub const fn new() -> Self {
        Self { last_stamp: 0 }
    }

    /// Returns the next identifier for `kind`.
    pub fn next(&mut self, kind: IdKind) -> String {
        let now = Utc::now().timestamp_millis();
        let stamp = now.max(self.last_stamp + 1);
        self.last_stamp = stamp;
        format!("{}-{stamp}", kind.prefix())
    }
}
