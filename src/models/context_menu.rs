//! Context menu anchor and target.

/// Where a context menu was requested and what it was requested on.
///
/// `x`/`y` are terminal cell coordinates used to anchor the popup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContextMenuPosition {
    /// Anchor column
    pub x: u16,
    /// Anchor row
    pub y: u16,
    /// Group under the cursor, if any
    pub group_index: Option<usize>,
    /// Component under the cursor, if any
    pub component_index: Option<usize>,
}

impl ContextMenuPosition {
    /// Menu on the empty ribbon area.
    #[must_use]
    pub const fn ribbon(x: u16, y: u16) -> Self {
        Self {
            x,
            y,
            group_index: None,
            component_index: None,
        }
    }

    /// Menu on a group (not on one of its components).
    #[must_use]
    pub const fn group(x: u16, y: u16, group_index: usize) -> Self {
        Self {
            x,
            y,
            group_index: Some(group_index),
            component_index: None,
        }
    }

    /// Menu on a component.
    #[must_use]
    pub const fn component(x: u16, y: u16, group_index: usize, component_index: usize) -> Self {
        Self {
            x,
            y,
            group_index: Some(group_index),
            component_index: Some(component_index),
        }
    }

    /// Classifies the click. A component index without a group yields no target.
    #[must_use]
    pub const fn target(&self) -> Option<MenuTarget> {
        match (self.group_index, self.component_index) {
            (None, None) => Some(MenuTarget::Ribbon),
            (Some(group), None) => Some(MenuTarget::Group(group)),
            (Some(group), Some(component)) => Some(MenuTarget::Component { group, component }),
            (None, Some(_)) => None,
        }
    }
}

/// What a context menu acts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuTarget {
    /// Empty ribbon area
    Ribbon,
    /// A group
    Group(usize),
    /// A component within a group
    Component {
        /// Group index
        group: usize,
        /// Component index within the group
        component: usize,
    },
}
