//! Action handlers organized by category

/// Dropdown open/close handlers
pub mod dropdown;

/// Inline rename handlers
pub mod editing;

/// Context menu handlers
pub mod menu;

/// Group, component and tab navigation handlers
pub mod navigation;
