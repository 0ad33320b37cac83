//! Ribbon tree data structures: groups, components and dropdown items.

use serde::{Deserialize, Serialize};

/// A single entry inside a component's dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RibbonSubcomponent {
    /// Session-unique identifier (e.g. "sub-1718000000000")
    pub id: String,
    /// Display label
    pub label: String,
}

impl RibbonSubcomponent {
    /// Creates a new dropdown item.
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// A command button inside a ribbon group.
///
/// # Invariants
///
/// - `column`, when present, lies in `[0, group.column_count() - 1]`
/// - `subcomponents.is_some()` marks the component as a dropdown, even when empty
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RibbonComponent {
    /// Session-unique identifier (e.g. "comp-1718000000000")
    pub id: String,
    /// Display label
    pub label: String,
    /// Explicit column index; legacy data leaves this unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<usize>,
    /// Dropdown items, present only for dropdown components
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcomponents: Option<Vec<RibbonSubcomponent>>,
}

impl RibbonComponent {
    /// Creates a plain component with no explicit column and no dropdown.
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            column: None,
            subcomponents: None,
        }
    }

    /// Sets the explicit column.
    #[must_use]
    pub const fn with_column(mut self, column: usize) -> Self {
        self.column = Some(column);
        self
    }

    /// Turns the component into a dropdown with the given items.
    #[must_use]
    pub fn with_subcomponents(mut self, subcomponents: Vec<RibbonSubcomponent>) -> Self {
        self.subcomponents = Some(subcomponents);
        self
    }

    /// Whether this component opens a dropdown.
    #[must_use]
    pub const fn is_dropdown(&self) -> bool {
        self.subcomponents.is_some()
    }

    /// Dropdown items, or an empty slice for plain components.
    #[must_use]
    pub fn items(&self) -> &[RibbonSubcomponent] {
        self.subcomponents.as_deref().unwrap_or(&[])
    }
}

/// A labeled cluster of components laid out in columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RibbonGroup {
    /// Session-unique identifier (e.g. "group-1718000000000")
    pub id: String,
    /// Label drawn under the group
    pub label: String,
    /// Components in list order
    #[serde(default)]
    pub components: Vec<RibbonComponent>,
    /// Column count; absent means a single column
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub columns: Option<usize>,
}

/// Widest group the ribbon can draw.
pub const MAX_COLUMNS: usize = 64;

impl RibbonGroup {
    /// Creates an empty single-column group.
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            components: Vec::new(),
            columns: None,
        }
    }

    /// Sets the column count.
    #[must_use]
    pub const fn with_columns(mut self, columns: usize) -> Self {
        self.columns = Some(columns);
        self
    }

    /// Appends a component.
    #[must_use]
    pub fn with_component(mut self, component: RibbonComponent) -> Self {
        self.components.push(component);
        self
    }

    /// Effective column count. Missing or zero counts read as one column.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.columns.filter(|&c| c > 0).unwrap_or(1)
    }

    /// Returns the component at `index`.
    #[must_use]
    pub fn component(&self, index: usize) -> Option<&RibbonComponent> {
        self.components.get(index)
    }
}

/// The ribbon shown on first launch when no seed file is given.
///
/// Written in the legacy shape (no explicit columns) so it goes through the
/// same migration as older seed files.
#[must_use]
pub fn starter_ribbon() -> Vec<RibbonGroup> {
    vec![
        RibbonGroup::new("group-clipboard", "Clipboard")
            .with_columns(2)
            .with_component(RibbonComponent::new("comp-paste", "Paste"))
            .with_component(RibbonComponent::new("comp-cut", "Cut"))
            .with_component(RibbonComponent::new("comp-copy", "Copy")),
        RibbonGroup::new("group-font", "Font")
            .with_columns(3)
            .with_component(
                RibbonComponent::new("comp-font-face", "Calibri").with_subcomponents(vec![
                    RibbonSubcomponent::new("sub-arial", "Arial"),
                    RibbonSubcomponent::new("sub-calibri", "Calibri"),
                    RibbonSubcomponent::new("sub-consolas", "Consolas"),
                ]),
            )
            .with_component(RibbonComponent::new("comp-bold", "Bold"))
            .with_component(RibbonComponent::new("comp-italic", "Italic"))
            .with_component(RibbonComponent::new("comp-font-size", "11"))
            .with_component(RibbonComponent::new("comp-underline", "Underline")),
        RibbonGroup::new("group-alignment", "Alignment")
            .with_component(RibbonComponent::new("comp-align-left", "Left"))
            .with_component(RibbonComponent::new("comp-align-center", "Center"))
            .with_component(RibbonComponent::new("comp-align-right", "Right")),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_count_defaults_to_one() {
        let group = RibbonGroup::new("g", "Group");
        assert_eq!(group.column_count(), 1);

        let group = RibbonGroup::new("g", "Group").with_columns(0);
        assert_eq!(group.column_count(), 1);

        let group = RibbonGroup::new("g", "Group").with_columns(4);
        assert_eq!(group.column_count(), 4);
    }

    #[test]
    fn test_component_dropdown_flag() {
        let plain = RibbonComponent::new("c", "Bold");
        assert!(!plain.is_dropdown());
        assert!(plain.items().is_empty());

        let empty_dropdown = RibbonComponent::new("c", "Font").with_subcomponents(vec![]);
        assert!(empty_dropdown.is_dropdown());
        assert!(empty_dropdown.items().is_empty());
    }

    #[test]
    fn test_optional_fields_skipped_when_serialized() {
        let component = RibbonComponent::new("comp-1", "Bold");
        let json = serde_json::to_string(&component).unwrap();
        assert_eq!(json, r#"{"id":"comp-1","label":"Bold"}"#);

        let component = component.with_column(1);
        let json = serde_json::to_string(&component).unwrap();
        assert!(json.contains(r#""column":1"#));
    }

    #[test]
    fn test_group_components_default_when_missing() {
        let group: RibbonGroup = serde_json::from_str(r#"{"id":"g","label":"Empty"}"#).unwrap();
        assert!(group.components.is_empty());
        assert_eq!(group.columns, None);
    }

    #[test]
    fn test_starter_ribbon_is_legacy_shaped() {
        let groups = starter_ribbon();
        assert_eq!(groups.len(), 3);
        assert!(groups
            .iter()
            .flat_map(|g| g.components.iter())
            .all(|c| c.column.is_none()));
    }
}
