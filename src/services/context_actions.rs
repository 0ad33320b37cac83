//! Which commands the context menu offers for a target.

use crate::models::{MenuTarget, RibbonGroup};
use crate::services::ribbon_editor::RibbonCommand;
use crate::services::ribbon_layout::resolve_column;

/// An entry in the ribbon context menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuAction {
    /// Create a group (ribbon background)
    CreateGroup,
    /// Create a component in the group
    CreateComponent,
    /// Add a column to the group
    AddColumn,
    /// Remove a column from the group
    RemoveColumn,
    /// Turn the component into a dropdown
    CreateDropdown,
    /// Turn the dropdown back into a plain component
    DestroyDropdown,
    /// Move the component one column left
    MoveLeft,
    /// Move the component one column right
    MoveRight,
}

impl MenuAction {
    /// Menu label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::CreateGroup => "Create New Group",
            Self::CreateComponent => "Create New Component",
            Self::AddColumn => "Add Column",
            Self::RemoveColumn => "Remove Column",
            Self::CreateDropdown => "Create Dropdown Menu",
            Self::DestroyDropdown => "Destroy Dropdown",
            Self::MoveLeft => "Move Left",
            Self::MoveRight => "Move Right",
        }
    }

    /// Menu section; a separator is drawn where the section changes.
    #[must_use]
    pub const fn section(self) -> u8 {
        match self {
            Self::CreateGroup
            | Self::CreateComponent
            | Self::CreateDropdown
            | Self::DestroyDropdown => 0,
            Self::AddColumn | Self::RemoveColumn | Self::MoveLeft | Self::MoveRight => 1,
        }
    }

    /// Command this entry performs on `target`, if the pairing makes sense.
    #[must_use]
    pub const fn command(self, target: MenuTarget) -> Option<RibbonCommand> {
        match (self, target) {
            (Self::CreateGroup, MenuTarget::Ribbon) => {
                Some(RibbonCommand::CreateGroup { insert_after: None })
            }
            (Self::CreateComponent, MenuTarget::Group(group)) => {
                Some(RibbonCommand::CreateComponent {
                    group,
                    insert_after: None,
                })
            }
            (Self::AddColumn, MenuTarget::Group(group)) => Some(RibbonCommand::AddColumn { group }),
            (Self::RemoveColumn, MenuTarget::Group(group)) => {
                Some(RibbonCommand::RemoveColumn { group })
            }
            (Self::CreateDropdown, MenuTarget::Component { group, component }) => {
                Some(RibbonCommand::CreateDropdown { group, component })
            }
            (Self::DestroyDropdown, MenuTarget::Component { group, component }) => {
                Some(RibbonCommand::DestroyDropdown { group, component })
            }
            (Self::MoveLeft, MenuTarget::Component { group, component }) => {
                Some(RibbonCommand::MoveLeft { group, component })
            }
            (Self::MoveRight, MenuTarget::Component { group, component }) => {
                Some(RibbonCommand::MoveRight { group, component })
            }
            _ => None,
        }
    }
}

/// Entries offered for `target`, in display order.
///
/// Targets pointing at missing groups or components get no entries.
#[must_use]
pub fn available_actions(groups: &[RibbonGroup], target: MenuTarget) -> Vec<MenuAction> {
    match target {
        MenuTarget::Ribbon => vec![MenuAction::CreateGroup],
        MenuTarget::Group(group_index) => {
            let Some(group) = groups.get(group_index) else {
                return Vec::new();
            };
            let mut actions = vec![MenuAction::CreateComponent, MenuAction::AddColumn];
            if group.column_count() > 1 {
                actions.push(MenuAction::RemoveColumn);
            }
            actions
        }
        MenuTarget::Component { group, component } => {
            let Some(group) = groups.get(group) else {
                return Vec::new();
            };
            let Some(entry) = group.components.get(component) else {
                return Vec::new();
            };

            let mut actions = vec![if entry.is_dropdown() {
                MenuAction::DestroyDropdown
            } else {
                MenuAction::CreateDropdown
            }];

            let columns = group.column_count();
            if columns > 1 && group.components.len() > 1 {
                let column = resolve_column(entry, component, columns);
                if column > 0 {
                    actions.push(MenuAction::MoveLeft);
                }
                if column + 1 < columns {
                    actions.push(MenuAction::MoveRight);
                }
            }
            actions
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RibbonComponent, RibbonSubcomponent};

    fn group(columns: usize, count: usize) -> RibbonGroup {
        let mut group = RibbonGroup::new("g", "G").with_columns(columns);
        for i in 0..count {
            group = group.with_component(RibbonComponent::new(format!("c{i}"), "C"));
        }
        group
    }

    #[test]
    fn test_ribbon_menu() {
        assert_eq!(
            available_actions(&[], MenuTarget::Ribbon),
            vec![MenuAction::CreateGroup]
        );
    }

    #[test]
    fn test_group_menu_hides_remove_column_at_one() {
        let groups = vec![group(1, 2), group(2, 2)];
        assert_eq!(
            available_actions(&groups, MenuTarget::Group(0)),
            vec![MenuAction::CreateComponent, MenuAction::AddColumn]
        );
        assert_eq!(
            available_actions(&groups, MenuTarget::Group(1)),
            vec![
                MenuAction::CreateComponent,
                MenuAction::AddColumn,
                MenuAction::RemoveColumn
            ]
        );
        assert!(available_actions(&groups, MenuTarget::Group(5)).is_empty());
    }

    #[test]
    fn test_component_menu_moves_follow_column() {
        let groups = vec![group(3, 3)];
        let at = |component| MenuTarget::Component {
            group: 0,
            component,
        };

        assert_eq!(
            available_actions(&groups, at(0)),
            vec![MenuAction::CreateDropdown, MenuAction::MoveRight]
        );
        assert_eq!(
            available_actions(&groups, at(1)),
            vec![
                MenuAction::CreateDropdown,
                MenuAction::MoveLeft,
                MenuAction::MoveRight
            ]
        );
        assert_eq!(
            available_actions(&groups, at(2)),
            vec![MenuAction::CreateDropdown, MenuAction::MoveLeft]
        );
    }

    #[test]
    fn test_component_menu_without_moves() {
        // Single column, or a lone component, offers no moves
        let groups = vec![group(1, 3), group(3, 1)];
        for g in 0..2 {
            assert_eq!(
                available_actions(
                    &groups,
                    MenuTarget::Component {
                        group: g,
                        component: 0
                    }
                ),
                vec![MenuAction::CreateDropdown]
            );
        }
    }

    #[test]
    fn test_component_menu_offers_destroy_for_dropdowns() {
        let groups = vec![RibbonGroup::new("g", "G").with_component(
            RibbonComponent::new("c", "Font")
                .with_subcomponents(vec![RibbonSubcomponent::new("s", "Arial")]),
        )];
        assert_eq!(
            available_actions(
                &groups,
                MenuTarget::Component {
                    group: 0,
                    component: 0
                }
            ),
            vec![MenuAction::DestroyDropdown]
        );
    }

    #[test]
    fn test_command_mapping() {
        assert_eq!(
            MenuAction::AddColumn.command(MenuTarget::Group(2)),
            Some(RibbonCommand::AddColumn { group: 2 })
        );
        assert_eq!(
            MenuAction::MoveLeft.command(MenuTarget::Component {
                group: 1,
                component: 3
            }),
            Some(RibbonCommand::MoveLeft {
                group: 1,
                component: 3
            })
        );
        assert_eq!(MenuAction::MoveLeft.command(MenuTarget::Ribbon), None);
    }
}
