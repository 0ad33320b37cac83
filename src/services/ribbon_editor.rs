//! Direct-manipulation commands on the ribbon tree.
//!
//! The editor owns the group tree for the session. Readers get a shared
//! slice; every change goes through [`RibbonEditor::apply`]. Commands that
//! make no sense for the current tree (unknown indices, moving past the
//! edge, removing the last column, blank renames) are ignored rather than
//! reported as errors.

use tracing::debug;

use crate::models::{RibbonComponent, RibbonGroup, RibbonSubcomponent, MAX_COLUMNS};
use crate::services::ids::{IdGenerator, IdKind};
use crate::services::ribbon_layout::resolve_column;

/// Label given to newly created groups.
pub const NEW_GROUP_LABEL: &str = "New Group";
/// Label given to newly created components.
pub const NEW_COMPONENT_LABEL: &str = "New Component";
/// Label given to newly created dropdown items.
pub const NEW_ITEM_LABEL: &str = "New Item";

/// An edit to the ribbon tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RibbonCommand {
    /// Insert a new group after `insert_after`, or append it
    CreateGroup {
        /// Group the new one follows
        insert_after: Option<usize>,
    },
    /// Insert a new component after `insert_after`, or append it
    CreateComponent {
        /// Target group
        group: usize,
        /// Component the new one follows
        insert_after: Option<usize>,
    },
    /// Turn a component into an (empty) dropdown
    CreateDropdown {
        /// Target group
        group: usize,
        /// Target component
        component: usize,
    },
    /// Turn a dropdown back into a plain component
    DestroyDropdown {
        /// Target group
        group: usize,
        /// Target component
        component: usize,
    },
    /// Add a column to a group
    AddColumn {
        /// Target group
        group: usize,
    },
    /// Remove the last column of a group
    RemoveColumn {
        /// Target group
        group: usize,
    },
    /// Move a component one column to the left
    MoveLeft {
        /// Target group
        group: usize,
        /// Target component
        component: usize,
    },
    /// Move a component one column to the right
    MoveRight {
        /// Target group
        group: usize,
        /// Target component
        component: usize,
    },
    /// Rename a group
    RenameGroup {
        /// Target group
        group: usize,
        /// New label (trimmed before use)
        label: String,
    },
    /// Rename a component
    RenameComponent {
        /// Target group
        group: usize,
        /// Target component
        component: usize,
        /// New label (trimmed before use)
        label: String,
    },
    /// Append an item to a component's dropdown
    AddSubcomponent {
        /// Target group
        group: usize,
        /// Target component
        component: usize,
    },
    /// Rename a dropdown item
    RenameSubcomponent {
        /// Target group
        group: usize,
        /// Target component
        component: usize,
        /// Target item
        subcomponent: usize,
        /// New label (trimmed before use)
        label: String,
    },
}

/// Result of applying a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    /// The tree changed
    Applied,
    /// The command was a no-op
    Ignored,
}

impl CommandOutcome {
    /// Whether the tree changed.
    #[must_use]
    pub const fn is_applied(self) -> bool {
        matches!(self, Self::Applied)
    }

    const fn from_changed(changed: bool) -> Self {
        if changed {
            Self::Applied
        } else {
            Self::Ignored
        }
    }
}

/// Owner of the session's ribbon tree.
#[derive(Debug, Clone, Default)]
pub struct RibbonEditor {
    groups: Vec<RibbonGroup>,
    ids: IdGenerator,
}

impl RibbonEditor {
    /// Creates an editor over `groups`.
    #[must_use]
    pub fn new(groups: Vec<RibbonGroup>) -> Self {
        Self {
            groups,
            ids: IdGenerator::new(),
        }
    }

    /// Read-only view of the tree.
    #[must_use]
    pub fn groups(&self) -> &[RibbonGroup] {
        &self.groups
    }

    /// Group at `index`.
    #[must_use]
    pub fn group(&self, index: usize) -> Option<&RibbonGroup> {
        self.groups.get(index)
    }

    /// Component at (`group`, `component`).
    #[must_use]
    pub fn component(&self, group: usize, component: usize) -> Option<&RibbonComponent> {
        self.groups.get(group)?.components.get(component)
    }

    /// Applies `command` to the tree.
    pub fn apply(&mut self, command: &RibbonCommand) -> CommandOutcome {
        let outcome = match command {
            RibbonCommand::CreateGroup { insert_after } => {
                self.create_group(*insert_after);
                CommandOutcome::Applied
            }
            RibbonCommand::CreateComponent {
                group,
                insert_after,
            } => CommandOutcome::from_changed(self.create_component(*group, *insert_after)),
            RibbonCommand::CreateDropdown { group, component } => {
                CommandOutcome::from_changed(self.update_component(*group, *component, |c| {
                    if c.subcomponents.is_some() {
                        return false;
                    }
                    c.subcomponents = Some(Vec::new());
                    true
                }))
            }
            RibbonCommand::DestroyDropdown { group, component } => {
                CommandOutcome::from_changed(
                    self.update_component(*group, *component, |c| c.subcomponents.take().is_some()),
                )
            }
            RibbonCommand::AddColumn { group } => {
                CommandOutcome::from_changed(self.update_group(*group, |g| {
                    let columns = g.column_count();
                    if columns >= MAX_COLUMNS {
                        return false;
                    }
                    g.columns = Some(columns + 1);
                    true
                }))
            }
            RibbonCommand::RemoveColumn { group } => {
                CommandOutcome::from_changed(self.update_group(*group, remove_column))
            }
            RibbonCommand::MoveLeft { group, component } => {
                CommandOutcome::from_changed(self.move_component(*group, *component, Shift::Left))
            }
            RibbonCommand::MoveRight { group, component } => {
                CommandOutcome::from_changed(self.move_component(*group, *component, Shift::Right))
            }
            RibbonCommand::RenameGroup { group, label } => {
                CommandOutcome::from_changed(self.update_group(*group, |g| rename(&mut g.label, label)))
            }
            RibbonCommand::RenameComponent {
                group,
                component,
                label,
            } => CommandOutcome::from_changed(
                self.update_component(*group, *component, |c| rename(&mut c.label, label)),
            ),
            RibbonCommand::AddSubcomponent { group, component } => {
                CommandOutcome::from_changed(self.add_subcomponent(*group, *component))
            }
            RibbonCommand::RenameSubcomponent {
                group,
                component,
                subcomponent,
                label,
            } => CommandOutcome::from_changed(self.update_component(*group, *component, |c| {
                c.subcomponents
                    .as_mut()
                    .and_then(|items| items.get_mut(*subcomponent))
                    .is_some_and(|item| rename(&mut item.label, label))
            })),
        };

        match outcome {
            CommandOutcome::Applied => debug!(?command, "Applied ribbon command"),
            CommandOutcome::Ignored => debug!(?command, "Ignored ribbon command"),
        }
        outcome
    }

    fn add_subcomponent(&mut self, group: usize, component: usize) -> bool {
        if self.component(group, component).is_none() {
            return false;
        }
        let id = self.ids.next(IdKind::Subcomponent);
        self.update_component(group, component, |c| {
            c.subcomponents
                .get_or_insert_with(Vec::new)
                .push(RibbonSubcomponent::new(id, NEW_ITEM_LABEL));
            true
        })
    }

    fn create_group(&mut self, insert_after: Option<usize>) {
        let group =
            RibbonGroup::new(self.ids.next(IdKind::Group), NEW_GROUP_LABEL).with_columns(1);
        let position = insert_position(insert_after, self.groups.len());
        self.groups.insert(position, group);
    }

    fn create_component(&mut self, group_index: usize, insert_after: Option<usize>) -> bool {
        if group_index >= self.groups.len() {
            return false;
        }
        let id = self.ids.next(IdKind::Component);
        let group = &mut self.groups[group_index];
        let columns = group.column_count();
        let position = insert_position(insert_after, group.components.len());

        // Inserted components join the column of the one they follow
        let column = match insert_after.and_then(|i| group.components.get(i).map(|c| (i, c))) {
            Some((anchor, component)) => resolve_column(component, anchor, columns),
            None => group.components.len() % columns,
        };

        group.components.insert(
            position,
            RibbonComponent::new(id, NEW_COMPONENT_LABEL).with_column(column),
        );
        true
    }

    fn move_component(&mut self, group_index: usize, component_index: usize, shift: Shift) -> bool {
        self.update_group(group_index, |group| {
            let columns = group.column_count();
            let Some(component) = group.components.get_mut(component_index) else {
                return false;
            };
            let current = resolve_column(component, component_index, columns);
            let target = match shift {
                Shift::Left if current > 0 => current - 1,
                Shift::Right if current + 1 < columns => current + 1,
                _ => return false,
            };
            component.column = Some(target);
            true
        })
    }

    fn update_group(&mut self, index: usize, f: impl FnOnce(&mut RibbonGroup) -> bool) -> bool {
        self.groups.get_mut(index).is_some_and(f)
    }

    fn update_component(
        &mut self,
        group: usize,
        component: usize,
        f: impl FnOnce(&mut RibbonComponent) -> bool,
    ) -> bool {
        self.groups
            .get_mut(group)
            .and_then(|g| g.components.get_mut(component))
            .is_some_and(f)
    }
}

#[derive(Debug, Clone, Copy)]
enum Shift {
    Left,
    Right,
}

fn insert_position(insert_after: Option<usize>, len: usize) -> usize {
    insert_after.map_or(len, |i| (i + 1).min(len))
}

fn remove_column(group: &mut RibbonGroup) -> bool {
    let columns = group.column_count();
    if columns <= 1 {
        return false;
    }
    let remaining = columns - 1;
    group.columns = Some(remaining);
    for component in &mut group.components {
        if let Some(column) = component.column {
            component.column = Some(column.min(remaining - 1));
        }
    }
    true
}

/// Replaces `label` with the trimmed `input`. Blank input keeps the old label.
fn rename(label: &mut String, input: &str) -> bool {
    let trimmed = input.trim();
    if trimmed.is_empty() || trimmed == label {
        return false;
    }
    *label = trimmed.to_string();
    true
}
