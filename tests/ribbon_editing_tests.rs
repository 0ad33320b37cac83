//! Ribbon layout and editing commands through the public service API.

use macrohard::models::{MenuTarget, RibbonComponent, RibbonGroup};
use macrohard::services::{
    available_actions, migrate_groups_to_column_tracking, CommandOutcome, GridCell, GroupLayout,
    MenuAction, RibbonCommand, RibbonEditor,
};

mod fixtures;
use fixtures::*;

fn migrated_editor(groups: &[RibbonGroup]) -> RibbonEditor {
    RibbonEditor::new(migrate_groups_to_column_tracking(groups))
}

// ============================================================================
// Layout
// ============================================================================

#[test]
fn test_legacy_components_resolve_to_index_mod_columns() {
    let groups = test_ribbon_wide();
    let layout = GroupLayout::compute(&groups[0]);

    for i in 0..7 {
        assert_eq!(layout.column_of(i), Some(i % 3), "component {i}");
    }
    assert_eq!(layout.rows_count, 3);
}

#[test]
fn test_sole_occupant_spans_all_rows() {
    let groups = test_ribbon_legacy();
    let layout = GroupLayout::compute(&groups[0]);

    assert_eq!(layout.column_members, vec![vec![0, 2], vec![1]]);
    assert_eq!(layout.rows_count, 2);
    assert_eq!(layout.row_span(1), 2);
    assert_eq!(
        layout.cells(),
        vec![
            GridCell::Component {
                index: 0,
                row: 0,
                column: 0,
                row_span: 1
            },
            GridCell::Component {
                index: 1,
                row: 0,
                column: 1,
                row_span: 2
            },
            GridCell::Component {
                index: 2,
                row: 1,
                column: 0,
                row_span: 1
            },
        ]
    );
}

#[test]
fn test_empty_group_emits_no_cells() {
    let groups = test_ribbon_legacy();
    assert!(GroupLayout::compute(&groups[2]).cells().is_empty());
}

#[test]
fn test_migration_preserves_layout() {
    let groups = test_ribbon_wide();
    let migrated = migrate_groups_to_column_tracking(&groups);

    assert_eq!(
        GroupLayout::compute(&groups[0]).cells(),
        GroupLayout::compute(&migrated[0]).cells()
    );
    assert!(migrated[0]
        .components
        .iter()
        .enumerate()
        .all(|(i, c)| c.column == Some(i % 3)));
}

// ============================================================================
// Commands
// ============================================================================

#[test]
fn test_remove_column_at_one_column_is_noop() {
    let mut editor = migrated_editor(&test_ribbon_legacy());
    let before = editor.groups().to_vec();

    let outcome = editor.apply(&RibbonCommand::RemoveColumn { group: 1 });

    assert_eq!(outcome, CommandOutcome::Ignored);
    assert_eq!(editor.groups(), before.as_slice());
}

#[test]
fn test_remove_column_clamps_explicit_columns() {
    let mut editor = migrated_editor(&test_ribbon_legacy());

    assert!(editor
        .apply(&RibbonCommand::RemoveColumn { group: 0 })
        .is_applied());

    let group = editor.group(0).unwrap();
    assert_eq!(group.column_count(), 1);
    assert!(group.components.iter().all(|c| c.column == Some(0)));
    assert_eq!(GroupLayout::compute(group).rows_count, 3);
}

#[test]
fn test_move_left_from_first_column_is_noop() {
    let mut editor = migrated_editor(&test_ribbon_legacy());
    let outcome = editor.apply(&RibbonCommand::MoveLeft {
        group: 0,
        component: 0,
    });
    assert_eq!(outcome, CommandOutcome::Ignored);
    assert_eq!(editor.component(0, 0).unwrap().column, Some(0));
}

#[test]
fn test_move_right_then_left_restores_layout() {
    let mut editor = migrated_editor(&test_ribbon_legacy());
    let original = GroupLayout::compute(editor.group(0).unwrap());

    editor.apply(&RibbonCommand::MoveRight {
        group: 0,
        component: 2,
    });
    let moved = GroupLayout::compute(editor.group(0).unwrap());
    assert_eq!(moved.column_members, vec![vec![0], vec![1, 2]]);

    editor.apply(&RibbonCommand::MoveLeft {
        group: 0,
        component: 2,
    });
    assert_eq!(GroupLayout::compute(editor.group(0).unwrap()), original);
}

#[test]
fn test_empty_rename_keeps_label() {
    let mut editor = migrated_editor(&test_ribbon_legacy());

    let outcome = editor.apply(&RibbonCommand::RenameComponent {
        group: 0,
        component: 1,
        label: "   ".to_string(),
    });

    assert_eq!(outcome, CommandOutcome::Ignored);
    assert_eq!(editor.component(0, 1).unwrap().label, "Cut");
}

#[test]
fn test_rename_is_trimmed() {
    let mut editor = migrated_editor(&test_ribbon_legacy());
    editor.apply(&RibbonCommand::RenameGroup {
        group: 2,
        label: "  Editing ".to_string(),
    });
    assert_eq!(editor.group(2).unwrap().label, "Editing");
}

#[test]
fn test_dropdown_lifecycle() {
    let mut editor = migrated_editor(&test_ribbon_legacy());

    assert!(editor
        .apply(&RibbonCommand::CreateDropdown {
            group: 0,
            component: 0,
        })
        .is_applied());
    assert!(editor
        .apply(&RibbonCommand::AddSubcomponent {
            group: 0,
            component: 0,
        })
        .is_applied());
    assert_eq!(editor.component(0, 0).unwrap().items()[0].label, "New Item");

    assert!(editor
        .apply(&RibbonCommand::DestroyDropdown {
            group: 0,
            component: 0,
        })
        .is_applied());
    assert!(!editor.component(0, 0).unwrap().is_dropdown());
}

#[test]
fn test_created_component_lands_in_next_column() {
    let mut editor = migrated_editor(&test_ribbon_legacy());
    editor.apply(&RibbonCommand::CreateComponent {
        group: 0,
        insert_after: None,
    });

    let group = editor.group(0).unwrap();
    assert_eq!(group.components.len(), 4);
    assert_eq!(group.components[3].column, Some(1));
    assert!(group.components[3].id.starts_with("comp-"));
}

#[test]
fn test_out_of_range_commands_are_ignored() {
    let mut editor = migrated_editor(&test_ribbon_legacy());
    let commands = [
        RibbonCommand::AddColumn { group: 9 },
        RibbonCommand::CreateComponent {
            group: 9,
            insert_after: None,
        },
        RibbonCommand::MoveRight {
            group: 0,
            component: 9,
        },
        RibbonCommand::RenameSubcomponent {
            group: 1,
            component: 0,
            subcomponent: 9,
            label: "X".to_string(),
        },
    ];
    for command in &commands {
        assert_eq!(editor.apply(command), CommandOutcome::Ignored, "{command:?}");
    }
}

// ============================================================================
// Context menu contents
// ============================================================================

#[test]
fn test_menu_contents_follow_target() {
    let groups = migrate_groups_to_column_tracking(&test_ribbon_legacy());

    assert_eq!(
        available_actions(&groups, MenuTarget::Ribbon),
        vec![MenuAction::CreateGroup]
    );
    assert_eq!(
        available_actions(&groups, MenuTarget::Group(1)),
        vec![MenuAction::CreateComponent, MenuAction::AddColumn]
    );
    // Paste sits in column 0 of a two-column group
    assert_eq!(
        available_actions(
            &groups,
            MenuTarget::Component {
                group: 0,
                component: 0
            }
        ),
        vec![MenuAction::CreateDropdown, MenuAction::MoveRight]
    );
    // Lone dropdown in a one-column group
    assert_eq!(
        available_actions(
            &groups,
            MenuTarget::Component {
                group: 1,
                component: 0
            }
        ),
        vec![MenuAction::DestroyDropdown]
    );
}

#[test]
fn test_menu_action_commands_apply() {
    let groups = vec![RibbonGroup::new("g", "G")
        .with_columns(2)
        .with_component(RibbonComponent::new("a", "A").with_column(0))];
    let mut editor = RibbonEditor::new(groups);

    let command = MenuAction::AddColumn
        .command(MenuTarget::Group(0))
        .unwrap();
    editor.apply(&command);
    assert_eq!(editor.group(0).unwrap().column_count(), 3);

    assert_eq!(MenuAction::AddColumn.command(MenuTarget::Ribbon), None);
}
