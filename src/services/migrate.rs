//! Migration of legacy ribbon data to explicit column tracking.

use crate::models::RibbonGroup;

/// Returns a copy of `groups` where every component has an explicit column.
///
/// Components without a `column` get the column they were implicitly drawn
/// in (`index mod columns`). Components that already carry one are kept as is.
#[must_use]
pub fn migrate_groups_to_column_tracking(groups: &[RibbonGroup]) -> Vec<RibbonGroup> {
    groups
        .iter()
        .map(|group| {
            let columns = group.column_count();
            let mut group = group.clone();
            for (index, component) in group.components.iter_mut().enumerate() {
                if component.column.is_none() {
                    component.column = Some(index % columns);
                }
            }
            group
        })
        .collect()
}

/// Whether every component of every group already has an explicit column.
#[must_use]
pub fn is_column_tracked(groups: &[RibbonGroup]) -> bool {
    groups
        .iter()
        .flat_map(|group| group.components.iter())
        .all(|component| component.column.is_some())
}
