//! Column/row layout of a ribbon group.
//!
//! A group is drawn as a grid of `columns` tracks. Each component sits in a
//! column (explicit, or `index mod columns` for legacy data) and takes the
//! next free row of that column in list order. A component alone in its
//! column spans every row of the group.

use serde::Serialize;

use crate::models::{RibbonComponent, RibbonGroup};

/// Resolves the column a component occupies.
///
/// Explicit columns beyond the last track are clamped onto it.
#[must_use]
pub fn resolve_column(component: &RibbonComponent, index: usize, columns: usize) -> usize {
    let columns = columns.max(1);
    match component.column {
        Some(column) => column.min(columns - 1),
        None => index % columns,
    }
}

/// One emitted grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GridCell {
    /// A component starting at (`row`, `column`)
    Component {
        /// Index into `group.components`
        index: usize,
        /// Starting row
        row: usize,
        /// Column
        column: usize,
        /// Number of rows covered, starting at `row`
        row_span: usize,
    },
    /// Empty cell
    Placeholder {
        /// Row
        row: usize,
        /// Column
        column: usize,
    },
}

impl GridCell {
    /// Row the cell starts on.
    #[must_use]
    pub const fn row(&self) -> usize {
        match self {
            Self::Component { row, .. } | Self::Placeholder { row, .. } => *row,
        }
    }

    /// Column of the cell.
    #[must_use]
    pub const fn column(&self) -> usize {
        match self {
            Self::Component { column, .. } | Self::Placeholder { column, .. } => *column,
        }
    }

    /// Rows covered by the cell.
    #[must_use]
    pub const fn row_span(&self) -> usize {
        match self {
            Self::Component { row_span, .. } => *row_span,
            Self::Placeholder { .. } => 1,
        }
    }

    /// Component index, if this cell holds one.
    #[must_use]
    pub const fn component_index(&self) -> Option<usize> {
        match self {
            Self::Component { index, .. } => Some(*index),
            Self::Placeholder { .. } => None,
        }
    }
}

/// Resolved layout of one group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupLayout {
    /// Column count (at least one)
    pub columns: usize,
    /// Height of the tallest column (at least one)
    pub rows_count: usize,
    /// Component indices per column, in list order
    pub column_members: Vec<Vec<usize>>,
    /// Resolved column per component index
    pub resolved_columns: Vec<usize>,
}

impl GroupLayout {
    /// Computes the layout of `group`.
    #[must_use]
    pub fn compute(group: &RibbonGroup) -> Self {
        let columns = group.column_count();
        let mut column_members = vec![Vec::new(); columns];
        let mut resolved_columns = Vec::with_capacity(group.components.len());

        for (index, component) in group.components.iter().enumerate() {
            let column = resolve_column(component, index, columns);
            column_members[column].push(index);
            resolved_columns.push(column);
        }

        let rows_count = column_members
            .iter()
            .map(Vec::len)
            .max()
            .unwrap_or(0)
            .max(1);

        Self {
            columns,
            rows_count,
            column_members,
            resolved_columns,
        }
    }

    /// Whether the group has no components.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.resolved_columns.is_empty()
    }

    /// Column of the component at `index`.
    #[must_use]
    pub fn column_of(&self, index: usize) -> Option<usize> {
        self.resolved_columns.get(index).copied()
    }

    /// Row the component at `index` starts on.
    #[must_use]
    pub fn row_of(&self, index: usize) -> Option<usize> {
        let column = self.column_of(index)?;
        self.column_members[column].iter().position(|&i| i == index)
    }

    /// Whether the component at `index` is alone in its column.
    #[must_use]
    pub fn is_sole_occupant(&self, index: usize) -> bool {
        self.column_of(index)
            .is_some_and(|column| self.column_members[column].len() == 1)
    }

    /// Rows covered by the component at `index`.
    #[must_use]
    pub fn row_span(&self, index: usize) -> usize {
        if self.is_sole_occupant(index) {
            self.rows_count
        } else {
            1
        }
    }

    /// Emits the grid row-major, skipping cells covered by a span from above.
    #[must_use]
    pub fn cells(&self) -> Vec<GridCell> {
        if self.is_empty() {
            return Vec::new();
        }

        // First row not yet covered, per column
        let mut covered_until = vec![0usize; self.columns];
        let mut cells = Vec::with_capacity(self.rows_count * self.columns);

        for row in 0..self.rows_count {
            for column in 0..self.columns {
                if covered_until[column] > row {
                    continue;
                }
                match self.column_members[column].get(row) {
                    Some(&index) => {
                        let row_span = self.row_span(index);
                        covered_until[column] = row + row_span;
                        cells.push(GridCell::Component {
                            index,
                            row,
                            column,
                            row_span,
                        });
                    }
                    None => {
                        covered_until[column] = row + 1;
                        cells.push(GridCell::Placeholder { row, column });
                    }
                }
            }
        }

        cells
    }

    /// Component indices in emission order.
    #[must_use]
    pub fn focus_order(&self) -> Vec<usize> {
        self.cells()
            .iter()
            .filter_map(GridCell::component_index)
            .collect()
    }
}
