//! What a column sees of the row that contains it.
//!
//! The row itself lives outside of this crate. Every column operation that depends on the row
//! receives a [`RowView`] snapshot instead of a stored back-reference, and boundary focus moves
//! go through the [`HostFocus`] capability.

use std::fmt;

use super::types::{ColumnId, Direction, ModeModifier};
use crate::utils::Rectangle;

/// Workspace a row belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WorkspaceId(pub u64);

impl fmt::Display for WorkspaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identity and horizontal extent of a column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnSpan {
    pub id: ColumnId,
    pub x: f64,
    pub w: f64,
}

/// Read-only snapshot of a row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowView {
    /// Usable rectangle for the layout, outer gaps already removed.
    pub area: Rectangle,
    pub modifier: ModeModifier,
    /// The row's active column, if it has any.
    pub active_column: Option<ColumnSpan>,
    pub pinned_column: Option<ColumnId>,
    pub workspace: WorkspaceId,
}

impl RowView {
    pub fn new(area: Rectangle, workspace: WorkspaceId) -> Self {
        Self {
            area,
            modifier: ModeModifier::default(),
            active_column: None,
            pinned_column: None,
            workspace,
        }
    }

    pub fn is_active_column(&self, id: ColumnId) -> bool {
        self.active_column.is_some_and(|span| span.id == id)
    }

    pub fn is_pinned_column(&self, id: ColumnId) -> bool {
        self.pinned_column == Some(id)
    }
}

/// Host behavior used when focus leaves a column past its first or last window.
pub trait HostFocus {
    /// Whether there is an output next to the current one in this direction.
    fn has_output_in_direction(&self, direction: Direction) -> bool;

    /// Default focus movement of the host, towards another output.
    fn move_focus_to_output(&mut self, direction: Direction);

    /// Switches to a workspace relative to the current one.
    fn change_workspace(&mut self, delta: i32);
}
