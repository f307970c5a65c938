//! Shared types used across layout modules.

use std::fmt;

use crate::utils::id::IdCounter;

static COLUMN_ID_COUNTER: IdCounter = IdCounter::new();

/// Identity of a column, unique for the lifetime of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColumnId(u64);

impl ColumnId {
    pub(crate) fn next() -> ColumnId {
        ColumnId(COLUMN_ID_COUNTER.next())
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Whether a geometry recalculation may move the active window.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Reorder {
    /// Windows can be repositioned freely to keep the active one visible.
    #[default]
    Auto,
    /// The active window keeps its on-screen position.
    ///
    /// Set by an explicit alignment; any structural change goes back to `Auto`.
    Lazy,
}

/// Run of windows that [`fit_size`](super::column::Column::fit_size) stretches over the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FitSize {
    /// Only the active window.
    Active,
    /// Every window that is at least partially inside the view.
    Visible,
    /// Every window of the column.
    All,
    /// From the active window to the last one.
    ToEnd,
    /// From the first window to the active one.
    ToBeg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Center,
}

/// Where a newly added window goes relative to the active one.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum InsertPosition {
    #[default]
    After,
    Before,
    End,
    Beginning,
}

/// Whether a newly added window takes the focus.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum FocusOnInsert {
    #[default]
    Focus,
    NoFocus,
}

/// Placement policy of a row, read by its columns.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ModeModifier {
    pub position: InsertPosition,
    pub focus: FocusOnInsert,
    /// Keep the active window of the active column vertically centered.
    pub center_active_window: bool,
}
