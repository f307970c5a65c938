//! Window layout logic.
//!
//! Windows are grouped into vertical columns, and columns are arranged horizontally in a row that
//! scrolls past a fixed view. Each column arranges its windows vertically with a similar
//! scrolling discipline: the active window is kept fully visible while the other windows are
//! stacked above and below it.
//!
//! This module implements the column. The row containing it, the host compositor and the window
//! contents stay outside: the row is seen through a [`RowView`] snapshot, the host's focus
//! handling through [`HostFocus`], and each window through the [`LayoutElement`] trait.
//!
//! ## Module Structure
//!
//! ```text
//! layout/
//! ├── mod.rs       - LayoutElement trait, Options
//! ├── types.rs     - Reorder, FitSize, Direction, ModeModifier, ColumnId
//! ├── row_types.rs - RowView, HostFocus, WorkspaceId
//! ├── sizes.rs     - Standard size lists and cycling
//! ├── tile/        - Per-window geometry bookkeeping
//! └── column/      - The column itself
//! ```

use std::fmt;

use scroller_config::Config;

pub use scroller_config::StandardSize;

pub use self::column::Column;
pub use self::row_types::{ColumnSpan, HostFocus, RowView, WorkspaceId};
pub use self::sizes::Sizes;
pub use self::tile::Tile;
pub use self::types::{
    ColumnId, Direction, FitSize, FocusOnInsert, InsertPosition, ModeModifier, Reorder,
};
use crate::utils::{Rectangle, Size, Vector2D};
use crate::window::ResolvedWindowRules;

pub mod column;
pub mod row_types;
pub mod sizes;
pub mod tile;
pub mod types;


/// Columns can't be resized narrower than this fraction of the view width.
pub const MIN_COLUMN_WIDTH_FRACTION: f64 = 0.05;

pub trait LayoutElement {
    /// Type that can be used as a unique ID of this element.
    type Id: PartialEq + fmt::Debug + Clone;

    /// Unique ID of this element.
    fn id(&self) -> &Self::Id;

    /// Minimum size of the element.
    ///
    /// Zero means no minimum along that axis.
    fn min_size(&self) -> Size;

    /// Window rules resolved for this element.
    fn rules(&self) -> &ResolvedWindowRules;

    /// Requests the element to take this geometry.
    ///
    /// The layout treats the geometry as authoritative as soon as it is requested; `animate` only
    /// tells the host whether to animate towards it.
    fn request_geometry(&mut self, geometry: Rectangle, animate: bool);

    fn set_pinned(&mut self, pinned: bool);

    /// Tells the element not to take the input focus when it first appears.
    fn suppress_initial_focus(&mut self);

    fn move_to_workspace(&mut self, workspace: WorkspaceId);
}

/// Configurable properties of the layout.
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    /// Horizontal gap between columns (x) and vertical gap between windows (y).
    pub gaps: Vector2D,
    pub sizes: Sizes,
    /// Cycling the height of a Free window starts from the closest standard height.
    pub cycle_size_closest: bool,
    /// Focus moving past the end of a column changes workspace when there is no output there.
    pub focus_wrap_changes_workspace: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl Options {
    pub fn from_config(config: &Config) -> Self {
        let layout = &config.layout;
        let gaps = layout.gaps();

        Self {
            gaps: Vector2D::new(f64::from(gaps.horizontal), f64::from(gaps.vertical)),
            sizes: Sizes::from_config(layout),
            cycle_size_closest: layout.cyclesize_closest,
            focus_wrap_changes_workspace: layout.focus_wrap_changes_workspace,
        }
    }
}
