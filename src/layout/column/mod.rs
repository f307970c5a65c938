//! Column layout management.
//!
//! A column is a vertical stack of windows occupying one horizontal slot of a row. The column
//! decides the width of the slot and the vertical placement of every window in it, keeping the
//! active window visible while the rest of the stack scrolls past the view.
//!
//! ## Module Structure
//!
//! ```text
//! column/
//! ├── mod.rs        - Column struct
//! ├── core.rs       - Construction, getters, lookup
//! ├── operations.rs - Adding, removing, moving windows and focus
//! ├── layout.rs     - Vertical placement of the windows
//! ├── scroll.rs     - Scroll gestures
//! ├── selection.rs  - Selection marks and splitting
//! └── sizing/       - Width, height, fit and manual resize
//! ```

mod core;
mod layout;
mod operations;
mod scroll;
mod selection;
mod sizing;
#[cfg(test)]
mod tests;

use std::rc::Rc;

use scroller_config::StandardSize;

use super::tile::Tile;
use super::types::{ColumnId, Reorder};
use super::{LayoutElement, Options};
use crate::utils::Rectangle;

/// A column of windows.
#[derive(Debug)]
pub struct Column<W: LayoutElement> {
    /// Identity of this column within the process.
    pub(crate) id: ColumnId,
    /// Windows in this column, top to bottom.
    ///
    /// Must be non-empty, except right before the owner destroys the column.
    pub(crate) tiles: Vec<Tile<W>>,
    /// Index of the currently active window.
    pub(crate) active_tile_idx: usize,
    /// Desired width of this column.
    pub(crate) width: StandardSize,
    /// Geometry of the column.
    ///
    /// Only `x` and `w` are meaningful; the vertical placement lives in the tiles.
    pub(crate) geom: Rectangle,
    /// Whether recalculating the geometry may move the active window.
    pub(crate) reorder: Reorder,
    /// Width the column had before it was maximized.
    pub(crate) maximized: Option<f64>,
    /// User-facing name of the column.
    pub(crate) name: Option<String>,
    /// Configurable properties of the layout.
    pub(crate) options: Rc<Options>,
}
