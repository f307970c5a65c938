use std::cmp::min;

use scroller_config::StandardSize;

use super::Column;
use crate::layout::row_types::{HostFocus, RowView};
use crate::layout::tile::Tile;
use crate::layout::types::{Direction, FocusOnInsert, InsertPosition, Reorder};
use crate::layout::LayoutElement;

impl<W: LayoutElement> Column<W> {
    /// Adds a newly mapped window next to the active one, as the row's mode asks.
    pub fn add_active_window(&mut self, window: W, row: &RowView) {
        self.reorder = Reorder::Auto;

        let width = self.options.sizes.column_default_width(&window);
        let height = self.options.sizes.window_default_height(&window);
        let mut tile = Tile::new(window, row.area, width, height, self.options.clone());
        if row.is_pinned_column(self.id) {
            tile.pin(true);
        }

        let len = self.tiles.len();
        let idx = match row.modifier.position {
            InsertPosition::After => min(self.active_tile_idx + 1, len),
            InsertPosition::Before => min(self.active_tile_idx, len),
            InsertPosition::End => len,
            InsertPosition::Beginning => 0,
        };
        self.tiles.insert(idx, tile);
        self.place_inserted(idx);

        if idx <= self.active_tile_idx && len > 0 {
            self.active_tile_idx += 1;
        }

        match row.modifier.focus {
            FocusOnInsert::Focus => self.active_tile_idx = idx,
            FocusOnInsert::NoFocus => self.tiles[idx].window_mut().suppress_initial_focus(),
        }

        trace!(column = %self.id, idx, len = self.tiles.len(), "added window");
    }

    /// Removes a window and hands it back.
    ///
    /// The window below the removed one becomes active, or the one above if it was the last.
    pub fn remove_window(&mut self, window: &W::Id, row: &RowView) -> Option<W> {
        let idx = self.position(window)?;
        self.reorder = Reorder::Auto;

        if idx < self.active_tile_idx
            || (idx == self.active_tile_idx && idx + 1 == self.tiles.len())
        {
            self.active_tile_idx = self.active_tile_idx.saturating_sub(1);
        }

        let mut tile = self.tiles.remove(idx);
        if row.is_pinned_column(self.id) {
            tile.pin(false);
        }

        trace!(column = %self.id, idx, len = self.tiles.len(), "removed window");
        Some(tile.into_window())
    }

    /// Makes the window active if it is in this column.
    pub fn focus_window(&mut self, window: &W::Id) -> bool {
        match self.position(window) {
            Some(idx) => {
                self.active_tile_idx = idx;
                true
            }
            None => false,
        }
    }

    /// Inserts a window coming from another column right after the active one, and activates it.
    pub fn admit_window(&mut self, mut tile: Tile<W>) {
        self.reorder = Reorder::Auto;

        tile.set_options(self.options.clone());
        let idx = min(self.active_tile_idx + 1, self.tiles.len());
        self.tiles.insert(idx, tile);
        self.place_inserted(idx);
        self.active_tile_idx = idx;
    }

    /// Puts a freshly inserted window right below the window above it, or right above the window
    /// below it.
    fn place_inserted(&mut self, idx: usize) {
        let gap = self.options.gaps.y;
        let x = self.geom.loc.x;

        let y = if idx > 0 {
            self.tiles[idx - 1].geom_bottom() + gap
        } else if let Some(next) = self.tiles.get(1) {
            next.geom_y() - gap - self.tiles[0].geom_h()
        } else {
            self.tiles[idx].geom_y()
        };

        self.tiles[idx].move_to_pos(x, y);
    }

    /// Takes the active window out of this column.
    ///
    /// When a single window stays behind, the column width is restored from that window: a
    /// window resized by hand keeps its exact pixel width, a standard width is resolved against
    /// the row.
    pub fn expel_active(&mut self, row: &RowView) -> Tile<W> {
        self.reorder = Reorder::Auto;

        let idx = self.active_tile_idx;
        let tile = self.tiles.remove(idx);
        self.active_tile_idx = idx.saturating_sub(1);

        if let [remaining] = &self.tiles[..] {
            // The remaining window's width wins over the column's, even if the column is Free.
            let width = remaining.width();
            let max_w = if width == StandardSize::Free {
                remaining.geom_w()
            } else {
                row.area.size.w
            };
            self.update_width(width, max_w, false);
        }

        trace!(column = %self.id, idx, len = self.tiles.len(), "expelled window");
        tile
    }

    pub fn move_active_up(&mut self) -> bool {
        let idx = self.active_tile_idx;
        if idx == 0 {
            return false;
        }

        self.reorder = Reorder::Auto;
        self.tiles.swap(idx, idx - 1);
        self.active_tile_idx = idx - 1;
        true
    }

    pub fn move_active_down(&mut self) -> bool {
        let idx = self.active_tile_idx;
        if idx + 1 >= self.tiles.len() {
            return false;
        }

        self.reorder = Reorder::Auto;
        self.tiles.swap(idx, idx + 1);
        self.active_tile_idx = idx + 1;
        true
    }

    /// Moves the focus to the window above.
    ///
    /// Past the first window the focus goes to the output above if there is one, otherwise it
    /// wraps around to the last window or, without wrapping, may switch workspace. Returns whether
    /// the focus stayed in this column.
    pub fn move_focus_up(&mut self, wrap: bool, host: &mut dyn HostFocus) -> bool {
        if self.active_tile_idx > 0 {
            self.reorder = Reorder::Auto;
            self.active_tile_idx -= 1;
            return true;
        }

        self.focus_past_end(Direction::Up, wrap, host)
    }

    /// Moves the focus to the window below. See [`move_focus_up`](Self::move_focus_up).
    pub fn move_focus_down(&mut self, wrap: bool, host: &mut dyn HostFocus) -> bool {
        if self.active_tile_idx + 1 < self.tiles.len() {
            self.reorder = Reorder::Auto;
            self.active_tile_idx += 1;
            return true;
        }

        self.focus_past_end(Direction::Down, wrap, host)
    }

    fn focus_past_end(
        &mut self,
        direction: Direction,
        wrap: bool,
        host: &mut dyn HostFocus,
    ) -> bool {
        if host.has_output_in_direction(direction) {
            debug!(column = %self.id, ?direction, "focus leaves column towards another output");
            host.move_focus_to_output(direction);
            return false;
        }

        if wrap {
            self.reorder = Reorder::Auto;
            self.active_tile_idx = match direction {
                Direction::Up => self.tiles.len() - 1,
                _ => 0,
            };
            return true;
        }

        if self.options.focus_wrap_changes_workspace {
            let delta = if direction == Direction::Up { -1 } else { 1 };
            debug!(column = %self.id, delta, "focus leaves column towards another workspace");
            host.change_workspace(delta);
        }

        false
    }
}
