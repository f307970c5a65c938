use super::Column;
use crate::layout::row_types::RowView;
use crate::layout::types::Direction;
use crate::layout::LayoutElement;

impl<W: LayoutElement> Column<W> {
    /// Shifts every window by `delta` during a scroll gesture, without animation.
    pub fn scroll_update(&mut self, delta: f64) {
        for tile in &mut self.tiles {
            tile.scroll(delta);
        }
    }

    /// Ends a scroll gesture.
    ///
    /// The scroll offsets become part of the positions, and the focus moves to a window that the
    /// gesture brought into view: scrolling up activates the first window below the active one
    /// whose top edge is inside the view, scrolling down the first window above whose bottom
    /// edge is.
    pub fn scroll_end(&mut self, direction: Direction, row: &RowView) {
        for tile in &mut self.tiles {
            tile.commit_scroll();
        }

        if self.tiles.is_empty() {
            return;
        }

        let area = row.area;
        let inside = |y: f64| y > area.top() && y < area.bottom();
        let last = self.tiles.len() - 1;

        let idx = match direction {
            Direction::Up => (self.active_tile_idx + 1..=last)
                .find(|&i| inside(self.tiles[i].geom_y()))
                .unwrap_or(last),
            Direction::Down => (0..self.active_tile_idx)
                .rev()
                .find(|&i| inside(self.tiles[i].geom_bottom()))
                .unwrap_or(0),
            _ => return,
        };

        trace!(
            column = %self.id,
            ?direction,
            from = self.active_tile_idx,
            to = idx,
            "scroll ended"
        );
        self.active_tile_idx = idx;
    }
}
