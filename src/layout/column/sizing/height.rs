use scroller_config::StandardSize;

use crate::layout::column::Column;
use crate::layout::row_types::RowView;
use crate::layout::types::Reorder;
use crate::layout::LayoutElement;

impl<W: LayoutElement> Column<W> {
    /// Resolves the height token of every window against the row's view.
    pub fn update_heights(&mut self, row: &RowView) {
        let max_h = row.area.size.h;
        for tile in &mut self.tiles {
            tile.update_height(tile.height(), max_h);
        }
    }

    /// Moves the height of the active window `step` entries through the configured heights.
    pub fn cycle_size_active_window(&mut self, step: i32, row: &RowView) {
        let max_h = row.area.size.h;
        let sizes = &self.options.sizes;
        let tile = self.active_tile();

        let height = if tile.height().is_free() {
            let default = sizes.window_default_height(tile.window());
            if self.options.cycle_size_closest {
                sizes
                    .closest_window_height(tile.height_fraction(max_h), step)
                    .unwrap_or(default)
            } else {
                default
            }
        } else {
            sizes.next_window_height(tile.height(), step)
        };

        trace!(column = %self.id, from = %tile.height(), to = %height, "cycling window height");
        self.size_active_window(height, row);
    }

    /// Sets the height of the active window.
    pub fn size_active_window(&mut self, height: StandardSize, row: &RowView) {
        self.reorder = Reorder::Auto;

        let idx = self.active_tile_idx;
        self.tiles[idx].update_height(height, row.area.size.h);
        self.recalculate_col_geometry(row, true);
    }
}
