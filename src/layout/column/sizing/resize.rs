use scroller_config::StandardSize;

use crate::layout::column::Column;
use crate::layout::row_types::RowView;
use crate::layout::types::Reorder;
use crate::layout::LayoutElement;
use crate::utils::Vector2D;

impl<W: LayoutElement> Column<W> {
    /// Resizes the column by `delta.x` and the active window by `delta.y`.
    ///
    /// Only whole-pixel deltas count. Nothing changes unless every affected window accepts the
    /// new size. Returns whether anything was resized.
    pub fn resize_active_window(&mut self, delta: Vector2D, row: &RowView) -> bool {
        let _span = tracy_client::span!("Column::resize_active_window");

        let area = row.area;
        let idx = self.active_tile_idx;
        let resize_w = delta.x.trunc() != 0.;
        let resize_h = delta.y.trunc() != 0.;

        if !resize_w && !resize_h {
            return false;
        }

        if resize_w {
            let column_w = self.geom.size.w;
            let accepted = self
                .tiles
                .iter()
                .all(|tile| tile.can_resize_width(column_w, area.size.w, delta.x));
            if !accepted {
                debug!(column = %self.id, dx = delta.x, "column can't be resized horizontally");
                return false;
            }
        }

        if resize_h {
            let accepted = self
                .tiles
                .iter()
                .enumerate()
                .all(|(i, tile)| tile.can_resize_height(area.size.h, i == idx, delta.y));
            if !accepted {
                debug!(column = %self.id, dy = delta.y, "window can't be resized vertically");
                return false;
            }
        }

        self.reorder = Reorder::Auto;

        if resize_w {
            self.maximized = None;
            self.width = StandardSize::Free;
            self.geom.size.w += delta.x;
            for tile in &mut self.tiles {
                tile.set_width(StandardSize::Free);
                tile.set_geom_w(self.geom.size.w);
            }
        }

        if resize_h {
            let tile = &mut self.tiles[idx];
            tile.set_geom_h(tile.geom_h() + delta.y);
            tile.set_height_free();
        }

        self.recalculate_col_geometry(row, false);
        true
    }
}
