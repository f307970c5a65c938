use scroller_config::StandardSize;

use crate::layout::column::Column;
use crate::layout::row_types::RowView;
use crate::layout::types::Reorder;
use crate::layout::LayoutElement;

impl<W: LayoutElement> Column<W> {
    /// Sets the width token and resolves it against `max_w`.
    ///
    /// A maximized column always takes `max_w`, and so does a Free token. With
    /// `propagate_to_children` every window of the column takes the same width token.
    pub fn update_width(&mut self, size: StandardSize, max_w: f64, propagate_to_children: bool) {
        self.geom.size.w = match size.proportion() {
            Some(proportion) if self.maximized.is_none() => proportion * max_w,
            _ => max_w,
        };
        self.width = size;

        if propagate_to_children {
            for tile in &mut self.tiles {
                tile.set_width(size);
            }
        }
    }

    pub fn toggle_maximized(&mut self, max_w: f64) {
        match self.maximized.take() {
            Some(prev_w) if self.width.is_free() => self.geom.size.w = prev_w,
            Some(_) => self.update_width(self.width, max_w, false),
            None => {
                self.maximized = Some(self.geom.size.w);
                self.geom.size.w = max_w;
            }
        }

        debug!(column = %self.id, maximized = self.is_maximized(), "toggled maximized");
    }

    /// Moves the column width `step` entries through the configured widths.
    ///
    /// A column resized by hand restarts from the width closest to its current one when
    /// `cyclesize-closest` is on, otherwise from the default width.
    pub fn cycle_size_active_column(&mut self, step: i32, row: &RowView) {
        let max_w = row.area.size.w;
        let sizes = &self.options.sizes;

        let width = if self.width.is_free() {
            let default = sizes.column_default_width(self.active_window());
            if self.options.cycle_size_closest && max_w > 0. {
                sizes
                    .closest_column_width(self.geom.size.w / max_w, step)
                    .unwrap_or(default)
            } else {
                default
            }
        } else {
            sizes.next_column_width(self.width, step)
        };

        trace!(column = %self.id, from = %self.width, to = %width, "cycling column width");

        self.reorder = Reorder::Auto;
        self.update_width(width, max_w, true);
        self.recalculate_col_geometry(row, true);
    }
}
