use super::Column;
use crate::layout::row_types::RowView;
use crate::layout::types::{Direction, Reorder};
use crate::layout::LayoutElement;
use crate::utils::{Rectangle, Vector2D};

impl<W: LayoutElement> Column<W> {
    /// Places the windows of the column vertically and commits the result.
    ///
    /// The active window is placed first so that it is fully visible, then the other windows are
    /// stacked above and below it.
    pub fn recalculate_col_geometry(&mut self, row: &RowView, animate: bool) {
        let _span = tracy_client::span!("Column::recalculate_col_geometry");

        if self.tiles.is_empty() {
            return;
        }

        let area = row.area;
        let gap = self.options.gaps.y;
        let x = self.geom.loc.x;
        let idx = self.active_tile_idx;
        let last = self.tiles.len() - 1;
        let has_prev = idx > 0;
        let has_next = idx < last;

        let active_y0 = self.tiles[idx].geom_y().round();
        let active_y1 = (active_y0 + self.tiles[idx].geom_h()).round();

        if row.modifier.center_active_window && row.is_active_column(self.id) {
            let y = area.top() + 0.5 * (area.size.h - (active_y1 - active_y0));
            self.tiles[idx].move_to_pos(x, y);
        } else if active_y0 < area.top() {
            // Partially above the view: snap to the nearest edge, keeping the last window at the
            // bottom.
            if idx == last && has_prev {
                self.tiles[idx].move_to_bottom(x, area);
            } else {
                self.tiles[idx].move_to_top(x, area);
            }
        } else if active_y1 > area.bottom() {
            if idx == 0 && has_next {
                self.tiles[idx].move_to_top(x, area);
            } else {
                self.tiles[idx].move_to_bottom(x, area);
            }
        } else if self.reorder == Reorder::Auto {
            let keep_current = (has_prev && self.is_inside_view(idx - 1, area))
                || (has_next && self.is_inside_view(idx + 1, area));

            if keep_current {
                let span = self.get_height();
                if (span.y - span.x).round() >= area.size.h {
                    if idx == 0 {
                        self.tiles[idx].move_to_top(x, area);
                    } else if idx == last {
                        self.tiles[idx].move_to_bottom(x, area);
                    } else {
                        self.tiles[idx].set_geom_x(x);
                    }
                } else {
                    self.tiles[idx].set_geom_x(x);
                }
            } else {
                self.place_with_neighbor(area, gap);
            }
        } else {
            self.tiles[idx].set_geom_x(x);
        }

        self.adjust_windows(idx, animate);
    }

    /// Brings a neighbor into view together with the active window when both fit.
    fn place_with_neighbor(&mut self, area: Rectangle, gap: f64) {
        let x = self.geom.loc.x;
        let idx = self.active_tile_idx;
        let active_h = self.tiles[idx].geom_h();
        let prev_h = (idx > 0).then(|| self.tiles[idx - 1].geom_h());
        let next_h = self.tiles.get(idx + 1).map(|tile| tile.geom_h());
        let fits = |h: f64| (active_h + gap + h).round() <= area.size.h;

        match (prev_h, next_h) {
            (_, Some(next_h)) if fits(next_h) => {
                let y = area.bottom() - next_h - gap - active_h;
                self.tiles[idx].move_to_pos(x, y);
            }
            (Some(prev_h), Some(_)) => {
                if fits(prev_h) {
                    self.tiles[idx].move_to_pos(x, area.top() + prev_h + gap);
                } else {
                    self.tiles[idx].set_geom_x(x);
                }
            }
            (None, Some(_)) => self.tiles[idx].move_to_top(x, area),
            (Some(prev_h), None) => {
                if fits(prev_h) {
                    self.tiles[idx].move_to_pos(x, area.top() + prev_h + gap);
                } else {
                    self.tiles[idx].move_to_bottom(x, area);
                }
            }
            (None, None) => self.tiles[idx].move_to_top(x, area),
        }
    }

    fn is_inside_view(&self, idx: usize, area: Rectangle) -> bool {
        let tile = &self.tiles[idx];
        let y0 = tile.geom_y().round();
        let y1 = (y0 + tile.geom_h()).round();
        area.contains_span_y(y0, y1)
    }

    /// Lays the windows out top to bottom from the top of the view, for the overview.
    pub fn recalculate_col_geometry_overview(&mut self, row: &RowView) {
        if self.tiles.is_empty() {
            return;
        }

        let x = self.geom.loc.x;
        self.tiles[0].move_to_pos(x, row.area.top());
        self.adjust_windows(0, true);
    }

    /// Stacks every window around the one at `anchor` and commits the geometry.
    ///
    /// The anchor keeps its vertical position. Windows are separated by the vertical gap and all
    /// take the column's horizontal slot.
    pub fn adjust_windows(&mut self, anchor: usize, animate: bool) {
        let gap = self.options.gaps.y;

        for i in (0..anchor).rev() {
            let y = self.tiles[i + 1].geom_y() - gap - self.tiles[i].geom_h();
            let x = self.geom.loc.x;
            self.tiles[i].move_to_pos(x, y);
        }

        for i in anchor + 1..self.tiles.len() {
            let y = self.tiles[i - 1].geom_bottom() + gap;
            let x = self.geom.loc.x;
            self.tiles[i].move_to_pos(x, y);
        }

        let Rectangle { loc, size } = self.geom;
        for tile in &mut self.tiles {
            tile.set_geom_x(loc.x);
            tile.set_geom_w(size.w);
            tile.commit(animate);
        }
    }

    /// Aligns the active window to the top, bottom or center of the view, where it stays until
    /// the column changes structurally.
    pub fn align_window(&mut self, direction: Direction, row: &RowView) {
        let x = self.geom.loc.x;
        let area = row.area;
        let tile = &mut self.tiles[self.active_tile_idx];

        match direction {
            Direction::Up => tile.move_to_top(x, area),
            Direction::Down => tile.move_to_bottom(x, area),
            Direction::Center => tile.move_to_center(x, area),
        }

        self.reorder = Reorder::Lazy;
        self.adjust_windows(self.active_tile_idx, true);
    }

    /// Top edge of the first window (x) and bottom edge of the last window (y).
    pub fn get_height(&self) -> Vector2D {
        match (self.tiles.first(), self.tiles.last()) {
            (Some(first), Some(last)) => Vector2D::new(first.geom_y(), last.geom_bottom()),
            _ => Vector2D::ZERO,
        }
    }
}
