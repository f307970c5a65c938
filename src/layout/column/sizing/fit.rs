use crate::layout::column::Column;
use crate::layout::row_types::RowView;
use crate::layout::types::{FitSize, Reorder};
use crate::layout::LayoutElement;
use crate::utils::Rectangle;

impl<W: LayoutElement> Column<W> {
    /// Stretches a run of windows so that together they fill the view, keeping their relative
    /// heights.
    ///
    /// Every window of the run becomes Free-height and the run starts at the top of the view.
    pub fn fit_size(&mut self, mode: FitSize, row: &RowView) {
        let _span = tracy_client::span!("Column::fit_size");

        if self.tiles.is_empty() {
            return;
        }

        self.reorder = Reorder::Auto;

        let area = row.area;
        let idx = self.active_tile_idx;
        let last = self.tiles.len() - 1;

        let run = match mode {
            FitSize::Active => Some((idx, idx)),
            FitSize::Visible => {
                let start = (0..=last).find(|&i| self.overlaps_view(i, area));
                let end = (0..=last).rev().find(|&i| self.overlaps_view(i, area));
                start.zip(end)
            }
            FitSize::All => Some((0, last)),
            FitSize::ToEnd => Some((idx, last)),
            FitSize::ToBeg => Some((0, idx)),
        };
        let Some((from, to)) = run else {
            debug!(column = %self.id, ?mode, "no window to fit");
            return;
        };

        let total: f64 = self.tiles[from..=to].iter().map(|tile| tile.geom_h()).sum();
        let available = area.size.h - self.options.gaps.y * (to - from) as f64;
        if total <= 0. || available <= 0. {
            warn!(column = %self.id, total, available, "no room to fit windows");
            return;
        }

        for tile in &mut self.tiles[from..=to] {
            tile.set_height_free();
            tile.set_geom_h(tile.geom_h() / total * available);
        }

        let x = self.geom.loc.x;
        self.tiles[from].move_to_top(x, area);
        self.adjust_windows(from, true);
    }

    fn overlaps_view(&self, idx: usize, area: Rectangle) -> bool {
        let tile = &self.tiles[idx];
        let y0 = tile.geom_y().round();
        let y1 = (y0 + tile.geom_h()).round();

        (y0 >= area.top() && y0 < area.bottom())
            || (y1 > area.top() && y1 <= area.bottom())
            // Taller than the view. Window heights never exceed the view, so this should not
            // happen.
            || (y0 < area.top() && y1 >= area.bottom())
    }
}
