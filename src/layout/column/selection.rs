use std::mem;

use super::Column;
use crate::layout::row_types::RowView;
use crate::layout::LayoutElement;

impl<W: LayoutElement> Column<W> {
    pub fn selection_toggle(&mut self) {
        let idx = self.active_tile_idx;
        self.tiles[idx].selection_toggle();
    }

    pub fn selection_set(&mut self, window: &W::Id) -> bool {
        match self.get_window_mut(window) {
            Some(tile) => {
                tile.selection_set();
                true
            }
            None => false,
        }
    }

    pub fn selection_all(&mut self) {
        for tile in &mut self.tiles {
            tile.selection_set();
        }
    }

    pub fn selection_reset(&mut self) {
        for tile in &mut self.tiles {
            tile.selection_reset();
        }
    }

    pub fn selection_exists(&self) -> bool {
        self.tiles.iter().any(|tile| tile.is_selected())
    }

    /// Splits the selected windows off into a new column on `target`'s workspace.
    ///
    /// The windows keep their relative order and lose their selection mark. If the active window
    /// was taken, the first remaining window after it becomes active, else the last one before
    /// it. This column is left empty when every window was selected.
    pub fn selection_get(&mut self, target: &RowView) -> Option<Column<W>> {
        if !self.selection_exists() {
            return None;
        }

        let old_active = self.active_tile_idx;
        let active = if self.tiles[old_active].is_selected() {
            (old_active + 1..self.tiles.len())
                .find(|&i| !self.tiles[i].is_selected())
                .or_else(|| (0..old_active).rev().find(|&i| !self.tiles[i].is_selected()))
        } else {
            Some(old_active)
        };

        let mut kept = Vec::with_capacity(self.tiles.len());
        let mut taken = Vec::new();
        for (i, mut tile) in mem::take(&mut self.tiles).into_iter().enumerate() {
            if tile.is_selected() {
                tile.selection_reset();
                tile.move_to_workspace(target.workspace);
                taken.push(tile);
            } else {
                if Some(i) == active {
                    self.active_tile_idx = kept.len();
                }
                kept.push(tile);
            }
        }

        if active.is_none() {
            self.active_tile_idx = 0;
        }
        self.tiles = kept;

        debug!(
            column = %self.id,
            taken = taken.len(),
            kept = self.tiles.len(),
            workspace = %target.workspace,
            "split selection off column"
        );

        Some(Column::from_selection(self, taken))
    }

    /// Pins or unpins every window of the column.
    pub fn pin(&mut self, pinned: bool) {
        for tile in &mut self.tiles {
            tile.pin(pinned);
        }
    }
}
