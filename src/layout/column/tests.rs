use std::rc::Rc;

use super::Column;
use crate::layout::LayoutElement;

impl<W: LayoutElement> Column<W> {
    pub fn verify_invariants(&self) {
        assert!(!self.tiles.is_empty(), "columns can't be empty");
        assert!(self.active_tile_idx < self.tiles.len());
        assert!(self.geom.size.w >= 0., "column width must not be negative");

        for tile in &self.tiles {
            assert!(Rc::ptr_eq(&self.options, tile.options()));
            tile.verify_invariants();
        }
    }
}
