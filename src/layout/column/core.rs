use std::rc::Rc;

use scroller_config::StandardSize;

use super::Column;
use crate::layout::row_types::RowView;
use crate::layout::tile::Tile;
use crate::layout::types::{ColumnId, Reorder};
use crate::layout::{LayoutElement, Options};
use crate::utils::Rectangle;

impl<W: LayoutElement> Column<W> {
    /// Creates a column for a newly mapped window.
    ///
    /// The column goes to the right of the row's active column, or at the center of the view if
    /// the row has no columns yet.
    pub fn new(window: W, row: &RowView, options: Rc<Options>) -> Self {
        let area = row.area;
        let width = options.sizes.column_default_width(&window);
        let height = options.sizes.window_default_height(&window);
        let tile = Tile::new(window, area, width, height, options.clone());

        let mut rv = Self::with_tiles(vec![tile], width, area, options);
        rv.update_width(width, area.size.w, false);

        rv.geom.loc.x = match row.active_column {
            Some(span) => span.x + span.w,
            None => area.loc.x + 0.5 * (area.size.w - rv.geom.size.w),
        };

        rv
    }

    /// Creates a column around a window taken out of another column.
    pub fn from_tile(tile: Tile<W>, width: StandardSize, max_w: f64, row: &RowView) -> Self {
        let options = tile.options().clone();
        let x = tile.geom_x();

        let mut rv = Self::with_tiles(vec![tile], width, row.area, options);
        rv.geom.loc.x = x;
        rv.update_width(width, max_w, false);
        rv
    }

    /// Creates a column holding windows split off `source`, with the same sizing and name.
    pub(super) fn from_selection(source: &Column<W>, tiles: Vec<Tile<W>>) -> Self {
        Self {
            id: ColumnId::next(),
            tiles,
            active_tile_idx: 0,
            width: source.width,
            geom: source.geom,
            reorder: source.reorder,
            maximized: source.maximized,
            name: source.name.clone(),
            options: source.options.clone(),
        }
    }

    fn with_tiles(
        tiles: Vec<Tile<W>>,
        width: StandardSize,
        area: Rectangle,
        options: Rc<Options>,
    ) -> Self {
        Self {
            id: ColumnId::next(),
            tiles,
            active_tile_idx: 0,
            width,
            geom: Rectangle::from_coords(area.loc.x, area.loc.y, 0., area.size.h),
            reorder: Reorder::Auto,
            maximized: None,
            name: None,
            options,
        }
    }

    pub fn update_options(&mut self, options: Rc<Options>) {
        for tile in &mut self.tiles {
            tile.set_options(options.clone());
        }
        self.options = options;
    }

    // ==================== Getters ====================

    pub fn id(&self) -> ColumnId {
        self.id
    }

    pub fn options(&self) -> &Rc<Options> {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn tiles(&self) -> impl Iterator<Item = &Tile<W>> + '_ {
        self.tiles.iter()
    }

    pub fn active_tile_idx(&self) -> usize {
        self.active_tile_idx
    }

    pub fn active_tile(&self) -> &Tile<W> {
        &self.tiles[self.active_tile_idx]
    }

    pub fn active_window(&self) -> &W {
        self.active_tile().window()
    }

    pub fn width(&self) -> StandardSize {
        self.width
    }

    pub fn geom(&self) -> Rectangle {
        self.geom
    }

    pub fn geom_x(&self) -> f64 {
        self.geom.loc.x
    }

    pub fn geom_w(&self) -> f64 {
        self.geom.size.w
    }

    pub fn set_geom_x(&mut self, x: f64) {
        self.geom.loc.x = x;
    }

    pub fn reorder(&self) -> Reorder {
        self.reorder
    }

    pub fn is_maximized(&self) -> bool {
        self.maximized.is_some()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name(&mut self, name: Option<String>) {
        self.name = name;
    }

    // ==================== Lookup ====================

    pub fn has_window(&self, window: &W::Id) -> bool {
        self.tiles.iter().any(|tile| tile.is_window(window))
    }

    pub fn position(&self, window: &W::Id) -> Option<usize> {
        self.tiles.iter().position(|tile| tile.is_window(window))
    }

    pub fn get_window(&self, window: &W::Id) -> Option<&Tile<W>> {
        self.tiles.iter().find(|tile| tile.is_window(window))
    }

    pub fn get_window_mut(&mut self, window: &W::Id) -> Option<&mut Tile<W>> {
        self.tiles.iter_mut().find(|tile| tile.is_window(window))
    }
}
