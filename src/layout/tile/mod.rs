//! Window inside a column.
//!
//! The tile stores where the column wants its window: the horizontal slot of the column and the
//! vertical extent of the window. Gaps between columns are cut out of the slot when the geometry
//! is committed to the window; gaps between windows of a column are left by the column itself.

use std::rc::Rc;

use scroller_config::StandardSize;

use super::{LayoutElement, Options, WorkspaceId};
use crate::utils::Rectangle;

#[derive(Debug)]
pub struct Tile<W: LayoutElement> {
    /// The window itself.
    window: W,

    /// Horizontal slot of the column (x, w) and vertical extent of the window (y, h).
    geom: Rectangle,

    /// Width the window has inside its column.
    ///
    /// Used to restore the column width when the window ends up alone in a column.
    width: StandardSize,

    /// Height of the window.
    height: StandardSize,

    /// Whether the window is part of the current selection.
    selected: bool,

    /// Whether the window belongs to the pinned column.
    pinned: bool,

    /// Vertical offset of an ongoing scroll gesture.
    scroll_offset: f64,

    /// Configurable properties of the layout.
    options: Rc<Options>,
}

impl<W: LayoutElement> Tile<W> {
    /// Creates a tile at the top of `area` with the given sizes.
    pub fn new(
        window: W,
        area: Rectangle,
        width: StandardSize,
        height: StandardSize,
        options: Rc<Options>,
    ) -> Self {
        let mut rv = Self {
            window,
            geom: Rectangle::from_coords(area.loc.x, area.loc.y, 0., area.size.h),
            width,
            height,
            selected: false,
            pinned: false,
            scroll_offset: 0.,
            options,
        };
        rv.update_height(height, area.size.h);
        rv
    }

    pub fn window(&self) -> &W {
        &self.window
    }

    pub fn window_mut(&mut self) -> &mut W {
        &mut self.window
    }

    pub fn into_window(self) -> W {
        self.window
    }

    pub fn is_window(&self, id: &W::Id) -> bool {
        self.window.id() == id
    }

    pub fn options(&self) -> &Rc<Options> {
        &self.options
    }

    pub(super) fn set_options(&mut self, options: Rc<Options>) {
        self.options = options;
    }

    // ==================== Geometry ====================

    pub fn geom(&self) -> Rectangle {
        self.geom
    }

    pub fn geom_x(&self) -> f64 {
        self.geom.loc.x
    }

    pub fn geom_y(&self) -> f64 {
        self.geom.loc.y
    }

    pub fn geom_w(&self) -> f64 {
        self.geom.size.w
    }

    pub fn geom_h(&self) -> f64 {
        self.geom.size.h
    }

    /// Bottom edge of the window.
    pub fn geom_bottom(&self) -> f64 {
        self.geom.bottom()
    }

    pub fn set_geom_x(&mut self, x: f64) {
        self.geom.loc.x = x;
    }

    pub fn set_geom_w(&mut self, w: f64) {
        self.geom.size.w = w;
    }

    pub fn set_geom_h(&mut self, h: f64) {
        self.geom.size.h = h;
    }

    pub fn move_to_pos(&mut self, x: f64, y: f64) {
        self.geom.loc.x = x;
        self.geom.loc.y = y;
    }

    pub fn move_to_top(&mut self, x: f64, area: Rectangle) {
        self.move_to_pos(x, area.top());
    }

    pub fn move_to_bottom(&mut self, x: f64, area: Rectangle) {
        self.move_to_pos(x, area.bottom() - self.geom.size.h);
    }

    pub fn move_to_center(&mut self, x: f64, area: Rectangle) {
        self.move_to_pos(x, area.top() + (area.size.h - self.geom.size.h) / 2.);
    }

    /// Geometry of the window itself, as committed to it.
    pub fn window_geometry(&self) -> Rectangle {
        let gap = self.options.gaps.x;
        Rectangle::from_coords(
            self.geom.loc.x + gap / 2.,
            self.geom.loc.y + self.scroll_offset,
            f64::max(0., self.geom.size.w - gap),
            self.geom.size.h,
        )
    }

    /// Sends the current geometry to the window.
    pub fn commit(&mut self, animate: bool) {
        let geometry = self.window_geometry();
        self.window.request_geometry(geometry, animate);
    }

    // ==================== Sizes ====================

    pub fn width(&self) -> StandardSize {
        self.width
    }

    pub fn set_width(&mut self, width: StandardSize) {
        self.width = width;
    }

    pub fn height(&self) -> StandardSize {
        self.height
    }

    pub fn set_height_free(&mut self) {
        self.height = StandardSize::Free;
    }

    /// Sets the height token and resolves it against a view of height `max_h`.
    ///
    /// A standard height leaves room for the gaps between windows, so that `n` windows of height
    /// `1/n` fill the view exactly. A Free height keeps its current pixels.
    pub fn update_height(&mut self, height: StandardSize, max_h: f64) {
        if let Some(proportion) = height.proportion() {
            let gap = self.options.gaps.y;
            self.geom.size.h = f64::max(0., proportion * (max_h + gap) - gap);
        }
        self.height = height;
    }

    /// Fraction of a view of height `max_h` taken by this window, the inverse of
    /// [`update_height`](Self::update_height).
    pub fn height_fraction(&self, max_h: f64) -> f64 {
        let gap = self.options.gaps.y;
        let full = max_h + gap;
        if full <= 0. {
            1.
        } else {
            (self.geom.size.h + gap) / full
        }
    }

    pub fn min_height(&self) -> f64 {
        f64::max(1., self.window.min_size().h)
    }

    pub fn min_width(&self) -> f64 {
        f64::max(1., self.window.min_size().w)
    }

    /// Whether the column holding this window can change its width from `column_w` by `delta`.
    pub fn can_resize_width(&self, column_w: f64, max_w: f64, delta: f64) -> bool {
        let new_w = column_w + delta;
        if new_w < max_w * super::MIN_COLUMN_WIDTH_FRACTION || new_w > max_w {
            return false;
        }

        new_w - self.options.gaps.x >= self.min_width()
    }

    /// Whether this window allows a vertical resize of the active window of its column by
    /// `delta`.
    pub fn can_resize_height(&self, max_h: f64, is_active: bool, delta: f64) -> bool {
        if !is_active {
            return true;
        }

        let new_h = self.geom.size.h + delta;
        new_h >= self.min_height() && new_h <= max_h
    }

    // ==================== Scrolling ====================

    pub fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    /// Shifts the window by `delta` on top of its position, without animation.
    pub fn scroll(&mut self, delta: f64) {
        self.scroll_offset += delta;
        self.commit(false);
    }

    /// Makes the scroll offset part of the position.
    pub fn commit_scroll(&mut self) {
        self.geom.loc.y += self.scroll_offset;
        self.scroll_offset = 0.;
    }

    // ==================== Selection and pinning ====================

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn selection_toggle(&mut self) {
        self.selected = !self.selected;
    }

    pub fn selection_set(&mut self) {
        self.selected = true;
    }

    pub fn selection_reset(&mut self) {
        self.selected = false;
    }

    pub fn is_pinned(&self) -> bool {
        self.pinned
    }

    pub fn pin(&mut self, pinned: bool) {
        self.pinned = pinned;
        self.window.set_pinned(pinned);
    }

    pub fn move_to_workspace(&mut self, workspace: WorkspaceId) {
        self.window.move_to_workspace(workspace);
    }

    #[cfg(test)]
    pub fn verify_invariants(&self) {
        assert!(self.geom.loc.x.is_finite() && self.geom.loc.y.is_finite());
        assert!(self.geom.size.w >= 0., "tile width must not be negative");
        assert!(self.geom.size.h >= 0., "tile height must not be negative");
        assert!(self.scroll_offset.is_finite());
    }
}
