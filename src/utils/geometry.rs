//! Geometry primitives of the layout.
//!
//! All coordinates are logical pixels. The layout only ever produces non-negative sizes.

pub use glam::DVec2 as Vector2D;

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Size {
    pub w: f64,
    pub h: f64,
}

impl Size {
    pub const fn new(w: f64, h: f64) -> Self {
        Self { w, h }
    }
}

impl From<(f64, f64)> for Size {
    fn from((w, h): (f64, f64)) -> Self {
        Self { w, h }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Rectangle {
    pub loc: Vector2D,
    pub size: Size,
}

impl Rectangle {
    pub const fn new(loc: Vector2D, size: Size) -> Self {
        Self { loc, size }
    }

    pub fn from_coords(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self::new(Vector2D::new(x, y), Size::new(w, h))
    }

    pub fn top(&self) -> f64 {
        self.loc.y
    }

    pub fn bottom(&self) -> f64 {
        self.loc.y + self.size.h
    }

    /// Whether the vertical span `[y0, y1]` lies fully inside this rectangle's vertical span.
    pub fn contains_span_y(&self, y0: f64, y1: f64) -> bool {
        y0 >= self.top() && y1 <= self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges() {
        let rect = Rectangle::from_coords(10., 20., 300., 400.);
        assert_eq!(rect.top(), 20.);
        assert_eq!(rect.bottom(), 420.);
    }

    #[test]
    fn span_containment_is_inclusive() {
        let rect = Rectangle::from_coords(0., 100., 50., 900.);
        assert!(rect.contains_span_y(100., 1000.));
        assert!(rect.contains_span_y(400., 600.));
        assert!(!rect.contains_span_y(99., 600.));
        assert!(!rect.contains_span_y(400., 1001.));
    }
}
