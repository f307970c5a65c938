pub mod geometry;
pub mod id;

pub use self::geometry::{Rectangle, Size, Vector2D};
