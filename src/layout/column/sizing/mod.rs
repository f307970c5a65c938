//! Column and window sizing.
//!
//! ```text
//! sizing/
//! ├── width.rs  - Column width, maximize, width cycling
//! ├── height.rs - Window heights and height cycling
//! ├── fit.rs    - Stretching a run of windows over the view
//! └── resize.rs - Manual resize of the active window
//! ```

mod fit;
mod height;
mod resize;
mod width;
