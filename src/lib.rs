//! Column geometry engine of a scrollable tiling layout.
//!
//! See [`layout`] for the column itself and [`scroller_config`] for its configuration.

#[macro_use]
extern crate tracing;

pub mod layout;
pub mod utils;
pub mod window;
