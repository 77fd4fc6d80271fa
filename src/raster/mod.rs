//! Rendering one window of events into an RGB8 raster.

mod frame;
mod policy;

pub use frame::{BACKGROUND_RGB, BLACK_RGB, RasterFrame, WHITE_RGB, rasterize};
pub use policy::{Orientation, PixelWrite};
