use crate::foundation::core::{Canvas, Event};
use crate::raster::policy::{Orientation, PixelWrite};
use sha2::Digest as _;

/// Fill color of every pixel no event wrote to.
pub const BACKGROUND_RGB: [u8; 3] = [127, 127, 127];
/// Pixel color for positive-polarity events.
pub const BLACK_RGB: [u8; 3] = [0, 0, 0];
/// Pixel color for negative-polarity events.
pub const WHITE_RGB: [u8; 3] = [255, 255, 255];

/// A rendered frame as RGB8 pixels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RasterFrame {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGB8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
}

impl RasterFrame {
    /// Frame filled with [`BACKGROUND_RGB`].
    pub fn background(canvas: Canvas) -> Self {
        let data = BACKGROUND_RGB.repeat(canvas.pixel_count());
        Self {
            width: canvas.width,
            height: canvas.height,
            data,
        }
    }

    /// RGB triple at `(x, y)`, or `None` outside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let o = self.offset(x, y);
        Some([self.data[o], self.data[o + 1], self.data[o + 2]])
    }

    /// Lowercase hex SHA-256 of the raw RGB bytes.
    pub fn sha256_hex(&self) -> String {
        let digest = sha2::Sha256::digest(&self.data);
        let mut out = String::with_capacity(digest.len() * 2);
        for b in digest {
            out.push_str(&format!("{:02x}", b));
        }
        out
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        ((y as usize) * (self.width as usize) + (x as usize)) * 3
    }

    fn put(&mut self, x: u32, y: u32, rgb: [u8; 3]) {
        let o = self.offset(x, y);
        self.data[o..o + 3].copy_from_slice(&rgb);
    }
}

/// Render `events` onto a fresh background frame.
///
/// Coordinates are clamped into the canvas, so no event is ever dropped. Events are applied in
/// iteration order and later writes replace earlier ones.
pub fn rasterize<'a>(
    events: impl IntoIterator<Item = &'a Event>,
    canvas: Canvas,
    orientation: Orientation,
) -> RasterFrame {
    let mut frame = RasterFrame::background(canvas);
    for e in events {
        let rgb = match PixelWrite::for_polarity(e.p) {
            PixelWrite::Black => BLACK_RGB,
            PixelWrite::White => WHITE_RGB,
            PixelWrite::Keep => continue,
        };
        let (cx, cy) = canvas.clamp(e.x, e.y);
        let (x, y) = orientation.apply(canvas, cx, cy);
        frame.put(x, y, rgb);
    }
    frame
}

#[cfg(test)]
#[path = "../../tests/unit/raster/frame.rs"]
mod tests;
