use crate::foundation::error::{EvframeError, EvframeResult};

/// One sensor-reported brightness change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Event {
    /// Column, in sensor pixels.
    pub x: u16,
    /// Row, in sensor pixels.
    pub y: u16,
    /// Polarity code: `1` brighter, `0` darker, anything else is unrecognized.
    pub p: i16,
    /// Timestamp in sensor clock units.
    pub t: i64,
}

impl Event {
    pub const fn new(x: u16, y: u16, p: i16, t: i64) -> Self {
        Self { x, y, p, t }
    }
}

/// 0-based frame index; frame `i` ends at trigger `i`.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

/// Half-open time interval `[start, end)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TimeWindow {
    /// Inclusive start.
    pub start: i64,
    /// Exclusive end.
    pub end: i64,
}

impl TimeWindow {
    pub const fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }

    /// Window accumulated into frame `i`: from the previous trigger (or `0`) up to trigger `i`.
    ///
    /// Triggers are taken as given. A non-increasing pair yields a window that contains nothing.
    /// Returns `None` when `i` is past the end of `triggers`.
    pub fn for_trigger(triggers: &[i64], i: usize) -> Option<Self> {
        let end = *triggers.get(i)?;
        let start = if i == 0 { 0 } else { triggers[i - 1] };
        Some(Self { start, end })
    }

    /// Return `true` when `start <= t < end`.
    pub fn contains(self, t: i64) -> bool {
        self.start <= t && t < self.end
    }

    /// Return `true` when no timestamp can fall inside the window.
    pub fn is_empty(self) -> bool {
        self.start >= self.end
    }
}

/// Largest accepted canvas side; event coordinates are `u16` and JPEG caps dimensions there.
pub const MAX_CANVAS_DIM: u32 = u16::MAX as u32;
/// Largest accepted RGB8 frame buffer.
pub const MAX_FRAME_BYTES: usize = 1 << 30;

/// Output raster dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels, non-zero.
    pub width: u32,
    /// Height in pixels, non-zero.
    pub height: u32,
}

impl Canvas {
    /// Create a validated canvas: both dimensions in `1..=MAX_CANVAS_DIM` and an RGB8 buffer of
    /// at most [`MAX_FRAME_BYTES`].
    pub fn new(width: u32, height: u32) -> EvframeResult<Self> {
        if width == 0 || height == 0 {
            return Err(EvframeError::validation(format!(
                "canvas dimensions must be > 0, got {width}x{height}"
            )));
        }
        if width > MAX_CANVAS_DIM || height > MAX_CANVAS_DIM {
            return Err(EvframeError::validation(format!(
                "canvas dimensions must be <= {MAX_CANVAS_DIM}, got {width}x{height}"
            )));
        }
        let bytes = (width as usize)
            .checked_mul(height as usize)
            .and_then(|px| px.checked_mul(3));
        match bytes {
            Some(b) if b <= MAX_FRAME_BYTES => Ok(Self { width, height }),
            _ => Err(EvframeError::validation(format!(
                "canvas {width}x{height} exceeds the {MAX_FRAME_BYTES}-byte frame limit"
            ))),
        }
    }

    /// Saturating clamp of an event coordinate into `[0, width-1] x [0, height-1]`.
    pub fn clamp(self, x: u16, y: u16) -> (u32, u32) {
        let max_x = self.width.saturating_sub(1);
        let max_y = self.height.saturating_sub(1);
        (u32::from(x).min(max_x), u32::from(y).min(max_y))
    }

    /// Number of pixels on the canvas.
    pub fn pixel_count(self) -> usize {
        (self.width as usize).saturating_mul(self.height as usize)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
