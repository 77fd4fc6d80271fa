use crate::foundation::core::Canvas;

/// What a single event does to its pixel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PixelWrite {
    /// Brightness increased (polarity `1`).
    Black,
    /// Brightness decreased (polarity `0`).
    White,
    /// Unrecognized polarity: the pixel keeps whatever it already holds.
    Keep,
}

impl PixelWrite {
    pub fn for_polarity(p: i16) -> Self {
        match p {
            1 => Self::Black,
            0 => Self::White,
            _ => Self::Keep,
        }
    }
}

/// Sensor mounting orientation, applied after clamping.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Orientation {
    #[default]
    Identity,
    /// Sensor mounted upside down: `(x, y) -> (w-1-x, h-1-y)`.
    Rotate180,
}

impl Orientation {
    /// Map an already clamped coordinate. Stays inside the canvas.
    pub fn apply(self, canvas: Canvas, x: u32, y: u32) -> (u32, u32) {
        match self {
            Self::Identity => (x, y),
            Self::Rotate180 => (
                canvas.width.saturating_sub(1).saturating_sub(x),
                canvas.height.saturating_sub(1).saturating_sub(y),
            ),
        }
    }
}
