use crate::foundation::core::{Canvas, FrameIndex};
use crate::foundation::error::EvframeResult;
use crate::raster::RasterFrame;
use std::path::PathBuf;
use std::sync::Mutex;

/// Configuration provided to a [`FrameSink`] before any frame is pushed.
#[derive(Debug, Clone)]
pub struct SinkConfig {
    /// Raster dimensions of every frame in the run.
    pub canvas: Canvas,
    /// Number of frames the run will produce.
    pub frames_total: u64,
}

/// Where a frame ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FramePersisted {
    /// Output path, when the sink writes files.
    pub path: Option<PathBuf>,
}

/// Sink contract for persisting rendered frames.
///
/// `begin` and `end` bracket a run. `push_frame` takes `&self` so parallel runs can persist from
/// several workers at once; frames may therefore arrive in any index order. A failing
/// `push_frame` only affects that frame.
pub trait FrameSink: Send + Sync {
    /// Called once before any frames are pushed.
    fn begin(&mut self, cfg: SinkConfig) -> EvframeResult<()>;
    /// Persist one frame.
    fn push_frame(&self, idx: FrameIndex, frame: &RasterFrame) -> EvframeResult<FramePersisted>;
    /// Called once after the last frame is pushed.
    fn end(&mut self) -> EvframeResult<()>;
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    frames: Mutex<Vec<(FrameIndex, RasterFrame)>>,
}

impl InMemorySink {
    /// Create a new in-memory sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the sink configuration captured in `begin`, if any.
    pub fn config(&self) -> Option<SinkConfig> {
        self.cfg.clone()
    }

    /// Take the captured frames, sorted by index.
    pub fn into_frames(self) -> Vec<(FrameIndex, RasterFrame)> {
        let mut frames = self
            .frames
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        frames.sort_by_key(|(idx, _)| *idx);
        frames
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> EvframeResult<()> {
        self.cfg = Some(cfg);
        self.frames
            .get_mut()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clear();
        Ok(())
    }

    fn push_frame(&self, idx: FrameIndex, frame: &RasterFrame) -> EvframeResult<FramePersisted> {
        self.frames
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push((idx, frame.clone()));
        Ok(FramePersisted { path: None })
    }

    fn end(&mut self) -> EvframeResult<()> {
        Ok(())
    }
}
