use crate::foundation::core::{Canvas, FrameIndex, TimeWindow};
use crate::foundation::error::{EvframeError, EvframeResult};
use std::io::Write as _;
use std::path::{Path, PathBuf};

/// Result of rendering and persisting one frame.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FrameOutcome {
    pub index: FrameIndex,
    pub window: TimeWindow,
    /// Events that fell inside the window.
    pub events: usize,
    /// SHA-256 of the raw raster, before encoding.
    pub sha256: String,
    /// Written file, if the sink writes files and the write succeeded.
    pub path: Option<PathBuf>,
    /// Persistence failure, if any.
    pub error: Option<String>,
}

impl FrameOutcome {
    pub fn is_written(&self) -> bool {
        self.error.is_none()
    }
}

/// Summary of a full run, frames sorted by index.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RunReport {
    pub canvas: Canvas,
    pub frames_total: u64,
    pub frames_written: u64,
    pub frames_failed: u64,
    pub frames: Vec<FrameOutcome>,
}

impl RunReport {
    pub(crate) fn from_outcomes(canvas: Canvas, mut frames: Vec<FrameOutcome>) -> Self {
        frames.sort_by_key(|f| f.index);
        let frames_written = frames.iter().filter(|f| f.is_written()).count() as u64;
        let frames_total = frames.len() as u64;
        Self {
            canvas,
            frames_total,
            frames_written,
            frames_failed: frames_total - frames_written,
            frames,
        }
    }

    /// Outcomes of frames that could not be persisted.
    pub fn failures(&self) -> impl Iterator<Item = &FrameOutcome> {
        self.frames.iter().filter(|f| !f.is_written())
    }

    /// Write the report as pretty-printed JSON.
    pub fn write_json(&self, path: &Path) -> EvframeResult<()> {
        let f = std::fs::File::create(path).map_err(|e| EvframeError::io(path, e))?;
        let mut w = std::io::BufWriter::new(f);
        serde_json::to_writer_pretty(&mut w, self)
            .map_err(|e| EvframeError::Other(anyhow::Error::new(e)))?;
        w.flush().map_err(|e| EvframeError::io(path, e))
    }
}
