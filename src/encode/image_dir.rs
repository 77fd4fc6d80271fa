use crate::encode::sink::{FramePersisted, FrameSink, SinkConfig};
use crate::foundation::core::FrameIndex;
use crate::foundation::error::{EvframeError, EvframeResult};
use crate::raster::RasterFrame;
use image::ImageEncoder as _;
use std::io::Write as _;
use std::path::{Path, PathBuf};

/// Still-image encodings a frame can be written as.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ImageFormatChoice {
    #[default]
    Jpeg,
    Png,
}

impl ImageFormatChoice {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Jpeg => "jpg",
            Self::Png => "png",
        }
    }
}

/// `frame_<16-digit zero-padded index>.<ext>`.
pub fn frame_file_name(idx: FrameIndex, format: ImageFormatChoice) -> String {
    format!("frame_{:016}.{}", idx.0, format.extension())
}

/// Options for [`ImageDirSink`].
#[derive(Clone, Debug)]
pub struct ImageDirSinkOpts {
    /// Output directory; created in `begin` when absent.
    pub out_dir: PathBuf,
    /// Encoding of every frame.
    pub format: ImageFormatChoice,
    /// JPEG quality in `1..=100`. Ignored for PNG.
    pub jpeg_quality: u8,
}

impl ImageDirSinkOpts {
    /// JPEG output at quality 95 into `out_dir`.
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
            format: ImageFormatChoice::Jpeg,
            jpeg_quality: 95,
        }
    }
}

/// Sink writing one image file per frame into a directory.
pub struct ImageDirSink {
    opts: ImageDirSinkOpts,
    cfg: Option<SinkConfig>,
}

impl ImageDirSink {
    pub fn new(opts: ImageDirSinkOpts) -> Self {
        Self { opts, cfg: None }
    }

    /// Path frame `idx` is written to.
    pub fn frame_path(&self, idx: FrameIndex) -> PathBuf {
        self.opts
            .out_dir
            .join(frame_file_name(idx, self.opts.format))
    }
}

impl FrameSink for ImageDirSink {
    fn begin(&mut self, cfg: SinkConfig) -> EvframeResult<()> {
        if !(1..=100).contains(&self.opts.jpeg_quality) {
            return Err(EvframeError::validation(format!(
                "jpeg quality must be in 1..=100, got {}",
                self.opts.jpeg_quality
            )));
        }
        std::fs::create_dir_all(&self.opts.out_dir)
            .map_err(|e| EvframeError::io(&self.opts.out_dir, e))?;
        self.cfg = Some(cfg);
        Ok(())
    }

    fn push_frame(&self, idx: FrameIndex, frame: &RasterFrame) -> EvframeResult<FramePersisted> {
        if let Some(cfg) = &self.cfg
            && (frame.width != cfg.canvas.width || frame.height != cfg.canvas.height)
        {
            return Err(EvframeError::encode(format!(
                "frame {} is {}x{}, sink expects {}x{}",
                idx.0, frame.width, frame.height, cfg.canvas.width, cfg.canvas.height
            )));
        }

        let expected = (frame.width as usize) * (frame.height as usize) * 3;
        if frame.data.len() != expected {
            return Err(EvframeError::encode(format!(
                "frame {} holds {} bytes, {}x{} RGB8 needs {expected}",
                idx.0,
                frame.data.len(),
                frame.width,
                frame.height
            )));
        }

        let path = self.frame_path(idx);
        let (w, h) = (frame.width, frame.height);
        match self.opts.format {
            ImageFormatChoice::Jpeg => write_frame_file(&path, "jpeg", |out| {
                image::codecs::jpeg::JpegEncoder::new_with_quality(out, self.opts.jpeg_quality)
                    .write_image(&frame.data, w, h, image::ExtendedColorType::Rgb8)
                    .map_err(|e| e.to_string())
            }),
            ImageFormatChoice::Png => write_frame_file(&path, "png", |out| {
                image::codecs::png::PngEncoder::new(out)
                    .write_image(&frame.data, w, h, image::ExtendedColorType::Rgb8)
                    .map_err(|e| e.to_string())
            }),
        }?;

        Ok(FramePersisted { path: Some(path) })
    }

    fn end(&mut self) -> EvframeResult<()> {
        Ok(())
    }
}

/// Create `path`, run `encode` into it, and flush.
///
/// A file left behind by a failed encode or flush is removed, so a frame path either holds a
/// complete image or nothing.
fn write_frame_file<F>(path: &Path, what: &str, encode: F) -> EvframeResult<()>
where
    F: FnOnce(&mut std::io::BufWriter<std::fs::File>) -> Result<(), String>,
{
    let fail = |e: &dyn std::fmt::Display| {
        EvframeError::encode(format!("write {what} '{}': {e}", path.display()))
    };

    let f = std::fs::File::create(path).map_err(|e| fail(&e))?;
    let mut w = std::io::BufWriter::new(f);
    let written = encode(&mut w).and_then(|()| w.flush().map_err(|e| e.to_string()));
    drop(w);

    if let Err(e) = written {
        if let Err(rm) = std::fs::remove_file(path) {
            tracing::warn!(path = %path.display(), error = %rm, "could not remove partial frame");
        }
        return Err(fail(&e));
    }
    Ok(())
}
