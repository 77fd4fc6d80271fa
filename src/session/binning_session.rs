use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::{Canvas, Event, FrameIndex, TimeWindow};
use crate::foundation::error::{EvframeError, EvframeResult};
use crate::raster::{Orientation, RasterFrame, rasterize};
use crate::session::report::{FrameOutcome, RunReport};
use crate::source::Dataset;
use crate::window::EventTimeline;
use rayon::prelude::*;

/// Options controlling `BinningSession::run`.
#[derive(Clone, Debug, Default)]
pub struct RunOpts {
    /// Render and persist frames on a dedicated rayon pool.
    pub parallel: bool,
    /// Override the number of rayon worker threads. `None` uses rayon defaults.
    pub threads: Option<usize>,
    /// Sensor orientation applied to every frame.
    pub orientation: Orientation,
}

/// Turns a loaded event log and its trigger sequence into one raster per trigger.
///
/// The event log is indexed once at construction; every frame afterwards is an independent
/// window lookup plus rasterization with its own buffer.
pub struct BinningSession {
    triggers: Vec<i64>,
    timeline: EventTimeline,
    canvas: Canvas,
    opts: RunOpts,
}

impl BinningSession {
    pub fn new(
        triggers: Vec<i64>,
        events: Vec<Event>,
        canvas: Canvas,
        opts: RunOpts,
    ) -> EvframeResult<Self> {
        if opts.threads == Some(0) {
            return Err(EvframeError::validation("'threads' must be >= 1 when set"));
        }
        let timeline = EventTimeline::new(events);
        if !timeline.is_time_ordered() {
            tracing::debug!("event log is not time ordered; using a sorted index");
        }
        Ok(Self {
            triggers,
            timeline,
            canvas,
            opts,
        })
    }

    pub fn from_dataset(dataset: Dataset, canvas: Canvas, opts: RunOpts) -> EvframeResult<Self> {
        Self::new(dataset.triggers, dataset.events, canvas, opts)
    }

    /// One frame per trigger.
    pub fn frames_total(&self) -> u64 {
        self.triggers.len() as u64
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Time window of frame `idx`, or `None` past the last trigger.
    pub fn window(&self, idx: FrameIndex) -> Option<TimeWindow> {
        let i = usize::try_from(idx.0).ok()?;
        TimeWindow::for_trigger(&self.triggers, i)
    }

    /// Render frame `idx` without persisting it.
    pub fn render_frame(&self, idx: FrameIndex) -> EvframeResult<RasterFrame> {
        let window = self.window(idx).ok_or_else(|| {
            EvframeError::validation(format!(
                "frame {} is out of range (0..{})",
                idx.0,
                self.frames_total()
            ))
        })?;
        let (frame, _) = self.render_window(window);
        Ok(frame)
    }

    /// Render every frame in index order and hand each one to `sink`.
    ///
    /// A frame the sink fails to persist is logged and recorded in the report; the run carries
    /// on. Only `begin`/`end` failures abort. In parallel mode frames reach the sink in
    /// completion order.
    pub fn run(&self, sink: &mut dyn FrameSink) -> EvframeResult<RunReport> {
        let pool = if self.opts.parallel {
            Some(build_thread_pool(self.opts.threads)?)
        } else {
            None
        };

        sink.begin(SinkConfig {
            canvas: self.canvas,
            frames_total: self.frames_total(),
        })?;

        let sink_ref: &dyn FrameSink = sink;
        let outcomes: Vec<FrameOutcome> = match pool.as_ref() {
            Some(pool) => pool.install(|| {
                (0..self.frames_total())
                    .into_par_iter()
                    .map(|i| self.persist_frame(sink_ref, FrameIndex(i)))
                    .collect()
            }),
            None => (0..self.frames_total())
                .map(|i| self.persist_frame(sink_ref, FrameIndex(i)))
                .collect(),
        };

        sink.end()?;

        let report = RunReport::from_outcomes(self.canvas, outcomes);
        tracing::info!(
            total = report.frames_total,
            written = report.frames_written,
            failed = report.frames_failed,
            "run finished"
        );
        Ok(report)
    }

    fn render_window(&self, window: TimeWindow) -> (RasterFrame, usize) {
        let hits = self.timeline.window(window);
        let frame = rasterize(&hits, self.canvas, self.opts.orientation);
        (frame, hits.len())
    }

    fn persist_frame(&self, sink: &dyn FrameSink, idx: FrameIndex) -> FrameOutcome {
        // Only called for indices below `frames_total`.
        let window = TimeWindow::for_trigger(&self.triggers, idx.0 as usize)
            .unwrap_or(TimeWindow::new(0, 0));
        let (frame, events) = self.render_window(window);
        tracing::debug!(frame = idx.0, start = window.start, end = window.end, events, "window");

        let sha256 = frame.sha256_hex();
        match sink.push_frame(idx, &frame) {
            Ok(persisted) => {
                match &persisted.path {
                    Some(p) => tracing::info!(frame = idx.0, path = %p.display(), "saved"),
                    None => tracing::info!(frame = idx.0, "saved"),
                }
                FrameOutcome {
                    index: idx,
                    window,
                    events,
                    sha256,
                    path: persisted.path,
                    error: None,
                }
            }
            Err(e) => {
                tracing::error!(frame = idx.0, error = %e, "failed to save frame");
                FrameOutcome {
                    index: idx,
                    window,
                    events,
                    sha256,
                    path: None,
                    error: Some(e.to_string()),
                }
            }
        }
    }
}

fn build_thread_pool(threads: Option<usize>) -> EvframeResult<rayon::ThreadPool> {
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| EvframeError::validation(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/session/binning_session.rs"]
mod tests;
