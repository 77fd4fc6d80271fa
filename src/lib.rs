//! evframe renders asynchronous event-camera streams as trigger-aligned raster frames.
//!
//! Every trigger timestamp closes one frame. Frame `i` accumulates the events with
//! `triggers[i-1] <= t < triggers[i]` (starting from `0` for the first frame) and draws them on a
//! gray background: positive polarity black, negative polarity white, last event wins.
//!
//! - Load a [`Dataset`] from a [`DatasetLayout`]
//! - Create a [`BinningSession`]
//! - Render single frames or run every trigger into a [`FrameSink`]
#![cfg_attr(not(feature = "hdf5"), forbid(unsafe_code))]
#![cfg_attr(feature = "hdf5", deny(unsafe_code))]

mod foundation;

/// Frame persistence sinks.
pub mod encode;
/// Event-to-raster rendering.
pub mod raster;
/// Run orchestration.
pub mod session;
/// Input collaborators.
pub mod source;
/// Time-window event selection.
pub mod window;

pub use crate::foundation::core::{Canvas, Event, FrameIndex, TimeWindow};
pub use crate::foundation::error::{EvframeError, EvframeResult};

pub use crate::encode::image_dir::{
    ImageDirSink, ImageDirSinkOpts, ImageFormatChoice, frame_file_name,
};
pub use crate::encode::sink::{FramePersisted, FrameSink, InMemorySink, SinkConfig};
pub use crate::raster::{Orientation, PixelWrite, RasterFrame, rasterize};
pub use crate::session::binning_session::{BinningSession, RunOpts};
pub use crate::session::report::{FrameOutcome, RunReport};
pub use crate::source::{Dataset, DatasetLayout, EventSource};
pub use crate::window::{EventTimeline, scan_window};
