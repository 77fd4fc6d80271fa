//! Frame persistence.
//!
//! Sinks receive rendered frames from a `BinningSession` run.

/// Image-file sink writing one JPEG/PNG per frame.
pub mod image_dir;
/// Generic frame sink trait and built-in sinks.
pub mod sink;
