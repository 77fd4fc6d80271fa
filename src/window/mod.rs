//! Event windowing: selecting the events that fall inside one frame's time window.
//!
//! [`scan_window`] is the reference full scan. [`EventTimeline`] indexes the events once and
//! answers every window with binary search, producing the same events in the same order.

mod timeline;

pub use timeline::{EventTimeline, WindowEvents, WindowIter, scan_window};
