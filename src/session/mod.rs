//! Frame orchestration: window, rasterize and persist every trigger.

/// Session driving a full run.
pub mod binning_session;
/// Per-frame outcomes and run summary.
pub mod report;
