//! Input collaborators: dataset layout, trigger log, and event containers.

mod dataset;
mod hdf5;
mod layout;
mod text;
mod triggers;

use crate::foundation::core::Event;
use crate::foundation::error::EvframeResult;

pub use dataset::Dataset;
pub use hdf5::Hdf5EventFile;
pub use layout::{
    ContainerKind, DatasetLayout, EVENTS_DIR, EventContainer, OUTPUT_DIR, TRIGGERS_FILE,
    discover_event_container,
};
pub use text::TextEventFile;
pub use triggers::{load_triggers, parse_triggers};

/// Anything that can materialize a complete event log.
///
/// Events come back in source order; they do not have to be sorted by timestamp.
pub trait EventSource {
    fn load_events(&self) -> EvframeResult<Vec<Event>>;
}

/// Open the reader matching `container.kind`.
pub fn open_event_source(container: &EventContainer) -> Box<dyn EventSource> {
    match container.kind {
        ContainerKind::Hdf5 => Box::new(Hdf5EventFile::new(&container.path)),
        ContainerKind::Text => Box::new(TextEventFile::new(&container.path)),
    }
}
