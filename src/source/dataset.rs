use crate::foundation::core::Event;
use crate::foundation::error::EvframeResult;
use crate::source::layout::{DatasetLayout, EventContainer, discover_event_container};
use crate::source::open_event_source;
use crate::source::triggers::load_triggers;

/// Fully materialized inputs of one sequence.
#[derive(Clone, Debug)]
pub struct Dataset {
    /// Frame-end timestamps, in file order.
    pub triggers: Vec<i64>,
    /// Events, in container order.
    pub events: Vec<Event>,
    /// Container the events were read from.
    pub container: EventContainer,
}

impl Dataset {
    /// Load triggers and events for `layout`.
    ///
    /// Every failure here is structural. Nothing is written to disk.
    #[tracing::instrument(skip(layout), fields(base = %layout.base.display()))]
    pub fn load(layout: &DatasetLayout) -> EvframeResult<Self> {
        let container = discover_event_container(&layout.events_dir)?;
        tracing::info!(path = %container.path.display(), kind = ?container.kind, "event container");

        let triggers = load_triggers(&layout.triggers)?;
        let events = open_event_source(&container).load_events()?;
        tracing::info!(
            triggers = triggers.len(),
            events = events.len(),
            "inputs loaded"
        );

        Ok(Self {
            triggers,
            events,
            container,
        })
    }
}
