use crate::foundation::core::{Event, TimeWindow};

/// Full scan: every event with `window.start <= t < window.end`, in input order.
pub fn scan_window(events: &[Event], window: TimeWindow) -> Vec<&Event> {
    events.iter().filter(|e| window.contains(e.t)).collect()
}

/// Event log indexed by timestamp.
///
/// Logs that are already non-decreasing in `t` are searched in place and windows come back as
/// sub-slices. Anything else keeps a stable by-timestamp permutation; window hits are mapped back
/// to input order before they are returned.
#[derive(Debug, Clone)]
pub struct EventTimeline {
    events: Vec<Event>,
    // `None` when `events` is already sorted by `t`.
    by_time: Option<Vec<usize>>,
}

impl EventTimeline {
    pub fn new(events: Vec<Event>) -> Self {
        let by_time = if events.is_sorted_by_key(|e| e.t) {
            None
        } else {
            let mut order: Vec<usize> = (0..events.len()).collect();
            order.sort_by_key(|&i| events[i].t);
            Some(order)
        };
        Self { events, by_time }
    }

    /// All events, in input order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Return `true` when the input was already in timestamp order.
    pub fn is_time_ordered(&self) -> bool {
        self.by_time.is_none()
    }

    /// Events inside `window`, in input order.
    pub fn window(&self, window: TimeWindow) -> WindowEvents<'_> {
        if window.is_empty() {
            return WindowEvents::Contiguous(&[]);
        }

        match &self.by_time {
            None => {
                let lo = self.events.partition_point(|e| e.t < window.start);
                let hi = self.events.partition_point(|e| e.t < window.end);
                WindowEvents::Contiguous(&self.events[lo..hi])
            }
            Some(order) => {
                let lo = order.partition_point(|&i| self.events[i].t < window.start);
                let hi = order.partition_point(|&i| self.events[i].t < window.end);
                let mut hits = order[lo..hi].to_vec();
                hits.sort_unstable();
                WindowEvents::Gathered(hits.into_iter().map(|i| &self.events[i]).collect())
            }
        }
    }
}

/// Events selected for one window.
#[derive(Debug, Clone)]
pub enum WindowEvents<'a> {
    /// Borrowed run of a time-ordered log.
    Contiguous(&'a [Event]),
    /// Hits gathered from an unordered log, restored to input order.
    Gathered(Vec<&'a Event>),
}

impl<'a> WindowEvents<'a> {
    pub fn len(&self) -> usize {
        match self {
            Self::Contiguous(s) => s.len(),
            Self::Gathered(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> WindowIter<'a, '_> {
        match *self {
            Self::Contiguous(s) => WindowIter::Contiguous(s.iter()),
            Self::Gathered(ref v) => WindowIter::Gathered(v.iter()),
        }
    }

    /// Copy the selected events out, in order.
    pub fn to_vec(&self) -> Vec<Event> {
        self.iter().copied().collect()
    }
}

/// Iterator over [`WindowEvents`].
#[derive(Debug, Clone)]
pub enum WindowIter<'a, 'w> {
    Contiguous(std::slice::Iter<'a, Event>),
    Gathered(std::slice::Iter<'w, &'a Event>),
}

impl<'a> Iterator for WindowIter<'a, '_> {
    type Item = &'a Event;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::Contiguous(it) => it.next(),
            Self::Gathered(it) => it.next().copied(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Self::Contiguous(it) => it.size_hint(),
            Self::Gathered(it) => it.size_hint(),
        }
    }
}

impl ExactSizeIterator for WindowIter<'_, '_> {}

impl<'a, 'w> IntoIterator for &'w WindowEvents<'a> {
    type Item = &'a Event;
    type IntoIter = WindowIter<'a, 'w>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/window/timeline.rs"]
mod tests;
