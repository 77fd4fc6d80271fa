use crate::foundation::core::Event;
use crate::foundation::error::{EvframeError, EvframeResult};
use crate::source::EventSource;
use std::path::PathBuf;

/// HDF5 event container.
///
/// Two layouts are read:
/// - DSEC: parallel datasets `/events/{x,y,p,t}` (`u16`, `u16`, `u8`, `u64`).
/// - Metavision: one structured dataset `/CD/events` with fields `x, y, p, t`.
///
/// Reading requires the `hdf5` cargo feature.
#[derive(Clone, Debug)]
pub struct Hdf5EventFile {
    path: PathBuf,
}

impl Hdf5EventFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn with_path(&self, e: EvframeError) -> EvframeError {
        match e {
            EvframeError::Parse(msg) => {
                EvframeError::parse(format!("hdf5 '{}': {msg}", self.path.display()))
            }
            other => other,
        }
    }
}

impl EventSource for Hdf5EventFile {
    #[cfg(feature = "hdf5")]
    fn load_events(&self) -> EvframeResult<Vec<Event>> {
        let ctx = |e: hdf5_metno::Error| {
            EvframeError::parse(format!("hdf5 '{}': {e}", self.path.display()))
        };

        let file = hdf5_metno::File::open(&self.path).map_err(ctx)?;

        if file.link_exists("events") {
            let x = file.dataset("events/x").map_err(ctx)?.read_raw::<u16>().map_err(ctx)?;
            let y = file.dataset("events/y").map_err(ctx)?.read_raw::<u16>().map_err(ctx)?;
            let p = file.dataset("events/p").map_err(ctx)?.read_raw::<u8>().map_err(ctx)?;
            let t = file.dataset("events/t").map_err(ctx)?.read_raw::<u64>().map_err(ctx)?;

            tracing::debug!(path = %self.path.display(), events = x.len(), "read dsec event columns");
            return assemble_columns(&x, &y, &p, &t).map_err(|e| self.with_path(e));
        }

        if file.link_exists("CD") && file.link_exists("CD/events") {
            let records = file
                .dataset("CD/events")
                .map_err(ctx)?
                .read_raw::<CdRecord>()
                .map_err(ctx)?;

            tracing::debug!(path = %self.path.display(), events = records.len(), "read metavision cd events");
            return assemble_records(&records).map_err(|e| self.with_path(e));
        }

        Err(EvframeError::parse(format!(
            "hdf5 '{}': neither '/events' nor '/CD/events' found",
            self.path.display()
        )))
    }

    #[cfg(not(feature = "hdf5"))]
    fn load_events(&self) -> EvframeResult<Vec<Event>> {
        Err(self.with_path(EvframeError::unsupported(format!(
            "'{}' is an HDF5 container; rebuild with `--features hdf5` to read it",
            self.path.display()
        ))))
    }
}

#[cfg_attr(not(feature = "hdf5"), allow(unused_imports))]
pub(crate) use cd::CdRecord;

#[cfg_attr(feature = "hdf5", allow(unsafe_code))]
#[cfg_attr(not(feature = "hdf5"), allow(dead_code))]
mod cd {
    /// One element of a Metavision `/CD/events` dataset. Fields are matched by name.
    #[cfg_attr(feature = "hdf5", derive(hdf5_metno::H5Type))]
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    #[repr(C)]
    pub(crate) struct CdRecord {
        pub(crate) x: u16,
        pub(crate) y: u16,
        pub(crate) p: i16,
        pub(crate) t: i64,
    }
}

/// Convert Metavision records into events.
#[cfg_attr(not(feature = "hdf5"), allow(dead_code))]
pub(crate) fn assemble_records(records: &[CdRecord]) -> EvframeResult<Vec<Event>> {
    Ok(records
        .iter()
        .map(|r| Event {
            x: r.x,
            y: r.y,
            p: r.p,
            t: r.t,
        })
        .collect())
}

/// Zip DSEC column arrays into events.
pub(crate) fn assemble_columns(
    x: &[u16],
    y: &[u16],
    p: &[u8],
    t: &[u64],
) -> EvframeResult<Vec<Event>> {
    let n = x.len();
    if y.len() != n || p.len() != n || t.len() != n {
        return Err(EvframeError::parse(format!(
            "column lengths differ: x={}, y={}, p={}, t={}",
            x.len(),
            y.len(),
            p.len(),
            t.len()
        )));
    }

    let mut events = Vec::with_capacity(n);
    for i in 0..n {
        let ts = i64::try_from(t[i]).map_err(|_| {
            EvframeError::parse(format!("event {i}: timestamp {} exceeds i64", t[i]))
        })?;
        events.push(Event {
            x: x[i],
            y: y[i],
            p: i16::from(p[i]),
            t: ts,
        });
    }
    Ok(events)
}
