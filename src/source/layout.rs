use crate::foundation::error::{EvframeError, EvframeResult};
use std::path::{Path, PathBuf};

/// Trigger log file name, relative to the dataset base directory.
pub const TRIGGERS_FILE: &str = "image_offsets.txt";
/// Directory holding the event container.
pub const EVENTS_DIR: &str = "events";
/// Output directory for rendered frames.
pub const OUTPUT_DIR: &str = "images/events";

/// Fixed paths of one recorded sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DatasetLayout {
    pub base: PathBuf,
    pub triggers: PathBuf,
    pub events_dir: PathBuf,
    pub output_dir: PathBuf,
}

impl DatasetLayout {
    pub fn from_base(base: impl Into<PathBuf>) -> Self {
        let base = base.into();
        Self {
            triggers: base.join(TRIGGERS_FILE),
            events_dir: base.join(EVENTS_DIR),
            output_dir: base.join(OUTPUT_DIR),
            base,
        }
    }
}

/// Event container encodings recognized by file extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ContainerKind {
    /// `.h5` / `.hdf5`.
    Hdf5,
    /// `.txt` / `.csv`, one event per line.
    Text,
}

impl ContainerKind {
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "h5" | "hdf5" => Some(Self::Hdf5),
            "txt" | "csv" => Some(Self::Text),
            _ => None,
        }
    }
}

/// Discovery preference: `.h5`, then `.hdf5`, then text containers.
fn extension_rank(path: &Path) -> u8 {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("h5") => 0,
        Some("hdf5") => 1,
        _ => 2,
    }
}

/// Event container located by [`discover_event_container`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EventContainer {
    pub path: PathBuf,
    pub kind: ContainerKind,
}

/// Find the event container inside `events_dir`.
///
/// `.h5` files win over `.hdf5` files, which win over text files; ties are broken by file name. Finding more than one candidate
/// is tolerated with a warning.
pub fn discover_event_container(events_dir: &Path) -> EvframeResult<EventContainer> {
    if !events_dir.is_dir() {
        return Err(EvframeError::layout(format!(
            "events directory '{}' does not exist",
            events_dir.display()
        )));
    }

    let entries =
        std::fs::read_dir(events_dir).map_err(|e| EvframeError::io(events_dir, e))?;

    let mut candidates = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| EvframeError::io(events_dir, e))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if let Some(kind) = ContainerKind::from_path(&path) {
            candidates.push(EventContainer { path, kind });
        }
    }

    candidates.sort_by(|a, b| {
        a.kind
            .cmp(&b.kind)
            .then_with(|| extension_rank(&a.path).cmp(&extension_rank(&b.path)))
            .then_with(|| a.path.cmp(&b.path))
    });

    if candidates.len() > 1 {
        tracing::warn!(
            dir = %events_dir.display(),
            count = candidates.len(),
            using = %candidates[0].path.display(),
            "multiple event containers found"
        );
    }

    candidates.into_iter().next().ok_or_else(|| {
        EvframeError::layout(format!(
            "no event container (.h5, .hdf5, .txt, .csv) found in '{}'",
            events_dir.display()
        ))
    })
}
