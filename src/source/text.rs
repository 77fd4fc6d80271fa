use crate::foundation::core::Event;
use crate::foundation::error::{EvframeError, EvframeResult};
use crate::source::EventSource;
use std::io::BufRead as _;
use std::path::PathBuf;

/// Plain-text event log: one `t x y p` record per line.
///
/// Fields are separated by whitespace and/or commas. Blank lines and lines starting with `#` are
/// skipped.
#[derive(Clone, Debug)]
pub struct TextEventFile {
    path: PathBuf,
}

impl TextEventFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl EventSource for TextEventFile {
    fn load_events(&self) -> EvframeResult<Vec<Event>> {
        let f = std::fs::File::open(&self.path).map_err(|e| EvframeError::io(&self.path, e))?;
        let reader = std::io::BufReader::new(f);

        let mut events = Vec::new();
        for (lineno, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| EvframeError::io(&self.path, e))?;
            if let Some(ev) = parse_event_line(&line).map_err(|msg| {
                EvframeError::parse(format!(
                    "event log '{}' line {}: {msg}",
                    self.path.display(),
                    lineno + 1
                ))
            })? {
                events.push(ev);
            }
        }
        Ok(events)
    }
}

/// Parse one record. `Ok(None)` for blank and comment lines.
pub(crate) fn parse_event_line(line: &str) -> Result<Option<Event>, String> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let mut fields = line
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty());

    let mut next = |name: &str| {
        fields
            .next()
            .ok_or_else(|| format!("missing field '{name}' (expected 't x y p')"))
    };
    let t = next("t")?;
    let x = next("x")?;
    let y = next("y")?;
    let p = next("p")?;
    if let Some(extra) = fields.next() {
        return Err(format!("unexpected trailing field '{extra}'"));
    }

    Ok(Some(Event {
        t: t.parse().map_err(|e| format!("t '{t}': {e}"))?,
        x: x.parse().map_err(|e| format!("x '{x}': {e}"))?,
        y: y.parse().map_err(|e| format!("y '{y}': {e}"))?,
        p: p.parse().map_err(|e| format!("p '{p}': {e}"))?,
    }))
}

#[cfg(test)]
#[path = "../../tests/unit/source/text.rs"]
mod tests;
