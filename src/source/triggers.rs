use crate::foundation::error::{EvframeError, EvframeResult};
use std::path::Path;

/// Read the trigger log: one signed 64-bit timestamp per line, in file order.
///
/// Blank lines are skipped. Order and monotonicity are passed through untouched.
pub fn load_triggers(path: &Path) -> EvframeResult<Vec<i64>> {
    let text = std::fs::read_to_string(path).map_err(|e| EvframeError::io(path, e))?;
    parse_triggers(&text).map_err(|e| match e {
        EvframeError::Parse(msg) => {
            EvframeError::parse(format!("trigger log '{}': {msg}", path.display()))
        }
        other => other,
    })
}

/// Parse trigger log text. See [`load_triggers`].
pub fn parse_triggers(text: &str) -> EvframeResult<Vec<i64>> {
    let mut out = Vec::new();
    for (lineno, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let t = line.parse::<i64>().map_err(|e| {
            EvframeError::parse(format!("line {}: '{line}' is not an integer: {e}", lineno + 1))
        })?;
        out.push(t);
    }
    Ok(out)
}
