use std::path::PathBuf;

/// Crate-wide result alias.
pub type EvframeResult<T> = Result<T, EvframeError>;

/// Errors raised while loading inputs, binning events, or persisting frames.
///
/// Everything except [`EvframeError::Encode`] is structural: it aborts a run before the per-frame
/// loop starts. `Encode` is reported per frame and never stops the loop.
#[derive(thiserror::Error, Debug)]
pub enum EvframeError {
    /// Invalid caller-provided value (dimensions, frame index, thread count).
    #[error("validation error: {0}")]
    Validation(String),

    /// Dataset directory layout is incomplete (missing directory, no event container).
    #[error("layout error: {0}")]
    Layout(String),

    /// Trigger or event data could not be parsed.
    #[error("parse error: {0}")]
    Parse(String),

    /// The event container kind was recognized but support for it is not compiled in.
    #[error("unsupported: {0}")]
    Unsupported(String),

    /// A single frame could not be encoded or written.
    #[error("encode error: {0}")]
    Encode(String),

    /// Filesystem failure on a known path.
    #[error("i/o error on '{}': {source}", .path.display())]
    Io {
        /// Path the operation was acting on.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl EvframeError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn layout(msg: impl Into<String>) -> Self {
        Self::Layout(msg.into())
    }

    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    pub fn unsupported(msg: impl Into<String>) -> Self {
        Self::Unsupported(msg.into())
    }

    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// `false` only for per-frame persistence failures.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Self::Encode(_))
    }
}
