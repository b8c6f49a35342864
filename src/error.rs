// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DiscrimError {
    /// Empty or invalid input set.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Malformed edge-list line.
    #[error("Parse error in {source_ref} line {line}: {message}")]
    Parse {
        source_ref: String,
        line: usize,
        message: String,
    },

    /// A record references a vertex outside the batch's canonical set.
    #[error("Alignment fault: vertex {vertex} in {source_ref} is not in the canonical vertex set")]
    Alignment { source_ref: String, vertex: u64 },

    #[error("Dimensionality error: expected {expected}, found {found}")]
    Dimensionality { expected: String, found: String },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Insufficient data: {reason} (dropped singleton labels: [{}])", .dropped.join(", "))]
    InsufficientData { reason: String, dropped: Vec<String> },

    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),
}

impl DiscrimError {
    /// True for faults that indicate a logic defect rather than bad data.
    /// These must abort, never be retried.
    #[must_use]
    pub fn is_logic_defect(&self) -> bool {
        matches!(self, Self::Alignment { .. } | Self::Dimensionality { .. })
    }

    pub(crate) fn io(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        Self::Io {
            source,
            path: path.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DiscrimError>;

// Allow `?` on std::io::Error by converting to DiscrimError::Io with unknown path.
impl From<std::io::Error> for DiscrimError {
    fn from(source: std::io::Error) -> Self {
        DiscrimError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}

impl From<walkdir::Error> for DiscrimError {
    fn from(e: walkdir::Error) -> Self {
        let path = e
            .path()
            .map_or_else(|| PathBuf::from("<unknown>"), PathBuf::from);
        match e.into_io_error() {
            Some(source) => DiscrimError::Io { source, path },
            None => DiscrimError::Configuration(format!(
                "filesystem loop detected under {}",
                path.display()
            )),
        }
    }
}
