//! Error kinds raised by the extraction and rewrite engine.
//!
//! Each error is logged where it is detected and returned to the caller. The
//! walker records per-file failures and keeps going; only the exclusion list is
//! fatal because it is loaded once before the walk starts.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    /// Malformed Go source. The file is skipped.
    #[error("failed to parse {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    /// A file could not be read or written.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A string literal's escapes could not be decoded. Only that literal is skipped.
    #[error("cannot decode string literal {literal}: {reason}")]
    Decode { literal: String, reason: String },

    /// The exclusion list file is not valid JSON of the expected shape.
    #[error("invalid exclusion list {}: {source}", path.display())]
    ExclusionList {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A regular expression in the exclusion list does not compile.
    #[error("invalid exclusion pattern \"{pattern}\": {source}")]
    ExclusionPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// A catalog could not be serialized.
    #[error("failed to serialize catalog {}: {source}", path.display())]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl EngineError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Short kind label used in reports.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Parse { .. } => "parse",
            Self::Io { .. } => "io",
            Self::Decode { .. } => "decode",
            Self::ExclusionList { .. } | Self::ExclusionPattern { .. } => "exclusion-list",
            Self::Serialize { .. } => "serialize",
        }
    }
}

pub type EngineResult<T> = Result<T, EngineError>;
