//! Core data types for amalgam

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Classification of a project file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    /// Declarations, copied into the bundle verbatim
    Header,
    /// Implementation, wrapped in the implementation guard
    Source,
    /// Anything else; skipped with a warning
    Unsupported,
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Kind::Header => write!(f, "header"),
            Kind::Source => write!(f, "source"),
            Kind::Unsupported => write!(f, "unsupported"),
        }
    }
}

/// A classified and filtered project file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    pub path: PathBuf,
    pub kind: Kind,
    /// Bytes contributed to the bundle; empty for unsupported files
    pub content: Vec<u8>,
}

impl FileRecord {
    pub fn new(path: PathBuf, kind: Kind, content: Vec<u8>) -> Self {
        Self { path, kind, content }
    }

    /// Record for a file that contributes nothing
    pub fn unsupported(path: PathBuf) -> Self {
        Self {
            path,
            kind: Kind::Unsupported,
            content: Vec::new(),
        }
    }
}
