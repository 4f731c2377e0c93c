//! Error types for amalgam

use std::path::PathBuf;
use thiserror::Error;

/// Amalgam error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("cannot walk folder {}", .root.display())]
    Discovery {
        root: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("couldn't read file {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write to destination file {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid implementation macro name: {0:?}")]
    InvalidMacro(String),
}

/// Result type alias for amalgam
pub type Result<T> = std::result::Result<T, Error>;
