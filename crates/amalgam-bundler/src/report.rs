//! Run summary

use serde::Serialize;
use std::path::PathBuf;

/// What a bundling run consumed and produced
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BundleReport {
    /// Destination file
    pub output: PathBuf,
    /// Headers merged, in bundle order
    pub headers: Vec<PathBuf>,
    /// Sources merged, in bundle order
    pub sources: Vec<PathBuf>,
    /// Files skipped because of their extension
    pub unsupported: Vec<PathBuf>,
    pub bytes_written: usize,
}

impl BundleReport {
    /// One-line human summary
    pub fn summary(&self) -> String {
        format!(
            "Wrote {} ({} bytes): {} header(s), {} source(s), {} unsupported file(s) skipped",
            self.output.display(),
            self.bytes_written,
            self.headers.len(),
            self.sources.len(),
            self.unsupported.len()
        )
    }
}
