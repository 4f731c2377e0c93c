//! Content Filter
//!
//! Reads a classified file and returns the bytes it contributes to the bundle.
//! Source files lose their quoted `#include` lines, since every project file
//! ends up in the same output. Headers pass through untouched.
//!
//! Content is handled as raw bytes; files need not be valid UTF-8.

use amalgam_core::{Error, Kind, Result};
use regex::bytes::Regex;
use std::path::Path;
use tracing::debug;

/// A quoted include anywhere on the line; angle-bracket includes don't match.
/// `(?-u)` lets `.` match any byte, not only UTF-8 sequences.
const QUOTED_INCLUDE: &str = r#"(?-u)#include\s+".*".*$"#;

/// Line based content filter
pub struct ContentFilter {
    include_re: Regex,
}

impl ContentFilter {
    pub fn new() -> Self {
        Self {
            include_re: Regex::new(QUOTED_INCLUDE).expect("quoted include pattern is valid"),
        }
    }

    /// Read `path` and filter it according to `kind`.
    ///
    /// Returns `None` for unsupported files without touching the disk.
    pub fn filter(&self, path: &Path, kind: Kind) -> Result<Option<Vec<u8>>> {
        if kind == Kind::Unsupported {
            return Ok(None);
        }

        let content = std::fs::read(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;

        match kind {
            Kind::Source => Ok(Some(self.strip_includes(&content))),
            _ => Ok(Some(content)),
        }
    }

    /// Drop every line holding a quoted include.
    ///
    /// Kept lines are joined with `\n` and the result has no trailing newline.
    pub fn strip_includes(&self, content: &[u8]) -> Vec<u8> {
        let mut out = Vec::with_capacity(content.len());
        let mut dropped = 0usize;

        for line in lines(content) {
            if self.include_re.is_match(line) {
                dropped += 1;
                continue;
            }
            out.extend_from_slice(line);
            out.push(b'\n');
        }

        if dropped > 0 {
            debug!("Removed {} include line(s)", dropped);
        }

        if out.ends_with(b"\n") {
            out.pop();
        }
        out
    }
}

impl Default for ContentFilter {
    fn default() -> Self {
        Self::new()
    }
}

/// Split on `\n`, dropping a trailing `\r` from each line
fn lines(content: &[u8]) -> impl Iterator<Item = &[u8]> {
    let content = content.strip_suffix(b"\n").unwrap_or(content);
    content
        .split(|&b| b == b'\n')
        .map(|line| line.strip_suffix(b"\r").unwrap_or(line))
}
