//! File Classifier
//!
//! Maps a path to a [`Kind`] using the configured extension table.

use amalgam_core::{ExtensionTable, Kind};
use std::path::Path;

/// Extension based classifier
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    table: ExtensionTable,
}

impl Classifier {
    pub fn new(table: ExtensionTable) -> Self {
        Self { table }
    }

    /// Classify a path by the `.<ext>` suffix of its full path string.
    ///
    /// Matching is case-sensitive. When several entries match (`hpp` and
    /// `pp`, say) the longest extension wins.
    pub fn classify(&self, path: &Path) -> Kind {
        let path = path.to_string_lossy();

        self.table
            .iter()
            .filter(|(ext, _)| has_extension(&path, ext))
            .max_by_key(|(ext, _)| ext.len())
            .map(|(_, kind)| kind)
            .unwrap_or(Kind::Unsupported)
    }
}

fn has_extension(path: &str, ext: &str) -> bool {
    path.strip_suffix(ext)
        .is_some_and(|stem| stem.ends_with('.'))
}
