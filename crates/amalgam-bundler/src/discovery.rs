//! File Discoverer
//!
//! Walks the project folders and collects every regular file, in a stable
//! depth-first order (entries sorted by file name).

use amalgam_core::{Error, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

/// Outcome of a walk over several roots
#[derive(Debug, Default)]
pub struct Discovery {
    /// Files found, in walk order
    pub files: Vec<PathBuf>,
    /// Roots that could not be walked at all, in root order
    pub errors: Vec<Error>,
}

impl Discovery {
    /// The file list, or the first root-level failure
    pub fn into_result(self) -> Result<Vec<PathBuf>> {
        match self.errors.into_iter().next() {
            Some(err) => Err(err),
            None => Ok(self.files),
        }
    }
}

/// Recursively collect the files under each root.
///
/// Entries that fail below a root (permission denied, broken symlink) are
/// skipped. A root that cannot be walked is recorded in
/// [`Discovery::errors`] and the remaining roots are still visited.
pub fn discover<P: AsRef<Path>>(roots: &[P]) -> Discovery {
    let mut discovery = Discovery::default();

    for root in roots {
        let root = root.as_ref();
        let before = discovery.files.len();

        for entry in WalkDir::new(root).follow_links(true).sort_by_file_name() {
            match entry {
                Ok(entry) => {
                    if entry.file_type().is_file() {
                        discovery.files.push(entry.into_path());
                    }
                }
                Err(err) if err.depth() == 0 => {
                    discovery.errors.push(Error::Discovery {
                        root: root.to_path_buf(),
                        source: err.into(),
                    });
                }
                Err(err) => {
                    debug!("Skipping unreadable entry: {}", err);
                }
            }
        }

        info!(
            "Found {} files under {}",
            discovery.files.len() - before,
            root.display()
        );
    }

    discovery
}
