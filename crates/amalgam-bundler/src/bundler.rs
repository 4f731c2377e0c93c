//! Bundler
//!
//! Runs discovery, classification and filtering, then writes the single
//! header: all header bytes, then all source bytes inside an
//! `#ifndef <macro>` / `#define <macro>` / `#endif` implementation guard.
//!
//! Everything is gathered in memory before the destination is opened, so a
//! failed read never truncates an existing bundle.

use crate::classifier::Classifier;
use crate::discovery::discover;
use crate::filter::ContentFilter;
use crate::report::BundleReport;
use amalgam_core::{Config, Error, FileRecord, Kind, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Header and source bytes of one run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bundle {
    pub header_text: Vec<u8>,
    pub source_text: Vec<u8>,
}

impl Bundle {
    /// Append a record to the buffer matching its kind
    pub fn push(&mut self, record: &FileRecord) {
        match record.kind {
            Kind::Header => append(&mut self.header_text, &record.content),
            Kind::Source => append(&mut self.source_text, &record.content),
            Kind::Unsupported => {}
        }
    }

    /// Final file contents for the given implementation macro
    pub fn render(&self, impl_macro: &str) -> Vec<u8> {
        let open = format!("\n#ifndef {impl_macro}\n#define {impl_macro}\n");
        let close = b"\n#endif\n";

        let mut out = Vec::with_capacity(
            self.header_text.len() + open.len() + self.source_text.len() + close.len(),
        );
        out.extend_from_slice(&self.header_text);
        out.extend_from_slice(open.as_bytes());
        out.extend_from_slice(&self.source_text);
        out.extend_from_slice(close);
        out
    }
}

/// Concatenate, starting `content` on a fresh line
fn append(buffer: &mut Vec<u8>, content: &[u8]) {
    if !buffer.is_empty() && !buffer.ends_with(b"\n") && !content.is_empty() {
        buffer.push(b'\n');
    }
    buffer.extend_from_slice(content);
}

/// Single-header bundler
pub struct Bundler {
    config: Config,
    classifier: Classifier,
    filter: ContentFilter,
}

impl Bundler {
    /// Create a bundler; fails if the configuration is unusable
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let classifier = Classifier::new(config.extensions.clone());
        Ok(Self {
            config,
            classifier,
            filter: ContentFilter::new(),
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Bundle `<root>/src` and `<root>/include` into the configured output
    pub fn run(&self) -> Result<BundleReport> {
        let roots = self.config.source_roots();
        self.bundle(&roots, &self.config.out)
    }

    /// Bundle every file under `roots` into `out`.
    ///
    /// A root that cannot be walked aborts the run before anything is read.
    pub fn bundle(&self, roots: &[PathBuf], out: &Path) -> Result<BundleReport> {
        let paths = discover(roots).into_result()?;
        self.bundle_files(paths, out)
    }

    /// Bundle an already discovered file list into `out`, in list order.
    ///
    /// Stops at the first read failure, before `out` is opened.
    pub fn bundle_files(&self, paths: Vec<PathBuf>, out: &Path) -> Result<BundleReport> {
        let records = paths
            .into_iter()
            .map(|path| self.record(path))
            .collect::<Result<Vec<_>>>()?;

        let mut bundle = Bundle::default();
        let mut report = BundleReport {
            output: out.to_path_buf(),
            ..BundleReport::default()
        };

        for record in &records {
            match record.kind {
                Kind::Header => report.headers.push(record.path.clone()),
                Kind::Source => report.sources.push(record.path.clone()),
                Kind::Unsupported => {
                    warn!("Unsupported file ({})", record.path.display());
                    report.unsupported.push(record.path.clone());
                    continue;
                }
            }
            bundle.push(record);
        }

        let bytes = bundle.render(&self.config.impl_macro);
        write_output(out, &bytes)?;
        report.bytes_written = bytes.len();

        info!(
            "Bundled {} header(s) and {} source(s) into {}",
            report.headers.len(),
            report.sources.len(),
            out.display()
        );
        Ok(report)
    }

    fn record(&self, path: PathBuf) -> Result<FileRecord> {
        let kind = self.classifier.classify(&path);
        debug!("{} -> {}", path.display(), kind);

        match self.filter.filter(&path, kind)? {
            Some(content) => Ok(FileRecord::new(path, kind, content)),
            None => Ok(FileRecord::unsupported(path)),
        }
    }
}

fn write_output(out: &Path, bytes: &[u8]) -> Result<()> {
    let write_err = |source| Error::Write {
        path: out.to_path_buf(),
        source,
    };

    let file = File::create(out).map_err(write_err)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(bytes).map_err(write_err)?;
    writer.flush().map_err(write_err)?;
    Ok(())
}
