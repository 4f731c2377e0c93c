//! Amalgam Bundler
//!
//! Merges a multi-file C++ library into one drop-in header.
//!
//! ## Modules
//!
//! - `discovery` - Recursive, ordered walk of the project folders
//! - `classifier` - Extension based header/source classification
//! - `filter` - Per-file content filtering (intra-project include removal)
//! - `bundler` - Orchestration and guarded output
//! - `report` - Summary of a bundling run

pub mod bundler;
pub mod classifier;
pub mod discovery;
pub mod filter;
pub mod report;

pub use bundler::{Bundle, Bundler};
pub use classifier::Classifier;
pub use discovery::{discover, Discovery};
pub use filter::ContentFilter;
pub use report::BundleReport;
