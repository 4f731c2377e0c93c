//! Amalgam Core
//!
//! Core types shared by the amalgam bundler and its command-line front end.

pub mod config;
pub mod error;
pub mod types;

pub use config::{Config, ExtensionTable};
pub use error::{Error, Result};
pub use types::*;
