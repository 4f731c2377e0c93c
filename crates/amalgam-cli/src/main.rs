//! Amalgam CLI
//!
//! Builds a single drop-in header from a library's `src/` and `include/`.

use amalgam_bundler::{BundleReport, Bundler};
use amalgam_core::config::CONFIG_FILE_NAME;
use amalgam_core::Config;
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "amalgam")]
#[command(author, version, about = "Merge a C++ library into a single header", long_about = None)]
struct Cli {
    /// Project root containing src/ and include/ [default: .]
    #[arg(long, value_name = "DIR")]
    root: Option<PathBuf>,

    /// Output single header [default: ./example/include/tensor.hpp]
    #[arg(long, value_name = "FILE")]
    out: Option<PathBuf>,

    /// Implementation macro name [default: TENSOR_LIB_IMPL]
    #[arg(long = "impl-macro", value_name = "NAME")]
    impl_macro: Option<String>,

    /// YAML config file (default: <root>/amalgam.yaml when present)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Summary format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Log every file as it is classified
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() {
    let cli = Cli::parse();
    init_logging(&cli);

    if let Err(e) = run(cli) {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn init_logging(cli: &Cli) {
    let level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "info"
    };
    let default_directive = format!("amalgam_bundler={level},amalgam_cli={level}");
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let format = cli.format;
    let config = resolve_config(cli)?;

    let bundler = Bundler::new(config).context("invalid configuration")?;
    debug!("Using config: {:?}", bundler.config());
    let report = bundler.run().context("bundling failed")?;

    print_report(&report, format)
}

/// Merge built-in defaults, the config file and command-line flags, in
/// increasing precedence
fn resolve_config(cli: Cli) -> Result<Config> {
    let root = cli.root.clone().unwrap_or_else(|| Config::default().root);

    let mut config = match config_file(cli.config.as_deref(), &root) {
        Some(path) => {
            debug!("Loading config file {}", path.display());
            Config::load_yaml(&path)
                .with_context(|| format!("cannot load config {}", path.display()))?
        }
        None => Config::default(),
    };

    if let Some(root) = cli.root {
        config.root = root;
    }
    if let Some(out) = cli.out {
        config.out = out;
    }
    if let Some(impl_macro) = cli.impl_macro {
        config.impl_macro = impl_macro;
    }

    Ok(config)
}

fn config_file(explicit: Option<&Path>, root: &Path) -> Option<PathBuf> {
    match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => {
            let candidate = root.join(CONFIG_FILE_NAME);
            candidate.is_file().then_some(candidate)
        }
    }
}

fn print_report(report: &BundleReport, format: Format) -> Result<()> {
    match format {
        Format::Text => {
            println!("{}", report.summary());
            for path in &report.unsupported {
                println!("  skipped: {}", path.display());
            }
        }
        Format::Json => {
            println!("{}", serde_json::to_string_pretty(report)?);
        }
    }
    Ok(())
}
