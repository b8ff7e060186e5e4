//! guidgen CLI
//!
//! Generates `guids.c` from the MdePkg include tree, or concatenates a
//! manifest of EDK2 sources into one file.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use guidgen_core::GeneratorConfig;
use guidgen_emit::concat::{DEFAULT_CONCAT_OUTPUT, DEFAULT_MANIFEST};
use guidgen_emit::{ConcatGenerator, GuidGenerator};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "guidgen")]
#[command(author, version, about = "EDK2 GUID definition generator", long_about = None)]
struct Cli {
    /// Print GUIDs as they are processed
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file (YAML or JSON)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Define every GUID declared in the include tree (default)
    Guids {
        /// Root of the header tree
        #[arg(long, value_name = "DIR")]
        include_dir: Option<PathBuf>,

        /// Generated file
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Concatenate the files listed in a manifest
    Concat {
        /// Manifest with one source path per line
        #[arg(long, value_name = "FILE", default_value = DEFAULT_MANIFEST)]
        manifest: PathBuf,

        /// Generated file
        #[arg(short, long, value_name = "FILE", default_value = DEFAULT_CONCAT_OUTPUT)]
        output: PathBuf,

        /// Prefix removed from the path in each file's comment
        #[arg(long, default_value = "edk2/")]
        strip_prefix: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        None => cmd_guids(cli.config.as_deref(), None, None)?,
        Some(Commands::Guids {
            include_dir,
            output,
        }) => cmd_guids(cli.config.as_deref(), include_dir, output)?,
        Some(Commands::Concat {
            manifest,
            output,
            strip_prefix,
        }) => cmd_concat(cli.config.as_deref(), manifest, output, strip_prefix)?,
    }

    Ok(())
}

/// Silent unless `--verbose` is given
fn init_logging(verbose: bool) {
    let level = if verbose { "info" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn load_config(path: Option<&Path>) -> Result<GeneratorConfig> {
    match path {
        Some(path) => GeneratorConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => Ok(GeneratorConfig::default()),
    }
}

fn cmd_guids(
    config_path: Option<&Path>,
    include_dir: Option<PathBuf>,
    output: Option<PathBuf>,
) -> Result<()> {
    let mut config = load_config(config_path)?;
    if let Some(include_dir) = include_dir {
        config.include_root = include_dir;
    }
    if let Some(output) = output {
        config.output = output;
    }

    let include_root = config.include_root.clone();
    let generator = GuidGenerator::new(config).context("Invalid generator configuration")?;
    let report = generator
        .run()
        .with_context(|| format!("Failed to generate GUIDs from {}", include_root.display()))?;

    info!(
        "{} headers scanned, {} excluded, {} overrides applied",
        report.headers_scanned, report.headers_excluded, report.overrides_applied
    );
    Ok(())
}

fn cmd_concat(
    config_path: Option<&Path>,
    manifest: PathBuf,
    output: PathBuf,
    strip_prefix: String,
) -> Result<()> {
    let config = load_config(config_path)?;
    let generator = ConcatGenerator::new(&manifest, output)
        .strip_prefix(strip_prefix)
        .foundation_include(config.foundation_include);

    generator
        .run()
        .with_context(|| format!("Failed to concatenate {}", manifest.display()))
}
