//! Anime Indexer
//!
//! Scans a media library, infers show title and episode number from each
//! file name, and writes the result to a CSV index in the working directory.

use std::path::{Path, PathBuf};

use anime_indexer_core::{
    find_media_files, parse_paths, save_index, FilenameParser, IndexerConfig,
    DEFAULT_MIN_FILE_SIZE, DEFAULT_OUTPUT_FILE,
};
use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// CLI arguments
#[derive(Debug, Parser)]
#[command(name = "anime-indexer")]
#[command(about = "Index anime episodes by parsing media file names")]
#[command(version)]
struct Cli {
    /// Directory to scan; becomes the working directory
    directory: Option<PathBuf>,

    /// Only files strictly larger than this many bytes are indexed
    #[arg(long, env = "ANIME_INDEXER_MIN_SIZE", default_value_t = DEFAULT_MIN_FILE_SIZE)]
    min_size: u64,

    /// CSV file to write, relative to the working directory
    #[arg(short, long, env = "ANIME_INDEXER_OUTPUT", default_value = DEFAULT_OUTPUT_FILE)]
    output: PathBuf,
}

impl Cli {
    fn config(&self) -> IndexerConfig {
        IndexerConfig::new()
            .with_min_file_size(self.min_size)
            .with_output_file(&self.output)
    }
}

/// Renders extensions as `[.MP4 .NFO]`.
fn extension_list(extensions: &[String]) -> String {
    format!("[{}]", extensions.join(" "))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    println!("Anime Indexer {}", env!("CARGO_PKG_VERSION"));

    if let Some(dir) = &cli.directory {
        std::env::set_current_dir(dir)
            .with_context(|| format!("Failed to enter directory {}", dir.display()))?;
    }

    let config = cli.config();
    let discovery =
        find_media_files(Path::new("."), &config).context("Failed to scan working directory")?;
    println!("Total files found: {}", discovery.candidates.len());
    println!(
        "Unknown extensions: {}",
        extension_list(&discovery.unknown_extensions)
    );

    let parser = FilenameParser::new().context("Failed to build filename parser")?;
    let report = parse_paths(&parser, &discovery.candidates);
    println!("Parsed filenames: {}", report.parsed);
    println!("Unparsed filenames: {}", report.unparsed);

    save_index(&config.output_file, &report.records).with_context(|| {
        format!("Failed creating file {}", config.output_file.display())
    })?;
    info!(path = %config.output_file.display(), "done");

    Ok(())
}
