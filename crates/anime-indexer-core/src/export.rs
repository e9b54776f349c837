//! # CSV Export
//!
//! Writes the record sequence as a four-column CSV index.

use std::fs::File;
use std::io;
use std::path::Path;

use tracing::info;

use crate::error::{IndexerError, Result};
use crate::types::EpisodeRecord;

/// Header row of the index.
pub const HEADER: [&str; 4] = ["Anime Title", "Episode Number", "Parser", "Filename"];

/// Writes the header and one row per record to `writer`.
///
/// Columns: title, episode, parser id (empty when no convention matched),
/// original file name.
///
/// # Errors
///
/// Returns `IndexerError::CsvError` if writing fails.
pub fn write_index<W: io::Write>(writer: W, records: &[EpisodeRecord]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(HEADER)?;

    for record in records {
        let parser = record.parser.map(|c| c.to_string()).unwrap_or_default();
        wtr.write_record([
            record.anime_title.as_str(),
            record.episode_number.as_str(),
            parser.as_str(),
            record.file_name.as_str(),
        ])?;
    }

    wtr.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Creates (or truncates) the file at `path` and writes the index to it.
///
/// # Errors
///
/// Returns `IndexerError::Io` if the file cannot be created, or
/// `IndexerError::CsvError` if writing fails.
pub fn save_index(path: &Path, records: &[EpisodeRecord]) -> Result<()> {
    let file = File::create(path).map_err(|source| IndexerError::io(path, source))?;
    write_index(file, records)?;
    info!(path = %path.display(), rows = records.len(), "index written");
    Ok(())
}
