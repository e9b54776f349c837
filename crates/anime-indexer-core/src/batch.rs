//! # Batch Driver
//!
//! Runs the filename parser over every candidate path, in order, and keeps
//! the parsed/unparsed tally.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::parser::FilenameParser;
use crate::types::EpisodeRecord;

/// Outcome of a batch run: one record per input path plus counters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchReport {
    /// Records in input order, parsed and unparsed alike.
    pub records: Vec<EpisodeRecord>,
    /// Number of records with a title.
    pub parsed: usize,
    /// Number of records without a title.
    pub unparsed: usize,
}

impl BatchReport {
    /// Total number of records; always `parsed + unparsed`.
    #[must_use]
    pub fn total(&self) -> usize {
        self.records.len()
    }

    /// Iterates the records that could not be parsed.
    pub fn unparsed_records(&self) -> impl Iterator<Item = &EpisodeRecord> {
        self.records.iter().filter(|r| !r.is_parsed())
    }
}

/// Parses every path in `paths`.
///
/// Folder and file name are derived from each path; only the file name is
/// interpreted. Emits one `warn` line per file that could not be parsed.
pub fn parse_paths<I, P>(parser: &FilenameParser, paths: I) -> BatchReport
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let mut report = BatchReport::default();

    for path in paths {
        let mut record = EpisodeRecord::from_path(path.as_ref());
        if parser.interpret(&mut record) {
            report.parsed += 1;
        } else {
            warn!("Could not parse {}", record.file_name);
            report.unparsed += 1;
        }
        report.records.push(record);
    }

    info!(
        parsed = report.parsed,
        unparsed = report.unparsed,
        "batch complete"
    );
    report
}
