//! # Filename Parser
//!
//! Ties the cascade matcher and the normalizer into the single operation
//! the rest of the crate uses: file name in, normalized record out.

use crate::error::{IndexerError, Result};
use crate::parser::cascade::CascadeMatcher;
use crate::parser::normalizer::Normalizer;
use crate::types::EpisodeRecord;

/// Cascade matcher plus normalizer. Immutable once built.
#[derive(Debug, Clone)]
pub struct FilenameParser {
    matcher: CascadeMatcher,
    normalizer: Normalizer,
}

impl FilenameParser {
    /// Compiles the registry, extractors and normalizer.
    ///
    /// # Errors
    ///
    /// Returns `IndexerError::RegexError` if a pattern fails to compile.
    pub fn new() -> Result<Self> {
        Ok(Self {
            matcher: CascadeMatcher::new()?,
            normalizer: Normalizer::new()?,
        })
    }

    /// Parses a bare file name into a record.
    ///
    /// An unrecognized name is not an error: the returned record is simply
    /// unparsed (`is_parsed() == false`).
    ///
    /// # Errors
    ///
    /// Returns `IndexerError::EmptyInput` if the input is empty or whitespace-only.
    ///
    /// # Examples
    /// ```
    /// use anime_indexer_core::parser::FilenameParser;
    ///
    /// let parser = FilenameParser::new().unwrap();
    /// let record = parser
    ///     .parse("[SubsPlease] 16bit Sensation - Another Layer - 01 (1080p) [C13E9494].mkv")
    ///     .unwrap();
    ///
    /// assert_eq!(record.anime_title, "16bit Sensation - Another Layer");
    /// assert_eq!(record.episode_number, "01");
    /// assert_eq!(record.parser.map(|c| c.id()), Some(2));
    /// ```
    pub fn parse(&self, file_name: &str) -> Result<EpisodeRecord> {
        if file_name.trim().is_empty() {
            return Err(IndexerError::EmptyInput);
        }

        let mut record = EpisodeRecord::new(file_name);
        self.interpret(&mut record);
        Ok(record)
    }

    /// Runs the cascade and, on success, the normalizer on `record`.
    ///
    /// Returns `true` if the record ends up parsed. A title that normalizes
    /// to nothing counts as unparsed and its fields are cleared.
    pub fn interpret(&self, record: &mut EpisodeRecord) -> bool {
        if !self.matcher.apply(record) {
            return false;
        }

        self.normalizer.normalize(record);
        if !record.is_parsed() {
            record.clear_fields();
            return false;
        }
        true
    }
}

/// Convenience function to parse a single file name with a fresh parser.
///
/// Compiles every pattern on each call; build a [`FilenameParser`] once
/// when parsing more than a handful of names.
pub fn parse(file_name: &str) -> Result<EpisodeRecord> {
    FilenameParser::new()?.parse(file_name)
}
