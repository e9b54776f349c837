//! # Cascade Matcher
//!
//! Strict first-match-wins trial of the registry. No scoring: the first
//! recognizer that accepts a file name decides which extractor runs, and
//! later recognizers are never consulted.

use tracing::debug;

use crate::error::Result;
use crate::parser::extractors::{Extraction, Extractors};
use crate::parser::registry::PatternRegistry;
use crate::types::{Convention, EpisodeRecord};

/// Matches file names against the registry and runs the chosen extractor.
#[derive(Debug, Clone)]
pub struct CascadeMatcher {
    registry: PatternRegistry,
    extractors: Extractors,
}

impl CascadeMatcher {
    /// Builds a matcher over the standard ten-convention registry.
    ///
    /// # Errors
    ///
    /// Returns `IndexerError::RegexError` if a pattern fails to compile.
    pub fn new() -> Result<Self> {
        Ok(Self::with_parts(PatternRegistry::new()?, Extractors::new()?))
    }

    /// Builds a matcher from an already compiled registry and extractor set.
    #[must_use]
    pub fn with_parts(registry: PatternRegistry, extractors: Extractors) -> Self {
        Self {
            registry,
            extractors,
        }
    }

    /// The convention the cascade would pick for `file_name`, if any.
    #[must_use]
    pub fn recognize(&self, file_name: &str) -> Option<Convention> {
        self.registry
            .iter()
            .find(|pattern| pattern.is_match(file_name))
            .map(|pattern| pattern.convention())
    }

    /// Every convention whose recognizer accepts `file_name`, in cascade
    /// order. Useful for spotting overlaps; the cascade itself only uses
    /// the first.
    #[must_use]
    pub fn matching_conventions(&self, file_name: &str) -> Vec<Convention> {
        self.registry
            .iter()
            .filter(|pattern| pattern.is_match(file_name))
            .map(|pattern| pattern.convention())
            .collect()
    }

    /// Recognizes and extracts `file_name` without touching a record.
    ///
    /// Returns `None` when no recognizer matches.
    #[must_use]
    pub fn extract(&self, file_name: &str) -> Option<(Convention, Extraction)> {
        let convention = self.recognize(file_name)?;
        Some((convention, self.extractors.extract(convention, file_name)))
    }

    /// Fills `record` from its file name.
    ///
    /// Returns `true` if a title was extracted. On failure the record keeps
    /// empty title and episode fields; `parser` is still set when a
    /// recognizer matched but its extractor found no title.
    pub fn apply(&self, record: &mut EpisodeRecord) -> bool {
        let Some((convention, extraction)) = self.extract(&record.file_name) else {
            debug!(file = %record.file_name, "no convention matched");
            record.parser = None;
            record.clear_fields();
            return false;
        };

        record.parser = Some(convention);
        if extraction.title.is_empty() {
            debug!(file = %record.file_name, %convention, "convention matched but title is empty");
            record.clear_fields();
            return false;
        }

        debug!(
            file = %record.file_name,
            %convention,
            title = %extraction.title,
            episode = %extraction.episode,
            "extracted"
        );
        record.anime_title = extraction.title;
        record.episode_number = extraction.episode;
        true
    }
}
