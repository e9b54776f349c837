//! # Pattern Registry
//!
//! The ordered table of recognizers, one per [`Convention`]. The registry
//! only answers "which conventions match"; extraction lives in
//! [`Extractors`](super::extractors::Extractors).

use regex::Regex;

use crate::error::Result;
use crate::types::Convention;

/// Source of the recognizer for each convention.
///
/// Character classes use `[0-9]` rather than `\d` so that only ASCII digits
/// count as episode material.
fn recognizer_source(convention: Convention) -> &'static str {
    match convention {
        Convention::DashedDescription => {
            r"(^[^\[].*)( - )([a-zA-Z0-9]+)( - )([^\[]+)([^.]+)(\.)([a-zA-Z]+)"
        }
        Convention::GroupResolution => r"^(\[[^\]]+\])([^(]+)(\([0-9]+[pP]\))([^.]+)(\.)([a-zA-Z]+)",
        Convention::GroupTagged => r"^(\[[^\]]+\])([^(]+)(\([^.]+)(\.)([a-zA-Z]+)",
        Convention::Dashed => r"(^[^\[]+)( - )([^.]+)(\.)([a-zA-Z]+)",
        Convention::GroupBracketResolution => {
            r"(^\[[^\]]+\])(.+)(\[[0-9pP]+\][-0-9]*)(\.)([a-zA-Z]+)$"
        }
        Convention::GroupBare => r"(^\[[^\]]+\])(.*)\.([a-zA-Z]+)$",
        Convention::TripleDash => r"(.*)( - )([^ ]+)( - )(.*)([a-zA-Z]+)$",
        Convention::TagUnderscore => r"(^\([^)]+\))(_)([^(]+)(.*)$",
        Convention::NumberedPrefix => r"(^[0-9]+)(.)([^\[]+)(.*)",
        Convention::Anchor1080p => r"(.*)(.)([0-9]+)(.)(1080[pP])(.*)$",
    }
}

/// A compiled recognizer paired with the convention it identifies.
#[derive(Debug, Clone)]
pub struct Pattern {
    convention: Convention,
    recognizer: Regex,
}

impl Pattern {
    /// The convention this recognizer identifies.
    #[must_use]
    pub fn convention(&self) -> Convention {
        self.convention
    }

    /// Returns `true` if the file name follows this convention.
    #[must_use]
    pub fn is_match(&self, file_name: &str) -> bool {
        self.recognizer.is_match(file_name)
    }
}

/// Fixed, ordered sequence of recognizers. Built once, never mutated.
#[derive(Debug, Clone)]
pub struct PatternRegistry {
    patterns: Vec<Pattern>,
}

impl PatternRegistry {
    /// Compiles every recognizer in cascade order.
    ///
    /// # Errors
    ///
    /// Returns `IndexerError::RegexError` if a pattern fails to compile
    /// (should never happen with the static patterns defined here).
    pub fn new() -> Result<Self> {
        let patterns = Convention::ALL
            .into_iter()
            .map(|convention| -> Result<Pattern> {
                Ok(Pattern {
                    convention,
                    recognizer: Regex::new(recognizer_source(convention))?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { patterns })
    }

    /// Iterates the recognizers in priority order.
    pub fn iter(&self) -> impl Iterator<Item = &Pattern> {
        self.patterns.iter()
    }

    /// Number of registered conventions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Always `false` for a registry built by [`PatternRegistry::new`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

impl<'a> IntoIterator for &'a PatternRegistry {
    type Item = &'a Pattern;
    type IntoIter = std::slice::Iter<'a, Pattern>;

    fn into_iter(self) -> Self::IntoIter {
        self.patterns.iter()
    }
}
