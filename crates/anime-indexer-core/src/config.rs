//! # Indexer Configuration
//!
//! Immutable settings shared by file discovery and export. Built once at
//! startup and passed explicitly; nothing here is global.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Files at or below this size (bytes) are ignored by discovery.
pub const DEFAULT_MIN_FILE_SIZE: u64 = 1024 * 1024;

/// Extensions (upper case, with leading dot) treated as media.
pub const DEFAULT_MEDIA_EXTENSIONS: [&str; 3] = [".MKV", ".OGM", ".AVI"];

/// File name of the CSV index written in the working directory.
pub const DEFAULT_OUTPUT_FILE: &str = "anime-index.csv";

/// Configuration for a scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexerConfig {
    /// Minimum size in bytes; only strictly larger files are candidates.
    pub min_file_size: u64,
    /// Recognized media extensions, upper case with leading dot.
    pub media_extensions: Vec<String>,
    /// Where the CSV index is written.
    pub output_file: PathBuf,
}

impl Default for IndexerConfig {
    fn default() -> Self {
        Self {
            min_file_size: DEFAULT_MIN_FILE_SIZE,
            media_extensions: DEFAULT_MEDIA_EXTENSIONS
                .iter()
                .map(|ext| (*ext).to_string())
                .collect(),
            output_file: PathBuf::from(DEFAULT_OUTPUT_FILE),
        }
    }
}

impl IndexerConfig {
    /// Create a new configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum candidate file size in bytes.
    pub fn with_min_file_size(mut self, bytes: u64) -> Self {
        self.min_file_size = bytes;
        self
    }

    /// Replace the media extension set. Entries are normalized to upper
    /// case with a leading dot, so `"mkv"` and `".MKV"` are equivalent.
    pub fn with_media_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.media_extensions = extensions
            .into_iter()
            .map(|ext| normalize_extension(ext.as_ref()))
            .collect();
        self
    }

    /// Set the CSV output path.
    pub fn with_output_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_file = path.into();
        self
    }

    /// Returns `true` if `extension` (any case, with or without the dot) is
    /// a media extension.
    #[must_use]
    pub fn is_media_extension(&self, extension: &str) -> bool {
        let wanted = normalize_extension(extension);
        self.media_extensions.iter().any(|ext| *ext == wanted)
    }
}

/// Upper-cases an extension and makes sure it starts with a dot.
/// The empty string (no extension) stays empty.
pub(crate) fn normalize_extension(extension: &str) -> String {
    if extension.is_empty() {
        return String::new();
    }
    let upper = extension.to_uppercase();
    if upper.starts_with('.') {
        upper
    } else {
        format!(".{upper}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = IndexerConfig::default();
        assert_eq!(config.min_file_size, 1_048_576);
        assert_eq!(config.media_extensions, vec![".MKV", ".OGM", ".AVI"]);
        assert_eq!(config.output_file, PathBuf::from("anime-index.csv"));
    }

    #[test]
    fn test_builder() {
        let config = IndexerConfig::new()
            .with_min_file_size(10)
            .with_media_extensions(["mp4", ".Webm"])
            .with_output_file("out.csv");

        assert_eq!(config.min_file_size, 10);
        assert_eq!(config.media_extensions, vec![".MP4", ".WEBM"]);
        assert_eq!(config.output_file, PathBuf::from("out.csv"));
    }

    #[test]
    fn media_extension_matching_is_case_insensitive() {
        let config = IndexerConfig::default();
        assert!(config.is_media_extension(".mkv"));
        assert!(config.is_media_extension(".Ogm"));
        assert!(config.is_media_extension("AVI"));
        assert!(!config.is_media_extension(".mp4"));
        assert!(!config.is_media_extension(""));
    }
}
