use std::path::Path;

use serde::{Deserialize, Serialize};

use super::convention::Convention;

/// One row of the index, produced for every candidate file.
///
/// A record is parsed iff `anime_title` is non-empty. `episode_number` is
/// free text and may legitimately be empty on a parsed record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpisodeRecord {
    /// Directory portion of the source path (informational only).
    pub folder: String,

    /// Base name of the source path. The only field the engine reads.
    pub file_name: String,

    /// Inferred show title; empty means unparsed.
    pub anime_title: String,

    /// Inferred episode designator ("01", "0.8", "Ova P1", ...).
    pub episode_number: String,

    /// Convention whose recognizer matched, if any.
    pub parser: Option<Convention>,
}

impl EpisodeRecord {
    /// Creates an empty record for a bare file name.
    #[must_use]
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            folder: String::new(),
            file_name: file_name.into(),
            anime_title: String::new(),
            episode_number: String::new(),
            parser: None,
        }
    }

    /// Creates an empty record from a full path, splitting it into folder
    /// and file name.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let folder = path
            .parent()
            .map(|p| p.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self {
            folder,
            ..Self::new(file_name)
        }
    }

    /// Returns `true` if a title was inferred.
    #[must_use]
    pub fn is_parsed(&self) -> bool {
        !self.anime_title.is_empty()
    }

    /// Drops any extracted fields, keeping the matched convention.
    pub fn clear_fields(&mut self) {
        self.anime_title.clear();
        self.episode_number.clear();
    }
}

impl std::fmt::Display for EpisodeRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "EpisodeRecord(file={:?}", self.file_name)?;
        if self.is_parsed() {
            write!(f, ", title={:?}", self.anime_title)?;
        }
        if !self.episode_number.is_empty() {
            write!(f, ", ep={:?}", self.episode_number)?;
        }
        if let Some(parser) = self.parser {
            write!(f, ", parser={parser}")?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_record_is_unparsed() {
        let record = EpisodeRecord::new("show.mkv");
        assert_eq!(record.file_name, "show.mkv");
        assert!(record.folder.is_empty());
        assert!(!record.is_parsed());
        assert!(record.parser.is_none());
    }

    #[test]
    fn from_path_splits_folder_and_name() {
        let record =
            EpisodeRecord::from_path(Path::new("/media/anime/[Nep Blanc] Clockwork Planet 01.mkv"));
        assert_eq!(record.folder, "/media/anime");
        assert_eq!(record.file_name, "[Nep Blanc] Clockwork Planet 01.mkv");
    }

    #[test]
    fn clear_fields_keeps_parser() {
        let mut record = EpisodeRecord::new("x.mkv");
        record.anime_title = "Title".into();
        record.episode_number = "01".into();
        record.parser = Some(Convention::GroupBare);
        record.clear_fields();
        assert!(!record.is_parsed());
        assert!(record.episode_number.is_empty());
        assert_eq!(record.parser, Some(Convention::GroupBare));
    }

    #[test]
    fn record_display() {
        let mut record = EpisodeRecord::new("a.mkv");
        record.anime_title = "Clockwork Planet".into();
        record.episode_number = "01".into();
        record.parser = Some(Convention::GroupBare);
        let display = record.to_string();
        assert!(display.contains("Clockwork Planet"));
        assert!(display.contains("parser=6"));
    }

    #[test]
    fn record_is_serializable() {
        let mut record = EpisodeRecord::from_path(Path::new("/a/b.mkv"));
        record.anime_title = "B".into();
        record.parser = Some(Convention::Anchor1080p);

        let json = serde_json::to_string(&record).unwrap();
        let back: EpisodeRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, back);
    }
}
