//! # File Discovery
//!
//! Recursive walk that supplies the candidate paths for a batch run:
//! regular files above the minimum size whose extension is a media
//! extension. Other extensions are collected for the report.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use crate::config::{normalize_extension, IndexerConfig};
use crate::error::{IndexerError, Result};

/// Result of scanning a directory tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Discovery {
    /// Absolute paths of candidate media files, in walk order.
    pub candidates: Vec<PathBuf>,
    /// Extensions of size-qualified files that are not media, upper case
    /// with leading dot, first-seen order, no duplicates. Files without an
    /// extension contribute the empty string.
    pub unknown_extensions: Vec<String>,
}

/// Walks `root` recursively (entries sorted by file name) and partitions
/// the files larger than `config.min_file_size` by extension.
///
/// Unreadable entries and dangling links are logged and skipped. Symlinked
/// files are indexed under the link's own path; symlinked directories are
/// not followed.
///
/// # Errors
///
/// Returns `IndexerError::NotADirectory` if `root` is not a directory, or
/// `IndexerError::Io` if a candidate path cannot be made absolute.
pub fn find_media_files(root: &Path, config: &IndexerConfig) -> Result<Discovery> {
    if !root.is_dir() {
        return Err(IndexerError::NotADirectory(root.to_path_buf()));
    }

    let mut discovery = Discovery::default();

    for entry in WalkDir::new(root).min_depth(1).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!("Skipping unreadable entry: {err}");
                continue;
            }
        };
        let Some(size) = regular_file_size(&entry) else {
            continue;
        };
        if size <= config.min_file_size {
            continue;
        }

        let extension = extension_of(entry.path());
        if config.is_media_extension(&extension) {
            let path = std::path::absolute(entry.path())
                .map_err(|source| IndexerError::io(entry.path(), source))?;
            discovery.candidates.push(path);
        } else if !discovery.unknown_extensions.contains(&extension) {
            debug!(extension = %extension, "unknown extension");
            discovery.unknown_extensions.push(extension);
        }
    }

    Ok(discovery)
}

/// Size of the regular file behind `entry`, or `None` for anything else.
///
/// A symlink counts as the file it points to. Links to directories are
/// neither descended into nor reported.
fn regular_file_size(entry: &DirEntry) -> Option<u64> {
    let metadata = if entry.path_is_symlink() {
        fs::metadata(entry.path())
    } else {
        entry.metadata().map_err(io::Error::from)
    };

    match metadata {
        Ok(metadata) if metadata.is_file() => Some(metadata.len()),
        Ok(_) => None,
        Err(err) => {
            warn!("Skipping {}: {err}", entry.path().display());
            None
        }
    }
}

/// Upper-case extension with leading dot, or `""` when there is none.
fn extension_of(path: &Path) -> String {
    path.extension()
        .map(|ext| normalize_extension(&ext.to_string_lossy()))
        .unwrap_or_default()
}
