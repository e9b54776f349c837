//! # Anime Indexer Core
//!
//! Infers a show title and episode number from loosely structured anime
//! release file names. An ordered cascade of recognizers, one per naming
//! convention, picks exactly one interpretation per file; a normalization
//! pass then cleans the extracted fields.
//!
//! ## Quick Start
//!
//! ```rust
//! use anime_indexer_core::parser::FilenameParser;
//!
//! let parser = FilenameParser::new().unwrap();
//! let record = parser.parse("(Hi10)_Rurouni_Kenshin_-_64_(480p)_(DragonFox).mkv").unwrap();
//!
//! assert_eq!(record.anime_title, "Rurouni Kenshin");
//! assert_eq!(record.episode_number, "64");
//! assert_eq!(record.parser.map(|c| c.id()), Some(8));
//! ```
pub mod batch;
pub mod config;
pub mod discovery;
pub mod error;
pub mod export;
pub mod parser;
pub mod types;

// Re-export primary API
pub use batch::{parse_paths, BatchReport};
pub use config::{IndexerConfig, DEFAULT_MEDIA_EXTENSIONS, DEFAULT_MIN_FILE_SIZE, DEFAULT_OUTPUT_FILE};
pub use discovery::{find_media_files, Discovery};
pub use error::{IndexerError, Result};
pub use export::{save_index, write_index};
pub use parser::{CascadeMatcher, Extractors, FilenameParser, Normalizer, PatternRegistry};
pub use types::{Convention, EpisodeRecord};
