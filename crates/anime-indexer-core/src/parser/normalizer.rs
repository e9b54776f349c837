//! # Normalizer
//!
//! Post-extraction cleanup of title and episode text. Steps run in a fixed
//! order; the episode version strip must come before title cleanup, and the
//! episode digit collapse after it.

use regex::Regex;

use crate::error::Result;
use crate::types::EpisodeRecord;

/// Cleans the raw fields written by an extractor.
#[derive(Debug, Clone)]
pub struct Normalizer {
    re_version_suffix: Regex,
    re_spaced_number: Regex,
}

impl Normalizer {
    /// Constructs a new `Normalizer` with pre-compiled regex patterns.
    ///
    /// # Errors
    ///
    /// Returns `IndexerError::RegexError` if a pattern fails to compile.
    pub fn new() -> Result<Self> {
        Ok(Self {
            re_version_suffix: Regex::new(r"^(.*)[vV][0-9]+$")?,
            re_spaced_number: Regex::new(r" ([0-9]+)")?,
        })
    }

    /// Normalizes a parsed record in place.
    ///
    /// Idempotent: normalizing an already normalized record changes nothing.
    pub fn normalize(&self, record: &mut EpisodeRecord) {
        record.episode_number = self.strip_version(&record.episode_number);

        let title = replace_isolated_underscores(&record.anime_title);
        let title = space_glued_hyphens(&title);

        if let Some(number) = self
            .re_spaced_number
            .captures(&record.episode_number)
            .map(|caps| caps[1].to_string())
        {
            record.episode_number = number;
        }

        record.anime_title = title.trim().to_string();

        if record.episode_number == "." {
            record.episode_number.clear();
        }
    }

    /// Removes trailing release-version tags ("12v2" -> "12").
    fn strip_version(&self, episode: &str) -> String {
        let mut episode = episode.to_string();
        while let Some(stripped) = self
            .re_version_suffix
            .captures(&episode)
            .map(|caps| caps[1].trim().to_string())
        {
            episode = stripped;
        }
        episode
    }
}

/// Replaces underscores that are not part of an underscore run with spaces.
///
/// `Cowboy_Bebop` becomes `Cowboy Bebop`; `Fate__Zero` is left alone.
fn replace_isolated_underscores(title: &str) -> String {
    let chars: Vec<char> = title.chars().collect();
    chars
        .iter()
        .enumerate()
        .map(|(idx, &c)| {
            let isolated = c == '_'
                && (idx == 0 || chars[idx - 1] != '_')
                && chars.get(idx + 1) != Some(&'_');
            if isolated { ' ' } else { c }
        })
        .collect()
}

/// Inserts a space before a hyphen glued to a lowercase letter, digit or
/// symbol. Hyphens after a space or an uppercase ASCII letter are kept as is.
fn space_glued_hyphens(title: &str) -> String {
    let mut out = String::with_capacity(title.len() + 4);
    let mut prev: Option<char> = None;
    for c in title.chars() {
        if c == '-' && prev.is_some_and(|p| p != ' ' && !p.is_ascii_uppercase()) {
            out.push(' ');
        }
        out.push(c);
        prev = Some(c);
    }
    out
}
