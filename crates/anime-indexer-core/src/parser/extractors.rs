//! # Extractor Set
//!
//! One extraction procedure per [`Convention`]. Each assumes its recognizer
//! already matched, splits the file name into the segment holding the title
//! and the segment holding the episode designator, and trims both.
//!
//! When an inner refinement step does not find the sub-structure it expects,
//! the extractor degrades to "whole candidate segment is the title, no
//! episode" instead of failing.

use regex::{Captures, Regex};
use tracing::debug;

use crate::error::Result;
use crate::types::Convention;

/// Raw title and episode text produced by an extractor, before normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    /// Raw show title; empty if nothing usable was found.
    pub title: String,
    /// Raw episode designator; may be empty.
    pub episode: String,
}

impl Extraction {
    /// Builds an extraction from both segments, trimming surrounding whitespace.
    #[must_use]
    pub fn new(title: &str, episode: &str) -> Self {
        Self {
            title: title.trim().to_string(),
            episode: episode.trim().to_string(),
        }
    }

    /// Title-only extraction, used as the coarse fallback.
    #[must_use]
    pub fn title_only(title: &str) -> Self {
        Self::new(title, "")
    }
}

fn group<'h>(caps: &Captures<'h>, index: usize) -> &'h str {
    caps.get(index).map_or("", |m| m.as_str())
}

/// Compiled extraction patterns for all ten conventions.
///
/// Some patterns are lazy variants of the matching recognizer: the
/// recognizer decides *whether* a name fits, the extractor decides *where*
/// the segments split.
#[derive(Debug, Clone)]
pub struct Extractors {
    re_dashed_description: Regex,
    re_group_resolution: Regex,
    re_group_tagged: Regex,
    re_year: Regex,
    re_dashed: Regex,
    re_group_bracket_resolution: Regex,
    re_group_bare: Regex,
    re_triple_dash: Regex,
    re_tag_underscore: Regex,
    re_numbered_prefix: Regex,
    re_anchor_1080p: Regex,

    // Inner refinements on the candidate segment
    re_split_hash_episode: Regex,
    re_split_episode: Regex,
    re_split_loose_episode: Regex,
    re_split_spaceless_episode: Regex,
    re_trailing_token: Regex,
    re_trailing_number: Regex,
}

impl Extractors {
    /// Compiles all extraction patterns.
    ///
    /// # Errors
    ///
    /// Returns `IndexerError::RegexError` if any pattern fails to compile
    /// (should never happen with the static patterns defined here).
    pub fn new() -> Result<Self> {
        Ok(Self {
            re_dashed_description: Regex::new(
                r"^([^\[].*?) - ([a-zA-Z0-9]+?) - [^\[]+?[^.]+?\.[a-zA-Z]+?",
            )?,
            re_group_resolution: Regex::new(r"^\[[^\]]+\]([^(]+)\([0-9]+[pP]\)[^.]+\.[a-zA-Z]+")?,
            re_group_tagged: Regex::new(r"^\[[^\]]+\]([^(]+)\([^.]+\.[a-zA-Z]+")?,
            re_year: Regex::new(r"\([12][0-9]{3}\)")?,
            re_dashed: Regex::new(r"^([^\[]+) - [^.]+\.[a-zA-Z]+")?,
            re_group_bracket_resolution: Regex::new(
                r"^\[[^\]]+\](.+)\[[0-9pP]+\][-0-9]*\.[a-zA-Z]+$",
            )?,
            re_group_bare: Regex::new(r"^\[[^\]]+\](.*?)\.[a-zA-Z]+$")?,
            re_triple_dash: Regex::new(r"^(.*?) - ([^ ]+?) - .*[a-zA-Z]$")?,
            re_tag_underscore: Regex::new(r"^\([^)]+\)_([^(]+)")?,
            re_numbered_prefix: Regex::new(r"^([0-9]+).([^\[]+)")?,
            re_anchor_1080p: Regex::new(r"^(.*).[0-9]+.1080[pP]")?,

            re_split_hash_episode: Regex::new(r"^(.*) - ([a-zA-Z# .0-9]+)$")?,
            re_split_episode: Regex::new(r"^(.*) - ([a-zA-Z.0-9]+)$")?,
            re_split_loose_episode: Regex::new(r"^(.*) - ([a-zA-Z.0-9 ]+)")?,
            re_split_spaceless_episode: Regex::new(r"^(.*) - ([^ ]+)$")?,
            re_trailing_token: Regex::new(r"^(.*?)([a-zA-Z.0-9]+)$")?,
            re_trailing_number: Regex::new(r"^(.*?)([0-9.]+)$")?,
        })
    }

    /// Runs the extractor for `convention` on a file name its recognizer
    /// accepted.
    ///
    /// Never fails: a name that does not actually fit yields an empty
    /// extraction, which the cascade reports as unparsed.
    #[must_use]
    pub fn extract(&self, convention: Convention, file_name: &str) -> Extraction {
        let extraction = match convention {
            Convention::DashedDescription => self.dashed_description(file_name),
            Convention::GroupResolution => self.group_resolution(file_name),
            Convention::GroupTagged => self.group_tagged(file_name),
            Convention::Dashed => self.dashed(file_name),
            Convention::GroupBracketResolution => self.group_bracket_resolution(file_name),
            Convention::GroupBare => self.group_bare(file_name),
            Convention::TripleDash => self.triple_dash(file_name),
            Convention::TagUnderscore => self.tag_underscore(file_name),
            Convention::NumberedPrefix => self.numbered_prefix(file_name),
            Convention::Anchor1080p => self.anchor_1080p(file_name),
        };

        extraction.unwrap_or_else(|| {
            debug!(%convention, file_name, "extractor did not match its own convention");
            Extraction::default()
        })
    }

    /// Splits `candidate` on its last ` - ` with `splitter`, or keeps the
    /// whole candidate as the title.
    fn split_or_whole(splitter: &Regex, candidate: &str) -> Extraction {
        match splitter.captures(candidate) {
            Some(caps) => Extraction::new(group(&caps, 1), group(&caps, 2)),
            None => Extraction::title_only(candidate),
        }
    }

    fn dashed_description(&self, file_name: &str) -> Option<Extraction> {
        let caps = self.re_dashed_description.captures(file_name)?;
        Some(Extraction::new(group(&caps, 1), group(&caps, 2)))
    }

    fn group_resolution(&self, file_name: &str) -> Option<Extraction> {
        let caps = self.re_group_resolution.captures(file_name)?;
        let candidate = group(&caps, 1).trim();
        Some(Self::split_or_whole(&self.re_split_hash_episode, candidate))
    }

    fn group_tagged(&self, file_name: &str) -> Option<Extraction> {
        let year = self.re_year.find(file_name).map(|m| m.as_str());

        let caps = self.re_group_tagged.captures(file_name)?;
        let candidate = group(&caps, 1).trim();

        let mut extraction = if let Some(caps) = self.re_split_episode.captures(candidate) {
            Extraction::new(group(&caps, 1), group(&caps, 2))
        } else if let Some(caps) = self.re_trailing_token.captures(candidate) {
            Extraction::new(group(&caps, 1), group(&caps, 2))
        } else {
            Extraction::title_only(candidate)
        };

        if let Some(year) = year {
            if !extraction.title.contains(year) {
                extraction.title = format!("{} {year}", extraction.title)
                    .trim()
                    .to_string();
            }
        }

        Some(extraction)
    }

    fn dashed(&self, file_name: &str) -> Option<Extraction> {
        let caps = self.re_dashed.captures(file_name)?;
        let candidate = group(&caps, 1).trim();
        Some(Self::split_or_whole(&self.re_split_episode, candidate))
    }

    fn group_bracket_resolution(&self, file_name: &str) -> Option<Extraction> {
        let caps = self.re_group_bracket_resolution.captures(file_name)?;
        let candidate = group(&caps, 1).trim();
        Some(Self::split_or_whole(&self.re_split_loose_episode, candidate))
    }

    fn group_bare(&self, file_name: &str) -> Option<Extraction> {
        let caps = self.re_group_bare.captures(file_name)?;
        let candidate = group(&caps, 1).trim();

        // Anything from the first bracket on is tag noise.
        let title = match candidate.find('[') {
            Some(0) => return Some(Extraction::title_only(candidate)),
            Some(pos) => candidate[..pos].trim(),
            None => candidate,
        };
        if title.is_empty() {
            return Some(Extraction::title_only(candidate));
        }

        let Some(caps) = self.re_trailing_number.captures(title) else {
            return Some(Extraction::title_only(title));
        };
        let episode = group(&caps, 2);
        let title = group(&caps, 1).trim();
        let title = title.strip_suffix('-').unwrap_or(title);

        Some(Extraction::new(title, episode))
    }

    fn triple_dash(&self, file_name: &str) -> Option<Extraction> {
        let caps = self.re_triple_dash.captures(file_name)?;
        Some(Extraction::new(group(&caps, 1), group(&caps, 2)))
    }

    fn tag_underscore(&self, file_name: &str) -> Option<Extraction> {
        let caps = self.re_tag_underscore.captures(file_name)?;
        let candidate = group(&caps, 1).replace('_', " ");
        Some(Self::split_or_whole(
            &self.re_split_spaceless_episode,
            candidate.trim(),
        ))
    }

    fn numbered_prefix(&self, file_name: &str) -> Option<Extraction> {
        let caps = self.re_numbered_prefix.captures(file_name)?;
        Some(Extraction::new(group(&caps, 2), group(&caps, 1)))
    }

    fn anchor_1080p(&self, file_name: &str) -> Option<Extraction> {
        let caps = self.re_anchor_1080p.captures(file_name)?;
        Some(Extraction::title_only(group(&caps, 1)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractors() -> Extractors {
        Extractors::new().unwrap()
    }

    fn extract(convention: Convention, name: &str) -> (String, String) {
        let e = extractors().extract(convention, name);
        (e.title, e.episode)
    }

    fn pair(title: &str, episode: &str) -> (String, String) {
        (title.to_string(), episode.to_string())
    }

    #[test]
    fn dashed_description_takes_first_segment() {
        assert_eq!(
            extract(
                Convention::DashedDescription,
                ".Hack Sign - 01 - Role Play [Ahq](189Ff5e0)[Anidb]-1.mkv"
            ),
            pair(".Hack Sign", "01")
        );
    }

    #[test]
    fn group_resolution_splits_on_last_dash() {
        assert_eq!(
            extract(
                Convention::GroupResolution,
                "[SubsPlease] 16bit Sensation - Another Layer - 01 (1080p) [C13E9494].mkv"
            ),
            pair("16bit Sensation - Another Layer", "01")
        );
        assert_eq!(
            extract(
                Convention::GroupResolution,
                "[Subsplease] Arifureta Shokugyou De Sekai Saikyou S2 - Ova P1 (1080P) [Ac47c50b].mkv"
            ),
            pair("Arifureta Shokugyou De Sekai Saikyou S2", "Ova P1")
        );
        assert_eq!(
            extract(
                Convention::GroupResolution,
                "[SubsPlease] Burn the Witch - #0.8 (1080p) [6CE13449].mkv"
            ),
            pair("Burn the Witch", "#0.8")
        );
    }

    #[test]
    fn group_resolution_without_dash_keeps_whole_title() {
        assert_eq!(
            extract(
                Convention::GroupResolution,
                "[SubsPlease] Jujutsu Kaisen (1080p) [A1B2C3D4].mkv"
            ),
            pair("Jujutsu Kaisen", "")
        );
    }

    #[test]
    fn group_tagged_primary_and_trailing_token_split() {
        assert_eq!(
            extract(
                Convention::GroupTagged,
                "[Doki] A Channel +Smile - 01 (1920X1080 Blu-Ray H264) [98223321]-1.mkv"
            ),
            pair("A Channel +Smile", "01")
        );
        assert_eq!(
            extract(
                Convention::GroupTagged,
                "[Doki] Tamako Market 01 (1920X1080 H264) [ABCD1234].mkv"
            ),
            pair("Tamako Market", "01")
        );
    }

    #[test]
    fn group_tagged_appends_year() {
        assert_eq!(
            extract(
                Convention::GroupTagged,
                "[Doki] Tamako Love Story - 01 (2014) (1920X1080 H264).mkv"
            ),
            pair("Tamako Love Story (2014)", "01")
        );
    }

    #[test]
    fn group_tagged_trailing_symbol_falls_back_to_candidate() {
        assert_eq!(
            extract(Convention::GroupTagged, "[Doki] K-On!! (BD 1080p).mkv"),
            pair("K-On!!", "")
        );
    }

    #[test]
    fn dashed_with_and_without_episode() {
        assert_eq!(
            extract(
                Convention::Dashed,
                "The Girl In Twilight - 01 - [Horriblesubs](1920X1080 H264)[9334C2b8]-1.mkv"
            ),
            pair("The Girl In Twilight", "01")
        );
        assert_eq!(
            extract(
                Convention::Dashed,
                "Akira  - [Thora](1888X1016 Blu-Ray H264)[B8fdce8a]-1.mkv"
            ),
            pair("Akira", "")
        );
    }

    #[test]
    fn group_bracket_resolution_with_suffix() {
        assert_eq!(
            extract(
                Convention::GroupBracketResolution,
                "[Horriblesubs] Arifureta Shokugyou De Sekai Saikyou - 02 [1080P]-1.mkv"
            ),
            pair("Arifureta Shokugyou De Sekai Saikyou", "02")
        );
    }

    #[test]
    fn group_bracket_resolution_without_dash_keeps_whole_title() {
        assert_eq!(
            extract(
                Convention::GroupBracketResolution,
                "[HorribleSubs] No Dash Title [1080p].mkv"
            ),
            pair("No Dash Title", "")
        );
    }

    #[test]
    fn group_bare_variants() {
        assert_eq!(
            extract(Convention::GroupBare, "[Nep Blanc] Clockwork Planet 01.mkv"),
            pair("Clockwork Planet", "01")
        );
        assert_eq!(
            extract(Convention::GroupBare, "[Nep Blanc] Clockwork Planet - 05.5.mkv"),
            pair("Clockwork Planet", "05.5")
        );
        assert_eq!(
            extract(Convention::GroupBare, "[Nep Blanc] Clockwork Planet.mkv"),
            pair("Clockwork Planet", "")
        );
        assert_eq!(
            extract(Convention::GroupBare, "[Nep Blanc] Clockwork Planet 12 [BD].mkv"),
            pair("Clockwork Planet", "12")
        );
    }

    #[test]
    fn group_bare_leading_bracket_falls_back() {
        assert_eq!(
            extract(Convention::GroupBare, "[Nep Blanc] [Extras] Opening.mkv"),
            pair("[Extras] Opening", "")
        );
    }

    #[test]
    fn group_bare_number_only_has_no_title() {
        let e = extractors().extract(Convention::GroupBare, "[Nep Blanc] 86.mkv");
        assert!(e.title.is_empty());
    }

    #[test]
    fn triple_dash_takes_first_two_segments() {
        assert_eq!(
            extract(
                Convention::TripleDash,
                "Telepathy Shoujo Ran - 26 - [M.3.3.W](1280X720 H264)[A086cdb2]-26.mkv"
            ),
            pair("Telepathy Shoujo Ran", "26")
        );
    }

    #[test]
    fn tag_underscore_converts_underscores() {
        assert_eq!(
            extract(
                Convention::TagUnderscore,
                "(Hi10)_Rurouni_Kenshin_-_64_(480p)_(DragonFox).mkv"
            ),
            pair("Rurouni Kenshin", "64")
        );
        assert_eq!(
            extract(Convention::TagUnderscore, "(Hi10)_Rurouni_Kenshin_(480p).mkv"),
            pair("Rurouni Kenshin", "")
        );
    }

    #[test]
    fn numbered_prefix_reads_leading_episode() {
        assert_eq!(
            extract(
                Convention::NumberedPrefix,
                "04. Banner Of The Stars Ii (Seikai No Senki Ii) [Dvd 480P Hi10p Aac Ac3 Dual-Audio][Kuchikirukia]-4.mkv"
            ),
            pair("Banner Of The Stars Ii (Seikai No Senki Ii)", "04")
        );
    }

    #[test]
    fn anchor_1080p_has_no_episode() {
        assert_eq!(
            extract(
                Convention::Anchor1080p,
                "Evangelion.3.0+1.01.Thrice.Upon.A.Time.2021.1080P.Amzn.Web-Dl.Dd+.5.1.H.264-Rmb-1.mkv"
            ),
            pair("Evangelion.3.0+1.01.Thrice.Upon.A.Time.20", "")
        );
    }

    #[test]
    fn mismatched_name_yields_empty_extraction() {
        let e = extractors();
        for convention in Convention::ALL {
            assert_eq!(
                e.extract(convention, "plain.txt"),
                Extraction::default(),
                "convention {convention}"
            );
        }
    }
}
