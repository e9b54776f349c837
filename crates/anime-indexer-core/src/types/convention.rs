use std::fmt;

use serde::{Deserialize, Serialize};

/// A release-naming convention the engine knows how to interpret.
///
/// Variants are declared in cascade priority order, most specific first.
/// The order is part of the contract: several recognizers overlap, and
/// moving a looser one ahead of a stricter one silently reclassifies files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Convention {
    /// `Title - NN - Description.ext`
    DashedDescription,
    /// `[Group] Title - NN (1080p) ...ext`
    GroupResolution,
    /// `[Group] Title - NN (tags) ...ext`, with release-year detection.
    GroupTagged,
    /// `Title - ... .ext` without a group prefix.
    Dashed,
    /// `[Group] Title - NN [1080p][-N].ext`
    GroupBracketResolution,
    /// `[Group] Title NN.ext` with no quality anchor.
    GroupBare,
    /// `A - B - C.ext`
    TripleDash,
    /// `(Tag)_Title_-_NN_...`
    TagUnderscore,
    /// `NN. Title [tags]...`
    NumberedPrefix,
    /// Dot-separated scene name anchored on `1080p`.
    Anchor1080p,
}

impl Convention {
    /// Every convention, in cascade order.
    pub const ALL: [Convention; 10] = [
        Self::DashedDescription,
        Self::GroupResolution,
        Self::GroupTagged,
        Self::Dashed,
        Self::GroupBracketResolution,
        Self::GroupBare,
        Self::TripleDash,
        Self::TagUnderscore,
        Self::NumberedPrefix,
        Self::Anchor1080p,
    ];

    /// Numeric identifier (1-10) written to the index.
    #[must_use]
    pub fn id(self) -> u8 {
        match self {
            Self::DashedDescription => 1,
            Self::GroupResolution => 2,
            Self::GroupTagged => 3,
            Self::Dashed => 4,
            Self::GroupBracketResolution => 5,
            Self::GroupBare => 6,
            Self::TripleDash => 7,
            Self::TagUnderscore => 8,
            Self::NumberedPrefix => 9,
            Self::Anchor1080p => 10,
        }
    }

    /// Looks up a convention by its numeric identifier.
    #[must_use]
    pub fn from_id(id: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.id() == id)
    }

    /// A real-world filename this convention was written for.
    #[must_use]
    pub fn example(self) -> &'static str {
        match self {
            Self::DashedDescription => ".Hack Sign - 01 - Role Play [Ahq](189Ff5e0)[Anidb]-1.mkv",
            Self::GroupResolution => {
                "[SubsPlease] 16bit Sensation - Another Layer - 01 (1080p) [C13E9494].mkv"
            }
            Self::GroupTagged => {
                "[Doki] A Channel +Smile - 01 (1920X1080 Blu-Ray H264) [98223321]-1.mkv"
            }
            Self::Dashed => {
                "The Girl In Twilight - 01 - [Horriblesubs](1920X1080 H264)[9334C2b8]-1.mkv"
            }
            Self::GroupBracketResolution => {
                "[Horriblesubs] Arifureta Shokugyou De Sekai Saikyou - 01 [1080P].mkv"
            }
            Self::GroupBare => "[Nep Blanc] Clockwork Planet 01.mkv",
            Self::TripleDash => {
                "Telepathy Shoujo Ran - 26 - [M.3.3.W](1280X720 H264)[A086cdb2]-26.mkv"
            }
            Self::TagUnderscore => "(Hi10)_Rurouni_Kenshin_-_64_(480p)_(DragonFox).mkv",
            Self::NumberedPrefix => {
                "04. Banner Of The Stars Ii (Seikai No Senki Ii) [Dvd 480P Hi10p Aac Ac3 Dual-Audio][Kuchikirukia]-4.mkv"
            }
            Self::Anchor1080p => {
                "Evangelion.3.0+1.01.Thrice.Upon.A.Time.2021.1080P.Amzn.Web-Dl.Dd+.5.1.H.264-Rmb-1.mkv"
            }
        }
    }
}

impl fmt::Display for Convention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}
