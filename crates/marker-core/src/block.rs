//! Block-level nodes of the document tree.
//!
//! The parser appends blocks to a flat sequence in source order; the
//! last element is the only block a continuation line may merge into.

use crate::inline::Line;
use serde::{Deserialize, Serialize};

/// Header depth, `First` (`#`) through `Sixth` (`######`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeaderLevel {
    First,
    Second,
    Third,
    Fourth,
    Fifth,
    Sixth,
}

impl HeaderLevel {
    /// Level for a marker of `count` hash characters, if in range.
    pub fn from_marker_len(count: usize) -> Option<Self> {
        match count {
            1 => Some(Self::First),
            2 => Some(Self::Second),
            3 => Some(Self::Third),
            4 => Some(Self::Fourth),
            5 => Some(Self::Fifth),
            6 => Some(Self::Sixth),
            _ => None,
        }
    }

    /// Numeric rank 1 through 6, as used in the `<hN>` tag pair.
    pub fn rank(self) -> u8 {
        match self {
            Self::First => 1,
            Self::Second => 2,
            Self::Third => 3,
            Self::Fourth => 4,
            Self::Fifth => 5,
            Self::Sixth => 6,
        }
    }
}

/// One classified block of the source document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Block {
    /// Free text; continuation lines merge into the last `Line`.
    Paragraph { lines: Vec<Line> },
    /// ATX header. The text is the raw remainder after the marker,
    /// untrimmed and never inline-scanned.
    Header { level: HeaderLevel, text: String },
    /// Horizontal rule (`***`, `___` or `---`).
    ThematicBreak,
    /// `-` / `+` / `*` list, one `Line` per item.
    BulletList { lines: Vec<Line> },
    /// `1.` / `1)` list, one `Line` per item.
    NumberList { lines: Vec<Line> },
    /// Fenced code. Lines are kept verbatim and never inline-scanned.
    Code { lines: Vec<String> },
    /// `>` quote, one `Line` per source line.
    Blockquote { lines: Vec<Line> },
    /// Reserved for reference-style link definitions. The parser never
    /// produces it; renderers must still handle it.
    LinkReference,
    /// A single empty source line. Consecutive blanks never merge.
    BlankLine,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_len_maps_to_levels() {
        assert_eq!(HeaderLevel::from_marker_len(1), Some(HeaderLevel::First));
        assert_eq!(HeaderLevel::from_marker_len(6), Some(HeaderLevel::Sixth));
        assert_eq!(HeaderLevel::from_marker_len(0), None);
        assert_eq!(HeaderLevel::from_marker_len(7), None);
    }

    #[test]
    fn rank_runs_one_through_six() {
        let levels = [
            HeaderLevel::First,
            HeaderLevel::Second,
            HeaderLevel::Third,
            HeaderLevel::Fourth,
            HeaderLevel::Fifth,
            HeaderLevel::Sixth,
        ];
        for (i, level) in levels.iter().enumerate() {
            assert_eq!(level.rank() as usize, i + 1);
        }
    }

    #[test]
    fn rank_round_trips_through_marker_len() {
        for count in 1..=6 {
            let level = HeaderLevel::from_marker_len(count).unwrap();
            assert_eq!(level.rank() as usize, count);
        }
    }
}
