//! Recognition rules of the dialect.
//!
//! Block rules follow the CommonMark envelope of up to three leading
//! whitespace characters. Inline rules are plain pattern strings so
//! they can be combined into one alternation and re-anchored for
//! match classification; see [`crate::InlineScanner`].

use regex::Regex;
use std::sync::LazyLock;

/// ATX heading: 1-6 `#`, a required whitespace separator, remainder
/// captured untrimmed.
/// <https://spec.commonmark.org/0.30/#atx-headings>
pub static ATX_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s{0,3}(?P<marker>#{1,6})\s+(?P<text>.*)$").unwrap());

/// Thematic break: exactly `***`, `___` or `---` alone on the line.
/// <https://spec.commonmark.org/0.30/#thematic-breaks>
pub static THEMATIC_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s{0,3}(\*\*\*|___|---)$").unwrap());

/// Code fence: ``` or `~~~`; an info string may follow and is
/// discarded. Toggles the parser's verbatim lock.
/// <https://spec.commonmark.org/0.30/#fenced-code-blocks>
pub static CODE_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s{0,3}(```|~~~)").unwrap());

/// Blockquote marker: `>` plus at least one character of content. The
/// capture keeps everything after the marker, leading space included.
/// <https://spec.commonmark.org/0.30/#block-quotes>
pub static BLOCKQUOTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s{0,3}>(?P<inner>.+)").unwrap());

/// Bullet list item: `-`, `+` or `*`, whitespace, item text.
/// <https://spec.commonmark.org/0.30/#list-items>
pub static BULLET_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s{0,3}(-|\+|\*)\s+(?P<text>.+)").unwrap());

/// Numbered list item: digits, `.` or `)`, whitespace, item text.
pub static NUMBER_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s{0,3}\d+(\.|\))\s+(?P<text>.+)").unwrap());

/// `**word**`, a single unspaced word.
pub const BOLD: &str = r"\*\*(\w+)\*\*";

/// `*word*`, a single unspaced word.
pub const ITALIC: &str = r"\*(\w+)\*";

/// `[name](url "title")`. The url never crosses whitespace, so an
/// optional double- or single-quoted title can follow it.
pub const LINK: &str = r#"\[([^\]]*)\]\(\s*([^)\s]*)\s*(?:"([^"]*)"|'([^']*)')?\s*\)"#;

/// `![name](url "title")`. The leading `!` belongs to the match, so a
/// leftmost scan never reads an image as a bracketed link.
pub const IMAGE: &str = r#"!\[([^\]]*)\]\(\s*([^)\s]*)\s*(?:"([^"]*)"|'([^']*)')?\s*\)"#;

/// Combined inline alternation, scanned left to right over each line.
/// Bold precedes italic so `**` is never consumed as a one-star span.
pub static INLINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("(?:{BOLD})|(?:{ITALIC})|(?:{LINK})|(?:{IMAGE})")).unwrap()
});

/// Anchored form of [`LINK`], for classifying a combined match.
pub static LINK_EXACT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!("^{LINK}$")).unwrap());

/// Anchored form of [`IMAGE`].
pub static IMAGE_EXACT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!("^{IMAGE}$")).unwrap());

/// Anchored form of [`ITALIC`].
pub static ITALIC_EXACT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!("^{ITALIC}$")).unwrap());

/// Anchored form of [`BOLD`].
pub static BOLD_EXACT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!("^{BOLD}$")).unwrap());
