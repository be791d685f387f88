//! Inline markup scanning.
//!
//! One combined pattern finds every inline construct in a line; each
//! match is then classified against the anchored per-kind rules in a
//! fixed priority order: link, image, italic, bold.

use crate::rules;
use marker_core::{Inline, Line, LineElement};

/// Which inline kinds the scanner resolves.
///
/// Disabled kinds still participate in matching (the combined pattern
/// is fixed) but their matched text stays literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanOptions {
    /// Resolve `[name](url)` links.
    pub links: bool,
    /// Resolve `![name](url)` images.
    pub images: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            links: true,
            images: true,
        }
    }
}

/// Resolves the inline markup of one line at a time.
#[derive(Debug, Clone, Copy, Default)]
pub struct InlineScanner {
    options: ScanOptions,
}

impl InlineScanner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ScanOptions) -> Self {
        Self { options }
    }

    /// Scan one line into its element sequence.
    ///
    /// Fragments reproduce source order: the literal text before each
    /// match is pushed first (empty when the match starts the line or
    /// abuts the previous match), then the classified node. Text after
    /// the last match is kept when non-empty. A line without any match
    /// becomes a single literal fragment, so every `Line` has at least
    /// one element.
    pub fn scan(&self, line: &str) -> Line {
        let mut elements = Vec::new();
        let mut last_end = 0;

        for m in rules::INLINE.find_iter(line) {
            // A backslash right before the match suppresses it; the
            // region flows into the next literal fragment instead.
            if m.start() > 0 && line.as_bytes()[m.start() - 1] == b'\\' {
                continue;
            }
            let Some(element) = self.classify(m.as_str()) else {
                continue;
            };
            elements.push(LineElement::Text(line[last_end..m.start()].to_string()));
            elements.push(element);
            last_end = m.end();
        }

        if elements.is_empty() {
            return Line::new(vec![LineElement::Text(line.to_string())]);
        }
        if last_end < line.len() {
            elements.push(LineElement::Text(line[last_end..].to_string()));
        }
        Line::new(elements)
    }

    /// Classify the text of a combined match. Returns `None` for a
    /// kind that is switched off, leaving the region literal.
    fn classify(&self, matched: &str) -> Option<LineElement> {
        if let Some(caps) = rules::LINK_EXACT.captures(matched) {
            if !self.options.links {
                return None;
            }
            return Some(LineElement::Inline(Inline::Link {
                name: caps[1].to_string(),
                url: caps[2].to_string(),
                title: title_of(&caps),
            }));
        }
        if let Some(caps) = rules::IMAGE_EXACT.captures(matched) {
            if !self.options.images {
                return None;
            }
            return Some(LineElement::Inline(Inline::Image {
                name: caps[1].to_string(),
                url: caps[2].to_string(),
                title: title_of(&caps),
            }));
        }
        if let Some(caps) = rules::ITALIC_EXACT.captures(matched) {
            return Some(LineElement::Inline(Inline::Italic {
                text: caps[1].to_string(),
            }));
        }
        if let Some(caps) = rules::BOLD_EXACT.captures(matched) {
            return Some(LineElement::Inline(Inline::Bold {
                text: caps[1].to_string(),
            }));
        }
        None
    }
}

/// Quoted title of a link or image match, without its quotes. Group 3
/// is the double-quoted form, group 4 the single-quoted one.
fn title_of(caps: &regex::Captures<'_>) -> Option<String> {
    caps.get(3)
        .or_else(|| caps.get(4))
        .map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(line: &str) -> Vec<LineElement> {
        InlineScanner::new().scan(line).elements
    }

    fn text(s: &str) -> LineElement {
        LineElement::text(s)
    }

    #[test]
    fn plain_line_is_one_fragment() {
        assert_eq!(scan("nothing special here"), [text("nothing special here")]);
    }

    #[test]
    fn empty_line_is_one_empty_fragment() {
        assert_eq!(scan(""), [text("")]);
    }

    #[test]
    fn fragments_keep_source_order() {
        let got = scan("hel[link](some_address.com)o **reload** *system*");
        assert_eq!(
            got,
            [
                text("hel"),
                LineElement::Inline(Inline::Link {
                    name: "link".to_string(),
                    url: "some_address.com".to_string(),
                    title: None,
                }),
                text("o "),
                LineElement::Inline(Inline::Bold {
                    text: "reload".to_string(),
                }),
                text(" "),
                LineElement::Inline(Inline::Italic {
                    text: "system".to_string(),
                }),
            ]
        );
    }

    #[test]
    fn match_at_line_start_gets_an_empty_leading_fragment() {
        let got = scan("**lead** rest");
        assert_eq!(
            got,
            [
                text(""),
                LineElement::Inline(Inline::Bold {
                    text: "lead".to_string(),
                }),
                text(" rest"),
            ]
        );
    }

    #[test]
    fn trailing_text_after_the_last_match_is_kept() {
        let got = scan("a *b* c");
        assert_eq!(
            got,
            [
                text("a "),
                LineElement::Inline(Inline::Italic {
                    text: "b".to_string(),
                }),
                text(" c"),
            ]
        );
    }

    #[test]
    fn no_empty_trailing_fragment() {
        let got = scan("done *now*");
        assert_eq!(got.len(), 2);
    }

    #[test]
    fn image_beats_link_on_the_bang() {
        let got = scan("![alt](img.png)");
        assert_eq!(
            got,
            [
                text(""),
                LineElement::Inline(Inline::Image {
                    name: "alt".to_string(),
                    url: "img.png".to_string(),
                    title: None,
                }),
            ]
        );
    }

    #[test]
    fn titles_are_stored_without_quotes() {
        let got = scan(r#"[x](url "a title")"#);
        assert_eq!(
            got[1],
            LineElement::Inline(Inline::Link {
                name: "x".to_string(),
                url: "url".to_string(),
                title: Some("a title".to_string()),
            })
        );

        let got = scan("![y](pic 'small')");
        assert_eq!(
            got[1],
            LineElement::Inline(Inline::Image {
                name: "y".to_string(),
                url: "pic".to_string(),
                title: Some("small".to_string()),
            })
        );
    }

    #[test]
    fn backslash_suppresses_a_match() {
        assert_eq!(scan(r"\[not](a.link)"), [text(r"\[not](a.link)")]);
        assert_eq!(scan(r"\![not](a.pic)"), [text(r"\![not](a.pic)")]);
    }

    #[test]
    fn suppressed_region_joins_the_next_fragment() {
        let got = scan(r"\[skip](x) then *real*");
        assert_eq!(
            got,
            [
                text(r"\[skip](x) then "),
                LineElement::Inline(Inline::Italic {
                    text: "real".to_string(),
                }),
            ]
        );
    }

    #[test]
    fn unclosed_markup_stays_literal() {
        assert_eq!(scan("**broken"), [text("**broken")]);
        assert_eq!(scan("[no closing paren](oops"), [text("[no closing paren](oops")]);
    }

    #[test]
    fn multiword_emphasis_stays_literal() {
        assert_eq!(scan("*two words*"), [text("*two words*")]);
    }

    #[test]
    fn disabled_links_stay_literal() {
        let scanner = InlineScanner::with_options(ScanOptions {
            links: false,
            images: true,
        });
        let got = scanner.scan("go [here](now)").elements;
        assert_eq!(got, [text("go [here](now)")]);
    }

    #[test]
    fn disabled_images_leave_other_kinds_alone() {
        let scanner = InlineScanner::with_options(ScanOptions {
            links: true,
            images: false,
        });
        let got = scanner.scan("![pic](p.png) and **bold**").elements;
        assert_eq!(
            got,
            [
                text("![pic](p.png) and "),
                LineElement::Inline(Inline::Bold {
                    text: "bold".to_string(),
                }),
            ]
        );
    }
}
