//! Marker Parser
//!
//! Line-at-a-time block parsing for the marker dialect.
//!
//! A [`Parser`] consumes a document line by line and grows a flat
//! block sequence. There is no block stack: the open block is always
//! the last element, and each rule decides whether the current line
//! continues it or starts a new one.
//!
//! Classification runs in fixed priority order, first match wins:
//!
//! 1. code fence toggle (checked even while locked; the only way out
//!    of verbatim mode)
//! 2. verbatim append while locked
//! 3. blank line
//! 4. thematic break
//! 5. ATX header
//! 6. blockquote
//! 7. numbered list item
//! 8. bullet list item
//! 9. paragraph fallback
//!
//! Blank lines, breaks and headers always close the open block; the
//! container rules continue it only on an exact kind match, so a kind
//! switch closes the old block and opens a new one.

pub mod lines;
pub mod rules;

mod inline;

pub use inline::{InlineScanner, ScanOptions};
pub use lines::{lines, Lines};

use marker_core::{Block, HeaderLevel, ParseState};

/// Line-at-a-time block parser.
///
/// # Example
///
/// ```
/// use marker_core::Block;
/// use marker_parser::Parser;
///
/// let mut parser = Parser::new();
/// let blocks = parser.parse_document("# Title\n\nBody text");
/// assert!(matches!(blocks[0], Block::Header { .. }));
/// assert!(matches!(blocks[1], Block::BlankLine));
/// assert!(matches!(blocks[2], Block::Paragraph { .. }));
/// ```
#[derive(Debug, Default)]
pub struct Parser {
    state: ParseState,
    scanner: InlineScanner,
    blocks: Vec<Block>,
}

impl Parser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parser whose inline scanner honors `options`.
    pub fn with_options(options: ScanOptions) -> Self {
        Self {
            scanner: InlineScanner::with_options(options),
            ..Self::default()
        }
    }

    /// Classify one line and fold it into the block sequence.
    pub fn parse_line(&mut self, line: &str) {
        // The fence toggle runs first even in verbatim mode; it is the
        // only exit from it.
        if self.try_fence(line) {
            return;
        }
        if self.state.is_locked() {
            self.push_code_line(line);
            return;
        }
        if self.try_blank(line) {
            return;
        }
        if self.try_thematic_break(line) {
            return;
        }
        if self.try_header(line) {
            return;
        }
        if self.try_blockquote(line) {
            return;
        }
        if self.try_number_item(line) {
            return;
        }
        if self.try_bullet_item(line) {
            return;
        }
        self.parse_paragraph(line);
    }

    /// Parse a whole document and return its blocks, leaving the
    /// parser reset for the next document.
    pub fn parse_document(&mut self, text: &str) -> Vec<Block> {
        for line in lines(text) {
            self.parse_line(line);
        }
        let blocks = std::mem::take(&mut self.blocks);
        self.state = ParseState::new();
        blocks
    }

    /// Blocks accumulated so far.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Drop accumulated blocks and state.
    pub fn reset(&mut self) {
        self.state = ParseState::new();
        self.blocks.clear();
    }

    fn try_fence(&mut self, line: &str) -> bool {
        if !rules::CODE_FENCE.is_match(line) {
            return false;
        }
        if self.state.is_locked() {
            // Closing fence; the line itself contributes nothing.
            self.state.unlock();
        } else {
            self.blocks.push(Block::Code { lines: Vec::new() });
            self.state.lock();
        }
        true
    }

    fn push_code_line(&mut self, line: &str) {
        if let Some(Block::Code { lines }) = self.blocks.last_mut() {
            lines.push(line.to_string());
        }
    }

    fn try_blank(&mut self, line: &str) -> bool {
        // Only a fully empty line is blank; whitespace-only lines fall
        // through to the paragraph rule.
        if !line.is_empty() {
            return false;
        }
        self.blocks.push(Block::BlankLine);
        self.state.close_block();
        true
    }

    fn try_thematic_break(&mut self, line: &str) -> bool {
        if !rules::THEMATIC_BREAK.is_match(line) {
            return false;
        }
        self.blocks.push(Block::ThematicBreak);
        self.state.close_block();
        true
    }

    fn try_header(&mut self, line: &str) -> bool {
        let Some(caps) = rules::ATX_HEADING.captures(line) else {
            return false;
        };
        let Some(level) = HeaderLevel::from_marker_len(caps["marker"].len()) else {
            return false;
        };
        // Header text stays raw; the dialect never scans it.
        self.blocks.push(Block::Header {
            level,
            text: caps["text"].to_string(),
        });
        self.state.close_block();
        true
    }

    fn try_blockquote(&mut self, line: &str) -> bool {
        let Some(caps) = rules::BLOCKQUOTE.captures(line) else {
            return false;
        };
        let scanned = self.scanner.scan(&caps["inner"]);
        if self.state.in_block {
            if let Some(Block::Blockquote { lines }) = self.blocks.last_mut() {
                lines.push(scanned);
                return true;
            }
        }
        self.blocks.push(Block::Blockquote {
            lines: vec![scanned],
        });
        self.state.open_block();
        true
    }

    fn try_number_item(&mut self, line: &str) -> bool {
        let Some(caps) = rules::NUMBER_ITEM.captures(line) else {
            return false;
        };
        let scanned = self.scanner.scan(&caps["text"]);
        if self.state.in_block {
            if let Some(Block::NumberList { lines }) = self.blocks.last_mut() {
                lines.push(scanned);
                return true;
            }
        }
        self.blocks.push(Block::NumberList {
            lines: vec![scanned],
        });
        self.state.open_block();
        true
    }

    fn try_bullet_item(&mut self, line: &str) -> bool {
        let Some(caps) = rules::BULLET_ITEM.captures(line) else {
            return false;
        };
        let scanned = self.scanner.scan(&caps["text"]);
        if self.state.in_block {
            if let Some(Block::BulletList { lines }) = self.blocks.last_mut() {
                lines.push(scanned);
                return true;
            }
        }
        self.blocks.push(Block::BulletList {
            lines: vec![scanned],
        });
        self.state.open_block();
        true
    }

    fn parse_paragraph(&mut self, line: &str) {
        let scanned = self.scanner.scan(line);
        if self.state.in_block {
            // Continuation merges into the last line of an open
            // paragraph only; any other open block closes instead.
            if let Some(Block::Paragraph { lines }) = self.blocks.last_mut() {
                if let Some(last) = lines.last_mut() {
                    last.elements.extend(scanned.elements);
                    return;
                }
            }
        }
        self.blocks.push(Block::Paragraph {
            lines: vec![scanned],
        });
        self.state.open_block();
    }
}
