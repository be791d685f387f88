//! Marker
//!
//! A Markdown to HTML compiler for a small, predictable dialect.
//!
//! Input is split into lazy lines, each line is classified into the
//! flat block sequence (inline markup resolved as blocks grow), and
//! the blocks are compiled into HTML lines joined with `\n`. Nothing
//! in the pipeline fails: a line that matches no rule is paragraph
//! text, so every input produces a document.
//!
//! # Example
//!
//! ```
//! assert_eq!(marker::render("# Hello world"), "<h1>Hello world</h1>");
//! ```
//!
//! The pieces behind [`render`] are public: [`Parser`] for the block
//! sequence, [`Compiler`] and the [`Render`] trait for custom output
//! tags, [`Config`] for the TOML feature file the `mkr` binary reads.

pub use marker_config::{Config, FeaturesConfig};
pub use marker_core::{
    Block, HeaderLevel, Inline, Line, LineElement, MarkerError, ParseState, Result,
};
pub use marker_parser::{rules, InlineScanner, Parser, ScanOptions};
pub use marker_render::{Compiler, HtmlRenderer, Render};

/// Compile a document to HTML with every inline feature enabled.
pub fn render(text: &str) -> String {
    render_with_options(text, ScanOptions::default())
}

/// Compile a document to HTML with explicit inline options.
///
/// A disabled construct is left in the output as the literal source
/// text.
///
/// # Example
///
/// ```
/// use marker::ScanOptions;
///
/// let options = ScanOptions { links: false, images: true };
/// let html = marker::render_with_options("see [docs](here)", options);
/// assert_eq!(html, "<p>\nsee [docs](here)\n</p>");
/// ```
pub fn render_with_options(text: &str, options: ScanOptions) -> String {
    let blocks = Parser::with_options(options).parse_document(text);
    Compiler::new().compile(&blocks)
}
