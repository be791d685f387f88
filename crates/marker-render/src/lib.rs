//! Marker Render
//!
//! HTML compilation of parsed block sequences.
//!
//! [`Compiler`] walks blocks in order and delegates every variant to a
//! [`Render`] implementation; the emitted lines joined with `\n` form
//! the document. [`HtmlRenderer`] is the default tag set; custom
//! renderers override individual [`Render`] methods and keep the rest.

mod html;

pub use html::{HtmlRenderer, Render};

use marker_core::Block;

/// Compiles a block sequence into the final document string.
///
/// # Example
///
/// ```
/// use marker_core::{Block, HeaderLevel};
/// use marker_render::Compiler;
///
/// let blocks = [Block::Header {
///     level: HeaderLevel::First,
///     text: "Hi".to_string(),
/// }];
/// assert_eq!(Compiler::new().compile(&blocks), "<h1>Hi</h1>");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Compiler<R = HtmlRenderer> {
    renderer: R,
}

impl Compiler<HtmlRenderer> {
    /// Compiler with the default HTML tag set.
    pub fn new() -> Self {
        Self {
            renderer: HtmlRenderer,
        }
    }
}

impl<R: Render> Compiler<R> {
    /// Compiler with a custom tag set.
    pub fn with_renderer(renderer: R) -> Self {
        Self { renderer }
    }

    /// Compile blocks into the output document.
    ///
    /// Every variant is matched explicitly; adding a block kind is a
    /// compile error until it renders.
    pub fn compile(&self, blocks: &[Block]) -> String {
        let mut compiled: Vec<String> = Vec::new();
        for block in blocks {
            match block {
                Block::Paragraph { lines } => compiled.extend(self.renderer.paragraph(lines)),
                Block::Header { level, text } => {
                    compiled.extend(self.renderer.header(*level, text));
                }
                Block::ThematicBreak => compiled.extend(self.renderer.thematic_break()),
                Block::BulletList { lines } => compiled.extend(self.renderer.bullet_list(lines)),
                Block::NumberList { lines } => compiled.extend(self.renderer.number_list(lines)),
                Block::Code { lines } => compiled.extend(self.renderer.code(lines)),
                Block::Blockquote { lines } => compiled.extend(self.renderer.blockquote(lines)),
                Block::LinkReference => compiled.extend(self.renderer.link_reference()),
                Block::BlankLine => compiled.extend(self.renderer.blank_line()),
            }
        }
        compiled.join("\n")
    }
}
