//! Custom tags example: compile the same document with two tag sets.
//!
//! Run with: `cargo run --example custom_tags`

use marker_core::HeaderLevel;
use marker_parser::Parser;
use marker_render::{Compiler, Render};

/// Compact tag set: short emphasis tags and heading anchors.
struct CompactTags;

impl Render for CompactTags {
    fn bold(&self, text: &str) -> String {
        format!("<b>{text}</b>")
    }

    fn italic(&self, text: &str) -> String {
        format!("<i>{text}</i>")
    }

    fn header(&self, level: HeaderLevel, text: &str) -> Vec<String> {
        let rank = level.rank();
        // Derive an anchor id from the heading text
        let id: String = text
            .to_lowercase()
            .chars()
            .map(|c| if c.is_alphanumeric() { c } else { '-' })
            .collect();
        vec![format!(r#"<h{rank} id="{id}">{text}</h{rank}>"#)]
    }
}

fn main() {
    let markdown = r#"# Custom Tags

This example compiles the **same** blocks with *two* tag sets.

- default HTML tags
- a compact override
"#;

    // Parse once, compile twice
    let blocks = Parser::new().parse_document(markdown);

    println!("--- default tags ---");
    println!("{}", Compiler::new().compile(&blocks));
    println!();
    println!("--- compact tags ---");
    println!("{}", Compiler::with_renderer(CompactTags).compile(&blocks));
}
