//! Inline nodes and the scanned line they live in.

use serde::{Deserialize, Serialize};

/// One resolved inline construct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Inline {
    /// `**word**`
    Bold { text: String },
    /// `*word*`
    Italic { text: String },
    /// `[name](url "title")`. `title` is `None` when the source gives
    /// none, never an empty string, and carries no quote characters.
    Link {
        name: String,
        url: String,
        title: Option<String>,
    },
    /// `![name](url "title")`, same title rules as `Link`.
    Image {
        name: String,
        url: String,
        title: Option<String>,
    },
}

/// A fragment of a scanned line: literal text or an inline node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineElement {
    /// Literal text, emitted unchanged.
    Text(String),
    /// A resolved inline construct.
    Inline(Inline),
}

impl LineElement {
    /// Literal fragment from anything stringly.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }
}

/// One source line after inline scanning.
///
/// Element order reproduces the left-to-right position of matches in
/// the source; untouched text between and around matches stays as
/// literal fragments. A `Line` always holds at least one element, so
/// the compiler can emit one output line per `Line` unconditionally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    /// Fragments in source order.
    pub elements: Vec<LineElement>,
}

impl Line {
    pub fn new(elements: Vec<LineElement>) -> Self {
        Self { elements }
    }
}

impl From<Vec<LineElement>> for Line {
    fn from(elements: Vec<LineElement>) -> Self {
        Self { elements }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_helper_builds_literal_fragments() {
        assert_eq!(
            LineElement::text("plain"),
            LineElement::Text("plain".to_string())
        );
    }

    #[test]
    fn line_from_elements() {
        let line: Line = vec![
            LineElement::text("see "),
            LineElement::Inline(Inline::Bold {
                text: "this".to_string(),
            }),
        ]
        .into();
        assert_eq!(line.elements.len(), 2);
    }

    #[test]
    fn absent_title_is_none_not_empty() {
        let link = Inline::Link {
            name: "n".to_string(),
            url: "u".to_string(),
            title: None,
        };
        let titled = Inline::Link {
            name: "n".to_string(),
            url: "u".to_string(),
            title: Some(String::new()),
        };
        assert_ne!(link, titled);
    }
}
