//! The renderer seam and its HTML defaults.

use marker_core::{HeaderLevel, Inline, Line, LineElement};

/// Per-variant rendering hooks.
///
/// Every block and inline variant has one method, and every method has
/// a default body emitting the dialect's HTML. Implementations
/// override exactly the variants they want restyled and inherit the
/// rest; the block walk lives in [`crate::Compiler`] and is not
/// overridable.
///
/// Block methods return the output lines their block contributes;
/// inline methods return the markup spliced into the surrounding line.
/// Payload text is emitted as-is: the dialect has no escaping rules.
pub trait Render {
    /// `**text**`
    fn bold(&self, text: &str) -> String {
        format!("<strong>{text}</strong>")
    }

    /// `*text*`
    fn italic(&self, text: &str) -> String {
        format!("<em>{text}</em>")
    }

    /// `[name](url "title")`. No title attribute when `title` is
    /// `None`.
    fn link(&self, name: &str, url: &str, title: Option<&str>) -> String {
        match title {
            Some(title) => format!(r#"<a href="{url}" title="{title}">{name}</a>"#),
            None => format!(r#"<a href="{url}">{name}</a>"#),
        }
    }

    /// `![name](url "title")`, with the name as alternate text.
    fn image(&self, name: &str, url: &str, title: Option<&str>) -> String {
        match title {
            Some(title) => format!(r#"<img src="{url}" alt="{name}" title="{title}">"#),
            None => format!(r#"<img src="{url}" alt="{name}">"#),
        }
    }

    /// One scanned line: literal fragments unchanged, inline nodes
    /// dispatched to their hooks, concatenated in source order.
    fn line(&self, line: &Line) -> String {
        let mut out = String::new();
        for element in &line.elements {
            match element {
                LineElement::Text(text) => out.push_str(text),
                LineElement::Inline(Inline::Bold { text }) => out.push_str(&self.bold(text)),
                LineElement::Inline(Inline::Italic { text }) => out.push_str(&self.italic(text)),
                LineElement::Inline(Inline::Link { name, url, title }) => {
                    out.push_str(&self.link(name, url, title.as_deref()));
                }
                LineElement::Inline(Inline::Image { name, url, title }) => {
                    out.push_str(&self.image(name, url, title.as_deref()));
                }
            }
        }
        out
    }

    /// `<hN>text</hN>` on one line, N being the level's rank.
    fn header(&self, level: HeaderLevel, text: &str) -> Vec<String> {
        let rank = level.rank();
        vec![format!("<h{rank}>{text}</h{rank}>")]
    }

    fn thematic_break(&self) -> Vec<String> {
        vec!["<hr />".to_string()]
    }

    /// One empty output line, preserving vertical spacing.
    fn blank_line(&self) -> Vec<String> {
        vec![String::new()]
    }

    fn paragraph(&self, lines: &[Line]) -> Vec<String> {
        let mut out = vec!["<p>".to_string()];
        out.extend(lines.iter().map(|line| self.line(line)));
        out.push("</p>".to_string());
        out
    }

    fn blockquote(&self, lines: &[Line]) -> Vec<String> {
        let mut out = vec!["<blockquote>".to_string()];
        out.extend(lines.iter().map(|line| self.line(line)));
        out.push("</blockquote>".to_string());
        out
    }

    /// Verbatim lines between the tags. The closing fence produced no
    /// line, so none is emitted for it.
    fn code(&self, lines: &[String]) -> Vec<String> {
        let mut out = vec!["<code>".to_string()];
        out.extend(lines.iter().cloned());
        out.push("</code>".to_string());
        out
    }

    fn bullet_list(&self, lines: &[Line]) -> Vec<String> {
        self.list_items("ul", lines)
    }

    fn number_list(&self, lines: &[Line]) -> Vec<String> {
        self.list_items("ol", lines)
    }

    /// Shared `<li>` walk for both list kinds.
    fn list_items(&self, tag: &str, lines: &[Line]) -> Vec<String> {
        let mut out = vec![format!("<{tag}>")];
        out.extend(
            lines
                .iter()
                .map(|line| format!("<li>{}</li>", self.line(line))),
        );
        out.push(format!("</{tag}>"));
        out
    }

    /// Reserved block kind; emits nothing.
    fn link_reference(&self) -> Vec<String> {
        Vec::new()
    }
}

/// The default HTML tag set.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer;

impl Render for HtmlRenderer {}

#[cfg(test)]
mod tests {
    use super::*;
    use marker_core::LineElement;

    fn line(elements: Vec<LineElement>) -> Line {
        Line::new(elements)
    }

    #[test]
    fn inline_defaults() {
        let html = HtmlRenderer;
        assert_eq!(html.bold("x"), "<strong>x</strong>");
        assert_eq!(html.italic("x"), "<em>x</em>");
    }

    #[test]
    fn link_with_and_without_title() {
        let html = HtmlRenderer;
        assert_eq!(
            html.link("name", "url", None),
            r#"<a href="url">name</a>"#
        );
        assert_eq!(
            html.link("name", "url", Some("hint")),
            r#"<a href="url" title="hint">name</a>"#
        );
    }

    #[test]
    fn image_with_and_without_title() {
        let html = HtmlRenderer;
        assert_eq!(
            html.image("alt", "pic.png", None),
            r#"<img src="pic.png" alt="alt">"#
        );
        assert_eq!(
            html.image("alt", "pic.png", Some("hint")),
            r#"<img src="pic.png" alt="alt" title="hint">"#
        );
    }

    #[test]
    fn line_concatenates_fragments_in_order() {
        let html = HtmlRenderer;
        let rendered = html.line(&line(vec![
            LineElement::text("go "),
            LineElement::Inline(Inline::Bold {
                text: "fast".to_string(),
            }),
            LineElement::text(" now"),
        ]));
        assert_eq!(rendered, "go <strong>fast</strong> now");
    }

    #[test]
    fn header_levels_map_to_tags() {
        let html = HtmlRenderer;
        assert_eq!(html.header(HeaderLevel::First, "t"), ["<h1>t</h1>"]);
        assert_eq!(html.header(HeaderLevel::Sixth, "t"), ["<h6>t</h6>"]);
    }

    #[test]
    fn code_keeps_lines_verbatim() {
        let html = HtmlRenderer;
        let lines = vec!["let x = 1;".to_string(), String::new()];
        assert_eq!(
            html.code(&lines),
            ["<code>", "let x = 1;", "", "</code>"]
        );
    }

    #[test]
    fn lists_wrap_each_line_in_li() {
        let html = HtmlRenderer;
        let items = vec![line(vec![LineElement::text("a")])];
        assert_eq!(html.bullet_list(&items), ["<ul>", "<li>a</li>", "</ul>"]);
        assert_eq!(html.number_list(&items), ["<ol>", "<li>a</li>", "</ol>"]);
    }

    #[test]
    fn link_reference_is_silent() {
        assert!(HtmlRenderer.link_reference().is_empty());
    }

    #[test]
    fn overriding_an_inline_hook_reaches_line_rendering() {
        struct Loud;

        impl Render for Loud {
            fn bold(&self, text: &str) -> String {
                format!("<b>{}</b>", text.to_uppercase())
            }
        }

        let rendered = Loud.line(&line(vec![
            LineElement::text("so "),
            LineElement::Inline(Inline::Bold {
                text: "loud".to_string(),
            }),
        ]));
        assert_eq!(rendered, "so <b>LOUD</b>");
    }
}
