//! Snapshot tests for marker output.
//!
//! These tests capture the compiled HTML inline next to the input.
//! Run with `cargo insta review` after an intentional output change.

use marker::{render, render_with_options, ScanOptions};

// =============================================================================
// Heading Snapshots
// =============================================================================

#[test]
fn test_snapshot_heading_all_levels() {
    let input = r#"# H1
## H2
### H3
#### H4
##### H5
###### H6"#;
    insta::assert_snapshot!(render(input), @r#"
    <h1>H1</h1>
    <h2>H2</h2>
    <h3>H3</h3>
    <h4>H4</h4>
    <h5>H5</h5>
    <h6>H6</h6>
    "#);
}

// =============================================================================
// Code Block Snapshots
// =============================================================================

#[test]
fn test_snapshot_code_block() {
    let input = "```\nfn main() {\n    let x = 1;\n}\n```";
    insta::assert_snapshot!(render(input), @r#"
    <code>
    fn main() {
        let x = 1;
    }
    </code>
    "#);
}

// =============================================================================
// Feature Toggle Snapshots
// =============================================================================

#[test]
fn test_snapshot_images_disabled() {
    let options = ScanOptions {
        links: true,
        images: false,
    };
    let output = render_with_options("![logo](logo.png) and [home](https://example.com)", options);
    insta::assert_snapshot!(output, @r#"
    <p>
    ![logo](logo.png) and <a href="https://example.com">home</a>
    </p>
    "#);
}

#[test]
fn test_snapshot_links_disabled() {
    let options = ScanOptions {
        links: false,
        images: true,
    };
    let output = render_with_options("see [docs](https://example.com) and ![icon](i.png)", options);
    insta::assert_snapshot!(output, @r#"
    <p>
    see [docs](https://example.com) and <img src="i.png" alt="icon">
    </p>
    "#);
}

// =============================================================================
// Complex Document Snapshots
// =============================================================================

#[test]
fn test_snapshot_composed_document() {
    let input = r#"# Welcome

This is **bold** and *plain* text with a [link](https://example.com "docs").

## Usage

```
mkr README.md
```

1. parse
2. compile

- fast
- small

> The tao of markup.

---
The end."#;

    insta::assert_snapshot!(render(input), @r#"
    <h1>Welcome</h1>

    <p>
    This is <strong>bold</strong> and <em>plain</em> text with a <a href="https://example.com" title="docs">link</a>.
    </p>

    <h2>Usage</h2>

    <code>
    mkr README.md
    </code>

    <ol>
    <li>parse</li>
    <li>compile</li>
    </ol>

    <ul>
    <li>fast</li>
    <li>small</li>
    </ul>

    <blockquote>
     The tao of markup.
    </blockquote>

    <hr />
    <p>
    The end.
    </p>
    "#);
}
