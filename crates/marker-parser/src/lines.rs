//! Lazy line source.
//!
//! Splits input on line feeds with the dialect's tail semantics: a
//! final segment without a terminator is still a line, a terminating
//! `\n` adds no extra empty line, and empty input is one empty line.
//! Carriage returns are not treated specially.

/// Lazily split `text` into lines.
///
/// # Example
///
/// ```
/// use marker_parser::lines;
///
/// let collected: Vec<&str> = lines("a\nb\n").collect();
/// assert_eq!(collected, ["a", "b"]);
///
/// let collected: Vec<&str> = lines("").collect();
/// assert_eq!(collected, [""]);
/// ```
pub fn lines(text: &str) -> Lines<'_> {
    Lines { rest: Some(text) }
}

/// Iterator over the lines of a document.
///
/// Single pass and non-restartable; the parser consumes it once per
/// document.
#[derive(Debug, Clone)]
pub struct Lines<'a> {
    rest: Option<&'a str>,
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let rest = self.rest.take()?;
        match rest.find('\n') {
            Some(at) => {
                let tail = &rest[at + 1..];
                if !tail.is_empty() {
                    self.rest = Some(tail);
                }
                Some(&rest[..at])
            }
            None => Some(rest),
        }
    }
}
