use std::{iter::Enumerate, str::Split};

/// One logical line of the document.
///
/// Blank and comment-only lines never become a [`Line`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    /// Line number, starts from 1.
    pub number: usize,
    /// Count of the leading spaces.
    pub indent: usize,
    /// Content after the indent, inline comment and trailing white spaces removed.
    pub content: &'a str,
}

impl Line<'_> {
    /// Check the line is a sequence item, `-` alone or followed by white space.
    pub fn is_item(&self) -> bool {
        item_body(self.content).is_some()
    }
}

/// Return the text after the `-` marker if the content is a sequence item.
pub(crate) fn item_body(content: &str) -> Option<&str> {
    let rest = content.strip_prefix('-')?;
    if rest.is_empty() || rest.starts_with(|c: char| c.is_whitespace()) {
        Some(rest)
    } else {
        None
    }
}

/// The line filter, a lazy iterator of [`Line`].
///
/// This iterator is cheap to clone, and a clone restarts from the same place.
///
/// ```
/// use weak_yaml::parser::Lines;
/// let lines = Lines::new("# title\na: 1 # one\n\n  b: 2\n").collect::<Vec<_>>();
/// assert_eq!(2, lines.len());
/// assert_eq!((2, 0, "a: 1"), (lines[0].number, lines[0].indent, lines[0].content));
/// assert_eq!((4, 2, "b: 2"), (lines[1].number, lines[1].indent, lines[1].content));
/// ```
#[derive(Clone)]
pub struct Lines<'a> {
    inner: Enumerate<Split<'a, char>>,
}

impl<'a> Lines<'a> {
    /// Create a line filter over the document.
    pub fn new(doc: &'a str) -> Self {
        Self {
            inner: doc.split('\n').enumerate(),
        }
    }
}

impl<'a> Iterator for Lines<'a> {
    type Item = Line<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        for (i, raw) in self.inner.by_ref() {
            let raw = raw.strip_suffix('\r').unwrap_or(raw);
            let trimmed = raw.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            let indent = raw.len() - raw.trim_start_matches(' ').len();
            // Quote-unaware: a `#` in a quoted scalar starts a comment as well
            let content = raw[indent..].split('#').next().unwrap_or_default();
            return Some(Line {
                number: i + 1,
                indent,
                content: content.trim(),
            });
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comments_and_blanks_dropped() {
        let doc = "\n# head\n  \nname: app # inline\n\t\n   # indented comment\nversion: 1.0.0\r\n";
        let lines = Lines::new(doc).collect::<Vec<_>>();
        assert_eq!(
            lines,
            [
                Line { number: 4, indent: 0, content: "name: app" },
                Line { number: 7, indent: 0, content: "version: 1.0.0" },
            ]
        );
    }

    #[test]
    fn hash_in_quotes_is_still_comment() {
        let line = Lines::new("color: \"#fff\"").next().unwrap();
        assert_eq!(line.content, "color: \"");
    }

    #[test]
    fn restartable() {
        let mut lines = Lines::new("a: 1\n  b: 2\nc: 3");
        lines.next();
        let fork = lines.clone();
        assert_eq!(lines.count(), 2);
        assert_eq!(fork.map(|l| l.number).collect::<Vec<_>>(), [2, 3]);
    }

    #[test]
    fn item_marker() {
        assert_eq!(item_body("- a"), Some(" a"));
        assert_eq!(item_body("-"), Some(""));
        assert_eq!(item_body("-5"), None);
        assert_eq!(item_body("--- x"), None);
    }
}
