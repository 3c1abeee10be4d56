//! Line-oriented passes.
//!
//! These passes look at whole lines:
//! - Fenced code blocks
//! - ATX headings
//! - Blockquotes
//! - Horizontal rules (opt-in)
//! - Lists
//! - Tables (opt-in)
//! - Paragraphs and line breaks

pub mod fence;
pub mod heading;
pub mod list;
pub mod paragraph;
pub mod rule;
pub mod table;

pub use list::{ListFrame, ListItem};
pub use paragraph::BlockTag;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::render::HtmlWriter;

static BLOCKQUOTE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^>[ \t]+(.*)$").unwrap());

/// Split on `\n` exactly like `str::split('\n')`, using memchr.
pub(crate) fn lines(text: &str) -> impl Iterator<Item = &str> + '_ {
    let mut newlines = memchr::memchr_iter(b'\n', text.as_bytes());
    let mut start = 0;
    let mut done = false;
    std::iter::from_fn(move || {
        if done {
            return None;
        }
        match newlines.next() {
            Some(nl) => {
                let line = &text[start..nl];
                start = nl + 1;
                Some(line)
            }
            None => {
                done = true;
                Some(&text[start..])
            }
        }
    })
}

/// A line split into its indentation width and trimmed content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    /// Leading whitespace width; a tab counts as one list indent unit.
    pub indent: usize,
    pub content: &'a str,
}

impl<'a> Line<'a> {
    pub fn new(raw: &'a str) -> Self {
        let mut indent = 0;
        let mut offset = 0;
        for b in raw.bytes() {
            match b {
                b' ' => indent += 1,
                b'\t' => indent += crate::limits::TAB_WIDTH,
                _ => break,
            }
            offset += 1;
        }
        Self {
            indent,
            content: raw[offset..].trim_end(),
        }
    }
}

/// `> text` lines become `<blockquote>text</blockquote>`, one per line.
pub fn rewrite_blockquotes(text: &str) -> String {
    BLOCKQUOTE_RE
        .replace_all(text, |caps: &Captures| {
            let mut writer = HtmlWriter::new();
            writer.blockquote(&caps[1]);
            writer.into_string()
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_matches_split() {
        for text in ["", "a", "a\n", "\n\n", "a\nb\n\nc"] {
            let ours: Vec<_> = lines(text).collect();
            let std: Vec<_> = text.split('\n').collect();
            assert_eq!(ours, std, "input {text:?}");
        }
    }

    #[test]
    fn test_line_indent() {
        assert_eq!(Line::new("    - x  "), Line { indent: 4, content: "- x" });
        assert_eq!(Line::new("\t1. y"), Line { indent: 2, content: "1. y" });
        assert_eq!(Line::new("z"), Line { indent: 0, content: "z" });
    }

    #[test]
    fn test_blockquote_per_line() {
        assert_eq!(
            rewrite_blockquotes("> one\n> two"),
            "<blockquote>one</blockquote>\n<blockquote>two</blockquote>"
        );
    }

    #[test]
    fn test_blockquote_requires_space() {
        assert_eq!(rewrite_blockquotes(">tight"), ">tight");
        assert_eq!(rewrite_blockquotes("a > b"), "a > b");
    }
}
