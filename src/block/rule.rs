//! Horizontal rules: a line of three or more `-`, `*` or `_`, optionally
//! separated by spaces.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::render::HtmlWriter;

static RULE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^ {0,3}(?:(?:-[ \t]*){3,}|(?:\*[ \t]*){3,}|(?:_[ \t]*){3,})$").unwrap()
});

/// Replace rule lines with `<hr>`, isolated by blank lines.
///
/// Usable on its own or as the opt-in pipeline pass.
///
/// # Example
/// ```
/// let out = markpass::render_horizontal_rules("a\n---\nb");
/// assert_eq!(out, "a\n\n\n<hr>\n\n\nb");
/// ```
pub fn render_horizontal_rules(text: &str) -> String {
    RULE_RE
        .replace_all(text, |_: &Captures| {
            let mut out = HtmlWriter::new();
            out.blank_line();
            out.thematic_break();
            out.blank_line();
            out.into_string()
        })
        .into_owned()
}
