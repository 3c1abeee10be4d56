//! Strikethrough (`~~text~~`).

use once_cell::sync::Lazy;
use regex::Regex;

use super::with_tags_masked;

static STRIKE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"~~([^\n]+?)~~").unwrap());

/// Wrap `~~text~~` in `<del>`. Pairs never cross a line break or a tag.
pub fn rewrite_strikethrough(text: &str) -> String {
    if !text.contains("~~") {
        return text.to_owned();
    }
    with_tags_masked(text, |masked| {
        STRIKE_RE.replace_all(masked, "<del>$1</del>").into_owned()
    })
}
