//! Strong and regular emphasis.
//!
//! Strong forms are rewritten first so `**` is never read as two italic
//! markers. Underscore forms must sit on word boundaries, which keeps
//! `snake_case_names` literal. No match spans a line break, so a pair can
//! never straddle the `</li>` or `</h1>` that an earlier pass put between
//! two lines.

use once_cell::sync::Lazy;
use regex::Regex;

use super::with_tags_masked;

static STRONG_STAR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*([^\n]+?)\*\*").unwrap());
static STRONG_UNDERSCORE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b__([^\n]+?)__\b").unwrap());
static EM_STAR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*([^*\n]+?)\*").unwrap());
static EM_UNDERSCORE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b_([^_\n]+?)_\b").unwrap());

/// Rewrite `**x**`, `__x__`, `*x*` and `_x_`.
pub fn rewrite_emphasis(text: &str) -> String {
    if !text.contains(['*', '_']) {
        return text.to_owned();
    }
    with_tags_masked(text, emphasize)
}

fn emphasize(text: &str) -> String {
    let s = STRONG_STAR_RE.replace_all(text, "<strong>$1</strong>");
    let s = STRONG_UNDERSCORE_RE.replace_all(&s, "<strong>$1</strong>");
    let s = EM_STAR_RE.replace_all(&s, "<em>$1</em>");
    let s = EM_UNDERSCORE_RE.replace_all(&s, "<em>$1</em>");
    s.into_owned()
}
