//! Inline passes.
//!
//! - Code spans (protected before everything else inline)
//! - Images, links, autolinks
//! - Emphasis and strikethrough
//!
//! Emphasis-style passes run on text that already contains HTML from earlier
//! passes. Those tags are masked for the duration of the pass, and no match
//! may cross a line break.

pub mod code_span;
pub mod emphasis;
pub mod links;
pub mod strikethrough;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::stash::{Slot, Stash};

static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^<>\n]+>").unwrap());

/// Replace every match of `pattern` with a mask placeholder, run `f` on the
/// masked text, then put the masked text back.
pub(crate) fn with_masked(text: &str, pattern: &Regex, f: impl FnOnce(&str) -> String) -> String {
    let mut masks = Stash::new();
    let masked = pattern.replace_all(text, |caps: &Captures| {
        masks.protect(Slot::Mask, caps[0].to_string())
    });
    if masks.is_empty() {
        return f(text);
    }
    let rewritten = f(&masked);
    masks.restore(&rewritten).into_owned()
}

/// [`with_masked`] over every HTML tag.
pub(crate) fn with_tags_masked(text: &str, f: impl FnOnce(&str) -> String) -> String {
    with_masked(text, &TAG_RE, f)
}
