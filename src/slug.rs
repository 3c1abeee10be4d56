//! Heading id generation.

use once_cell::sync::Lazy;
use regex::Regex;
use rustc_hash::FxHashMap;

use crate::limits::EMPTY_SLUG_FALLBACK;

static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^<>]*>").unwrap());
static NON_WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s-]").unwrap());

/// Derive an id from heading text.
///
/// Lowercases, keeps Unicode word characters (letters, digits, marks and
/// connector punctuation), whitespace and `-`, turns each
/// whitespace run into a single `-`, and trims hyphens from both ends.
///
/// # Example
/// ```
/// assert_eq!(markpass::slug::slugify("Hello, World!"), "hello-world");
/// ```
pub fn slugify(text: &str) -> String {
    let lower = text.to_lowercase();
    let kept = NON_WORD_RE.replace_all(&lower, "");
    let joined = kept.split_whitespace().collect::<Vec<_>>().join("-");
    joined.trim_matches('-').to_string()
}

/// Reduce rendered heading content to the text a reader sees: tags removed,
/// entities decoded.
pub fn visible_text(html: &str) -> String {
    let stripped = TAG_RE.replace_all(html, "");
    html_escape::decode_html_entities(&stripped).into_owned()
}

/// Hands out heading ids for one render call.
///
/// By default duplicates share an id. With `unique` set, repeats get a
/// numeric suffix: `intro`, `intro-1`, `intro-2`.
#[derive(Debug, Default)]
pub struct HeadingIds {
    unique: bool,
    seen: FxHashMap<String, usize>,
}

impl HeadingIds {
    pub fn new(unique: bool) -> Self {
        Self {
            unique,
            seen: FxHashMap::default(),
        }
    }

    /// Id for a heading whose visible text is `text`.
    pub fn assign(&mut self, text: &str) -> String {
        let mut base = slugify(text);
        if base.is_empty() {
            base = EMPTY_SLUG_FALLBACK.to_string();
        }
        if !self.unique {
            return base;
        }

        let count = self.seen.entry(base.clone()).or_insert(0);
        let id = if *count == 0 {
            base.clone()
        } else {
            format!("{base}-{count}")
        };
        *count += 1;
        // A generated `intro-1` must not be handed out again for a literal
        // "Intro 1" heading later on.
        if id != base {
            self.seen.entry(id.clone()).or_insert(1);
        }
        id
    }
}
