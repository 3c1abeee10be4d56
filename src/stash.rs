//! Placeholder storage for HTML that later passes must not touch.
//!
//! A protected fragment is replaced in the working text by
//! `OPEN index CLOSE`, where `OPEN` and `CLOSE` are private-use code points
//! that no pass matches on. Input text is scrubbed of those code points
//! before the first pass, so placeholders cannot be forged.

use std::borrow::Cow;

/// Closes every placeholder.
pub const CLOSE: char = '\u{E003}';

/// What a placeholder stands in for. Each kind has its own opening sentinel,
/// so a stash only ever restores placeholders it issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// A fenced code block; paragraph assembly treats it as block-level.
    Block,
    /// An inline code span.
    Inline,
    /// A pass-local mask over an HTML tag.
    Mask,
}

impl Slot {
    /// Opening sentinel for this kind.
    #[inline]
    pub const fn open(self) -> char {
        match self {
            Slot::Block => '\u{E000}',
            Slot::Inline => '\u{E001}',
            Slot::Mask => '\u{E002}',
        }
    }

    #[inline]
    fn from_open(c: char) -> Option<Self> {
        match c {
            '\u{E000}' => Some(Slot::Block),
            '\u{E001}' => Some(Slot::Inline),
            '\u{E002}' => Some(Slot::Mask),
            _ => None,
        }
    }
}

/// Whether `c` is one of the placeholder sentinels.
#[inline]
pub fn is_sentinel(c: char) -> bool {
    matches!(c, '\u{E000}'..='\u{E003}')
}

/// Remove sentinel code points from user input.
pub fn scrub_sentinels(text: &str) -> Cow<'_, str> {
    if text.contains(is_sentinel) {
        Cow::Owned(text.chars().filter(|&c| !is_sentinel(c)).collect())
    } else {
        Cow::Borrowed(text)
    }
}

/// Whether `text` begins with a placeholder of the given kind.
#[inline]
pub fn starts_with_placeholder(text: &str, slot: Slot) -> bool {
    text.starts_with(slot.open())
}

/// Fragments protected during one render call.
#[derive(Debug, Default)]
pub struct Stash {
    fragments: Vec<(Slot, String)>,
}

impl Stash {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `html` and return the placeholder that stands in for it.
    pub fn protect(&mut self, slot: Slot, html: String) -> String {
        let index = self.fragments.len();
        self.fragments.push((slot, html));
        format!("{}{}{}", slot.open(), index, CLOSE)
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Substitute every placeholder this stash issued back into `text`.
    ///
    /// Placeholders from other stashes, or malformed ones, are copied through.
    pub fn restore<'t>(&self, text: &'t str) -> Cow<'t, str> {
        if self.fragments.is_empty() || !text.contains(is_sentinel) {
            return Cow::Borrowed(text);
        }

        let mut out = String::with_capacity(text.len() * 2);
        let mut rest = text;
        while let Some(pos) = rest.find(|c| Slot::from_open(c).is_some()) {
            out.push_str(&rest[..pos]);
            let tail = &rest[pos..];
            match self.lookup(tail) {
                Some((fragment, consumed)) => {
                    out.push_str(fragment);
                    rest = &tail[consumed..];
                }
                None => {
                    // Sentinels are all three bytes in UTF-8.
                    let width = '\u{E000}'.len_utf8();
                    out.push_str(&tail[..width]);
                    rest = &tail[width..];
                }
            }
        }
        out.push_str(rest);
        Cow::Owned(out)
    }

    /// Resolve the placeholder at the start of `tail`, returning the fragment
    /// and the number of bytes the placeholder occupies.
    fn lookup<'s>(&'s self, tail: &str) -> Option<(&'s str, usize)> {
        let open = tail.chars().next()?;
        let slot = Slot::from_open(open)?;
        let body_start = open.len_utf8();
        let close = body_start + tail[body_start..].find(CLOSE)?;
        let digits = &tail[body_start..close];
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let index: usize = digits.parse().ok()?;
        let (stored_slot, fragment) = self.fragments.get(index)?;
        (*stored_slot == slot).then_some((fragment.as_str(), close + CLOSE.len_utf8()))
    }
}
