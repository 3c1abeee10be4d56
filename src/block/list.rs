//! List reconstruction.
//!
//! Two phases. [`ListItem::parse`] classifies a single line as a list item
//! with its nesting level and marker kind. [`ListBuilder`] then folds the
//! classified lines into nested `<ul>` / `<ol>` trees with an explicit stack
//! of open frames.
//!
//! Stack invariant: frame levels strictly increase from bottom to top, and the
//! top frame describes the most recently opened list tag. Every frame pushed
//! is popped, and every pop writes the closing tag, so the output is always
//! balanced.
//!
//! A nested list is written as a sibling of the item before it, inside the
//! parent list:
//!
//! ```text
//! <ul>
//! <li>a</li>
//! <ul>
//! <li>b</li>
//! </ul>
//! </ul>
//! ```

use smallvec::SmallVec;

use crate::limits::{INLINE_LIST_FRAMES, LIST_INDENT_WIDTH, MAX_LIST_MARKER_DIGITS};
use crate::render::HtmlWriter;

use super::{Line, lines};

/// A list item line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListItem<'a> {
    /// Indentation width divided by the indent unit.
    pub level: usize,
    /// `N.` marker rather than `-`.
    pub ordered: bool,
    /// The `N` of an ordered marker.
    pub number: Option<u32>,
    pub content: &'a str,
}

impl<'a> ListItem<'a> {
    /// Classify `raw` as a list item: `-` or `N.` followed by whitespace.
    pub fn parse(raw: &'a str) -> Option<Self> {
        let line = Line::new(raw);
        let level = line.indent / LIST_INDENT_WIDTH;
        let text = line.content;

        if let Some(rest) = text.strip_prefix('-') {
            let content = marker_gap(rest)?;
            return Some(Self {
                level,
                ordered: false,
                number: None,
                content,
            });
        }

        let digits = text.bytes().take_while(u8::is_ascii_digit).count();
        if digits == 0 || digits > MAX_LIST_MARKER_DIGITS {
            return None;
        }
        let rest = text[digits..].strip_prefix('.')?;
        let content = marker_gap(rest)?;
        Some(Self {
            level,
            ordered: true,
            number: text[..digits].parse().ok(),
            content,
        })
    }
}

/// After a marker: require whitespace (or nothing), return the item text.
#[inline]
fn marker_gap(rest: &str) -> Option<&str> {
    match rest.as_bytes().first() {
        None => Some(""),
        Some(b' ' | b'\t') => Some(rest.trim_start()),
        Some(_) => None,
    }
}

/// One open list on the nesting stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListFrame {
    pub level: usize,
    pub ordered: bool,
}

/// Folds list item lines into nested list markup.
pub struct ListBuilder {
    stack: SmallVec<[ListFrame; INLINE_LIST_FRAMES]>,
    out: HtmlWriter,
    started: bool,
}

impl ListBuilder {
    pub fn with_capacity_for(input_len: usize) -> Self {
        Self {
            stack: SmallVec::new(),
            out: HtmlWriter::with_capacity_for(input_len),
            started: false,
        }
    }

    /// Current nesting depth.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Start a new output line.
    fn begin_line(&mut self) {
        if self.started {
            self.out.newline();
        }
        self.started = true;
    }

    fn open(&mut self, item: &ListItem<'_>) {
        if self.stack.is_empty() {
            // Empty line so the whole list forms its own block.
            self.begin_line();
        }
        self.stack.push(ListFrame {
            level: item.level,
            ordered: item.ordered,
        });
        self.begin_line();
        if item.ordered {
            self.out.ol_start(item.number);
        } else {
            self.out.ul_start();
        }
        if self.stack.len() > 1 {
            log::trace!("nested list opened at depth {}", self.stack.len());
        }
    }

    fn close_top(&mut self) {
        if let Some(frame) = self.stack.pop() {
            self.begin_line();
            if frame.ordered {
                self.out.ol_end();
            } else {
                self.out.ul_end();
            }
        }
    }

    /// Close every open list, innermost first.
    pub fn close_all(&mut self) {
        if self.stack.is_empty() {
            return;
        }
        while !self.stack.is_empty() {
            self.close_top();
        }
        self.begin_line();
    }

    /// Place one item, opening or closing lists as its level requires.
    pub fn item(&mut self, item: &ListItem<'_>) {
        while let Some(top) = self.stack.last() {
            let deeper = top.level > item.level;
            let switched = top.level == item.level && top.ordered != item.ordered;
            if deeper || switched {
                self.close_top();
            } else {
                break;
            }
        }

        let continues = self
            .stack
            .last()
            .is_some_and(|top| top.level == item.level && top.ordered == item.ordered);
        if !continues {
            self.open(item);
        }

        self.begin_line();
        self.out.list_item(item.content);
    }

    /// A line that is not a list item: ends all open lists, then passes through.
    pub fn other(&mut self, line: &str) {
        self.close_all();
        self.begin_line();
        self.out.write_string(line);
    }

    pub fn finish(mut self) -> String {
        self.close_all();
        self.out.into_string()
    }
}

/// Rebuild every list in `text`.
pub fn rebuild_lists(text: &str) -> String {
    let mut builder = ListBuilder::with_capacity_for(text.len());
    for line in lines(text) {
        match ListItem::parse(line) {
            Some(item) => builder.item(&item),
            None => builder.other(line),
        }
    }
    builder.finish()
}
