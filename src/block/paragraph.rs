//! Line breaks and paragraph assembly.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::render::HtmlWriter;
use crate::stash::{self, Slot};

use super::lines;

/// One or more blank (or whitespace-only) lines.
static BLANK_RUN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n(?:[ \t]*\n)+").unwrap());

/// Tags that make a block pass through paragraph assembly unwrapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockTag {
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
    P,
    Div,
    Blockquote,
    Pre,
    Ul,
    Ol,
    Li,
    Table,
    Form,
    Fieldset,
    Address,
    Hr,
}

impl BlockTag {
    pub const ALL: [BlockTag; 18] = [
        BlockTag::H1,
        BlockTag::H2,
        BlockTag::H3,
        BlockTag::H4,
        BlockTag::H5,
        BlockTag::H6,
        BlockTag::P,
        BlockTag::Div,
        BlockTag::Blockquote,
        BlockTag::Pre,
        BlockTag::Ul,
        BlockTag::Ol,
        BlockTag::Li,
        BlockTag::Table,
        BlockTag::Form,
        BlockTag::Fieldset,
        BlockTag::Address,
        BlockTag::Hr,
    ];

    pub fn name(self) -> &'static str {
        match self {
            BlockTag::H1 => "h1",
            BlockTag::H2 => "h2",
            BlockTag::H3 => "h3",
            BlockTag::H4 => "h4",
            BlockTag::H5 => "h5",
            BlockTag::H6 => "h6",
            BlockTag::P => "p",
            BlockTag::Div => "div",
            BlockTag::Blockquote => "blockquote",
            BlockTag::Pre => "pre",
            BlockTag::Ul => "ul",
            BlockTag::Ol => "ol",
            BlockTag::Li => "li",
            BlockTag::Table => "table",
            BlockTag::Form => "form",
            BlockTag::Fieldset => "fieldset",
            BlockTag::Address => "address",
            BlockTag::Hr => "hr",
        }
    }

    /// Case-insensitive lookup by tag name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|tag| tag.name().eq_ignore_ascii_case(name))
    }

    /// The block tag `block` opens with, if any.
    pub fn leading(block: &str) -> Option<Self> {
        let rest = block.strip_prefix('<')?;
        let name_len = rest
            .bytes()
            .take_while(|b| b.is_ascii_alphanumeric())
            .count();
        match rest.as_bytes().get(name_len) {
            None | Some(b'>' | b'/' | b' ' | b'\t' | b'\n') => Self::from_name(&rest[..name_len]),
            Some(_) => None,
        }
    }
}

/// Whether a trimmed block is already block-level HTML.
pub fn is_block_level(block: &str) -> bool {
    stash::starts_with_placeholder(block, Slot::Block) || BlockTag::leading(block).is_some()
}

/// A line ending in two or more spaces, followed by a non-blank line, ends
/// with `<br>`.
pub fn insert_line_breaks(text: &str) -> String {
    let all: Vec<&str> = lines(text).collect();
    let mut out = HtmlWriter::with_capacity_for(text.len());

    for (i, line) in all.iter().enumerate() {
        if i > 0 {
            out.newline();
        }
        let next_has_text = all.get(i + 1).is_some_and(|next| !next.trim().is_empty());
        let kept = line.trim_end_matches(' ');
        if next_has_text && line.len() - kept.len() >= 2 && !kept.trim().is_empty() {
            out.write_string(kept);
            out.line_break();
        } else {
            out.write_string(line);
        }
    }

    out.into_string()
}

/// Split on blank-line runs and wrap every block that is not block-level HTML
/// in `<p>`. Blocks are joined with `\n`.
pub fn assemble_paragraphs(text: &str) -> String {
    let mut out = HtmlWriter::with_capacity_for(text.len());
    for block in BLANK_RUN_RE.split(text) {
        let block = block.trim();
        if block.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.newline();
        }
        if is_block_level(block) {
            out.write_string(block);
        } else {
            out.paragraph(block);
        }
    }
    out.into_string()
}
