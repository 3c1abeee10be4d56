//! Fenced code block extraction.
//!
//! Runs first. Each complete fence is rendered to `<pre><code>` with an
//! escaped body and replaced by a block placeholder isolated by blank lines.
//! An opening fence with no closing line is left as literal text, and
//! scanning resumes on the following line.

use crate::limits::FENCE_LEN;
use crate::pipeline::RenderContext;
use crate::render::HtmlWriter;
use crate::stash::Slot;

use super::lines;

/// If `line` opens a fence, return its language token (if any).
///
/// The first word after the backticks is the language when it is made of
/// `[A-Za-z0-9_]`; any other info text is ignored.
pub fn opening_fence(line: &str) -> Option<Option<&str>> {
    let trimmed = line.trim_start();
    let ticks = trimmed.bytes().take_while(|&b| b == b'`').count();
    if ticks < FENCE_LEN {
        return None;
    }
    let info = trimmed[ticks..].trim();
    if info.contains('`') {
        return None;
    }
    let lang = info
        .split_whitespace()
        .next()
        .filter(|tok| tok.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_'));
    Some(lang)
}

/// Whether `line` closes a fence: only backticks, at least three.
pub fn is_closing_fence(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.len() >= FENCE_LEN && trimmed.bytes().all(|b| b == b'`')
}

/// Render one fenced block to HTML.
pub fn render_code_block(lang: Option<&str>, body: &[&str]) -> String {
    let body_len: usize = body.iter().map(|l| l.len() + 1).sum();
    let mut writer = HtmlWriter::with_capacity_for(body_len + 32);
    writer.code_block_start(lang);
    for line in body {
        writer.write_escaped(line.as_bytes());
        writer.newline();
    }
    writer.code_block_end();
    writer.into_string()
}

/// Replace every complete fenced block in `text` with a block placeholder.
pub fn extract_fenced_code(text: &str, ctx: &mut RenderContext) -> String {
    let all: Vec<&str> = lines(text).collect();
    let mut out = HtmlWriter::with_capacity_for(text.len());
    // Once a scan from line `i` finds no closer, no later opener can have one.
    let mut no_closer_after = usize::MAX;
    let mut i = 0;

    while i < all.len() {
        if i > 0 {
            out.newline();
        }
        let line = all[i];

        if let Some(lang) = opening_fence(line) {
            let close = if i >= no_closer_after {
                None
            } else {
                (i + 1..all.len()).find(|&j| is_closing_fence(all[j]))
            };
            match close {
                Some(close) => {
                    let html = render_code_block(lang, &all[i + 1..close]);
                    let placeholder = ctx.stash.protect(Slot::Block, html);
                    out.newline();
                    out.write_string(&placeholder);
                    out.blank_line();
                    i = close + 1;
                    continue;
                }
                None => {
                    no_closer_after = no_closer_after.min(i);
                    log::debug!("unterminated code fence on line {}, kept as text", i + 1);
                }
            }
        }

        out.write_string(line);
        i += 1;
    }

    out.into_string()
}
