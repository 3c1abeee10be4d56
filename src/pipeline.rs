//! The ordered pass table.
//!
//! Every pass rewrites the whole working text and hands the result to the
//! next one. Order matters: a pass must never see markup it could corrupt, so
//! each entry carries the reason it sits where it does.

use crate::block;
use crate::inline;
use crate::slug::HeadingIds;
use crate::stash::{self, Stash};
use crate::Options;

/// Per-call state threaded through the passes.
#[derive(Debug)]
pub struct RenderContext {
    pub options: Options,
    pub stash: Stash,
    pub heading_ids: HeadingIds,
}

impl RenderContext {
    pub fn new(options: &Options) -> Self {
        Self {
            options: *options,
            stash: Stash::new(),
            heading_ids: HeadingIds::new(options.unique_heading_ids),
        }
    }
}

/// One stage of the rewrite pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pass {
    Normalize,
    FencedCode,
    InlineCode,
    Headings,
    Blockquotes,
    HorizontalRules,
    Lists,
    Images,
    Links,
    Autolinks,
    Emphasis,
    Strikethrough,
    Tables,
    LineBreaks,
    Paragraphs,
    Restore,
}

impl Pass {
    pub fn name(self) -> &'static str {
        match self {
            Pass::Normalize => "normalize",
            Pass::FencedCode => "fenced-code",
            Pass::InlineCode => "inline-code",
            Pass::Headings => "headings",
            Pass::Blockquotes => "blockquotes",
            Pass::HorizontalRules => "horizontal-rules",
            Pass::Lists => "lists",
            Pass::Images => "images",
            Pass::Links => "links",
            Pass::Autolinks => "autolinks",
            Pass::Emphasis => "emphasis",
            Pass::Strikethrough => "strikethrough",
            Pass::Tables => "tables",
            Pass::LineBreaks => "line-breaks",
            Pass::Paragraphs => "paragraphs",
            Pass::Restore => "restore",
        }
    }

    /// Why the pass runs at its position.
    pub fn rationale(self) -> &'static str {
        match self {
            Pass::Normalize => "later passes assume LF line endings and sentinel-free text",
            Pass::FencedCode => "code must be hidden before any marker is interpreted",
            Pass::InlineCode => "spans are protected before headings or emphasis see backticked text",
            Pass::Headings => "needs `#` at line start, before lists and inline rewrites",
            Pass::Blockquotes => "needs `>` at line start",
            Pass::HorizontalRules => "`- - -` must become a rule before lists claim it",
            Pass::Lists => "needs raw `-` and `N.` markers at line start",
            Pass::Images => "runs before links so `![..](..)` never becomes `!<a>`",
            Pass::Links => "titled form first, then plain; before autolinks",
            Pass::Autolinks => "skips existing anchors and tag attributes",
            Pass::Emphasis => "bold before italic so `**` is not split; tags are masked",
            Pass::Strikethrough => "independent of emphasis; tags are masked",
            Pass::Tables => "after inline passes so cells carry formatting",
            Pass::LineBreaks => "must see single newlines before paragraphs are split",
            Pass::Paragraphs => "wraps whatever is not block-level yet",
            Pass::Restore => "reinserts protected code last",
        }
    }

    /// Run this pass over `text`.
    pub fn apply(self, text: &str, ctx: &mut RenderContext) -> String {
        match self {
            Pass::Normalize => normalize(text),
            Pass::FencedCode => block::fence::extract_fenced_code(text, ctx),
            Pass::InlineCode => inline::code_span::extract_code_spans(text, ctx),
            Pass::Headings => block::heading::rewrite_headings(text, ctx),
            Pass::Blockquotes => block::rewrite_blockquotes(text),
            Pass::HorizontalRules => block::rule::render_horizontal_rules(text),
            Pass::Lists => block::list::rebuild_lists(text),
            Pass::Images => inline::links::rewrite_images(text),
            Pass::Links => inline::links::rewrite_links(text),
            Pass::Autolinks => inline::links::rewrite_autolinks(text),
            Pass::Emphasis => inline::emphasis::rewrite_emphasis(text),
            Pass::Strikethrough => inline::strikethrough::rewrite_strikethrough(text),
            Pass::Tables => block::table::render_tables(text),
            Pass::LineBreaks => block::paragraph::insert_line_breaks(text),
            Pass::Paragraphs => block::paragraph::assemble_paragraphs(text),
            Pass::Restore => ctx.stash.restore(text).into_owned(),
        }
    }
}

/// Passes run by [`crate::to_html`].
pub const DEFAULT_PASSES: &[Pass] = &[
    Pass::Normalize,
    Pass::FencedCode,
    Pass::InlineCode,
    Pass::Headings,
    Pass::Blockquotes,
    Pass::Lists,
    Pass::Images,
    Pass::Links,
    Pass::Autolinks,
    Pass::Emphasis,
    Pass::Strikethrough,
    Pass::LineBreaks,
    Pass::Paragraphs,
    Pass::Restore,
];

/// An ordered list of passes built from [`Options`].
#[derive(Debug, Clone)]
pub struct Pipeline {
    options: Options,
    passes: Vec<Pass>,
}

impl Pipeline {
    /// Default passes plus the opt-in ones `options` enables.
    pub fn new(options: &Options) -> Self {
        let mut passes = Vec::with_capacity(DEFAULT_PASSES.len() + 2);
        for &pass in DEFAULT_PASSES {
            if pass == Pass::Lists && options.horizontal_rules {
                passes.push(Pass::HorizontalRules);
            }
            if pass == Pass::LineBreaks && options.tables {
                passes.push(Pass::Tables);
            }
            passes.push(pass);
        }
        Self {
            options: *options,
            passes,
        }
    }

    pub fn passes(&self) -> &[Pass] {
        &self.passes
    }

    /// Position of `pass` in this pipeline, if present.
    pub fn position(&self, pass: Pass) -> Option<usize> {
        self.passes.iter().position(|&p| p == pass)
    }

    /// Run every pass over `input` and return trimmed HTML.
    pub fn render(&self, input: &str) -> String {
        let mut ctx = RenderContext::new(&self.options);
        let mut text = input.to_owned();
        for &pass in &self.passes {
            text = pass.apply(&text, &mut ctx);
            log::trace!("pass {:<16} -> {} bytes", pass.name(), text.len());
        }
        let trimmed = text.trim();
        if trimmed.len() == text.len() {
            text
        } else {
            trimmed.to_owned()
        }
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(&Options::default())
    }
}

/// Convert CRLF and lone CR to LF and drop placeholder sentinels.
fn normalize(text: &str) -> String {
    let scrubbed = stash::scrub_sentinels(text);
    if !scrubbed.contains('\r') {
        return scrubbed.into_owned();
    }
    scrubbed.replace("\r\n", "\n").replace('\r', "\n")
}
