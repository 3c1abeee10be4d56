//! ATX headings: `## Title` to `<h2 id="title">Title</h2>`.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::limits::MAX_HEADING_LEVEL;
use crate::pipeline::RenderContext;
use crate::render::HtmlWriter;
use crate::slug;

static HEADING_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"(?m)^(#{{1,{MAX_HEADING_LEVEL}}})[ \t]+(\S.*?)[ \t]*$")).unwrap()
});

/// Rewrite every heading line in `text`.
///
/// The id is derived from what the reader sees, so protected inline code is
/// resolved and tags are stripped before slugging.
pub fn rewrite_headings(text: &str, ctx: &mut RenderContext) -> String {
    HEADING_RE
        .replace_all(text, |caps: &Captures| {
            let level = caps[1].len() as u8;
            let content = &caps[2];
            let visible = slug::visible_text(&ctx.stash.restore(content));
            let id = ctx.heading_ids.assign(&visible);

            let mut writer = HtmlWriter::new();
            writer.heading(level, &id, content);
            writer.into_string()
        })
        .into_owned()
}
