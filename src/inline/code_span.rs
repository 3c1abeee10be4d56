//! Inline code spans.
//!
//! A span is a single backtick, one or more non-backtick characters on the
//! same line, and a closing backtick. Each span is rendered immediately and
//! replaced by an inline placeholder, so nothing inside it is interpreted
//! as markup by later passes.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::pipeline::RenderContext;
use crate::render::HtmlWriter;
use crate::stash::Slot;

static CODE_SPAN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"`([^`\n]+)`").unwrap());

/// Replace every code span with a placeholder for its `<code>` element.
///
/// Content is escaped unless [`crate::Options::escape_inline_code`] is off.
pub fn extract_code_spans(text: &str, ctx: &mut RenderContext) -> String {
    let escape = ctx.options.escape_inline_code;
    CODE_SPAN_RE
        .replace_all(text, |caps: &Captures| {
            let mut out = HtmlWriter::with_capacity_for(caps[1].len());
            out.inline_code(&caps[1], escape);
            ctx.stash.protect(Slot::Inline, out.into_string())
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Options;

    fn render(text: &str, options: Options) -> String {
        let mut ctx = RenderContext::new(&options);
        let extracted = extract_code_spans(text, &mut ctx);
        ctx.stash.restore(&extracted).into_owned()
    }

    #[test]
    fn test_code_span() {
        assert_eq!(render("use `foo()` here", Options::default()), "use <code>foo()</code> here");
    }

    #[test]
    fn test_escaped_by_default() {
        assert_eq!(render("`<b>&`", Options::default()), "<code>&lt;b&gt;&amp;</code>");
    }

    #[test]
    fn test_raw_when_escaping_disabled() {
        let options = Options {
            escape_inline_code: false,
            ..Options::default()
        };
        assert_eq!(render("`<b>`", options), "<code><b></code>");
    }

    #[test]
    fn test_markers_hidden_inside_span() {
        let mut ctx = RenderContext::new(&Options::default());
        let extracted = extract_code_spans("`**not bold**`", &mut ctx);
        assert!(!extracted.contains('*'));
        assert_eq!(ctx.stash.len(), 1);
    }

    #[test]
    fn test_no_span_across_lines() {
        assert_eq!(render("`a\nb`", Options::default()), "`a\nb`");
    }

    #[test]
    fn test_unmatched_backtick_literal() {
        assert_eq!(render("a ` b", Options::default()), "a ` b");
        assert_eq!(render("``", Options::default()), "``");
    }
}
