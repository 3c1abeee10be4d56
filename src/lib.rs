//! markpass: a lightweight Markdown to HTML converter
//!
//! Markdown goes through an ordered table of text-rewriting passes. Each pass
//! takes the whole document and returns a rewritten copy, so the order of the
//! table is the grammar: code is hidden first, block constructs are rewritten
//! while their line-start markers are intact, inline markup follows, and
//! paragraph assembly wraps whatever is left.
//!
//! # Design Principles
//! - No AST: each pass is `&str -> String`
//! - Protected HTML: rendered code is stashed behind placeholders that no
//!   later pass can match, and restored last
//! - Infallible: malformed Markdown degrades to literal text
//! - Per-call state only: no globals besides compiled regexes
//!
//! Tables and horizontal rules are opt-in, either through [`Options`] or as
//! the standalone [`render_tables`] and [`render_horizontal_rules`] passes.

pub mod block;
pub mod escape;
pub mod inline;
pub mod limits;
pub mod pipeline;
pub mod render;
pub mod slug;
pub mod stash;

// Re-export primary types
pub use block::rule::render_horizontal_rules;
pub use block::table::render_tables;
pub use block::{BlockTag, ListFrame, ListItem};
pub use pipeline::{DEFAULT_PASSES, Pass, Pipeline, RenderContext};
pub use render::HtmlWriter;

/// Rendering options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Escape `<`, `>`, `&` and quotes inside inline code spans.
    pub escape_inline_code: bool,
    /// Run the pipe table pass.
    pub tables: bool,
    /// Run the horizontal rule pass.
    pub horizontal_rules: bool,
    /// Suffix repeated heading ids with `-1`, `-2`, ...
    pub unique_heading_ids: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            escape_inline_code: true,
            tables: false,
            horizontal_rules: false,
            unique_heading_ids: false,
        }
    }
}

/// Convert Markdown to HTML.
///
/// This is the primary API for simple use cases.
///
/// # Example
/// ```
/// let html = markpass::to_html("# Hello\n\nWorld");
/// assert!(html.contains("<h1 id=\"hello\">Hello</h1>"));
/// assert!(html.contains("<p>World</p>"));
/// ```
pub fn to_html(input: &str) -> String {
    to_html_with_options(input, &Options::default())
}

/// Convert optional Markdown to HTML. Absent input yields an empty string.
///
/// # Example
/// ```
/// assert_eq!(markpass::to_html_opt(None), "");
/// assert_eq!(markpass::to_html_opt(Some("hi")), "<p>hi</p>");
/// ```
pub fn to_html_opt(input: Option<&str>) -> String {
    input.map(to_html).unwrap_or_default()
}

/// Convert Markdown to HTML with options.
pub fn to_html_with_options(input: &str, options: &Options) -> String {
    if input.trim().is_empty() {
        return String::new();
    }
    Pipeline::new(options).render(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_paragraph() {
        assert_eq!(to_html("Hello, world!"), "<p>Hello, world!</p>");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(to_html(""), "");
        assert_eq!(to_html("  \n\n\t"), "");
        assert_eq!(to_html_opt(None), "");
    }

    #[test]
    fn test_heading_with_id() {
        assert_eq!(
            to_html("## Hello, World!"),
            "<h2 id=\"hello-world\">Hello, World!</h2>"
        );
    }

    #[test]
    fn test_heading_all_levels() {
        for level in 1..=6 {
            let input = format!("{} Heading", "#".repeat(level));
            let expected = format!("<h{level} id=\"heading\">Heading</h{level}>");
            assert_eq!(to_html(&input), expected);
        }
    }

    #[test]
    fn test_emphasis() {
        assert_eq!(to_html("**a** *b*"), "<p><strong>a</strong> <em>b</em></p>");
    }

    #[test]
    fn test_fenced_code_is_literal() {
        let html = to_html("```\n# not a heading\n```");
        assert_eq!(html, "<pre><code># not a heading\n</code></pre>");
    }

    #[test]
    fn test_unterminated_fence_keeps_going() {
        let html = to_html("```\n# Title");
        assert!(html.contains("```"));
        assert!(html.contains("<h1 id=\"title\">Title</h1>"));
    }

    #[test]
    fn test_inline_code_protected() {
        assert_eq!(
            to_html("use `**x**` here"),
            "<p>use <code>**x**</code> here</p>"
        );
    }

    #[test]
    fn test_blockquote() {
        assert_eq!(to_html("> quoted"), "<blockquote>quoted</blockquote>");
    }

    #[test]
    fn test_list_with_paragraphs() {
        assert_eq!(
            to_html("intro\n- a\n- b\noutro"),
            "<p>intro</p>\n<ul>\n<li>a</li>\n<li>b</li>\n</ul>\n<p>outro</p>"
        );
    }

    #[test]
    fn test_link_and_image() {
        assert_eq!(
            to_html("![i](i.png) [t](/x)"),
            "<p><img src=\"i.png\" alt=\"i\"> <a href=\"/x\">t</a></p>"
        );
    }

    #[test]
    fn test_output_idempotent_on_paragraphs() {
        let once = to_html("one\n\ntwo");
        assert_eq!(to_html(&once), once);
    }

    #[test]
    fn test_tables_opt_in() {
        let input = "| a |\n|---|\n| 1 |";
        assert!(!to_html(input).contains("<table>"));
        let options = Options {
            tables: true,
            ..Options::default()
        };
        let html = to_html_with_options(input, &options);
        assert!(html.starts_with("<table>"));
        assert!(html.ends_with("</table>"));
    }

    #[test]
    fn test_horizontal_rules_opt_in() {
        let options = Options {
            horizontal_rules: true,
            ..Options::default()
        };
        assert_eq!(
            to_html_with_options("a\n\n---\n\nb", &options),
            "<p>a</p>\n<hr>\n<p>b</p>"
        );
    }

    #[test]
    fn test_options_default() {
        let options = Options::default();
        assert!(options.escape_inline_code);
        assert!(!options.tables);
        assert!(!options.horizontal_rules);
        assert!(!options.unique_heading_ids);
    }
}
