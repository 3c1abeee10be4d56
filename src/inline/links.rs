//! Images, links and bare URLs.
//!
//! Each form has its own regex and runs most specific first: titled before
//! plain, images before links. Bare `http(s)://` runs are linked last, with
//! anchors and tags written by the earlier passes masked out.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::render::HtmlWriter;

use super::with_masked;

static IMAGE_TITLED_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"!\[([^\]\n]*)\]\(([^)\s]+)[ \t]+"([^"\n]*)"\)"#).unwrap());
static IMAGE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"!\[([^\]\n]*)\]\(([^)\s]+)\)").unwrap());
static LINK_TITLED_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"\[([^\]\n]+)\]\(([^)\s]+)[ \t]+"([^"\n]*)"\)"#).unwrap());
static LINK_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[([^\]\n]+)\]\(([^)\s]+)\)").unwrap());

/// Whole anchors, then any other tag.
static ANCHOR_OR_TAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<a\b[^>]*>.*?</a>|<[^<>\n]+>").unwrap());
static BARE_URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"https?://[^\s<\x{E000}-\x{E003}]+").unwrap());

/// Trailing characters that end a sentence rather than a URL.
const URL_TRAILING_PUNCT: &[char] = &['.', ',', ':', ';', '!', '?', ')', ']', '}'];

/// `![alt](src "title")` and `![alt](src)` to `<img>`.
pub fn rewrite_images(text: &str) -> String {
    if !text.contains("![") {
        return text.to_owned();
    }
    let titled = IMAGE_TITLED_RE.replace_all(text, |caps: &Captures| {
        let mut out = HtmlWriter::new();
        out.image(&caps[2], &caps[1], Some(&caps[3]));
        out.into_string()
    });
    IMAGE_RE
        .replace_all(&titled, |caps: &Captures| {
            let mut out = HtmlWriter::new();
            out.image(&caps[2], &caps[1], None);
            out.into_string()
        })
        .into_owned()
}

/// `[text](url "title")` and `[text](url)` to `<a>`.
pub fn rewrite_links(text: &str) -> String {
    if !text.contains("](") {
        return text.to_owned();
    }
    let titled = LINK_TITLED_RE.replace_all(text, |caps: &Captures| {
        let mut out = HtmlWriter::new();
        out.link(&caps[2], Some(&caps[3]), &caps[1]);
        out.into_string()
    });
    LINK_RE
        .replace_all(&titled, |caps: &Captures| {
            let mut out = HtmlWriter::new();
            out.link(&caps[2], None, &caps[1]);
            out.into_string()
        })
        .into_owned()
}

/// Wrap bare `http://` and `https://` URLs in self-referential anchors.
///
/// URLs already inside an anchor or a tag attribute are left alone, and
/// trailing sentence punctuation stays outside the link.
pub fn rewrite_autolinks(text: &str) -> String {
    if !text.contains("http") {
        return text.to_owned();
    }
    with_masked(text, &ANCHOR_OR_TAG_RE, |masked| {
        BARE_URL_RE
            .replace_all(masked, |caps: &Captures| {
                let raw = &caps[0];
                let url = raw.trim_end_matches(URL_TRAILING_PUNCT);
                if !url.contains("://") || url.ends_with("://") {
                    return raw.to_owned();
                }
                let mut out = HtmlWriter::new();
                out.autolink(url);
                out.write_string(&raw[url.len()..]);
                out.into_string()
            })
            .into_owned()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_link() {
        assert_eq!(
            rewrite_links("see [docs](https://x.dev/a)"),
            "see <a href=\"https://x.dev/a\">docs</a>"
        );
    }

    #[test]
    fn test_titled_link() {
        assert_eq!(
            rewrite_links("[t](/p \"The Title\")"),
            "<a href=\"/p\" title=\"The Title\">t</a>"
        );
    }

    #[test]
    fn test_image_forms() {
        assert_eq!(
            rewrite_images("![cat](cat.png)"),
            "<img src=\"cat.png\" alt=\"cat\">"
        );
        assert_eq!(
            rewrite_images("![cat](cat.png \"Tom\")"),
            "<img src=\"cat.png\" alt=\"cat\" title=\"Tom\">"
        );
        assert_eq!(rewrite_images("![](x.png)"), "<img src=\"x.png\" alt=\"\">");
    }

    #[test]
    fn test_image_not_turned_into_link() {
        let html = rewrite_links(&rewrite_images("![a](b.png)"));
        assert_eq!(html, "<img src=\"b.png\" alt=\"a\">");
        assert!(!html.contains("<a "));
    }

    #[test]
    fn test_link_attribute_escaped() {
        assert_eq!(
            rewrite_links("[q](/s?a=1&b=\"2\")"),
            "<a href=\"/s?a=1&amp;b=&quot;2&quot;\">q</a>"
        );
    }

    #[test]
    fn test_incomplete_link_literal() {
        assert_eq!(rewrite_links("[text] (url)"), "[text] (url)");
        assert_eq!(rewrite_links("[](url)"), "[](url)");
    }

    #[test]
    fn test_bare_url() {
        assert_eq!(
            rewrite_autolinks("go to https://example.com now"),
            "go to <a href=\"https://example.com\">https://example.com</a> now"
        );
    }

    #[test]
    fn test_bare_url_trailing_punctuation() {
        assert_eq!(
            rewrite_autolinks("see http://a.io/x."),
            "see <a href=\"http://a.io/x\">http://a.io/x</a>."
        );
    }

    #[test]
    fn test_bare_url_stops_at_tag() {
        assert_eq!(
            rewrite_autolinks("https://a.io<br>"),
            "<a href=\"https://a.io\">https://a.io</a><br>"
        );
    }

    #[test]
    fn test_existing_anchor_untouched() {
        let html = "<a href=\"https://a.io\">https://a.io</a>";
        assert_eq!(rewrite_autolinks(html), html);
        let img = "<img src=\"https://a.io/i.png\" alt=\"\">";
        assert_eq!(rewrite_autolinks(img), img);
    }

    #[test]
    fn test_bare_url_text_escaped() {
        assert_eq!(
            rewrite_autolinks("https://a.io/?x=1&y=2"),
            "<a href=\"https://a.io/?x=1&amp;y=2\">https://a.io/?x=1&amp;y=2</a>"
        );
    }

    #[test]
    fn test_scheme_only_literal() {
        assert_eq!(rewrite_autolinks("https://"), "https://");
    }
}
