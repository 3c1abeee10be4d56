//! HTML fragment writer shared by the passes.
//!
//! Passes rewrite text line by line, so tag helpers never append a newline;
//! callers decide where line boundaries go.

use crate::escape;

/// HTML output writer with a pre-allocated buffer.
///
/// # Example
/// ```
/// use markpass::HtmlWriter;
///
/// let mut writer = HtmlWriter::with_capacity_for(64);
/// writer.code_block_start(Some("html"));
/// writer.write_escaped(b"<b>'x'</b>");
/// writer.code_block_end();
///
/// assert_eq!(
///     writer.into_string(),
///     "<pre><code class=\"language-html\">&lt;b&gt;&#39;x&#39;&lt;/b&gt;</code></pre>"
/// );
/// ```
pub struct HtmlWriter {
    out: Vec<u8>,
}

impl HtmlWriter {
    /// Create a new writer with default capacity.
    #[inline]
    pub fn new() -> Self {
        Self {
            out: Vec::with_capacity(256),
        }
    }

    /// Create with pre-allocated capacity based on expected input size.
    ///
    /// Rewritten text is typically ~1.25x the input.
    #[inline]
    pub fn with_capacity_for(input_len: usize) -> Self {
        Self {
            out: Vec::with_capacity(input_len + input_len / 4),
        }
    }

    /// Write a static string (compile-time known).
    #[inline]
    pub fn write_str(&mut self, s: &'static str) {
        self.out.extend_from_slice(s.as_bytes());
    }

    /// Write a dynamic string without escaping.
    #[inline]
    pub fn write_string(&mut self, s: &str) {
        self.out.extend_from_slice(s.as_bytes());
    }

    /// Write a single ASCII byte.
    #[inline]
    pub(crate) fn write_byte(&mut self, b: u8) {
        debug_assert!(b.is_ascii());
        self.out.push(b);
    }

    /// Write an attribute value, code body or URL with full escaping
    /// (including quotes).
    #[inline]
    pub fn write_escaped(&mut self, text: &[u8]) {
        escape::escape_into(&mut self.out, text);
    }

    /// Write a newline.
    #[inline]
    pub fn newline(&mut self) {
        self.out.push(b'\n');
    }

    /// Write a blank line separator (two newlines).
    #[inline]
    pub fn blank_line(&mut self) {
        self.out.extend_from_slice(b"\n\n");
    }

    /// Check if output is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.out.is_empty()
    }

    /// Get output as str.
    #[inline]
    pub fn as_str(&self) -> &str {
        // SAFETY: only valid UTF-8 is ever written (ASCII markup, escaped
        // ASCII entities, and slices of `&str` inputs).
        unsafe { std::str::from_utf8_unchecked(&self.out) }
    }

    /// Take ownership as String.
    #[inline]
    pub fn into_string(self) -> String {
        // SAFETY: see `as_str`.
        unsafe { String::from_utf8_unchecked(self.out) }
    }

    // --- Block elements ---

    /// Write `<hN id="slug">content</hN>`.
    pub fn heading(&mut self, level: u8, id: &str, content: &str) {
        debug_assert!((1..=6).contains(&level));
        self.write_str("<h");
        self.write_byte(b'0' + level);
        self.write_str(" id=\"");
        self.write_escaped(id.as_bytes());
        self.write_str("\">");
        self.write_string(content);
        self.write_str("</h");
        self.write_byte(b'0' + level);
        self.write_byte(b'>');
    }

    /// Write `<blockquote>content</blockquote>`.
    pub fn blockquote(&mut self, content: &str) {
        self.write_str("<blockquote>");
        self.write_string(content);
        self.write_str("</blockquote>");
    }

    /// Write code block start with optional language class.
    pub fn code_block_start(&mut self, lang: Option<&str>) {
        match lang {
            Some(l) if !l.is_empty() => {
                self.write_str("<pre><code class=\"language-");
                self.write_escaped(l.as_bytes());
                self.write_str("\">");
            }
            _ => self.write_str("<pre><code>"),
        }
    }

    /// Write code block end: `</code></pre>`
    #[inline]
    pub fn code_block_end(&mut self) {
        self.write_str("</code></pre>");
    }

    /// Write thematic break: `<hr>`
    #[inline]
    pub fn thematic_break(&mut self) {
        self.write_str("<hr>");
    }

    /// Write `<p>content</p>`.
    pub fn paragraph(&mut self, content: &str) {
        self.write_str("<p>");
        self.write_string(content);
        self.write_str("</p>");
    }

    /// Write list start (unordered): `<ul>`
    #[inline]
    pub fn ul_start(&mut self) {
        self.write_str("<ul>");
    }

    /// Write list end (unordered): `</ul>`
    #[inline]
    pub fn ul_end(&mut self) {
        self.write_str("</ul>");
    }

    /// Write list start (ordered): `<ol>` or `<ol start="N">`
    pub fn ol_start(&mut self, start: Option<u32>) {
        match start {
            Some(n) if n != 1 => {
                self.write_str("<ol start=\"");
                self.write_u32(n);
                self.write_str("\">");
            }
            _ => self.write_str("<ol>"),
        }
    }

    /// Write list end (ordered): `</ol>`
    #[inline]
    pub fn ol_end(&mut self) {
        self.write_str("</ol>");
    }

    /// Write `<li>content</li>`.
    pub fn list_item(&mut self, content: &str) {
        self.write_str("<li>");
        self.write_string(content);
        self.write_str("</li>");
    }

    /// Write one table row; `align` entries pair up with `cells` by index.
    pub fn table_row(&mut self, cells: &[&str], header: bool, align: &[Option<&'static str>]) {
        let tag = if header { "th" } else { "td" };
        self.write_str("<tr>");
        for (i, cell) in cells.iter().enumerate() {
            self.write_byte(b'<');
            self.write_str(tag);
            if let Some(&Some(a)) = align.get(i) {
                self.write_str(" align=\"");
                self.write_str(a);
                self.write_byte(b'"');
            }
            self.write_byte(b'>');
            self.write_string(cell);
            self.write_str("</");
            self.write_str(tag);
            self.write_byte(b'>');
        }
        self.write_str("</tr>");
    }

    // --- Inline elements ---

    /// Write inline code: `<code>content</code>`, escaped or verbatim.
    pub fn inline_code(&mut self, content: &str, escape: bool) {
        self.write_str("<code>");
        if escape {
            self.write_escaped(content.as_bytes());
        } else {
            self.write_string(content);
        }
        self.write_str("</code>");
    }

    /// Write `<a href="url" title="t">text</a>`.
    pub fn link(&mut self, url: &str, title: Option<&str>, text: &str) {
        self.write_str("<a href=\"");
        self.write_escaped(url.as_bytes());
        if let Some(t) = title {
            self.write_str("\" title=\"");
            self.write_escaped(t.as_bytes());
        }
        self.write_str("\">");
        self.write_string(text);
        self.write_str("</a>");
    }

    /// Write `<a href="url">url</a>`, escaping the URL in both places.
    pub fn autolink(&mut self, url: &str) {
        self.write_str("<a href=\"");
        self.write_escaped(url.as_bytes());
        self.write_str("\">");
        self.write_escaped(url.as_bytes());
        self.write_str("</a>");
    }

    /// Write `<img src="src" alt="alt" title="t">`.
    pub fn image(&mut self, src: &str, alt: &str, title: Option<&str>) {
        self.write_str("<img src=\"");
        self.write_escaped(src.as_bytes());
        self.write_str("\" alt=\"");
        self.write_escaped(alt.as_bytes());
        if let Some(t) = title {
            self.write_str("\" title=\"");
            self.write_escaped(t.as_bytes());
        }
        self.write_str("\">");
    }

    /// Write line break: `<br>`
    #[inline]
    pub fn line_break(&mut self) {
        self.write_str("<br>");
    }

    /// Write a u32 as decimal.
    fn write_u32(&mut self, mut n: u32) {
        if n == 0 {
            self.write_byte(b'0');
            return;
        }

        let mut buf = [0u8; 10]; // Max digits for u32
        let mut i = buf.len();

        while n > 0 {
            i -= 1;
            buf[i] = b'0' + (n % 10) as u8;
            n /= 10;
        }

        self.out.extend_from_slice(&buf[i..]);
    }
}

impl Default for HtmlWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writer_new() {
        let writer = HtmlWriter::new();
        assert!(writer.is_empty());
    }

    #[test]
    fn test_writer_capacity() {
        let writer = HtmlWriter::with_capacity_for(1000);
        assert!(writer.out.capacity() >= 1250);
    }

    #[test]
    fn test_writer_heading() {
        let mut writer = HtmlWriter::new();
        writer.heading(2, "hello-world", "Hello, World!");
        assert_eq!(writer.as_str(), "<h2 id=\"hello-world\">Hello, World!</h2>");
    }

    #[test]
    fn test_writer_code_block() {
        let mut writer = HtmlWriter::new();
        writer.code_block_start(Some("rust"));
        writer.write_escaped(b"fn main() {}\n");
        writer.code_block_end();
        assert_eq!(
            writer.as_str(),
            "<pre><code class=\"language-rust\">fn main() {}\n</code></pre>"
        );
    }

    #[test]
    fn test_writer_code_block_no_lang() {
        let mut writer = HtmlWriter::new();
        writer.code_block_start(None);
        writer.code_block_end();
        assert_eq!(writer.as_str(), "<pre><code></code></pre>");
    }

    #[test]
    fn test_writer_link_with_title() {
        let mut writer = HtmlWriter::new();
        writer.link("/a?b=1&c=2", Some("say \"hi\""), "text");
        assert_eq!(
            writer.as_str(),
            "<a href=\"/a?b=1&amp;c=2\" title=\"say &quot;hi&quot;\">text</a>"
        );
    }

    #[test]
    fn test_writer_image() {
        let mut writer = HtmlWriter::new();
        writer.image("cat.png", "A cat", None);
        assert_eq!(writer.as_str(), "<img src=\"cat.png\" alt=\"A cat\">");
    }

    #[test]
    fn test_writer_inline_code_modes() {
        let mut writer = HtmlWriter::new();
        writer.inline_code("<b>", true);
        writer.inline_code("<b>", false);
        assert_eq!(writer.as_str(), "<code>&lt;b&gt;</code><code><b></code>");
    }

    #[test]
    fn test_writer_ol_with_start() {
        let mut writer = HtmlWriter::new();
        writer.ol_start(Some(42));
        assert_eq!(writer.as_str(), "<ol start=\"42\">");
    }

    #[test]
    fn test_writer_ol_default_start() {
        let mut writer = HtmlWriter::new();
        writer.ol_start(Some(1));
        writer.ol_start(None);
        assert_eq!(writer.as_str(), "<ol><ol>");
    }

    #[test]
    fn test_writer_table_row_alignment() {
        let mut writer = HtmlWriter::new();
        writer.table_row(&["a", "b"], true, &[None, Some("right")]);
        assert_eq!(
            writer.as_str(),
            "<tr><th>a</th><th align=\"right\">b</th></tr>"
        );
    }

    #[test]
    fn test_write_u32() {
        let mut writer = HtmlWriter::new();
        writer.write_u32(0);
        writer.write_byte(b' ');
        writer.write_u32(4_294_967_295);
        assert_eq!(writer.as_str(), "0 4294967295");
    }

    #[test]
    fn test_writer_autolink_escapes_text() {
        let mut writer = HtmlWriter::new();
        writer.autolink("https://a.io/?x=1&y=2");
        assert_eq!(
            writer.as_str(),
            "<a href=\"https://a.io/?x=1&amp;y=2\">https://a.io/?x=1&amp;y=2</a>"
        );
    }

    #[test]
    fn test_writer_void_elements() {
        let mut writer = HtmlWriter::new();
        writer.thematic_break();
        writer.line_break();
        assert_eq!(writer.as_str(), "<hr><br>");
    }
}
