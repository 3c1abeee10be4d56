use markpass::{Options, to_html, to_html_with_options};

fn html_unique_ids(input: &str) -> String {
    let options = Options {
        unique_heading_ids: true,
        ..Options::default()
    };
    to_html_with_options(input, &options)
}

#[test]
fn test_basic_heading_id() {
    let html = to_html("# Hello World");
    assert_eq!(html, "<h1 id=\"hello-world\">Hello World</h1>");
}

#[test]
fn test_punctuation_dropped() {
    let html = to_html("## Hello, World!");
    assert_eq!(html, "<h2 id=\"hello-world\">Hello, World!</h2>");
}

#[test]
fn test_heading_with_emphasis() {
    let html = to_html("## Hello **World**");
    assert_eq!(
        html,
        "<h2 id=\"hello-world\">Hello <strong>World</strong></h2>"
    );
}

#[test]
fn test_heading_with_code() {
    let html = to_html("## The `code` function");
    assert_eq!(
        html,
        "<h2 id=\"the-code-function\">The <code>code</code> function</h2>"
    );
}

#[test]
fn test_heading_with_entity() {
    let html = to_html("# Fish &amp; Chips");
    assert!(html.contains("id=\"fish-chips\""), "Got: {html}");
}

#[test]
fn test_duplicate_headings_share_id_by_default() {
    let html = to_html("# Hello\n\n# Hello");
    assert_eq!(html.matches("id=\"hello\"").count(), 2, "Got: {html}");
}

#[test]
fn test_duplicate_headings_unique() {
    let html = html_unique_ids("# Hello\n\n# Hello\n\n# Hello");
    assert!(html.contains("id=\"hello\""), "First heading");
    assert!(html.contains("id=\"hello-1\""), "Second heading: {html}");
    assert!(html.contains("id=\"hello-2\""), "Third heading: {html}");
}

#[test]
fn test_generated_suffix_not_reused() {
    let html = html_unique_ids("# Intro\n\n# Intro\n\n# Intro 1");
    assert!(html.contains("id=\"intro-1\""), "Got: {html}");
    assert!(html.contains("id=\"intro-1-1\""), "Got: {html}");
}

#[test]
fn test_heading_preserves_unicode() {
    let html = to_html("# Héllo Wörld");
    assert!(html.contains("id=\"héllo-wörld\""), "Got: {html}");
}

#[test]
fn test_heading_underscore_hyphen() {
    let html = to_html("# foo_bar-baz");
    assert_eq!(html, "<h1 id=\"foo_bar-baz\">foo_bar-baz</h1>");
}

#[test]
fn test_empty_slug_fallback() {
    let html = to_html("# !!!");
    assert_eq!(html, "<h1 id=\"heading\">!!!</h1>");
}
