//! HTML escaping.
//!
//! Markup produced by the passes is trusted; only text lifted out of the
//! Markdown (code bodies, code spans, attribute values, bare URLs) goes
//! through here. The scan jumps with memchr to the first significant byte and
//! bulk-copies the runs between entities.

use memchr::{memchr2, memchr3};

#[inline]
fn entity(b: u8) -> Option<&'static [u8]> {
    match b {
        b'<' => Some(b"&lt;"),
        b'>' => Some(b"&gt;"),
        b'&' => Some(b"&amp;"),
        b'"' => Some(b"&quot;"),
        b'\'' => Some(b"&#39;"),
        _ => None,
    }
}

/// Offset of the first byte in `input` that needs an entity.
#[inline]
fn first_special(input: &[u8]) -> Option<usize> {
    match (memchr3(b'<', b'>', b'&', input), memchr2(b'"', b'\'', input)) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, b) => a.or(b),
    }
}

/// Append `input` to `out`, replacing `<`, `>`, `&`, `"` and `'` with
/// entities.
///
/// # Example
/// ```
/// use markpass::escape::escape_into;
///
/// let mut out = Vec::new();
/// escape_into(&mut out, b"it's <b>\"x\"</b>");
/// assert_eq!(out, b"it&#39;s &lt;b&gt;&quot;x&quot;&lt;/b&gt;");
/// ```
pub fn escape_into(out: &mut Vec<u8>, input: &[u8]) {
    let Some(mut pos) = first_special(input) else {
        out.extend_from_slice(input);
        return;
    };

    out.reserve(input.len() + input.len() / 8);
    out.extend_from_slice(&input[..pos]);
    let mut run_start = pos;
    while pos < input.len() {
        if let Some(entity) = entity(input[pos]) {
            out.extend_from_slice(&input[run_start..pos]);
            out.extend_from_slice(entity);
            run_start = pos + 1;
        }
        pos += 1;
    }
    out.extend_from_slice(&input[run_start..]);
}
