//! HTML escaping primitives.
//!
//! Two contexts are covered:
//!
//! - [`escape_html`] for text and quoted attribute values that are not URLs
//! - [`escape_href`] for URLs (`href`, `src`) and header-derived ids
//!
//! Both append to a [`Buffer`] and never fail.

use memchr::memchr2;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_encode};

use crate::buffer::Buffer;

/// Bytes that are percent-encoded inside a URL.
///
/// Reserved URL characters are left alone so links keep their meaning.
/// `&` and `'` pass through the percent encoder and are turned into
/// entities afterwards.
const HREF_ENCODE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'+')
    .remove(b'!')
    .remove(b'*')
    .remove(b'(')
    .remove(b')')
    .remove(b',')
    .remove(b'%')
    .remove(b'#')
    .remove(b'@')
    .remove(b'?')
    .remove(b'=')
    .remove(b';')
    .remove(b':')
    .remove(b'/')
    .remove(b'$')
    .remove(b'~')
    .remove(b'&')
    .remove(b'\'');

/// Escape bytes for an HTML text context.
///
/// Replaces `&`, `<`, `>`, `"` and `'` with entities. Everything else,
/// including non-ASCII bytes, is copied through.
///
/// # Examples
///
/// ```
/// use quire::{Buffer, escape_html};
///
/// let mut ob = Buffer::new();
/// escape_html(&mut ob, b"a < b && \"c\"");
/// assert_eq!(ob.as_bytes(), b"a &lt; b &amp;&amp; &quot;c&quot;");
/// ```
pub fn escape_html(ob: &mut Buffer, src: &[u8]) {
    let mut start = 0;
    for (i, &byte) in src.iter().enumerate() {
        let entity = match byte {
            b'&' => "&amp;",
            b'<' => "&lt;",
            b'>' => "&gt;",
            b'"' => "&quot;",
            b'\'' => "&#39;",
            _ => continue,
        };
        ob.put(&src[start..i]);
        ob.puts(entity);
        start = i + 1;
    }
    ob.put(&src[start..]);
}

/// Escape bytes for a URL attribute context.
///
/// Alphanumerics and URL punctuation (`-_.+!*(),%#@?=;:/$~`) are kept,
/// `&` becomes `&amp;`, `'` becomes `&#x27;` and every other byte is
/// percent-encoded.
///
/// # Examples
///
/// ```
/// use quire::{Buffer, escape_href};
///
/// let mut ob = Buffer::new();
/// escape_href(&mut ob, b"https://example.com/a b?x=1&y=2");
/// assert_eq!(ob.as_bytes(), b"https://example.com/a%20b?x=1&amp;y=2");
/// ```
pub fn escape_href(ob: &mut Buffer, src: &[u8]) {
    for chunk in percent_encode(src, HREF_ENCODE) {
        let mut rest = chunk.as_bytes();
        while let Some(i) = memchr2(b'&', b'\'', rest) {
            ob.put(&rest[..i]);
            ob.puts(if rest[i] == b'&' { "&amp;" } else { "&#x27;" });
            rest = &rest[i + 1..];
        }
        ob.put(rest);
    }
}
