//! Custom tag escaping
//!
//! A custom tag is bounded, quoted with debug-style escapes and stored
//! without the surrounding quotes. The stored body never contains a
//! bare `"`, `\` or control character, so it can be re-quoted for display
//! without escaping twice.

use super::limits::{TP_MAX_TAG_LEN, TP_MIN_TAG_LEN};
use crate::error::EscapeError;
use tracing::trace;

/// Escape a single custom tag into its canonical stored form
///
/// Tags shorter than [`TP_MIN_TAG_LEN`] are rejected. Tags longer than
/// [`TP_MAX_TAG_LEN`] are cut down to that many characters first.
///
/// # Examples
///
/// ```
/// use tptags::domain::tags::escape_tag;
///
/// assert_eq!(escape_tag("hello").unwrap(), "hello");
/// assert_eq!(escape_tag("say \"hi\"").unwrap(), r#"say \"hi\""#);
/// ```
pub fn escape_tag(tag: &str) -> Result<String, EscapeError> {
    let len = tag.chars().count();
    if len < TP_MIN_TAG_LEN {
        return Err(EscapeError::TooShort);
    }

    let (bounded, kept) = if len > TP_MAX_TAG_LEN {
        trace!(len, max = TP_MAX_TAG_LEN, "truncating custom tag");
        (truncate_chars(tag, TP_MAX_TAG_LEN), TP_MAX_TAG_LEN)
    } else {
        (tag, len)
    };

    let quoted = format!("\"{}\"", escape_body(bounded));

    // Quoting adds at least the two delimiters
    if quoted.chars().count() <= kept {
        return Err(EscapeError::EscapeFailed);
    }

    quoted
        .strip_prefix('"')
        .and_then(|body| body.strip_suffix('"'))
        .map(str::to_string)
        .ok_or(EscapeError::EscapeFailed)
}

/// `s` with `"`, `\` and non-printable characters backslash-escaped
///
/// Printable text is left alone, including combining marks and `'`.
fn escape_body(s: &str) -> String {
    // escape_debug escapes a grapheme extender only in leading position
    let padded = format!(" {}", s);
    let mut escaped = padded.escape_debug().skip(1);

    let mut body = String::with_capacity(s.len());
    while let Some(c) = escaped.next() {
        if c != '\\' {
            body.push(c);
            continue;
        }
        match escaped.next() {
            Some('\'') => body.push('\''),
            Some(next) => {
                body.push('\\');
                body.push(next);
            }
            None => body.push('\\'),
        }
    }
    body
}

/// First `max` characters of `s`
fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((end, _)) => &s[..end],
        None => s,
    }
}
