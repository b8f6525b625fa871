//! Small utilities shared across the crate.

pub mod config;

use std::fmt::Write;

use serde_json::Value;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// What: Percent-encode a string for use in URLs according to RFC 3986.
///
/// Inputs:
/// - `input`: String to encode.
///
/// Output:
/// - Returns a percent-encoded string where reserved characters are escaped.
///
/// Details:
/// - Unreserved characters as per RFC 3986 (`A-Z`, `a-z`, `0-9`, `-`, `.`, `_`, `~`) are
///   left as-is.
/// - Space is encoded as `%20` (not `+`).
/// - All other bytes are encoded as two uppercase hexadecimal digits prefixed by `%`.
#[must_use]
pub fn percent_encode(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for &b in input.as_bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                out.push(b as char);
            }
            b' ' => out.push_str("%20"),
            _ => {
                out.push('%');
                let _ = write!(out, "{b:02X}");
            }
        }
    }
    out
}

/// What: Extract a trimmed, non-empty string field from a JSON object.
///
/// Inputs:
/// - `v`: JSON object.
/// - `key`: Field name.
///
/// Output:
/// - `Some(text)` when the field is a non-blank string; `None` for missing, null or blank.
///
/// Details:
/// - TheMealDB uses `""`, `" "` and `null` interchangeably for absent values.
#[must_use]
pub fn opt_s(v: &Value, key: &str) -> Option<String> {
    v.get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Like [`opt_s`] but defaults to an empty string.
#[must_use]
pub fn s(v: &Value, key: &str) -> String {
    opt_s(v, key).unwrap_or_default()
}

/// What: Truncate `text` to fit `max_width` terminal columns.
///
/// Inputs:
/// - `text`: Text to fit.
/// - `max_width`: Available columns.
///
/// Output:
/// - `text` unchanged when it fits, else a prefix ending in `…`.
#[must_use]
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0usize;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w + 1 > max_width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}
