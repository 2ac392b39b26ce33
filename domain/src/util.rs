//! Shared utility functions.

/// Truncate a string to approximately `max_bytes` without splitting a UTF-8
/// character boundary.
///
/// Returns a sub-slice of the original string. If the string is shorter than
/// `max_bytes`, the entire string is returned unchanged.
pub fn truncate_str(s: &str, max_bytes: usize) -> &str {
    if s.len() <= max_bytes {
        return s;
    }
    let mut end = max_bytes;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

/// Remove up to `max_count` occurrences of an ASCII `keyword`, ignoring
/// ASCII case. Everything else in `text` is kept byte for byte.
pub fn strip_keyword(text: &str, keyword: &str, max_count: usize) -> String {
    if keyword.is_empty() {
        return text.to_string();
    }
    // ASCII lowering keeps byte offsets aligned with `text`.
    let lowered = text.to_ascii_lowercase();
    let needle = keyword.to_ascii_lowercase();

    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;
    let mut removed = 0;
    while removed < max_count {
        let Some(found) = lowered[cursor..].find(&needle) else {
            break;
        };
        let start = cursor + found;
        out.push_str(&text[cursor..start]);
        cursor = start + needle.len();
        removed += 1;
    }
    out.push_str(&text[cursor..]);
    out
}

/// Whether `text` contains `keyword`, ignoring ASCII case
pub fn contains_keyword(text: &str, keyword: &str) -> bool {
    text.to_ascii_lowercase()
        .contains(&keyword.to_ascii_lowercase())
}
