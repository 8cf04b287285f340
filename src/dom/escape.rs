//! HTML escaping for user-supplied text.

use super::Document;

/// Escape `text` for insertion into markup. `None` yields an empty string.
///
/// Delegates to the host's own text serialization, so whatever the host
/// considers markup-significant is neutralized.
pub fn escape_html<D: Document>(document: &D, text: Option<&str>) -> String {
    match text {
        None => String::new(),
        Some(text) => document.escape_text(text),
    }
}

/// The HTML serialization of a text node.
///
/// Matches what browsers produce for `innerHTML` after setting
/// `textContent`: `&`, `<`, `>` and U+00A0 are replaced by entities,
/// quotes are left alone.
pub fn escape_text(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => output.push_str("&amp;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            '\u{a0}' => output.push_str("&nbsp;"),
            _ => output.push(ch),
        }
    }
    output
}
