//! Context-specific escaping.
//!
//! Every user-supplied string goes through one of these before it is
//! written into the fragment.

use std::borrow::Cow;

fn replace_chars<'a>(s: &'a str, table: &[(char, &str)]) -> Cow<'a, str> {
    if !s.chars().any(|c| table.iter().any(|(from, _)| *from == c)) {
        return Cow::Borrowed(s);
    }
    let mut out = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match table.iter().find(|(from, _)| *from == c) {
            Some((_, to)) => out.push_str(to),
            None => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Escapes element text: `&`, `<`, `>`.
pub fn escape_text(s: &str) -> Cow<'_, str> {
    replace_chars(s, &[('&', "&amp;"), ('<', "&lt;"), ('>', "&gt;")])
}

/// Escapes a double-quoted attribute value: `&`, `"`, `<`, `>`.
pub fn escape_attr(s: &str) -> Cow<'_, str> {
    replace_chars(
        s,
        &[('&', "&amp;"), ('"', "&quot;"), ('<', "&lt;"), ('>', "&gt;")],
    )
}

/// Escapes serialized JSON for a `<script>` element.
///
/// `<`, `>` and `&` only occur inside JSON strings, where the `\uXXXX` forms
/// are equivalent, so the document still parses to the same value.
pub fn escape_json_ld(json: &str) -> Cow<'_, str> {
    replace_chars(
        json,
        &[('<', "\\u003c"), ('>', "\\u003e"), ('&', "\\u0026")],
    )
}
