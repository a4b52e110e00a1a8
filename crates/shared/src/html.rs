//! Minimal HTML escaping for user-provided text embedded in email bodies.

/// Escapes the five characters that are significant in HTML text and
/// attribute values.
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escapes text and turns line breaks into `<br>` so multi-line messages keep
/// their shape in an HTML body.
pub fn escape_multiline(input: &str) -> String {
    escape(input).replace("\r\n", "\n").replace('\n', "<br>\n")
}
