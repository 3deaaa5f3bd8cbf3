//! HTML escaping for user-supplied text.

/// Escapes the five characters that can break out of HTML text or
/// attribute context: `& < > " '`.
///
/// Ampersand is replaced first so already-escaped entities are not
/// double-processed out of order.
///
/// # Examples
///
/// ```
/// use vitrine_core::escape_html;
///
/// assert_eq!(escape_html("Flour & Co"), "Flour &amp; Co");
/// assert_eq!(escape_html("<script>"), "&lt;script&gt;");
/// ```
pub fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
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
