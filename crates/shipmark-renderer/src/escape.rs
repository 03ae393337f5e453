//! HTML escaping.
//!
//! Escaping is not idempotent: `&` is always encoded, so escaping an already
//! escaped string double-encodes its entities (`&amp;` becomes `&amp;amp;`).

/// Escape HTML special characters.
///
/// # Examples
///
/// ```
/// use shipmark_renderer::escape_html;
///
/// assert_eq!(escape_html("<b>Fish & Chips</b>"), "&lt;b&gt;Fish &amp; Chips&lt;/b&gt;");
/// ```
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    escape_html_into(&mut result, s);
    result
}

/// Escape HTML special characters, appending to `out`.
pub fn escape_html_into(out: &mut String, s: &str) {
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("<script>"), "&lt;script&gt;");
        assert_eq!(escape_html("a & b"), "a &amp; b");
        assert_eq!(escape_html(r#""quoted""#), "&quot;quoted&quot;");
        assert_eq!(escape_html("it's"), "it&#x27;s");
    }

    #[test]
    fn test_escape_html_empty() {
        assert_eq!(escape_html(""), "");
    }

    #[test]
    fn test_escape_html_preserves_unicode() {
        assert_eq!(escape_html("naïve 🚢 ship"), "naïve 🚢 ship");
    }

    #[test]
    fn test_escape_html_preserves_newlines() {
        assert_eq!(escape_html("a\nb"), "a\nb");
    }

    #[test]
    fn test_escape_html_double_encodes() {
        let once = escape_html("Q&A");
        assert_eq!(once, "Q&amp;A");
        assert_eq!(escape_html(&once), "Q&amp;amp;A");
    }

    #[test]
    fn test_escape_html_into_appends() {
        let mut out = "<p>".to_owned();
        escape_html_into(&mut out, "1 < 2");
        assert_eq!(out, "<p>1 &lt; 2");
    }
}
