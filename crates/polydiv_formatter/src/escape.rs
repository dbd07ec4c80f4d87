/// Escape text for use in HTML element content or a quoted attribute value.
pub fn html_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_escape() {
        assert_eq!(html_escape("<script>"), "&lt;script&gt;");
        assert_eq!(html_escape("x & y"), "x &amp; y");
        assert_eq!(html_escape("data-tex=\"a\""), "data-tex=&quot;a&quot;");
    }

    #[test]
    fn test_tex_passes_through() {
        assert_eq!(html_escape(r"\frac{1}{2}x^{3}"), r"\frac{1}{2}x^{3}");
    }
}
