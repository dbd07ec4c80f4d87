//! Standalone HTML page for a long division, rendered client-side by KaTeX.

use polydiv_engine::DivisionTrace;

use crate::escape::html_escape;
use crate::latex::ToLatex;
use crate::long_division::LongDivisionLatex;

const KATEX_VERSION: &str = "0.16.9";

pub struct LongDivisionHtml<'a> {
    trace: &'a DivisionTrace,
    title: String,
}

impl<'a> LongDivisionHtml<'a> {
    pub fn new(trace: &'a DivisionTrace) -> Self {
        let title = format!("({}) ÷ ({})", trace.dividend, trace.divisor);
        Self { trace, title }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn to_html(&self) -> String {
        let mut html = Self::html_header(&self.title);

        let layout = LongDivisionLatex::new(self.trace).to_latex();
        html.push_str(&Self::math_block("long-division", &layout));

        let summary = format!(
            "q(x) = {} \\qquad r(x) = {}",
            self.trace.quotient.to_latex(false),
            self.trace.remainder.to_latex(false)
        );
        html.push_str(&Self::math_block("summary", &summary));

        html.push_str(Self::html_footer());
        html
    }

    /// The markup goes into a data attribute and is rendered by the footer
    /// script, so it never has to be escaped for a JS string literal.
    fn math_block(class: &str, latex: &str) -> String {
        format!(
            "    <div class=\"math {class}\" data-tex=\"{}\"></div>\n",
            html_escape(latex)
        )
    }

    fn html_header(title: &str) -> String {
        let escaped_title = html_escape(title);
        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Long division: {escaped_title}</title>
    <link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/katex@{KATEX_VERSION}/dist/katex.min.css">
    <script src="https://cdn.jsdelivr.net/npm/katex@{KATEX_VERSION}/dist/katex.min.js"></script>
    <style>
        body {{
            font-family: system-ui, sans-serif;
            margin: 1.5rem;
        }}
        .math {{
            margin: 1rem 0;
        }}
    </style>
</head>
<body>
    <h1>{escaped_title}</h1>
"#
        )
    }

    fn html_footer() -> &'static str {
        r##"    <script>
        document.querySelectorAll(".math").forEach(function (el) {
            katex.render(el.dataset.tex, el, {
                displayMode: true,
                throwOnError: true,
                errorColor: "#cc0000",
                strict: "warn",
                output: "htmlAndMathml",
                trust: false
            });
        });
    </script>
</body>
</html>
"##
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polydiv_engine::{divide_str, PolyOptions};

    #[test]
    fn test_html_generation() {
        let trace = divide_str("x^2-1", "x-1", &PolyOptions::default()).unwrap();
        let html = LongDivisionHtml::new(&trace).to_html();

        assert!(html.contains("<!DOCTYPE html"));
        assert!(html.contains("katex.min.js"));
        assert!(html.contains("class=\"math long-division\""));
        assert!(html.contains("data-tex=\"\\begin{array}{l}"));
        assert!(html.contains("q(x) = x+1"));
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn test_title_is_escaped() {
        let trace = divide_str("x", "1", &PolyOptions::default()).unwrap();
        let html = LongDivisionHtml::new(&trace)
            .with_title("<b>homework</b>")
            .to_html();
        assert!(html.contains("&lt;b&gt;homework&lt;/b&gt;"));
        assert!(!html.contains("<b>homework"));
    }
}
