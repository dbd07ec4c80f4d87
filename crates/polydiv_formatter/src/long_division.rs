//! Long-division layout as a KaTeX `array`.
//!
//! ```text
//!            quotient
//! divisor ) dividend
//!           product₀      (underlined)
//!           remainder₀
//!              product₁   (underlined)
//!              remainder₁
//! ```
//!
//! Rows are left-aligned; indentation comes from `\phantom{…}` copies of
//! the divisor and of the dividend terms that sit above each row.

use polydiv_engine::{DivisionTrace, StepKind};

use crate::latex::ToLatex;

/// Renders a [`DivisionTrace`] for KaTeX.
pub struct LongDivisionLatex<'a> {
    pub trace: &'a DivisionTrace,
}

impl<'a> LongDivisionLatex<'a> {
    pub fn new(trace: &'a DivisionTrace) -> Self {
        Self { trace }
    }

    /// Generate LaTeX string
    pub fn to_latex(&self) -> String {
        let trace = self.trace;
        let divisor = trace.divisor.to_latex(false);
        let indent = format!("\\phantom{{{divisor})}}");

        let mut out = String::from("\\begin{array}{l}");
        out.push_str(&format!("{indent}{}\\\\", trace.quotient.to_latex(false)));
        out.push_str(&format!(
            "{divisor}{{\\overline{{\\smash{{\\big)}}{}}}}}\\\\",
            trace.dividend.to_latex(false)
        ));

        for (kind, step) in trace.tagged_steps() {
            let margin = self.margin(step.degree());
            let body = step.to_latex(true);
            match kind {
                StepKind::Product => {
                    out.push_str(&format!("{indent}{margin}\\underline{{{body}}}\\\\"))
                }
                StepKind::Remainder => out.push_str(&format!("{indent}{margin}{body}\\\\")),
            }
        }

        out.push_str("\\end{array}");
        out
    }

    /// Invisible copy of the dividend terms whose degree is above `degree`,
    /// so a row starts under the dividend column of its leading term.
    fn margin(&self, degree: u32) -> String {
        let dividend = &self.trace.dividend;
        let hidden: String = (degree + 1..=dividend.degree())
            .rev()
            .filter_map(|d| dividend.term_at(d))
            .map(|term| term.to_latex(true))
            .collect();

        if hidden.is_empty() {
            hidden
        } else {
            format!("\\phantom{{{hidden}}}")
        }
    }
}
