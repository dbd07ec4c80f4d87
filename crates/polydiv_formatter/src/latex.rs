//! KaTeX rendering of terms and polynomials.

use polydiv_math::{Polynomial, Term};

/// Render as KaTeX markup.
///
/// `explicit_sign` forces a leading `+` on a non-negative first term, which
/// the long-division layout needs so every row lines up on its sign.
pub trait ToLatex {
    fn to_latex(&self, explicit_sign: bool) -> String;
}

impl ToLatex for Term {
    fn to_latex(&self, explicit_sign: bool) -> String {
        let mut out = String::new();
        if self.coefficient.is_negative() {
            out.push('-');
        } else if explicit_sign {
            out.push('+');
        }
        push_unsigned(&mut out, self);
        out
    }
}

impl ToLatex for Polynomial {
    /// Zero terms before the first non-zero one are skipped; zero terms after
    /// it are kept as `+0x^{k}` placeholders. All-zero renders as `0`.
    fn to_latex(&self, explicit_sign: bool) -> String {
        let mut out = String::new();
        let mut started = false;
        for term in self.terms() {
            if !started && term.is_zero() {
                continue;
            }
            out.push_str(&term.to_latex(started || explicit_sign));
            started = true;
        }
        if !started {
            out.push('0');
        }
        out
    }
}

fn push_unsigned(out: &mut String, term: &Term) {
    let numerator = term.coefficient.numerator().unsigned_abs();
    let denominator = term.coefficient.denominator();

    if denominator != 1 {
        out.push_str(&format!("\\frac{{{numerator}}}{{{denominator}}}"));
    } else if numerator != 1 || term.degree == 0 {
        out.push_str(&numerator.to_string());
    }

    match term.degree {
        0 => {}
        1 => out.push('x'),
        d => out.push_str(&format!("x^{{{d}}}")),
    }
}
