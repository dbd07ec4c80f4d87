use polydiv_engine::{PolyOptions, Polynomial, Rational, Term};
use proptest::prelude::*;

pub fn arb_term() -> impl Strategy<Value = Term> {
    (-9i64..=9, 0u32..=6).prop_map(|(c, d)| Term::new(Rational::from_integer(c), d))
}

pub fn arb_terms() -> impl Strategy<Value = Vec<Term>> {
    prop::collection::vec(arb_term(), 1..8)
}

pub fn arb_polynomial(options: PolyOptions) -> impl Strategy<Value = Polynomial> {
    arb_terms().prop_map(move |terms| Polynomial::from_terms(terms, &options))
}

/// Divisors with at least one non-zero term.
pub fn arb_divisor(options: PolyOptions) -> impl Strategy<Value = Polynomial> {
    arb_polynomial(options).prop_filter("divisor must be non-zero", |p| !p.is_zero())
}

pub fn arb_rational() -> impl Strategy<Value = Rational> {
    (-50i64..=50, 1i64..=50).prop_map(|(n, d)| Rational::new(n, d).unwrap())
}

/// Source text such as `-3x^2+x-7`, built from random terms.
pub fn arb_expression() -> impl Strategy<Value = String> {
    arb_terms().prop_map(|terms| {
        let mut out = String::new();
        for (i, term) in terms.iter().enumerate() {
            let c = term.coefficient.numerator();
            if c < 0 {
                out.push('-');
            } else if i > 0 {
                out.push('+');
            }
            out.push_str(&c.abs().to_string());
            match term.degree {
                0 => {}
                1 => out.push('x'),
                d => out.push_str(&format!("x^{d}")),
            }
        }
        out
    })
}
