use nom::{
    character::complete::{char, digit0, digit1, one_of},
    combinator::{all_consuming, opt},
    sequence::preceded,
    IResult,
};
use polydiv_math::{PolyOptions, Polynomial, Rational, Term};
use tracing::debug;

use crate::error::ParseError;

// ============================================================================
// Tokenizer
// ============================================================================

/// Split an expression into signed term tokens.
///
/// Whitespace is dropped first. The first character always seeds the first
/// token (so a leading `-` stays attached to it); every later `+` or `-`
/// closes the current token and opens a new one.
///
/// `"-x^2 + 3"` → `["-x^2", "+3"]`
pub fn split_terms(input: &str) -> Vec<String> {
    let mut chars = input.chars().filter(|c| !c.is_whitespace());
    let mut tokens = Vec::new();
    let Some(first) = chars.next() else {
        return tokens;
    };

    let mut current = String::from(first);
    for c in chars {
        if c == '+' || c == '-' {
            tokens.push(std::mem::take(&mut current));
        }
        current.push(c);
    }
    tokens.push(current);
    tokens
}

// ============================================================================
// Term grammar: [sign]? [digits]? [x]? [^digits]?
// ============================================================================

#[derive(Debug)]
struct RawTerm<'a> {
    negative: bool,
    digits: &'a str,
    has_variable: bool,
    exponent: Option<&'a str>,
}

fn raw_term(input: &str) -> IResult<&str, RawTerm<'_>> {
    let (input, sign) = opt(one_of("+-"))(input)?;
    let (input, digits) = digit0(input)?;
    let (input, variable) = opt(one_of("xX"))(input)?;
    let (input, exponent) = opt(preceded(char('^'), digit1))(input)?;
    Ok((
        input,
        RawTerm {
            negative: sign == Some('-'),
            digits,
            has_variable: variable.is_some(),
            exponent,
        },
    ))
}

/// Parse one signed token such as `"-3x^2"`, `"+x"` or `"7"`.
///
/// A missing coefficient defaults to 1 (or -1 after a `-`), a variable
/// without exponent has degree 1, and a bare number is a constant. The
/// exponent sets the degree whether or not the variable is written, so
/// `"2^3"` reads as `2x^3`.
pub fn parse_term(token: &str) -> Result<Term, ParseError> {
    let invalid = || ParseError::InvalidTerm {
        term: token.to_string(),
    };

    let (_, raw) = all_consuming(raw_term)(token).map_err(|_| invalid())?;

    if raw.digits.is_empty() && !raw.has_variable {
        return Err(invalid());
    }
    let magnitude: i64 = if raw.digits.is_empty() {
        1
    } else {
        raw.digits
            .parse()
            .map_err(|_| ParseError::NumberOutOfRange {
                literal: raw.digits.to_string(),
            })?
    };
    let coefficient = if raw.negative { -magnitude } else { magnitude };

    let degree = match raw.exponent {
        Some(exp) => exp.parse::<u32>().map_err(|_| ParseError::NumberOutOfRange {
            literal: exp.to_string(),
        })?,
        None if raw.has_variable => 1,
        None => 0,
    };

    Ok(Term::new(Rational::from_integer(coefficient), degree))
}

/// Parse a polynomial expression, inserting terms left to right.
///
/// Any malformed token fails the whole parse; no partial polynomial is
/// returned.
pub fn parse(input: &str, options: &PolyOptions) -> Result<Polynomial, ParseError> {
    let tokens = split_terms(input);
    if tokens.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let terms = tokens
        .iter()
        .map(|token| parse_term(token))
        .collect::<Result<Vec<_>, _>>()?;

    let mut poly = Polynomial::new();
    for (token, term) in tokens.iter().zip(terms) {
        poly.try_add_term(term, options)
            .map_err(|_| ParseError::CoefficientOverflow {
                term: token.clone(),
            })?;
    }
    debug!(
        input,
        tokens = tokens.len(),
        stored_terms = poly.len(),
        "parsed polynomial"
    );
    Ok(poly)
}
