//! Exact-rational univariate polynomial algebra.
//!
//! This crate holds the value types the long-division engine works on:
//! [`Rational`] coefficients kept in lowest terms, [`Term`] monomials and
//! [`Polynomial`]s whose terms are ordered by strictly decreasing degree.

pub mod error;
pub mod options;
pub mod polynomial;
pub mod rational;
pub mod term;

pub use error::{OverflowError, PolynomialError, RationalError};
pub use options::PolyOptions;
pub use polynomial::Polynomial;
pub use rational::Rational;
pub use term::Term;
