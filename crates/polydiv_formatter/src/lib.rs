//! Presentation layer for the long-division engine.
//!
//! Renders terms and polynomials as KaTeX markup ([`ToLatex`]), lays out a
//! whole [`polydiv_engine::DivisionTrace`] as a long-division array
//! ([`LongDivisionLatex`]) and wraps it in a standalone page
//! ([`LongDivisionHtml`]).

pub mod escape;
pub mod html;
pub mod latex;
pub mod long_division;

pub use escape::html_escape;
pub use html::LongDivisionHtml;
pub use latex::ToLatex;
pub use long_division::LongDivisionLatex;
