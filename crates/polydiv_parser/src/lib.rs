pub mod error;
pub mod parser;

pub use error::ParseError;
pub use parser::{parse, parse_term, split_terms};
