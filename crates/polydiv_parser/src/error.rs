use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Parse error: empty expression")]
    EmptyInput,
    #[error("Parse error: invalid term '{term}'")]
    InvalidTerm { term: String },
    #[error("Parse error: number out of range '{literal}'")]
    NumberOutOfRange { literal: String },
    #[error("Parse error: coefficient overflow when combining '{term}'")]
    CoefficientOverflow { term: String },
}
