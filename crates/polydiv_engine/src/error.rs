use polydiv_parser::ParseError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("invalid dividend: {0}")]
    Dividend(#[source] ParseError),
    #[error("invalid divisor: {0}")]
    Divisor(#[source] ParseError),
    /// A coefficient left the `i64` range (or a degree left `u32`) while
    /// eliminating the leading term in round `round`.
    #[error("coefficient overflow in division round {round}")]
    Overflow { round: usize },
}

impl EngineError {
    /// The underlying parse failure, whichever operand it came from.
    pub fn parse_error(&self) -> Option<&ParseError> {
        match self {
            EngineError::Dividend(e) | EngineError::Divisor(e) => Some(e),
            EngineError::Overflow { .. } => None,
        }
    }
}
