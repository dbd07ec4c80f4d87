use serde::{Deserialize, Serialize};

/// Role of an entry in [`crate::DivisionTrace::steps`].
///
/// Steps alternate: even indices hold the product that is subtracted
/// (divisor × quotient term), odd indices the remainder left afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StepKind {
    Product,
    Remainder,
}

impl StepKind {
    pub fn of_index(index: usize) -> Self {
        if index % 2 == 0 {
            StepKind::Product
        } else {
            StepKind::Remainder
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StepKind::Product => "subtract",
            StepKind::Remainder => "remainder",
        }
    }
}
