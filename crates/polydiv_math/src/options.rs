//! Options controlling how terms are merged into a polynomial.

use serde::{Deserialize, Serialize};

/// Insertion options threaded through parsing, term insertion and division.
///
/// - `fill_gaps = true` (default): after a term is spliced in, every degree
///   between two neighbouring terms gets an explicit zero-coefficient term,
///   so `x^3+1` is stored as `x^3 + 0x^2 + 0x + 1`.
/// - `fill_gaps = false`: only the degrees that were actually written are kept.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct PolyOptions {
    pub fill_gaps: bool,
}

impl Default for PolyOptions {
    fn default() -> Self {
        Self { fill_gaps: true }
    }
}

impl PolyOptions {
    /// Options that keep the term sequence sparse.
    pub const fn sparse() -> Self {
        Self { fill_gaps: false }
    }

    /// Options that fill every missing intermediate degree.
    pub const fn dense() -> Self {
        Self { fill_gaps: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_fills_gaps() {
        assert!(PolyOptions::default().fill_gaps);
        assert!(!PolyOptions::sparse().fill_gaps);
    }

    #[test]
    fn missing_field_uses_default() {
        let opts: PolyOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(opts, PolyOptions::dense());
    }
}
