//! Output formats and the plain-text report.

use std::fmt::Write;

use clap::ValueEnum;
use polydiv_engine::DivisionTrace;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Quotient and remainder in plain notation
    #[default]
    Text,
    /// KaTeX long-division layout
    Latex,
    /// Machine-readable result
    Json,
    /// Standalone page rendered with KaTeX
    Html,
}

/// Render the quotient and remainder, optionally followed by every round.
pub fn format_text(trace: &DivisionTrace, show_steps: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Quotient:  {}", trace.quotient);
    let _ = writeln!(out, "Remainder: {}", trace.remainder);

    if show_steps {
        if trace.steps.is_empty() {
            let _ = writeln!(out, "No steps: the dividend is already a remainder.");
            return out;
        }
        let _ = writeln!(out, "Steps:");
        for round in trace.iterations() {
            let _ = writeln!(out, "{}. quotient term {}", round.index + 1, round.quotient_term);
            let _ = writeln!(out, "   subtract   {}", round.product);
            let _ = writeln!(out, "   remainder  {}", round.remainder);
        }
    }
    out
}
