//! JSON output types for `--format json`.

use polydiv_engine::DivisionTrace;
use polydiv_formatter::LongDivisionLatex;
use serde::Serialize;

/// A successful division
#[derive(Serialize, Debug)]
pub struct DivisionJsonOutput {
    pub ok: bool,
    pub dividend: String,
    pub divisor: String,
    pub quotient: String,
    pub remainder: String,
    pub steps: Vec<StepJson>,
    /// KaTeX long-division layout
    pub latex: String,
}

/// One entry of the alternating product/remainder sequence
#[derive(Serialize, Debug)]
pub struct StepJson {
    /// "subtract" | "remainder"
    pub kind: &'static str,
    pub polynomial: String,
}

impl DivisionJsonOutput {
    pub fn from_trace(trace: &DivisionTrace) -> Self {
        Self {
            ok: true,
            dividend: trace.dividend.to_string(),
            divisor: trace.divisor.to_string(),
            quotient: trace.quotient.to_string(),
            remainder: trace.remainder.to_string(),
            steps: trace
                .tagged_steps()
                .map(|(kind, step)| StepJson {
                    kind: kind.label(),
                    polynomial: step.to_string(),
                })
                .collect(),
            latex: LongDivisionLatex::new(trace).to_latex(),
        }
    }
}

/// An error result
#[derive(Serialize, Debug)]
pub struct ErrorJsonOutput {
    pub ok: bool,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<String>,
}

impl ErrorJsonOutput {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            ok: false,
            error: error.into(),
            input: None,
        }
    }

    pub fn with_input(error: impl Into<String>, input: impl Into<String>) -> Self {
        Self {
            ok: false,
            error: error.into(),
            input: Some(input.into()),
        }
    }
}

pub fn print_pretty_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{}", s),
        Err(e) => {
            eprintln!("JSON serialization error: {}", e);
            println!("{{\"ok\":false,\"error\":\"JSON_SERIALIZATION_FAILED\"}}");
        }
    }
}
