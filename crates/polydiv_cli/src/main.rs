//! `polydiv`: divide two polynomials and show every step.

mod config;
mod format;
mod json_types;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use polydiv_engine::{divide_str, DivisionTrace, EngineError, PolyOptions};
use polydiv_formatter::{LongDivisionHtml, LongDivisionLatex};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::config::CliConfig;
use crate::format::{format_text, OutputFormat};
use crate::json_types::{print_pretty_json, DivisionJsonOutput, ErrorJsonOutput};

#[derive(Parser, Debug)]
#[command(
    name = "polydiv",
    version,
    about = "Step-by-step polynomial long division over exact rationals",
    after_help = r#"Examples:
  polydiv "8x^4 + 6x^2 - 3x + 1" "2x^2 - x + 2"
  polydiv "x^6+x^5+8x" "-x-2" --steps
  polydiv "x^2-1" "x-1" --format json

Environment Variables:
  RUST_LOG=debug    Log every elimination round to stderr"#
)]
struct Cli {
    /// Polynomial to divide, e.g. "3x^2 - 2x + 5"
    #[arg(allow_hyphen_values = true)]
    dividend: String,

    /// Polynomial to divide by
    #[arg(allow_hyphen_values = true)]
    divisor: String,

    /// Output format [default: text, or the config file's value]
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// List every subtraction and remainder (text format)
    #[arg(long)]
    steps: bool,

    /// Keep polynomials sparse instead of inserting 0·x^k placeholders
    #[arg(long)]
    no_fill_gaps: bool,

    /// Config file [default: ./polydiv.toml if present]
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG is set
    #[arg(short, long)]
    verbose: bool,
}

/// Command-line flags layered over the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Settings {
    format: OutputFormat,
    show_steps: bool,
    options: PolyOptions,
}

impl Settings {
    fn resolve(cli: &Cli, config: &CliConfig) -> Self {
        Self {
            format: cli.format.unwrap_or(config.format),
            show_steps: cli.steps || config.show_steps,
            options: PolyOptions {
                fill_gaps: config.fill_gaps && !cli.no_fill_gaps,
            },
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            if cli.format == Some(OutputFormat::Json) {
                print_pretty_json(&ErrorJsonOutput::new(e.to_string()));
            } else {
                eprintln!("Error: {e}");
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<ExitCode> {
    let config = CliConfig::load(cli.config.as_deref())?;
    let settings = Settings::resolve(cli, &config);
    debug!(?settings, "resolved settings");

    match divide_str(&cli.dividend, &cli.divisor, &settings.options) {
        Ok(trace) => {
            print!("{}", render(&trace, &settings));
            Ok(ExitCode::SUCCESS)
        }
        Err(err) if settings.format == OutputFormat::Json => {
            let output = match &err {
                EngineError::Dividend(_) => ErrorJsonOutput::with_input(err.to_string(), &cli.dividend),
                EngineError::Divisor(_) => ErrorJsonOutput::with_input(err.to_string(), &cli.divisor),
                EngineError::Overflow { .. } => ErrorJsonOutput::new(err.to_string()),
            };
            print_pretty_json(&output);
            Ok(ExitCode::FAILURE)
        }
        Err(err) => Err(err.into()),
    }
}

fn render(trace: &DivisionTrace, settings: &Settings) -> String {
    match settings.format {
        OutputFormat::Text => format_text(trace, settings.show_steps),
        OutputFormat::Latex => format!("{}\n", LongDivisionLatex::new(trace).to_latex()),
        OutputFormat::Html => LongDivisionHtml::new(trace).to_html(),
        OutputFormat::Json => {
            let output = DivisionJsonOutput::from_trace(trace);
            match serde_json::to_string_pretty(&output) {
                Ok(s) => format!("{s}\n"),
                Err(e) => format!("{{\"ok\":false,\"error\":\"{e}\"}}\n"),
            }
        }
    }
}
