//! Rendering of sample reports.
//!
//! [`OutputMode`] is the value of the `--output` flag. Text output is a
//! fixed-width table meant for reading; the structured modes serialize the
//! reports directly.

use clap::ValueEnum;
use thiserror::Error;

use crate::samples::{SampleOutcome, SampleReport};

/// Controls how reports are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputMode {
    /// One line per sample
    #[default]
    Text,
    /// Pretty-printed JSON array
    Json,
    /// YAML sequence
    Yaml,
}

/// Errors that can occur while rendering.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML serialization failed: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Renders `reports` in the given mode.
pub fn render(reports: &[SampleReport], mode: OutputMode) -> Result<String, OutputError> {
    match mode {
        OutputMode::Text => Ok(render_text(reports)),
        OutputMode::Json => Ok(serde_json::to_string_pretty(reports)?),
        OutputMode::Yaml => Ok(serde_yaml::to_string(reports)?),
    }
}

fn render_text(reports: &[SampleReport]) -> String {
    let width = reports.iter().map(|r| r.sample.len()).max().unwrap_or(0);

    reports
        .iter()
        .map(|report| {
            format!(
                "{:<width$}  {}",
                report.sample,
                describe(&report.outcome),
                width = width
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn describe(outcome: &SampleOutcome) -> String {
    match outcome {
        SampleOutcome::Found { product } => format!("{:>4}  {}", product.id, product.name),
        SampleOutcome::Empty => "(none)".to_string(),
        SampleOutcome::Failed { error } => format!("error: {}", error),
    }
}
