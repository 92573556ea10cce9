//! Renderer module
//!
//! Renders a SearchOutcome to different output formats: text, jsonl, json

use crate::core::model::SearchOutcome;
use std::io::Write;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Jsonl,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "jsonl" => Ok(OutputFormat::Jsonl),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

/// Renderer for search outcomes
pub struct Renderer {
    format: OutputFormat,
}

impl Renderer {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Render an outcome to a string
    pub fn render(&self, outcome: &SearchOutcome) -> String {
        match self.format {
            OutputFormat::Text => self.render_text(outcome),
            OutputFormat::Jsonl => self.render_jsonl(outcome),
            OutputFormat::Json => self.render_json(outcome),
        }
    }

    /// Render to a writer
    #[allow(dead_code)]
    pub fn render_to<W: Write>(&self, outcome: &SearchOutcome, mut writer: W) -> std::io::Result<()> {
        let output = self.render(outcome);
        writer.write_all(output.as_bytes())
    }

    /// Render as plain text lines.
    ///
    /// `<line>: <text>` for a single effectively-searched file,
    /// `<file>:<line>: <text>` when more than one file was searched.
    fn render_text(&self, outcome: &SearchOutcome) -> String {
        let prefix_filenames = outcome.multiple_files();
        outcome
            .matches
            .iter()
            .map(|record| {
                if prefix_filenames {
                    format!(
                        "{}:{}: {}",
                        record.source_file, record.line_number, record.line_text
                    )
                } else {
                    format!("{}: {}", record.line_number, record.line_text)
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Render as JSON Lines (one JSON object per match)
    fn render_jsonl(&self, outcome: &SearchOutcome) -> String {
        outcome
            .matches
            .iter()
            .filter_map(|record| serde_json::to_string(record).ok())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Render as a single JSON array
    fn render_json(&self, outcome: &SearchOutcome) -> String {
        serde_json::to_string(&outcome.matches).unwrap_or_else(|_| "[]".to_string())
    }
}
