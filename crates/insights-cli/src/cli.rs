//! CLI argument definitions and parsing.

use clap::Parser;
use std::path::PathBuf;

/// Analyze email addresses for PromptQL applications.
#[derive(Debug, Parser)]
#[command(name = "promptql-insights")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Email addresses to analyze
    #[arg(long = "emails", required = true, num_args = 1..)]
    pub emails: Vec<String>,

    /// Output format
    #[arg(long, value_enum, default_value = "json")]
    pub output_format: OutputFormat,

    /// Output file name (extension added to match the format if missing)
    #[arg(long, default_value = "promptql_results")]
    pub output_file: String,

    /// Path to a JSON file mapping emails to roles, bypassing the inference step
    #[arg(long)]
    pub context_file: Option<PathBuf>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON array
    Json,
    /// Structured Markdown document
    Markdown,
}

impl OutputFormat {
    /// File extension matching the format.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "markdown",
        }
    }
}
