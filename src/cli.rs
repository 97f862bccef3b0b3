//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`ReportFormat`] - Report format options
//!
//! ```rust
//! use chatstats::cli::Args;
//! use clap::Parser;
//!
//! let args = Args::parse_from(["chatstats", "chat.txt", "--format", "json", "--top-senders", "3"]);
//! assert_eq!(args.input, "chat.txt");
//! assert_eq!(args.top_senders, Some(3));
//! ```

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::AnalysisConfig;
use crate::core::FilterConfig;
use crate::error::Result;

/// Descriptive statistics for WhatsApp chat exports: activity, senders,
/// emoji, topics and sentiment.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatstats")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatstats whatsapp_chat.txt
    chatstats chat.txt -f json -o report.json
    chatstats chat.txt --export-csv messages.csv
    chatstats chat.txt --after 2024-01-01 --from Alice
    cat chat.txt | chatstats -")]
pub struct Args {
    /// Path to the WhatsApp .txt export ("-" reads stdin)
    pub input: String,

    /// Report format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ReportFormat,

    /// Write the report to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<String>,

    /// Also export the parsed messages as CSV
    #[arg(long, value_name = "FILE")]
    pub export_csv: Option<String>,

    /// TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<String>,

    /// Only messages on or after this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub after: Option<String>,

    /// Only messages on or before this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub before: Option<String>,

    /// Only messages from this sender (case-insensitive)
    #[arg(long, value_name = "USER")]
    pub from: Option<String>,

    /// Rows in the most active users table
    #[arg(long, value_name = "N")]
    pub top_senders: Option<usize>,

    /// Rows in the most discussed topics table
    #[arg(long, value_name = "N")]
    pub top_words: Option<usize>,

    /// Emojis shown in the emoji usage section
    #[arg(long, value_name = "N")]
    pub top_emojis: Option<usize>,

    /// Debug logging on stderr
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// No progress output or logs
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Returns `true` if the chat is read from stdin.
    pub fn reads_stdin(&self) -> bool {
        self.input == "-"
    }

    /// Applies the command-line overrides on top of `config`.
    pub fn apply_overrides(&self, mut config: AnalysisConfig) -> AnalysisConfig {
        if let Some(n) = self.top_senders {
            config = config.with_top_senders(n);
        }
        if let Some(n) = self.top_words {
            config = config.with_top_words(n);
        }
        if let Some(n) = self.top_emojis {
            config = config.with_top_emojis(n);
        }
        config
    }

    /// Builds the filter from `--after`, `--before` and `--from`.
    pub fn filter_config(&self) -> Result<FilterConfig> {
        let mut filter = FilterConfig::new();
        if let Some(ref after) = self.after {
            filter = filter.with_date_from(after)?;
        }
        if let Some(ref before) = self.before {
            filter = filter.with_date_to(before)?;
        }
        if let Some(ref from) = self.from {
            filter = filter.with_sender(from.clone());
        }
        Ok(filter)
    }
}

/// Report format options.
///
/// ```rust
/// use chatstats::cli::ReportFormat;
///
/// let format = ReportFormat::Json;
/// println!("Extension: {}", format.extension()); // "json"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Sections with bar charts (default)
    #[default]
    #[value(alias = "txt")]
    Text,

    /// The full report as pretty JSON
    Json,
}

impl ReportFormat {
    /// Returns the file extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        crate::format::ReportFormat::from(*self).extension()
    }
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&crate::format::ReportFormat::from(*self), f)
    }
}

// Conversion to library format type
impl From<ReportFormat> for crate::format::ReportFormat {
    fn from(format: ReportFormat) -> crate::format::ReportFormat {
        match format {
            ReportFormat::Text => crate::format::ReportFormat::Text,
            ReportFormat::Json => crate::format::ReportFormat::Json,
        }
    }
}
