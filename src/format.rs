//! Report format types for the chatstats library.
//!
//! These types don't depend on the CLI framework, so library users can pick
//! a report format without pulling in clap.
//!
//! # Example
//!
//! ```rust
//! # #[cfg(feature = "json-output")]
//! # fn example() -> chatstats::Result<()> {
//! use chatstats::analysis::Report;
//! use chatstats::config::AnalysisConfig;
//! use chatstats::format::{ReportFormat, render_report};
//!
//! let report = Report::build(&[], &AnalysisConfig::default());
//!
//! let json = render_report(&report, ReportFormat::Json)?;
//! assert!(json.contains("total_messages"));
//!
//! let format: ReportFormat = "text".parse().unwrap();
//! assert_eq!(format.extension(), "txt");
//! # Ok(())
//! # }
//! ```

use serde::{Deserialize, Serialize};

use crate::analysis::Report;
use crate::error::Result;

/// How the report is rendered.
///
/// - [`Text`](ReportFormat::Text) - sections with bar charts, for terminals
/// - [`Json`](ReportFormat::Json) - the full [`Report`] as pretty JSON
///
/// # Example
///
/// ```rust
/// use chatstats::format::ReportFormat;
/// use std::str::FromStr;
///
/// let format = ReportFormat::from_str("json").unwrap();
/// assert_eq!(format, ReportFormat::Json);
/// assert_eq!(format.extension(), "json");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum ReportFormat {
    /// Human-readable report (default)
    #[default]
    Text,

    /// Pretty-printed JSON
    Json,
}

impl ReportFormat {
    /// Returns the file extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Text => "txt",
            ReportFormat::Json => "json",
        }
    }

    /// Returns all supported format names.
    pub fn all_names() -> &'static [&'static str] {
        &["text", "txt", "json"]
    }

    /// Returns all available formats.
    pub fn all() -> &'static [ReportFormat] {
        &[ReportFormat::Text, ReportFormat::Json]
    }
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Text => write!(f, "Text"),
            ReportFormat::Json => write!(f, "JSON"),
        }
    }
}

impl std::str::FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            _ => Err(format!(
                "Unknown format: '{}'. Expected one of: {}",
                s,
                ReportFormat::all_names().join(", ")
            )),
        }
    }
}

/// Renders the report in the given format.
///
/// # Errors
///
/// Returns [`ChatstatsError::Json`](crate::ChatstatsError::Json) if JSON
/// serialization fails.
pub fn render_report(report: &Report, format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Text => Ok(crate::core::output::to_text(report)),
        #[cfg(feature = "json-output")]
        ReportFormat::Json => crate::core::output::to_json(report),
        #[cfg(not(feature = "json-output"))]
        ReportFormat::Json => Err(crate::ChatstatsError::Io(std::io::Error::other(
            "JSON reports require the 'json-output' feature",
        ))),
    }
}

/// Writes the report to a file in the given format.
pub fn write_report(report: &Report, path: &str, format: ReportFormat) -> Result<()> {
    match format {
        ReportFormat::Text => crate::core::output::write_text(report, path),
        #[cfg(feature = "json-output")]
        ReportFormat::Json => crate::core::output::write_json(report, path),
        #[cfg(not(feature = "json-output"))]
        ReportFormat::Json => {
            let rendered = render_report(report, format)?;
            std::fs::write(path, rendered)?;
            Ok(())
        }
    }
}
