//! Report writers and the table export.
//!
//! - [`write_text`] / [`to_text`] - human-readable report with bar charts
//! - [`write_json`] / [`to_json`] - pretty-printed JSON report - requires `json-output` feature
//! - [`write_csv`] / [`to_csv`] - parsed table, semicolon delimited - requires `csv-output` feature
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> chatstats::Result<()> {
//! use chatstats::analysis::Report;
//! use chatstats::config::AnalysisConfig;
//! use chatstats::core::output::{to_text, write_csv, write_json};
//! use chatstats::parser::ChatParser;
//!
//! let messages = ChatParser::new().parse("chat.txt".as_ref())?;
//! let report = Report::build(&messages, &AnalysisConfig::default());
//!
//! print!("{}", to_text(&report));
//! write_json(&report, "report.json")?;
//! write_csv(&messages, "messages.csv")?;
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
mod text_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{CSV_HEADER, to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{to_json, write_json};
pub use text_writer::{to_text, write_text};
