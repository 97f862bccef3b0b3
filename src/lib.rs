//! # Chatstats
//!
//! A Rust library for turning WhatsApp chat exports into descriptive
//! statistics: message counts, most active users, activity over time and by
//! weekday/hour, emoji usage, frequent topics, word cloud weights and a
//! lexicon-based sentiment split.
//!
//! ## Overview
//!
//! The pipeline is linear:
//!
//! 1. [`parser`] reads the `.txt` export into a table of [`Message`]s,
//!    dropping every line that is not a `DD/MM/YYYY, H:MM AM - Sender: text`
//!    record.
//! 2. [`core::filter`] optionally narrows the table by date and sender.
//! 3. [`analysis`] computes independent, read-only projections.
//! 4. [`core::output`] renders them as text or JSON, and can export the
//!    parsed table as CSV.
//!
//! ## Quick Start
//!
//! ```rust
//! use chatstats::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let messages = parse_chat(
//!         "01/02/2023, 10:30 AM - Alice: Hello there 😀\n\
//!          01/02/2023, 10:31 AM - Bob: <Media omitted>\n\
//!          Alice was added\n\
//!          01/02/2023, 10:32 AM - Alice: what a great idea",
//!     )?;
//!
//!     let report = Report::build(&messages, &AnalysisConfig::default());
//!     assert_eq!(report.overview.total_messages, 3);
//!     assert_eq!(report.overview.media_shared, 1);
//!     assert_eq!(report.top_senders[0].sender, "Alice");
//!
//!     let text = to_text(&report);
//!     assert!(text.contains("Most Active Users"));
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] - [`ChatParser`](parser::ChatParser), [`parse_chat`](parser::parse_chat)
//! - [`message`] - the parsed record, [`Message`]
//! - [`timestamp`] - date/time parsing and derived fields
//! - [`analysis`] - the projections and [`Report`](analysis::Report)
//! - [`config`] - [`AnalysisConfig`](config::AnalysisConfig), TOML loading
//! - [`core`] - filters and output writers
//! - [`format`] - [`ReportFormat`](format::ReportFormat) and report dispatch
//! - [`cli`] - CLI types (feature `cli`)
//! - [`error`] - [`ChatstatsError`], [`Result`]
//! - [`prelude`] - Convenient re-exports

pub mod analysis;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod format;
#[cfg(feature = "cli")]
pub mod logging;
pub mod message;
pub mod parser;
pub mod timestamp;

// Re-export the main types at the crate root for convenience
pub use error::{ChatstatsError, Result};
pub use message::Message;

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatstats::prelude::*;
/// ```
pub mod prelude {
    // Core message type
    pub use crate::Message;

    // Error types
    pub use crate::error::{ChatstatsError, Result};

    // Parsing
    pub use crate::parser::{ChatParser, parse_chat};

    // Configuration
    pub use crate::config::AnalysisConfig;

    // Analysis
    pub use crate::analysis::{Report, WordCloud};

    // Filtering
    pub use crate::core::filter::{FilterConfig, apply_filters};

    // Output
    pub use crate::core::output::{to_text, write_text};
    #[cfg(feature = "csv-output")]
    pub use crate::core::output::{to_csv, write_csv};
    #[cfg(feature = "json-output")]
    pub use crate::core::output::{to_json, write_json};
    pub use crate::format::{ReportFormat, render_report, write_report};
}
