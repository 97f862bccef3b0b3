//! Unified error types for chatstats.
//!
//! This module provides a single [`ChatstatsError`] enum that covers every
//! failure the library can report. Lines that do not match the chat line
//! pattern are never errors; they are dropped by the parser.
//!
//! # Error Handling Philosophy
//!
//! - **Library users** get typed errors they can match on
//! - **Application users** get clear, actionable error messages
//! - **Developers** get source error chains for debugging

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for chatstats operations.
///
/// # Example
///
/// ```rust
/// use chatstats::error::Result;
/// use chatstats::Message;
///
/// fn my_function() -> Result<Vec<Message>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatstatsError>;

/// The error type for all chatstats operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatstatsError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The input file doesn't exist
    /// - Permission denied
    /// - The report or CSV export cannot be written
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The input is not valid UTF-8.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        /// Description of where the error occurred
        context: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// A line matched the chat pattern but its date or time is impossible.
    ///
    /// Examples: `31/04/2023` (April has 30 days) or `13:05 PM`.
    #[error("Invalid timestamp '{value}' on line {line}: {source}")]
    InvalidTimestamp {
        /// 1-based line number in the input (0 when unknown)
        line: usize,
        /// The date and time text as found in the line
        value: String,
        /// The underlying chrono error
        #[source]
        source: chrono::ParseError,
    },

    /// A record was built with a sender that is empty after trimming.
    ///
    /// The parser drops such lines instead of reporting this.
    #[error("Message sender is empty")]
    EmptySender,

    /// Invalid date format in filter configuration.
    ///
    /// Date filters expect YYYY-MM-DD format.
    #[error("Invalid date '{input}'. Expected format: {expected}")]
    InvalidDate {
        /// The invalid date string that was provided
        input: String,
        /// Expected format description
        expected: &'static str,
    },

    /// The configuration file could not be parsed.
    #[error("Invalid configuration{}: {source}", path.as_ref().map(|p| format!(" (file: {})", p.display())).unwrap_or_default())]
    Config {
        /// The file path, if the configuration came from disk
        path: Option<PathBuf>,
        /// The underlying TOML error
        #[source]
        source: toml::de::Error,
    },

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<std::string::FromUtf8Error> for ChatstatsError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        ChatstatsError::Utf8 {
            context: "input".to_string(),
            source: err,
        }
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatstatsError {
    /// Creates an invalid timestamp error for the given line.
    pub fn invalid_timestamp(
        line: usize,
        value: impl Into<String>,
        source: chrono::ParseError,
    ) -> Self {
        ChatstatsError::InvalidTimestamp {
            line,
            value: value.into(),
            source,
        }
    }

    /// Creates an invalid date error.
    pub fn invalid_date(input: impl Into<String>) -> Self {
        ChatstatsError::InvalidDate {
            input: input.into(),
            expected: "YYYY-MM-DD",
        }
    }

    /// Creates a UTF-8 error with a description of what was being read.
    pub fn utf8(context: impl Into<String>, source: std::string::FromUtf8Error) -> Self {
        ChatstatsError::Utf8 {
            context: context.into(),
            source,
        }
    }

    /// Creates a configuration error.
    pub fn config(source: toml::de::Error, path: Option<PathBuf>) -> Self {
        ChatstatsError::Config { path, source }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatstatsError::Io(_))
    }

    /// Returns `true` if this is an invalid timestamp error.
    pub fn is_invalid_timestamp(&self) -> bool {
        matches!(self, ChatstatsError::InvalidTimestamp { .. })
    }

    /// Returns `true` if a record had a blank sender.
    pub fn is_empty_sender(&self) -> bool {
        matches!(self, ChatstatsError::EmptySender)
    }

    /// Returns `true` if this is a filter date error.
    pub fn is_invalid_date(&self) -> bool {
        matches!(self, ChatstatsError::InvalidDate { .. })
    }

    /// Returns `true` if this is a configuration error.
    pub fn is_config(&self) -> bool {
        matches!(self, ChatstatsError::Config { .. })
    }

    /// Returns `true` if the input was not valid UTF-8.
    pub fn is_utf8(&self) -> bool {
        matches!(self, ChatstatsError::Utf8 { .. })
    }
}
