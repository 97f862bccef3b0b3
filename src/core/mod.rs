//! Filtering and output for parsed chats.
//!
//! This module contains:
//! - [`filter`] - Narrow the table by date and sender
//! - [`output`] - Report writers (text, JSON) and the CSV table export
//!
//! # Quick Start
//!
//! ```rust
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn example() {
//! use chatstats::core::{
//!     FilterConfig, apply_filters,
//!     to_text, write_text, to_json, write_json, to_csv, write_csv,
//! };
//! # }
//! ```

pub mod filter;
pub mod output;

pub use filter::{FilterConfig, apply_filters};

pub use crate::Message;

pub use output::{to_text, write_text};
#[cfg(feature = "csv-output")]
pub use output::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use output::{to_json, write_json};
