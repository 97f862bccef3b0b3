//! Configuration for the analysis projections.
//!
//! [`AnalysisConfig`] holds the knobs of every projection: the media
//! placeholder and link marker that classify messages, the sizes of the
//! top-N tables and the neutral band of the sentiment buckets. It can be
//! built in code or loaded from a TOML file; missing keys keep their
//! defaults.
//!
//! # Example
//!
//! ```rust
//! use chatstats::config::AnalysisConfig;
//!
//! let config = AnalysisConfig::new()
//!     .with_top_senders(5)
//!     .with_neutral_band(0.1);
//!
//! let from_file = AnalysisConfig::from_toml_str("top_words = 20")?;
//! assert_eq!(from_file.top_words, 20);
//! assert_eq!(from_file.top_senders, 10);
//! # Ok::<(), chatstats::ChatstatsError>(())
//! ```

use std::fs;
use std::path::Path;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{ChatstatsError, Result};

/// Text WhatsApp writes in place of an attachment.
pub const MEDIA_PLACEHOLDER: &str = "<Media omitted>";

/// Substring that marks a message as containing a link.
pub const LINK_MARKER: &str = "http";

/// Settings shared by all analysis projections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisConfig {
    /// Exact body of a media message (default: `<Media omitted>`)
    pub media_placeholder: String,

    /// Substring identifying a link (default: `http`)
    pub link_marker: String,

    /// Rows in the most active users table (default: 10)
    pub top_senders: usize,

    /// Rows in the most discussed topics table (default: 10)
    pub top_words: usize,

    /// Slices in the emoji usage chart (default: 5)
    pub top_emojis: usize,

    /// Minimum length of a topic word in characters (default: 4)
    pub min_word_len: usize,

    /// Maximum number of words in the word cloud (default: 200)
    pub max_cloud_words: usize,

    /// Half-width of the neutral sentiment band (default: 0.05)
    ///
    /// Must be a non-negative number; negative or NaN values in a file are
    /// rejected.
    #[serde(deserialize_with = "deserialize_band")]
    pub neutral_band: f64,
}

fn deserialize_band<'de, D: Deserializer<'de>>(d: D) -> std::result::Result<f64, D::Error> {
    let band = f64::deserialize(d)?;
    if band.is_nan() || band < 0.0 {
        return Err(D::Error::custom(format!(
            "neutral_band must be a non-negative number, got {band}"
        )));
    }
    Ok(band)
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            media_placeholder: MEDIA_PLACEHOLDER.to_string(),
            link_marker: LINK_MARKER.to_string(),
            top_senders: 10,
            top_words: 10,
            top_emojis: 5,
            min_word_len: 4,
            max_cloud_words: 200,
            neutral_band: 0.05,
        }
    }
}

impl AnalysisConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a configuration from TOML text.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| ChatstatsError::config(e, None))
    }

    /// Loads a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ChatstatsError::Io`] if the file cannot be read and
    /// [`ChatstatsError::Config`] if it is not valid TOML for this struct.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| ChatstatsError::config(e, Some(path.to_path_buf())))
    }

    /// Sets the media placeholder.
    #[must_use]
    pub fn with_media_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.media_placeholder = placeholder.into();
        self
    }

    /// Sets the link marker.
    #[must_use]
    pub fn with_link_marker(mut self, marker: impl Into<String>) -> Self {
        self.link_marker = marker.into();
        self
    }

    /// Sets the number of senders shown.
    #[must_use]
    pub fn with_top_senders(mut self, n: usize) -> Self {
        self.top_senders = n;
        self
    }

    /// Sets the number of topic words shown.
    #[must_use]
    pub fn with_top_words(mut self, n: usize) -> Self {
        self.top_words = n;
        self
    }

    /// Sets the number of emojis shown.
    #[must_use]
    pub fn with_top_emojis(mut self, n: usize) -> Self {
        self.top_emojis = n;
        self
    }

    /// Sets the minimum topic word length.
    #[must_use]
    pub fn with_min_word_len(mut self, len: usize) -> Self {
        self.min_word_len = len;
        self
    }

    /// Sets the word cloud size limit.
    #[must_use]
    pub fn with_max_cloud_words(mut self, n: usize) -> Self {
        self.max_cloud_words = n;
        self
    }

    /// Sets the half-width of the neutral sentiment band.
    ///
    /// Negative values are treated as their absolute value.
    #[must_use]
    pub fn with_neutral_band(mut self, band: f64) -> Self {
        self.neutral_band = band.abs();
        self
    }
}
