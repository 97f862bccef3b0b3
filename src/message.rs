//! The parsed chat record.
//!
//! This module provides [`Message`], one row of the parsed chat table. Each
//! record is built once by the parser from a single matching line and is
//! never mutated afterwards.
//!
//! # Overview
//!
//! A message consists of:
//! - **Parsed**: `date`, `time`, `sender`, `content`
//! - **Derived**: `datetime`, `hour`, `weekday`, `month`
//!
//! # Example
//!
//! ```
//! use chatstats::Message;
//! use chrono::Weekday;
//!
//! let msg = Message::from_parts("01/02/2023", "10:30 AM", "Alice", "Hello there")?;
//! assert_eq!(msg.sender(), "Alice");
//! assert_eq!(msg.hour, 10);
//! assert_eq!(msg.weekday, Weekday::Wed);
//! assert_eq!(msg.month_name(), "February");
//! # Ok::<(), chatstats::ChatstatsError>(())
//! ```

use chrono::{Month, NaiveDate, NaiveDateTime, Weekday};
use serde::{Serialize, Serializer};

use crate::error::{ChatstatsError, Result};
use crate::timestamp::{self, month_name, weekday_name};

/// One parsed line of a WhatsApp chat export.
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | `date` | `NaiveDate` | Calendar date of the message |
/// | `time` | `String` | Time of day as written, e.g. `10:30 AM` |
/// | `sender` | `String` | Trimmed sender name, never empty |
/// | `content` | `String` | Trimmed message body |
/// | `datetime` | `NaiveDateTime` | `date` and `time` combined |
/// | `hour` | `u32` | Hour of day, 0-23 |
/// | `weekday` | `Weekday` | Day of the week |
/// | `month` | `Month` | Month of the year |
///
/// # Serialization
///
/// Weekday and month serialize as full English names (`"Monday"`,
/// `"February"`), the date as `YYYY-MM-DD` and the timestamp as
/// `YYYY-MM-DDTHH:MM:SS`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    /// Calendar date of the message.
    pub date: NaiveDate,

    /// Time of day exactly as exported (12-hour clock with AM/PM).
    pub time: String,

    /// Display name of the author.
    pub sender: String,

    /// Text of the message.
    ///
    /// Attachments appear as the media placeholder (`<Media omitted>`).
    pub content: String,

    /// Date and time combined.
    pub datetime: NaiveDateTime,

    /// Hour of day, 0-23.
    pub hour: u32,

    /// Day of the week.
    #[serde(serialize_with = "serialize_weekday")]
    pub weekday: Weekday,

    /// Month of the year.
    #[serde(serialize_with = "serialize_month")]
    pub month: Month,
}

impl Message {
    /// Builds a message from the four captured columns of a chat line.
    ///
    /// Sender and content are trimmed. The derived fields are computed from
    /// `date` and `time`.
    ///
    /// # Errors
    ///
    /// Returns [`ChatstatsError::EmptySender`] when the sender is blank and
    /// [`ChatstatsError::InvalidTimestamp`] when the date or time is not a
    /// real calendar date / clock reading. The sender is checked first.
    pub fn from_parts(date: &str, time: &str, sender: &str, content: &str) -> Result<Self> {
        let sender = sender.trim();
        if sender.is_empty() {
            return Err(ChatstatsError::EmptySender);
        }
        let (date, fields) = timestamp::derive_from_strings(date, time)?;

        Ok(Self {
            date,
            time: time.to_string(),
            sender: sender.to_string(),
            content: content.trim().to_string(),
            datetime: fields.datetime,
            hour: fields.hour,
            weekday: fields.weekday,
            month: fields.month,
        })
    }

    /// Returns the sender name.
    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// Returns the message content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the weekday as a full English name.
    pub fn day_name(&self) -> &'static str {
        weekday_name(self.weekday)
    }

    /// Returns the month as a full English name.
    pub fn month_name(&self) -> &'static str {
        month_name(self.month)
    }

    /// Returns `true` if the content is exactly the media placeholder.
    pub fn is_media(&self, placeholder: &str) -> bool {
        self.content == placeholder
    }

    /// Returns `true` if the content contains the link marker.
    pub fn has_link(&self, marker: &str) -> bool {
        self.content.contains(marker)
    }

    /// Returns `true` if the message carries neither media nor a link.
    ///
    /// The media test here is a substring test, so a body that merely
    /// mentions the placeholder is excluded too.
    pub fn is_text(&self, placeholder: &str, marker: &str) -> bool {
        !self.content.contains(placeholder) && !self.has_link(marker)
    }
}

fn serialize_weekday<S: Serializer>(weekday: &Weekday, s: S) -> std::result::Result<S::Ok, S::Error> {
    s.serialize_str(weekday_name(*weekday))
}

fn serialize_month<S: Serializer>(month: &Month, s: S) -> std::result::Result<S::Ok, S::Error> {
    s.serialize_str(month_name(*month))
}
