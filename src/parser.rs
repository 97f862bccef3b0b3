//! WhatsApp TXT export parser.
//!
//! Only one line shape is recognised:
//!
//! ```text
//! DD/MM/YYYY, H:MM AM|PM - Sender: Message
//! ```
//!
//! Lines that do not match (continuations of multi-line messages, system
//! notices, blank lines) are dropped without an error. A line that matches
//! but carries an impossible date or time aborts the parse.
//!
//! # Example
//!
//! ```rust
//! use chatstats::parser::ChatParser;
//!
//! let chat = "01/02/2023, 10:30 AM - Alice: Hello there\n\
//!             Alice was added\n\
//!             01/02/2023, 10:31 AM - Bob: Hi!";
//!
//! let messages = ChatParser::new().parse_str(chat)?;
//! assert_eq!(messages.len(), 2);
//! assert_eq!(messages[0].sender, "Alice");
//! assert_eq!(messages[1].content, "Hi!");
//! # Ok::<(), chatstats::ChatstatsError>(())
//! ```

use std::fs;
use std::io::Read;
use std::path::Path;

use log::{debug, trace};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::Message;
use crate::error::{ChatstatsError, Result};

/// Pattern for a single chat line: date, time, sender, message.
pub const LINE_PATTERN: &str = r"^(\d{2}/\d{2}/\d{4}), (\d{1,2}:\d{2} (?:AM|PM)) - ([^:]+): (.+)";

static LINE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(LINE_PATTERN).expect("LINE_PATTERN is a valid regex"));

/// The four columns captured from a matching line, before any conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawLine<'a> {
    /// `DD/MM/YYYY`
    pub date: &'a str,
    /// `H:MM AM` / `H:MM PM`
    pub time: &'a str,
    /// Sender name, untrimmed
    pub sender: &'a str,
    /// Message body, untrimmed
    pub content: &'a str,
}

/// Parser for WhatsApp TXT exports.
///
/// # Example
///
/// ```rust,no_run
/// use chatstats::parser::ChatParser;
///
/// let messages = ChatParser::new().parse("whatsapp_chat.txt".as_ref())?;
/// # Ok::<(), chatstats::ChatstatsError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ChatParser;

impl ChatParser {
    /// Creates a new parser.
    pub fn new() -> Self {
        Self
    }

    /// Returns the parser name.
    pub fn name(&self) -> &'static str {
        "WhatsApp"
    }

    /// Matches a single line against the chat pattern.
    ///
    /// Returns `None` for lines that do not qualify. No date or time
    /// validation happens here.
    pub fn parse_line<'a>(&self, line: &'a str) -> Option<RawLine<'a>> {
        let caps = LINE_REGEX.captures(line)?;
        Some(RawLine {
            date: caps.get(1)?.as_str(),
            time: caps.get(2)?.as_str(),
            sender: caps.get(3)?.as_str(),
            content: caps.get(4)?.as_str(),
        })
    }

    /// Parses a sequence of lines into messages, preserving input order.
    ///
    /// # Errors
    ///
    /// Returns [`ChatstatsError::InvalidTimestamp`] with the 1-based line
    /// number when a matching line has an impossible date or time.
    pub fn parse_lines<'a, I>(&self, lines: I) -> Result<Vec<Message>>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut messages = Vec::new();
        let mut dropped = 0usize;

        for (idx, line) in lines.into_iter().enumerate() {
            let line_no = idx + 1;

            let Some(raw) = self.parse_line(line) else {
                trace!("line {line_no}: no match, dropped");
                dropped += 1;
                continue;
            };

            let msg = match Message::from_parts(raw.date, raw.time, raw.sender, raw.content) {
                Ok(msg) => msg,
                Err(ChatstatsError::EmptySender) => {
                    trace!("line {line_no}: empty sender, dropped");
                    dropped += 1;
                    continue;
                }
                Err(ChatstatsError::InvalidTimestamp { source, .. }) => {
                    return Err(ChatstatsError::invalid_timestamp(
                        line_no,
                        format!("{}, {}", raw.date, raw.time),
                        source,
                    ));
                }
                Err(other) => return Err(other),
            };

            messages.push(msg);
        }

        debug!(
            "parsed {} messages, dropped {} lines",
            messages.len(),
            dropped
        );

        Ok(messages)
    }

    /// Parses the full text of an export.
    ///
    /// Both `\n` and `\r\n` line endings are accepted. A leading byte order
    /// mark is ignored.
    pub fn parse_str(&self, content: &str) -> Result<Vec<Message>> {
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);
        self.parse_lines(content.lines())
    }

    /// Reads and parses an export file.
    ///
    /// # Errors
    ///
    /// Returns [`ChatstatsError::Io`] if the file cannot be read and
    /// [`ChatstatsError::Utf8`] if it is not valid UTF-8.
    pub fn parse(&self, path: &Path) -> Result<Vec<Message>> {
        let bytes = fs::read(path)?;
        let content = String::from_utf8(bytes)
            .map_err(|e| ChatstatsError::utf8(format!("reading {}", path.display()), e))?;
        self.parse_str(&content)
    }

    /// Reads an export from any reader (for example stdin) and parses it.
    pub fn parse_reader<R: Read>(&self, mut reader: R) -> Result<Vec<Message>> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        let content = String::from_utf8(bytes).map_err(|e| ChatstatsError::utf8("reading input", e))?;
        self.parse_str(&content)
    }
}

/// Parses chat text with a default [`ChatParser`].
pub fn parse_chat(content: &str) -> Result<Vec<Message>> {
    ChatParser::new().parse_str(content)
}
