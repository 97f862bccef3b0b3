//! Weekday x hour activity matrix.

use chrono::Weekday;
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::Message;
use crate::timestamp::{WEEK_ORDER, weekday_name};

/// Hours in a day, the number of heatmap columns.
pub const HOURS: usize = 24;

/// Message counts by day of week (rows, Monday first) and hour (columns).
///
/// Every cell exists; hours or days without messages hold zero.
///
/// # Example
///
/// ```rust
/// use chatstats::analysis::Heatmap;
/// use chatstats::parser::parse_chat;
/// use chrono::Weekday;
///
/// let messages = parse_chat("01/02/2023, 10:30 PM - Alice: Hi")?;
/// let heatmap = Heatmap::from_messages(&messages);
/// assert_eq!(heatmap.get(Weekday::Wed, 22), 1);
/// assert_eq!(heatmap.total(), 1);
/// # Ok::<(), chatstats::ChatstatsError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heatmap {
    cells: [[usize; HOURS]; 7],
}

impl Default for Heatmap {
    fn default() -> Self {
        Self {
            cells: [[0; HOURS]; 7],
        }
    }
}

impl Heatmap {
    /// Builds the matrix from the parsed table.
    pub fn from_messages(messages: &[Message]) -> Self {
        let mut heatmap = Self::default();
        for msg in messages {
            let row = msg.weekday.num_days_from_monday() as usize;
            let col = msg.hour as usize;
            heatmap.cells[row][col % HOURS] += 1;
        }
        heatmap
    }

    /// Count for one weekday and hour. Hours outside 0-23 read as zero.
    pub fn get(&self, weekday: Weekday, hour: u32) -> usize {
        self.row(weekday).get(hour as usize).copied().unwrap_or(0)
    }

    /// All 24 hourly counts of one weekday.
    pub fn row(&self, weekday: Weekday) -> &[usize; HOURS] {
        &self.cells[weekday.num_days_from_monday() as usize]
    }

    /// Rows in display order (Monday first) with their weekday.
    pub fn rows(&self) -> impl Iterator<Item = (Weekday, &[usize; HOURS])> {
        WEEK_ORDER.iter().map(move |&day| (day, self.row(day)))
    }

    /// Largest cell value.
    pub fn max(&self) -> usize {
        self.cells.iter().flatten().copied().max().unwrap_or(0)
    }

    /// Sum of all cells.
    pub fn total(&self) -> usize {
        self.cells.iter().flatten().sum()
    }

    /// The busiest weekday/hour slot, if any message exists.
    ///
    /// On ties the earliest slot in the week wins.
    pub fn busiest(&self) -> Option<(Weekday, u32, usize)> {
        let mut best: Option<(Weekday, u32, usize)> = None;
        for (day, row) in self.rows() {
            for (hour, &count) in row.iter().enumerate() {
                if count > best.map_or(0, |b| b.2) {
                    best = Some((day, hour as u32, count));
                }
            }
        }
        best
    }
}

impl Serialize for Heatmap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(WEEK_ORDER.len()))?;
        for (day, row) in self.rows() {
            map.serialize_entry(weekday_name(day), row)?;
        }
        map.end()
    }
}
