//! Messages per calendar day.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::Message;

/// Number of messages sent on one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailyCount {
    pub date: NaiveDate,
    pub count: usize,
}

/// Counts messages per date, oldest date first.
///
/// Only dates with at least one message appear.
pub fn daily_counts(messages: &[Message]) -> Vec<DailyCount> {
    let mut per_day: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for msg in messages {
        *per_day.entry(msg.date).or_insert(0) += 1;
    }

    per_day
        .into_iter()
        .map(|(date, count)| DailyCount { date, count })
        .collect()
}
