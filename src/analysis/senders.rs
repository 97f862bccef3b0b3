//! Most active users.

use serde::Serialize;

use super::Tally;
use crate::Message;

/// A sender and the number of messages they wrote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SenderCount {
    pub sender: String,
    pub count: usize,
}

/// The `n` senders with the most messages, busiest first.
///
/// Senders with equal counts keep the order in which they first appear.
pub fn top_senders(messages: &[Message], n: usize) -> Vec<SenderCount> {
    let tally: Tally = messages.iter().map(Message::sender).collect();

    tally
        .most_common(n)
        .into_iter()
        .map(|(sender, count)| SenderCount { sender, count })
        .collect()
}
