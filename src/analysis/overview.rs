//! Summary counters for the chat overview.

use std::collections::HashSet;

use serde::Serialize;

use crate::Message;
use crate::config::AnalysisConfig;

/// Headline numbers of a chat.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Overview {
    /// Number of parsed messages.
    pub total_messages: usize,
    /// Number of distinct senders.
    pub participants: usize,
    /// Messages whose body is exactly the media placeholder.
    pub media_shared: usize,
    /// Messages whose body contains the link marker.
    pub links_shared: usize,
}

/// Computes the overview counters.
pub fn overview(messages: &[Message], config: &AnalysisConfig) -> Overview {
    let participants: HashSet<&str> = messages.iter().map(Message::sender).collect();

    Overview {
        total_messages: messages.len(),
        participants: participants.len(),
        media_shared: messages
            .iter()
            .filter(|m| m.is_media(&config.media_placeholder))
            .count(),
        links_shared: messages
            .iter()
            .filter(|m| m.has_link(&config.link_marker))
            .count(),
    }
}
