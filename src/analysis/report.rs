//! All projections of one chat, computed together.

use log::debug;
use serde::Serialize;

use super::{
    DailyCount, EmojiCount, Heatmap, Overview, SenderCount, SentimentCounts, TopicCount,
    WordCloud, daily_counts, emoji_usage, overview, sentiment_counts, top_senders, top_topics,
    word_cloud,
};
use crate::Message;
use crate::config::AnalysisConfig;

/// The full analysis of a chat, one field per report section.
///
/// # Example
///
/// ```rust
/// use chatstats::analysis::Report;
/// use chatstats::config::AnalysisConfig;
/// use chatstats::parser::parse_chat;
///
/// let messages = parse_chat("06/02/2023, 9:15 PM - Alice: Great game tonight")?;
/// let report = Report::build(&messages, &AnalysisConfig::default());
///
/// assert_eq!(report.overview.total_messages, 1);
/// assert_eq!(report.sentiment.positive, 1);
/// assert_eq!(report.heatmap.total(), 1);
/// # Ok::<(), chatstats::ChatstatsError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub overview: Overview,
    pub word_cloud: WordCloud,
    pub top_senders: Vec<SenderCount>,
    pub daily_messages: Vec<DailyCount>,
    pub heatmap: Heatmap,
    pub emojis: Vec<EmojiCount>,
    pub topics: Vec<TopicCount>,
    pub sentiment: SentimentCounts,
}

impl Report {
    /// Runs every projection over `messages`.
    pub fn build(messages: &[Message], config: &AnalysisConfig) -> Self {
        let report = Self {
            overview: overview(messages, config),
            word_cloud: word_cloud(messages, config),
            top_senders: top_senders(messages, config.top_senders),
            daily_messages: daily_counts(messages),
            heatmap: Heatmap::from_messages(messages),
            emojis: emoji_usage(messages, config.top_emojis),
            topics: top_topics(messages, config),
            sentiment: sentiment_counts(messages, config),
        };

        debug!(
            "report: {} messages, {} participants, {} days, {} cloud words",
            report.overview.total_messages,
            report.overview.participants,
            report.daily_messages.len(),
            report.word_cloud.words().len()
        );

        report
    }

    /// Returns `true` if the report was built from an empty chat.
    pub fn is_empty(&self) -> bool {
        self.overview.total_messages == 0
    }
}
