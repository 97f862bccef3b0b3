//! Read-only projections of the parsed chat table.
//!
//! Every function here takes `&[Message]` and returns a fresh value; none of
//! them mutates shared state or depends on another projection. All of them
//! accept an empty table.
//!
//! | Projection | Function | Report section |
//! |------------|----------|----------------|
//! | Summary counters | [`overview`] | Chat Overview |
//! | Word weights | [`word_cloud`] | Word Cloud |
//! | Top-N senders | [`top_senders`] | Most Active Users |
//! | Per-day counts | [`daily_counts`] | Messages Over Time |
//! | Weekday x hour | [`Heatmap::from_messages`] | Activity Heatmap |
//! | Emoji frequency | [`emoji_usage`] | Emoji Usage |
//! | Word frequency | [`top_topics`] | Most Discussed Topics |
//! | Sentiment buckets | [`sentiment_counts`] | Sentiment Analysis |
//!
//! [`Report::build`] runs all of them at once.
//!
//! # Example
//!
//! ```rust
//! use chatstats::analysis::{overview, top_senders};
//! use chatstats::config::AnalysisConfig;
//! use chatstats::parser::parse_chat;
//!
//! let messages = parse_chat(
//!     "01/02/2023, 10:30 AM - Alice: Hello there\n\
//!      01/02/2023, 10:31 AM - Bob: <Media omitted>\n\
//!      01/02/2023, 10:32 AM - Alice: https://example.com",
//! )?;
//!
//! let stats = overview(&messages, &AnalysisConfig::default());
//! assert_eq!(stats.total_messages, 3);
//! assert_eq!(stats.participants, 2);
//! assert_eq!(stats.media_shared, 1);
//! assert_eq!(stats.links_shared, 1);
//!
//! let senders = top_senders(&messages, 10);
//! assert_eq!(senders[0].sender, "Alice");
//! # Ok::<(), chatstats::ChatstatsError>(())
//! ```

pub mod emoji;
pub mod heatmap;
pub mod overview;
pub mod report;
pub mod senders;
pub mod sentiment;
pub mod tally;
pub mod timeline;
pub mod topics;
pub mod wordcloud;

pub use emoji::{EmojiCount, emoji_usage, is_emoji};
pub use heatmap::Heatmap;
pub use overview::{Overview, overview};
pub use report::Report;
pub use senders::{SenderCount, top_senders};
pub use sentiment::{Sentiment, SentimentCounts, polarity, sentiment_counts};
pub use tally::Tally;
pub use timeline::{DailyCount, daily_counts};
pub use topics::{TopicCount, top_topics};
pub use wordcloud::{INSUFFICIENT_TEXT_WARNING, WeightedWord, WordCloud, word_cloud};

use crate::Message;
use crate::config::AnalysisConfig;

/// Messages that carry neither media nor a link.
///
/// The word cloud, topics and sentiment projections only look at these.
pub fn text_messages<'a>(
    messages: &'a [Message],
    config: &'a AnalysisConfig,
) -> impl Iterator<Item = &'a Message> + 'a {
    messages
        .iter()
        .filter(|m| m.is_text(&config.media_placeholder, &config.link_marker))
}
