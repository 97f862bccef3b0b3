//! Most discussed topics: frequent long words in text messages.

use serde::Serialize;

use super::{Tally, text_messages};
use crate::Message;
use crate::config::AnalysisConfig;

/// A topic word and its frequency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopicCount {
    pub topic: String,
    pub count: usize,
}

/// Returns `true` if a whitespace-separated token counts as a topic word.
///
/// The token must be non-empty, have at least `min_len` characters and
/// consist only of letters, so `hello,` or `covid19` are skipped.
pub fn is_topic_word(token: &str, min_len: usize) -> bool {
    !token.is_empty()
        && token.chars().count() >= min_len
        && token.chars().all(char::is_alphabetic)
}

/// The most frequent topic words (lowercased) across text messages.
///
/// Messages carrying media or links are ignored.
pub fn top_topics(messages: &[Message], config: &AnalysisConfig) -> Vec<TopicCount> {
    let words: Vec<String> = text_messages(messages, config)
        .flat_map(|m| m.content.split_whitespace())
        .filter(|w| is_topic_word(w, config.min_word_len))
        .map(str::to_lowercase)
        .collect();

    let tally: Tally = words.iter().map(String::as_str).collect();

    tally
        .most_common(config.top_words)
        .into_iter()
        .map(|(topic, count)| TopicCount { topic, count })
        .collect()
}
