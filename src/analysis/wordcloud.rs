//! Word cloud weights.
//!
//! Drawing the cloud is left to the presentation layer; this module produces
//! the weighted word list it would be drawn from, or reports that the chat
//! does not contain enough text.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use super::{Tally, text_messages};
use crate::Message;
use crate::config::AnalysisConfig;

/// Warning shown instead of a word cloud when there is not enough text.
pub const INSUFFICIENT_TEXT_WARNING: &str =
    "Not enough words to generate a Word Cloud. Please upload a longer chat file.";

static WORD_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\w[\w']+").expect("word pattern is a valid regex"));

/// Common English words left out of the cloud.
const STOPWORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "also", "am", "an", "and", "any",
    "are", "aren't", "as", "at", "be", "because", "been", "before", "being", "below", "between",
    "both", "but", "by", "can", "can't", "cannot", "could", "couldn't", "did", "didn't", "do",
    "does", "doesn't", "doing", "don't", "down", "during", "each", "else", "ever", "few", "for",
    "from", "further", "get", "had", "hadn't", "has", "hasn't", "have", "haven't", "having", "he",
    "he'd", "he'll", "he's", "her", "here", "here's", "hers", "herself", "him", "himself", "his",
    "how", "how's", "however", "i", "i'd", "i'll", "i'm", "i've", "if", "in", "into", "is",
    "isn't", "it", "it's", "its", "itself", "just", "let's", "like", "me", "more", "most",
    "mustn't", "my", "myself", "no", "nor", "not", "of", "off", "on", "once", "only", "or",
    "other", "otherwise", "ought", "our", "ours", "ourselves", "out", "over", "own", "same",
    "shall", "shan't", "she", "she'd", "she'll", "she's", "should", "shouldn't", "since", "so",
    "some", "such", "than", "that", "that's", "the", "their", "theirs", "them", "themselves",
    "then", "there", "there's", "therefore", "these", "they", "they'd", "they'll", "they're",
    "they've", "this", "those", "through", "to", "too", "under", "until", "up", "very", "was",
    "wasn't", "we", "we'd", "we'll", "we're", "we've", "were", "weren't", "what", "what's",
    "when", "when's", "where", "where's", "which", "while", "who", "who's", "whom", "why",
    "why's", "with", "won't", "would", "wouldn't", "you", "you'd", "you'll", "you're", "you've",
    "your", "yours", "yourself", "yourselves",
];

/// A word of the cloud with its relative size.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightedWord {
    pub word: String,
    pub count: usize,
    /// `count` divided by the count of the most frequent word, in (0, 1].
    pub weight: f64,
}

/// Outcome of the word cloud step.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "words", rename_all = "snake_case")]
pub enum WordCloud {
    /// `max_cloud_words` is 0, so no cloud was requested.
    Disabled,
    /// The text messages contain no usable words.
    Insufficient,
    /// Words ordered by frequency, most frequent first.
    Words(Vec<WeightedWord>),
}

impl WordCloud {
    /// Returns `true` if there are words to draw.
    pub fn is_sufficient(&self) -> bool {
        matches!(self, WordCloud::Words(_))
    }

    /// The weighted words, empty when insufficient.
    pub fn words(&self) -> &[WeightedWord] {
        match self {
            WordCloud::Words(words) => words,
            WordCloud::Disabled | WordCloud::Insufficient => &[],
        }
    }
}

/// Splits text into cloud words of two or more characters: lowercased, possessive `'s` removed,
/// numbers and stopwords dropped.
pub fn cloud_words(text: &str) -> impl Iterator<Item = String> + '_ {
    WORD_REGEX.find_iter(text).filter_map(|m| {
        let word = m.as_str().to_lowercase();
        let word = word.strip_suffix("'s").map(str::to_string).unwrap_or(word);
        let keep = !word.is_empty()
            && !word.chars().all(|c| c.is_numeric())
            && !STOPWORDS.contains(&word.as_str());
        keep.then_some(word)
    })
}

/// Builds the word cloud from text messages.
///
/// Media and link messages are excluded before joining the text. If the
/// joined text is blank or no word survives filtering, the result is
/// [`WordCloud::Insufficient`]. A `max_cloud_words` of 0 gives
/// [`WordCloud::Disabled`] without looking at the messages.
pub fn word_cloud(messages: &[Message], config: &AnalysisConfig) -> WordCloud {
    if config.max_cloud_words == 0 {
        return WordCloud::Disabled;
    }

    let text = text_messages(messages, config)
        .map(Message::content)
        .collect::<Vec<_>>()
        .join(" ");

    if text.trim().is_empty() {
        return WordCloud::Insufficient;
    }

    let words: Vec<String> = cloud_words(&text).collect();
    let tally: Tally = words.iter().map(String::as_str).collect();
    let top = tally.most_common(config.max_cloud_words);

    let Some(max) = top.first().map(|(_, count)| *count) else {
        return WordCloud::Insufficient;
    };

    WordCloud::Words(
        top.into_iter()
            .map(|(word, count)| WeightedWord {
                word,
                count,
                weight: count as f64 / max as f64,
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn msg(content: &str) -> Message {
        Message::from_parts("01/02/2023", "10:30 AM", "Alice", content).unwrap()
    }

    #[test]
    fn test_cloud_words_filtering() {
        let words: Vec<_> = cloud_words("The cat's toy and 42 Cats, the END").collect();
        assert_eq!(words, vec!["cat", "toy", "cats", "end"]);
    }

    #[test]
    fn test_word_cloud_weights() {
        let messages = vec![msg("coffee coffee tea"), msg("Coffee again")];
        let cloud = word_cloud(&messages, &AnalysisConfig::default());
        assert!(cloud.is_sufficient());
        let words = cloud.words();
        assert_eq!(words[0].word, "coffee");
        assert_eq!(words[0].count, 3);
        assert!((words[0].weight - 1.0).abs() < f64::EPSILON);
        let tea = words.iter().find(|w| w.word == "tea").unwrap();
        assert!((tea.weight - 1.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_all_media_is_insufficient() {
        let messages = vec![msg("<Media omitted>"), msg("<Media omitted>")];
        let cloud = word_cloud(&messages, &AnalysisConfig::default());
        assert_eq!(cloud, WordCloud::Insufficient);
        assert!(cloud.words().is_empty());
    }

    #[test]
    fn test_only_links_is_insufficient() {
        let cloud = word_cloud(&[msg("https://example.com")], &AnalysisConfig::default());
        assert_eq!(cloud, WordCloud::Insufficient);
    }

    #[test]
    fn test_only_stopwords_is_insufficient() {
        let cloud = word_cloud(&[msg("the and of to")], &AnalysisConfig::default());
        assert_eq!(cloud, WordCloud::Insufficient);
    }

    #[test]
    fn test_empty_table_is_insufficient() {
        assert_eq!(
            word_cloud(&[], &AnalysisConfig::default()),
            WordCloud::Insufficient
        );
    }

    #[test]
    fn test_max_words() {
        let messages = vec![msg("alpha bravo charlie delta echo")];
        let config = AnalysisConfig::new().with_max_cloud_words(3);
        assert_eq!(word_cloud(&messages, &config).words().len(), 3);
    }

    #[test]
    fn test_zero_max_words_disables_cloud() {
        let config = AnalysisConfig::new().with_max_cloud_words(0);
        let cloud = word_cloud(&[msg("plenty of words here")], &config);
        assert_eq!(cloud, WordCloud::Disabled);
        assert!(!cloud.is_sufficient());
        assert!(cloud.words().is_empty());
        // disabled wins over an empty chat too
        assert_eq!(word_cloud(&[], &config), WordCloud::Disabled);
        let json = serde_json::to_string(&cloud).unwrap();
        assert_eq!(json, r#"{"status":"disabled"}"#);
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&WordCloud::Insufficient).unwrap();
        assert_eq!(json, r#"{"status":"insufficient"}"#);

        let cloud = word_cloud(&[msg("hello")], &AnalysisConfig::default());
        let json = serde_json::to_value(&cloud).unwrap();
        assert_eq!(json["status"], "words");
        assert_eq!(json["words"][0]["word"], "hello");
    }
}
