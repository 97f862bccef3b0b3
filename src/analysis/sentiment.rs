//! Lexicon-based sentiment polarity.
//!
//! Each text message gets a polarity in `[-1.0, 1.0]` from a small English
//! lexicon. Intensifiers ("very", "extremely") scale the next scored word,
//! negations ("not", "never", "don't") flip and damp the scored words that
//! follow within a short window. The polarity of a message is the mean of
//! its scored words; a message with none of them scores `0.0`.
//!
//! Messages are then bucketed with a symmetric neutral band around zero.

use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;
use serde::Serialize;

use super::text_messages;
use crate::Message;
use crate::config::AnalysisConfig;

static LEXICON: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    [
        // positive
        ("good", 0.7),
        ("great", 0.8),
        ("excellent", 1.0),
        ("awesome", 1.0),
        ("amazing", 0.6),
        ("wonderful", 1.0),
        ("fantastic", 0.4),
        ("perfect", 1.0),
        ("best", 1.0),
        ("better", 0.5),
        ("nice", 0.6),
        ("beautiful", 0.85),
        ("lovely", 0.5),
        ("love", 0.5),
        ("loved", 0.7),
        ("like", 0.2),
        ("happy", 0.8),
        ("glad", 0.5),
        ("fun", 0.3),
        ("funny", 0.25),
        ("cool", 0.35),
        ("sweet", 0.35),
        ("cute", 0.5),
        ("enjoy", 0.4),
        ("enjoyed", 0.4),
        ("excited", 0.4),
        ("exciting", 0.3),
        ("brilliant", 0.9),
        ("congrats", 0.5),
        ("congratulations", 0.5),
        ("thanks", 0.2),
        ("thank", 0.2),
        ("welcome", 0.8),
        ("yay", 0.6),
        ("lol", 0.8),
        ("haha", 0.2),
        ("pleasure", 0.5),
        ("proud", 0.8),
        ("safe", 0.5),
        ("easy", 0.43),
        ("interesting", 0.5),
        ("delicious", 1.0),
        ("super", 0.33),
        ("right", 0.29),
        ("fine", 0.42),
        // negative
        ("bad", -0.7),
        ("terrible", -1.0),
        ("awful", -1.0),
        ("horrible", -1.0),
        ("worst", -1.0),
        ("worse", -0.4),
        ("hate", -0.8),
        ("hated", -0.9),
        ("sad", -0.5),
        ("angry", -0.5),
        ("upset", -0.5),
        ("annoying", -0.8),
        ("annoyed", -0.4),
        ("boring", -1.0),
        ("bored", -0.5),
        ("stupid", -0.8),
        ("ugly", -0.7),
        ("sick", -0.71),
        ("tired", -0.4),
        ("wrong", -0.5),
        ("sorry", -0.5),
        ("poor", -0.4),
        ("disappointed", -0.75),
        ("disappointing", -0.6),
        ("disgusting", -1.0),
        ("crazy", -0.6),
        ("scary", -0.5),
        ("hard", -0.29),
        ("difficult", -0.5),
        ("late", -0.3),
        ("broken", -0.4),
        ("lost", -0.2),
        ("pain", -0.5),
        ("painful", -0.7),
        ("miss", -0.2),
        ("cry", -0.6),
        ("ugh", -0.6),
        ("damn", -0.4),
        ("fail", -0.5),
        ("failed", -0.5),
        ("problem", -0.3),
        ("unfortunately", -0.5),
        ("worried", -0.4),
    ]
    .into_iter()
    .collect()
});

static INTENSIFIERS: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    [
        ("very", 1.3),
        ("really", 1.3),
        ("so", 1.3),
        ("too", 1.2),
        ("totally", 1.3),
        ("super", 1.3),
        ("quite", 1.1),
        ("extremely", 1.5),
        ("absolutely", 1.5),
        ("incredibly", 1.5),
    ]
    .into_iter()
    .collect()
});

const NEGATIONS: &[&str] = &[
    "not", "no", "never", "nothing", "nobody", "none", "neither", "nor", "nowhere", "cannot",
];

/// Scored emoticons, matched on whitespace-separated tokens.
const EMOTICONS: &[(&str, f64)] = &[
    (":)", 0.5),
    (":-)", 0.5),
    (":d", 1.0),
    (":-d", 1.0),
    (";)", 0.4),
    (":p", 0.3),
    (":(", -0.75),
    (":-(", -0.75),
    (":'(", -0.8),
];

/// Scored words stay negated for this many words after the negation.
const NEGATION_WINDOW: usize = 3;

/// Damping applied to a negated score (its sign is flipped too).
const NEGATION_FACTOR: f64 = -0.5;

fn is_negation(token: &str) -> bool {
    NEGATIONS.contains(&token) || token.ends_with("n't")
}

/// Polarity of a piece of text in `[-1.0, 1.0]`.
///
/// # Example
///
/// ```rust
/// use chatstats::analysis::polarity;
///
/// assert!(polarity("what a great day") > 0.0);
/// assert!(polarity("this is not good") < 0.0);
/// assert_eq!(polarity("the bus leaves at noon"), 0.0);
/// ```
pub fn polarity(text: &str) -> f64 {
    let lowered = text.to_lowercase();
    let mut scores = Vec::new();

    for token in lowered.split_whitespace() {
        if let Some(&(_, score)) = EMOTICONS.iter().find(|(e, _)| *e == token) {
            scores.push(score);
        }
    }

    let mut intensity = 1.0;
    let mut negated_for = 0usize;

    let words = lowered
        .split(|c: char| !c.is_alphanumeric() && c != '\'')
        .map(|w| w.trim_matches('\''))
        .filter(|w| !w.is_empty());

    for word in words {
        if is_negation(word) {
            negated_for = NEGATION_WINDOW;
            continue;
        }

        if let Some(&factor) = INTENSIFIERS.get(word) {
            // "super" is both; as a modifier it only counts before a scored word
            intensity *= factor;
            if !LEXICON.contains_key(word) {
                continue;
            }
        }

        if let Some(&base) = LEXICON.get(word) {
            let mut score = (base * intensity).clamp(-1.0, 1.0);
            if negated_for > 0 {
                score *= NEGATION_FACTOR;
            }
            scores.push(score);
            intensity = 1.0;
        } else {
            // an intensifier only reaches the next word
            intensity = 1.0;
        }

        negated_for = negated_for.saturating_sub(1);
    }

    if scores.is_empty() {
        return 0.0;
    }

    let mean = scores.iter().sum::<f64>() / scores.len() as f64;
    mean.clamp(-1.0, 1.0)
}

/// Sentiment bucket of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Sentiment {
    Negative,
    Neutral,
    Positive,
}

impl Sentiment {
    /// All buckets in display order.
    pub const ALL: [Sentiment; 3] = [Sentiment::Negative, Sentiment::Neutral, Sentiment::Positive];

    /// Buckets a polarity: `p <= -band` is negative, `p > band` positive,
    /// anything in between neutral.
    pub fn classify(polarity: f64, band: f64) -> Self {
        if polarity <= -band {
            Sentiment::Negative
        } else if polarity > band {
            Sentiment::Positive
        } else {
            Sentiment::Neutral
        }
    }

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            Sentiment::Negative => "Negative",
            Sentiment::Neutral => "Neutral",
            Sentiment::Positive => "Positive",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Number of text messages per sentiment bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SentimentCounts {
    pub negative: usize,
    pub neutral: usize,
    pub positive: usize,
}

impl SentimentCounts {
    /// Count for one bucket.
    pub fn get(&self, sentiment: Sentiment) -> usize {
        match sentiment {
            Sentiment::Negative => self.negative,
            Sentiment::Neutral => self.neutral,
            Sentiment::Positive => self.positive,
        }
    }

    /// Total number of classified messages.
    pub fn total(&self) -> usize {
        self.negative + self.neutral + self.positive
    }

    /// Buckets and counts in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Sentiment, usize)> + '_ {
        Sentiment::ALL.into_iter().map(|s| (s, self.get(s)))
    }

    fn record(&mut self, sentiment: Sentiment) {
        match sentiment {
            Sentiment::Negative => self.negative += 1,
            Sentiment::Neutral => self.neutral += 1,
            Sentiment::Positive => self.positive += 1,
        }
    }
}

/// Classifies every text message and counts the buckets.
pub fn sentiment_counts(messages: &[Message], config: &AnalysisConfig) -> SentimentCounts {
    let mut counts = SentimentCounts::default();
    for msg in text_messages(messages, config) {
        counts.record(Sentiment::classify(polarity(&msg.content), config.neutral_band));
    }
    counts
}
