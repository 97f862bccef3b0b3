//! Property-based tests for chatstats.
//!
//! These tests generate random chats to check the invariants that hold for
//! every input: counts add up and non-matching lines change nothing.

use proptest::prelude::*;

use chatstats::analysis::{Heatmap, Report, overview, sentiment_counts, text_messages};
use chatstats::config::AnalysisConfig;
use chatstats::parser::parse_chat;

/// One well-formed chat line: (line, sender, body)
fn arb_line() -> impl Strategy<Value = (String, String, String)> {
    (
        1u32..=28,
        1u32..=12,
        2020i32..=2024,
        1u32..=12,
        0u32..60,
        prop::bool::ANY,
        // Fast: select from predefined senders
        prop::sample::select(vec![
            "Alice".to_string(),
            "Bob".to_string(),
            "Иван".to_string(),
            "+1 555 0100".to_string(),
            "User 🎉".to_string(),
        ]),
        // Fast: select from predefined bodies
        prop::sample::select(vec![
            "Hello".to_string(),
            "<Media omitted>".to_string(),
            "see https://example.com".to_string(),
            "what a great day 😀".to_string(),
            "this is terrible".to_string(),
            "note: colons: inside".to_string(),
            "Привет мир".to_string(),
            "semi;colons \"quotes\"".to_string(),
        ]),
    )
        .prop_map(|(day, month, year, hour, minute, pm, sender, body)| {
            let meridiem = if pm { "PM" } else { "AM" };
            let line = format!(
                "{day:02}/{month:02}/{year}, {hour}:{minute:02} {meridiem} - {sender}: {body}"
            );
            (line, sender, body)
        })
}

/// Lines that never match the record pattern
fn arb_noise() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        String::new(),
        "Alice was added".to_string(),
        "continuation of a message".to_string(),
        "01/02/2023, 10:30 AM - Alice created group \"Trip\"".to_string(),
        "[1/15/24, 10:30:45 AM] Alice: other export format".to_string(),
        "   ".to_string(),
    ])
}

fn arb_chat(max_len: usize) -> impl Strategy<Value = Vec<(String, String, String)>> {
    prop::collection::vec(arb_line(), 0..max_len)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // ============================================
    // PARSING PROPERTIES
    // ============================================

    /// Sender and body survive parsing (modulo trim)
    #[test]
    fn parse_is_lossless(lines in arb_chat(30)) {
        let text: Vec<_> = lines.iter().map(|(l, _, _)| l.as_str()).collect();
        let messages = parse_chat(&text.join("\n")).unwrap();

        prop_assert_eq!(messages.len(), lines.len());
        for (msg, (_, sender, body)) in messages.iter().zip(&lines) {
            prop_assert_eq!(&msg.sender, sender.trim());
            prop_assert_eq!(&msg.content, body.trim());
        }
    }

    /// Interleaved noise lines contribute nothing
    #[test]
    fn noise_lines_are_ignored(
        lines in arb_chat(20),
        noise in prop::collection::vec(arb_noise(), 0..20),
    ) {
        let clean: Vec<_> = lines.iter().map(|(l, _, _)| l.clone()).collect();
        let mut noisy = Vec::new();
        for (i, line) in clean.iter().enumerate() {
            if let Some(n) = noise.get(i) {
                noisy.push(n.clone());
            }
            noisy.push(line.clone());
        }
        noisy.extend(noise.iter().skip(clean.len()).cloned());

        let expected = parse_chat(&clean.join("\n")).unwrap();
        let actual = parse_chat(&noisy.join("\n")).unwrap();
        prop_assert_eq!(actual, expected);
    }

    // ============================================
    // COUNT PROPERTIES
    // ============================================

    /// Overview counters match direct counts
    #[test]
    fn overview_counts(lines in arb_chat(40)) {
        let text: Vec<_> = lines.iter().map(|(l, _, _)| l.as_str()).collect();
        let messages = parse_chat(&text.join("\n")).unwrap();
        let config = AnalysisConfig::default();
        let stats = overview(&messages, &config);

        prop_assert_eq!(stats.total_messages, messages.len());
        prop_assert_eq!(
            stats.media_shared,
            messages.iter().filter(|m| m.content == "<Media omitted>").count()
        );
        prop_assert_eq!(
            stats.links_shared,
            messages.iter().filter(|m| m.content.contains("http")).count()
        );
        prop_assert!(stats.participants <= stats.total_messages);
    }

    /// Heatmap, timeline and sentiment totals add up
    #[test]
    fn section_totals(lines in arb_chat(40)) {
        let text: Vec<_> = lines.iter().map(|(l, _, _)| l.as_str()).collect();
        let messages = parse_chat(&text.join("\n")).unwrap();
        let config = AnalysisConfig::default();
        let report = Report::build(&messages, &config);

        prop_assert_eq!(Heatmap::from_messages(&messages).total(), messages.len());
        prop_assert_eq!(
            report.daily_messages.iter().map(|d| d.count).sum::<usize>(),
            messages.len()
        );
        prop_assert_eq!(
            sentiment_counts(&messages, &config).total(),
            text_messages(&messages, &config).count()
        );
        prop_assert!(report.top_senders.len() <= config.top_senders);
        prop_assert!(report.emojis.len() <= config.top_emojis);
        prop_assert!(report.topics.len() <= config.top_words);
    }

    /// Timeline dates are strictly increasing
    #[test]
    fn timeline_sorted(lines in arb_chat(40)) {
        let text: Vec<_> = lines.iter().map(|(l, _, _)| l.as_str()).collect();
        let messages = parse_chat(&text.join("\n")).unwrap();
        let report = Report::build(&messages, &AnalysisConfig::default());
        prop_assert!(report.daily_messages.windows(2).all(|w| w[0].date < w[1].date));
    }

    /// Top senders are sorted by count, descending
    #[test]
    fn top_senders_sorted(lines in arb_chat(40)) {
        let text: Vec<_> = lines.iter().map(|(l, _, _)| l.as_str()).collect();
        let messages = parse_chat(&text.join("\n")).unwrap();
        let report = Report::build(&messages, &AnalysisConfig::default());
        prop_assert!(report.top_senders.windows(2).all(|w| w[0].count >= w[1].count));
    }

    // ============================================
    // SENTIMENT PROPERTIES
    // ============================================

    /// Polarity stays within [-1, 1] for arbitrary text
    #[test]
    fn polarity_bounded(text in "\\PC{0,80}") {
        let p = chatstats::analysis::polarity(&text);
        prop_assert!((-1.0..=1.0).contains(&p));
    }
}
