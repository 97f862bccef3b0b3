//! Plain-text report writer.
//!
//! Renders the sections in a fixed order with horizontal bar charts and a
//! shaded weekday/hour grid, suitable for a terminal.

use std::fmt;
use std::fs;

use crate::analysis::{INSUFFICIENT_TEXT_WARNING, Report, WordCloud};
use crate::analysis::heatmap::HOURS;
use crate::error::Result;
use crate::timestamp::weekday_name;

const BAR: char = '█';
const BAR_WIDTH: usize = 30;
const SHADES: [char; 5] = [' ', '░', '▒', '▓', '█'];
/// Words listed under the word cloud heading.
const CLOUD_PREVIEW: usize = 15;

/// Writes the text report to a file.
pub fn write_text(report: &Report, output_path: &str) -> Result<()> {
    fs::write(output_path, to_text(report))?;
    Ok(())
}

/// Renders the report as text.
///
/// # Example
///
/// ```rust
/// use chatstats::analysis::Report;
/// use chatstats::config::AnalysisConfig;
/// use chatstats::core::output::to_text;
///
/// let report = Report::build(&[], &AnalysisConfig::default());
/// let text = to_text(&report);
/// assert!(text.contains("Total Messages"));
/// assert!(text.contains("Not enough words"));
/// ```
pub fn to_text(report: &Report) -> String {
    TextReport(report).to_string()
}

struct TextReport<'a>(&'a Report);

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.0;

        heading(f, "Chat Overview")?;
        writeln!(f, "Total Messages  {}", r.overview.total_messages)?;
        writeln!(f, "Participants    {}", r.overview.participants)?;
        writeln!(f, "Media Shared    {}", r.overview.media_shared)?;
        writeln!(f, "Links Shared    {}", r.overview.links_shared)?;

        heading(f, "Word Cloud")?;
        match &r.word_cloud {
            WordCloud::Disabled => writeln!(f, "(disabled)")?,
            WordCloud::Insufficient => writeln!(f, "{INSUFFICIENT_TEXT_WARNING}")?,
            WordCloud::Words(words) => {
                writeln!(f, "{} distinct words, top {}:", words.len(), CLOUD_PREVIEW.min(words.len()))?;
                let rows: Vec<_> = words
                    .iter()
                    .take(CLOUD_PREVIEW)
                    .map(|w| (w.word.clone(), w.count))
                    .collect();
                bar_chart(f, &rows)?;
            }
        }

        heading(f, "Most Active Users")?;
        let rows: Vec<_> = r
            .top_senders
            .iter()
            .map(|s| (s.sender.clone(), s.count))
            .collect();
        bar_chart(f, &rows)?;

        heading(f, "Messages Over Time")?;
        let rows: Vec<_> = r
            .daily_messages
            .iter()
            .map(|d| (d.date.format("%Y-%m-%d").to_string(), d.count))
            .collect();
        bar_chart(f, &rows)?;

        heading(f, "Activity Heatmap")?;
        heatmap(f, r)?;

        heading(f, "Emoji Usage")?;
        if r.emojis.is_empty() {
            writeln!(f, "(none)")?;
        }
        for e in &r.emojis {
            writeln!(f, "{}  {:>5}  ({:.1}%)", e.emoji, e.count, e.share)?;
        }

        heading(f, "Most Discussed Topics")?;
        let rows: Vec<_> = r
            .topics
            .iter()
            .map(|t| (t.topic.clone(), t.count))
            .collect();
        bar_chart(f, &rows)?;

        heading(f, "Sentiment Analysis")?;
        let total = r.sentiment.total();
        let rows: Vec<_> = r
            .sentiment
            .iter()
            .map(|(s, count)| (s.label().to_string(), count))
            .collect();
        let max = rows.iter().map(|(_, c)| *c).max().unwrap_or(0);
        for (label, count) in &rows {
            writeln!(
                f,
                "{label:<8}  {:<BAR_WIDTH$}  {count} ({:.1}%)",
                bar(*count, max),
                percent(*count, total)
            )?;
        }

        Ok(())
    }
}

fn heading(f: &mut fmt::Formatter<'_>, title: &str) -> fmt::Result {
    writeln!(f)?;
    writeln!(f, "{title}")?;
    writeln!(f, "{}", "─".repeat(title.chars().count()))
}

fn bar(count: usize, max: usize) -> String {
    if count == 0 || max == 0 {
        return String::new();
    }
    std::iter::repeat_n(BAR, (count * BAR_WIDTH).div_ceil(max)).collect()
}

fn percent(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 * 100.0 / total as f64
    }
}

fn bar_chart(f: &mut fmt::Formatter<'_>, rows: &[(String, usize)]) -> fmt::Result {
    if rows.is_empty() {
        return writeln!(f, "(none)");
    }
    let width = rows.iter().map(|(l, _)| l.chars().count()).max().unwrap_or(0);
    let max = rows.iter().map(|(_, c)| *c).max().unwrap_or(0);
    for (label, count) in rows {
        writeln!(f, "{label:<width$}  {:<BAR_WIDTH$}  {count}", bar(*count, max))?;
    }
    Ok(())
}

fn shade(count: usize, max: usize) -> char {
    if count == 0 || max == 0 {
        return SHADES[0];
    }
    let level = (count * (SHADES.len() - 1)).div_ceil(max);
    SHADES[level.min(SHADES.len() - 1)]
}

fn heatmap(f: &mut fmt::Formatter<'_>, r: &Report) -> fmt::Result {
    const LABEL: usize = 10;
    let max = r.heatmap.max();

    write!(f, "{:LABEL$}", "")?;
    for hour in 0..HOURS {
        write!(f, "{hour:<2}")?;
    }
    writeln!(f)?;

    for (day, row) in r.heatmap.rows() {
        write!(f, "{:<LABEL$}", weekday_name(day))?;
        for &count in row {
            let c = shade(count, max);
            write!(f, "{c}{c}")?;
        }
        writeln!(f)?;
    }

    match r.heatmap.busiest() {
        Some((day, hour, count)) => writeln!(
            f,
            "Busiest: {} {hour:02}:00 ({count} messages)",
            weekday_name(day)
        ),
        None => writeln!(f, "(no activity)"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AnalysisConfig;
    use crate::parser::parse_chat;

    const CHAT: &str = "\
06/02/2023, 9:15 AM - Alice: Good morning everyone 😀
06/02/2023, 9:16 AM - Bob: <Media omitted>
06/02/2023, 9:20 AM - Alice: check https://example.com
07/02/2023, 10:00 PM - Carol: this traffic is terrible
";

    fn render(chat: &str) -> String {
        let messages = parse_chat(chat).unwrap();
        to_text(&Report::build(&messages, &AnalysisConfig::default()))
    }

    #[test]
    fn test_sections_in_order() {
        let text = render(CHAT);
        let sections = [
            "Chat Overview",
            "Word Cloud",
            "Most Active Users",
            "Messages Over Time",
            "Activity Heatmap",
            "Emoji Usage",
            "Most Discussed Topics",
            "Sentiment Analysis",
        ];
        let positions: Vec<_> = sections.iter().map(|s| text.find(s).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_overview_numbers() {
        let text = render(CHAT);
        assert!(text.contains("Total Messages  4"));
        assert!(text.contains("Participants    3"));
        assert!(text.contains("Media Shared    1"));
        assert!(text.contains("Links Shared    1"));
    }

    #[test]
    fn test_bars_and_heatmap() {
        let text = render(CHAT);
        assert!(text.contains("2023-02-06"));
        assert!(text.contains(BAR));
        assert!(text.contains("Busiest: Monday 09:00 (3 messages)"));
        assert!(text.contains("Tuesday"));
    }

    #[test]
    fn test_empty_report() {
        let text = render("");
        assert!(text.contains("Total Messages  0"));
        assert!(text.contains(INSUFFICIENT_TEXT_WARNING));
        assert!(text.contains("(no activity)"));
        assert!(text.contains("Negative"));
    }

    #[test]
    fn test_disabled_word_cloud() {
        let messages = parse_chat(CHAT).unwrap();
        let config = AnalysisConfig::new().with_max_cloud_words(0);
        let text = to_text(&Report::build(&messages, &config));
        assert!(text.contains("(disabled)"));
        assert!(!text.contains(INSUFFICIENT_TEXT_WARNING));
    }

    #[test]
    fn test_bar_scaling() {
        assert_eq!(bar(0, 10), "");
        assert_eq!(bar(10, 10).chars().count(), BAR_WIDTH);
        assert_eq!(bar(1, 1000).chars().count(), 1);
    }

    #[test]
    fn test_shade_ramp() {
        assert_eq!(shade(0, 4), ' ');
        assert_eq!(shade(1, 4), '░');
        assert_eq!(shade(4, 4), '█');
    }

    #[test]
    fn test_write_text() {
        let temp_file = tempfile::NamedTempFile::new().unwrap();
        let path = temp_file.path().to_str().unwrap();
        let report = Report::build(&[], &AnalysisConfig::default());
        write_text(&report, path).unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), to_text(&report));
    }
}
