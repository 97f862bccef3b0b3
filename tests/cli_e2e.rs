//! End-to-end CLI tests for chatstats.
//!
//! These tests verify the complete CLI workflow by running the actual binary
//! with various arguments and checking the output.
//!
//! # Test Categories
//!
//! - **Basic functionality**: Text and JSON reports on stdout
//! - **Output files**: `-o` and `--export-csv`
//! - **Filters**: Date and sender filtering
//! - **Configuration**: TOML file and flag overrides
//! - **Error handling**: Proper error messages for bad input
//! - **Edge cases**: Empty files, stdin, all-media chats
//!
//! # Running Tests
//!
//! ```bash
//! cargo test --test cli_e2e
//! ```

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::{TempDir, tempdir};

// ============================================================================
// Test Fixtures
// ============================================================================

const CHAT: &str = "\
06/02/2023, 9:15 AM - Alice: Good morning everyone 😀
06/02/2023, 9:16 AM - Bob: <Media omitted>
06/02/2023, 9:20 AM - Alice: check https://example.com
Alice was added
07/02/2023, 10:00 PM - Carol: this traffic is terrible
07/02/2023, 10:05 PM - Alice: morning coffee was great 😀😀
";

/// Creates a temporary directory with test fixtures.
fn setup_fixtures() -> TempDir {
    let dir = tempdir().expect("Failed to create temp dir");

    fs::write(dir.path().join("chat.txt"), CHAT).unwrap();
    fs::write(dir.path().join("empty.txt"), "").unwrap();
    fs::write(
        dir.path().join("media.txt"),
        "06/02/2023, 9:15 AM - Alice: <Media omitted>\n06/02/2023, 9:16 AM - Bob: <Media omitted>\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("bad_date.txt"),
        "06/02/2023, 9:15 AM - Alice: Hi\n31/04/2023, 9:16 AM - Bob: Hi\n",
    )
    .unwrap();
    fs::write(dir.path().join("top1.toml"), "top_senders = 1\n").unwrap();
    fs::write(dir.path().join("broken.toml"), "top_senders = \"many\"\n").unwrap();

    dir
}

fn chatstats_cmd() -> Command {
    let cmd = std::process::Command::new(env!("CARGO_BIN_EXE_chatstats"));
    Command::from_std(cmd)
}

fn fixture(dir: &TempDir, name: &str) -> PathBuf {
    dir.path().join(name)
}

fn json_stdout(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout is JSON")
}

// ============================================================================
// Basic Functionality Tests
// ============================================================================

mod basic_functionality {
    use super::*;

    #[test]
    fn test_text_report_on_stdout() {
        let dir = setup_fixtures();

        chatstats_cmd()
            .arg(fixture(&dir, "chat.txt"))
            .assert()
            .success()
            .stdout(predicate::str::contains("Chat Overview"))
            .stdout(predicate::str::contains("Total Messages  5"))
            .stdout(predicate::str::contains("Participants    3"))
            .stdout(predicate::str::contains("Media Shared    1"))
            .stdout(predicate::str::contains("Links Shared    1"))
            .stdout(predicate::str::contains("Sentiment Analysis"));
    }

    #[test]
    fn test_progress_goes_to_stderr() {
        let dir = setup_fixtures();

        chatstats_cmd()
            .arg(fixture(&dir, "chat.txt"))
            .assert()
            .success()
            .stderr(predicate::str::contains("Found 5 messages"))
            .stdout(predicate::str::contains("Found").not());
    }

    #[test]
    fn test_json_report_on_stdout() {
        let dir = setup_fixtures();

        let output = chatstats_cmd()
            .arg(fixture(&dir, "chat.txt"))
            .args(["-f", "json"])
            .output()
            .unwrap();

        assert!(output.status.success());
        let json = json_stdout(&output);
        assert_eq!(json["overview"]["total_messages"], 5);
        assert_eq!(json["overview"]["participants"], 3);
        assert_eq!(json["top_senders"][0]["sender"], "Alice");
        assert_eq!(json["top_senders"][0]["count"], 3);
        assert_eq!(json["emojis"][0]["count"], 3);
        assert_eq!(json["heatmap"]["Monday"][9], 3);
        assert_eq!(json["sentiment"]["negative"], 1);
    }

    #[test]
    fn test_quiet_mode() {
        let dir = setup_fixtures();

        chatstats_cmd()
            .arg(fixture(&dir, "chat.txt"))
            .arg("-q")
            .assert()
            .success()
            .stderr(predicate::str::is_empty())
            .stdout(predicate::str::contains("Chat Overview"));
    }

    #[test]
    fn test_stdin_input() {
        chatstats_cmd()
            .args(["-", "-f", "json", "-q"])
            .write_stdin(CHAT)
            .assert()
            .success()
            .stdout(predicate::str::contains("\"total_messages\": 5"));
    }
}

// ============================================================================
// Output File Tests
// ============================================================================

mod output_files {
    use super::*;

    #[test]
    fn test_report_to_file() {
        let dir = setup_fixtures();
        let out = fixture(&dir, "report.json");

        chatstats_cmd()
            .arg(fixture(&dir, "chat.txt"))
            .args(["-f", "json", "-o"])
            .arg(&out)
            .assert()
            .success()
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains("Done"));

        let content = fs::read_to_string(&out).unwrap();
        let json: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(json["overview"]["media_shared"], 1);
    }

    #[test]
    fn test_text_report_to_file() {
        let dir = setup_fixtures();
        let out = fixture(&dir, "report.txt");

        chatstats_cmd()
            .arg(fixture(&dir, "chat.txt"))
            .arg("-o")
            .arg(&out)
            .assert()
            .success();

        let content = fs::read_to_string(&out).unwrap();
        assert!(content.contains("Most Active Users"));
        assert!(content.contains("Activity Heatmap"));
    }

    #[test]
    fn test_export_csv() {
        let dir = setup_fixtures();
        let csv_path = fixture(&dir, "messages.csv");

        chatstats_cmd()
            .arg(fixture(&dir, "chat.txt"))
            .arg("--export-csv")
            .arg(&csv_path)
            .arg("-q")
            .assert()
            .success();

        let content = fs::read_to_string(&csv_path).unwrap();
        let lines: Vec<_> = content.lines().collect();
        assert_eq!(
            lines[0],
            "Date;Time;Sender;Message;Datetime;Hour;DayOfWeek;Month"
        );
        assert_eq!(lines.len(), 6);
        assert!(lines[2].starts_with("2023-02-06;9:16 AM;Bob;<Media omitted>;"));
        assert!(lines[2].ends_with(";9;Monday;February"));
    }

    #[test]
    fn test_unwritable_output() {
        let dir = setup_fixtures();

        chatstats_cmd()
            .arg(fixture(&dir, "chat.txt"))
            .args(["-o", "/nonexistent/dir/report.txt"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Error:"));
    }
}

// ============================================================================
// Filter Tests
// ============================================================================

mod filters {
    use super::*;

    #[test]
    fn test_filter_by_sender() {
        let dir = setup_fixtures();

        let output = chatstats_cmd()
            .arg(fixture(&dir, "chat.txt"))
            .args(["--from", "alice", "-f", "json"])
            .output()
            .unwrap();

        assert!(output.status.success());
        let json = json_stdout(&output);
        assert_eq!(json["overview"]["total_messages"], 3);
        assert_eq!(json["overview"]["participants"], 1);
    }

    #[test]
    fn test_filter_by_date() {
        let dir = setup_fixtures();

        let output = chatstats_cmd()
            .arg(fixture(&dir, "chat.txt"))
            .args(["--after", "2023-02-07", "-f", "json"])
            .output()
            .unwrap();

        let json = json_stdout(&output);
        assert_eq!(json["overview"]["total_messages"], 2);
        assert_eq!(json["daily_messages"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_filter_date_range_excludes_all() {
        let dir = setup_fixtures();

        chatstats_cmd()
            .arg(fixture(&dir, "chat.txt"))
            .args(["--after", "2023-03-01", "--before", "2023-03-31"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Total Messages  0"));
    }

    #[test]
    fn test_invalid_filter_date() {
        let dir = setup_fixtures();

        chatstats_cmd()
            .arg(fixture(&dir, "chat.txt"))
            .args(["--after", "07/02/2023"])
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("Error:"))
            .stderr(predicate::str::contains("YYYY-MM-DD"));
    }
}

// ============================================================================
// Configuration Tests
// ============================================================================

mod configuration {
    use super::*;

    #[test]
    fn test_config_file() {
        let dir = setup_fixtures();

        let output = chatstats_cmd()
            .arg(fixture(&dir, "chat.txt"))
            .arg("-c")
            .arg(fixture(&dir, "top1.toml"))
            .args(["-f", "json"])
            .output()
            .unwrap();

        let json = json_stdout(&output);
        assert_eq!(json["top_senders"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_flags_override_config() {
        let dir = setup_fixtures();

        let output = chatstats_cmd()
            .arg(fixture(&dir, "chat.txt"))
            .arg("--config")
            .arg(fixture(&dir, "top1.toml"))
            .args(["--top-senders", "2", "--top-words", "1", "-f", "json"])
            .output()
            .unwrap();

        let json = json_stdout(&output);
        assert_eq!(json["top_senders"].as_array().unwrap().len(), 2);
        assert_eq!(json["topics"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_broken_config() {
        let dir = setup_fixtures();

        chatstats_cmd()
            .arg(fixture(&dir, "chat.txt"))
            .arg("-c")
            .arg(fixture(&dir, "broken.toml"))
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid configuration"));
    }
}

// ============================================================================
// Error Handling Tests
// ============================================================================

mod error_handling {
    use super::*;

    #[test]
    fn test_missing_input() {
        chatstats_cmd()
            .arg("/definitely/not/here.txt")
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("Error: IO error"));
    }

    #[test]
    fn test_invalid_timestamp() {
        let dir = setup_fixtures();

        chatstats_cmd()
            .arg(fixture(&dir, "bad_date.txt"))
            .assert()
            .failure()
            .stderr(predicate::str::contains("line 2"))
            .stderr(predicate::str::contains("31/04/2023"));
    }

    #[test]
    fn test_unknown_format() {
        let dir = setup_fixtures();

        chatstats_cmd()
            .arg(fixture(&dir, "chat.txt"))
            .args(["-f", "csv"])
            .assert()
            .failure();
    }

    #[test]
    fn test_missing_argument() {
        chatstats_cmd().assert().failure();
    }
}

// ============================================================================
// Edge Case Tests
// ============================================================================

mod edge_cases {
    use super::*;

    #[test]
    fn test_empty_file() {
        let dir = setup_fixtures();

        chatstats_cmd()
            .arg(fixture(&dir, "empty.txt"))
            .assert()
            .success()
            .stdout(predicate::str::contains("Total Messages  0"))
            .stdout(predicate::str::contains("Not enough words"));
    }

    #[test]
    fn test_all_media_chat() {
        let dir = setup_fixtures();

        chatstats_cmd()
            .arg(fixture(&dir, "media.txt"))
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "Not enough words to generate a Word Cloud. Please upload a longer chat file.",
            ))
            .stdout(predicate::str::contains("Media Shared    2"));
    }

    #[test]
    fn test_help_and_version() {
        chatstats_cmd()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("EXAMPLES"));

        chatstats_cmd()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }
}
