//! JSON report writer.

use std::fs::File;
use std::io::Write;

use crate::analysis::Report;
use crate::error::Result;

/// Writes the report to a JSON file.
///
/// # Format
/// ```json
/// {
///   "overview": {"total_messages": 2, "participants": 2, ...},
///   "word_cloud": {"status": "words", "words": [...]},
///   ...
/// }
/// ```
pub fn write_json(report: &Report, output_path: &str) -> Result<()> {
    let json = to_json(report)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    file.write_all(b"\n")?;
    Ok(())
}

/// Converts the report to a pretty-printed JSON string.
pub fn to_json(report: &Report) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
