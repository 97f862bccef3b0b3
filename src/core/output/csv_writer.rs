//! CSV export of the parsed table.

use std::fs::File;
use std::io::Write;

use crate::Message;
use crate::error::{ChatstatsError, Result};

/// Column names, in order.
pub const CSV_HEADER: [&str; 8] = [
    "Date",
    "Time",
    "Sender",
    "Message",
    "Datetime",
    "Hour",
    "DayOfWeek",
    "Month",
];

/// Writes the parsed table to a CSV file with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: `Date;Time;Sender;Message;Datetime;Hour;DayOfWeek;Month`
/// - `Date` as `YYYY-MM-DD`, `Datetime` as `YYYY-MM-DD HH:MM:SS`
/// - Encoding: UTF-8
pub fn write_csv(messages: &[Message], output_path: &str) -> Result<()> {
    let file = File::create(output_path)?;
    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_writer(file);
    write_records(&mut writer, messages)?;
    writer.flush()?;
    Ok(())
}

/// Same as [`write_csv`], but returns the CSV text.
pub fn to_csv(messages: &[Message]) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_writer(Vec::new());
    write_records(&mut writer, messages)?;
    let bytes = writer
        .into_inner()
        .map_err(|e| ChatstatsError::Io(e.into_error()))?;
    Ok(String::from_utf8(bytes)?)
}

fn write_records<W: Write>(writer: &mut csv::Writer<W>, messages: &[Message]) -> Result<()> {
    writer.write_record(CSV_HEADER)?;
    for msg in messages {
        writer.write_record(build_record(msg))?;
    }
    Ok(())
}

fn build_record(msg: &Message) -> [String; 8] {
    [
        msg.date.format("%Y-%m-%d").to_string(),
        msg.time.clone(),
        msg.sender.clone(),
        msg.content.clone(),
        msg.datetime.format("%Y-%m-%d %H:%M:%S").to_string(),
        msg.hour.to_string(),
        msg.day_name().to_string(),
        msg.month_name().to_string(),
    ]
}
