//! Derived time fields for parsed chat lines.
//!
//! A chat line carries its date as `DD/MM/YYYY` and its time as a 12-hour
//! clock reading (`10:30 AM`). This module turns those two strings into a
//! combined timestamp plus the hour, weekday and month used by the analysis
//! projections.

use chrono::{Datelike, Month, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Weekday};

use crate::error::{ChatstatsError, Result};

/// chrono format for the date column (day first).
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// chrono format for the 12-hour time column.
pub const TIME_FORMAT: &str = "%I:%M %p";

/// Weekdays in display order, Monday first.
pub const WEEK_ORDER: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Fields computed from a message's date and time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DerivedFields {
    /// Date and time combined.
    pub datetime: NaiveDateTime,
    /// Hour of day, 0-23.
    pub hour: u32,
    /// Day of the week.
    pub weekday: Weekday,
    /// Month of the year.
    pub month: Month,
}

/// Parses a `DD/MM/YYYY` date.
///
/// # Example
///
/// ```rust
/// use chatstats::timestamp::parse_date;
/// use chrono::NaiveDate;
///
/// let date = parse_date("01/02/2023")?;
/// assert_eq!(date, NaiveDate::from_ymd_opt(2023, 2, 1).unwrap());
/// # Ok::<(), chatstats::ChatstatsError>(())
/// ```
pub fn parse_date(date_str: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(date_str, DATE_FORMAT)
        .map_err(|e| ChatstatsError::invalid_timestamp(0, date_str, e))
}

/// Parses a 12-hour `H:MM AM|PM` time.
pub fn parse_time(time_str: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(time_str, TIME_FORMAT)
        .map_err(|e| ChatstatsError::invalid_timestamp(0, time_str, e))
}

/// Computes the derived fields for a date and time.
pub fn derive(date: NaiveDate, time: NaiveTime) -> DerivedFields {
    let datetime = date.and_time(time);
    DerivedFields {
        datetime,
        hour: datetime.hour(),
        weekday: datetime.weekday(),
        month: month_of(datetime.month()),
    }
}

/// Parses both columns and derives the time fields in one step.
///
/// Returns the parsed date alongside the derived fields.
pub fn derive_from_strings(date_str: &str, time_str: &str) -> Result<(NaiveDate, DerivedFields)> {
    let date = parse_date(date_str)?;
    let time = parse_time(time_str)?;
    Ok((date, derive(date, time)))
}

/// Full English name of a weekday.
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Full English name of a month.
pub fn month_name(month: Month) -> &'static str {
    month.name()
}

// `month` is always 1-12 when it comes from a valid NaiveDateTime.
fn month_of(month: u32) -> Month {
    match month {
        1 => Month::January,
        2 => Month::February,
        3 => Month::March,
        4 => Month::April,
        5 => Month::May,
        6 => Month::June,
        7 => Month::July,
        8 => Month::August,
        9 => Month::September,
        10 => Month::October,
        11 => Month::November,
        _ => Month::December,
    }
}
