// Date utility functions
// Calendar-date sequence generation and whole-day arithmetic for the grid

use chrono::{DateTime, Days, Local, NaiveDate, NaiveTime, TimeZone};

use crate::error::DateError;

/// Wire and display format for calendar dates (zero padded, sorts chronologically)
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `yyyy-mm-dd` identifier into a calendar date.
pub fn parse_date(input: &str) -> Result<NaiveDate, DateError> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT)
        .map_err(|_| DateError::Unparseable(input.to_string()))
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Today's calendar date in the local timezone.
pub fn start_of_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Shift a date by a signed number of calendar days.
pub fn add_days(date: NaiveDate, days: i64) -> Result<NaiveDate, DateError> {
    let magnitude = Days::new(days.unsigned_abs());
    let shifted = if days >= 0 {
        date.checked_add_days(magnitude)
    } else {
        date.checked_sub_days(magnitude)
    };
    shifted.ok_or(DateError::OutOfRange)
}

/// Produce `count` consecutive calendar dates starting at `anchor`.
///
/// The sequence is materialized; every entry is exactly one calendar day
/// after the previous one, across month and year boundaries. A `count` that
/// runs past the last representable date is an error, checked before
/// anything is allocated.
pub fn each_day(anchor: NaiveDate, count: usize) -> Result<Vec<NaiveDate>, DateError> {
    if let Some(last_offset) = count.checked_sub(1) {
        let last_offset = i64::try_from(last_offset).map_err(|_| DateError::OutOfRange)?;
        add_days(anchor, last_offset)?;
    }

    let mut days = Vec::with_capacity(count);
    let mut current = anchor;
    for i in 0..count {
        if i > 0 {
            current = current.succ_opt().ok_or(DateError::OutOfRange)?;
        }
        days.push(current);
    }
    Ok(days)
}

/// Same as [`each_day`] but starting from a `yyyy-mm-dd` anchor string.
pub fn each_day_from(anchor: &str, count: usize) -> Result<Vec<NaiveDate>, DateError> {
    each_day(parse_date(anchor)?, count)
}

/// Whole calendar days from `from` to `to` (negative when `to` is earlier).
pub fn difference_in_days(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}

/// Number of days covered by the inclusive range `[start, end]`.
///
/// Returns 0 when `end` precedes `start`.
pub fn inclusive_day_count(start: NaiveDate, end: NaiveDate) -> i64 {
    (difference_in_days(start, end) + 1).max(0)
}

/// Whole days between two local timestamps.
///
/// Both sides are pinned to their calendar date first, so a 23 or 25 hour
/// day around a daylight-saving switch still counts as one day.
pub fn whole_days_between(from: DateTime<Local>, to: DateTime<Local>) -> i64 {
    difference_in_days(from.date_naive(), to.date_naive())
}

/// Local midnight for a calendar date.
///
/// Where midnight does not exist (a DST gap at 00:00) the earliest valid
/// instant of that day is used instead.
pub fn start_of_day(date: NaiveDate) -> Option<DateTime<Local>> {
    let midnight = date.and_time(NaiveTime::from_hms_opt(0, 0, 0)?);
    Local
        .from_local_datetime(&midnight)
        .earliest()
        .or_else(|| {
            (1..=3).find_map(|hour| {
                let time = NaiveTime::from_hms_opt(hour, 0, 0)?;
                Local.from_local_datetime(&date.and_time(time)).earliest()
            })
        })
}

/// Short weekday label for grid headers ("Mon", "Tue", ...).
pub fn weekday_label(date: NaiveDate) -> String {
    date.format("%a").to_string()
}

/// Display date for grid headers.
pub fn display_label(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}
