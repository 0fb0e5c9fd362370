use chrono::{DateTime, Days, Local, NaiveDate, NaiveTime, TimeZone};
use std::fmt;
use std::ops::RangeInclusive;
use thiserror::Error;

/// Exact length of a `YYYY-MM-DD` deadline
pub const DATE_TEXT_LEN: usize = 10;

const YEAR_RANGE: RangeInclusive<u32> = 1000..=9999;
const MONTH_RANGE: RangeInclusive<u32> = 1..=12;
const DAY_RANGE: RangeInclusive<u32> = 1..=31;

/// Get the current date in local timezone
pub fn local_date_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Component of a date that failed its range check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateField {
    Year,
    Month,
    Day,
}

impl fmt::Display for DateField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DateField::Year => "year",
            DateField::Month => "month",
            DateField::Day => "day",
        };
        f.write_str(name)
    }
}

/// Why a deadline string was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    #[error("Invalid date format. Use YYYY-MM-DD (e.g., '2025-12-31')")]
    BadFormat,

    #[error("Invalid {field} {value}: year must be 1000-9999, month 1-12, day 1-31")]
    OutOfRange { field: DateField, value: u32 },
}

/// A validated deadline
///
/// `day` is only range-checked (1-31), never checked against the length of
/// the month, so `2025-02-31` is a valid deadline. Its `instant` is local
/// midnight of the day the overflow rolls into (2025-03-03).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeadlineDate {
    pub year: u32,
    pub month: u32,
    pub day: u32,
    /// Unix seconds of local midnight of the date
    pub instant: i64,
}

impl DeadlineDate {
    /// The calendar date the instant falls on, after day overflow
    pub fn calendar_date(&self) -> Option<NaiveDate> {
        normalized_date(self.year, self.month, self.day)
    }
}

/// Validate a `YYYY-MM-DD` deadline and compute its local-midnight instant
///
/// # Arguments
/// * `text` - Deadline text as typed by the user
///
/// # Returns
/// The parsed components, or a `DateError` telling a malformed string apart
/// from a field that is out of range
pub fn parse_deadline(text: &str) -> Result<DeadlineDate, DateError> {
    let bytes = text.as_bytes();
    if bytes.len() != DATE_TEXT_LEN || bytes[4] != b'-' || bytes[7] != b'-' {
        return Err(DateError::BadFormat);
    }

    let year = parse_digits(&bytes[0..4])?;
    let month = parse_digits(&bytes[5..7])?;
    let day = parse_digits(&bytes[8..10])?;

    check_range(DateField::Year, year, &YEAR_RANGE)?;
    check_range(DateField::Month, month, &MONTH_RANGE)?;
    check_range(DateField::Day, day, &DAY_RANGE)?;

    // Every validated triple is representable: the year is at most 9999
    let date = normalized_date(year, month, day).ok_or(DateError::BadFormat)?;

    Ok(DeadlineDate {
        year,
        month,
        day,
        instant: local_midnight(date),
    })
}

/// Instant of a deadline text, or `None` (the sentinel) when it does not parse
pub fn deadline_instant(text: &str) -> Option<i64> {
    parse_deadline(text).ok().map(|d| d.instant)
}

/// Local calendar date an instant falls on
pub fn instant_to_local_date(instant: i64) -> Option<NaiveDate> {
    DateTime::from_timestamp(instant, 0).map(|utc| utc.with_timezone(&Local).date_naive())
}

fn parse_digits(digits: &[u8]) -> Result<u32, DateError> {
    digits.iter().try_fold(0u32, |acc, &b| {
        if b.is_ascii_digit() {
            Ok(acc * 10 + u32::from(b - b'0'))
        } else {
            Err(DateError::BadFormat)
        }
    })
}

fn check_range(
    field: DateField,
    value: u32,
    range: &RangeInclusive<u32>,
) -> Result<(), DateError> {
    if range.contains(&value) {
        Ok(())
    } else {
        Err(DateError::OutOfRange { field, value })
    }
}

/// First of the month plus `day - 1` days, so overflowing days roll forward
fn normalized_date(year: u32, month: u32, day: u32) -> Option<NaiveDate> {
    let year = i32::try_from(year).ok()?;
    NaiveDate::from_ymd_opt(year, month, 1)?
        .checked_add_days(Days::new(u64::from(day).saturating_sub(1)))
}

fn local_midnight(date: NaiveDate) -> i64 {
    // Midnight can fall into a DST gap; take the first hour that exists
    (0..24)
        .filter_map(|hour| NaiveTime::from_hms_opt(hour, 0, 0))
        .find_map(|time| Local.from_local_datetime(&date.and_time(time)).earliest())
        .map(|dt| dt.timestamp())
        .unwrap_or_else(|| date.and_time(NaiveTime::MIN).and_utc().timestamp())
}
