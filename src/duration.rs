//! Flight duration from the textual schedule fields.
//!
//! Dates and times follow the fixed pattern `dd.MM.yy H:mm`: two-digit day,
//! month and year (20yy), an hour of one or two digits and a two-digit minute.

use chrono::{Datelike, Months, NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::{AnalyzerError, Result};
use crate::ticket::Ticket;

/// Parses `"<dd.MM.yy> <H:mm>"` into a calendar date-time.
pub fn parse_date_time(value: &str) -> Result<NaiveDateTime> {
    let fail = |reason: &str| AnalyzerError::Format {
        value: value.to_string(),
        reason: reason.to_string(),
    };

    let (date, time) = value
        .split_once(' ')
        .ok_or_else(|| fail("expected \"dd.MM.yy H:mm\""))?;

    let mut date_parts = date.split('.');
    let (Some(day), Some(month), Some(year), None) = (
        date_parts.next(),
        date_parts.next(),
        date_parts.next(),
        date_parts.next(),
    ) else {
        return Err(fail("date must look like dd.MM.yy"));
    };
    let day = digits(day, 2, 2).ok_or_else(|| fail("day must be two digits"))?;
    let month = digits(month, 2, 2).ok_or_else(|| fail("month must be two digits"))?;
    let year = digits(year, 2, 2).ok_or_else(|| fail("year must be two digits"))?;

    let (hour, minute) = time
        .split_once(':')
        .ok_or_else(|| fail("time must look like H:mm"))?;
    let hour = digits(hour, 1, 2).ok_or_else(|| fail("hour must be one or two digits"))?;
    let minute = digits(minute, 2, 2).ok_or_else(|| fail("minute must be two digits"))?;

    let date = calendar_date(2000 + year as i32, month, day)
        .ok_or_else(|| fail("day or month out of range"))?;
    if hour > 23 {
        return Err(fail("hour out of range 0-23"));
    }
    if minute > 59 {
        return Err(fail("minute out of range 0-59"));
    }
    let time = NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(|| fail("invalid time"))?;

    Ok(NaiveDateTime::new(date, time))
}

/// Minutes from departure to arrival. May be negative; no day rollover is
/// inferred beyond what the dates say.
pub fn flight_minutes(ticket: &Ticket) -> Result<i64> {
    let departure = parse_date_time(&format!(
        "{} {}",
        ticket.departure_date, ticket.departure_time
    ))?;
    let arrival = parse_date_time(&format!("{} {}", ticket.arrival_date, ticket.arrival_time))?;
    Ok((arrival - departure).num_minutes())
}

/// Days 1-31 are accepted in every month and clamped to its last day, so
/// `31.04.24` reads as 30 April.
fn calendar_date(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    if !(1..=31).contains(&day) {
        return None;
    }
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let last_day = first.checked_add_months(Months::new(1))?.pred_opt()?.day();
    first.with_day(day.min(last_day))
}

fn digits(text: &str, min: usize, max: usize) -> Option<u32> {
    if text.len() < min || text.len() > max || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}
