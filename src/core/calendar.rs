//! Calendar-month arithmetic for filing deadlines.
//!
//! A motion to vacate must be served within three months after the award is
//! filed or delivered. "Three months" is counted in calendar months: the
//! day-of-month is carried over and clamped to the length of the target month,
//! so Jan 31 + 1 month lands on the last day of February.

use crate::core::error::VacaturError;
use chrono::{Datelike, NaiveDate};

/// Statutory window between the award and the last day to move to vacate.
pub const FILING_WINDOW_MONTHS: i32 = 3;

/// Gregorian leap-year rule.
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Number of days in `month` (1-12) of `year`.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Shift `date` by `months` calendar months, clamping the day to the target
/// month's length.
///
/// Total for every offset: results past the range `NaiveDate` can represent
/// saturate at `NaiveDate::MIN` / `NaiveDate::MAX`.
pub fn shift_months(date: NaiveDate, months: i32) -> NaiveDate {
    let total = i64::from(date.month0()) + i64::from(months);
    let year = i64::from(date.year()) + total.div_euclid(12);
    let month = total.rem_euclid(12) as u32 + 1;

    let saturated = if months < 0 {
        NaiveDate::MIN
    } else {
        NaiveDate::MAX
    };
    let Ok(year) = i32::try_from(year) else {
        return saturated;
    };

    let day = date.day().min(days_in_month(year, month));
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(saturated)
}

/// Last day to serve the motion for an award dated `award_date`.
pub fn filing_deadline(award_date: NaiveDate) -> NaiveDate {
    shift_months(award_date, FILING_WINDOW_MONTHS)
}

/// Long form used in the body of the motion, e.g. `January 05, 2025`.
pub fn format_long(date: NaiveDate) -> String {
    date.format("%B %d, %Y").to_string()
}

/// Short form used for the deadline display, e.g. `09/15/2024`.
pub fn format_short(date: NaiveDate) -> String {
    date.format("%m/%d/%Y").to_string()
}

/// Parse an ISO `YYYY-MM-DD` date.
pub fn parse_date(input: &str) -> Result<NaiveDate, VacaturError> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|e| {
        VacaturError::InvalidDate(format!("'{}' is not a YYYY-MM-DD date ({})", input, e))
    })
}
