// Copyright (C) 2026 PawCare Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Calendar arithmetic shared by the date generator.
//!
//! `time::Date` is `Copy`, so every helper here returns a fresh value and
//! never touches its input. Arithmetic is checked; `None` means the result
//! fell outside the representable calendar.

use crate::error::DomainError;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, Duration, Month, Weekday, util};

const ISO_DATE: &[BorrowedFormatItem<'_>] = format_description!("[year]-[month]-[day]");

/// Parses an ISO 8601 calendar date (`YYYY-MM-DD`).
///
/// # Errors
///
/// Returns `DomainError::DateParseError` if the string is not a valid date.
pub fn parse_date(value: &str) -> Result<Date, DomainError> {
    Date::parse(value.trim(), ISO_DATE).map_err(|e| DomainError::DateParseError {
        date_string: value.to_string(),
        error: e.to_string(),
    })
}

/// Formats a date as `YYYY-MM-DD`.
#[must_use]
pub fn format_date(date: Date) -> String {
    date.to_string()
}

/// Days to move forward from `from` to reach the next `to` (0 when equal).
pub(crate) const fn days_until(from: Weekday, to: Weekday) -> u8 {
    (7 + to.number_days_from_sunday() - from.number_days_from_sunday()) % 7
}

/// Adds whole days, returning `None` on calendar overflow.
pub(crate) fn add_days(date: Date, days: i64) -> Option<Date> {
    date.checked_add(Duration::days(days))
}

/// First day of the month `months` after the month containing `date`.
pub(crate) fn add_months(date: Date, months: u32) -> Option<Date> {
    let index: i64 = i64::from(date.year()) * 12 + i64::from(u8::from(date.month())) - 1
        + i64::from(months);
    let year: i32 = i32::try_from(index.div_euclid(12)).ok()?;
    let month: Month = Month::try_from(u8::try_from(index.rem_euclid(12) + 1).ok()?).ok()?;
    Date::from_calendar_date(year, month, 1).ok()
}

/// First day of the month containing `date`.
pub(crate) fn month_start(date: Date) -> Option<Date> {
    date.replace_day(1).ok()
}

/// Last day of the month containing `date`.
pub(crate) fn month_end(date: Date) -> Option<Date> {
    date.replace_day(util::days_in_month(date.month(), date.year())).ok()
}
