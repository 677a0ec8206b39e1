// Copyright (C) 2026 PawCare Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Expansion of recurrence patterns into concrete service dates.
//!
//! ## Invariants
//!
//! - A range whose end is on or before its start generates nothing
//! - Output is ascending with no duplicates
//! - Every date lies within the inclusive range
//! - Every date falls on one of the pattern's weekdays
//! - Monthly occurrences never spill into the following month
//!
//! Generation never fails. Unusable input yields an empty schedule and the
//! booking wizard's schedule gate reports the step incomplete.

use crate::calendar::{add_days, add_months, days_until, month_end, month_start};
use crate::pattern::{NthOccurrence, RecurrencePattern, parse_pattern};
use crate::weekday::WeekdaySet;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::iter::successors;
use time::{Date, Weekday};

/// An inclusive calendar date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    /// First date (inclusive).
    start: Date,
    /// Last date (inclusive).
    end: Date,
}

impl DateRange {
    /// Creates a range. No ordering is enforced; see [`DateRange::is_empty`].
    #[must_use]
    pub const fn new(start: Date, end: Date) -> Self {
        Self { start, end }
    }

    /// Returns the start date (inclusive).
    #[must_use]
    pub const fn start(&self) -> Date {
        self.start
    }

    /// Returns the end date (inclusive).
    #[must_use]
    pub const fn end(&self) -> Date {
        self.end
    }

    /// True when the range cannot produce any recurring dates (`end <= start`).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Checks whether `date` lies inside the range, bounds included.
    #[must_use]
    pub fn contains(&self, date: Date) -> bool {
        self.start <= date && date <= self.end
    }
}

/// The ordered, de-duplicated dates a booking occurs on.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GeneratedSchedule {
    dates: Vec<Date>,
}

impl GeneratedSchedule {
    /// An empty schedule.
    #[must_use]
    pub const fn empty() -> Self {
        Self { dates: Vec::new() }
    }

    /// A schedule with exactly one date, used for one-time bookings.
    #[must_use]
    pub fn single(date: Date) -> Self {
        Self { dates: vec![date] }
    }

    /// The dates in ascending order.
    #[must_use]
    pub fn dates(&self) -> &[Date] {
        &self.dates
    }

    /// Number of dates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// True if no date was generated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Iterates dates in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = Date> + '_ {
        self.dates.iter().copied()
    }

    /// Consumes the schedule, returning its dates.
    #[must_use]
    pub fn into_dates(self) -> Vec<Date> {
        self.dates
    }
}

impl FromIterator<Date> for GeneratedSchedule {
    fn from_iter<I: IntoIterator<Item = Date>>(iter: I) -> Self {
        let unique: BTreeSet<Date> = iter.into_iter().collect();
        Self {
            dates: unique.into_iter().collect(),
        }
    }
}

/// Expands `pattern` over `range`.
///
/// # Weekly expansion
///
/// Anchors start at `range.start` and advance by `interval` weeks. Each
/// anchor contributes, per target weekday, the first matching date on or
/// after it.
///
/// # Monthly expansion
///
/// Months start at the month containing `range.start` and advance by
/// `interval` months. Each month contributes the nth (or last) occurrence of
/// every target weekday, when that occurrence exists.
///
/// `Daily` patterns are display-only and generate nothing.
///
/// # Example
///
/// ```text
/// weekly_1_monday,wednesday over 2024-01-01 (Mon) ..= 2024-01-15 (Mon)
///   anchor 2024-01-01 -> 01-01, 01-03
///   anchor 2024-01-08 -> 01-08, 01-10
///   anchor 2024-01-15 -> 01-15, (01-17 past end)
/// ```
#[must_use]
pub fn generate(pattern: &RecurrencePattern, range: DateRange) -> GeneratedSchedule {
    if range.is_empty() {
        return GeneratedSchedule::empty();
    }

    match *pattern {
        RecurrencePattern::Daily { .. } => GeneratedSchedule::empty(),
        RecurrencePattern::Weekly { interval, weekdays } => {
            expand_weekly(interval, weekdays, range)
        }
        RecurrencePattern::Monthly {
            interval,
            nth,
            weekdays,
        } => expand_monthly(interval, nth, weekdays, range),
    }
}

/// Parses `raw` and expands it; unrecognized patterns yield an empty schedule.
#[must_use]
pub fn generate_from_str(raw: &str, range: DateRange) -> GeneratedSchedule {
    parse_pattern(raw).map_or_else(GeneratedSchedule::empty, |pattern| {
        generate(&pattern, range)
    })
}

fn expand_weekly(interval: u32, weekdays: WeekdaySet, range: DateRange) -> GeneratedSchedule {
    let stride_days: i64 = i64::from(interval.max(1)) * 7;

    successors(Some(range.start()), |anchor| add_days(*anchor, stride_days))
        .take_while(|anchor| *anchor <= range.end())
        .flat_map(|anchor| {
            weekdays.iter().filter_map(move |weekday| {
                add_days(anchor, i64::from(days_until(anchor.weekday(), weekday)))
            })
        })
        .filter(|date| range.contains(*date))
        .collect()
}

fn expand_monthly(
    interval: u32,
    nth: NthOccurrence,
    weekdays: WeekdaySet,
    range: DateRange,
) -> GeneratedSchedule {
    let stride: u32 = interval.max(1);

    successors(month_start(range.start()), |first| add_months(*first, stride))
        .take_while(|first| *first <= range.end())
        .flat_map(|first| {
            weekdays
                .iter()
                .filter_map(move |weekday| occurrence_in_month(first, weekday, nth))
        })
        .filter(|date| range.contains(*date))
        .collect()
}

/// Finds the `nth` `weekday` of the month starting at `first`.
///
/// Returns `None` when that occurrence does not exist in the month.
fn occurrence_in_month(first: Date, weekday: Weekday, nth: NthOccurrence) -> Option<Date> {
    match nth.ordinal() {
        Some(ordinal) => {
            let offset: i64 =
                i64::from(days_until(first.weekday(), weekday)) + i64::from(ordinal - 1) * 7;
            let candidate: Date = add_days(first, offset)?;
            (candidate.month() == first.month()).then_some(candidate)
        }
        None => {
            let last: Date = month_end(first)?;
            add_days(last, -i64::from(days_until(weekday, last.weekday())))
        }
    }
}
