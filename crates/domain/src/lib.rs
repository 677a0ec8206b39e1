// Copyright (C) 2026 PawCare Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Domain types and pure calendar logic for PawCare bookings.
//!
//! This crate owns the three computations every booking flow shares:
//!
//! - [`parse_pattern`] decodes the compact recurrence encoding used in
//!   query parameters (`weekly_1_monday,wednesday`, `monthly_1_last_friday`).
//! - [`generate`] expands a pattern over an inclusive date range.
//! - [`aggregate`] turns a generated schedule into session and price totals.
//!
//! Nothing here performs I/O or logs. Invalid recurrence input never errors
//! out of the generator; it degrades to an empty schedule.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod calendar;
mod error;
mod pattern;
mod pricing;
mod schedule;
mod types;
mod weekday;

#[cfg(test)]
mod tests;

pub use calendar::{format_date, parse_date};
pub use error::DomainError;
pub use pattern::{NthOccurrence, PatternError, RecurrencePattern, describe_pattern, parse_pattern};
pub use pricing::{MINOR_UNITS_PER_MAJOR, Price, SessionPricing, aggregate};
pub use schedule::{DateRange, GeneratedSchedule, generate, generate_from_str};
pub use types::{
    AddressId, BookingKind, MAX_TIME_SLOTS_PER_DAY, PetId, ServiceId, ServiceSelection, TimeSlot,
};
pub use weekday::{ALL_WEEKDAYS, WeekdaySet, parse_weekday, weekday_name};
