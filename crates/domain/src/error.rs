// Copyright (C) 2026 PawCare Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors raised while constructing validated domain values.
///
/// Recurrence handling never produces these: an unusable pattern or range
/// simply generates no dates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An identifier was empty after trimming.
    InvalidIdentifier {
        /// Which identifier was being built (e.g. "pet").
        kind: &'static str,
        /// The rejected raw value.
        value: String,
    },
    /// A time slot was not a valid `HH:MM` time of day.
    InvalidTimeSlot {
        /// The rejected raw value.
        value: String,
        /// The parser's message.
        error: String,
    },
    /// A price string could not be read as a non-negative amount.
    InvalidPrice(String),
    /// The booking kind was neither `one_time` nor `recurring`.
    InvalidBookingKind(String),
    /// Failed to parse a date from a string.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidIdentifier { kind, value } => {
                write!(f, "Invalid {kind} identifier: '{value}'")
            }
            Self::InvalidTimeSlot { value, error } => {
                write!(f, "Invalid time slot '{value}': {error}")
            }
            Self::InvalidPrice(value) => write!(f, "Invalid price: '{value}'"),
            Self::InvalidBookingKind(value) => {
                write!(
                    f,
                    "Invalid booking type: '{value}'. Must be 'one_time' or 'recurring'"
                )
            }
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
