// Copyright (C) 2026 PawCare Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Recurrence pattern encoding.
//!
//! Patterns travel between booking pages as `_`-joined tokens:
//!
//! ```text
//! daily_<weekday>
//! weekly_<interval>_<weekday[,weekday...]>
//! monthly_<interval>_<1|2|3|4|last>_<weekday[,weekday...]>
//! ```
//!
//! Weekday names are accepted in any case and always emitted lower-case.
//! Anything that does not fit one of these shapes is an unrecognized legacy
//! value: it means "no recurrence", never a user-facing error.

use crate::weekday::{WeekdaySet, parse_weekday, weekday_name};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;
use time::Weekday;

/// Why a pattern string was not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    /// The pattern was blank.
    #[error("Pattern is empty")]
    Empty,

    /// The first token named no known recurrence kind.
    #[error("Unknown recurrence kind '{0}'")]
    UnknownKind(String),

    /// The pattern had the wrong number of `_`-separated tokens for its kind.
    #[error("Pattern '{pattern}' has {found} tokens, expected {expected}")]
    WrongTokenCount {
        pattern: String,
        expected: usize,
        found: usize,
    },

    /// The interval token was not a positive integer.
    #[error("Invalid interval '{0}': must be a positive integer")]
    InvalidInterval(String),

    /// The occurrence token was not 1-4 or `last`.
    #[error("Invalid occurrence '{0}': must be 1, 2, 3, 4 or last")]
    InvalidOccurrence(String),

    /// None of the weekday tokens named a weekday.
    #[error("No recognized weekday in '{0}'")]
    NoWeekdays(String),
}

/// Which occurrence of a weekday within a month a monthly pattern targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NthOccurrence {
    /// The first occurrence.
    First,
    /// The second occurrence.
    Second,
    /// The third occurrence.
    Third,
    /// The fourth occurrence.
    Fourth,
    /// The last occurrence, counted back from the month's final day.
    Last,
}

impl NthOccurrence {
    fn parse(token: &str) -> Result<Self, PatternError> {
        match token.trim().to_ascii_lowercase().as_str() {
            "1" => Ok(Self::First),
            "2" => Ok(Self::Second),
            "3" => Ok(Self::Third),
            "4" => Ok(Self::Fourth),
            "last" => Ok(Self::Last),
            _ => Err(PatternError::InvalidOccurrence(token.to_string())),
        }
    }

    /// The wire token for this occurrence.
    #[must_use]
    pub const fn as_token(self) -> &'static str {
        match self {
            Self::First => "1",
            Self::Second => "2",
            Self::Third => "3",
            Self::Fourth => "4",
            Self::Last => "last",
        }
    }

    /// The 1-based ordinal, or `None` for [`NthOccurrence::Last`].
    #[must_use]
    pub const fn ordinal(self) -> Option<u8> {
        match self {
            Self::First => Some(1),
            Self::Second => Some(2),
            Self::Third => Some(3),
            Self::Fourth => Some(4),
            Self::Last => None,
        }
    }

    const fn label(self) -> &'static str {
        match self {
            Self::First => "1st",
            Self::Second => "2nd",
            Self::Third => "3rd",
            Self::Fourth => "4th",
            Self::Last => "Last",
        }
    }
}

/// A parsed recurrence rule.
///
/// Serializes as its canonical wire string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum RecurrencePattern {
    /// A fixed weekday. Labelled for display only; never expanded into dates.
    Daily {
        /// The weekday named by the pattern.
        weekday: Weekday,
    },
    /// Every `interval` weeks on each of `weekdays`.
    Weekly {
        /// Week stride, at least 1.
        interval: u32,
        /// Target weekdays, never empty.
        weekdays: WeekdaySet,
    },
    /// The `nth` occurrence of each of `weekdays`, every `interval` months.
    Monthly {
        /// Month stride, at least 1.
        interval: u32,
        /// Which occurrence within the month.
        nth: NthOccurrence,
        /// Target weekdays, never empty.
        weekdays: WeekdaySet,
    },
}

/// Parses a pattern string, returning `None` for anything unrecognized.
///
/// Use this where an unrecognized value simply means "no recurrence".
#[must_use]
pub fn parse_pattern(raw: &str) -> Option<RecurrencePattern> {
    raw.parse().ok()
}

fn parse_interval(token: &str) -> Result<u32, PatternError> {
    let digits: &str = token.trim();
    // `u32::from_str` would also take a leading `+`
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(PatternError::InvalidInterval(token.to_string()));
    }
    match digits.parse::<u32>() {
        Ok(interval) if interval >= 1 => Ok(interval),
        _ => Err(PatternError::InvalidInterval(token.to_string())),
    }
}

fn parse_weekdays(token: &str) -> Result<WeekdaySet, PatternError> {
    let weekdays: WeekdaySet = WeekdaySet::parse_lenient(token);
    if weekdays.is_empty() {
        return Err(PatternError::NoWeekdays(token.to_string()));
    }
    Ok(weekdays)
}

fn expect_tokens(raw: &str, tokens: &[&str], expected: usize) -> Result<(), PatternError> {
    if tokens.len() == expected {
        Ok(())
    } else {
        Err(PatternError::WrongTokenCount {
            pattern: raw.to_string(),
            expected,
            found: tokens.len(),
        })
    }
}

impl FromStr for RecurrencePattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw: &str = s.trim();
        if raw.is_empty() {
            return Err(PatternError::Empty);
        }

        let tokens: Vec<&str> = raw.split('_').collect();
        match tokens[0] {
            "daily" => {
                expect_tokens(raw, &tokens, 2)?;
                let weekday: Weekday = parse_weekday(tokens[1])
                    .ok_or_else(|| PatternError::NoWeekdays(tokens[1].to_string()))?;
                Ok(Self::Daily { weekday })
            }
            "weekly" => {
                expect_tokens(raw, &tokens, 3)?;
                Ok(Self::Weekly {
                    interval: parse_interval(tokens[1])?,
                    weekdays: parse_weekdays(tokens[2])?,
                })
            }
            "monthly" => {
                expect_tokens(raw, &tokens, 4)?;
                Ok(Self::Monthly {
                    interval: parse_interval(tokens[1])?,
                    nth: NthOccurrence::parse(tokens[2])?,
                    weekdays: parse_weekdays(tokens[3])?,
                })
            }
            other => Err(PatternError::UnknownKind(other.to_string())),
        }
    }
}

impl std::fmt::Display for RecurrencePattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Daily { weekday } => write!(f, "daily_{}", weekday_name(*weekday)),
            Self::Weekly { interval, weekdays } => write!(f, "weekly_{interval}_{weekdays}"),
            Self::Monthly {
                interval,
                nth,
                weekdays,
            } => write!(f, "monthly_{interval}_{}_{weekdays}", nth.as_token()),
        }
    }
}

impl TryFrom<String> for RecurrencePattern {
    type Error = PatternError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<RecurrencePattern> for String {
    fn from(pattern: RecurrencePattern) -> Self {
        pattern.to_string()
    }
}

fn display_weekdays(weekdays: WeekdaySet) -> String {
    weekdays
        .iter()
        .map(|weekday| weekday.to_string())
        .collect::<Vec<String>>()
        .join(", ")
}

impl RecurrencePattern {
    /// The weekdays this pattern can land on.
    #[must_use]
    pub fn weekdays(&self) -> WeekdaySet {
        match *self {
            Self::Daily { weekday } => WeekdaySet::empty().with(weekday),
            Self::Weekly { weekdays, .. } | Self::Monthly { weekdays, .. } => weekdays,
        }
    }

    /// A short human-readable description, e.g. "2nd Tuesday of every month".
    #[must_use]
    pub fn label(&self) -> String {
        match *self {
            Self::Daily { weekday } => format!("Every {weekday}"),
            Self::Weekly { interval, weekdays } => {
                let days: String = display_weekdays(weekdays);
                if interval == 1 {
                    format!("Every week on {days}")
                } else {
                    format!("Every {interval} weeks on {days}")
                }
            }
            Self::Monthly {
                interval,
                nth,
                weekdays,
            } => {
                let days: String = display_weekdays(weekdays);
                if interval == 1 {
                    format!("{} {days} of every month", nth.label())
                } else {
                    format!("{} {days} of every {interval} months", nth.label())
                }
            }
        }
    }
}

/// Describes any stored pattern value for display.
///
/// Blank values are one-time bookings. Legacy single-word values that do not
/// parse are shown capitalized as-is.
#[must_use]
pub fn describe_pattern(raw: &str) -> String {
    let raw: &str = raw.trim();
    if raw.is_empty() {
        return String::from("One-time");
    }

    if let Some(pattern) = parse_pattern(raw) {
        return pattern.label();
    }

    let mut chars = raw.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}
