// Copyright (C) 2026 PawCare Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Session and price totals for a generated schedule.
//!
//! Money is held in minor currency units so totals are exact; rounding to a
//! displayable amount only happens when formatting.

use crate::error::DomainError;
use crate::schedule::GeneratedSchedule;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Minor units in one major currency unit (paise per rupee, cents per dollar).
pub const MINOR_UNITS_PER_MAJOR: u64 = 100;

/// A non-negative amount of money in minor currency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(u64);

impl Price {
    /// Zero.
    pub const ZERO: Self = Self(0);

    /// Creates a price from minor units.
    #[must_use]
    pub const fn from_minor(minor: u64) -> Self {
        Self(minor)
    }

    /// Creates a price from whole major units.
    #[must_use]
    pub const fn from_major(major: u64) -> Self {
        Self(major.saturating_mul(MINOR_UNITS_PER_MAJOR))
    }

    /// Multiplies by a count, saturating at the largest representable amount.
    #[must_use]
    pub const fn times(self, count: u64) -> Self {
        Self(self.0.saturating_mul(count))
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}.{:02}",
            self.0 / MINOR_UNITS_PER_MAJOR,
            self.0 % MINOR_UNITS_PER_MAJOR
        )
    }
}

impl FromStr for Price {
    type Err = DomainError;

    /// Parses amounts such as `300`, `299.5` or `299.50`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DomainError::InvalidPrice(s.to_string());
        let trimmed: &str = s.trim();
        let (major, fraction) = trimmed.split_once('.').unwrap_or((trimmed, ""));

        if major.is_empty() || !major.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        if fraction.len() > 2 || !fraction.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        if trimmed.ends_with('.') {
            return Err(invalid());
        }

        let major: u64 = major.parse().map_err(|_| invalid())?;
        let minor: u64 = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<u64>().map_err(|_| invalid())? * 10,
            _ => fraction.parse().map_err(|_| invalid())?,
        };

        major
            .checked_mul(MINOR_UNITS_PER_MAJOR)
            .and_then(|m| m.checked_add(minor))
            .map(Self)
            .ok_or_else(invalid)
    }
}

/// Session and price totals derived from a schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionPricing {
    /// Time slots booked on each scheduled date.
    pub sessions_per_day: u32,
    /// Scheduled dates multiplied by `sessions_per_day`.
    pub total_sessions: u64,
    /// Price of one session.
    pub unit_price: Price,
    /// `total_sessions` multiplied by `unit_price`.
    pub total_price: Price,
}

/// Aggregates a schedule into session and price totals.
///
/// One-time bookings pass `sessions_per_day = 1`; recurring bookings pass the
/// number of distinct time slots chosen for each day.
#[must_use]
pub fn aggregate(
    schedule: &GeneratedSchedule,
    sessions_per_day: u32,
    unit_price: Price,
) -> SessionPricing {
    let days: u64 = u64::try_from(schedule.len()).unwrap_or(u64::MAX);
    let total_sessions: u64 = days.saturating_mul(u64::from(sessions_per_day));

    SessionPricing {
        sessions_per_day,
        total_sessions,
        unit_price,
        total_price: unit_price.times(total_sessions),
    }
}
