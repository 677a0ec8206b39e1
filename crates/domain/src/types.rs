// Copyright (C) 2026 PawCare Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::pricing::Price;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::Time;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

/// The most time slots a recurring booking may hold per day.
pub const MAX_TIME_SLOTS_PER_DAY: usize = 4;

const TIME_OF_DAY: &[BorrowedFormatItem<'_>] = format_description!("[hour]:[minute]");

macro_rules! identifier {
    ($(#[$meta:meta])* $name:ident, $kind:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Creates an identifier from a trimmed, non-empty value.
            ///
            /// # Errors
            ///
            /// Returns `DomainError::InvalidIdentifier` if the value is blank.
            pub fn new(value: &str) -> Result<Self, DomainError> {
                let trimmed: &str = value.trim();
                if trimmed.is_empty() {
                    return Err(DomainError::InvalidIdentifier {
                        kind: $kind,
                        value: value.to_string(),
                    });
                }
                Ok(Self(trimmed.to_string()))
            }

            /// Returns the identifier value.
            #[must_use]
            pub fn value(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = DomainError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(&value)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

identifier!(
    /// Identifies a pet owned by the customer.
    PetId,
    "pet"
);
identifier!(
    /// Identifies a bookable service.
    ServiceId,
    "service"
);
identifier!(
    /// Identifies a saved service address.
    AddressId,
    "address"
);

/// A chosen service together with the per-session price it was offered at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceSelection {
    /// The service identifier.
    pub id: ServiceId,
    /// Price of a single session.
    pub unit_price: Price,
}

impl ServiceSelection {
    /// Creates a service selection.
    #[must_use]
    pub const fn new(id: ServiceId, unit_price: Price) -> Self {
        Self { id, unit_price }
    }
}

/// Whether a booking happens once or repeats on a pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingKind {
    /// A single visit on one date at one time.
    OneTime,
    /// Repeating visits, possibly several per day.
    Recurring,
}

impl BookingKind {
    /// Converts this kind to its wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::OneTime => "one_time",
            Self::Recurring => "recurring",
        }
    }
}

impl FromStr for BookingKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "one_time" | "onetime" | "one-time" => Ok(Self::OneTime),
            "recurring" => Ok(Self::Recurring),
            _ => Err(DomainError::InvalidBookingKind(s.to_string())),
        }
    }
}

impl std::fmt::Display for BookingKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A time of day in minutes resolution, written `HH:MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeSlot(Time);

impl TimeSlot {
    /// Parses an `HH:MM` string.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTimeSlot` if the value is not a valid
    /// 24-hour time.
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        Time::parse(value.trim(), TIME_OF_DAY)
            .map(Self)
            .map_err(|e| DomainError::InvalidTimeSlot {
                value: value.to_string(),
                error: e.to_string(),
            })
    }

    /// Returns the underlying time.
    #[must_use]
    pub const fn time(&self) -> Time {
        self.0
    }
}

impl std::fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.0.hour(), self.0.minute())
    }
}

impl TryFrom<String> for TimeSlot {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<TimeSlot> for String {
    fn from(slot: TimeSlot) -> Self {
        slot.to_string()
    }
}
