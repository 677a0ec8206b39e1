// Copyright (C) 2026 PawCare Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use pawcare_domain::BookingKind;
use std::str::FromStr;

/// A wizard step, in flow order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Step {
    /// Choose which pet the booking is for.
    Pet,
    /// Choose the service.
    Service,
    /// Choose the service address.
    Address,
    /// Choose dates, times and recurrence.
    Schedule,
    /// Confirm and submit.
    Review,
}

impl Step {
    /// Every step in flow order.
    pub const ALL: [Self; 5] = [
        Self::Pet,
        Self::Service,
        Self::Address,
        Self::Schedule,
        Self::Review,
    ];

    /// Zero-based position in the flow.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Pet => 0,
            Self::Service => 1,
            Self::Address => 2,
            Self::Schedule => 3,
            Self::Review => 4,
        }
    }

    /// The following step, if any.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Pet => Some(Self::Service),
            Self::Service => Some(Self::Address),
            Self::Address => Some(Self::Schedule),
            Self::Schedule => Some(Self::Review),
            Self::Review => None,
        }
    }

    /// The preceding step, if any.
    #[must_use]
    pub const fn prev(self) -> Option<Self> {
        match self {
            Self::Pet => None,
            Self::Service => Some(Self::Pet),
            Self::Address => Some(Self::Service),
            Self::Schedule => Some(Self::Address),
            Self::Review => Some(Self::Schedule),
        }
    }

    /// The coarse phase this step belongs to.
    #[must_use]
    pub const fn phase(self) -> Phase {
        match self {
            Self::Pet | Self::Service | Self::Address => Phase::Details,
            Self::Schedule | Self::Review => Phase::Booking,
        }
    }

    /// Converts this step to its string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pet => "pet",
            Self::Service => "service",
            Self::Address => "address",
            Self::Schedule => "schedule",
            Self::Review => "review",
        }
    }
}

impl FromStr for Step {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|step| step.as_str() == s)
            .ok_or_else(|| CoreError::UnknownStep(s.to_string()))
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Coarse grouping of steps shown as two tabs in the split flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Pet, service and address.
    Details,
    /// Schedule and review.
    Booking,
}

/// Screens within the `Schedule` step when the flow splits it up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SubStep {
    /// One-time or recurring.
    BookingType,
    /// Start date.
    Dates,
    /// Single time or daily time slots.
    Times,
    /// Pattern and end date. Recurring bookings only.
    Recurrence,
}

const ONE_TIME_SEQUENCE: [SubStep; 3] = [SubStep::BookingType, SubStep::Dates, SubStep::Times];
const RECURRING_SEQUENCE: [SubStep; 4] = [
    SubStep::BookingType,
    SubStep::Dates,
    SubStep::Times,
    SubStep::Recurrence,
];

impl SubStep {
    /// The sub-steps a booking kind walks through. Undecided kinds see all of them.
    #[must_use]
    pub const fn sequence(kind: Option<BookingKind>) -> &'static [Self] {
        match kind {
            Some(BookingKind::OneTime) => &ONE_TIME_SEQUENCE,
            Some(BookingKind::Recurring) | None => &RECURRING_SEQUENCE,
        }
    }

    /// The first sub-step of the schedule step.
    #[must_use]
    pub const fn first() -> Self {
        Self::BookingType
    }

    /// The last sub-step for a booking kind.
    #[must_use]
    pub const fn last_in(kind: Option<BookingKind>) -> Self {
        match kind {
            Some(BookingKind::OneTime) => Self::Times,
            Some(BookingKind::Recurring) | None => Self::Recurrence,
        }
    }

    /// Whether this sub-step is part of the sequence for `kind`.
    #[must_use]
    pub fn applies_to(self, kind: Option<BookingKind>) -> bool {
        Self::sequence(kind).contains(&self)
    }

    fn position_in(self, kind: Option<BookingKind>) -> Option<usize> {
        Self::sequence(kind).iter().position(|sub| *sub == self)
    }

    /// The following sub-step for `kind`, if any.
    #[must_use]
    pub fn next_in(self, kind: Option<BookingKind>) -> Option<Self> {
        let position: usize = self.position_in(kind)?;
        Self::sequence(kind).get(position + 1).copied()
    }

    /// The preceding sub-step for `kind`, if any.
    #[must_use]
    pub fn prev_in(self, kind: Option<BookingKind>) -> Option<Self> {
        let position: usize = self.position_in(kind)?;
        position
            .checked_sub(1)
            .and_then(|p| Self::sequence(kind).get(p).copied())
    }

    /// Converts this sub-step to its string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BookingType => "booking_type",
            Self::Dates => "dates",
            Self::Times => "times",
            Self::Recurrence => "recurrence",
        }
    }
}

impl FromStr for SubStep {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RECURRING_SEQUENCE
            .into_iter()
            .find(|sub| sub.as_str() == s)
            .ok_or_else(|| CoreError::UnknownSubStep(s.to_string()))
    }
}

impl std::fmt::Display for SubStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Which booking page layout drives the wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FlowVariant {
    /// Schedule is a single screen.
    #[default]
    Flat,
    /// Schedule is split into [`SubStep`]s.
    SplitSchedule,
}

impl FlowVariant {
    /// Converts this variant to its string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Flat => "flat",
            Self::SplitSchedule => "split_schedule",
        }
    }
}

impl FromStr for FlowVariant {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "flat" => Ok(Self::Flat),
            "split_schedule" => Ok(Self::SplitSchedule),
            _ => Err(CoreError::UnknownFlow(s.to_string())),
        }
    }
}

impl std::fmt::Display for FlowVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
