// Copyright (C) 2026 PawCare Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use pawcare_domain::{AddressId, BookingKind, PetId, ServiceSelection, TimeSlot};
use time::Date;

/// A command represents customer intent as data only.
///
/// Commands are the only way to change a [`crate::WizardState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Choose the pet.
    SelectPet {
        /// The pet.
        pet: PetId,
    },
    /// Choose the service, with the unit price it is offered at.
    SelectService {
        /// The service and its price.
        service: ServiceSelection,
    },
    /// Choose the address.
    SelectAddress {
        /// The address.
        address: AddressId,
    },
    /// Choose one-time or recurring. Switching kind clears the other kind's
    /// time and recurrence selections.
    SetBookingKind {
        /// The booking kind.
        kind: BookingKind,
    },
    /// Set or clear the start date.
    SetStartDate {
        /// The new start date.
        date: Option<Date>,
    },
    /// Set or clear the end date of a recurring booking.
    SetEndDate {
        /// The new end date.
        date: Option<Date>,
    },
    /// Set or clear the time of a one-time booking.
    SetTime {
        /// The new time.
        time: Option<TimeSlot>,
    },
    /// Add a daily time slot to a recurring booking.
    AddTimeSlot {
        /// The slot to add.
        slot: TimeSlot,
    },
    /// Remove a daily time slot from a recurring booking.
    RemoveTimeSlot {
        /// The slot to remove.
        slot: TimeSlot,
    },
    /// Set the raw recurrence pattern string.
    SetPattern {
        /// The encoded pattern, e.g. `weekly_1_monday,wednesday`.
        pattern: String,
    },
    /// Advance, if the current position is complete.
    Next,
    /// Go back one position.
    Prev,
}

impl Command {
    /// The command name, for logging.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::SelectPet { .. } => "SelectPet",
            Self::SelectService { .. } => "SelectService",
            Self::SelectAddress { .. } => "SelectAddress",
            Self::SetBookingKind { .. } => "SetBookingKind",
            Self::SetStartDate { .. } => "SetStartDate",
            Self::SetEndDate { .. } => "SetEndDate",
            Self::SetTime { .. } => "SetTime",
            Self::AddTimeSlot { .. } => "AddTimeSlot",
            Self::RemoveTimeSlot { .. } => "RemoveTimeSlot",
            Self::SetPattern { .. } => "SetPattern",
            Self::Next => "Next",
            Self::Prev => "Prev",
        }
    }
}
