// Copyright (C) 2026 PawCare Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::step::{FlowVariant, Step, SubStep};
use pawcare_domain::{
    AddressId, BookingKind, DateRange, GeneratedSchedule, PetId, Price, RecurrencePattern,
    ServiceSelection, SessionPricing, TimeSlot, aggregate, generate, parse_pattern,
};
use time::Date;

/// Everything the customer has chosen so far.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selections {
    /// The pet being booked for.
    pub pet: Option<PetId>,
    /// The service and its unit price.
    pub service: Option<ServiceSelection>,
    /// Where the service happens.
    pub address: Option<AddressId>,
    /// One-time or recurring, once chosen.
    pub booking_kind: Option<BookingKind>,
    /// The booking date, or the first date of a recurring booking.
    pub start_date: Option<Date>,
    /// The last date a recurring booking may run to.
    pub end_date: Option<Date>,
    /// The time of a one-time booking.
    pub time: Option<TimeSlot>,
    /// The daily time slots of a recurring booking, ascending and distinct.
    pub time_slots: Vec<TimeSlot>,
    /// The raw recurrence pattern; may be an unrecognized legacy value.
    pub pattern: String,
}

impl Selections {
    /// The parsed recurrence pattern, if the raw value is recognized.
    #[must_use]
    pub fn recurrence(&self) -> Option<RecurrencePattern> {
        parse_pattern(&self.pattern)
    }

    /// The inclusive date range of a recurring booking, when both ends are set.
    #[must_use]
    pub fn date_range(&self) -> Option<DateRange> {
        Some(DateRange::new(self.start_date?, self.end_date?))
    }

    /// The dates this booking occurs on, recomputed from the current selections.
    ///
    /// One-time bookings yield their single date. Recurring bookings expand
    /// the pattern over the date range; anything missing or unrecognized
    /// yields an empty schedule.
    #[must_use]
    pub fn schedule(&self) -> GeneratedSchedule {
        match self.booking_kind {
            Some(BookingKind::OneTime) => self
                .start_date
                .map_or_else(GeneratedSchedule::empty, GeneratedSchedule::single),
            Some(BookingKind::Recurring) => match (self.recurrence(), self.date_range()) {
                (Some(pattern), Some(range)) => generate(&pattern, range),
                _ => GeneratedSchedule::empty(),
            },
            None => GeneratedSchedule::empty(),
        }
    }

    /// Sessions booked on each scheduled date.
    #[must_use]
    pub fn sessions_per_day(&self) -> u32 {
        match self.booking_kind {
            Some(BookingKind::Recurring) => {
                u32::try_from(self.time_slots.len()).unwrap_or(u32::MAX)
            }
            Some(BookingKind::OneTime) | None => 1,
        }
    }

    /// The unit price of the chosen service, or zero before one is chosen.
    #[must_use]
    pub fn unit_price(&self) -> Price {
        self.service
            .as_ref()
            .map_or(Price::ZERO, |service| service.unit_price)
    }

    /// Session and price totals for the current selections.
    #[must_use]
    pub fn pricing(&self) -> SessionPricing {
        aggregate(&self.schedule(), self.sessions_per_day(), self.unit_price())
    }

    /// Drops the selections that belong to the other booking kind.
    pub(crate) fn retain_kind(&mut self, kind: BookingKind) {
        match kind {
            BookingKind::OneTime => {
                self.time_slots.clear();
                self.pattern.clear();
                self.end_date = None;
            }
            BookingKind::Recurring => {
                self.time = None;
            }
        }
    }
}

/// The booking wizard's complete state.
///
/// `sub_step` is `Some` exactly when the flow is
/// [`FlowVariant::SplitSchedule`] and the wizard is on [`Step::Schedule`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardState {
    /// The page layout driving this wizard.
    pub flow: FlowVariant,
    /// The current step.
    pub step: Step,
    /// The current schedule sub-step, in the split flow.
    pub sub_step: Option<SubStep>,
    /// The customer's choices.
    pub selections: Selections,
}

impl WizardState {
    /// Moves to `step`, entering the schedule sub-steps at `entry` when the
    /// flow splits them.
    pub(crate) fn land_on(&mut self, step: Step, entry: SubStep) {
        self.step = step;
        self.sub_step = (self.flow == FlowVariant::SplitSchedule && step == Step::Schedule)
            .then_some(entry);
    }

    /// Re-seats the sub-step after the booking kind changed under it.
    pub(crate) fn normalize_sub_step(&mut self) {
        let kind: Option<BookingKind> = self.selections.booking_kind;
        if self.sub_step.is_some_and(|sub| !sub.applies_to(kind)) {
            self.sub_step = Some(SubStep::last_in(kind));
        }
    }
}

/// Why a command was refused without changing state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectionReason {
    /// `Prev` on the first step.
    AtFirstStep,
    /// `Next` on review; submission is a separate operation.
    AtReview,
    /// The day already holds the maximum number of time slots.
    TooManyTimeSlots {
        /// The per-day maximum.
        max: usize,
    },
    /// The time slot was already chosen.
    DuplicateTimeSlot(TimeSlot),
    /// The time slot to remove was not chosen.
    TimeSlotNotFound(TimeSlot),
}

impl std::fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AtFirstStep => write!(f, "Already on the first step"),
            Self::AtReview => write!(f, "Already on review; submit the booking instead"),
            Self::TooManyTimeSlots { max } => {
                write!(f, "At most {max} time slots can be booked per day")
            }
            Self::DuplicateTimeSlot(slot) => write!(f, "Time slot {slot} is already selected"),
            Self::TimeSlotNotFound(slot) => write!(f, "Time slot {slot} is not selected"),
        }
    }
}

/// What a command did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionOutcome {
    /// A selection changed; the position did not.
    Updated,
    /// The wizard moved forward.
    Advanced,
    /// The wizard moved back.
    Retreated,
    /// `Next` was refused because the current position is incomplete.
    Blocked {
        /// The step that is incomplete.
        step: Step,
        /// The incomplete sub-step, in the split flow.
        sub_step: Option<SubStep>,
    },
    /// The command was refused; state is unchanged.
    Rejected(RejectionReason),
}

/// The result of applying one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The state after the command.
    pub new_state: WizardState,
    /// What happened.
    pub outcome: TransitionOutcome,
}
