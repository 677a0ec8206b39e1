// Copyright (C) 2026 PawCare Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::state::{Selections, WizardState};
use crate::step::{FlowVariant, Step, SubStep};
use pawcare_domain::{AddressId, BookingKind, PetId, ServiceSelection, TimeSlot};

/// The parts of an earlier booking carried into a new one.
///
/// Dates are deliberately absent: a rebooking always asks for new dates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriorBooking {
    pub pet: PetId,
    pub service: ServiceSelection,
    pub address: AddressId,
    pub booking_kind: BookingKind,
    pub time: Option<TimeSlot>,
    pub time_slots: Vec<TimeSlot>,
    pub pattern: String,
}

impl WizardState {
    /// A fresh draft on the first step.
    #[must_use]
    pub fn blank(flow: FlowVariant) -> Self {
        Self {
            flow,
            step: Step::Pet,
            sub_step: None,
            selections: Selections::default(),
        }
    }

    /// A draft prefilled from an earlier booking, landing on the schedule.
    ///
    /// Pet, service, address, kind, times and pattern are copied; start and
    /// end dates are left empty so the customer picks them again.
    #[must_use]
    pub fn rebook(flow: FlowVariant, prior: &PriorBooking) -> Self {
        let mut selections: Selections = Selections {
            pet: Some(prior.pet.clone()),
            service: Some(prior.service.clone()),
            address: Some(prior.address.clone()),
            booking_kind: Some(prior.booking_kind),
            time: prior.time,
            time_slots: prior.time_slots.clone(),
            pattern: prior.pattern.trim().to_string(),
            ..Selections::default()
        };
        selections.time_slots.sort_unstable();
        selections.time_slots.dedup();
        selections.retain_kind(prior.booking_kind);

        let mut state: Self = Self::blank(flow);
        state.selections = selections;
        state.land_on(Step::Schedule, SubStep::first());
        state
    }

    /// A draft restored verbatim on the review step, e.g. when returning
    /// from payment.
    #[must_use]
    pub fn resume(flow: FlowVariant, selections: Selections) -> Self {
        let mut state: Self = Self::blank(flow);
        state.selections = selections;
        state.land_on(Step::Review, SubStep::first());
        state
    }
}
