// Copyright (C) 2026 PawCare Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    Command, FlowVariant, PriorBooking, Selections, Step, TransitionResult, WizardState, apply,
};
use pawcare_domain::{
    AddressId, BookingKind, PetId, Price, ServiceId, ServiceSelection, TimeSlot,
};
use time::macros::date;

pub fn create_test_pet() -> PetId {
    PetId::new("pet-rex").unwrap()
}

pub fn create_test_service() -> ServiceSelection {
    ServiceSelection::new(ServiceId::new("svc-walk").unwrap(), Price::from_major(300))
}

pub fn create_test_address() -> AddressId {
    AddressId::new("addr-home").unwrap()
}

pub fn slot(value: &str) -> TimeSlot {
    TimeSlot::parse(value).unwrap()
}

/// Pet, service and address chosen; nothing scheduled yet.
pub fn create_details_selections() -> Selections {
    Selections {
        pet: Some(create_test_pet()),
        service: Some(create_test_service()),
        address: Some(create_test_address()),
        ..Selections::default()
    }
}

pub fn create_one_time_selections() -> Selections {
    Selections {
        booking_kind: Some(BookingKind::OneTime),
        start_date: Some(date!(2024 - 03 - 15)),
        time: Some(slot("10:00")),
        ..create_details_selections()
    }
}

/// Mondays and Wednesdays over the first half of January 2024, twice a day.
pub fn create_recurring_selections() -> Selections {
    Selections {
        booking_kind: Some(BookingKind::Recurring),
        start_date: Some(date!(2024 - 01 - 01)),
        end_date: Some(date!(2024 - 01 - 15)),
        time_slots: vec![slot("09:00"), slot("17:00")],
        pattern: String::from("weekly_1_monday,wednesday"),
        ..create_details_selections()
    }
}

pub fn create_test_prior_booking() -> PriorBooking {
    PriorBooking {
        pet: create_test_pet(),
        service: create_test_service(),
        address: create_test_address(),
        booking_kind: BookingKind::Recurring,
        time: None,
        time_slots: vec![slot("17:00"), slot("09:00")],
        pattern: String::from("weekly_1_monday,wednesday"),
    }
}

/// A state positioned on `step` with the given selections.
pub fn create_state_at(flow: FlowVariant, step: Step, selections: Selections) -> WizardState {
    let mut state: WizardState = WizardState::resume(flow, selections);
    state.land_on(step, crate::SubStep::first());
    state
}

/// Applies commands in order, returning the final result.
pub fn apply_all(state: &WizardState, commands: Vec<Command>) -> TransitionResult {
    let mut current: WizardState = state.clone();
    let mut last: Option<TransitionResult> = None;
    for command in commands {
        let result: TransitionResult = apply(&current, command);
        current = result.new_state.clone();
        last = Some(result);
    }
    last.unwrap()
}
