// Copyright (C) 2026 PawCare Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{
    apply_all, create_details_selections, create_one_time_selections,
    create_recurring_selections, create_state_at, create_test_address, create_test_pet,
    create_test_service, slot,
};
use crate::{
    Command, FlowVariant, RejectionReason, Selections, Step, TransitionOutcome,
    TransitionResult, WizardState, apply,
};
use pawcare_domain::{BookingKind, MAX_TIME_SLOTS_PER_DAY};
use time::macros::date;

#[test]
fn test_select_pet_updates_without_moving() {
    let state: WizardState = WizardState::blank(FlowVariant::Flat);

    let result: TransitionResult = apply(
        &state,
        Command::SelectPet {
            pet: create_test_pet(),
        },
    );

    assert_eq!(result.outcome, TransitionOutcome::Updated);
    assert_eq!(result.new_state.step, Step::Pet);
    assert_eq!(result.new_state.selections.pet, Some(create_test_pet()));
}

#[test]
fn test_apply_does_not_modify_input_state() {
    let state: WizardState = WizardState::blank(FlowVariant::Flat);
    let before: WizardState = state.clone();

    let _ = apply(
        &state,
        Command::SelectPet {
            pet: create_test_pet(),
        },
    );

    assert_eq!(state, before);
}

#[test]
fn test_next_blocked_when_current_step_incomplete() {
    let state: WizardState = WizardState::blank(FlowVariant::Flat);

    let result: TransitionResult = apply(&state, Command::Next);

    assert_eq!(
        result.outcome,
        TransitionOutcome::Blocked {
            step: Step::Pet,
            sub_step: None,
        }
    );
    assert_eq!(result.new_state, state);
}

#[test]
fn test_next_advances_through_detail_steps() {
    let state: WizardState = WizardState::blank(FlowVariant::Flat);

    let result: TransitionResult = apply_all(
        &state,
        vec![
            Command::SelectPet {
                pet: create_test_pet(),
            },
            Command::Next,
            Command::SelectService {
                service: create_test_service(),
            },
            Command::Next,
            Command::SelectAddress {
                address: create_test_address(),
            },
            Command::Next,
        ],
    );

    assert_eq!(result.outcome, TransitionOutcome::Advanced);
    assert_eq!(result.new_state.step, Step::Schedule);
    assert_eq!(result.new_state.sub_step, None);
}

#[test]
fn test_next_from_complete_one_time_schedule_reaches_review() {
    let state: WizardState =
        create_state_at(FlowVariant::Flat, Step::Schedule, create_one_time_selections());

    let result: TransitionResult = apply(&state, Command::Next);

    assert_eq!(result.outcome, TransitionOutcome::Advanced);
    assert_eq!(result.new_state.step, Step::Review);
}

#[test]
fn test_next_blocked_when_recurring_schedule_generates_no_dates() {
    // No Saturday falls between Monday and Friday.
    let selections: Selections = Selections {
        pattern: String::from("weekly_1_saturday"),
        start_date: Some(date!(2024 - 01 - 01)),
        end_date: Some(date!(2024 - 01 - 05)),
        ..create_recurring_selections()
    };
    let state: WizardState = create_state_at(FlowVariant::Flat, Step::Schedule, selections);

    let result: TransitionResult = apply(&state, Command::Next);

    assert_eq!(
        result.outcome,
        TransitionOutcome::Blocked {
            step: Step::Schedule,
            sub_step: None,
        }
    );
    assert_eq!(result.new_state.step, Step::Schedule);
}

#[test]
fn test_next_blocked_when_recurring_pattern_unrecognized() {
    let selections: Selections = Selections {
        pattern: String::from("fortnightly"),
        ..create_recurring_selections()
    };
    let state: WizardState = create_state_at(FlowVariant::Flat, Step::Schedule, selections);

    let result: TransitionResult = apply(&state, Command::Next);

    assert!(matches!(result.outcome, TransitionOutcome::Blocked { .. }));
}

#[test]
fn test_next_on_review_is_rejected() {
    let state: WizardState = WizardState::resume(FlowVariant::Flat, create_one_time_selections());

    let result: TransitionResult = apply(&state, Command::Next);

    assert_eq!(
        result.outcome,
        TransitionOutcome::Rejected(RejectionReason::AtReview)
    );
    assert_eq!(result.new_state, state);
}

#[test]
fn test_prev_on_first_step_is_rejected() {
    let state: WizardState = WizardState::blank(FlowVariant::Flat);

    let result: TransitionResult = apply(&state, Command::Prev);

    assert_eq!(
        result.outcome,
        TransitionOutcome::Rejected(RejectionReason::AtFirstStep)
    );
}

#[test]
fn test_prev_moves_back_even_when_incomplete() {
    let state: WizardState = create_state_at(
        FlowVariant::Flat,
        Step::Schedule,
        create_details_selections(),
    );

    let result: TransitionResult = apply(&state, Command::Prev);

    assert_eq!(result.outcome, TransitionOutcome::Retreated);
    assert_eq!(result.new_state.step, Step::Address);
}

#[test]
fn test_switching_to_one_time_clears_recurring_selections() {
    let state: WizardState = create_state_at(
        FlowVariant::Flat,
        Step::Schedule,
        create_recurring_selections(),
    );

    let result: TransitionResult = apply(
        &state,
        Command::SetBookingKind {
            kind: BookingKind::OneTime,
        },
    );

    let selections: &Selections = &result.new_state.selections;
    assert_eq!(selections.booking_kind, Some(BookingKind::OneTime));
    assert!(selections.time_slots.is_empty());
    assert!(selections.pattern.is_empty());
    assert_eq!(selections.end_date, None);
    assert_eq!(selections.start_date, Some(date!(2024 - 01 - 01)));
}

#[test]
fn test_switching_to_recurring_clears_single_time() {
    let state: WizardState = create_state_at(
        FlowVariant::Flat,
        Step::Schedule,
        create_one_time_selections(),
    );

    let result: TransitionResult = apply(
        &state,
        Command::SetBookingKind {
            kind: BookingKind::Recurring,
        },
    );

    assert_eq!(result.new_state.selections.time, None);
    assert_eq!(
        result.new_state.selections.start_date,
        Some(date!(2024 - 03 - 15))
    );
}

#[test]
fn test_setting_same_kind_keeps_selections() {
    let state: WizardState = create_state_at(
        FlowVariant::Flat,
        Step::Schedule,
        create_recurring_selections(),
    );

    let result: TransitionResult = apply(
        &state,
        Command::SetBookingKind {
            kind: BookingKind::Recurring,
        },
    );

    assert_eq!(result.new_state.selections, state.selections);
}

#[test]
fn test_add_time_slot_keeps_slots_sorted() {
    let state: WizardState = create_state_at(
        FlowVariant::Flat,
        Step::Schedule,
        create_recurring_selections(),
    );

    let result: TransitionResult = apply(
        &state,
        Command::AddTimeSlot {
            slot: slot("12:30"),
        },
    );

    assert_eq!(result.outcome, TransitionOutcome::Updated);
    assert_eq!(
        result.new_state.selections.time_slots,
        vec![slot("09:00"), slot("12:30"), slot("17:00")]
    );
}

#[test]
fn test_add_duplicate_time_slot_is_rejected() {
    let state: WizardState = create_state_at(
        FlowVariant::Flat,
        Step::Schedule,
        create_recurring_selections(),
    );

    let result: TransitionResult = apply(
        &state,
        Command::AddTimeSlot {
            slot: slot("09:00"),
        },
    );

    assert_eq!(
        result.outcome,
        TransitionOutcome::Rejected(RejectionReason::DuplicateTimeSlot(slot("09:00")))
    );
    assert_eq!(result.new_state, state);
}

#[test]
fn test_fifth_time_slot_is_rejected() {
    let state: WizardState = create_state_at(
        FlowVariant::Flat,
        Step::Schedule,
        create_recurring_selections(),
    );
    let full: WizardState = apply_all(
        &state,
        vec![
            Command::AddTimeSlot {
                slot: slot("11:00"),
            },
            Command::AddTimeSlot {
                slot: slot("13:00"),
            },
        ],
    )
    .new_state;
    assert_eq!(full.selections.time_slots.len(), MAX_TIME_SLOTS_PER_DAY);

    let result: TransitionResult = apply(
        &full,
        Command::AddTimeSlot {
            slot: slot("20:00"),
        },
    );

    assert_eq!(
        result.outcome,
        TransitionOutcome::Rejected(RejectionReason::TooManyTimeSlots {
            max: MAX_TIME_SLOTS_PER_DAY,
        })
    );
    assert_eq!(result.new_state.selections.time_slots.len(), 4);
}

#[test]
fn test_remove_time_slot() {
    let state: WizardState = create_state_at(
        FlowVariant::Flat,
        Step::Schedule,
        create_recurring_selections(),
    );

    let result: TransitionResult = apply(
        &state,
        Command::RemoveTimeSlot {
            slot: slot("09:00"),
        },
    );

    assert_eq!(result.outcome, TransitionOutcome::Updated);
    assert_eq!(result.new_state.selections.time_slots, vec![slot("17:00")]);
}

#[test]
fn test_remove_missing_time_slot_is_rejected() {
    let state: WizardState = create_state_at(
        FlowVariant::Flat,
        Step::Schedule,
        create_recurring_selections(),
    );

    let result: TransitionResult = apply(
        &state,
        Command::RemoveTimeSlot {
            slot: slot("06:00"),
        },
    );

    assert_eq!(
        result.outcome,
        TransitionOutcome::Rejected(RejectionReason::TimeSlotNotFound(slot("06:00")))
    );
}

#[test]
fn test_set_pattern_trims_whitespace() {
    let state: WizardState = WizardState::blank(FlowVariant::Flat);

    let result: TransitionResult = apply(
        &state,
        Command::SetPattern {
            pattern: String::from("  weekly_2_friday "),
        },
    );

    assert_eq!(result.new_state.selections.pattern, "weekly_2_friday");
}

#[test]
fn test_clearing_start_date_reopens_schedule_gate() {
    let state: WizardState = create_state_at(
        FlowVariant::Flat,
        Step::Schedule,
        create_one_time_selections(),
    );

    let result: TransitionResult = apply_all(
        &state,
        vec![Command::SetStartDate { date: None }, Command::Next],
    );

    assert!(matches!(result.outcome, TransitionOutcome::Blocked { .. }));
}
