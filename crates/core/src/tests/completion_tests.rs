// Copyright (C) 2026 PawCare Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{
    create_details_selections, create_one_time_selections, create_recurring_selections,
    create_state_at,
};
use crate::{
    FlowVariant, Selections, Step, SubStep, WizardState, is_step_complete, is_sub_step_complete,
    progress,
};
use pawcare_domain::{BookingKind, Price, SessionPricing};
use time::macros::date;

#[test]
fn test_detail_steps_need_a_selection() {
    let empty: Selections = Selections::default();
    let details: Selections = create_details_selections();

    for step in [Step::Pet, Step::Service, Step::Address] {
        assert!(!is_step_complete(&empty, step));
        assert!(is_step_complete(&details, step));
    }
}

#[test]
fn test_review_is_always_complete() {
    assert!(is_step_complete(&Selections::default(), Step::Review));
}

#[test]
fn test_schedule_incomplete_without_booking_kind() {
    let selections: Selections = Selections {
        start_date: Some(date!(2024 - 03 - 15)),
        ..create_details_selections()
    };

    assert!(!is_step_complete(&selections, Step::Schedule));
}

#[test]
fn test_one_time_schedule_needs_date_and_time() {
    let complete: Selections = create_one_time_selections();
    let no_time: Selections = Selections {
        time: None,
        ..create_one_time_selections()
    };

    assert!(is_step_complete(&complete, Step::Schedule));
    assert!(!is_step_complete(&no_time, Step::Schedule));
}

#[test]
fn test_recurring_schedule_needs_every_part() {
    let complete: Selections = create_recurring_selections();
    assert!(is_step_complete(&complete, Step::Schedule));

    let variants: Vec<Selections> = vec![
        Selections {
            start_date: None,
            ..create_recurring_selections()
        },
        Selections {
            end_date: None,
            ..create_recurring_selections()
        },
        Selections {
            time_slots: Vec::new(),
            ..create_recurring_selections()
        },
        Selections {
            pattern: String::new(),
            ..create_recurring_selections()
        },
        Selections {
            pattern: String::from("daily_monday"),
            ..create_recurring_selections()
        },
    ];
    for selections in variants {
        assert!(!is_step_complete(&selections, Step::Schedule));
    }
}

#[test]
fn test_sub_step_predicates() {
    let one_time: Selections = create_one_time_selections();
    let recurring: Selections = create_recurring_selections();

    assert!(is_sub_step_complete(&one_time, SubStep::BookingType));
    assert!(is_sub_step_complete(&one_time, SubStep::Dates));
    assert!(is_sub_step_complete(&one_time, SubStep::Times));
    assert!(is_sub_step_complete(&recurring, SubStep::Times));
    assert!(is_sub_step_complete(&recurring, SubStep::Recurrence));
    assert!(!is_sub_step_complete(&Selections::default(), SubStep::Times));
}

#[test]
fn test_progress_counts_complete_steps_up_to_current() {
    let blank: WizardState = WizardState::blank(FlowVariant::Flat);
    assert_eq!(progress(&blank), 0);

    let on_schedule: WizardState = create_state_at(
        FlowVariant::Flat,
        Step::Schedule,
        create_details_selections(),
    );
    assert_eq!(on_schedule.progress(), 60);

    let on_pet_with_everything: WizardState = create_state_at(
        FlowVariant::Flat,
        Step::Pet,
        create_one_time_selections(),
    );
    assert_eq!(on_pet_with_everything.progress(), 20);
}

#[test]
fn test_progress_is_full_on_completed_review() {
    let state: WizardState = WizardState::resume(FlowVariant::Flat, create_recurring_selections());

    assert_eq!(state.progress(), 100);
}

#[test]
fn test_is_current_complete_uses_sub_step_in_split_flow() {
    let mut state: WizardState = create_state_at(
        FlowVariant::SplitSchedule,
        Step::Schedule,
        create_details_selections(),
    );
    assert!(!state.is_current_complete());

    state.selections.booking_kind = Some(BookingKind::Recurring);
    assert!(state.is_current_complete());
}

#[test]
fn test_pricing_follows_selections() {
    let pricing: SessionPricing = create_recurring_selections().pricing();

    assert_eq!(pricing.sessions_per_day, 2);
    assert_eq!(pricing.total_sessions, 10);
    assert_eq!(pricing.total_price, Price::from_major(3000));

    let one_time: SessionPricing = create_one_time_selections().pricing();
    assert_eq!(one_time.total_sessions, 1);
    assert_eq!(one_time.total_price, Price::from_major(300));
}
