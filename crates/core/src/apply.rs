// Copyright (C) 2026 PawCare Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::completion::{is_step_complete, is_sub_step_complete};
use crate::state::{RejectionReason, TransitionOutcome, TransitionResult, WizardState};
use crate::step::{FlowVariant, Step, SubStep};
use pawcare_domain::{BookingKind, MAX_TIME_SLOTS_PER_DAY};

/// Applies a command to the current state, producing a new state and outcome.
///
/// This is a pure reducer: `state` is never modified and the same inputs
/// always produce the same result.
///
/// # Transitions
///
/// - `Next` advances only when the current position is complete. In the
///   split flow the schedule step advances sub-step by sub-step, and leaving
///   its last sub-step also requires the whole schedule step to be complete.
/// - `Prev` always moves back, unless already on the first step.
/// - Selection commands update the selections without moving.
#[must_use]
pub fn apply(state: &WizardState, command: Command) -> TransitionResult {
    match command {
        Command::Next => next(state),
        Command::Prev => prev(state),
        Command::AddTimeSlot { slot } => {
            let slots = &state.selections.time_slots;
            if slots.contains(&slot) {
                return rejected(state, RejectionReason::DuplicateTimeSlot(slot));
            }
            if slots.len() >= MAX_TIME_SLOTS_PER_DAY {
                return rejected(
                    state,
                    RejectionReason::TooManyTimeSlots {
                        max: MAX_TIME_SLOTS_PER_DAY,
                    },
                );
            }
            updated(state, |new_state| {
                new_state.selections.time_slots.push(slot);
                new_state.selections.time_slots.sort_unstable();
            })
        }
        Command::RemoveTimeSlot { slot } => {
            if !state.selections.time_slots.contains(&slot) {
                return rejected(state, RejectionReason::TimeSlotNotFound(slot));
            }
            updated(state, |new_state| {
                new_state.selections.time_slots.retain(|s| *s != slot);
            })
        }
        Command::SelectPet { pet } => updated(state, |new_state| {
            new_state.selections.pet = Some(pet);
        }),
        Command::SelectService { service } => updated(state, |new_state| {
            new_state.selections.service = Some(service);
        }),
        Command::SelectAddress { address } => updated(state, |new_state| {
            new_state.selections.address = Some(address);
        }),
        Command::SetBookingKind { kind } => updated(state, |new_state| {
            if new_state.selections.booking_kind != Some(kind) {
                new_state.selections.retain_kind(kind);
                new_state.selections.booking_kind = Some(kind);
                new_state.normalize_sub_step();
            }
        }),
        Command::SetStartDate { date } => updated(state, |new_state| {
            new_state.selections.start_date = date;
        }),
        Command::SetEndDate { date } => updated(state, |new_state| {
            new_state.selections.end_date = date;
        }),
        Command::SetTime { time } => updated(state, |new_state| {
            new_state.selections.time = time;
        }),
        Command::SetPattern { pattern } => updated(state, |new_state| {
            new_state.selections.pattern = pattern.trim().to_string();
        }),
    }
}

fn updated(state: &WizardState, change: impl FnOnce(&mut WizardState)) -> TransitionResult {
    let mut new_state: WizardState = state.clone();
    change(&mut new_state);
    TransitionResult {
        new_state,
        outcome: TransitionOutcome::Updated,
    }
}

fn rejected(state: &WizardState, reason: RejectionReason) -> TransitionResult {
    TransitionResult {
        new_state: state.clone(),
        outcome: TransitionOutcome::Rejected(reason),
    }
}

fn blocked(state: &WizardState) -> TransitionResult {
    TransitionResult {
        new_state: state.clone(),
        outcome: TransitionOutcome::Blocked {
            step: state.step,
            sub_step: state.sub_step,
        },
    }
}

fn moved(
    state: &WizardState,
    step: Step,
    entry: SubStep,
    outcome: TransitionOutcome,
) -> TransitionResult {
    let mut new_state: WizardState = state.clone();
    new_state.land_on(step, entry);
    TransitionResult { new_state, outcome }
}

fn next(state: &WizardState) -> TransitionResult {
    let kind: Option<BookingKind> = state.selections.booking_kind;

    if let (FlowVariant::SplitSchedule, Step::Schedule) = (state.flow, state.step) {
        let sub: SubStep = state.sub_step.unwrap_or_else(SubStep::first);
        if !is_sub_step_complete(&state.selections, sub) {
            return blocked(state);
        }
        if let Some(following) = sub.next_in(kind) {
            let mut new_state: WizardState = state.clone();
            new_state.sub_step = Some(following);
            return TransitionResult {
                new_state,
                outcome: TransitionOutcome::Advanced,
            };
        }
    }

    let Some(following) = state.step.next() else {
        return rejected(state, RejectionReason::AtReview);
    };
    if !is_step_complete(&state.selections, state.step) {
        return blocked(state);
    }
    moved(state, following, SubStep::first(), TransitionOutcome::Advanced)
}

fn prev(state: &WizardState) -> TransitionResult {
    let kind: Option<BookingKind> = state.selections.booking_kind;

    if let (FlowVariant::SplitSchedule, Step::Schedule) = (state.flow, state.step) {
        let sub: SubStep = state.sub_step.unwrap_or_else(SubStep::first);
        if let Some(preceding) = sub.prev_in(kind) {
            let mut new_state: WizardState = state.clone();
            new_state.sub_step = Some(preceding);
            return TransitionResult {
                new_state,
                outcome: TransitionOutcome::Retreated,
            };
        }
    }

    let Some(preceding) = state.step.prev() else {
        return rejected(state, RejectionReason::AtFirstStep);
    };
    moved(
        state,
        preceding,
        SubStep::last_in(kind),
        TransitionOutcome::Retreated,
    )
}
