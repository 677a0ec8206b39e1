// Copyright (C) 2026 PawCare Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Completion predicates.
//!
//! These are the single source of truth for gating `Next`, computing
//! progress, and validating submission. They are computed from the current
//! selections on every call; nothing is cached between mutations.

use crate::state::{Selections, WizardState};
use crate::step::{Step, SubStep};
use pawcare_domain::BookingKind;

/// Whether `step` is complete for the given selections.
///
/// The recurring schedule is complete only when the generated schedule is
/// non-empty, so a valid pattern over a range that contains no matching
/// weekday still blocks progression.
#[must_use]
pub fn is_step_complete(selections: &Selections, step: Step) -> bool {
    match step {
        Step::Pet => selections.pet.is_some(),
        Step::Service => selections.service.is_some(),
        Step::Address => selections.address.is_some(),
        Step::Schedule => match selections.booking_kind {
            Some(BookingKind::OneTime) => {
                selections.start_date.is_some() && selections.time.is_some()
            }
            Some(BookingKind::Recurring) => recurring_schedule_complete(selections),
            None => false,
        },
        Step::Review => true,
    }
}

/// Whether a schedule sub-step is complete for the given selections.
#[must_use]
pub fn is_sub_step_complete(selections: &Selections, sub_step: SubStep) -> bool {
    match sub_step {
        SubStep::BookingType => selections.booking_kind.is_some(),
        SubStep::Dates => selections.start_date.is_some(),
        SubStep::Times => match selections.booking_kind {
            Some(BookingKind::OneTime) => selections.time.is_some(),
            Some(BookingKind::Recurring) => !selections.time_slots.is_empty(),
            None => false,
        },
        SubStep::Recurrence => recurring_schedule_complete(selections),
    }
}

fn recurring_schedule_complete(selections: &Selections) -> bool {
    selections.start_date.is_some()
        && !selections.time_slots.is_empty()
        && selections.recurrence().is_some()
        && selections.end_date.is_some()
        && !selections.schedule().is_empty()
}

/// Percentage of steps up to and including the current one that are complete.
///
/// The denominator is always the full step count, so the review step of a
/// fully completed booking reports 100.
#[must_use]
pub fn progress(state: &WizardState) -> u8 {
    let total: usize = Step::ALL.len();
    let complete: usize = Step::ALL
        .iter()
        .take(state.step.index() + 1)
        .filter(|step| is_step_complete(&state.selections, **step))
        .count();
    u8::try_from(complete * 100 / total).unwrap_or(100)
}

impl WizardState {
    /// Whether the current position (sub-step in the split flow) is complete.
    #[must_use]
    pub fn is_current_complete(&self) -> bool {
        self.sub_step.map_or_else(
            || is_step_complete(&self.selections, self.step),
            |sub| is_sub_step_complete(&self.selections, sub),
        )
    }

    /// See [`progress`].
    #[must_use]
    pub fn progress(&self) -> u8 {
        progress(self)
    }
}
