// Copyright (C) 2026 PawCare Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::completion::is_step_complete;
use crate::error::CoreError;
use crate::state::WizardState;
use crate::step::Step;
use pawcare_domain::{
    AddressId, BookingKind, PetId, Price, ServiceId, SessionPricing, TimeSlot,
};
use time::Date;

/// The booking handed to the payment step.
///
/// Totals and session dates are computed from the selections at submission
/// time, never carried over from an earlier preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingSubmission {
    pub pet: PetId,
    pub service: ServiceId,
    pub address: AddressId,
    pub booking_kind: BookingKind,
    pub start_date: Date,
    /// Recurring bookings only.
    pub end_date: Option<Date>,
    /// The canonical pattern string. Recurring bookings only.
    pub pattern: Option<String>,
    /// One-time bookings only.
    pub time: Option<TimeSlot>,
    /// Recurring bookings only.
    pub time_slots: Vec<TimeSlot>,
    pub sessions: u64,
    pub unit_price: Price,
    pub total_price: Price,
    pub session_dates: Vec<Date>,
}

/// Builds the booking payload from a completed draft.
///
/// # Errors
///
/// Returns [`CoreError::NotAtReview`] unless the wizard is on the review
/// step, and [`CoreError::IncompleteStep`] naming the first incomplete step.
pub fn submit(state: &WizardState) -> Result<BookingSubmission, CoreError> {
    if state.step != Step::Review {
        return Err(CoreError::NotAtReview { step: state.step });
    }
    if let Some(step) = Step::ALL
        .into_iter()
        .find(|step| !is_step_complete(&state.selections, *step))
    {
        return Err(CoreError::IncompleteStep { step });
    }

    let selections = &state.selections;
    let (Some(pet), Some(service), Some(address), Some(booking_kind), Some(start_date)) = (
        selections.pet.clone(),
        selections.service.clone(),
        selections.address.clone(),
        selections.booking_kind,
        selections.start_date,
    ) else {
        return Err(CoreError::IncompleteStep {
            step: Step::Schedule,
        });
    };

    let pricing: SessionPricing = selections.pricing();
    let (end_date, pattern, time, time_slots) = match booking_kind {
        BookingKind::OneTime => (None, None, selections.time, Vec::new()),
        BookingKind::Recurring => (
            selections.end_date,
            selections.recurrence().map(|p| p.to_string()),
            None,
            selections.time_slots.clone(),
        ),
    };

    Ok(BookingSubmission {
        pet,
        service: service.id,
        address,
        booking_kind,
        start_date,
        end_date,
        pattern,
        time,
        time_slots,
        sessions: pricing.total_sessions,
        unit_price: pricing.unit_price,
        total_price: pricing.total_price,
        session_dates: selections.schedule().into_dates(),
    })
}
