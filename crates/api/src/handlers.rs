// Copyright (C) 2026 PawCare Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handlers.
//!
//! Each handler translates its request into domain/core values, runs the
//! pure core operation, and translates the result back into a response.

use crate::conversion::{
    command_from_dto, outcome_to_dto, parse_date_field, parse_flow, parse_price,
    parse_time_slots, prior_booking_from_dto, state_from_dto, submission_to_response,
    wizard_response,
};
use crate::error::{ApiError, translate_core_error};
use crate::navigation::{ReturnQuery, encode_return_query};
use crate::request_response::{
    ApplyCommandRequest, ApplyCommandResponse, SchedulePreviewRequest, SchedulePreviewResponse,
    StartWizardRequest, SubmissionResponse, WizardResponse, WizardStateDto,
};
use pawcare::{
    BookingSubmission, Command, FlowVariant, PriorBooking, Selections, TransitionResult,
    WizardState, apply, submit,
};
use pawcare_domain::{
    DateRange, GeneratedSchedule, Price, RecurrencePattern, SessionPricing,
    TimeSlot, aggregate, describe_pattern, format_date, generate,
};
use time::Date;
use tracing::{debug, info};

/// Previews the session dates and price of a schedule.
///
/// A blank pattern previews a one-time booking on `start_date`. An
/// unrecognized pattern is not an error; it previews no sessions.
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` if a date, time slot or price fails to
/// parse, or a recurring preview has no end date or no time slots.
pub fn preview_schedule(
    request: SchedulePreviewRequest,
) -> Result<SchedulePreviewResponse, ApiError> {
    info!(
        pattern = %request.pattern,
        start_date = %request.start_date,
        end_date = ?request.end_date,
        "Handling schedule preview"
    );

    let start: Date = parse_date_field("start_date", &request.start_date)?;
    let unit_price: Price = parse_price("unit_price", &request.unit_price)?;
    let pattern: &str = request.pattern.trim();

    let (schedule, sessions_per_day, recognized): (GeneratedSchedule, u32, bool) =
        if pattern.is_empty() {
            (GeneratedSchedule::single(start), 1, true)
        } else {
            let end_raw: &str = request
                .end_date
                .as_deref()
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| {
                    ApiError::invalid_input("end_date", "A recurring schedule needs an end date")
                })?;
            let end: Date = parse_date_field("end_date", end_raw)?;
            let slots: Vec<TimeSlot> = parse_time_slots("time_slots", &request.time_slots)?;
            if slots.is_empty() {
                return Err(ApiError::invalid_input(
                    "time_slots",
                    "A recurring schedule needs at least one time slot",
                ));
            }
            let sessions_per_day: u32 = u32::try_from(slots.len()).unwrap_or(u32::MAX);

            match pattern.parse::<RecurrencePattern>() {
                Ok(parsed) => (
                    generate(&parsed, DateRange::new(start, end)),
                    sessions_per_day,
                    true,
                ),
                Err(reason) => {
                    debug!(pattern, %reason, "Pattern not recognized; previewing no sessions");
                    (GeneratedSchedule::empty(), sessions_per_day, false)
                }
            }
        };

    let pricing: SessionPricing = aggregate(&schedule, sessions_per_day, unit_price);

    info!(
        sessions = pricing.total_sessions,
        total_price = %pricing.total_price,
        "Previewed schedule"
    );

    Ok(SchedulePreviewResponse {
        pattern_label: describe_pattern(pattern),
        pattern_recognized: recognized,
        session_dates: schedule.iter().map(format_date).collect(),
        sessions_per_day: pricing.sessions_per_day,
        total_sessions: pricing.total_sessions,
        unit_price: pricing.unit_price.to_string(),
        total_price: pricing.total_price.to_string(),
    })
}

/// Starts a blank draft, or a rebooking draft when a prior booking is given.
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` if the flow or prior booking fails to parse.
pub fn start_wizard(request: StartWizardRequest) -> Result<WizardResponse, ApiError> {
    let flow: FlowVariant = parse_flow(request.flow.as_deref())?;
    info!(flow = %flow, rebook = request.prior.is_some(), "Starting booking wizard");

    let state: WizardState = match request.prior {
        Some(prior) => {
            let prior: PriorBooking = prior_booking_from_dto(prior)?;
            WizardState::rebook(flow, &prior)
        }
        None => WizardState::blank(flow),
    };

    Ok(wizard_response(&state))
}

/// Restores a draft from return-navigation parameters, on the review step.
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` if a parameter fails to parse.
pub fn resume_wizard(query: ReturnQuery) -> Result<WizardResponse, ApiError> {
    let flow: FlowVariant = parse_flow(query.flow.as_deref())?;
    let selections: Selections = query.into_selections()?;
    info!(
        flow = %flow,
        booking_type = ?selections.booking_kind,
        "Resuming booking wizard on review"
    );

    let state: WizardState = WizardState::resume(flow, selections);
    Ok(wizard_response(&state))
}

/// Applies one command to a client-held draft.
///
/// Blocked and rejected commands are successful responses; their outcome
/// says why the draft did not move.
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` if the draft or command fails to parse.
pub fn apply_command(request: ApplyCommandRequest) -> Result<ApplyCommandResponse, ApiError> {
    let state: WizardState = state_from_dto(request.state)?;
    let command: Command = command_from_dto(request.command)?;
    let command_name: &str = command.name();

    let result: TransitionResult = apply(&state, command);

    info!(
        command = command_name,
        from_step = %state.step,
        to_step = %result.new_state.step,
        outcome = ?result.outcome,
        "Applied wizard command"
    );

    Ok(ApplyCommandResponse {
        outcome: outcome_to_dto(&result.outcome),
        wizard: wizard_response(&result.new_state),
    })
}

/// Validates a completed draft and builds the payload for payment.
///
/// # Errors
///
/// Returns `ApiError::IncompleteBooking` if a step is incomplete,
/// `ApiError::DomainRuleViolation` if the draft is not on review, and
/// `ApiError::InvalidInput` if the draft fails to parse.
pub fn submit_booking(state: WizardStateDto) -> Result<SubmissionResponse, ApiError> {
    let state: WizardState = state_from_dto(state)?;
    let submission: BookingSubmission = submit(&state).map_err(translate_core_error)?;
    let return_query: String = encode_return_query(&state.selections)?;

    info!(
        pet_id = %submission.pet,
        service_id = %submission.service,
        booking_type = %submission.booking_kind,
        sessions = submission.sessions,
        total_price = %submission.total_price,
        "Booking submitted"
    );

    Ok(submission_to_response(&submission, return_query))
}
