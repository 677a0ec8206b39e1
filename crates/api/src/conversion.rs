// Copyright (C) 2026 PawCare Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Conversion between wire DTOs and domain/core values.

use crate::error::{ApiError, translate_core_error, translate_domain_error};
use crate::request_response::{
    CommandDto, OutcomeDto, PriorBookingDto, SelectionsDto, SubmissionResponse, WizardResponse,
    WizardStateDto,
};
use pawcare::{
    BookingSubmission, Command, FlowVariant, PriorBooking, Selections, Step, SubStep,
    TransitionOutcome, WizardState,
};
use pawcare_domain::{
    AddressId, BookingKind, MAX_TIME_SLOTS_PER_DAY, PetId, Price, ServiceId, ServiceSelection,
    TimeSlot, describe_pattern, format_date, parse_date,
};
use time::Date;

/// Drops blank values, which forms and query strings send for "unset".
fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

pub(crate) fn parse_date_field(field: &str, raw: &str) -> Result<Date, ApiError> {
    parse_date(raw).map_err(|e| translate_domain_error(field, e))
}

fn parse_optional_date(field: &str, raw: Option<String>) -> Result<Option<Date>, ApiError> {
    present(raw)
        .map(|value| parse_date_field(field, &value))
        .transpose()
}

fn parse_slot(field: &str, raw: &str) -> Result<TimeSlot, ApiError> {
    TimeSlot::parse(raw).map_err(|e| translate_domain_error(field, e))
}

fn parse_optional_slot(field: &str, raw: Option<String>) -> Result<Option<TimeSlot>, ApiError> {
    present(raw).map(|value| parse_slot(field, &value)).transpose()
}

/// Parses daily time slots into ascending, distinct order.
///
/// # Errors
///
/// Returns an error if a slot is not `HH:MM` or there are more distinct slots
/// than a day allows.
pub(crate) fn parse_time_slots(field: &str, raw: &[String]) -> Result<Vec<TimeSlot>, ApiError> {
    let mut slots: Vec<TimeSlot> = raw
        .iter()
        .filter(|value| !value.trim().is_empty())
        .map(|value| parse_slot(field, value))
        .collect::<Result<_, _>>()?;
    slots.sort_unstable();
    slots.dedup();
    if slots.len() > MAX_TIME_SLOTS_PER_DAY {
        return Err(ApiError::invalid_input(
            field,
            format!("At most {MAX_TIME_SLOTS_PER_DAY} time slots can be booked per day"),
        ));
    }
    Ok(slots)
}

pub(crate) fn parse_price(field: &str, raw: &str) -> Result<Price, ApiError> {
    raw.parse().map_err(|e| translate_domain_error(field, e))
}

fn parse_booking_kind(field: &str, raw: &str) -> Result<BookingKind, ApiError> {
    raw.parse().map_err(|e| translate_domain_error(field, e))
}

fn parse_service(service_id: &str, unit_price: &str) -> Result<ServiceSelection, ApiError> {
    let id: ServiceId =
        ServiceId::new(service_id).map_err(|e| translate_domain_error("service_id", e))?;
    let price: Price = parse_price("unit_price", unit_price)?;
    Ok(ServiceSelection::new(id, price))
}

/// Parses the flow variant, defaulting to the flat layout.
///
/// # Errors
///
/// Returns an error if the name is not a known flow.
pub(crate) fn parse_flow(raw: Option<&str>) -> Result<FlowVariant, ApiError> {
    raw.filter(|v| !v.trim().is_empty())
        .map_or(Ok(FlowVariant::default()), |name| name.trim().parse::<FlowVariant>())
        .map_err(translate_core_error)
}

/// Builds validated selections from their wire form.
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` naming the first field that fails to parse.
pub fn selections_from_dto(dto: SelectionsDto) -> Result<Selections, ApiError> {
    let pet: Option<PetId> = present(dto.pet_id)
        .map(|v| PetId::new(&v).map_err(|e| translate_domain_error("pet_id", e)))
        .transpose()?;
    let address: Option<AddressId> = present(dto.address_id)
        .map(|v| AddressId::new(&v).map_err(|e| translate_domain_error("address_id", e)))
        .transpose()?;
    let service: Option<ServiceSelection> =
        match (present(dto.service_id), present(dto.unit_price)) {
            (Some(id), Some(price)) => Some(parse_service(&id, &price)?),
            (Some(_), None) => {
                return Err(ApiError::invalid_input(
                    "unit_price",
                    "A unit price is required with a service",
                ));
            }
            (None, _) => None,
        };
    let booking_kind: Option<BookingKind> = present(dto.booking_type)
        .map(|v| parse_booking_kind("booking_type", &v))
        .transpose()?;

    Ok(Selections {
        pet,
        service,
        address,
        booking_kind,
        start_date: parse_optional_date("start_date", dto.start_date)?,
        end_date: parse_optional_date("end_date", dto.end_date)?,
        time: parse_optional_slot("time", dto.time)?,
        time_slots: parse_time_slots("time_slots", &dto.time_slots)?,
        pattern: dto.pattern.trim().to_string(),
    })
}

/// Converts selections to their wire form.
#[must_use]
pub fn selections_to_dto(selections: &Selections) -> SelectionsDto {
    SelectionsDto {
        pet_id: selections.pet.as_ref().map(|p| p.value().to_string()),
        service_id: selections.service.as_ref().map(|s| s.id.value().to_string()),
        unit_price: selections.service.as_ref().map(|s| s.unit_price.to_string()),
        address_id: selections.address.as_ref().map(|a| a.value().to_string()),
        booking_type: selections.booking_kind.map(|k| k.as_str().to_string()),
        start_date: selections.start_date.map(format_date),
        end_date: selections.end_date.map(format_date),
        time: selections.time.map(|t| t.to_string()),
        time_slots: selections.time_slots.iter().map(ToString::to_string).collect(),
        pattern: selections.pattern.clone(),
    }
}

/// Rebuilds a wizard draft sent by a client.
///
/// # Errors
///
/// Returns an error if a name or selection fails to parse, or if the
/// sub-step does not fit the flow, step and booking kind.
pub fn state_from_dto(dto: WizardStateDto) -> Result<WizardState, ApiError> {
    let flow: FlowVariant = parse_flow(Some(&dto.flow))?;
    let step: Step = dto.step.parse().map_err(translate_core_error)?;
    let sub_step: Option<SubStep> = present(dto.sub_step)
        .map(|v| v.parse::<SubStep>().map_err(translate_core_error))
        .transpose()?;
    let selections: Selections = selections_from_dto(dto.selections)?;

    let splits_here: bool = flow == FlowVariant::SplitSchedule && step == Step::Schedule;
    match sub_step {
        None if splits_here => {
            return Err(ApiError::invalid_input(
                "sub_step",
                "The split schedule step requires a sub-step",
            ));
        }
        Some(sub) if !splits_here => {
            return Err(ApiError::invalid_input(
                "sub_step",
                format!("Sub-step '{sub}' is only valid on the split schedule step"),
            ));
        }
        Some(sub) if !sub.applies_to(selections.booking_kind) => {
            return Err(ApiError::invalid_input(
                "sub_step",
                format!("Sub-step '{sub}' does not apply to this booking type"),
            ));
        }
        _ => {}
    }

    Ok(WizardState {
        flow,
        step,
        sub_step,
        selections,
    })
}

/// Converts a wizard draft to its wire form.
#[must_use]
pub fn state_to_dto(state: &WizardState) -> WizardStateDto {
    WizardStateDto {
        flow: state.flow.to_string(),
        step: state.step.to_string(),
        sub_step: state.sub_step.map(|s| s.to_string()),
        selections: selections_to_dto(&state.selections),
    }
}

/// Wraps a draft with the figures a client renders alongside it.
#[must_use]
pub fn wizard_response(state: &WizardState) -> WizardResponse {
    let phase: &str = match state.step.phase() {
        pawcare::Phase::Details => "details",
        pawcare::Phase::Booking => "booking",
    };
    WizardResponse {
        state: state_to_dto(state),
        phase: phase.to_string(),
        progress: state.progress(),
        current_complete: state.is_current_complete(),
        pattern_label: match state.selections.booking_kind {
            Some(BookingKind::Recurring) => describe_pattern(&state.selections.pattern),
            Some(BookingKind::OneTime) | None => describe_pattern(""),
        },
    }
}

/// Builds a core command from its wire form.
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` if an argument fails to parse.
pub fn command_from_dto(dto: CommandDto) -> Result<Command, ApiError> {
    let command: Command = match dto {
        CommandDto::SelectPet { pet_id } => Command::SelectPet {
            pet: PetId::new(&pet_id).map_err(|e| translate_domain_error("pet_id", e))?,
        },
        CommandDto::SelectService {
            service_id,
            unit_price,
        } => Command::SelectService {
            service: parse_service(&service_id, &unit_price)?,
        },
        CommandDto::SelectAddress { address_id } => Command::SelectAddress {
            address: AddressId::new(&address_id)
                .map_err(|e| translate_domain_error("address_id", e))?,
        },
        CommandDto::SetBookingKind { booking_type } => Command::SetBookingKind {
            kind: parse_booking_kind("booking_type", &booking_type)?,
        },
        CommandDto::SetStartDate { date } => Command::SetStartDate {
            date: parse_optional_date("date", date)?,
        },
        CommandDto::SetEndDate { date } => Command::SetEndDate {
            date: parse_optional_date("date", date)?,
        },
        CommandDto::SetTime { time } => Command::SetTime {
            time: parse_optional_slot("time", time)?,
        },
        CommandDto::AddTimeSlot { time } => Command::AddTimeSlot {
            slot: parse_slot("time", &time)?,
        },
        CommandDto::RemoveTimeSlot { time } => Command::RemoveTimeSlot {
            slot: parse_slot("time", &time)?,
        },
        CommandDto::SetPattern { pattern } => Command::SetPattern { pattern },
        CommandDto::Next => Command::Next,
        CommandDto::Prev => Command::Prev,
    };
    Ok(command)
}

/// Builds a rebooking seed from its wire form.
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` if a field fails to parse.
pub fn prior_booking_from_dto(dto: PriorBookingDto) -> Result<PriorBooking, ApiError> {
    Ok(PriorBooking {
        pet: PetId::new(&dto.pet_id).map_err(|e| translate_domain_error("pet_id", e))?,
        service: parse_service(&dto.service_id, &dto.unit_price)?,
        address: AddressId::new(&dto.address_id)
            .map_err(|e| translate_domain_error("address_id", e))?,
        booking_kind: parse_booking_kind("booking_type", &dto.booking_type)?,
        time: parse_optional_slot("time", dto.time)?,
        time_slots: parse_time_slots("time_slots", &dto.time_slots)?,
        pattern: dto.pattern,
    })
}

/// Converts a transition outcome to its wire form.
#[must_use]
pub fn outcome_to_dto(outcome: &TransitionOutcome) -> OutcomeDto {
    let bare = |kind: &str| OutcomeDto {
        kind: kind.to_string(),
        step: None,
        sub_step: None,
        reason: None,
    };
    match outcome {
        TransitionOutcome::Updated => bare("updated"),
        TransitionOutcome::Advanced => bare("advanced"),
        TransitionOutcome::Retreated => bare("retreated"),
        TransitionOutcome::Blocked { step, sub_step } => OutcomeDto {
            step: Some(step.to_string()),
            sub_step: sub_step.map(|s| s.to_string()),
            ..bare("blocked")
        },
        TransitionOutcome::Rejected(reason) => OutcomeDto {
            reason: Some(reason.to_string()),
            ..bare("rejected")
        },
    }
}

/// Converts a submission to its wire form.
#[must_use]
pub fn submission_to_response(
    submission: &BookingSubmission,
    return_query: String,
) -> SubmissionResponse {
    SubmissionResponse {
        pet_id: submission.pet.value().to_string(),
        service_id: submission.service.value().to_string(),
        address_id: submission.address.value().to_string(),
        booking_type: submission.booking_kind.as_str().to_string(),
        start_date: format_date(submission.start_date),
        end_date: submission.end_date.map(format_date),
        pattern: submission.pattern.clone(),
        time: submission.time.map(|t| t.to_string()),
        time_slots: submission.time_slots.iter().map(ToString::to_string).collect(),
        sessions: submission.sessions,
        unit_price: submission.unit_price.to_string(),
        total_price: submission.total_price.to_string(),
        session_dates: submission
            .session_dates
            .iter()
            .copied()
            .map(format_date)
            .collect(),
        return_query,
    }
}
