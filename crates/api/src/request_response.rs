// Copyright (C) 2026 PawCare Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! Dates travel as `YYYY-MM-DD`, times as `HH:MM` and prices as decimal
//! strings in major units. Conversion into domain values happens in the
//! handlers, which report the offending field on failure.

use serde::{Deserialize, Serialize};

/// The customer's selections as sent over the wire.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionsDto {
    pub pet_id: Option<String>,
    pub service_id: Option<String>,
    /// Unit price of the chosen service, e.g. `"300.00"`.
    pub unit_price: Option<String>,
    pub address_id: Option<String>,
    /// `one_time` or `recurring`.
    pub booking_type: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    /// Single time of a one-time booking.
    pub time: Option<String>,
    /// Daily time slots of a recurring booking.
    pub time_slots: Vec<String>,
    /// The raw recurrence pattern.
    pub pattern: String,
}

/// A complete wizard draft as sent over the wire.
///
/// The server keeps no drafts; clients send this back with every command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardStateDto {
    /// `flat` or `split_schedule`.
    pub flow: String,
    /// The current step name.
    pub step: String,
    /// The current schedule sub-step name, in the split flow.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_step: Option<String>,
    /// The customer's selections.
    #[serde(default)]
    pub selections: SelectionsDto,
}

/// A wizard command as sent over the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CommandDto {
    SelectPet {
        pet_id: String,
    },
    SelectService {
        service_id: String,
        unit_price: String,
    },
    SelectAddress {
        address_id: String,
    },
    SetBookingKind {
        booking_type: String,
    },
    SetStartDate {
        #[serde(default)]
        date: Option<String>,
    },
    SetEndDate {
        #[serde(default)]
        date: Option<String>,
    },
    SetTime {
        #[serde(default)]
        time: Option<String>,
    },
    AddTimeSlot {
        time: String,
    },
    RemoveTimeSlot {
        time: String,
    },
    SetPattern {
        pattern: String,
    },
    Next,
    Prev,
}

/// A previous booking used to prefill a rebooking draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorBookingDto {
    pub pet_id: String,
    pub service_id: String,
    pub unit_price: String,
    pub address_id: String,
    pub booking_type: String,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub time_slots: Vec<String>,
    #[serde(default)]
    pub pattern: String,
}

/// API request to start a new wizard draft.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StartWizardRequest {
    /// `flat` (default) or `split_schedule`.
    pub flow: Option<String>,
    /// When present, the draft is a rebooking of this booking.
    pub prior: Option<PriorBookingDto>,
}

/// A wizard draft together with its derived figures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardResponse {
    /// The draft.
    pub state: WizardStateDto,
    /// `details` or `booking`.
    pub phase: String,
    /// Percentage of steps complete up to the current one.
    pub progress: u8,
    /// Whether `next` would advance from the current position.
    pub current_complete: bool,
    /// Human-readable recurrence label, e.g. "Every week on Monday".
    pub pattern_label: String,
}

/// API request to apply one command to a draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplyCommandRequest {
    /// The draft before the command.
    pub state: WizardStateDto,
    /// The command.
    pub command: CommandDto,
}

/// What a command did, as reported over the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeDto {
    /// `updated`, `advanced`, `retreated`, `blocked` or `rejected`.
    pub kind: String,
    /// For `blocked`, the incomplete step.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step: Option<String>,
    /// For `blocked` in the split flow, the incomplete sub-step.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_step: Option<String>,
    /// For `rejected`, why.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// API response for an applied command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplyCommandResponse {
    /// The command outcome.
    pub outcome: OutcomeDto,
    /// The draft after the command, with derived figures.
    #[serde(flatten)]
    pub wizard: WizardResponse,
}

/// API request to preview the sessions and price of a schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulePreviewRequest {
    /// The raw recurrence pattern. Blank means a one-time booking on `start_date`.
    #[serde(default)]
    pub pattern: String,
    pub start_date: String,
    #[serde(default)]
    pub end_date: Option<String>,
    /// Daily time slots. Ignored for one-time bookings.
    #[serde(default)]
    pub time_slots: Vec<String>,
    pub unit_price: String,
}

/// API response for a schedule preview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulePreviewResponse {
    /// Human-readable recurrence label.
    pub pattern_label: String,
    /// Whether the pattern was recognized.
    pub pattern_recognized: bool,
    /// The dates the booking occurs on, ascending.
    pub session_dates: Vec<String>,
    pub sessions_per_day: u32,
    pub total_sessions: u64,
    pub unit_price: String,
    pub total_price: String,
}

/// API response for a submitted booking, handed to the payment step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionResponse {
    pub pet_id: String,
    pub service_id: String,
    pub address_id: String,
    pub booking_type: String,
    pub start_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(default)]
    pub time_slots: Vec<String>,
    pub sessions: u64,
    pub unit_price: String,
    pub total_price: String,
    pub session_dates: Vec<String>,
    /// Query string that resumes this booking on review, for the payment
    /// page's back link.
    pub return_query: String,
}
