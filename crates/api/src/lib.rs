// Copyright (C) 2026 PawCare Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary for the booking flow.
//!
//! Requests arrive as string-typed DTOs. Handlers validate them into domain
//! values, run the pure core operations, and translate results and errors
//! back into the API contract.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod conversion;
mod error;
mod handlers;
mod navigation;
mod request_response;

#[cfg(test)]
mod tests;

pub use conversion::{
    command_from_dto, outcome_to_dto, selections_from_dto, selections_to_dto, state_from_dto,
    state_to_dto, wizard_response,
};
pub use error::{ApiError, translate_core_error, translate_domain_error};
pub use handlers::{apply_command, preview_schedule, resume_wizard, start_wizard, submit_booking};
pub use navigation::{ReturnQuery, decode_return_query, encode_return_query};
pub use request_response::{
    ApplyCommandRequest, ApplyCommandResponse, CommandDto, OutcomeDto, PriorBookingDto,
    SchedulePreviewRequest, SchedulePreviewResponse, SelectionsDto, StartWizardRequest,
    SubmissionResponse, WizardResponse, WizardStateDto,
};
