// Copyright (C) 2026 PawCare Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The booking wizard as an explicit finite state machine.
//!
//! A [`WizardState`] is only ever changed by [`apply`], a pure reducer from
//! `(state, command)` to a new state plus a [`TransitionOutcome`]. Step
//! gating is driven by a single set of completion predicates, the same ones
//! that back [`progress`] and [`submit`].

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod apply;
mod command;
mod completion;
mod error;
mod seed;
mod state;
mod step;
mod submission;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use apply::apply;
pub use command::Command;
pub use completion::{is_step_complete, is_sub_step_complete, progress};
pub use error::CoreError;
pub use seed::PriorBooking;
pub use state::{RejectionReason, Selections, TransitionOutcome, TransitionResult, WizardState};
pub use step::{FlowVariant, Phase, Step, SubStep};
pub use submission::{BookingSubmission, submit};
