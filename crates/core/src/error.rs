// Copyright (C) 2026 PawCare Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::step::Step;

/// Errors raised by the wizard outside of ordinary transitions.
///
/// Transitions themselves never fail; a blocked `Next` is reported as a
/// [`crate::TransitionOutcome`]. These errors cover submission and decoding
/// step names from outside the crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Submission was attempted before reaching the review step.
    NotAtReview {
        /// The step the wizard was on.
        step: Step,
    },
    /// Submission was attempted while a step was still incomplete.
    IncompleteStep {
        /// The first incomplete step.
        step: Step,
    },
    /// A step name was not recognized.
    UnknownStep(String),
    /// A sub-step name was not recognized.
    UnknownSubStep(String),
    /// A flow variant name was not recognized.
    UnknownFlow(String),
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotAtReview { step } => {
                write!(f, "Booking can only be submitted from review, not '{step}'")
            }
            Self::IncompleteStep { step } => {
                write!(f, "Booking step '{step}' is incomplete")
            }
            Self::UnknownStep(name) => write!(f, "Unknown wizard step: '{name}'"),
            Self::UnknownSubStep(name) => write!(f, "Unknown schedule sub-step: '{name}'"),
            Self::UnknownFlow(name) => write!(f, "Unknown booking flow: '{name}'"),
        }
    }
}

impl std::error::Error for CoreError {}
