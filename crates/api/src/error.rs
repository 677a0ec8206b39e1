// Copyright (C) 2026 PawCare Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use pawcare::CoreError;
use pawcare_domain::DomainError;
use thiserror::Error;

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Invalid input was provided.
    #[error("Invalid input for field '{field}': {message}")]
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A booking rule was violated.
    #[error("Booking rule violation ({rule}): {message}")]
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// The booking cannot be submitted until a step is completed.
    #[error("Booking is incomplete: step '{step}' still needs input")]
    IncompleteBooking {
        /// The first incomplete step.
        step: String,
    },
    /// An internal error occurred.
    #[error("Internal error: {message}")]
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl ApiError {
    /// Shorthand for an [`ApiError::InvalidInput`] on `field`.
    #[must_use]
    pub fn invalid_input(field: &str, message: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// Translates a domain error into an API error.
///
/// The domain error does not say which request field it came from, so the
/// caller passes it in.
#[must_use]
pub fn translate_domain_error(field: &str, err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidIdentifier { kind, value } => ApiError::InvalidInput {
            field: field.to_string(),
            message: format!("'{value}' is not a valid {kind} identifier"),
        },
        DomainError::InvalidTimeSlot { value, error } => ApiError::InvalidInput {
            field: field.to_string(),
            message: format!("'{value}' is not a valid HH:MM time: {error}"),
        },
        DomainError::InvalidPrice(value) => ApiError::InvalidInput {
            field: field.to_string(),
            message: format!("'{value}' is not a valid price"),
        },
        DomainError::InvalidBookingKind(_) | DomainError::DateParseError { .. } => {
            ApiError::InvalidInput {
                field: field.to_string(),
                message: err.to_string(),
            }
        }
    }
}

/// Translates a core error into an API error.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::NotAtReview { step } => ApiError::DomainRuleViolation {
            rule: String::from("submit_from_review"),
            message: format!("Booking can only be submitted from review, not '{step}'"),
        },
        CoreError::IncompleteStep { step } => ApiError::IncompleteBooking {
            step: step.to_string(),
        },
        CoreError::UnknownStep(_) => ApiError::InvalidInput {
            field: String::from("step"),
            message: err.to_string(),
        },
        CoreError::UnknownSubStep(_) => ApiError::InvalidInput {
            field: String::from("sub_step"),
            message: err.to_string(),
        },
        CoreError::UnknownFlow(_) => ApiError::InvalidInput {
            field: String::from("flow"),
            message: err.to_string(),
        },
    }
}
