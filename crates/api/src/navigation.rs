// Copyright (C) 2026 PawCare Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Return-navigation query strings.
//!
//! When the customer leaves for payment and comes back, the draft is
//! carried in the URL rather than stored server-side. A decoded query
//! always resumes on the review step.

use crate::conversion::{selections_from_dto, selections_to_dto};
use crate::error::ApiError;
use crate::request_response::SelectionsDto;
use pawcare::Selections;
use serde::{Deserialize, Serialize};

/// The return-navigation query parameters.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReturnQuery {
    /// `flat` or `split_schedule`; not part of the encoded draft.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flow: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pet_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booking_type: Option<String>,
    /// Start date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    /// Single time of a one-time booking.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    /// Comma-separated daily time slots.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub times: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
}

impl ReturnQuery {
    /// Captures the selections as query parameters.
    #[must_use]
    pub fn from_selections(selections: &Selections) -> Self {
        let dto: SelectionsDto = selections_to_dto(selections);
        Self {
            flow: None,
            pet_id: dto.pet_id,
            service_id: dto.service_id,
            unit_price: dto.unit_price,
            address_id: dto.address_id,
            booking_type: dto.booking_type,
            date: dto.start_date,
            end_date: dto.end_date,
            time: dto.time,
            times: (!dto.time_slots.is_empty()).then(|| dto.time_slots.join(",")),
            pattern: (!dto.pattern.is_empty()).then_some(dto.pattern),
        }
    }

    /// Rebuilds validated selections from the query parameters.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidInput` naming the first parameter that fails
    /// to parse.
    pub fn into_selections(self) -> Result<Selections, ApiError> {
        let time_slots: Vec<String> = self
            .times
            .as_deref()
            .map(|csv| csv.split(',').map(|t| t.trim().to_string()).collect())
            .unwrap_or_default();
        selections_from_dto(SelectionsDto {
            pet_id: self.pet_id,
            service_id: self.service_id,
            unit_price: self.unit_price,
            address_id: self.address_id,
            booking_type: self.booking_type,
            start_date: self.date,
            end_date: self.end_date,
            time: self.time,
            time_slots,
            pattern: self.pattern.unwrap_or_default(),
        })
    }
}

/// Encodes selections as a URL query string (without the leading `?`).
///
/// # Errors
///
/// Returns `ApiError::Internal` if the parameters cannot be serialized.
pub fn encode_return_query(selections: &Selections) -> Result<String, ApiError> {
    serde_urlencoded::to_string(ReturnQuery::from_selections(selections)).map_err(|e| {
        ApiError::Internal {
            message: format!("Failed to encode return query: {e}"),
        }
    })
}

/// Decodes a URL query string (without the leading `?`).
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` if the query is malformed or a parameter
/// fails to parse.
pub fn decode_return_query(query: &str) -> Result<ReturnQuery, ApiError> {
    serde_urlencoded::from_str(query.trim_start_matches('?'))
        .map_err(|e| ApiError::invalid_input("query", e.to_string()))
}
