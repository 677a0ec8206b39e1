// Copyright (C) 2026 PawCare Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::create_recurring_selections_dto;
use crate::{
    ApiError, ReturnQuery, decode_return_query, encode_return_query, selections_from_dto,
};
use pawcare::Selections;
use pawcare_domain::BookingKind;
use time::macros::date;

#[test]
fn test_return_query_carries_a_recurring_draft() {
    let selections: Selections = selections_from_dto(create_recurring_selections_dto()).unwrap();

    let encoded: String = encode_return_query(&selections).unwrap();
    let decoded: Selections = decode_return_query(&encoded)
        .unwrap()
        .into_selections()
        .unwrap();

    assert_eq!(decoded, selections);
}

#[test]
fn test_return_query_uses_navigation_parameter_names() {
    let selections: Selections = selections_from_dto(create_recurring_selections_dto()).unwrap();

    let query: ReturnQuery = ReturnQuery::from_selections(&selections);

    assert_eq!(query.date.as_deref(), Some("2024-01-01"));
    assert_eq!(query.times.as_deref(), Some("09:00,17:00"));
    assert_eq!(query.pattern.as_deref(), Some("weekly_1_monday,wednesday"));
    assert_eq!(query.time, None);
    assert_eq!(query.flow, None);
}

#[test]
fn test_decode_accepts_leading_question_mark() {
    let query: ReturnQuery =
        decode_return_query("?pet_id=pet-rex&booking_type=one_time&date=2024-03-15&time=10%3A00")
            .unwrap();
    let selections: Selections = query.into_selections().unwrap();

    assert_eq!(selections.booking_kind, Some(BookingKind::OneTime));
    assert_eq!(selections.start_date, Some(date!(2024 - 03 - 15)));
    assert_eq!(selections.time.map(|t| t.to_string()).as_deref(), Some("10:00"));
    assert_eq!(selections.service, None);
}

#[test]
fn test_decode_treats_blank_parameters_as_unset() {
    let query: ReturnQuery = decode_return_query("pet_id=&date=&times=").unwrap();
    let selections: Selections = query.into_selections().unwrap();

    assert_eq!(selections, Selections::default());
}

#[test]
fn test_decode_reports_bad_parameter() {
    let query: ReturnQuery = decode_return_query("date=15-03-2024").unwrap();

    let result: Result<Selections, ApiError> = query.into_selections();

    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { ref field, .. }) if field == "start_date"
    ));
}
