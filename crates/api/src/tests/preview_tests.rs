// Copyright (C) 2026 PawCare Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{ApiError, SchedulePreviewRequest, SchedulePreviewResponse, preview_schedule};

fn create_preview_request(pattern: &str, start: &str, end: &str) -> SchedulePreviewRequest {
    SchedulePreviewRequest {
        pattern: pattern.to_string(),
        start_date: start.to_string(),
        end_date: Some(end.to_string()),
        time_slots: vec![String::from("09:00"), String::from("17:00")],
        unit_price: String::from("300"),
    }
}

#[test]
fn test_preview_weekly_schedule() {
    let request: SchedulePreviewRequest =
        create_preview_request("weekly_1_monday,wednesday", "2024-01-01", "2024-01-15");

    let response: SchedulePreviewResponse = preview_schedule(request).unwrap();

    assert_eq!(
        response.session_dates,
        vec![
            "2024-01-01",
            "2024-01-03",
            "2024-01-08",
            "2024-01-10",
            "2024-01-15"
        ]
    );
    assert_eq!(response.sessions_per_day, 2);
    assert_eq!(response.total_sessions, 10);
    assert_eq!(response.unit_price, "300.00");
    assert_eq!(response.total_price, "3000.00");
    assert_eq!(response.pattern_label, "Every week on Monday, Wednesday");
    assert!(response.pattern_recognized);
}

#[test]
fn test_preview_monthly_last_friday() {
    let request: SchedulePreviewRequest =
        create_preview_request("monthly_1_last_friday", "2024-02-01", "2024-02-29");

    let response: SchedulePreviewResponse = preview_schedule(request).unwrap();

    assert_eq!(response.session_dates, vec!["2024-02-23"]);
    assert_eq!(response.pattern_label, "Last Friday of every month");
}

#[test]
fn test_preview_unrecognized_pattern_yields_no_sessions() {
    let request: SchedulePreviewRequest =
        create_preview_request("every_other_tuesday", "2024-01-01", "2024-03-01");

    let response: SchedulePreviewResponse = preview_schedule(request).unwrap();

    assert!(response.session_dates.is_empty());
    assert_eq!(response.total_sessions, 0);
    assert_eq!(response.total_price, "0.00");
    assert!(!response.pattern_recognized);
}

#[test]
fn test_preview_blank_pattern_is_one_time() {
    let request: SchedulePreviewRequest = SchedulePreviewRequest {
        pattern: String::new(),
        end_date: None,
        ..create_preview_request("", "2024-03-15", "")
    };

    let response: SchedulePreviewResponse = preview_schedule(request).unwrap();

    assert_eq!(response.session_dates, vec!["2024-03-15"]);
    assert_eq!(response.total_sessions, 1);
    assert_eq!(response.total_price, "300.00");
    assert_eq!(response.pattern_label, "One-time");
}

#[test]
fn test_preview_recurring_requires_end_date() {
    let request: SchedulePreviewRequest = SchedulePreviewRequest {
        end_date: None,
        ..create_preview_request("weekly_1_friday", "2024-01-01", "")
    };

    let result: Result<SchedulePreviewResponse, ApiError> = preview_schedule(request);

    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { ref field, .. }) if field == "end_date"
    ));
}

#[test]
fn test_preview_recurring_requires_time_slots() {
    let request: SchedulePreviewRequest = SchedulePreviewRequest {
        time_slots: Vec::new(),
        ..create_preview_request("weekly_1_monday,wednesday", "2024-01-01", "2024-01-15")
    };

    let result: Result<SchedulePreviewResponse, ApiError> = preview_schedule(request);

    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { ref field, .. }) if field == "time_slots"
    ));
}

#[test]
fn test_preview_rejects_bad_start_date() {
    let request: SchedulePreviewRequest =
        create_preview_request("weekly_1_friday", "2024-13-01", "2024-12-31");

    let result: Result<SchedulePreviewResponse, ApiError> = preview_schedule(request);

    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { ref field, .. }) if field == "start_date"
    ));
}

#[test]
fn test_preview_rejects_bad_price() {
    let request: SchedulePreviewRequest = SchedulePreviewRequest {
        unit_price: String::from("-5"),
        ..create_preview_request("weekly_1_friday", "2024-01-01", "2024-12-31")
    };

    let result: Result<SchedulePreviewResponse, ApiError> = preview_schedule(request);

    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { ref field, .. }) if field == "unit_price"
    ));
}
