// Copyright (C) 2026 PawCare Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use crate::{PriorBookingDto, SelectionsDto, WizardStateDto};

pub fn create_recurring_selections_dto() -> SelectionsDto {
    SelectionsDto {
        pet_id: Some(String::from("pet-rex")),
        service_id: Some(String::from("svc-walk")),
        unit_price: Some(String::from("300")),
        address_id: Some(String::from("addr-home")),
        booking_type: Some(String::from("recurring")),
        start_date: Some(String::from("2024-01-01")),
        end_date: Some(String::from("2024-01-15")),
        time: None,
        time_slots: vec![String::from("17:00"), String::from("09:00")],
        pattern: String::from("weekly_1_monday,wednesday"),
    }
}

pub fn create_one_time_selections_dto() -> SelectionsDto {
    SelectionsDto {
        booking_type: Some(String::from("one_time")),
        start_date: Some(String::from("2024-03-15")),
        end_date: None,
        time: Some(String::from("10:00")),
        time_slots: Vec::new(),
        pattern: String::new(),
        ..create_recurring_selections_dto()
    }
}

pub fn create_state_dto(step: &str, selections: SelectionsDto) -> WizardStateDto {
    WizardStateDto {
        flow: String::from("flat"),
        step: step.to_string(),
        sub_step: None,
        selections,
    }
}

pub fn create_prior_booking_dto() -> PriorBookingDto {
    PriorBookingDto {
        pet_id: String::from("pet-rex"),
        service_id: String::from("svc-walk"),
        unit_price: String::from("300.00"),
        address_id: String::from("addr-home"),
        booking_type: String::from("recurring"),
        time: None,
        time_slots: vec![String::from("09:00")],
        pattern: String::from("monthly_1_2_tuesday"),
    }
}
