// Copyright (C) 2026 The Horas Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{actor, epiphany};
use crate::{Command, CoreError, apply};
use horas_audit::AuditField;
use horas_domain::{DomainError, HourName, ReviewStatus};
use time::macros::datetime;

#[test]
fn test_set_status_updates_element_and_records_audit() {
    let day = epiphany();
    let now = datetime!(2026-03-01 10:15:30 UTC);

    let result = apply(
        &day,
        &Command::SetStatus {
            hour: HourName::Lauds,
            index: 1,
            status: ReviewStatus::Green,
        },
        &actor(),
        now,
    )
    .unwrap();

    assert_eq!(
        result.new_day.element(HourName::Lauds, 1).unwrap().status,
        ReviewStatus::Green
    );
    // The input day is untouched.
    assert_eq!(
        day.element(HourName::Lauds, 1).unwrap().status,
        ReviewStatus::Unset
    );

    let entry = &result.audit_entry;
    assert_eq!(entry.entry_id, None);
    assert_eq!(entry.field, AuditField::Status);
    assert_eq!(entry.value_before, "");
    assert_eq!(entry.value_after, "verde");
    assert_eq!(entry.date_of_change, "2026-03-01");
    assert_eq!(entry.time_of_change, "10:15:30");
    assert_eq!(entry.actor_name, "ana");
    assert_eq!(entry.date.to_string(), "2025-01-06");
}

#[test]
fn test_audit_captures_previous_status() {
    let day = epiphany();
    let now = datetime!(2026-03-01 10:00:00 UTC);
    let first = apply(
        &day,
        &Command::SetStatus {
            hour: HourName::Vespers,
            index: 0,
            status: ReviewStatus::Yellow,
        },
        &actor(),
        now,
    )
    .unwrap();

    let second = apply(
        &first.new_day,
        &Command::SetStatus {
            hour: HourName::Vespers,
            index: 0,
            status: ReviewStatus::Red,
        },
        &actor(),
        now,
    )
    .unwrap();

    assert_eq!(second.audit_entry.value_before, "amarillo");
    assert_eq!(second.audit_entry.value_after, "rojo");
}

#[test]
fn test_last_write_wins_even_when_identical() {
    let day = epiphany();
    let now = datetime!(2026-03-01 10:00:00 UTC);
    let command = Command::SetStatus {
        hour: HourName::Lauds,
        index: 0,
        status: ReviewStatus::Green,
    };

    let first = apply(&day, &command, &actor(), now).unwrap();
    let second = apply(&first.new_day, &command, &actor(), now).unwrap();

    // A no-op change is still recorded.
    assert_eq!(second.audit_entry.value_before, "verde");
    assert_eq!(second.audit_entry.value_after, "verde");
}

#[test]
fn test_set_observations_records_before_and_after() {
    let day = epiphany();
    let now = datetime!(2026-03-01 10:00:00 UTC);

    let first = apply(
        &day,
        &Command::SetObservations {
            hour: HourName::OfficeOfReadings,
            index: 2,
            observations: "falta la cita".to_string(),
        },
        &actor(),
        now,
    )
    .unwrap();

    let second = apply(
        &first.new_day,
        &Command::SetObservations {
            hour: HourName::OfficeOfReadings,
            index: 2,
            observations: "corregido".to_string(),
        },
        &actor(),
        now,
    )
    .unwrap();

    assert_eq!(second.audit_entry.field, AuditField::Observations);
    assert_eq!(second.audit_entry.value_before, "falta la cita");
    assert_eq!(second.audit_entry.value_after, "corregido");
    assert_eq!(
        second
            .new_day
            .element(HourName::OfficeOfReadings, 2)
            .unwrap()
            .observations,
        "corregido"
    );
}

#[test]
fn test_unknown_hour_is_rejected() {
    let day = epiphany();
    let err = apply(
        &day,
        &Command::SetStatus {
            hour: HourName::Compline,
            index: 0,
            status: ReviewStatus::Green,
        },
        &actor(),
        datetime!(2026-03-01 10:00:00 UTC),
    )
    .unwrap_err();

    assert!(matches!(
        err,
        CoreError::DomainViolation(DomainError::HourNotFound { .. })
    ));
}

#[test]
fn test_out_of_range_index_is_rejected() {
    let day = epiphany();
    let err = apply(
        &day,
        &Command::SetObservations {
            hour: HourName::Vespers,
            index: 9,
            observations: String::new(),
        },
        &actor(),
        datetime!(2026-03-01 10:00:00 UTC),
    )
    .unwrap_err();

    assert!(matches!(
        err,
        CoreError::DomainViolation(DomainError::ElementNotFound { index: 9, .. })
    ));
}
