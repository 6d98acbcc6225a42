// Copyright (C) 2026 The Horas Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{seeded_persistence, status_transition};
use crate::PersistenceError;
use horas::{Command, apply};
use horas_audit::Actor;
use horas_domain::{HourName, ReviewStatus};
use time::macros::datetime;

#[test]
fn test_apply_transition_persists_element_and_audit() {
    let (mut persistence, day) = seeded_persistence();

    let result = status_transition(&day, HourName::Lauds, 1);
    let entry_id = persistence.apply_transition(&result).unwrap();
    assert!(entry_id > 0);

    let reloaded = persistence.get_day(day.date).unwrap();
    assert_eq!(
        reloaded.element(HourName::Lauds, 1).unwrap().status,
        ReviewStatus::Green
    );

    let log = persistence.get_audit_log().unwrap();
    assert_eq!(log.len(), 1);
    assert_eq!(log[0].entry_id, Some(entry_id));
    assert_eq!(log[0].value_before, "");
    assert_eq!(log[0].value_after, "verde");
}

#[test]
fn test_observations_round_trip_through_storage() {
    let (mut persistence, day) = seeded_persistence();

    let result = apply(
        &day,
        &Command::SetObservations {
            hour: HourName::Vespers,
            index: 1,
            observations: "revisar la doxología".to_string(),
        },
        &Actor::new(1, "ana".to_string()),
        datetime!(2026-03-01 10:00:00 UTC),
    )
    .unwrap();
    persistence.apply_transition(&result).unwrap();

    let reloaded = persistence.get_day(day.date).unwrap();
    assert_eq!(
        reloaded.element(HourName::Vespers, 1).unwrap().observations,
        "revisar la doxología"
    );
}

#[test]
fn test_transition_for_unseeded_day_writes_nothing() {
    let (mut persistence, day) = seeded_persistence();

    // Build a transition against a day that was never seeded.
    let mut other_day = day;
    other_day.date = horas_domain::CalendarDate::parse("2027-05-05").unwrap();
    let result = status_transition(&other_day, HourName::Lauds, 0);

    let err = persistence.apply_transition(&result).unwrap_err();
    assert!(matches!(err, PersistenceError::DayNotFound(_)));

    // The rollback leaves the audit trail empty.
    assert!(persistence.get_audit_log().unwrap().is_empty());
}

#[test]
fn test_successive_transitions_accumulate_in_audit_trail() {
    let (mut persistence, day) = seeded_persistence();

    let first = status_transition(&day, HourName::Lauds, 0);
    persistence.apply_transition(&first).unwrap();
    let second = status_transition(&first.new_day, HourName::Lauds, 1);
    persistence.apply_transition(&second).unwrap();

    let log = persistence.get_audit_log().unwrap();
    assert_eq!(log.len(), 2);
}
