// Copyright (C) 2026 The Horas Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::Persistence;
use horas::{Command, TransitionResult, apply};
use horas_audit::Actor;
use horas_domain::{
    CalendarDate, Day, DayStructure, ElementType, HourName, HourStructure, ReviewStatus,
};
use time::macros::datetime;

pub fn persistence() -> Persistence {
    Persistence::new_in_memory().expect("Failed to create in-memory database")
}

pub fn epiphany_structure() -> DayStructure {
    DayStructure {
        date: CalendarDate::parse("2025-01-06").unwrap(),
        liturgical_id: "epifania".to_string(),
        hours: vec![
            HourStructure {
                name: HourName::Lauds,
                element_types: vec![
                    ElementType::Hymn,
                    ElementType::PsalmAntiphon1,
                    ElementType::Psalm1,
                ],
            },
            HourStructure {
                name: HourName::Vespers,
                element_types: vec![ElementType::Hymn, ElementType::Prayer],
            },
        ],
    }
}

pub fn seeded_persistence() -> (Persistence, Day) {
    let mut persistence = persistence();
    let structure = epiphany_structure();
    assert!(persistence.seed_day(&structure).unwrap());
    let day = persistence.get_day(structure.date).unwrap();
    (persistence, day)
}

pub fn status_transition(day: &Day, hour: HourName, index: u32) -> TransitionResult {
    apply(
        day,
        &Command::SetStatus {
            hour,
            index,
            status: ReviewStatus::Green,
        },
        &Actor::new(1, "ana".to_string()),
        datetime!(2026-03-01 10:15:30 UTC),
    )
    .unwrap()
}
