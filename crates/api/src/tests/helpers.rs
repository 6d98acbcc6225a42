// Copyright (C) 2026 The Horas Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::auth::{AuthenticatedActor, Role};
use horas_domain::{CalendarDate, DayStructure, ElementType, HourName, HourStructure};
use horas_persistence::{Persistence, UserData};

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

pub fn seeded_persistence() -> Persistence {
    let mut persistence = persistence();
    persistence.seed_day(&epiphany_structure()).unwrap();
    persistence
}

pub fn make_user(
    persistence: &mut Persistence,
    username: &str,
    role: Role,
) -> (AuthenticatedActor, UserData) {
    let user_id = persistence
        .create_user(username, &format!("{username} (display)"), "secreta", role.as_str())
        .unwrap();
    let user = persistence.get_user_by_id(user_id).unwrap().unwrap();
    (
        AuthenticatedActor::new(user_id, username.to_string(), role),
        user,
    )
}
