// Copyright (C) 2026 The Horas Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use horas_audit::Actor;
use horas_domain::{
    CalendarDate, Day, DayStructure, ElementType, HourName, HourStructure,
};

pub fn actor() -> Actor {
    Actor::new(1, "ana".to_string())
}

pub fn epiphany() -> Day {
    DayStructure {
        date: CalendarDate::parse("2025-01-06").unwrap(),
        liturgical_id: "epifania".to_string(),
        hours: vec![
            HourStructure {
                name: HourName::OfficeOfReadings,
                element_types: vec![
                    ElementType::InvitatoryAntiphon,
                    ElementType::Hymn,
                    ElementType::Reading1,
                    ElementType::Responsory1,
                ],
            },
            HourStructure {
                name: HourName::Lauds,
                element_types: vec![
                    ElementType::Hymn,
                    ElementType::PsalmAntiphon1,
                    ElementType::Psalm1,
                    ElementType::Prayer,
                ],
            },
            HourStructure {
                name: HourName::Vespers,
                element_types: vec![ElementType::Hymn, ElementType::Prayer],
            },
        ],
    }
    .into_day()
}
